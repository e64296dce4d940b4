//! Favorite apartment data repository
//!
//! Favorites are plain join rows and are hard-deleted.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::favorite::Favorite;

pub struct FavoriteRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FavoriteRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Links a user to an apartment
    ///
    /// # Returns
    /// - `Ok(Favorite)` - The created favorite
    /// - `Err(DbErr)` - Database error, including a violated user/apartment unique index
    pub async fn create(&self, user_id: i32, apartment_id: i32) -> Result<Favorite, DbErr> {
        let now = Utc::now();
        let entity = entity::user_favorite_apartment::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            apartment_id: ActiveValue::Set(apartment_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Favorite::from_entity(entity))
    }

    /// Checks whether the user already marked the apartment as favorite
    pub async fn exists(&self, user_id: i32, apartment_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::UserFavoriteApartment::find()
            .filter(entity::user_favorite_apartment::Column::UserId.eq(user_id))
            .filter(entity::user_favorite_apartment::Column::ApartmentId.eq(apartment_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Returns every favorite ordered by ID
    pub async fn get_all(&self) -> Result<Vec<Favorite>, DbErr> {
        let entities = entity::prelude::UserFavoriteApartment::find()
            .order_by_asc(entity::user_favorite_apartment::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Favorite::from_entity).collect())
    }

    /// Returns the favorites of one user ordered by ID
    pub async fn get_by_user_id(&self, user_id: i32) -> Result<Vec<Favorite>, DbErr> {
        let entities = entity::prelude::UserFavoriteApartment::find()
            .filter(entity::user_favorite_apartment::Column::UserId.eq(user_id))
            .order_by_asc(entity::user_favorite_apartment::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Favorite::from_entity).collect())
    }

    /// Removes the favorite linking the user and the apartment
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of removed rows, zero when the pair did not exist
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, user_id: i32, apartment_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::UserFavoriteApartment::delete_many()
            .filter(entity::user_favorite_apartment::Column::UserId.eq(user_id))
            .filter(entity::user_favorite_apartment::Column::ApartmentId.eq(apartment_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
