//! Apartment user data repository for database operations
//!
//! Provides the `ApartmentUserRepository`. Users are soft-deleted and every read
//! ignores rows whose `deleted_at` is set.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::apartment_user::{
    ApartmentUser, ApartmentUserFilter, CreateApartmentUserParam, UpdateApartmentUserParam,
};

/// Repository providing database operations for apartment users.
pub struct ApartmentUserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ApartmentUserRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new apartment user
    ///
    /// # Returns
    /// - `Ok(ApartmentUser)` - The created user
    /// - `Err(DbErr)` - Database error during insert operation
    pub async fn create(&self, param: CreateApartmentUserParam) -> Result<ApartmentUser, DbErr> {
        let now = Utc::now();
        let entity = entity::apartment_user::ActiveModel {
            name: ActiveValue::Set(param.name),
            user_email: ActiveValue::Set(param.user_email),
            user_address: ActiveValue::Set(param.user_address),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            deleted_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(ApartmentUser::from_entity(entity))
    }

    /// Checks whether a live user already uses the given name
    pub async fn name_exists(&self, name: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::ApartmentUser::find()
            .filter(entity::apartment_user::Column::Name.eq(name))
            .filter(entity::apartment_user::Column::DeletedAt.is_null())
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Lists live users ordered by ID, filtered by name and email when non-empty
    pub async fn get_filtered(
        &self,
        filter: &ApartmentUserFilter,
    ) -> Result<Vec<ApartmentUser>, DbErr> {
        let mut query = entity::prelude::ApartmentUser::find()
            .filter(entity::apartment_user::Column::DeletedAt.is_null());

        if !filter.name.is_empty() {
            query = query.filter(entity::apartment_user::Column::Name.eq(filter.name.as_str()));
        }
        if !filter.user_email.is_empty() {
            query = query.filter(
                entity::apartment_user::Column::UserEmail.eq(filter.user_email.as_str()),
            );
        }

        let entities = query
            .order_by_asc(entity::apartment_user::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(ApartmentUser::from_entity).collect())
    }

    /// Finds a live user by ID
    pub async fn find_by_id(&self, id: i32) -> Result<Option<ApartmentUser>, DbErr> {
        let entity = self.find_live(id).await?;

        Ok(entity.map(ApartmentUser::from_entity))
    }

    /// Applies the provided changes to a live user and bumps `updated_at`
    ///
    /// # Returns
    /// - `Ok(Some(ApartmentUser))` - The updated user as stored
    /// - `Ok(None)` - No live user has this ID
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(
        &self,
        id: i32,
        param: UpdateApartmentUserParam,
    ) -> Result<Option<ApartmentUser>, DbErr> {
        let Some(entity) = self.find_live(id).await? else {
            return Ok(None);
        };

        let mut active = entity.into_active_model();
        if let Some(name) = param.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(user_email) = param.user_email {
            active.user_email = ActiveValue::Set(user_email);
        }
        if let Some(user_address) = param.user_address {
            active.user_address = ActiveValue::Set(user_address);
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        active.update(self.db).await?;

        self.find_by_id(id).await
    }

    /// Soft-deletes a user by stamping `deleted_at`
    pub async fn soft_delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::ApartmentUser::update_many()
            .filter(entity::apartment_user::Column::Id.eq(id))
            .col_expr(
                entity::apartment_user::Column::DeletedAt,
                sea_orm::sea_query::Expr::value(Utc::now()),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }

    async fn find_live(&self, id: i32) -> Result<Option<entity::apartment_user::Model>, DbErr> {
        entity::prelude::ApartmentUser::find_by_id(id)
            .filter(entity::apartment_user::Column::DeletedAt.is_null())
            .one(self.db)
            .await
    }
}
