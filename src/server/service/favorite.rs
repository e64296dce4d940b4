use sea_orm::{DatabaseConnection, DbErr, SqlErr};

use crate::server::{
    data::{
        apartment::ApartmentRepository, apartment_user::ApartmentUserRepository,
        favorite::FavoriteRepository,
    },
    error::AppError,
    model::favorite::Favorite,
    service::apartment::APARTMENT_NOT_FOUND,
};

pub const FAVORITE_USER_NOT_FOUND: &str = "user not exist.";
pub const FAVORITE_ALREADY_EXISTS: &str = "apartment already exist in favorite.";
pub const FAVORITES_OF_USER_NOT_FOUND: &str = "user id not exist in favorite.";

pub struct FavoriteService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FavoriteService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Marks an apartment as a favorite of a user
    ///
    /// # Returns
    /// - `Ok(Favorite)` - The created favorite
    /// - `Err(AppError::NotFound)` - User or apartment does not exist
    /// - `Err(AppError::Conflict)` - The pair is already a favorite
    pub async fn add(&self, user_id: i32, apartment_id: i32) -> Result<Favorite, AppError> {
        if ApartmentUserRepository::new(self.db)
            .find_by_id(user_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound(FAVORITE_USER_NOT_FOUND.to_string()));
        }

        if ApartmentRepository::new(self.db)
            .find_by_id(apartment_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound(APARTMENT_NOT_FOUND.to_string()));
        }

        let repo = FavoriteRepository::new(self.db);
        if repo.exists(user_id, apartment_id).await? {
            return Err(AppError::Conflict(FAVORITE_ALREADY_EXISTS.to_string()));
        }

        // A concurrent add can still pass the check above; the unique index decides.
        repo.create(user_id, apartment_id)
            .await
            .map_err(duplicate_favorite)
    }

    pub async fn list(&self) -> Result<Vec<Favorite>, AppError> {
        Ok(FavoriteRepository::new(self.db).get_all().await?)
    }

    /// Returns the favorites of a user, `AppError::NotFound` when there are none
    pub async fn view(&self, user_id: i32) -> Result<Vec<Favorite>, AppError> {
        let favorites = FavoriteRepository::new(self.db)
            .get_by_user_id(user_id)
            .await?;

        if favorites.is_empty() {
            return Err(AppError::NotFound(FAVORITES_OF_USER_NOT_FOUND.to_string()));
        }

        Ok(favorites)
    }

    /// Removes a favorite pair; removing a pair that does not exist succeeds
    pub async fn delete(&self, user_id: i32, apartment_id: i32) -> Result<(), AppError> {
        let removed = FavoriteRepository::new(self.db)
            .delete(user_id, apartment_id)
            .await?;

        if removed == 0 {
            tracing::debug!(user_id, apartment_id, "favorite to delete did not exist");
        }

        Ok(())
    }
}

/// Maps a unique-index violation on the user/apartment pair to `AppError::Conflict`.
pub(crate) fn duplicate_favorite(err: DbErr) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => {
            AppError::Conflict(FAVORITE_ALREADY_EXISTS.to_string())
        }
        _ => AppError::DbErr(err),
    }
}
