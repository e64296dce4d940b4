use sea_orm::DatabaseConnection;

use crate::server::{
    data::apartment_user::ApartmentUserRepository,
    error::AppError,
    model::apartment_user::{
        ApartmentUser, ApartmentUserFilter, CreateApartmentUserParam, UpdateApartmentUserParam,
    },
};

pub const USER_NOT_FOUND: &str = "user Id Not exist.";
pub const USER_NAME_TAKEN: &str = "user already exist.";

pub struct ApartmentUserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ApartmentUserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a user unless a live user already has the same name
    pub async fn create(
        &self,
        param: CreateApartmentUserParam,
    ) -> Result<ApartmentUser, AppError> {
        let repo = ApartmentUserRepository::new(self.db);

        if repo.name_exists(&param.name).await? {
            return Err(AppError::Conflict(USER_NAME_TAKEN.to_string()));
        }

        Ok(repo.create(param).await?)
    }

    /// Lists users matching the filter
    ///
    /// # Returns
    /// - `Ok(Vec<ApartmentUser>)` - At least one matching user
    /// - `Err(AppError::NotFound)` - No user matches
    pub async fn list(&self, filter: &ApartmentUserFilter) -> Result<Vec<ApartmentUser>, AppError> {
        let users = ApartmentUserRepository::new(self.db)
            .get_filtered(filter)
            .await?;

        if users.is_empty() {
            return Err(AppError::NotFound(USER_NOT_FOUND.to_string()));
        }

        Ok(users)
    }

    pub async fn view(&self, id: i32) -> Result<ApartmentUser, AppError> {
        ApartmentUserRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(USER_NOT_FOUND.to_string()))
    }

    pub async fn update(
        &self,
        id: i32,
        param: UpdateApartmentUserParam,
    ) -> Result<ApartmentUser, AppError> {
        ApartmentUserRepository::new(self.db)
            .update(id, param)
            .await?
            .ok_or_else(|| AppError::NotFound(USER_NOT_FOUND.to_string()))
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let user = self.view(id).await?;

        ApartmentUserRepository::new(self.db)
            .soft_delete(user.id)
            .await?;

        Ok(())
    }
}
