use sea_orm::DatabaseConnection;

use crate::server::{
    data::apartment::ApartmentRepository,
    error::AppError,
    model::apartment::{
        Apartment, ApartmentFilter, CreateApartmentParam, Pagination, UpdateApartmentParam,
    },
};

pub const APARTMENT_NOT_FOUND: &str = "Apartment Id not exist.";
pub const APARTMENT_NAME_TAKEN: &str = "name already exist.";

pub struct ApartmentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ApartmentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an apartment unless a live apartment already has the same name
    ///
    /// # Returns
    /// - `Ok(Apartment)` - The created apartment
    /// - `Err(AppError::Conflict)` - Name already in use
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn create(&self, param: CreateApartmentParam) -> Result<Apartment, AppError> {
        let repo = ApartmentRepository::new(self.db);

        if repo.name_exists(&param.name).await? {
            return Err(AppError::Conflict(APARTMENT_NAME_TAKEN.to_string()));
        }

        Ok(repo.create(param).await?)
    }

    pub async fn list(
        &self,
        pagination: Pagination,
        filter: ApartmentFilter,
    ) -> Result<Vec<Apartment>, AppError> {
        Ok(ApartmentRepository::new(self.db)
            .get_paginated(pagination, filter)
            .await?)
    }

    /// Returns a live apartment or `AppError::NotFound`
    pub async fn view(&self, id: i32) -> Result<Apartment, AppError> {
        ApartmentRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(APARTMENT_NOT_FOUND.to_string()))
    }

    pub async fn update(
        &self,
        id: i32,
        param: UpdateApartmentParam,
    ) -> Result<Apartment, AppError> {
        ApartmentRepository::new(self.db)
            .update(id, param)
            .await?
            .ok_or_else(|| AppError::NotFound(APARTMENT_NOT_FOUND.to_string()))
    }

    /// Soft-deletes a live apartment, `AppError::NotFound` when there is none
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let apartment = self.view(id).await?;

        ApartmentRepository::new(self.db)
            .soft_delete(apartment.id)
            .await?;

        Ok(())
    }
}
