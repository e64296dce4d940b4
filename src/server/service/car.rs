use sea_orm::DatabaseConnection;

use crate::server::{
    data::car::CarRepository,
    error::AppError,
    model::car::{Car, CarPage, CreateCarParam, UpdateCarParam},
};

pub const CAR_NOT_FOUND: &str = "car Id not exist.";
pub const CAR_ALREADY_EXISTS: &str = "employee name or car number already exists.";

pub struct CarService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CarService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a car unless the employee name or car number is already taken,
    /// compared case-insensitively
    pub async fn create(&self, param: CreateCarParam) -> Result<Car, AppError> {
        let repo = CarRepository::new(self.db);

        if repo
            .name_or_number_exists(&param.emp_name, &param.car_number)
            .await?
        {
            return Err(AppError::Conflict(CAR_ALREADY_EXISTS.to_string()));
        }

        Ok(repo.create(param).await?)
    }

    pub async fn list(&self, page: CarPage) -> Result<Vec<Car>, AppError> {
        Ok(CarRepository::new(self.db).get_paginated(page).await?)
    }

    pub async fn view(&self, id: i32) -> Result<Car, AppError> {
        CarRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(CAR_NOT_FOUND.to_string()))
    }

    pub async fn update(&self, id: i32, param: UpdateCarParam) -> Result<Car, AppError> {
        CarRepository::new(self.db)
            .update(id, param)
            .await?
            .ok_or_else(|| AppError::NotFound(CAR_NOT_FOUND.to_string()))
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let car = self.view(id).await?;

        CarRepository::new(self.db).delete(car.id).await?;

        Ok(())
    }
}
