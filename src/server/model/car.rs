//! Domain & parameter models for employee car operations

use crate::model::car::{CarDto, CreateCarDto, UpdateCarDto};

/// Default page size when the requested limit is below one.
pub const DEFAULT_CAR_LIMIT: u64 = 100;
/// Upper bound for a single page of cars.
pub const MAX_CAR_LIMIT: u64 = 1000;

#[derive(Debug, Clone, PartialEq)]
pub struct Car {
    pub id: i32,
    pub emp_name: String,
    pub car_number: String,
    pub car_model: String,
}

impl Car {
    pub fn from_entity(entity: entity::emp_car::Model) -> Self {
        Self {
            id: entity.id,
            emp_name: entity.emp_name,
            car_number: entity.car_number,
            car_model: entity.car_model,
        }
    }

    pub fn into_dto(self) -> CarDto {
        CarDto {
            id: self.id,
            emp_name: self.emp_name,
            car_number: self.car_number,
            car_model: self.car_model,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateCarParam {
    pub emp_name: String,
    pub car_number: String,
    pub car_model: String,
}

impl From<CreateCarDto> for CreateCarParam {
    fn from(dto: CreateCarDto) -> Self {
        Self {
            emp_name: dto.emp_name,
            car_number: dto.car_number,
            car_model: dto.car_model,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateCarParam {
    pub emp_name: Option<String>,
    pub car_number: Option<String>,
    pub car_model: Option<String>,
}

impl From<UpdateCarDto> for UpdateCarParam {
    fn from(dto: UpdateCarDto) -> Self {
        Self {
            emp_name: dto.emp_name,
            car_number: dto.car_number,
            car_model: dto.car_model,
        }
    }
}

/// Page request for cars, normalized through [`CarPage::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarPage {
    pub limit: u64,
    pub page: u64,
}

impl CarPage {
    /// Normalizes the requested limit.
    ///
    /// A limit below one falls back to [`DEFAULT_CAR_LIMIT`] and anything above
    /// [`MAX_CAR_LIMIT`] is clamped.
    pub fn new(limit: i64, page: u64) -> Self {
        let limit = if limit < 1 {
            DEFAULT_CAR_LIMIT
        } else {
            (limit as u64).min(MAX_CAR_LIMIT)
        };

        Self { limit, page }
    }

    /// `limit * page`, capped at the largest offset the database accepts.
    pub fn offset(&self) -> u64 {
        self.limit.saturating_mul(self.page).min(i64::MAX as u64)
    }
}
