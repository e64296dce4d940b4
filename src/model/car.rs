use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
pub struct CarDto {
    pub id: i32,
    pub emp_name: String,
    pub car_number: String,
    pub car_model: String,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
pub struct CreateCarDto {
    pub emp_name: String,
    pub car_number: String,
    pub car_model: String,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, Default)]
pub struct UpdateCarDto {
    pub emp_name: Option<String>,
    pub car_number: Option<String>,
    pub car_model: Option<String>,
}

/// One page of cars together with the page index that was requested.
#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
pub struct CarPageDto {
    pub emp_car: Vec<CarDto>,
    pub page: u64,
}
