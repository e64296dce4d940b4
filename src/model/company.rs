use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
pub struct LocationDto {
    pub id: i32,
    pub name: String,
    pub active: bool,
    pub address: String,
    pub company_id: i32,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
pub struct CompanyDto {
    pub id: i32,
    pub name: String,
    pub active: bool,
    pub locations: Vec<LocationDto>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
