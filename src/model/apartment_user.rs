use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
pub struct ApartmentUserDto {
    pub id: i32,
    pub name: String,
    pub user_email: String,
    pub user_address: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
pub struct CreateApartmentUserDto {
    pub name: String,
    pub user_email: String,
    #[serde(default)]
    pub user_address: String,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, Default)]
pub struct UpdateApartmentUserDto {
    pub name: Option<String>,
    pub user_email: Option<String>,
    pub user_address: Option<String>,
}
