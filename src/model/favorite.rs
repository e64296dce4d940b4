use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
pub struct FavoriteDto {
    pub id: i32,
    pub user_id: i32,
    pub apartment_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Copy, Debug)]
pub struct CreateFavoriteDto {
    pub user_id: i32,
    pub apartment_id: i32,
}
