//! Domain model for a user's favorite apartment

use chrono::{DateTime, Utc};

use crate::model::favorite::FavoriteDto;

/// Link between an apartment user and an apartment they marked as favorite.
#[derive(Debug, Clone, PartialEq)]
pub struct Favorite {
    pub id: i32,
    pub user_id: i32,
    pub apartment_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Favorite {
    pub fn from_entity(entity: entity::user_favorite_apartment::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            apartment_id: entity.apartment_id,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> FavoriteDto {
        FavoriteDto {
            id: self.id,
            user_id: self.user_id,
            apartment_id: self.apartment_id,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}
