//! Domain & parameter models for apartment user operations

use chrono::{DateTime, Utc};

use crate::model::apartment_user::{
    ApartmentUserDto, CreateApartmentUserDto, UpdateApartmentUserDto,
};

/// A registered apartment user.
#[derive(Debug, Clone, PartialEq)]
pub struct ApartmentUser {
    pub id: i32,
    pub name: String,
    pub user_email: String,
    pub user_address: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ApartmentUser {
    pub fn from_entity(entity: entity::apartment_user::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            user_email: entity.user_email,
            user_address: entity.user_address,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> ApartmentUserDto {
        ApartmentUserDto {
            id: self.id,
            name: self.name,
            user_email: self.user_email,
            user_address: self.user_address,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateApartmentUserParam {
    pub name: String,
    pub user_email: String,
    pub user_address: String,
}

impl From<CreateApartmentUserDto> for CreateApartmentUserParam {
    fn from(dto: CreateApartmentUserDto) -> Self {
        Self {
            name: dto.name,
            user_email: dto.user_email,
            user_address: dto.user_address,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateApartmentUserParam {
    pub name: Option<String>,
    pub user_email: Option<String>,
    pub user_address: Option<String>,
}

impl From<UpdateApartmentUserDto> for UpdateApartmentUserParam {
    fn from(dto: UpdateApartmentUserDto) -> Self {
        Self {
            name: dto.name,
            user_email: dto.user_email,
            user_address: dto.user_address,
        }
    }
}

/// Equality filters for listing users; empty strings are ignored.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApartmentUserFilter {
    pub name: String,
    pub user_email: String,
}
