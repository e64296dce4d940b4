//! Company and location domain models

use chrono::{DateTime, Utc};

use crate::model::company::{CompanyDto, LocationDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    pub id: i32,
    pub name: String,
    pub active: bool,
    pub address: String,
    pub company_id: i32,
}

impl Location {
    pub fn from_entity(entity: entity::location::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            active: entity.active,
            address: entity.address,
            company_id: entity.company_id,
        }
    }

    pub fn into_dto(self) -> LocationDto {
        LocationDto {
            id: self.id,
            name: self.name,
            active: self.active,
            address: self.address,
            company_id: self.company_id,
        }
    }
}

/// A company together with every location it operates.
#[derive(Debug, Clone, PartialEq)]
pub struct Company {
    pub id: i32,
    pub name: String,
    pub active: bool,
    pub locations: Vec<Location>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Company {
    /// Builds the domain model from a company row and its location rows
    pub fn from_entity(
        entity: entity::company::Model,
        locations: Vec<entity::location::Model>,
    ) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            active: entity.active,
            locations: locations.into_iter().map(Location::from_entity).collect(),
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> CompanyDto {
        CompanyDto {
            id: self.id,
            name: self.name,
            active: self.active,
            locations: self
                .locations
                .into_iter()
                .map(Location::into_dto)
                .collect(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}
