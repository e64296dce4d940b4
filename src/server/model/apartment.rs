//! Domain & parameter models for apartment operations
//!
//! Defines the apartment domain model, its create/update parameters and the list
//! filter, and converts the domain model from entity and into DTOs.

use chrono::{DateTime, Utc};

use crate::model::apartment::{
    ApartmentDto, CreateApartmentDto, GeolocationDto, UpdateApartmentDto,
};

/// Latitude/longitude pair of an apartment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geolocation {
    pub lat: f64,
    pub long: f64,
}

impl From<GeolocationDto> for Geolocation {
    fn from(dto: GeolocationDto) -> Self {
        Self {
            lat: dto.lat,
            long: dto.long,
        }
    }
}

/// The apartment domain model
///
/// Only live apartments are ever converted into this model; soft-deleted rows are
/// filtered out by the repository.
#[derive(Debug, Clone, PartialEq)]
pub struct Apartment {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub floor_area: f64,
    pub price_per_month: f64,
    pub number_of_rooms: i32,
    pub geolocation: Geolocation,
    pub associated_realtor: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Apartment {
    /// Converts an entity model to the apartment domain model
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Apartment` - The converted apartment domain model
    pub fn from_entity(entity: entity::apartment::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            floor_area: entity.floor_area,
            price_per_month: entity.price_per_month,
            number_of_rooms: entity.number_of_rooms,
            geolocation: Geolocation {
                lat: entity.geolocation_lat,
                long: entity.geolocation_long,
            },
            associated_realtor: entity.associated_realtor,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    /// Converts the apartment domain model into a DTO for API responses
    pub fn into_dto(self) -> ApartmentDto {
        ApartmentDto {
            id: self.id,
            name: self.name,
            description: self.description,
            floor_area: self.floor_area,
            price_per_month: self.price_per_month,
            number_of_rooms: self.number_of_rooms,
            geolocation_coordinates: GeolocationDto {
                lat: self.geolocation.lat,
                long: self.geolocation.long,
            },
            associated_realtor: self.associated_realtor,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Parameters for creating a new apartment
#[derive(Debug, Clone)]
pub struct CreateApartmentParam {
    pub name: String,
    pub description: String,
    pub floor_area: f64,
    pub price_per_month: f64,
    pub number_of_rooms: i32,
    pub geolocation: Geolocation,
    pub associated_realtor: String,
}

impl From<CreateApartmentDto> for CreateApartmentParam {
    fn from(dto: CreateApartmentDto) -> Self {
        Self {
            name: dto.name,
            description: dto.description,
            floor_area: dto.floor_area,
            price_per_month: dto.price_per_month,
            number_of_rooms: dto.number_of_rooms,
            geolocation: dto.geolocation_coordinates.into(),
            associated_realtor: dto.associated_realtor,
        }
    }
}

/// Parameters for updating an existing apartment
///
/// `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateApartmentParam {
    pub name: Option<String>,
    pub description: Option<String>,
    pub floor_area: Option<f64>,
    pub price_per_month: Option<f64>,
    pub number_of_rooms: Option<i32>,
    pub geolocation: Option<Geolocation>,
    pub associated_realtor: Option<String>,
}

impl From<UpdateApartmentDto> for UpdateApartmentParam {
    fn from(dto: UpdateApartmentDto) -> Self {
        Self {
            name: dto.name,
            description: dto.description,
            floor_area: dto.floor_area,
            price_per_month: dto.price_per_month,
            number_of_rooms: dto.number_of_rooms,
            geolocation: dto.geolocation_coordinates.map(Geolocation::from),
            associated_realtor: dto.associated_realtor,
        }
    }
}

/// Equality filters for listing apartments
///
/// A zero value disables the corresponding filter.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ApartmentFilter {
    pub floor_area: f64,
    pub price_per_month: f64,
    pub number_of_rooms: i32,
}

/// Limit/offset window for list queries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub limit: u64,
    pub offset: u64,
}
