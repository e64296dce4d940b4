use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema, Clone, Copy, Debug, PartialEq)]
pub struct GeolocationDto {
    pub lat: f64,
    pub long: f64,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
pub struct ApartmentDto {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub floor_area: f64,
    pub price_per_month: f64,
    pub number_of_rooms: i32,
    pub geolocation_coordinates: GeolocationDto,
    pub associated_realtor: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
pub struct CreateApartmentDto {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub floor_area: f64,
    pub price_per_month: f64,
    pub number_of_rooms: i32,
    pub geolocation_coordinates: GeolocationDto,
    #[serde(default)]
    pub associated_realtor: String,
}

/// Partial update, absent fields keep their stored value.
#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, Default)]
pub struct UpdateApartmentDto {
    pub name: Option<String>,
    pub description: Option<String>,
    pub floor_area: Option<f64>,
    pub price_per_month: Option<f64>,
    pub number_of_rooms: Option<i32>,
    pub geolocation_coordinates: Option<GeolocationDto>,
    pub associated_realtor: Option<String>,
}
