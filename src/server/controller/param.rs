//! Query string parameters shared by the handlers.

use serde::Deserialize;
use utoipa::IntoParams;

use crate::server::{
    error::AppError,
    model::{
        apartment::{ApartmentFilter, Pagination},
        apartment_user::ApartmentUserFilter,
        car::CarPage,
    },
};

fn default_limit() -> u64 {
    10
}

/// Pagination and equality filters for listing apartments.
#[derive(Deserialize, IntoParams, Debug, Default)]
#[into_params(parameter_in = Query)]
pub struct ApartmentListParam {
    /// Page size (default: 10)
    #[serde(default = "default_limit")]
    pub limit: u64,
    /// Number of apartments to skip (default: 0)
    #[serde(default)]
    pub offset: u64,
    /// Exact number of rooms, 0 to ignore
    #[serde(default, rename = "noOfRooms")]
    pub no_of_rooms: i32,
    /// Exact monthly price, 0 to ignore
    #[serde(default, rename = "pricePerMonth")]
    pub price_per_month: f64,
    /// Exact floor area, 0 to ignore
    #[serde(default, rename = "floorArea")]
    pub floor_area: f64,
}

impl ApartmentListParam {
    /// Returns `AppError::BadRequest` when limit or offset exceed the database's
    /// signed 64-bit range.
    pub fn pagination(&self) -> Result<Pagination, AppError> {
        let max = i64::MAX as u64;
        if self.limit > max || self.offset > max {
            return Err(AppError::BadRequest(format!(
                "limit and offset must not exceed {}",
                max
            )));
        }

        Ok(Pagination {
            limit: self.limit,
            offset: self.offset,
        })
    }

    pub fn filter(&self) -> ApartmentFilter {
        ApartmentFilter {
            floor_area: self.floor_area,
            price_per_month: self.price_per_month,
            number_of_rooms: self.no_of_rooms,
        }
    }
}

/// Equality filters for listing apartment users; empty values are ignored.
#[derive(Deserialize, IntoParams, Debug, Default)]
#[into_params(parameter_in = Query)]
pub struct ApartmentUserListParam {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
}

impl From<ApartmentUserListParam> for ApartmentUserFilter {
    fn from(param: ApartmentUserListParam) -> Self {
        Self {
            name: param.name,
            user_email: param.email,
        }
    }
}

/// Identifies one favorite by its user and apartment.
#[derive(Deserialize, IntoParams, Debug)]
#[into_params(parameter_in = Query)]
pub struct FavoritePairParam {
    pub user_id: i32,
    pub apartment_id: i32,
}

/// Page request for cars.
#[derive(Deserialize, IntoParams, Debug, Default)]
#[into_params(parameter_in = Query)]
pub struct CarListParam {
    /// Page size; below 1 uses 100, above 1000 is clamped
    #[serde(default)]
    pub limit: i64,
    /// Zero-based page index
    #[serde(default)]
    pub page: u64,
}

impl From<CarListParam> for CarPage {
    fn from(param: CarListParam) -> Self {
        CarPage::new(param.limit, param.page)
    }
}
