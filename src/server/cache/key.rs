//! Cache key layout.
//!
//! Every resource has its own namespace so ids of different tables never collide.
//! List keys embed the query that produced them and share a prefix, which is what
//! writes invalidate.

use crate::server::model::{
    apartment::{ApartmentFilter, Pagination},
    apartment_user::ApartmentUserFilter,
};

pub const APARTMENT_LIST_PREFIX: &str = "apartments:list:";
pub const APARTMENT_USER_LIST_PREFIX: &str = "apartment_users:list:";
pub const FAVORITE_LIST: &str = "favorites:list";

pub fn apartment(id: i32) -> String {
    format!("apartment:{}", id)
}

pub fn apartment_list(pagination: Pagination, filter: ApartmentFilter) -> String {
    format!(
        "{}{}:{}:{}:{}:{}",
        APARTMENT_LIST_PREFIX,
        pagination.limit,
        pagination.offset,
        filter.number_of_rooms,
        filter.price_per_month,
        filter.floor_area
    )
}

pub fn apartment_user(id: i32) -> String {
    format!("apartment_user:{}", id)
}

/// Both filter values are client supplied and may contain `:`, so each one is
/// prefixed with its length to keep the key unambiguous.
pub fn apartment_user_list(filter: &ApartmentUserFilter) -> String {
    format!(
        "{}{}:{}:{}:{}",
        APARTMENT_USER_LIST_PREFIX,
        filter.name.len(),
        filter.name,
        filter.user_email.len(),
        filter.user_email
    )
}

pub fn favorites_of_user(user_id: i32) -> String {
    format!("favorites:user:{}", user_id)
}
