//! Request and response DTOs shared by the HTTP layer.

pub mod apartment;
pub mod apartment_user;
pub mod api;
pub mod car;
pub mod company;
pub mod favorite;
