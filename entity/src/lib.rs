//! SeaORM entity models for every table of the rental database.

pub mod prelude;

pub mod apartment;
pub mod apartment_user;
pub mod company;
pub mod emp_car;
pub mod location;
pub mod user_favorite_apartment;
