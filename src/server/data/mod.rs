//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to maintain separation between the data layer and business logic layer.

pub mod apartment;
pub mod apartment_user;
pub mod car;
pub mod company;
pub mod favorite;

#[cfg(test)]
mod test;
