//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Uniqueness rules, existence checks and not-found handling
//! - **Orchestration**: Coordinating multiple repository calls
//! - **Domain Models**: Working with domain models rather than DTOs or entity models

pub mod apartment;
pub mod apartment_user;
pub mod auth;
pub mod car;
pub mod company;
pub mod favorite;

#[cfg(test)]
mod test;
