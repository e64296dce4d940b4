//! HTTP request handlers.
//!
//! Handlers bind path, query and body parameters, call the service layer and convert
//! domain models into DTOs. The read-through cache is consulted here for list and view
//! endpoints, and invalidated here after successful writes.

pub mod apartment;
pub mod apartment_user;
pub mod car;
pub mod company;
pub mod extract;
pub mod favorite;
pub mod health;
pub mod param;

#[cfg(test)]
mod test;
