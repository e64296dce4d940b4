//! Token-based authentication for apartment users.

pub mod jwt;
