//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each request
//! handler through Axum's state extraction. It holds:
//! - Database connection pool for data persistence
//! - Cache backend used by the read-through list/view endpoints
//! - JWT service issuing and validating apartment user tokens

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use super::{cache::Cache, service::auth::jwt::JwtService};

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `Arc<dyn Cache>` is a reference-counted pointer
/// - `JwtService` holds the prepared signing keys
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Cache backend, Redis in deployments and in-memory otherwise.
    pub cache: Arc<dyn Cache>,

    /// Signs tokens for new users and validates bearer tokens in the auth middleware.
    pub jwt: JwtService,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `cache` - Cache backend
    /// - `jwt` - JWT service
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(db: DatabaseConnection, cache: Arc<dyn Cache>, jwt: JwtService) -> Self {
        Self { db, cache, jwt }
    }
}
