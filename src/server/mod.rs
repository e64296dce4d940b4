//! HTTP backend of the rental API.
//!
//! # Architecture
//!
//! The server follows a layered architecture:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, cache-aside reads and DTO conversion
//! - **Service Layer** (`service/`) - Business rules such as uniqueness checks and existence guards
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Bearer token authentication
//!
//! # Infrastructure
//!
//! - **Cache** (`cache/`) - Cache trait, Redis and in-memory backends, read-through helper
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **Logging** (`logging`) - Tracing subscriber setup
//! - **State** (`state`) - Shared application state (DB, cache, JWT service)
//! - **Startup** (`startup`) - Initialization of database, cache and JWT service
//! - **Router** (`router`) - Axum route configuration and API documentation
//!
//! # Request Flow
//!
//! 1. **Router** receives the request; `/v2` routes pass the bearer middleware first
//! 2. **Controller** binds parameters and checks the cache for list and view reads
//! 3. **Service** applies business rules and calls the data layer
//! 4. **Data** queries the database and converts entities to domain models
//! 5. **Controller** invalidates affected cache keys after writes and returns the DTO

pub mod cache;
pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod logging;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
