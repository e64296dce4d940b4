use std::{sync::Arc, time::Duration};

use crate::server::{
    cache::{memory::MemoryCache, redis::RedisCache, Cache},
    config::Config,
    error::AppError,
    service::auth::jwt::JwtService,
};

/// Connects to the database and runs pending migrations.
///
/// Establishes a connection pool using the connection string from configuration, then
/// runs all pending SeaORM migrations so the schema is up-to-date before the server
/// starts accepting requests.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the cache backend.
///
/// Connects to Redis when `REDIS_URL` is configured, otherwise falls back to the
/// in-process cache.
///
/// # Returns
/// - `Ok(Arc<dyn Cache>)` - Ready cache backend
/// - `Err(AppError::CacheErr)` - Redis URL is invalid or the server is unreachable
pub async fn connect_to_cache(config: &Config) -> Result<Arc<dyn Cache>, AppError> {
    match &config.redis_url {
        Some(url) => {
            let cache = RedisCache::connect(url, config.cache_ttl_seconds).await?;
            tracing::info!("Using Redis cache");
            Ok(Arc::new(cache))
        }
        None => {
            tracing::info!("REDIS_URL not set, using in-memory cache");
            Ok(Arc::new(MemoryCache::new(Duration::from_secs(
                config.cache_ttl_seconds,
            ))))
        }
    }
}

/// Builds the JWT service and logs a development token for the dummy identity.
///
/// # Returns
/// - `Ok(JwtService)` - Configured service
/// - `Err(AppError::JwtErr)` - Secret too short or unsupported signing method
pub fn setup_jwt(config: &Config) -> Result<JwtService, AppError> {
    let jwt = JwtService::new(
        &config.jwt_signing_algorithm,
        &config.jwt_secret,
        config.jwt_duration_minutes,
        config.jwt_min_secret_length,
    )?;

    let token = jwt.dummy_token()?;
    tracing::info!("Development bearer token: {}", token);

    Ok(jwt)
}
