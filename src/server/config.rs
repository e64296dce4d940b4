use std::str::FromStr;

use crate::server::{
    cache::DEFAULT_TTL_SECONDS,
    error::{config::ConfigError, AppError},
};

const DEFAULT_JWT_SIGNING_ALGORITHM: &str = "HS256";
const DEFAULT_JWT_DURATION_MINUTES: i64 = 15;
const DEFAULT_JWT_MIN_SECRET_LENGTH: usize = 64;
const DEFAULT_SERVER_ADDR: &str = "0.0.0.0:8080";

pub struct Config {
    pub database_url: String,

    pub jwt_secret: String,
    pub jwt_signing_algorithm: String,
    pub jwt_duration_minutes: i64,
    pub jwt_min_secret_length: usize,

    /// Falls back to the in-process cache when unset.
    pub redis_url: Option<String>,
    pub cache_ttl_seconds: u64,

    pub server_addr: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: required("DATABASE_URL")?,
            jwt_secret: required("JWT_SECRET")?,
            jwt_signing_algorithm: std::env::var("JWT_SIGNING_ALGORITHM")
                .unwrap_or_else(|_| DEFAULT_JWT_SIGNING_ALGORITHM.to_string()),
            jwt_duration_minutes: parsed("JWT_DURATION_MINUTES", DEFAULT_JWT_DURATION_MINUTES)?,
            jwt_min_secret_length: parsed(
                "JWT_MIN_SECRET_LENGTH",
                DEFAULT_JWT_MIN_SECRET_LENGTH,
            )?,
            redis_url: std::env::var("REDIS_URL")
                .ok()
                .filter(|url| !url.is_empty()),
            cache_ttl_seconds: parsed("CACHE_TTL_SECONDS", DEFAULT_TTL_SECONDS)?,
            server_addr: std::env::var("SERVER_ADDR")
                .unwrap_or_else(|_| DEFAULT_SERVER_ADDR.to_string()),
        })
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

fn parsed<T: FromStr>(name: &str, default: T) -> Result<T, ConfigError> {
    match std::env::var(name) {
        Ok(value) => value.parse().map_err(|_| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value,
        }),
        Err(_) => Ok(default),
    }
}
