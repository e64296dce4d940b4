//! Read-through cache in front of the list and view endpoints.
//!
//! The `Cache` trait is implemented by a Redis backend for deployments and an
//! in-process `DashMap` backend used when no Redis URL is configured and in tests.
//! Values are stored as JSON documents under the keys built in [`key`].
//!
//! Reads go through [`read_through`]: a cache failure never fails a read, it only
//! degrades to a database load. Writes call [`invalidate`] once the database write
//! has succeeded, and a failed invalidation is reported to the caller.

pub mod key;
pub mod memory;
pub mod redis;

use std::future::Future;

use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};

use crate::server::error::{cache::CacheError, AppError};

/// Default time-to-live for cached values, in seconds.
pub const DEFAULT_TTL_SECONDS: u64 = 900;

/// String key/value store with per-entry expiry.
#[async_trait]
pub trait Cache: Send + Sync {
    /// Returns the value stored under `key`, or `None` when absent or expired.
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError>;

    /// Stores `value` under `key` with the backend's configured TTL.
    async fn set(&self, key: &str, value: String) -> Result<(), CacheError>;

    /// Removes `key`. Removing a missing key is not an error.
    async fn delete(&self, key: &str) -> Result<(), CacheError>;

    /// Removes every key starting with `prefix`.
    async fn delete_prefix(&self, prefix: &str) -> Result<(), CacheError>;
}

/// Returns the cached value for `key`, loading and caching it on a miss.
///
/// # Arguments
/// - `cache` - Cache backend
/// - `key` - Cache key of the value
/// - `loader` - Loads the value from the database on a miss
///
/// # Returns
/// - `Ok(T)` - The cached value on a hit, otherwise the loaded value
/// - `Err(AppError)` - The loader's error, unchanged; nothing is cached in that case
pub async fn read_through<T, F, Fut>(cache: &dyn Cache, key: &str, loader: F) -> Result<T, AppError>
where
    T: Serialize + DeserializeOwned,
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<T, AppError>>,
{
    match cache.get(key).await {
        Ok(Some(raw)) => match serde_json::from_str::<T>(&raw) {
            Ok(value) => {
                tracing::debug!(key = %key, "cache hit");
                return Ok(value);
            }
            Err(e) => tracing::warn!(key = %key, error = %e, "discarding undecodable cache entry"),
        },
        Ok(None) => tracing::debug!(key = %key, "cache miss"),
        Err(e) => tracing::warn!(key = %key, error = %e, "cache read failed, loading from database"),
    }

    let value = loader().await?;

    match serde_json::to_string(&value) {
        Ok(raw) => {
            if let Err(e) = cache.set(key, raw).await {
                tracing::warn!(key = %key, error = %e, "cache write failed");
            }
        }
        Err(e) => tracing::warn!(key = %key, error = %e, "failed to serialize value for cache"),
    }

    Ok(value)
}

/// Deletes the given keys and key prefixes after a successful write.
///
/// Stops at the first failure, which is logged at error level and returned.
pub async fn invalidate(
    cache: &dyn Cache,
    keys: &[String],
    prefixes: &[&str],
) -> Result<(), CacheError> {
    for key in keys {
        if let Err(e) = cache.delete(key).await {
            tracing::error!(key = %key, error = %e, "cache invalidation failed");
            return Err(e);
        }
    }

    for prefix in prefixes {
        if let Err(e) = cache.delete_prefix(prefix).await {
            tracing::error!(prefix = %prefix, error = %e, "cache prefix invalidation failed");
            return Err(e);
        }
    }

    Ok(())
}

#[cfg(test)]
mod test;
