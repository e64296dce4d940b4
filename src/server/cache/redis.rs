//! Redis cache backend.

use async_trait::async_trait;
use redis::{aio::ConnectionManager, AsyncCommands};

use crate::server::{cache::Cache, error::cache::CacheError};

/// Keys fetched per `SCAN` round trip during prefix invalidation.
const SCAN_BATCH: usize = 100;

/// Cache backed by a Redis server through a multiplexed `ConnectionManager`.
///
/// The manager reconnects on its own, so a Redis outage surfaces as per-command errors.
#[derive(Clone)]
pub struct RedisCache {
    conn: ConnectionManager,
    ttl_seconds: u64,
}

impl RedisCache {
    /// Opens a managed connection to the Redis server at `url`.
    ///
    /// # Returns
    /// - `Ok(RedisCache)` - Connected cache
    /// - `Err(CacheError::Redis)` - Invalid URL or the server could not be reached
    pub async fn connect(url: &str, ttl_seconds: u64) -> Result<Self, CacheError> {
        let client = redis::Client::open(url)?;
        let conn = ConnectionManager::new(client).await?;

        Ok(Self { conn, ttl_seconds })
    }
}

#[async_trait]
impl Cache for RedisCache {
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        let mut conn = self.conn.clone();
        let value: Option<String> = conn.get(key).await?;

        Ok(value)
    }

    async fn set(&self, key: &str, value: String) -> Result<(), CacheError> {
        let mut conn = self.conn.clone();
        let _: () = conn.set_ex(key, value, self.ttl_seconds).await?;

        tracing::debug!(key = %key, ttl_secs = %self.ttl_seconds, "cache set");
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), CacheError> {
        let mut conn = self.conn.clone();
        let _: () = conn.del(key).await?;

        Ok(())
    }

    async fn delete_prefix(&self, prefix: &str) -> Result<(), CacheError> {
        let mut conn = self.conn.clone();
        let pattern = format!("{}*", prefix);
        let mut cursor: u64 = 0;

        loop {
            let (next, keys): (u64, Vec<String>) = redis::cmd("SCAN")
                .arg(cursor)
                .arg("MATCH")
                .arg(&pattern)
                .arg("COUNT")
                .arg(SCAN_BATCH)
                .query_async(&mut conn)
                .await?;

            if !keys.is_empty() {
                let _: () = conn.del(keys).await?;
            }

            if next == 0 {
                break;
            }
            cursor = next;
        }

        tracing::debug!(prefix = %prefix, "cache prefix invalidated");
        Ok(())
    }
}
