use std::{
    sync::atomic::{AtomicUsize, Ordering},
    time::Duration,
};

use async_trait::async_trait;

use crate::server::{
    cache::{invalidate, memory::MemoryCache, read_through, Cache},
    error::{cache::CacheError, AppError},
};


/// Cache double whose every operation fails, standing in for an unreachable Redis.
struct FailingCache;

fn failure() -> CacheError {
    CacheError::Redis(redis::RedisError::from((
        redis::ErrorKind::IoError,
        "connection refused",
    )))
}

#[async_trait]
impl Cache for FailingCache {
    async fn get(&self, _key: &str) -> Result<Option<String>, CacheError> {
        Err(failure())
    }

    async fn set(&self, _key: &str, _value: String) -> Result<(), CacheError> {
        Err(failure())
    }

    async fn delete(&self, _key: &str) -> Result<(), CacheError> {
        Err(failure())
    }

    async fn delete_prefix(&self, _prefix: &str) -> Result<(), CacheError> {
        Err(failure())
    }
}

fn memory_cache() -> MemoryCache {
    MemoryCache::new(Duration::from_secs(60))
}
