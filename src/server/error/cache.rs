use thiserror::Error;

#[derive(Error, Debug)]
pub enum CacheError {
    /// Redis command or connection failure.
    #[error("Redis cache error: {0}")]
    Redis(#[from] redis::RedisError),
}
