//! # Infrastructure Layer
//!
//! This crate implements the infrastructure layer for the ShopGate session
//! service. It provides the concrete Redis-backed implementation of the
//! revocation store consumed by `sg_core`.
//!
//! ## Architecture
//!
//! The infrastructure layer contains:
//! - **Cache**: Redis client with connection retry and the revocation
//!   store built on top of it

use sg_shared::config::CacheConfig;

/// Cache module - Redis client and the revocation store
pub mod cache;

pub use cache::{RedisClient, RedisRevocationStore};

/// Initialize the Redis-backed revocation store from the environment
///
/// Loads `.env` if present, connects to Redis, and verifies the
/// connection with a PING before handing the store out.
pub async fn initialize() -> Result<RedisRevocationStore, InfrastructureError> {
    dotenvy::dotenv().ok();

    let config = CacheConfig::from_env();
    let client = RedisClient::new(config).await?;

    if !client.health_check().await? {
        return Err(InfrastructureError::Config(
            "Redis health check failed".to_string(),
        ));
    }

    tracing::info!("revocation store initialized");
    Ok(RedisRevocationStore::new(client))
}

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Redis cache error
    #[error("Cache error: {0}")]
    Cache(#[from] redis::RedisError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
