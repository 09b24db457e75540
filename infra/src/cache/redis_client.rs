//! Redis cache client implementation
//!
//! This module provides a Redis client with retry logic and the cache
//! operations the revocation store needs: a conditional set-with-expiry
//! and a key existence check.

use redis::{aio::MultiplexedConnection, AsyncCommands, Client, RedisError, RedisResult};
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, error, info, warn};

use sg_shared::config::CacheConfig;

use crate::InfrastructureError;

/// Redis cache client with connection retry logic
///
/// Provides a thread-safe, async Redis client with automatic connection
/// management and retry capabilities for resilient cache operations.
#[derive(Clone)]
pub struct RedisClient {
    /// Redis multiplexed connection for async operations
    connection: MultiplexedConnection,
    /// Maximum number of retry attempts for operations
    max_retries: u32,
    /// Base delay between retries (exponential backoff)
    retry_delay_ms: u64,
}

impl RedisClient {
    /// Create a new Redis client
    ///
    /// # Arguments
    /// * `config` - Cache configuration settings
    ///
    /// # Returns
    /// * `Result<Self, InfrastructureError>` - Redis client or error
    pub async fn new(config: CacheConfig) -> Result<Self, InfrastructureError> {
        Self::new_with_retry_config(config, 3, 100).await
    }

    /// Create a new Redis client with custom retry configuration
    ///
    /// # Arguments
    /// * `config` - Cache configuration settings
    /// * `max_retries` - Maximum number of retry attempts
    /// * `retry_delay_ms` - Base delay between retries in milliseconds
    pub async fn new_with_retry_config(
        config: CacheConfig,
        max_retries: u32,
        retry_delay_ms: u64,
    ) -> Result<Self, InfrastructureError> {
        info!(
            "Creating Redis client with URL: {} and pool size: {}",
            mask_url(&config.url),
            config.max_connections
        );

        let client = Client::open(config.url.as_str()).map_err(|e| {
            error!("Failed to parse Redis URL: {}", e);
            InfrastructureError::Config(format!("Invalid Redis URL: {}", e))
        })?;

        let connection =
            Self::create_connection_with_retry(client, max_retries, retry_delay_ms).await?;

        info!("Redis client created successfully");

        Ok(Self {
            connection,
            max_retries,
            retry_delay_ms,
        })
    }

    /// Create multiplexed connection with retry logic
    async fn create_connection_with_retry(
        client: Client,
        max_retries: u32,
        retry_delay_ms: u64,
    ) -> Result<MultiplexedConnection, InfrastructureError> {
        let mut attempts = 0;
        let mut delay = retry_delay_ms;

        loop {
            attempts += 1;
            debug!("Attempting to connect to Redis (attempt {})", attempts);

            match client.get_multiplexed_async_connection().await {
                Ok(connection) => {
                    info!("Successfully connected to Redis");
                    return Ok(connection);
                }
                Err(e) if attempts < max_retries => {
                    warn!(
                        "Failed to connect to Redis (attempt {}/{}): {}. Retrying in {}ms...",
                        attempts, max_retries, e, delay
                    );
                    sleep(Duration::from_millis(delay)).await;
                    // Exponential backoff with cap at 5 seconds
                    delay = (delay * 2).min(5000);
                }
                Err(e) => {
                    error!("Failed to connect to Redis after {} attempts: {}", attempts, e);
                    return Err(InfrastructureError::Cache(e));
                }
            }
        }
    }

    /// Set a value with expiration only if the key does not exist yet
    ///
    /// Issues `SET key value EX ttl NX`, the single atomic operation the
    /// revocation store relies on when concurrent callers race to claim
    /// the same key.
    ///
    /// # Arguments
    /// * `key` - Cache key
    /// * `value` - Value to store
    /// * `expiry_seconds` - Time to live in seconds (must be positive)
    ///
    /// # Returns
    /// * `Ok(true)` - This call created the key
    /// * `Ok(false)` - The key already existed; nothing was written
    pub async fn set_if_absent_with_expiry(
        &self,
        key: &str,
        value: &str,
        expiry_seconds: u64,
    ) -> Result<bool, InfrastructureError> {
        debug!("Setting key '{}' if absent with expiry {}s", key, expiry_seconds);

        let result = self
            .execute_with_retry(|mut conn| {
                let key = key.to_string();
                let value = value.to_string();
                let expiry = expiry_seconds;

                Box::pin(async move {
                    redis::cmd("SET")
                        .arg(&key)
                        .arg(&value)
                        .arg("EX")
                        .arg(expiry)
                        .arg("NX")
                        .query_async::<_, Option<String>>(&mut conn)
                        .await
                })
            })
            .await;

        match result {
            Ok(reply) => {
                let inserted = reply.is_some();
                if inserted {
                    debug!("Successfully set key '{}'", key);
                } else {
                    debug!("Key '{}' already present", key);
                }
                Ok(inserted)
            }
            Err(e) => {
                error!("Failed to set key '{}': {}", key, e);
                Err(InfrastructureError::Cache(e))
            }
        }
    }

    /// Check if a key exists in cache
    ///
    /// # Arguments
    /// * `key` - Cache key
    ///
    /// # Returns
    /// * `Result<bool, InfrastructureError>` - True if key exists
    pub async fn exists(&self, key: &str) -> Result<bool, InfrastructureError> {
        debug!("Checking if key '{}' exists", key);

        let result = self
            .execute_with_retry(|mut conn| {
                let key = key.to_string();

                Box::pin(async move { conn.exists::<_, bool>(key).await })
            })
            .await;

        match result {
            Ok(exists) => {
                debug!("Key '{}' exists: {}", key, exists);
                Ok(exists)
            }
            Err(e) => {
                error!("Failed to check key '{}' existence: {}", key, e);
                Err(InfrastructureError::Cache(e))
            }
        }
    }

    /// Check if the Redis connection is healthy
    ///
    /// Performs a PING command to verify connectivity.
    ///
    /// # Returns
    /// * `Result<bool, InfrastructureError>` - True if healthy, error otherwise
    pub async fn health_check(&self) -> Result<bool, InfrastructureError> {
        debug!("Performing Redis health check");

        let result = self
            .execute_with_retry(|mut conn| {
                Box::pin(async move {
                    redis::cmd("PING").query_async::<_, String>(&mut conn).await
                })
            })
            .await;

        match result {
            Ok(response) if response == "PONG" => {
                debug!("Redis health check passed");
                Ok(true)
            }
            Ok(response) => {
                warn!("Redis health check returned unexpected response: {}", response);
                Ok(false)
            }
            Err(e) => {
                error!("Redis health check failed: {}", e);
                Err(InfrastructureError::Cache(e))
            }
        }
    }

    /// Execute a Redis operation with automatic retry logic
    ///
    /// This internal method provides retry capability for any Redis
    /// operation. It uses exponential backoff with the configured retry
    /// parameters.
    async fn execute_with_retry<F, T>(&self, operation: F) -> RedisResult<T>
    where
        F: Fn(
            MultiplexedConnection,
        ) -> std::pin::Pin<
            Box<dyn std::future::Future<Output = RedisResult<T>> + Send>,
        >,
    {
        let mut attempts = 0;
        let mut delay = self.retry_delay_ms;

        loop {
            attempts += 1;
            let conn = self.connection.clone();

            match operation(conn).await {
                Ok(result) => return Ok(result),
                Err(e) if attempts < self.max_retries && is_retriable_error(&e) => {
                    warn!(
                        "Redis operation failed (attempt {}/{}): {}. Retrying in {}ms...",
                        attempts, self.max_retries, e, delay
                    );
                    sleep(Duration::from_millis(delay)).await;
                    // Exponential backoff with cap at 5 seconds
                    delay = (delay * 2).min(5000);
                }
                Err(e) => {
                    error!("Redis operation failed after {} attempts: {}", attempts, e);
                    return Err(e);
                }
            }
        }
    }
}

/// Check if a Redis error is transient and the operation should be retried
pub(crate) fn is_retriable_error(error: &RedisError) -> bool {
    matches!(
        error.kind(),
        redis::ErrorKind::IoError
            | redis::ErrorKind::ClientError
            | redis::ErrorKind::BusyLoadingError
            | redis::ErrorKind::TryAgain
    )
}

/// Mask sensitive parts of Redis URL for logging
pub(crate) fn mask_url(url: &str) -> String {
    if let Some(at_pos) = url.find('@') {
        if let Some(proto_end) = url.find("://") {
            let proto = &url[..proto_end + 3];
            let host_part = &url[at_pos..];
            return format!("{}****{}", proto, host_part);
        }
    }
    url.to_string()
}
