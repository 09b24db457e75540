//! Redis-backed implementation of the core revocation store.

use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

use sg_core::errors::{SessionError, SessionResult};
use sg_core::repositories::RevocationStore;

use super::redis_client::RedisClient;

/// Key prefix for revocation entries, shared with the rest of the platform
pub(crate) const BLACKLIST_KEY_PREFIX: &str = "blacklist:";

/// Revocation store keeping blacklisted jtis in Redis.
///
/// Each entry lives exactly as long as the token it belongs to; Redis
/// expiry removes it afterwards, so the blacklist never needs sweeping.
#[derive(Clone)]
pub struct RedisRevocationStore {
    client: RedisClient,
}

impl RedisRevocationStore {
    /// Create a store on top of an existing Redis client
    pub fn new(client: RedisClient) -> Self {
        Self { client }
    }
}

/// Build the cache key for a jti
pub(crate) fn blacklist_key(jti: &str) -> String {
    format!("{}{}", BLACKLIST_KEY_PREFIX, jti)
}

#[async_trait]
impl RevocationStore for RedisRevocationStore {
    async fn revoke(&self, jti: &str, ttl: Duration) -> SessionResult<bool> {
        // EX 0 is invalid in Redis; a sub-second remainder still needs an entry
        let expiry_seconds = ttl.as_secs().max(1);

        let inserted = self
            .client
            .set_if_absent_with_expiry(&blacklist_key(jti), "1", expiry_seconds)
            .await
            .map_err(|e| SessionError::Store {
                message: e.to_string(),
            })?;

        debug!(jti, inserted, "revocation entry write");
        Ok(inserted)
    }

    async fn is_revoked(&self, jti: &str) -> SessionResult<bool> {
        self.client
            .exists(&blacklist_key(jti))
            .await
            .map_err(|e| SessionError::Store {
                message: e.to_string(),
            })
    }
}
