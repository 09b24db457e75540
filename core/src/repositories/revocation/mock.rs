//! Mock implementation of RevocationStore for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

use crate::errors::SessionResult;

use super::r#trait::RevocationStore;

/// Mock revocation store backed by an in-memory map
pub struct MockRevocationStore {
    entries: Arc<RwLock<HashMap<String, Duration>>>,
}

impl MockRevocationStore {
    /// Create a new mock store
    pub fn new() -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Number of revocation entries currently held
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    /// TTL recorded for a jti, if any
    pub async fn ttl_of(&self, jti: &str) -> Option<Duration> {
        self.entries.read().await.get(jti).copied()
    }
}

impl Default for MockRevocationStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RevocationStore for MockRevocationStore {
    async fn revoke(&self, jti: &str, ttl: Duration) -> SessionResult<bool> {
        // single write guard makes the check-and-set atomic
        let mut entries = self.entries.write().await;
        if entries.contains_key(jti) {
            return Ok(false);
        }
        entries.insert(jti.to_string(), ttl);
        Ok(true)
    }

    async fn is_revoked(&self, jti: &str) -> SessionResult<bool> {
        let entries = self.entries.read().await;
        Ok(entries.contains_key(jti))
    }
}
