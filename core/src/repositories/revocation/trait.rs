//! Revocation store trait defining the interface for the token blacklist.

use async_trait::async_trait;
use std::time::Duration;

use crate::errors::SessionResult;

/// Store trait for revoked token identifiers.
///
/// The store keeps each revoked jti alive for the remaining lifetime of its
/// token; once that TTL elapses, the entry may be dropped because natural
/// expiry already invalidates the token. Implementations must make
/// [`revoke`](RevocationStore::revoke) a single atomic check-and-set: when
/// several callers race to revoke the same jti, exactly one observes an
/// insert.
///
/// # Security Considerations
/// - A jti is not a secret; entries may be stored in plain text
/// - Readers should treat store failures as "revoked" (fail closed)
#[async_trait]
pub trait RevocationStore: Send + Sync {
    /// Insert a revocation entry unless one already exists
    ///
    /// # Arguments
    /// * `jti` - The token identifier to revoke
    /// * `ttl` - How long the entry must outlive the call (the token's
    ///   remaining lifetime)
    ///
    /// # Returns
    /// * `Ok(true)` - This call inserted the entry
    /// * `Ok(false)` - The jti was already revoked
    /// * `Err(SessionError)` - The store could not complete the write
    ///
    /// # Example
    /// ```no_run
    /// # use std::time::Duration;
    /// # use sg_core::repositories::RevocationStore;
    /// # async fn example(store: &impl RevocationStore) -> Result<(), Box<dyn std::error::Error>> {
    /// if store.revoke("b2cdb03e-17a5-4f3e-8f3d-5d2f9a4f2b11", Duration::from_secs(600)).await? {
    ///     println!("token revoked");
    /// } else {
    ///     println!("token was already revoked");
    /// }
    /// # Ok(())
    /// # }
    /// ```
    async fn revoke(&self, jti: &str, ttl: Duration) -> SessionResult<bool>;

    /// Check whether a jti is present in the revocation set
    ///
    /// # Arguments
    /// * `jti` - The token identifier to look up
    ///
    /// # Returns
    /// * `Ok(true)` - The token has been revoked
    /// * `Ok(false)` - No revocation entry exists
    /// * `Err(SessionError)` - The store could not be reached
    async fn is_revoked(&self, jti: &str) -> SessionResult<bool>;
}
