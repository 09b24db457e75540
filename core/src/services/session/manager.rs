//! Session manager implementation

use tracing::{debug, error, warn};

use crate::domain::entities::role::Role;
use crate::domain::entities::token::{Claims, TokenPair, TokenType};
use crate::errors::{SessionError, SessionResult, TokenError};
use crate::repositories::RevocationStore;

use super::clock::{Clock, SystemClock};
use super::codec::TokenCodec;
use super::config::SessionConfig;

/// Identity extracted from a valid access token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccessContext {
    /// User id the token was issued to
    pub subject_id: i64,
    /// Role carried by the token
    pub role: Role,
}

/// Service managing the session token lifecycle.
///
/// The manager is the only component that writes to the revocation store.
/// A token moves through `issued → valid → consumed-by-rotation | revoked |
/// expired`; once its natural expiry passes, the store entry (if any) is
/// free to lapse because expiry alone already invalidates it.
pub struct SessionManager<S: RevocationStore, C: Clock = SystemClock> {
    pub(crate) store: S,
    codec: TokenCodec,
    config: SessionConfig,
    clock: C,
}

impl<S: RevocationStore> SessionManager<S, SystemClock> {
    /// Creates a session manager driven by the system clock
    pub fn new(store: S, config: SessionConfig) -> Self {
        Self::with_clock(store, config, SystemClock)
    }
}

impl<S: RevocationStore, C: Clock> SessionManager<S, C> {
    /// Creates a session manager with an explicit clock
    pub fn with_clock(store: S, config: SessionConfig, clock: C) -> Self {
        let codec = TokenCodec::new(&config);
        Self {
            store,
            codec,
            config,
            clock,
        }
    }

    /// Issues a fresh access/refresh token pair for a user
    ///
    /// Nothing is recorded server-side at issuance; a token only touches
    /// the revocation store when it is consumed or revoked.
    pub fn issue(&self, subject_id: i64, role: Role) -> SessionResult<TokenPair> {
        let now = self.clock.now();
        let access_lifetime = self.config.access_token_lifetime();
        let refresh_lifetime = self.config.refresh_token_lifetime();

        let access = Claims::new_access(subject_id, role, now, access_lifetime);
        let refresh = Claims::new_refresh(subject_id, role, now, refresh_lifetime);

        let access_token = self.encode(&access)?;
        let refresh_token = self.encode(&refresh)?;

        debug!(subject_id, role = %role, "issued token pair");

        Ok(TokenPair::new(
            access_token,
            refresh_token,
            access_lifetime,
            refresh_lifetime,
        ))
    }

    /// Validates an access token and returns the identity it grants
    ///
    /// # Returns
    ///
    /// * `Ok(AccessContext)` - Signature, expiry, token type, and
    ///   revocation checks all passed
    /// * `Err(SessionError::Unauthorized)` - Any of them failed
    pub async fn authenticate(&self, token: &str) -> SessionResult<AccessContext> {
        let now = self.clock.now();
        let claims = self
            .codec
            .decode(token, now)
            .map_err(|_| SessionError::Unauthorized)?;

        if claims.token_type != TokenType::Access {
            return Err(SessionError::Unauthorized);
        }

        if self.is_revoked_fail_closed(&claims.jti).await {
            return Err(SessionError::Unauthorized);
        }

        Self::context_from(&claims)
    }

    /// Rotates a refresh token into a new token pair
    ///
    /// The consumed token's jti is claimed in the revocation store with a
    /// conditional insert before any new pair exists, so a replayed or
    /// concurrently presented refresh token finds the jti taken and fails.
    /// A crash after the insert loses the session rather than leaking one.
    pub async fn refresh(&self, token: &str) -> SessionResult<TokenPair> {
        let now = self.clock.now();
        let claims = self
            .codec
            .decode(token, now)
            .map_err(|_| SessionError::Unauthorized)?;

        if claims.token_type != TokenType::Refresh {
            return Err(SessionError::Unauthorized);
        }

        let context = Self::context_from(&claims)?;

        let inserted = self
            .store
            .revoke(&claims.jti, claims.remaining_lifetime(now))
            .await?;
        if !inserted {
            warn!(jti = %claims.jti, "refresh token presented after consumption");
            return Err(SessionError::Unauthorized);
        }

        self.issue(context.subject_id, context.role)
    }

    /// Revokes a token of either session type
    ///
    /// Idempotent: revoking an already-revoked token changes nothing, and
    /// an expired token is a no-op success because expiry already
    /// invalidates it.
    pub async fn revoke(&self, token: &str) -> SessionResult<()> {
        let now = self.clock.now();
        let claims = match self.codec.decode(token, now) {
            Ok(claims) => claims,
            Err(TokenError::TokenExpired) => return Ok(()),
            Err(TokenError::InvalidSignature) => return Err(SessionError::Unauthorized),
            Err(_) => return Err(SessionError::Malformed),
        };

        self.store
            .revoke(&claims.jti, claims.remaining_lifetime(now))
            .await?;

        debug!(jti = %claims.jti, token_type = ?claims.token_type, "token revoked");
        Ok(())
    }

    /// Revokes both tokens of a session on logout, best effort
    ///
    /// Tokens that are already expired, damaged, or revoked are skipped
    /// silently; logout never fails the caller.
    pub async fn logout(&self, access_token: &str, refresh_token: &str) {
        if let Err(e) = self.revoke(access_token).await {
            debug!(error = %e, "access token not revoked on logout");
        }
        if let Err(e) = self.revoke(refresh_token).await {
            debug!(error = %e, "refresh token not revoked on logout");
        }
    }

    /// Issues a password reset token for an email address
    pub fn issue_password_reset_token(&self, email: &str) -> SessionResult<String> {
        let claims = Claims::new_purpose(
            email,
            TokenType::PasswordReset,
            self.clock.now(),
            self.config.reset_token_lifetime(),
        );
        self.encode(&claims)
    }

    /// Verifies a password reset token and returns the email it was
    /// issued for
    pub fn verify_password_reset_token(&self, token: &str) -> SessionResult<String> {
        self.verify_purpose_token(token, TokenType::PasswordReset)
    }

    /// Issues an email verification token for a new signup
    pub fn issue_email_verification_token(&self, email: &str) -> SessionResult<String> {
        let claims = Claims::new_purpose(
            email,
            TokenType::EmailVerification,
            self.clock.now(),
            self.config.email_verification_lifetime(),
        );
        self.encode(&claims)
    }

    /// Verifies an email verification token and returns the email it was
    /// issued for
    pub fn verify_email_verification_token(&self, token: &str) -> SessionResult<String> {
        self.verify_purpose_token(token, TokenType::EmailVerification)
    }

    fn verify_purpose_token(
        &self,
        token: &str,
        expected: TokenType,
    ) -> SessionResult<String> {
        let claims = self
            .codec
            .decode(token, self.clock.now())
            .map_err(|_| SessionError::Unauthorized)?;

        if claims.token_type != expected {
            return Err(SessionError::Unauthorized);
        }

        Ok(claims.sub)
    }

    fn encode(&self, claims: &Claims) -> SessionResult<String> {
        self.codec.encode(claims).map_err(|e| {
            error!(token_type = ?claims.token_type, "token encoding failed");
            SessionError::Encoding {
                message: e.to_string(),
            }
        })
    }

    fn context_from(claims: &Claims) -> SessionResult<AccessContext> {
        let subject_id = claims
            .subject_id()
            .map_err(|_| SessionError::Unauthorized)?;
        let role = claims.role.ok_or(SessionError::Unauthorized)?;
        Ok(AccessContext { subject_id, role })
    }

    /// Membership check that treats store failures as revoked
    async fn is_revoked_fail_closed(&self, jti: &str) -> bool {
        match self.store.is_revoked(jti).await {
            Ok(revoked) => revoked,
            Err(e) => {
                error!(error = %e, "revocation store unreachable, failing closed");
                true
            }
        }
    }
}
