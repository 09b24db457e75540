//! Token entities for JWT-based authentication.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::role::Role;

/// Access token expiration time (15 minutes)
pub const ACCESS_TOKEN_EXPIRY_MINUTES: i64 = 15;

/// Refresh token expiration time (7 days)
pub const REFRESH_TOKEN_EXPIRY_DAYS: i64 = 7;

/// Password reset token expiration time (24 hours)
pub const RESET_TOKEN_EXPIRY_HOURS: i64 = 24;

/// Email verification token expiration time (48 hours)
pub const EMAIL_VERIFICATION_EXPIRY_HOURS: i64 = 48;

/// JWT issuer
pub const JWT_ISSUER: &str = "shopgate";

/// JWT audience
pub const JWT_AUDIENCE: &str = "shopgate-api";

/// Purpose of a token, carried in the `type` claim.
///
/// Wire values match the claim values the rest of the platform expects:
/// `access`, `refresh`, `reset`, `verify_email`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TokenType {
    /// Short-lived credential authorizing API calls
    #[serde(rename = "access")]
    Access,
    /// Long-lived credential used solely to obtain a new token pair
    #[serde(rename = "refresh")]
    Refresh,
    /// Single-purpose credential for the password reset flow
    #[serde(rename = "reset")]
    PasswordReset,
    /// Single-purpose credential for the signup email verification flow
    #[serde(rename = "verify_email")]
    EmailVerification,
}

/// Claims structure for the JWT payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the user id for session tokens, the email address for
    /// purpose tokens
    pub sub: String,

    /// Role of the subject; absent on purpose tokens
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,

    /// Token purpose
    #[serde(rename = "type")]
    pub token_type: TokenType,

    /// JWT ID, the unique identifier used as the revocation key
    pub jti: String,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,

    /// Issuer
    pub iss: String,

    /// Audience
    pub aud: String,
}

impl Claims {
    fn new(
        subject: String,
        role: Option<Role>,
        token_type: TokenType,
        issued_at: DateTime<Utc>,
        lifetime: Duration,
    ) -> Self {
        Self {
            sub: subject,
            role,
            token_type,
            jti: Uuid::new_v4().to_string(),
            iat: issued_at.timestamp(),
            exp: (issued_at + lifetime).timestamp(),
            iss: JWT_ISSUER.to_string(),
            aud: JWT_AUDIENCE.to_string(),
        }
    }

    /// Creates claims for an access token
    pub fn new_access(
        subject_id: i64,
        role: Role,
        issued_at: DateTime<Utc>,
        lifetime: Duration,
    ) -> Self {
        Self::new(
            subject_id.to_string(),
            Some(role),
            TokenType::Access,
            issued_at,
            lifetime,
        )
    }

    /// Creates claims for a refresh token
    ///
    /// The role travels with the refresh token so rotation can reissue a
    /// pair without consulting the credential store.
    pub fn new_refresh(
        subject_id: i64,
        role: Role,
        issued_at: DateTime<Utc>,
        lifetime: Duration,
    ) -> Self {
        Self::new(
            subject_id.to_string(),
            Some(role),
            TokenType::Refresh,
            issued_at,
            lifetime,
        )
    }

    /// Creates claims for a purpose token (password reset, email
    /// verification); the subject is an email address and no role is set
    pub fn new_purpose(
        email: impl Into<String>,
        token_type: TokenType,
        issued_at: DateTime<Utc>,
        lifetime: Duration,
    ) -> Self {
        Self::new(email.into(), None, token_type, issued_at, lifetime)
    }

    /// Gets the numeric user id from the claims
    pub fn subject_id(&self) -> Result<i64, std::num::ParseIntError> {
        self.sub.parse()
    }

    /// Checks whether the claims have expired at the given instant
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now.timestamp() >= self.exp
    }

    /// Lifetime left at the given instant, zero if already expired
    pub fn remaining_lifetime(&self, now: DateTime<Utc>) -> std::time::Duration {
        let secs = self.exp - now.timestamp();
        std::time::Duration::from_secs(secs.max(0) as u64)
    }
}

/// Token pair returned to the client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    /// JWT access token
    pub access_token: String,

    /// JWT refresh token
    pub refresh_token: String,

    /// Access token expiry time in seconds
    pub access_expires_in: i64,

    /// Refresh token expiry time in seconds
    pub refresh_expires_in: i64,
}

impl TokenPair {
    /// Creates a new token pair with its advertised lifetimes
    pub fn new(
        access_token: String,
        refresh_token: String,
        access_lifetime: Duration,
        refresh_lifetime: Duration,
    ) -> Self {
        Self {
            access_token,
            refresh_token,
            access_expires_in: access_lifetime.num_seconds(),
            refresh_expires_in: refresh_lifetime.num_seconds(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn now() -> DateTime<Utc> {
        Utc::now()
    }

    #[test]
    fn test_access_token_claims() {
        let issued = now();
        let claims = Claims::new_access(42, Role::Client, issued, Duration::minutes(15));

        assert_eq!(claims.sub, "42");
        assert_eq!(claims.role, Some(Role::Client));
        assert_eq!(claims.token_type, TokenType::Access);
        assert_eq!(claims.iss, JWT_ISSUER);
        assert_eq!(claims.aud, JWT_AUDIENCE);
        assert_eq!(claims.iat, issued.timestamp());
        assert_eq!(claims.exp, (issued + Duration::minutes(15)).timestamp());
        assert!(!claims.is_expired_at(issued));
    }

    #[test]
    fn test_refresh_token_claims_carry_role() {
        let claims = Claims::new_refresh(7, Role::Admin, now(), Duration::days(7));

        assert_eq!(claims.token_type, TokenType::Refresh);
        assert_eq!(claims.role, Some(Role::Admin));
        assert_eq!(claims.subject_id().unwrap(), 7);
    }

    #[test]
    fn test_purpose_token_claims() {
        let claims = Claims::new_purpose(
            "shopper@example.com",
            TokenType::PasswordReset,
            now(),
            Duration::hours(24),
        );

        assert_eq!(claims.sub, "shopper@example.com");
        assert_eq!(claims.role, None);
        assert_eq!(claims.token_type, TokenType::PasswordReset);
        assert!(claims.subject_id().is_err());
    }

    #[test]
    fn test_distinct_jti_per_token() {
        let issued = now();
        let a = Claims::new_access(1, Role::Client, issued, Duration::minutes(15));
        let b = Claims::new_access(1, Role::Client, issued, Duration::minutes(15));
        assert_ne!(a.jti, b.jti);
    }

    #[test]
    fn test_claims_expiration() {
        let issued = now();
        let claims = Claims::new_access(1, Role::Client, issued, Duration::minutes(15));

        assert!(!claims.is_expired_at(issued + Duration::minutes(14)));
        assert!(claims.is_expired_at(issued + Duration::minutes(15)));
        assert!(claims.is_expired_at(issued + Duration::minutes(16)));
    }

    #[test]
    fn test_remaining_lifetime() {
        let issued = now();
        let claims = Claims::new_access(1, Role::Client, issued, Duration::minutes(15));

        let remaining = claims.remaining_lifetime(issued + Duration::minutes(5));
        assert_eq!(remaining.as_secs(), 10 * 60);

        let expired = claims.remaining_lifetime(issued + Duration::minutes(20));
        assert_eq!(expired.as_secs(), 0);
    }

    #[test]
    fn test_token_type_wire_values() {
        assert_eq!(serde_json::to_string(&TokenType::Access).unwrap(), "\"access\"");
        assert_eq!(serde_json::to_string(&TokenType::Refresh).unwrap(), "\"refresh\"");
        assert_eq!(serde_json::to_string(&TokenType::PasswordReset).unwrap(), "\"reset\"");
        assert_eq!(
            serde_json::to_string(&TokenType::EmailVerification).unwrap(),
            "\"verify_email\""
        );
    }

    #[test]
    fn test_claims_serialization() {
        let claims = Claims::new_access(42, Role::Client, now(), Duration::minutes(15));

        let json = serde_json::to_string(&claims).unwrap();
        assert!(json.contains("\"type\":\"access\""));

        let deserialized: Claims = serde_json::from_str(&json).unwrap();
        assert_eq!(claims, deserialized);
    }

    #[test]
    fn test_purpose_token_omits_role_claim() {
        let claims = Claims::new_purpose(
            "shopper@example.com",
            TokenType::EmailVerification,
            now(),
            Duration::hours(48),
        );
        let json = serde_json::to_string(&claims).unwrap();
        assert!(!json.contains("\"role\""));
    }

    #[test]
    fn test_token_pair_lifetimes() {
        let pair = TokenPair::new(
            "access".to_string(),
            "refresh".to_string(),
            Duration::minutes(ACCESS_TOKEN_EXPIRY_MINUTES),
            Duration::days(REFRESH_TOKEN_EXPIRY_DAYS),
        );

        assert_eq!(pair.access_expires_in, 15 * 60);
        assert_eq!(pair.refresh_expires_in, 7 * 24 * 60 * 60);
    }
}
