//! Domain-specific error types and error handling.

mod types;

pub use types::TokenError;

use thiserror::Error;

/// Session-level errors exposed to the surrounding request layer.
///
/// Every authentication failure (bad signature, expiry, wrong token type,
/// revoked jti, unparseable claims) surfaces as [`SessionError::Unauthorized`]
/// so the rejection carries no oracle about which check failed.
#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Unauthorized")]
    Unauthorized,

    /// Structurally invalid token material; not a security signal
    #[error("Malformed token")]
    Malformed,

    /// Token issuance failed; implies invalid internal state and is fatal
    #[error("Token encoding failed: {message}")]
    Encoding { message: String },

    /// The revocation store rejected a write
    #[error("Revocation store error: {message}")]
    Store { message: String },
}

impl SessionError {
    /// Stable error code for logs and API payloads
    pub fn code(&self) -> &'static str {
        match self {
            SessionError::Unauthorized => "UNAUTHORIZED",
            SessionError::Malformed => "MALFORMED_TOKEN",
            SessionError::Encoding { .. } => "TOKEN_ENCODING_FAILED",
            SessionError::Store { .. } => "REVOCATION_STORE_ERROR",
        }
    }
}

pub type SessionResult<T> = Result<T, SessionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(SessionError::Unauthorized.code(), "UNAUTHORIZED");
        assert_eq!(SessionError::Malformed.code(), "MALFORMED_TOKEN");
        assert_eq!(
            SessionError::Encoding { message: "x".into() }.code(),
            "TOKEN_ENCODING_FAILED"
        );
    }

    #[test]
    fn test_unauthorized_message_is_uniform() {
        // the display form leaks nothing about the underlying failure
        assert_eq!(SessionError::Unauthorized.to_string(), "Unauthorized");
    }

    #[test]
    fn test_token_error_messages() {
        assert_eq!(TokenError::TokenExpired.to_string(), "Token expired");
        assert_eq!(
            TokenError::InvalidSignature.to_string(),
            "Token signature verification failed"
        );
    }
}
