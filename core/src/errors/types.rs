//! Token-specific error types for codec and validation operations.

use thiserror::Error;

/// Token-related errors
///
/// These errors describe why a token failed to encode or decode. They are
/// internal to the session service: the request-facing surface collapses
/// them into [`SessionError`](crate::errors::SessionError) variants so a
/// caller cannot distinguish a bad signature from an expired token.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token expired")]
    TokenExpired,

    #[error("Malformed token")]
    MalformedToken,

    #[error("Token signature verification failed")]
    InvalidSignature,

    #[error("Wrong token type for this operation")]
    WrongTokenType,

    #[error("Token revoked")]
    TokenRevoked,

    #[error("Token encoding failed")]
    EncodingFailed,
}
