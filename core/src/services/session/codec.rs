//! Stateless encoding and decoding of signed session tokens.

use chrono::{DateTime, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};

use crate::domain::entities::token::Claims;
use crate::errors::TokenError;

use super::config::SessionConfig;

/// Codec turning [`Claims`] into compact signed strings and back.
///
/// Encoding and decoding are deterministic and side-effect free; expiry is
/// judged against the instant the caller passes in, so the codec itself
/// never reads the wall clock.
pub struct TokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    header: Header,
}

impl TokenCodec {
    /// Creates a codec from the session configuration
    pub fn new(config: &SessionConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_bytes());

        let mut validation = Validation::new(config.algorithm);
        validation.set_issuer(&[&config.issuer]);
        validation.set_audience(&[&config.audience]);
        // expiry is checked below against the caller-supplied instant
        validation.validate_exp = false;

        Self {
            encoding_key,
            decoding_key,
            validation,
            header: Header::new(config.algorithm),
        }
    }

    /// Serializes and signs claims into a compact token string
    ///
    /// Fails only when the claims cannot be serialized, which is
    /// unreachable for values constructed through [`Claims`] and treated
    /// as fatal by callers.
    pub fn encode(&self, claims: &Claims) -> Result<String, TokenError> {
        encode(&self.header, claims, &self.encoding_key)
            .map_err(|_| TokenError::EncodingFailed)
    }

    /// Verifies and parses a token string
    ///
    /// # Arguments
    ///
    /// * `token` - The compact token string
    /// * `now` - The instant expiry is judged against
    ///
    /// # Returns
    ///
    /// * `Ok(Claims)` - Signature verified, structure valid, not expired
    /// * `Err(TokenError)` - `InvalidSignature`, `TokenExpired`, or
    ///   `MalformedToken`
    pub fn decode(&self, token: &str, now: DateTime<Utc>) -> Result<Claims, TokenError> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::InvalidSignature => TokenError::InvalidSignature,
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => TokenError::TokenExpired,
                _ => TokenError::MalformedToken,
            })?;

        if token_data.claims.is_expired_at(now) {
            return Err(TokenError::TokenExpired);
        }

        Ok(token_data.claims)
    }
}
