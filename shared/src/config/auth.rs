//! Authentication and authorization configuration

use serde::{Deserialize, Serialize};

/// JWT authentication configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// JWT secret key for signing tokens
    pub secret: String,

    /// Access token expiry time in seconds
    pub access_token_expiry: i64,

    /// Refresh token expiry time in seconds
    pub refresh_token_expiry: i64,

    /// Password reset token expiry time in seconds
    #[serde(default = "default_reset_token_expiry")]
    pub reset_token_expiry: i64,

    /// Email verification token expiry time in seconds
    #[serde(default = "default_email_verification_expiry")]
    pub email_verification_expiry: i64,

    /// JWT issuer claim
    pub issuer: String,

    /// JWT audience claim
    pub audience: String,

    /// Algorithm for JWT signing (default: HS256)
    #[serde(default = "default_algorithm")]
    pub algorithm: String,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: String::from("development-secret-please-change-in-production"),
            access_token_expiry: 900,      // 15 minutes
            refresh_token_expiry: 604_800, // 7 days
            reset_token_expiry: default_reset_token_expiry(),
            email_verification_expiry: default_email_verification_expiry(),
            issuer: String::from("shopgate"),
            audience: String::from("shopgate-api"),
            algorithm: default_algorithm(),
        }
    }
}

impl JwtConfig {
    /// Create a new JWT configuration with secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ..Default::default()
        }
    }

    /// Set access token expiry in minutes
    pub fn with_access_expiry_minutes(mut self, minutes: i64) -> Self {
        self.access_token_expiry = minutes * 60;
        self
    }

    /// Set refresh token expiry in days
    pub fn with_refresh_expiry_days(mut self, days: i64) -> Self {
        self.refresh_token_expiry = days * 86_400;
        self
    }

    /// Check if using default secret (security warning)
    pub fn is_using_default_secret(&self) -> bool {
        self.secret == "development-secret-please-change-in-production"
    }

    /// Create from environment variables
    pub fn from_env() -> Self {
        let secret = std::env::var("JWT_SECRET")
            .unwrap_or_else(|_| "development-secret-please-change-in-production".to_string());
        let access_token_expiry = std::env::var("JWT_ACCESS_TOKEN_EXPIRY")
            .unwrap_or_else(|_| "900".to_string())
            .parse()
            .unwrap_or(900);
        let refresh_token_expiry = std::env::var("JWT_REFRESH_TOKEN_EXPIRY")
            .unwrap_or_else(|_| "604800".to_string())
            .parse()
            .unwrap_or(604_800);

        Self {
            secret,
            access_token_expiry,
            refresh_token_expiry,
            ..Default::default()
        }
    }
}

fn default_algorithm() -> String {
    String::from("HS256")
}

fn default_reset_token_expiry() -> i64 {
    86_400 // 24 hours
}

fn default_email_verification_expiry() -> i64 {
    172_800 // 48 hours
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jwt_config_default() {
        let config = JwtConfig::default();
        assert_eq!(config.access_token_expiry, 900);
        assert_eq!(config.refresh_token_expiry, 604_800);
        assert_eq!(config.reset_token_expiry, 86_400);
        assert_eq!(config.email_verification_expiry, 172_800);
        assert_eq!(config.algorithm, "HS256");
        assert!(config.is_using_default_secret());
    }

    #[test]
    fn test_jwt_config_builder() {
        let config = JwtConfig::new("my-secret")
            .with_access_expiry_minutes(30)
            .with_refresh_expiry_days(14);

        assert_eq!(config.access_token_expiry, 1800);
        assert_eq!(config.refresh_token_expiry, 1_209_600);
        assert!(!config.is_using_default_secret());
    }

    #[test]
    fn test_jwt_config_claims() {
        let config = JwtConfig::default();
        assert_eq!(config.issuer, "shopgate");
        assert_eq!(config.audience, "shopgate-api");
    }
}
