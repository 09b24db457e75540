//! Configuration for the session service

use chrono::Duration;
use jsonwebtoken::Algorithm;

use sg_shared::config::JwtConfig;

use crate::domain::entities::token::{
    ACCESS_TOKEN_EXPIRY_MINUTES, EMAIL_VERIFICATION_EXPIRY_HOURS, JWT_AUDIENCE, JWT_ISSUER,
    REFRESH_TOKEN_EXPIRY_DAYS, RESET_TOKEN_EXPIRY_HOURS,
};

/// Configuration for the session service
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// JWT signing secret
    pub jwt_secret: String,
    /// JWT signing algorithm
    pub algorithm: Algorithm,
    /// Access token expiry in minutes
    pub access_token_expiry_minutes: i64,
    /// Refresh token expiry in days
    pub refresh_token_expiry_days: i64,
    /// Password reset token expiry in hours
    pub reset_token_expiry_hours: i64,
    /// Email verification token expiry in hours
    pub email_verification_expiry_hours: i64,
    /// Issuer claim stamped on every token
    pub issuer: String,
    /// Audience claim stamped on every token
    pub audience: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            jwt_secret: "development-secret-please-change-in-production".to_string(),
            algorithm: Algorithm::HS256,
            access_token_expiry_minutes: ACCESS_TOKEN_EXPIRY_MINUTES,
            refresh_token_expiry_days: REFRESH_TOKEN_EXPIRY_DAYS,
            reset_token_expiry_hours: RESET_TOKEN_EXPIRY_HOURS,
            email_verification_expiry_hours: EMAIL_VERIFICATION_EXPIRY_HOURS,
            issuer: JWT_ISSUER.to_string(),
            audience: JWT_AUDIENCE.to_string(),
        }
    }
}

impl SessionConfig {
    /// Access token lifetime
    pub fn access_token_lifetime(&self) -> Duration {
        Duration::minutes(self.access_token_expiry_minutes)
    }

    /// Refresh token lifetime
    pub fn refresh_token_lifetime(&self) -> Duration {
        Duration::days(self.refresh_token_expiry_days)
    }

    /// Password reset token lifetime
    pub fn reset_token_lifetime(&self) -> Duration {
        Duration::hours(self.reset_token_expiry_hours)
    }

    /// Email verification token lifetime
    pub fn email_verification_lifetime(&self) -> Duration {
        Duration::hours(self.email_verification_expiry_hours)
    }
}

impl From<&JwtConfig> for SessionConfig {
    fn from(jwt: &JwtConfig) -> Self {
        Self {
            jwt_secret: jwt.secret.clone(),
            algorithm: jwt.algorithm.parse().unwrap_or(Algorithm::HS256),
            access_token_expiry_minutes: jwt.access_token_expiry / 60,
            refresh_token_expiry_days: jwt.refresh_token_expiry / 86_400,
            reset_token_expiry_hours: jwt.reset_token_expiry / 3_600,
            email_verification_expiry_hours: jwt.email_verification_expiry / 3_600,
            issuer: jwt.issuer.clone(),
            audience: jwt.audience.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_lifetimes() {
        let config = SessionConfig::default();
        assert_eq!(config.access_token_lifetime(), Duration::minutes(15));
        assert_eq!(config.refresh_token_lifetime(), Duration::days(7));
        assert_eq!(config.reset_token_lifetime(), Duration::hours(24));
        assert_eq!(config.email_verification_lifetime(), Duration::hours(48));
    }

    #[test]
    fn test_from_jwt_config() {
        let jwt = JwtConfig::new("a-real-secret")
            .with_access_expiry_minutes(30)
            .with_refresh_expiry_days(14);

        let config = SessionConfig::from(&jwt);
        assert_eq!(config.jwt_secret, "a-real-secret");
        assert_eq!(config.algorithm, Algorithm::HS256);
        assert_eq!(config.access_token_expiry_minutes, 30);
        assert_eq!(config.refresh_token_expiry_days, 14);
        assert_eq!(config.issuer, jwt.issuer);
        assert_eq!(config.audience, jwt.audience);
    }

    #[test]
    fn test_unknown_algorithm_falls_back_to_hs256() {
        let jwt = JwtConfig {
            algorithm: "XS512".to_string(),
            ..Default::default()
        };
        assert_eq!(SessionConfig::from(&jwt).algorithm, Algorithm::HS256);
    }
}
