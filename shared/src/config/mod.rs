//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical areas:
//! - `auth` - JWT signing and token lifetime configuration
//! - `cache` - Redis connection configuration for the revocation cache
//! - `environment` - Environment detection and logging configuration

pub mod auth;
pub mod cache;
pub mod environment;

use serde::{Deserialize, Serialize};

// Re-export commonly used types
pub use auth::JwtConfig;
pub use cache::CacheConfig;
pub use environment::{Environment, LogFormat, LoggingConfig};

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// JWT configuration
    pub jwt: JwtConfig,

    /// Cache configuration
    pub cache: CacheConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        let env = Environment::default();
        Self {
            environment: env,
            jwt: JwtConfig::default(),
            cache: CacheConfig::default(),
            logging: LoggingConfig::for_environment(env),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let env = Environment::from_env();
        Self {
            environment: env,
            jwt: JwtConfig::from_env(),
            cache: CacheConfig::from_env(),
            logging: LoggingConfig::for_environment(env),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_config_default() {
        let config = AppConfig::default();
        assert!(config.environment.is_development());
        assert_eq!(config.jwt.access_token_expiry, 900);
        assert_eq!(config.cache.url, "redis://localhost:6379");
    }

    #[test]
    fn test_app_config_serialization() {
        let config = AppConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: AppConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.jwt.access_token_expiry, config.jwt.access_token_expiry);
        assert_eq!(deserialized.cache.url, config.cache.url);
    }
}
