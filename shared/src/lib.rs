//! Shared configuration types for the ShopGate server
//!
//! This crate provides common functionality used across all server modules:
//! - Authentication (JWT) configuration
//! - Cache (Redis) configuration
//! - Environment detection and logging configuration

pub mod config;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, CacheConfig, Environment, JwtConfig, LogFormat, LoggingConfig,
};
