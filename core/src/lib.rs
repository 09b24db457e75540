//! # ShopGate Core
//!
//! Core business logic and domain layer for the ShopGate backend.
//! This crate contains the token entities, the session service, the
//! revocation-store interface, and the error types that form the
//! foundation of the authentication architecture.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use repositories::*;
pub use services::*;
