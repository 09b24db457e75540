//! Business services containing domain logic and use cases.

pub mod session;

// Re-export commonly used types
pub use session::{
    AccessContext, Clock, SessionConfig, SessionManager, SystemClock, TokenCodec,
};
