//! CloudBus Common Library
//!
//! Header vocabulary, resource kinds and the message adapter shared by the
//! CloudBus producers.

pub mod constants;
pub mod error;
pub mod message;
pub mod types;

// Re-export commonly used types
pub use constants::{Header, Operation, UnknownOperation};
pub use error::{Error, FaultCategory, Result};
pub use message::{Body, FromHeader, HeaderValue, Message, MessageAdapter, MessageExt};
pub use types::*;

/// CloudBus version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
