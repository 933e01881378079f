//! Application layer - Dispatch, handlers and port interfaces
//!
//! Contains the operation handlers and the trait definitions
//! for the external package they call.

pub mod dispatch;
pub mod error;
pub mod operations;
pub mod ports;

#[cfg(test)]
pub(crate) mod fake;

// Re-export use cases
pub use dispatch::Dispatcher;
pub use error::{BridgeError, ErrorKind};
