//! Domain layer - Core value objects and errors
//!
//! Contains the wire-level vocabulary of the bridge: operations, payloads,
//! result values, the response envelope, and configuration.
//! This layer has no dependencies on external systems.

pub mod config;
pub mod envelope;
pub mod error;
pub mod operation;
pub mod payload;
pub mod value;

// Re-export common types
pub use config::{BridgeSettings, ConfigOverrides, VideoConfig};
pub use envelope::ResponseEnvelope;
pub use error::*;
pub use operation::{Operation, PackageOperation};
pub use payload::Payload;
pub use value::ResultValue;
