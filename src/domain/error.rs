//! Domain error types

use std::path::PathBuf;

use thiserror::Error;

/// Error when the request payload on stdin cannot be decoded
#[derive(Debug, Error)]
pub enum PayloadError {
    #[error("Failed to read payload: {0}")]
    Read(#[from] std::io::Error),

    #[error("Invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Payload must be a JSON object.")]
    NotAnObject,
}

/// Error when a payload field required by an operation is missing or blank
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Missing required field: {field}")]
pub struct ValidationError {
    pub field: String,
}

impl ValidationError {
    pub fn missing(field: &str) -> Self {
        Self {
            field: field.to_string(),
        }
    }
}

/// Error when an operation name matches no handler
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unsupported operation: {input}")]
pub struct UnsupportedOperationError {
    pub input: String,
}

/// Error when the dependency root cannot be resolved
#[derive(Debug, Clone, Error)]
pub enum RootError {
    #[error("YOUTUNE_ROOT does not exist: {}", .0.display())]
    NotFound(PathBuf),

    #[error("YOUTUNE_ROOT is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("Cannot access YOUTUNE_ROOT {}: {message}", .path.display())]
    Inaccessible { path: PathBuf, message: String },

    #[error("Cannot expand '~' in YOUTUNE_ROOT: home directory is unknown")]
    NoHomeDirectory,

    #[error("YOUTUNE_ROOT cannot be added to PYTHONPATH: {}", .0.display())]
    Unjoinable(PathBuf),
}

/// Error when the bridge settings file cannot be loaded
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("Failed to read settings file: {0}")]
    ReadError(String),

    #[error("Failed to parse settings file: {0}")]
    ParseError(String),
}
