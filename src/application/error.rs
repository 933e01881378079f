//! Bridge error aggregate

use std::fmt;

use thiserror::Error;

use crate::domain::error::{
    ConfigError, PayloadError, RootError, UnsupportedOperationError, ValidationError,
};

use super::ports::CollaboratorError;

/// Coarse category of a failure.
///
/// The envelope only carries the message; the kind exists so call sites and
/// logs can tell failures apart without matching on text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Invocation,
    Configuration,
    Decoding,
    Validation,
    UnsupportedOperation,
    Collaborator,
}

impl ErrorKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Invocation => "invocation",
            Self::Configuration => "configuration",
            Self::Decoding => "decoding",
            Self::Validation => "validation",
            Self::UnsupportedOperation => "unsupported_operation",
            Self::Collaborator => "collaborator",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Any failure of a bridge invocation. Display strings are the envelope messages.
#[derive(Debug, Error)]
pub enum BridgeError {
    #[error("Operation argument is required.")]
    MissingOperation,

    #[error("{0}")]
    Arguments(String),

    #[error(transparent)]
    Root(#[from] RootError),

    #[error(transparent)]
    Settings(#[from] ConfigError),

    #[error(transparent)]
    Payload(#[from] PayloadError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Unsupported(#[from] UnsupportedOperationError),

    #[error(transparent)]
    Collaborator(#[from] CollaboratorError),

    #[error("Uploaded video {video_id} but failed to add it to playlist {playlist_id}: {source}")]
    PlaylistAttach {
        video_id: String,
        playlist_id: String,
        #[source]
        source: CollaboratorError,
    },
}

impl BridgeError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingOperation | Self::Arguments(_) => ErrorKind::Invocation,
            Self::Root(_) | Self::Settings(_) => ErrorKind::Configuration,
            Self::Payload(_) => ErrorKind::Decoding,
            Self::Validation(_) => ErrorKind::Validation,
            Self::Unsupported(_) => ErrorKind::UnsupportedOperation,
            Self::Collaborator(_) | Self::PlaylistAttach { .. } => ErrorKind::Collaborator,
        }
    }
}
