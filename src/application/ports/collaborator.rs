//! Collaborator error and aggregate package port

use thiserror::Error;

use super::{
    AuthService, ChannelService, InsightService, MediaService, PackageRuntime, PlaylistService,
    VideoConfigStore,
};

/// Errors raised while performing a domain operation in the external package
#[derive(Debug, Clone, Error)]
pub enum CollaboratorError {
    /// The package raised a descriptive failure; the message is kept verbatim
    #[error("{0}")]
    Raised(String),

    #[error("Failed to start package runtime '{runtime}': {message}")]
    SpawnFailed { runtime: String, message: String },

    #[error("Package runtime exited with status {status}: {stderr}")]
    Exited { status: i32, stderr: String },

    #[error("Package returned invalid output: {0}")]
    InvalidOutput(String),

    #[error("Failed to communicate with package runtime: {0}")]
    Io(String),
}

/// Everything the dispatcher needs from the external package.
///
/// Implemented automatically for any type providing all the ports.
pub trait YoutunePackage:
    PackageRuntime
    + VideoConfigStore
    + AuthService
    + ChannelService
    + PlaylistService
    + MediaService
    + InsightService
{
}

impl<T> YoutunePackage for T where
    T: PackageRuntime
        + VideoConfigStore
        + AuthService
        + ChannelService
        + PlaylistService
        + MediaService
        + InsightService
{
}
