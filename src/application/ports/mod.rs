//! Port interfaces (traits) for the external package
//!
//! These traits define the narrow functional boundary between the
//! dispatcher and the python-youtune package. The bridge knows each
//! collaborator's name, inputs and result shape, never its internals.

pub mod auth;
pub mod channel;
pub mod collaborator;
pub mod config;
pub mod insights;
pub mod media;
pub mod playlists;
pub mod runtime;

// Re-export common types
pub use auth::AuthService;
pub use channel::ChannelService;
pub use collaborator::{CollaboratorError, YoutunePackage};
pub use config::VideoConfigStore;
pub use insights::InsightService;
pub use media::MediaService;
pub use playlists::PlaylistService;
pub use runtime::PackageRuntime;
