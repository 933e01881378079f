//! Package configuration port interface

use async_trait::async_trait;

use crate::domain::config::VideoConfig;

use super::CollaboratorError;

/// Port for the package's own persisted configuration
#[async_trait]
pub trait VideoConfigStore: Send + Sync {
    /// Load the currently persisted config.
    async fn load_config(&self) -> Result<VideoConfig, CollaboratorError>;

    /// Persist `config`, replacing the stored one.
    async fn save_config(&self, config: &VideoConfig) -> Result<(), CollaboratorError>;

    /// Create the directories `config` refers to (auth and download folders).
    async fn ensure_directories(&self, config: &VideoConfig) -> Result<(), CollaboratorError>;
}
