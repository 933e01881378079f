//! Package runtime port interface

use std::path::PathBuf;

use async_trait::async_trait;

use super::CollaboratorError;

/// Port for the runtime the package is executed in
#[async_trait]
pub trait PackageRuntime: Send + Sync {
    /// Start the runtime, import every package module, and return the
    /// runtime's absolute executable path.
    async fn runtime_executable(&self) -> Result<PathBuf, CollaboratorError>;
}
