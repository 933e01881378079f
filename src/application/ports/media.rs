//! Media transfer and clipping port interface

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::config::VideoConfig;

use super::CollaboratorError;

/// Port for uploads, downloads and local clipping
#[async_trait]
pub trait MediaService: Send + Sync {
    /// Upload a local file. Returns the new video id.
    async fn upload_file(
        &self,
        config: &VideoConfig,
        file_path: &Path,
        title: &str,
    ) -> Result<String, CollaboratorError>;

    /// Download the best MP4 rendition of `url`. Returns the written file.
    async fn download_best_mp4(
        &self,
        config: &VideoConfig,
        url: &str,
    ) -> Result<PathBuf, CollaboratorError>;

    /// Cut clips from a local file.
    ///
    /// # Arguments
    /// * `timestamps` - Clip ranges, forwarded to the package as given
    /// * `output_dir` - Where to write clips; the package decides when None
    ///
    /// # Returns
    /// The paths of the written clips
    async fn cut_clips_local_mp4(
        &self,
        config: &VideoConfig,
        source_path: &Path,
        timestamps: &Value,
        output_dir: Option<&Path>,
    ) -> Result<Vec<PathBuf>, CollaboratorError>;
}
