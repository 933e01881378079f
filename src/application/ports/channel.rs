//! Channel port interface

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::config::VideoConfig;

use super::CollaboratorError;

/// Port for the authenticated user's channel
#[async_trait]
pub trait ChannelService: Send + Sync {
    /// List uploaded videos as a list of mappings.
    async fn list_channel_videos(&self, config: &VideoConfig) -> Result<Value, CollaboratorError>;

    /// Delete a video. Returns whether the package reported a deletion.
    async fn delete_channel_video(
        &self,
        config: &VideoConfig,
        video_id: &str,
    ) -> Result<bool, CollaboratorError>;

    /// Fail unless the account may upload.
    async fn validate_upload_access(&self, config: &VideoConfig) -> Result<(), CollaboratorError>;
}
