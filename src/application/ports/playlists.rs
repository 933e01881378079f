//! Playlist port interface

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::config::VideoConfig;

use super::CollaboratorError;

/// Port for playlist CRUD and membership
#[async_trait]
pub trait PlaylistService: Send + Sync {
    async fn list_playlists(&self, config: &VideoConfig) -> Result<Value, CollaboratorError>;

    async fn create_playlist(
        &self,
        config: &VideoConfig,
        title: &str,
        description: &str,
        privacy_status: &str,
    ) -> Result<Value, CollaboratorError>;

    /// Returns whether the package reported a deletion.
    async fn delete_playlist(
        &self,
        config: &VideoConfig,
        playlist_id: &str,
    ) -> Result<bool, CollaboratorError>;

    async fn list_playlist_videos(
        &self,
        config: &VideoConfig,
        playlist_id: &str,
    ) -> Result<Value, CollaboratorError>;

    async fn add_video_to_playlist(
        &self,
        config: &VideoConfig,
        playlist_id: &str,
        video_id: &str,
    ) -> Result<(), CollaboratorError>;
}
