//! Chapter, transcript and report extraction port interface

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::config::VideoConfig;

use super::CollaboratorError;

/// Port for read-only extraction from public videos and channels
#[async_trait]
pub trait InsightService: Send + Sync {
    async fn fetch_video_chapters(
        &self,
        config: &VideoConfig,
        source_url: &str,
    ) -> Result<Value, CollaboratorError>;

    /// Build transcript markdown for a video URL or id.
    ///
    /// `languages` of None means any available language.
    async fn build_transcript_markdown(
        &self,
        source: &str,
        languages: Option<&[String]>,
    ) -> Result<Value, CollaboratorError>;

    async fn fetch_channel_report(
        &self,
        config: &VideoConfig,
        channel_url: &str,
    ) -> Result<Value, CollaboratorError>;
}
