//! Operation dispatcher
//!
//! Routes an [`Operation`] to its handler through an exhaustive match.
//! Package operations share one precondition: the package config is loaded
//! and its directories ensured before the handler runs.

use std::path::PathBuf;

use tracing::debug;

use crate::domain::config::VideoConfig;
use crate::domain::operation::{Operation, PackageOperation};
use crate::domain::payload::Payload;
use crate::domain::value::ResultValue;

use super::error::BridgeError;
use super::operations::{auth, config, insights, library, media};
use super::ports::YoutunePackage;

/// Routes operations to handlers backed by a package implementation
pub struct Dispatcher<P: YoutunePackage> {
    package: P,
    root: PathBuf,
}

impl<P: YoutunePackage> Dispatcher<P> {
    /// Create a dispatcher over a constructed package client.
    ///
    /// `root` is the canonical package root reported by `health`.
    pub fn new(package: P, root: PathBuf) -> Self {
        Self { package, root }
    }

    /// Get the underlying package
    pub fn package(&self) -> &P {
        &self.package
    }

    /// Parse an operation name and dispatch it.
    ///
    /// Fails with an unsupported-operation error naming `operation` if it
    /// matches no handler.
    pub async fn run(&self, operation: &str, payload: &Payload) -> Result<ResultValue, BridgeError> {
        let operation: Operation = operation.parse()?;
        self.dispatch(operation, payload).await
    }

    /// Dispatch a parsed operation
    pub async fn dispatch(
        &self,
        operation: Operation,
        payload: &Payload,
    ) -> Result<ResultValue, BridgeError> {
        debug!(%operation, "dispatching operation");

        match operation {
            Operation::Health => self.health().await,
            Operation::GetConfig => config::get_config(&self.package).await,
            Operation::SaveConfig => config::save_config(&self.package, payload).await,
            Operation::Package(op) => {
                let prepared = self.prepare_config().await?;
                self.dispatch_package(op, &prepared, payload).await
            }
        }
    }

    /// Confirm the runtime can load the package and report where it runs
    async fn health(&self) -> Result<ResultValue, BridgeError> {
        let runtime = self.package.runtime_executable().await?;

        Ok(ResultValue::object([
            ("ok", ResultValue::from(true)),
            ("root", ResultValue::Path(self.root.clone())),
            ("runtimeExecutable", ResultValue::Path(runtime)),
        ]))
    }

    /// Load the persisted config and make sure its directories exist
    async fn prepare_config(&self) -> Result<VideoConfig, BridgeError> {
        let config = self.package.load_config().await?;
        self.package.ensure_directories(&config).await?;
        Ok(config)
    }

    async fn dispatch_package(
        &self,
        operation: PackageOperation,
        config: &VideoConfig,
        payload: &Payload,
    ) -> Result<ResultValue, BridgeError> {
        let package = &self.package;

        match operation {
            PackageOperation::AuthStatus => auth::auth_status(package, config).await,
            PackageOperation::AuthOauth => auth::auth_oauth(package, config).await,
            PackageOperation::AuthRefresh => auth::auth_refresh(package, config).await,
            PackageOperation::ListChannelVideos => {
                library::list_channel_videos(package, config).await
            }
            PackageOperation::DeleteChannelVideo => {
                library::delete_channel_video(package, config, payload).await
            }
            PackageOperation::ListPlaylists => library::list_playlists(package, config).await,
            PackageOperation::CreatePlaylist => {
                library::create_playlist(package, config, payload).await
            }
            PackageOperation::DeletePlaylist => {
                library::delete_playlist(package, config, payload).await
            }
            PackageOperation::ListPlaylistVideos => {
                library::list_playlist_videos(package, config, payload).await
            }
            PackageOperation::AddVideoToPlaylist => {
                library::add_video_to_playlist(package, config, payload).await
            }
            PackageOperation::UploadFile => media::upload_file(package, config, payload).await,
            PackageOperation::DownloadBestMp4 => {
                media::download_best_mp4(package, config, payload).await
            }
            PackageOperation::FetchVideoChapters => {
                insights::fetch_video_chapters(package, config, payload).await
            }
            PackageOperation::BuildTranscriptMarkdown => {
                insights::build_transcript_markdown(package, payload).await
            }
            PackageOperation::FetchChannelReport => {
                insights::fetch_channel_report(package, config, payload).await
            }
            PackageOperation::CutClipsLocalMp4 => {
                media::cut_clips_local_mp4(package, config, payload).await
            }
        }
    }
}
