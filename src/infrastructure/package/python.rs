//! Python runtime adapter for the package ports

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Stdio;

use async_trait::async_trait;
use serde_json::Value;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::{debug, warn};

use super::protocol::{CallReply, CallRequest, RuntimeCheck, CALL_SCRIPT, RUNTIME_SCRIPT};
use crate::application::ports::{
    AuthService, ChannelService, CollaboratorError, InsightService, MediaService,
    PackageRuntime, PlaylistService, VideoConfigStore,
};
use crate::domain::config::VideoConfig;
use crate::domain::payload::is_truthy;

/// Runs each package call in a fresh runtime process.
///
/// The child gets `PYTHONPATH` set to `search_path` so the package imports
/// from the resolved root; the bridge's own environment is left untouched.
pub struct PythonPackage {
    python: PathBuf,
    search_path: OsString,
}

impl PythonPackage {
    pub fn new(python: impl Into<PathBuf>, search_path: impl Into<OsString>) -> Self {
        Self {
            python: python.into(),
            search_path: search_path.into(),
        }
    }

    /// Execute one call and return its result value
    async fn call(&self, request: CallRequest<'_>) -> Result<Value, CollaboratorError> {
        let line = request.to_line()?;
        self.execute(CALL_SCRIPT, &request.target(), &line).await
    }

    /// Run `script` with one request line on stdin and parse the reply
    async fn execute(
        &self,
        script: &str,
        target: &str,
        line: &str,
    ) -> Result<Value, CollaboratorError> {
        debug!(%target, runtime = %self.python.display(), "spawning package runtime");

        let mut child = Command::new(&self.python)
            .arg("-c")
            .arg(script)
            .env("PYTHONPATH", &self.search_path)
            .env("PYTHONIOENCODING", "utf-8")
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| CollaboratorError::SpawnFailed {
                runtime: self.python.display().to_string(),
                message: e.to_string(),
            })?;

        if let Some(mut stdin) = child.stdin.take() {
            // A runtime that dies before reading reports through its exit status.
            if let Err(e) = stdin.write_all(line.as_bytes()).await {
                warn!(%target, error = %e, "failed to write package request");
            }
            // Dropping stdin closes the pipe.
        }

        let output = child
            .wait_with_output()
            .await
            .map_err(|e| CollaboratorError::Io(e.to_string()))?;

        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        debug!(%target, status = ?output.status.code(), "package runtime exited");
        if !stderr.is_empty() {
            debug!(%target, %stderr, "package runtime stderr");
        }

        if !output.status.success() {
            return Err(CollaboratorError::Exited {
                status: output.status.code().unwrap_or(-1),
                stderr: if stderr.is_empty() {
                    "no stderr output".to_string()
                } else {
                    stderr
                },
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        CallReply::parse(&stdout)?.into_result()
    }
}

/// Text form of a path for the wire
fn path_arg(path: &Path) -> Value {
    Value::String(path.to_string_lossy().into_owned())
}

fn expect_text(value: Value, what: &str) -> Result<String, CollaboratorError> {
    match value {
        Value::String(text) => Ok(text),
        other => Err(CollaboratorError::InvalidOutput(format!(
            "expected {what} as a string, got {other}"
        ))),
    }
}

fn expect_paths(value: Value) -> Result<Vec<PathBuf>, CollaboratorError> {
    let Value::Array(items) = value else {
        return Err(CollaboratorError::InvalidOutput(format!(
            "expected a list of clip paths, got {value}"
        )));
    };

    items
        .into_iter()
        .map(|item| expect_text(item, "clip path").map(PathBuf::from))
        .collect()
}

#[async_trait]
impl PackageRuntime for PythonPackage {
    async fn runtime_executable(&self) -> Result<PathBuf, CollaboratorError> {
        let line = RuntimeCheck::package().to_line()?;
        let value = self.execute(RUNTIME_SCRIPT, "runtime check", &line).await?;

        let executable = expect_text(value, "runtime executable")?;
        if executable.trim().is_empty() {
            return Err(CollaboratorError::InvalidOutput(
                "runtime did not report its executable".to_string(),
            ));
        }
        Ok(PathBuf::from(executable))
    }
}

#[async_trait]
impl VideoConfigStore for PythonPackage {
    async fn load_config(&self) -> Result<VideoConfig, CollaboratorError> {
        let value = self.call(CallRequest::new("config", "load_config")).await?;
        serde_json::from_value(value)
            .map_err(|e| CollaboratorError::InvalidOutput(format!("config mapping: {e}")))
    }

    async fn save_config(&self, config: &VideoConfig) -> Result<(), CollaboratorError> {
        self.call(CallRequest::new("config", "save_config").with_config(config))
            .await
            .map(drop)
    }

    async fn ensure_directories(&self, config: &VideoConfig) -> Result<(), CollaboratorError> {
        self.call(CallRequest::new("config", "ensure_directories").with_config(config))
            .await
            .map(drop)
    }
}

#[async_trait]
impl AuthService for PythonPackage {
    async fn auth_status(&self, config: &VideoConfig) -> Result<Value, CollaboratorError> {
        self.call(CallRequest::new("auth", "get_auth_status").with_config(config))
            .await
    }

    async fn run_oauth_flow(&self, config: &VideoConfig) -> Result<Value, CollaboratorError> {
        self.call(CallRequest::new("auth", "run_oauth_flow").with_config(config))
            .await
    }

    async fn refresh_token(&self, config: &VideoConfig) -> Result<(), CollaboratorError> {
        self.call(
            CallRequest::new("auth", "ensure_token")
                .with_config(config)
                .kwarg("force_refresh", true),
        )
        .await
        .map(drop)
    }
}

#[async_trait]
impl ChannelService for PythonPackage {
    async fn list_channel_videos(&self, config: &VideoConfig) -> Result<Value, CollaboratorError> {
        self.call(CallRequest::new("channel", "list_channel_videos").with_config(config))
            .await
    }

    async fn delete_channel_video(
        &self,
        config: &VideoConfig,
        video_id: &str,
    ) -> Result<bool, CollaboratorError> {
        let value = self
            .call(
                CallRequest::new("channel", "delete_channel_video")
                    .with_config(config)
                    .arg(video_id),
            )
            .await?;
        Ok(is_truthy(&value))
    }

    async fn validate_upload_access(&self, config: &VideoConfig) -> Result<(), CollaboratorError> {
        self.call(CallRequest::new("channel", "validate_upload_access").with_config(config))
            .await
            .map(drop)
    }
}

#[async_trait]
impl PlaylistService for PythonPackage {
    async fn list_playlists(&self, config: &VideoConfig) -> Result<Value, CollaboratorError> {
        self.call(CallRequest::new("playlists", "list_playlists").with_config(config))
            .await
    }

    async fn create_playlist(
        &self,
        config: &VideoConfig,
        title: &str,
        description: &str,
        privacy_status: &str,
    ) -> Result<Value, CollaboratorError> {
        self.call(
            CallRequest::new("playlists", "create_playlist")
                .with_config(config)
                .kwarg("title", title)
                .kwarg("description", description)
                .kwarg("privacy_status", privacy_status),
        )
        .await
    }

    async fn delete_playlist(
        &self,
        config: &VideoConfig,
        playlist_id: &str,
    ) -> Result<bool, CollaboratorError> {
        let value = self
            .call(
                CallRequest::new("playlists", "delete_playlist")
                    .with_config(config)
                    .arg(playlist_id),
            )
            .await?;
        Ok(is_truthy(&value))
    }

    async fn list_playlist_videos(
        &self,
        config: &VideoConfig,
        playlist_id: &str,
    ) -> Result<Value, CollaboratorError> {
        self.call(
            CallRequest::new("playlists", "list_playlist_videos")
                .with_config(config)
                .arg(playlist_id),
        )
        .await
    }

    async fn add_video_to_playlist(
        &self,
        config: &VideoConfig,
        playlist_id: &str,
        video_id: &str,
    ) -> Result<(), CollaboratorError> {
        self.call(
            CallRequest::new("playlists", "add_video_to_playlist")
                .with_config(config)
                .arg(playlist_id)
                .arg(video_id),
        )
        .await
        .map(drop)
    }
}

#[async_trait]
impl MediaService for PythonPackage {
    async fn upload_file(
        &self,
        config: &VideoConfig,
        file_path: &Path,
        title: &str,
    ) -> Result<String, CollaboratorError> {
        let value = self
            .call(
                CallRequest::new("upload", "upload_file")
                    .with_config(config)
                    .arg(path_arg(file_path))
                    .arg(title),
            )
            .await?;
        expect_text(value, "video id")
    }

    async fn download_best_mp4(
        &self,
        config: &VideoConfig,
        url: &str,
    ) -> Result<PathBuf, CollaboratorError> {
        let value = self
            .call(
                CallRequest::new("pipeline", "download_best_mp4")
                    .with_config(config)
                    .arg(url),
            )
            .await?;
        expect_text(value, "output path").map(PathBuf::from)
    }

    async fn cut_clips_local_mp4(
        &self,
        config: &VideoConfig,
        source_path: &Path,
        timestamps: &Value,
        output_dir: Option<&Path>,
    ) -> Result<Vec<PathBuf>, CollaboratorError> {
        let value = self
            .call(
                CallRequest::new("pipeline", "cut_clips_local_mp4")
                    .with_config(config)
                    .arg(path_arg(source_path))
                    .arg(timestamps.clone())
                    .kwarg("output_dir", output_dir.map_or(Value::Null, path_arg)),
            )
            .await?;
        expect_paths(value)
    }
}

#[async_trait]
impl InsightService for PythonPackage {
    async fn fetch_video_chapters(
        &self,
        config: &VideoConfig,
        source_url: &str,
    ) -> Result<Value, CollaboratorError> {
        self.call(
            CallRequest::new("chapters", "fetch_video_chapters")
                .with_config(config)
                .arg(source_url),
        )
        .await
    }

    async fn build_transcript_markdown(
        &self,
        source: &str,
        languages: Option<&[String]>,
    ) -> Result<Value, CollaboratorError> {
        let languages = languages.map_or(Value::Null, |list| Value::from(list.to_vec()));
        self.call(
            CallRequest::new("transcript", "build_transcript_markdown")
                .arg(source)
                .arg(languages),
        )
        .await
    }

    async fn fetch_channel_report(
        &self,
        config: &VideoConfig,
        channel_url: &str,
    ) -> Result<Value, CollaboratorError> {
        self.call(
            CallRequest::new("fetch", "fetch_and_export_channel_videos_markdown")
                .with_config(config)
                .arg(channel_url),
        )
        .await
    }
}
