//! In-memory package double for handler and dispatcher tests

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::{json, Map, Value};

use super::ports::{
    AuthService, ChannelService, CollaboratorError, InsightService, MediaService,
    PackageRuntime, PlaylistService, VideoConfigStore,
};
use crate::domain::config::VideoConfig;

/// Records every call by port method name and keeps config in memory.
pub struct FakePackage {
    config: Mutex<VideoConfig>,
    calls: Mutex<Vec<String>>,
    failing: Option<(&'static str, &'static str)>,
}

impl FakePackage {
    pub fn new() -> Self {
        Self {
            config: Mutex::new(VideoConfig {
                credentials_path: "/root/.appdata/youtube/youtube-auth/client_secret.json"
                    .to_string(),
                token_path: "/root/.appdata/youtube/youtube-auth/token.json".to_string(),
                download_directory: "/videos".to_string(),
                yt_dlp_path: "yt-dlp".to_string(),
                ffmpeg_path: "ffmpeg".to_string(),
                extra: Map::new(),
            }),
            calls: Mutex::new(Vec::new()),
            failing: None,
        }
    }

    /// Make `method` raise `message`
    pub fn failing(method: &'static str, message: &'static str) -> Self {
        Self {
            failing: Some((method, message)),
            ..Self::new()
        }
    }

    /// Start with an extra package config key the bridge does not model
    pub fn with_config_key(self, key: &str, value: Value) -> Self {
        self.config
            .lock()
            .unwrap()
            .extra
            .insert(key.to_string(), value);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn stored_config(&self) -> VideoConfig {
        self.config.lock().unwrap().clone()
    }

    fn record(&self, call: impl Into<String>) -> Result<(), CollaboratorError> {
        let call = call.into();
        let method = call.split(' ').next().unwrap_or_default().to_string();
        self.calls.lock().unwrap().push(call);

        match self.failing {
            Some((failing, message)) if failing == method => {
                Err(CollaboratorError::Raised(message.to_string()))
            }
            _ => Ok(()),
        }
    }
}

#[async_trait]
impl PackageRuntime for FakePackage {
    async fn runtime_executable(&self) -> Result<PathBuf, CollaboratorError> {
        self.record("runtime_executable")?;
        Ok(PathBuf::from("/usr/bin/python3"))
    }
}

#[async_trait]
impl VideoConfigStore for FakePackage {
    async fn load_config(&self) -> Result<VideoConfig, CollaboratorError> {
        self.record("load_config")?;
        Ok(self.stored_config())
    }

    async fn save_config(&self, config: &VideoConfig) -> Result<(), CollaboratorError> {
        self.record("save_config")?;
        *self.config.lock().unwrap() = config.clone();
        Ok(())
    }

    async fn ensure_directories(&self, _config: &VideoConfig) -> Result<(), CollaboratorError> {
        self.record("ensure_directories")
    }
}

#[async_trait]
impl AuthService for FakePackage {
    async fn auth_status(&self, _config: &VideoConfig) -> Result<Value, CollaboratorError> {
        self.record("auth_status")?;
        Ok(json!({"ready": true, "message": "Token is valid."}))
    }

    async fn run_oauth_flow(&self, _config: &VideoConfig) -> Result<Value, CollaboratorError> {
        self.record("run_oauth_flow")?;
        Ok(json!({"ok": true, "message": "OAuth completed."}))
    }

    async fn refresh_token(&self, _config: &VideoConfig) -> Result<(), CollaboratorError> {
        self.record("refresh_token")
    }
}

#[async_trait]
impl ChannelService for FakePackage {
    async fn list_channel_videos(&self, _config: &VideoConfig) -> Result<Value, CollaboratorError> {
        self.record("list_channel_videos")?;
        Ok(json!([{"videoId": "v1", "title": "First"}, {"videoId": "v2", "title": "Second"}]))
    }

    async fn delete_channel_video(
        &self,
        _config: &VideoConfig,
        video_id: &str,
    ) -> Result<bool, CollaboratorError> {
        self.record(format!("delete_channel_video {video_id}"))?;
        Ok(video_id != "missing")
    }

    async fn validate_upload_access(&self, _config: &VideoConfig) -> Result<(), CollaboratorError> {
        self.record("validate_upload_access")
    }
}

#[async_trait]
impl PlaylistService for FakePackage {
    async fn list_playlists(&self, _config: &VideoConfig) -> Result<Value, CollaboratorError> {
        self.record("list_playlists")?;
        Ok(json!([{"playlistId": "PL1", "title": "Talks"}]))
    }

    async fn create_playlist(
        &self,
        _config: &VideoConfig,
        title: &str,
        description: &str,
        privacy_status: &str,
    ) -> Result<Value, CollaboratorError> {
        self.record(format!("create_playlist {title}|{description}|{privacy_status}"))?;
        Ok(json!({
            "playlistId": "PLnew",
            "title": title,
            "description": description,
            "privacyStatus": privacy_status
        }))
    }

    async fn delete_playlist(
        &self,
        _config: &VideoConfig,
        playlist_id: &str,
    ) -> Result<bool, CollaboratorError> {
        self.record(format!("delete_playlist {playlist_id}"))?;
        Ok(true)
    }

    async fn list_playlist_videos(
        &self,
        _config: &VideoConfig,
        playlist_id: &str,
    ) -> Result<Value, CollaboratorError> {
        self.record(format!("list_playlist_videos {playlist_id}"))?;
        Ok(json!([{"videoId": "v1"}]))
    }

    async fn add_video_to_playlist(
        &self,
        _config: &VideoConfig,
        playlist_id: &str,
        video_id: &str,
    ) -> Result<(), CollaboratorError> {
        self.record(format!("add_video_to_playlist {playlist_id}|{video_id}"))
    }
}

#[async_trait]
impl MediaService for FakePackage {
    async fn upload_file(
        &self,
        _config: &VideoConfig,
        file_path: &Path,
        title: &str,
    ) -> Result<String, CollaboratorError> {
        self.record(format!("upload_file {}|{title}", file_path.display()))?;
        Ok("dQw4w9WgXcQ".to_string())
    }

    async fn download_best_mp4(
        &self,
        config: &VideoConfig,
        url: &str,
    ) -> Result<PathBuf, CollaboratorError> {
        self.record(format!("download_best_mp4 {url}"))?;
        Ok(Path::new(&config.download_directory).join("video.mp4"))
    }

    async fn cut_clips_local_mp4(
        &self,
        _config: &VideoConfig,
        source_path: &Path,
        timestamps: &Value,
        output_dir: Option<&Path>,
    ) -> Result<Vec<PathBuf>, CollaboratorError> {
        let out = output_dir.map(Path::to_path_buf).unwrap_or_else(|| PathBuf::from("/clips"));
        self.record(format!(
            "cut_clips_local_mp4 {}|{}|{}",
            source_path.display(),
            timestamps,
            out.display()
        ))?;

        let count = timestamps.as_array().map_or(1, Vec::len);
        Ok((1..=count)
            .map(|i| out.join(format!("clip-{i:02}.mp4")))
            .collect())
    }
}

#[async_trait]
impl InsightService for FakePackage {
    async fn fetch_video_chapters(
        &self,
        _config: &VideoConfig,
        source_url: &str,
    ) -> Result<Value, CollaboratorError> {
        self.record(format!("fetch_video_chapters {source_url}"))?;
        Ok(json!({"chapters": [{"start": "00:00", "title": "Intro"}]}))
    }

    async fn build_transcript_markdown(
        &self,
        source: &str,
        languages: Option<&[String]>,
    ) -> Result<Value, CollaboratorError> {
        let languages = languages.map_or_else(|| "*".to_string(), |l| l.join(","));
        self.record(format!("build_transcript_markdown {source}|{languages}"))?;
        Ok(json!({"markdown": "# Transcript", "language": languages}))
    }

    async fn fetch_channel_report(
        &self,
        _config: &VideoConfig,
        channel_url: &str,
    ) -> Result<Value, CollaboratorError> {
        self.record(format!("fetch_channel_report {channel_url}"))?;
        Ok(json!({"videoCount": 3, "markdownPath": "/reports/channel.md"}))
    }
}
