//! Package video configuration value object

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::payload::{coerce_text, Payload};

/// Default yt-dlp executable when none is configured
pub const DEFAULT_YT_DLP: &str = "yt-dlp";
/// Default ffmpeg executable when none is configured
pub const DEFAULT_FFMPEG: &str = "ffmpeg";

/// The external package's persisted configuration.
///
/// The bridge only ever touches the five path fields. Any other key the
/// package reports is carried in `extra` and handed back unchanged.
/// Serialized flat with the package's own keyword names; camelCase keys are
/// accepted on input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoConfig {
    #[serde(default, alias = "credentialsPath")]
    pub credentials_path: String,
    #[serde(default, alias = "tokenPath")]
    pub token_path: String,
    #[serde(default, alias = "downloadDirectory")]
    pub download_directory: String,
    #[serde(default = "default_yt_dlp", alias = "ytDlpPath")]
    pub yt_dlp_path: String,
    #[serde(default = "default_ffmpeg", alias = "ffmpegPath")]
    pub ffmpeg_path: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn default_yt_dlp() -> String {
    DEFAULT_YT_DLP.to_string()
}

fn default_ffmpeg() -> String {
    DEFAULT_FFMPEG.to_string()
}

/// Path overrides supplied by a `save_config` payload.
/// Only fields present in the payload replace the current config.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub credentials_path: Option<String>,
    pub token_path: Option<String>,
    pub download_directory: Option<String>,
    pub yt_dlp_path: Option<String>,
    pub ffmpeg_path: Option<String>,
}

impl ConfigOverrides {
    /// Collect overrides from the camelCase payload fields.
    ///
    /// A present, non-null field counts as an override even when blank.
    pub fn from_payload(payload: &Payload) -> Self {
        let field = |name: &str| {
            payload
                .get(name)
                .filter(|v| !v.is_null())
                .map(|v| coerce_text(v).trim().to_string())
        };

        Self {
            credentials_path: field("credentialsPath"),
            token_path: field("tokenPath"),
            download_directory: field("downloadDirectory"),
            yt_dlp_path: field("ytDlpPath"),
            ffmpeg_path: field("ffmpegPath"),
        }
    }

    /// Layer these overrides on top of `current`.
    ///
    /// Tool paths that end up blank fall back to their defaults.
    pub fn apply(self, current: VideoConfig) -> VideoConfig {
        let yt_dlp_path = self.yt_dlp_path.unwrap_or(current.yt_dlp_path);
        let ffmpeg_path = self.ffmpeg_path.unwrap_or(current.ffmpeg_path);

        VideoConfig {
            credentials_path: self.credentials_path.unwrap_or(current.credentials_path),
            token_path: self.token_path.unwrap_or(current.token_path),
            download_directory: self
                .download_directory
                .unwrap_or(current.download_directory),
            yt_dlp_path: non_blank_or(yt_dlp_path, DEFAULT_YT_DLP),
            ffmpeg_path: non_blank_or(ffmpeg_path, DEFAULT_FFMPEG),
            extra: current.extra,
        }
    }
}

fn non_blank_or(value: String, default: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        default.to_string()
    } else {
        trimmed.to_string()
    }
}
