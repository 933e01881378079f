//! Upload, download and clipping handlers

use std::path::{Path, PathBuf};

use tracing::warn;

use crate::application::error::BridgeError;
use crate::application::ports::{ChannelService, MediaService, PlaylistService};
use crate::domain::config::VideoConfig;
use crate::domain::payload::Payload;
use crate::domain::value::ResultValue;

/// Public short-link prefix for uploaded videos
pub const SHORT_URL_PREFIX: &str = "https://youtu.be/";

/// Upload a file, optionally attaching it to a playlist afterwards.
///
/// The attach step only runs for a non-blank `playlistId`. If it fails the
/// whole operation fails even though the upload already happened; the error
/// names the uploaded video id so the caller can recover.
pub async fn upload_file<P>(
    package: &P,
    config: &VideoConfig,
    payload: &Payload,
) -> Result<ResultValue, BridgeError>
where
    P: ChannelService + MediaService + PlaylistService + ?Sized,
{
    let file_path = PathBuf::from(payload.required_text("filePath")?);
    let title = payload
        .optional_text("title")
        .unwrap_or_else(|| file_stem(&file_path));
    let playlist_id = payload.optional_text("playlistId");

    package.validate_upload_access(config).await?;
    let video_id = package.upload_file(config, &file_path, &title).await?;

    if let Some(playlist_id) = playlist_id {
        if let Err(source) = package
            .add_video_to_playlist(config, &playlist_id, &video_id)
            .await
        {
            warn!(%video_id, %playlist_id, "upload succeeded but playlist attach failed");
            return Err(BridgeError::PlaylistAttach {
                video_id,
                playlist_id,
                source,
            });
        }
    }

    let url = format!("{SHORT_URL_PREFIX}{video_id}");
    Ok(ResultValue::object([
        ("videoId", ResultValue::from(video_id)),
        ("url", ResultValue::from(url)),
    ]))
}

pub async fn download_best_mp4<M: MediaService + ?Sized>(
    media: &M,
    config: &VideoConfig,
    payload: &Payload,
) -> Result<ResultValue, BridgeError> {
    let url = payload.required_text("url")?;
    let output = media.download_best_mp4(config, &url).await?;
    Ok(ResultValue::object([("outputPath", ResultValue::Path(output))]))
}

/// `timestamps` must be present and non-empty; its shape is the package's concern
pub async fn cut_clips_local_mp4<M: MediaService + ?Sized>(
    media: &M,
    config: &VideoConfig,
    payload: &Payload,
) -> Result<ResultValue, BridgeError> {
    let source_path = PathBuf::from(payload.required_text("sourcePath")?);
    let timestamps = payload.required_value("timestamps")?;
    let output_dir = payload.optional_text("outputDir").map(PathBuf::from);

    let outputs = media
        .cut_clips_local_mp4(config, &source_path, timestamps, output_dir.as_deref())
        .await?;

    Ok(ResultValue::object([
        ("count", ResultValue::from(outputs.len())),
        ("paths", ResultValue::paths(outputs)),
    ]))
}

/// File name without its extension, used as the default upload title
fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}
