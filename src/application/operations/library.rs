//! Channel video and playlist handlers

use crate::application::error::BridgeError;
use crate::application::ports::{ChannelService, PlaylistService};
use crate::domain::config::VideoConfig;
use crate::domain::payload::Payload;
use crate::domain::value::ResultValue;

/// Privacy status for new playlists when none is given
pub const DEFAULT_PRIVACY_STATUS: &str = "unlisted";

pub async fn list_channel_videos<C: ChannelService + ?Sized>(
    channel: &C,
    config: &VideoConfig,
) -> Result<ResultValue, BridgeError> {
    Ok(channel.list_channel_videos(config).await?.into())
}

pub async fn delete_channel_video<C: ChannelService + ?Sized>(
    channel: &C,
    config: &VideoConfig,
    payload: &Payload,
) -> Result<ResultValue, BridgeError> {
    let video_id = payload.required_text("videoId")?;
    let deleted = channel.delete_channel_video(config, &video_id).await?;
    Ok(ResultValue::object([("deleted", ResultValue::from(deleted))]))
}

pub async fn list_playlists<P: PlaylistService + ?Sized>(
    playlists: &P,
    config: &VideoConfig,
) -> Result<ResultValue, BridgeError> {
    Ok(playlists.list_playlists(config).await?.into())
}

pub async fn create_playlist<P: PlaylistService + ?Sized>(
    playlists: &P,
    config: &VideoConfig,
    payload: &Payload,
) -> Result<ResultValue, BridgeError> {
    let title = payload.required_text("title")?;
    let description = payload.text_or("description", "");
    let privacy_status = payload.text_or("privacyStatus", DEFAULT_PRIVACY_STATUS);

    let created = playlists
        .create_playlist(config, &title, &description, &privacy_status)
        .await?;
    Ok(created.into())
}

pub async fn delete_playlist<P: PlaylistService + ?Sized>(
    playlists: &P,
    config: &VideoConfig,
    payload: &Payload,
) -> Result<ResultValue, BridgeError> {
    let playlist_id = payload.required_text("playlistId")?;
    let deleted = playlists.delete_playlist(config, &playlist_id).await?;
    Ok(ResultValue::object([("deleted", ResultValue::from(deleted))]))
}

pub async fn list_playlist_videos<P: PlaylistService + ?Sized>(
    playlists: &P,
    config: &VideoConfig,
    payload: &Payload,
) -> Result<ResultValue, BridgeError> {
    let playlist_id = payload.required_text("playlistId")?;
    Ok(playlists
        .list_playlist_videos(config, &playlist_id)
        .await?
        .into())
}

pub async fn add_video_to_playlist<P: PlaylistService + ?Sized>(
    playlists: &P,
    config: &VideoConfig,
    payload: &Payload,
) -> Result<ResultValue, BridgeError> {
    let playlist_id = payload.required_text("playlistId")?;
    let video_id = payload.required_text("videoId")?;

    playlists
        .add_video_to_playlist(config, &playlist_id, &video_id)
        .await?;
    Ok(ResultValue::object([("added", ResultValue::from(true))]))
}
