//! get_config / save_config handlers

use crate::application::error::BridgeError;
use crate::application::ports::VideoConfigStore;
use crate::domain::config::{ConfigOverrides, VideoConfig};
use crate::domain::payload::Payload;
use crate::domain::value::ResultValue;

/// Return the package's persisted config as a flat mapping
pub async fn get_config<S: VideoConfigStore + ?Sized>(
    store: &S,
) -> Result<ResultValue, BridgeError> {
    let config = store.load_config().await?;
    Ok(config_result(config))
}

/// Layer payload overrides on the persisted config, ensure its directories,
/// persist it, and return what was saved
pub async fn save_config<S: VideoConfigStore + ?Sized>(
    store: &S,
    payload: &Payload,
) -> Result<ResultValue, BridgeError> {
    let current = store.load_config().await?;
    let config = ConfigOverrides::from_payload(payload).apply(current);

    store.ensure_directories(&config).await?;
    store.save_config(&config).await?;

    Ok(config_result(config))
}

/// The five path fields first, then every other key the package reported
fn config_result(config: VideoConfig) -> ResultValue {
    let known = [
        ("credentials_path", config.credentials_path),
        ("token_path", config.token_path),
        ("download_directory", config.download_directory),
        ("yt_dlp_path", config.yt_dlp_path),
        ("ffmpeg_path", config.ffmpeg_path),
    ]
    .into_iter()
    .map(|(key, value)| (key.to_string(), ResultValue::from(value)));

    let extra = config
        .extra
        .into_iter()
        .map(|(key, value)| (key, ResultValue::from(value)));

    ResultValue::object(known.chain(extra))
}
