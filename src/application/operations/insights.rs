//! Chapter, transcript and channel report handlers

use crate::application::error::BridgeError;
use crate::application::ports::InsightService;
use crate::domain::config::VideoConfig;
use crate::domain::payload::Payload;
use crate::domain::value::ResultValue;

pub async fn fetch_video_chapters<I: InsightService + ?Sized>(
    insights: &I,
    config: &VideoConfig,
    payload: &Payload,
) -> Result<ResultValue, BridgeError> {
    let source_url = payload.required_text("sourceUrl")?;
    Ok(insights
        .fetch_video_chapters(config, &source_url)
        .await?
        .into())
}

/// The transcript builder takes no config; `languages` narrows the search
/// only when it holds at least one non-blank entry.
pub async fn build_transcript_markdown<I: InsightService + ?Sized>(
    insights: &I,
    payload: &Payload,
) -> Result<ResultValue, BridgeError> {
    let source = payload.required_text("source")?;
    let languages = payload.text_list("languages");

    Ok(insights
        .build_transcript_markdown(&source, languages.as_deref())
        .await?
        .into())
}

pub async fn fetch_channel_report<I: InsightService + ?Sized>(
    insights: &I,
    config: &VideoConfig,
    payload: &Payload,
) -> Result<ResultValue, BridgeError> {
    let channel_url = payload.required_text("channelUrl")?;
    Ok(insights
        .fetch_channel_report(config, &channel_url)
        .await?
        .into())
}
