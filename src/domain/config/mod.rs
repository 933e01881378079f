//! Configuration value objects

pub mod bridge_settings;
pub mod video_config;

pub use bridge_settings::BridgeSettings;
pub use video_config::{ConfigOverrides, VideoConfig};
