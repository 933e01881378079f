//! XDG settings store adapter

use std::path::PathBuf;

use tokio::fs;

use crate::domain::config::BridgeSettings;
use crate::domain::error::ConfigError;

/// Reads bridge settings from `<config dir>/youtune-bridge/config.toml`
pub struct XdgSettingsStore {
    path: PathBuf,
}

impl XdgSettingsStore {
    /// Create a new XDG settings store with default path
    pub fn new() -> Self {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("~/.config"))
            .join("youtune-bridge");

        Self {
            path: config_dir.join("config.toml"),
        }
    }

    /// Create with custom path
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> PathBuf {
        self.path.clone()
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Load settings. A missing file yields empty settings.
    pub async fn load(&self) -> Result<BridgeSettings, ConfigError> {
        if !self.exists() {
            return Ok(BridgeSettings::empty());
        }

        let content = fs::read_to_string(&self.path)
            .await
            .map_err(|e| ConfigError::ReadError(e.to_string()))?;

        Self::parse_toml(&content)
    }

    fn parse_toml(content: &str) -> Result<BridgeSettings, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))
    }
}

impl Default for XdgSettingsStore {
    fn default() -> Self {
        Self::new()
    }
}
