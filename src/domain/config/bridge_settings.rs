//! Bridge settings value object

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Documented default package root, relative to the home directory
pub const DEFAULT_ROOT: &str = "~/python-youtune";
/// Default runtime used to execute the package
pub const DEFAULT_PYTHON: &str = "python3";

/// Settings for locating and running the external package.
/// All fields are optional to support partial settings and merging.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BridgeSettings {
    pub root: Option<PathBuf>,
    pub python: Option<PathBuf>,
}

impl BridgeSettings {
    /// Create settings with default values
    pub fn defaults() -> Self {
        Self {
            root: Some(PathBuf::from(DEFAULT_ROOT)),
            python: Some(PathBuf::from(DEFAULT_PYTHON)),
        }
    }

    /// Create empty settings (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge these settings with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            root: other.root.or(self.root),
            python: other.python.or(self.python),
        }
    }

    /// Get the package root, or the documented default if not set
    pub fn root_or_default(&self) -> PathBuf {
        self.root
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_ROOT))
    }

    /// Get the package runtime, or "python3" if not set
    pub fn python_or_default(&self) -> PathBuf {
        self.python
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_PYTHON))
    }
}
