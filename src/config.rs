//! Application configuration.
//!
//! The configuration is loaded from a JSON file, either passed on the
//! command line (`--config <path>`) or found at
//! `$XDG_CONFIG_HOME/swayws/config.json`.
//!
//! # Example
//!
//! ```json
//! {
//!   "notification": {
//!     "title": "Workspaces",
//!     "category": "workspaces",
//!     "urgency": "normal",
//!     "timeout_ms": 3000
//!   },
//!   "idle": { "600": "display-off", "3600": "lock-screen" }
//! }
//! ```

use crate::idle::IdleConfig;
use crate::notification::Urgency;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level configuration.
///
/// Every field is optional — a minimal `{}` file is valid and all sections
/// fall back to their compiled-in defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// How the workspace line is presented.
    #[serde(default)]
    pub notification: NotificationConfig,

    /// Inactivity thresholds rendered for `swayidle`.
    #[serde(default)]
    pub idle: IdleConfig,
}

/// Presentation of the workspace notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationConfig {
    pub title: String,
    /// Category hint; also used as the dunst stack tag.
    pub category: String,
    pub urgency: Urgency,
    /// On-screen duration in milliseconds.
    pub timeout_ms: u32,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            title: "Workspaces".into(),
            category: "workspaces".into(),
            urgency: Urgency::Normal,
            timeout_ms: 3000,
        }
    }
}

impl Config {
    /// Load configuration from a JSON file at `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError(format!("failed to read {}: {}", path.display(), e)))?;
        let config: Self = serde_json::from_str(&contents)
            .map_err(|e| ConfigError(format!("failed to parse {}: {}", path.display(), e)))?;
        Ok(config)
    }
}

/// Error from loading or parsing a configuration file.
#[derive(Debug, thiserror::Error)]
#[error("config error: {0}")]
pub struct ConfigError(String);
