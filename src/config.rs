//! Configuration management for battery-monitor-rs.
//!
//! Loads a YAML config file naming the two alert levels. Missing keys
//! fall back to defaults; an unreadable or unparseable file is fatal.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_yml::Error,
    },
}

/// One alert level: when to fire and what the notification says.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LevelSpec {
    pub threshold: u8,
    pub title: String,
    pub icon: String,
    pub sound: Option<String>,
    pub message: String,
}

impl LevelSpec {
    /// Substitute the capacity into the message template. The template
    /// carries a single `%d` placeholder.
    pub fn format_message(&self, capacity: u8) -> String {
        self.message.replacen("%d", &capacity.to_string(), 1)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub app_name: String,
    pub poll_interval: u64,
    pub low_battery: LevelSpec,
    pub critical_battery: LevelSpec,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app_name: "Battery Monitor".into(),
            poll_interval: 5,
            low_battery: LevelSpec::default(),
            critical_battery: LevelSpec::default(),
        }
    }
}

impl Config {
    /// Load configuration from a YAML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let mut config: Config =
            serde_yml::from_str(&contents).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        // An explicit 0 means "unset".
        if config.poll_interval == 0 {
            config.poll_interval = 5;
        }

        info!("Loaded config from {}", path.display());
        Ok(config)
    }
}

/// Expand a leading `~/` to the invoking user's home directory.
pub fn expand_home(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(path)
}
