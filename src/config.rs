use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::pass::TimeZoneMode;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Persisted export preferences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Last folder a calendar was saved to.
    #[serde(default)]
    pub save_dir: Option<PathBuf>,
    #[serde(default)]
    pub use_local_time: bool,
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_format() -> String {
    "ics".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            save_dir: None,
            use_local_time: false,
            format: default_format(),
        }
    }
}

impl Settings {
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("pass-ical").join("settings.yaml"))
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let settings: Settings = serde_yaml::from_str(&content)?;
        Ok(settings)
    }

    /// Like [`Settings::from_file`], but a missing file yields defaults.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            log::debug!("No settings at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        Self::from_file(path)
    }

    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, serde_yaml::to_string(self)?)?;
        Ok(())
    }

    pub fn tz_mode(&self) -> TimeZoneMode {
        TimeZoneMode::from_use_local_time(self.use_local_time)
    }

    /// Saved folder, else the home directory, else the working directory.
    pub fn effective_save_dir(&self) -> PathBuf {
        self.save_dir
            .clone()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."))
    }

    pub fn remember_save_dir(&mut self, dir: &Path) {
        self.save_dir = Some(dir.to_path_buf());
    }
}
