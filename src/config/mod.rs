use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Duration used by the add command when none is given (e.g. "5m").
    #[serde(default = "default_duration")]
    pub default_duration: String,
    /// Initial sort column: start, end, done or description.
    #[serde(default = "default_sort_column")]
    pub sort_column: String,
    #[serde(default)]
    pub sort_descending: bool,
}

fn default_duration() -> String {
    "5m".to_string()
}
fn default_sort_column() -> String {
    "start".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_duration: default_duration(),
            sort_column: default_sort_column(),
            sort_descending: false,
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if let Some(home) = dirs::home_dir() {
            home.join(".rtimertab")
        } else {
            PathBuf::from(".rtimertab")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rtimertab.conf")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> Self {
        let path = Self::config_file();
        if path.exists() {
            match fs::read_to_string(&path) {
                Ok(content) => serde_yaml::from_str(&content).unwrap_or_default(),
                Err(_) => Config::default(),
            }
        } else {
            Config::default()
        }
    }

    /// Write the current configuration to disk, creating the directory.
    pub fn save(&self) -> AppResult<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;
        let yaml = serde_yaml::to_string(self)
            .map_err(|e| AppError::Config(format!("cannot serialize configuration: {}", e)))?;
        fs::write(Self::config_file(), yaml)?;
        Ok(())
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self)
            .map_err(|e| AppError::Config(format!("cannot serialize configuration: {}", e)))
    }
}
