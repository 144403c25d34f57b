use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use super::error::FormError;
use crate::DEFAULT_LOG_FILE;

/// Runtime settings for the terminal form. Rule constants are deliberately
/// absent; they are fixed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    /// Log file; `None` logs to stderr
    pub log_file: Option<PathBuf>,
    pub log_level: String,
    /// Character shown in place of each obscured character
    pub mask_char: char,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            log_file: Some(PathBuf::from(DEFAULT_LOG_FILE)),
            log_level: "info".to_string(),
            mask_char: '*',
        }
    }
}

impl FormConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a JSON file. Missing keys take their defaults.
    pub fn load(path: &Path) -> Result<Self, FormError> {
        let contents = fs::read_to_string(path)?;
        serde_json::from_str(&contents).map_err(|source| FormError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load from `path` when given, defaults otherwise
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, FormError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Save configuration as pretty JSON
    pub fn save(&self, path: &Path) -> Result<(), FormError> {
        let data = serde_json::to_string_pretty(self)?;
        fs::write(path, data)?;
        Ok(())
    }

    pub fn level_filter(&self) -> Result<LevelFilter, FormError> {
        match self.log_level.trim().to_lowercase().as_str() {
            "off" => Ok(LevelFilter::Off),
            "error" => Ok(LevelFilter::Error),
            "warn" => Ok(LevelFilter::Warn),
            "info" => Ok(LevelFilter::Info),
            "debug" => Ok(LevelFilter::Debug),
            "trace" => Ok(LevelFilter::Trace),
            other => Err(FormError::InvalidLogLevel(other.to_string())),
        }
    }
}
