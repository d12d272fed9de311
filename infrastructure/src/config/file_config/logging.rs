//! Logging configuration from TOML (`[logging]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw logging configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// Directory for the daily diagnostic log and the prediction log.
    /// Defaults to `<data dir>/genomechat/logs`.
    pub dir: Option<PathBuf>,
    /// Write the daily rolling diagnostic log
    pub file_logging: bool,
    /// Write the JSONL prediction event log
    pub prediction_log: bool,
}

impl Default for FileLoggingConfig {
    fn default() -> Self {
        Self {
            dir: None,
            file_logging: true,
            prediction_log: true,
        }
    }
}

impl FileLoggingConfig {
    /// Resolved log directory, if one can be determined.
    pub fn log_dir(&self) -> Option<PathBuf> {
        self.dir
            .clone()
            .or_else(|| dirs::data_dir().map(|d| d.join("genomechat").join("logs")))
    }

    pub fn prediction_log_path(&self) -> Option<PathBuf> {
        if !self.prediction_log {
            return None;
        }
        self.log_dir().map(|d| d.join("predictions.jsonl"))
    }
}
