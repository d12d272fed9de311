//! Presentation-level configuration
//!
//! Configuration for output formatting and REPL behavior.

use crate::cli::commands::OutputFormat;
use std::path::PathBuf;

/// Output configuration for the presentation layer
#[derive(Debug, Clone)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Enable colored terminal output
    pub color: bool,
    /// Show a spinner while a prediction is in flight
    pub show_progress: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            color: true,
            show_progress: true,
        }
    }
}

/// REPL configuration for the presentation layer
#[derive(Debug, Clone)]
pub struct ReplConfig {
    /// Path to history file; `None` uses `<data dir>/genomechat/history.txt`
    pub history_file: Option<PathBuf>,
    pub history_size: usize,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            history_file: None,
            history_size: 1000,
        }
    }
}

impl ReplConfig {
    pub fn history_path(&self) -> Option<PathBuf> {
        self.history_file
            .clone()
            .or_else(|| dirs::data_dir().map(|p| p.join("genomechat").join("history.txt")))
    }
}
