//! REPL configuration from TOML (`[repl]` section)

use serde::{Deserialize, Serialize};

/// Raw REPL configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileReplConfig {
    /// Path to history file (defaults to the data dir)
    pub history_file: Option<String>,
    /// Maximum number of history entries kept
    pub history_size: usize,
}

impl Default for FileReplConfig {
    fn default() -> Self {
        Self {
            history_file: None,
            history_size: 1000,
        }
    }
}
