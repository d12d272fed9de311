//! REST API configuration from TOML (`[api]` section)

use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "https://api.alphagenome.ai";

/// Raw REST API configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileApiConfig {
    pub base_url: String,
    /// Total timeout for one REST call, in seconds
    pub timeout_seconds: u64,
    /// API key; usually supplied through the environment instead
    pub api_key: Option<String>,
}

impl Default for FileApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_seconds: 300,
            api_key: None,
        }
    }
}
