//! SDK bridge configuration from TOML (`[sdk]` section)

use crate::sdk::SdkBridgeConfig;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Raw SDK bridge configuration from TOML
///
/// ```toml
/// [sdk]
/// command = "python3"
/// args = ["-m", "genome_sdk_bridge"]
/// timeout_seconds = 300
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSdkConfig {
    /// Bridge executable; the SDK fallback is disabled when unset
    pub command: Option<String>,
    pub args: Vec<String>,
    pub timeout_seconds: u64,
}

impl Default for FileSdkConfig {
    fn default() -> Self {
        Self {
            command: None,
            args: Vec::new(),
            timeout_seconds: 300,
        }
    }
}

impl FileSdkConfig {
    /// Bridge launch settings, or `None` when no command is configured.
    pub fn to_bridge_config(&self) -> Option<SdkBridgeConfig> {
        let command = self.command.as_deref().map(str::trim).filter(|c| !c.is_empty())?;
        Some(
            SdkBridgeConfig::new(command)
                .with_args(self.args.clone())
                .with_timeout(Duration::from_secs(self.timeout_seconds)),
        )
    }
}
