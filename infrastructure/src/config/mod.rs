//! Configuration file loading for genomechat
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. API key environment variables
//! 2. `GENOMECHAT_<SECTION>__<KEY>` environment variables
//! 3. `--config <path>` specified file
//! 4. Project root: `./genomechat.toml` or `./.genomechat.toml`
//! 5. XDG config: `$XDG_CONFIG_HOME/genomechat/config.toml`
//! 6. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, DEFAULT_BASE_URL, FileApiConfig, FileConfig, FileLoggingConfig,
    FileOutputConfig, FileOutputFormat, FileReplConfig, FileSdkConfig, FileSessionConfig,
};
pub use loader::{API_KEY_ENV_VARS, ConfigLoader};
