//! Infrastructure layer for genomechat
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod factory;
pub mod logging;
pub mod rest;
pub mod sdk;

// Re-export commonly used types
pub use config::{
    API_KEY_ENV_VARS, ConfigLoader, ConfigValidationError, FileConfig, FileOutputConfig,
    FileOutputFormat, FileReplConfig,
};
pub use factory::HttpTransportFactory;
pub use logging::JsonlPredictionLogger;
pub use rest::{RestPredictionClient, build_http_client};
pub use sdk::{SdkBridge, SdkBridgeConfig, SdkBridgeError, SdkPredictionClient};
