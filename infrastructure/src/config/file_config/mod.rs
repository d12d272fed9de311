//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod api;
mod logging;
mod output;
mod repl;
mod sdk;
mod session;

pub use api::{DEFAULT_BASE_URL, FileApiConfig};
pub use logging::FileLoggingConfig;
pub use output::{FileOutputConfig, FileOutputFormat};
pub use repl::FileReplConfig;
pub use sdk::FileSdkConfig;
pub use session::FileSessionConfig;

use genomechat_application::DispatchParams;
use genomechat_domain::{InputValidator, ValidationLimits};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A problem found by [`FileConfig::validate`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigValidationError {
    #[error("{section}.timeout_seconds cannot be 0")]
    InvalidTimeout { section: &'static str },

    #[error("api.base_url cannot be empty")]
    EmptyBaseUrl,

    #[error("api.base_url must start with http:// or https:// (got '{0}')")]
    InvalidBaseUrl(String),

    #[error("dispatch.interval_size cannot be 0")]
    InvalidIntervalSize,

    #[error("dispatch.default_ontology_terms: {0}")]
    InvalidOntologyTerms(String),

    #[error("session.ontology_terms: {0}")]
    InvalidSessionOntologyTerms(String),

    #[error("validation: {0}")]
    InconsistentLimits(String),
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// REST API endpoint and credentials
    pub api: FileApiConfig,
    /// Hybrid dispatch policy
    pub dispatch: DispatchParams,
    /// SDK fallback bridge
    pub sdk: FileSdkConfig,
    /// Input validation bounds
    pub validation: ValidationLimits,
    /// Defaults for new sessions
    pub session: FileSessionConfig,
    /// Diagnostic and prediction logs
    pub logging: FileLoggingConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// REPL settings
    pub repl: FileReplConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning every detected issue.
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut issues = Vec::new();

        let base_url = self.api.base_url.trim();
        if base_url.is_empty() {
            issues.push(ConfigValidationError::EmptyBaseUrl);
        } else if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            issues.push(ConfigValidationError::InvalidBaseUrl(base_url.to_string()));
        }
        if self.api.timeout_seconds == 0 {
            issues.push(ConfigValidationError::InvalidTimeout { section: "api" });
        }
        if self.sdk.timeout_seconds == 0 {
            issues.push(ConfigValidationError::InvalidTimeout { section: "sdk" });
        }
        if self.dispatch.interval_size == 0 {
            issues.push(ConfigValidationError::InvalidIntervalSize);
        }

        issues.extend(
            self.validation
                .inconsistencies()
                .into_iter()
                .map(ConfigValidationError::InconsistentLimits),
        );

        let validator = InputValidator::new(self.validation.clone());
        if !self.dispatch.default_ontology_terms.is_empty() {
            let outcome = validator.validate_ontology_terms(&self.dispatch.default_ontology_terms);
            if !outcome.is_ok() {
                issues.push(ConfigValidationError::InvalidOntologyTerms(
                    outcome.message().to_string(),
                ));
            }
        }
        if !self.session.ontology_terms.is_empty() {
            let outcome = validator.validate_ontology_terms(&self.session.ontology_terms);
            if !outcome.is_ok() {
                issues.push(ConfigValidationError::InvalidSessionOntologyTerms(
                    outcome.message().to_string(),
                ));
            }
        }

        issues
    }

    pub fn validator(&self) -> InputValidator {
        InputValidator::new(self.validation.clone())
    }
}
