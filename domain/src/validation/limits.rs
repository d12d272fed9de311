//! Policy bounds applied by the input validator.

use serde::{Deserialize, Serialize};

/// Every numeric policy the validator enforces.
///
/// The defaults are the service's documented limits; each can be
/// overridden from the `[validation]` section of the config file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationLimits {
    /// Smallest accepted interval width in base pairs.
    pub min_interval_width: u64,
    /// Largest accepted interval width in base pairs.
    pub max_interval_width: u64,
    /// Largest accepted coordinate (interval bound or variant position).
    pub max_position: u64,
    pub min_sequence_length: usize,
    pub max_sequence_length: usize,
    /// Maximum fraction (0.0..=1.0) of `N` bases in a sequence.
    pub max_n_fraction: f64,
    pub max_allele_length: usize,
    pub max_ontology_terms: usize,
    pub min_api_key_length: usize,
    pub max_api_key_length: usize,
}

impl Default for ValidationLimits {
    fn default() -> Self {
        Self {
            min_interval_width: 100,
            max_interval_width: 2_000_000,
            max_position: 250_000_000,
            min_sequence_length: 10,
            max_sequence_length: 1_000_000,
            max_n_fraction: 0.5,
            max_allele_length: 100,
            max_ontology_terms: 10,
            min_api_key_length: 35,
            max_api_key_length: 45,
        }
    }
}

impl ValidationLimits {
    /// Internal consistency problems (empty ranges, out-of-range fractions).
    pub fn inconsistencies(&self) -> Vec<String> {
        let mut problems = Vec::new();
        if self.min_interval_width == 0 {
            problems.push("min_interval_width must be at least 1".to_string());
        }
        if self.min_interval_width > self.max_interval_width {
            problems.push(format!(
                "min_interval_width ({}) exceeds max_interval_width ({})",
                self.min_interval_width, self.max_interval_width
            ));
        }
        if self.min_sequence_length > self.max_sequence_length {
            problems.push(format!(
                "min_sequence_length ({}) exceeds max_sequence_length ({})",
                self.min_sequence_length, self.max_sequence_length
            ));
        }
        if !(0.0..=1.0).contains(&self.max_n_fraction) {
            problems.push(format!(
                "max_n_fraction ({}) must be between 0.0 and 1.0",
                self.max_n_fraction
            ));
        }
        if self.min_api_key_length > self.max_api_key_length {
            problems.push(format!(
                "min_api_key_length ({}) exceeds max_api_key_length ({})",
                self.min_api_key_length, self.max_api_key_length
            ));
        }
        problems
    }
}
