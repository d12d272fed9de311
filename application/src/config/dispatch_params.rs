//! Dispatch parameters: fallback policy for the hybrid dispatcher.
//!
//! [`DispatchParams`] groups the static parameters that control how
//! [`HybridDispatcher`](crate::use_cases::hybrid_dispatch::HybridDispatcher)
//! builds its SDK fallback call. These are application-layer concerns, not
//! domain policy.

use genomechat_domain::OutputType;
use serde::{Deserialize, Serialize};

/// Default tissue used when a variant prediction falls back to the SDK.
pub const DEFAULT_ONTOLOGY_TERM: &str = "UBERON:0001157";

/// Fallback policy parameters.
///
/// | Field | Used by |
/// |-------|---------|
/// | `interval_size` | SDK fallback window around the variant |
/// | `default_ontology_terms` | SDK fallback when the request has none |
/// | `default_output_types` | SDK fallback when the request has none |
/// | `sdk_fallback` | whether a configured SDK transport is consulted at all |
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DispatchParams {
    /// Width of the window centered on the variant, in base pairs.
    pub interval_size: u64,
    pub default_ontology_terms: Vec<String>,
    pub default_output_types: Vec<OutputType>,
    pub sdk_fallback: bool,
}

impl Default for DispatchParams {
    fn default() -> Self {
        Self {
            interval_size: 100_000,
            default_ontology_terms: vec![DEFAULT_ONTOLOGY_TERM.to_string()],
            default_output_types: vec![OutputType::RnaSeq],
            sdk_fallback: true,
        }
    }
}

impl DispatchParams {
    // ==================== Builder Methods ====================

    pub fn with_interval_size(mut self, size: u64) -> Self {
        self.interval_size = size;
        self
    }

    pub fn with_sdk_fallback(mut self, enabled: bool) -> Self {
        self.sdk_fallback = enabled;
        self
    }

    pub fn with_default_ontology_terms(mut self, terms: Vec<String>) -> Self {
        self.default_ontology_terms = terms;
        self
    }

    pub fn with_default_output_types(mut self, types: Vec<OutputType>) -> Self {
        self.default_output_types = types;
        self
    }
}
