//! Results returned by the SDK-style prediction transport.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Outcome of an SDK variant prediction.
///
/// Either side may be missing; `has_reference` and `has_alternate` report which.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alternate: Option<Value>,
}

impl PredictionResult {
    pub fn new(reference: Option<Value>, alternate: Option<Value>) -> Self {
        Self {
            reference,
            alternate,
        }
    }

    pub fn has_reference(&self) -> bool {
        self.reference.is_some()
    }

    pub fn has_alternate(&self) -> bool {
        self.alternate.is_some()
    }
}

/// Description of the output channels a backend can produce.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataDescriptor {
    pub output_channels: Vec<String>,
}

impl MetadataDescriptor {
    pub fn new(output_channels: Vec<String>) -> Self {
        Self { output_channels }
    }

    pub fn is_empty(&self) -> bool {
        self.output_channels.is_empty()
    }
}
