//! Typed prediction requests and the REST endpoints they target.

use crate::genomics::interval::GenomicInterval;
use crate::genomics::organism::Organism;
use crate::genomics::variant::GenomicVariant;
use crate::prediction::output_type::OutputType;
use serde_json::{Map, Value, json};

/// Logical endpoints of the prediction REST API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiEndpoint {
    PredictVariant,
    PredictInterval,
    PredictSequence,
    Metadata,
}

impl ApiEndpoint {
    pub fn path(&self) -> &'static str {
        match self {
            ApiEndpoint::PredictVariant => "/v1/predict/variant",
            ApiEndpoint::PredictInterval => "/v1/predict/interval",
            ApiEndpoint::PredictSequence => "/v1/predict/sequence",
            ApiEndpoint::Metadata => "/v1/metadata",
        }
    }
}

impl std::fmt::Display for ApiEndpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path())
    }
}

/// A single request to the prediction backend, built from validated values.
#[derive(Debug, Clone, PartialEq)]
pub enum PredictionRequest {
    Variant {
        variant: GenomicVariant,
        organism: Organism,
        output_types: Vec<OutputType>,
    },
    Interval {
        interval: GenomicInterval,
        organism: Organism,
        output_types: Vec<OutputType>,
    },
    Sequence {
        sequence: String,
        organism: Organism,
        output_types: Vec<OutputType>,
    },
    Metadata,
}

impl PredictionRequest {
    pub fn endpoint(&self) -> ApiEndpoint {
        match self {
            PredictionRequest::Variant { .. } => ApiEndpoint::PredictVariant,
            PredictionRequest::Interval { .. } => ApiEndpoint::PredictInterval,
            PredictionRequest::Sequence { .. } => ApiEndpoint::PredictSequence,
            PredictionRequest::Metadata => ApiEndpoint::Metadata,
        }
    }

    /// JSON body for the REST call. `output_types` is omitted when empty.
    pub fn body(&self) -> Value {
        let (mut body, organism, output_types) = match self {
            PredictionRequest::Variant {
                variant,
                organism,
                output_types,
            } => (
                json!({
                    "chromosome": variant.chromosome().as_str(),
                    "position": variant.position(),
                    "ref": variant.reference_bases(),
                    "alt": variant.alternate_bases(),
                }),
                organism,
                output_types,
            ),
            PredictionRequest::Interval {
                interval,
                organism,
                output_types,
            } => (
                json!({
                    "chromosome": interval.chromosome().as_str(),
                    "start": interval.start(),
                    "end": interval.end(),
                }),
                organism,
                output_types,
            ),
            PredictionRequest::Sequence {
                sequence,
                organism,
                output_types,
            } => (json!({ "sequence": sequence }), organism, output_types),
            PredictionRequest::Metadata => return Value::Object(Map::new()),
        };

        body["organism"] = json!(organism.as_str());
        if !output_types.is_empty() {
            body["output_types"] = json!(output_types);
        }
        body
    }
}
