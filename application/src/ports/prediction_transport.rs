//! Prediction transport ports
//!
//! Defines the two ways the application reaches the prediction backend:
//!
//! - [`PredictionRestPort`]: the primary HTTP API; never fails, every outcome
//!   is carried inside a [`DispatchResponse`]
//! - [`PredictionSdkPort`]: the vendor SDK used as a fallback; fails with a
//!   [`TransportError`] whose text feeds the error classifier

use async_trait::async_trait;
use genomechat_domain::{
    DispatchResponse, GenomicInterval, GenomicVariant, MetadataDescriptor, Organism, OutputType,
    PredictionRequest, PredictionResult,
};
use std::sync::Arc;
use thiserror::Error;

/// Errors raised by the SDK transport.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TransportError {
    #[error("SDK client not available: {0}")]
    Unavailable(String),

    /// Error text reported by the backend itself, passed through verbatim.
    #[error("{0}")]
    Backend(String),

    #[error("Timeout after {0}s waiting for SDK response")]
    Timeout(u64),

    #[error("Transport closed")]
    TransportClosed,

    #[error("Protocol error: {0}")]
    Protocol(String),
}

/// Primary REST transport.
///
/// Implementations make a single attempt (no retries) and map every failure
/// (HTTP status, network error, bad body) into a failed [`DispatchResponse`].
#[async_trait]
pub trait PredictionRestPort: Send + Sync {
    async fn execute(&self, request: &PredictionRequest) -> DispatchResponse;
}

/// Fallback SDK transport.
#[async_trait]
pub trait PredictionSdkPort: Send + Sync {
    /// Predict the effect of `variant` within `interval`.
    async fn predict_variant(
        &self,
        interval: &GenomicInterval,
        variant: &GenomicVariant,
        organism: Organism,
        ontology_terms: &[String],
        output_types: &[OutputType],
    ) -> Result<PredictionResult, TransportError>;

    /// Describe the output channels the backend can produce.
    async fn output_metadata(&self) -> Result<MetadataDescriptor, TransportError>;
}

/// Builds transports bound to one API key.
///
/// The key can change mid-session (`setup`), so use cases ask for
/// transports per command instead of holding them.
pub trait TransportFactory: Send + Sync {
    fn rest_transport(&self, api_key: &str) -> Arc<dyn PredictionRestPort>;

    /// `None` when no SDK fallback is configured.
    fn sdk_transport(&self, api_key: &str) -> Option<Arc<dyn PredictionSdkPort>>;

    fn has_sdk(&self) -> bool;
}
