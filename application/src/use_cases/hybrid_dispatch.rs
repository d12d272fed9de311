//! Hybrid dispatch use case.
//!
//! Sends a prediction to the REST API first and, for variant predictions and
//! metadata, falls back to the SDK transport when REST fails.
//!
//! ```text
//! predict_variant_hybrid
//!   ├─ REST attempt ──── success ─────────────▶ RestSucceeded
//!   │       │
//!   │     failure
//!   │       ├─ no SDK / fallback disabled ────▶ RestFailedNoSdk
//!   │       └─ SDK attempt (centered window)
//!   │             ├─ success ─────────────────▶ SdkSucceeded
//!   │             └─ failure ─────────────────▶ BothFailed
//! ```
//!
//! Each transport is tried exactly once. Interval and sequence predictions
//! are REST-only because the SDK port has no equivalent call.

use crate::config::DispatchParams;
use crate::ports::prediction_logger::{NoPredictionLogger, PredictionEvent, PredictionLogger};
use crate::ports::prediction_transport::{PredictionRestPort, PredictionSdkPort};
use crate::ports::progress::DispatchProgress;
use genomechat_domain::{
    DispatchMethod, DispatchResponse, GenomicInterval, GenomicVariant, Organism, OutputType,
    PredictionRequest, PredictionResult,
};
use serde_json::json;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Input for [`HybridDispatcher::predict_variant_hybrid`].
#[derive(Debug, Clone)]
pub struct VariantPredictionInput {
    pub variant: GenomicVariant,
    pub organism: Organism,
    /// Width of the SDK fallback window; `None` uses [`DispatchParams::interval_size`].
    pub interval_size: Option<u64>,
    /// Empty means "use the fallback defaults" on the SDK path.
    pub ontology_terms: Vec<String>,
    /// Sent to REST as given; empty means "use the fallback defaults" on the SDK path.
    pub output_types: Vec<OutputType>,
}

impl VariantPredictionInput {
    pub fn new(variant: GenomicVariant) -> Self {
        Self {
            variant,
            organism: Organism::default(),
            interval_size: None,
            ontology_terms: Vec::new(),
            output_types: Vec::new(),
        }
    }

    pub fn with_organism(mut self, organism: Organism) -> Self {
        self.organism = organism;
        self
    }

    pub fn with_interval_size(mut self, size: u64) -> Self {
        self.interval_size = Some(size);
        self
    }

    pub fn with_ontology_terms(mut self, terms: Vec<String>) -> Self {
        self.ontology_terms = terms;
        self
    }

    pub fn with_output_types(mut self, types: Vec<OutputType>) -> Self {
        self.output_types = types;
        self
    }
}

/// How a hybrid dispatch ended. Every variant carries the response handed to
/// the caller.
#[derive(Debug, Clone, PartialEq)]
pub enum DispatchOutcome {
    RestSucceeded(DispatchResponse),
    SdkSucceeded {
        response: DispatchResponse,
        rest_error: String,
    },
    BothFailed {
        response: DispatchResponse,
        rest_error: String,
        sdk_error: String,
    },
    /// REST failed and no SDK was available; the REST failure is returned as-is.
    RestFailedNoSdk(DispatchResponse),
}

impl DispatchOutcome {
    pub fn response(&self) -> &DispatchResponse {
        match self {
            DispatchOutcome::RestSucceeded(response)
            | DispatchOutcome::RestFailedNoSdk(response)
            | DispatchOutcome::SdkSucceeded { response, .. }
            | DispatchOutcome::BothFailed { response, .. } => response,
        }
    }

    pub fn into_response(self) -> DispatchResponse {
        match self {
            DispatchOutcome::RestSucceeded(response)
            | DispatchOutcome::RestFailedNoSdk(response)
            | DispatchOutcome::SdkSucceeded { response, .. }
            | DispatchOutcome::BothFailed { response, .. } => response,
        }
    }

    pub fn is_success(&self) -> bool {
        self.response().is_success()
    }

    pub fn used_fallback(&self) -> bool {
        matches!(
            self,
            DispatchOutcome::SdkSucceeded { .. } | DispatchOutcome::BothFailed { .. }
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DispatchOutcome::RestSucceeded(_) => "rest_succeeded",
            DispatchOutcome::SdkSucceeded { .. } => "sdk_succeeded",
            DispatchOutcome::BothFailed { .. } => "both_failed",
            DispatchOutcome::RestFailedNoSdk(_) => "rest_failed_no_sdk",
        }
    }
}

fn rest_error_text(response: &DispatchResponse) -> String {
    response.error().unwrap_or("Unknown error").to_string()
}

/// Use case dispatching predictions across the REST and SDK transports.
pub struct HybridDispatcher {
    rest: Arc<dyn PredictionRestPort>,
    sdk: Option<Arc<dyn PredictionSdkPort>>,
    params: DispatchParams,
    prediction_logger: Arc<dyn PredictionLogger>,
}

impl Clone for HybridDispatcher {
    fn clone(&self) -> Self {
        Self {
            rest: self.rest.clone(),
            sdk: self.sdk.clone(),
            params: self.params.clone(),
            prediction_logger: self.prediction_logger.clone(),
        }
    }
}

impl HybridDispatcher {
    pub fn new(rest: Arc<dyn PredictionRestPort>) -> Self {
        Self {
            rest,
            sdk: None,
            params: DispatchParams::default(),
            prediction_logger: Arc::new(NoPredictionLogger),
        }
    }

    /// Attach the fallback SDK transport.
    pub fn with_sdk(mut self, sdk: Arc<dyn PredictionSdkPort>) -> Self {
        self.sdk = Some(sdk);
        self
    }

    pub fn with_params(mut self, params: DispatchParams) -> Self {
        self.params = params;
        self
    }

    /// Create with a prediction logger.
    pub fn with_prediction_logger(mut self, logger: Arc<dyn PredictionLogger>) -> Self {
        self.prediction_logger = logger;
        self
    }

    /// The SDK transport, if one is attached and fallback is enabled.
    fn fallback_sdk(&self) -> Option<&Arc<dyn PredictionSdkPort>> {
        self.sdk.as_ref().filter(|_| self.params.sdk_fallback)
    }


    async fn rest_attempt(
        &self,
        request: &PredictionRequest,
        description: &str,
        progress: &dyn DispatchProgress,
    ) -> DispatchResponse {
        progress.on_attempt_start(DispatchMethod::Rest, description);
        let started = Instant::now();
        let response = self.rest.execute(request).await;
        let elapsed = response
            .elapsed_seconds()
            .unwrap_or_else(|| started.elapsed().as_secs_f64());
        progress.on_attempt_complete(DispatchMethod::Rest, response.is_success(), elapsed);

        if response.is_success() {
            info!("REST {} succeeded in {:.2}s", request.endpoint(), elapsed);
        } else {
            warn!(
                "REST {} failed: {}",
                request.endpoint(),
                response.error().unwrap_or("Unknown error")
            );
        }

        self.prediction_logger.log(PredictionEvent::new(
            "rest_attempt",
            json!({
                "endpoint": request.endpoint().path(),
                "target": description,
                "success": response.is_success(),
                "status_code": response.status_code(),
                "error": response.error(),
                "elapsed_seconds": elapsed,
            }),
        ));
        response
    }

    /// Predict a variant's effect: REST first, SDK fallback on failure.
    pub async fn predict_variant_hybrid(
        &self,
        input: &VariantPredictionInput,
        progress: &dyn DispatchProgress,
    ) -> DispatchOutcome {
        let started = Instant::now();
        let description = input.variant.to_string();
        let request = PredictionRequest::Variant {
            variant: input.variant.clone(),
            organism: input.organism,
            output_types: input.output_types.clone(),
        };

        let rest_response = self.rest_attempt(&request, &description, progress).await;
        if rest_response.is_success() {
            info!("Used REST API for variant prediction");
            return DispatchOutcome::RestSucceeded(rest_response);
        }

        let Some(sdk) = self.fallback_sdk() else {
            debug!("No SDK fallback configured; returning REST failure");
            return DispatchOutcome::RestFailedNoSdk(rest_response);
        };

        let rest_error = rest_error_text(&rest_response);
        info!("Falling back to SDK for variant prediction");
        progress.on_fallback(&rest_error);

        let interval_size = input.interval_size.unwrap_or(self.params.interval_size);
        let interval = GenomicInterval::centered_on(&input.variant, interval_size);
        let ontology_terms = if input.ontology_terms.is_empty() {
            self.params.default_ontology_terms.clone()
        } else {
            input.ontology_terms.clone()
        };
        let output_types = if input.output_types.is_empty() {
            self.params.default_output_types.clone()
        } else {
            input.output_types.clone()
        };

        self.prediction_logger.log(PredictionEvent::new(
            "fallback",
            json!({
                "target": description,
                "rest_error": rest_error,
                "interval": interval.to_string(),
                "ontology_terms": ontology_terms,
                "output_types": output_types,
            }),
        ));

        progress.on_attempt_start(DispatchMethod::Sdk, &description);
        let sdk_started = Instant::now();
        let result = sdk
            .predict_variant(
                &interval,
                &input.variant,
                input.organism,
                &ontology_terms,
                &output_types,
            )
            .await;
        let sdk_elapsed = sdk_started.elapsed().as_secs_f64();
        progress.on_attempt_complete(DispatchMethod::Sdk, result.is_ok(), sdk_elapsed);

        let prediction = result.as_ref().ok();
        self.prediction_logger.log(PredictionEvent::new(
            "sdk_attempt",
            json!({
                "target": description,
                "success": result.is_ok(),
                "error": result.as_ref().err().map(|e| e.to_string()),
                "has_reference": prediction.map(PredictionResult::has_reference),
                "has_alternate": prediction.map(PredictionResult::has_alternate),
                "elapsed_seconds": sdk_elapsed,
            }),
        ));

        match result {
            Ok(prediction) => {
                info!("SDK fallback succeeded in {:.2}s", sdk_elapsed);
                if !prediction.has_reference() || !prediction.has_alternate() {
                    warn!(
                        "SDK prediction for {} is incomplete (reference: {}, alternate: {})",
                        description,
                        prediction.has_reference(),
                        prediction.has_alternate()
                    );
                }
                DispatchOutcome::SdkSucceeded {
                    response: DispatchResponse::sdk_prediction(&prediction, sdk_elapsed),
                    rest_error,
                }
            }
            Err(e) => {
                let sdk_error = e.to_string();
                warn!("SDK fallback failed: {}", sdk_error);
                DispatchOutcome::BothFailed {
                    response: DispatchResponse::both_failed(
                        &rest_error,
                        &sdk_error,
                        started.elapsed().as_secs_f64(),
                    ),
                    rest_error,
                    sdk_error,
                }
            }
        }
    }

    /// Predict tracks over an interval (REST only).
    pub async fn predict_interval(
        &self,
        interval: &GenomicInterval,
        organism: Organism,
        output_types: &[OutputType],
        progress: &dyn DispatchProgress,
    ) -> DispatchResponse {
        let request = PredictionRequest::Interval {
            interval: interval.clone(),
            organism,
            output_types: output_types.to_vec(),
        };
        self.rest_attempt(&request, &interval.to_string(), progress)
            .await
    }

    /// Predict tracks for a normalized DNA sequence (REST only).
    pub async fn predict_sequence(
        &self,
        sequence: &str,
        organism: Organism,
        output_types: &[OutputType],
        progress: &dyn DispatchProgress,
    ) -> DispatchResponse {
        let request = PredictionRequest::Sequence {
            sequence: sequence.to_string(),
            organism,
            output_types: output_types.to_vec(),
        };
        let description = format!("sequence ({} bp)", sequence.len());
        self.rest_attempt(&request, &description, progress).await
    }

    /// Fetch backend metadata: REST first, SDK `output_metadata` on failure.
    pub async fn metadata(&self, progress: &dyn DispatchProgress) -> DispatchOutcome {
        let started = Instant::now();
        let rest_response = self
            .rest_attempt(&PredictionRequest::Metadata, "metadata", progress)
            .await;
        if rest_response.is_success() {
            return DispatchOutcome::RestSucceeded(rest_response);
        }

        let Some(sdk) = self.fallback_sdk() else {
            return DispatchOutcome::RestFailedNoSdk(rest_response);
        };

        let rest_error = rest_error_text(&rest_response);
        progress.on_fallback(&rest_error);
        progress.on_attempt_start(DispatchMethod::Sdk, "metadata");
        let sdk_started = Instant::now();
        let result = sdk.output_metadata().await;
        let sdk_elapsed = sdk_started.elapsed().as_secs_f64();
        progress.on_attempt_complete(DispatchMethod::Sdk, result.is_ok(), sdk_elapsed);

        self.prediction_logger.log(PredictionEvent::new(
            "sdk_attempt",
            json!({
                "target": "metadata",
                "success": result.is_ok(),
                "error": result.as_ref().err().map(|e| e.to_string()),
                "elapsed_seconds": sdk_elapsed,
            }),
        ));

        match result {
            Ok(metadata) => {
                if metadata.is_empty() {
                    warn!("SDK reported no output channels");
                }
                DispatchOutcome::SdkSucceeded {
                    response: DispatchResponse::sdk_metadata(&metadata, sdk_elapsed),
                    rest_error,
                }
            }
            Err(e) => {
                let sdk_error = e.to_string();
                warn!("SDK metadata fallback failed: {}", sdk_error);
                DispatchOutcome::BothFailed {
                    response: DispatchResponse::both_failed(
                        &rest_error,
                        &sdk_error,
                        started.elapsed().as_secs_f64(),
                    ),
                    rest_error,
                    sdk_error,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::prediction_transport::TransportError;
    use crate::ports::progress::NoProgress;
    use async_trait::async_trait;
    use genomechat_domain::{
        InputValidator, MetadataDescriptor, PredictionResult,
    };
    use serde_json::{Map, Value};
    use std::sync::Mutex;

    // ==================== Test Mocks ====================

    struct MockRest {
        response: DispatchResponse,
        calls: Mutex<Vec<PredictionRequest>>,
    }

    impl MockRest {
        fn ok() -> Self {
            let mut data = Map::new();
            data.insert("score".into(), json!(0.42));
            Self::returning(DispatchResponse::rest_success(data, 200, 0.3))
        }

        fn failing(error: &str, status: Option<u16>) -> Self {
            Self::returning(DispatchResponse::rest_failure(error, status, Some(0.1)))
        }

        fn returning(response: DispatchResponse) -> Self {
            Self {
                response,
                calls: Mutex::new(Vec::new()),
            }
        }

        fn call_count(&self) -> usize {
            self.calls.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl PredictionRestPort for MockRest {
        async fn execute(&self, request: &PredictionRequest) -> DispatchResponse {
            self.calls.lock().unwrap().push(request.clone());
            self.response.clone()
        }
    }

    #[derive(Debug, Clone)]
    struct SdkCall {
        interval: GenomicInterval,
        ontology_terms: Vec<String>,
        output_types: Vec<OutputType>,
    }

    struct MockSdk {
        prediction: Result<PredictionResult, TransportError>,
        metadata: Result<MetadataDescriptor, TransportError>,
        calls: Mutex<Vec<SdkCall>>,
    }

    impl MockSdk {
        fn ok() -> Self {
            Self {
                prediction: Ok(PredictionResult::new(
                    Some(json!({"rna_seq": [1.0, 2.0]})),
                    Some(json!({"rna_seq": [1.5, 2.5]})),
                )),
                metadata: Ok(MetadataDescriptor::new(vec![
                    "rna_seq".into(),
                    "atac".into(),
                ])),
                calls: Mutex::new(Vec::new()),
            }
        }

        fn failing(error: TransportError) -> Self {
            Self {
                prediction: Err(error.clone()),
                metadata: Err(error),
                calls: Mutex::new(Vec::new()),
            }
        }

        fn calls(&self) -> Vec<SdkCall> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl PredictionSdkPort for MockSdk {
        async fn predict_variant(
            &self,
            interval: &GenomicInterval,
            _variant: &GenomicVariant,
            _organism: Organism,
            ontology_terms: &[String],
            output_types: &[OutputType],
        ) -> Result<PredictionResult, TransportError> {
            self.calls.lock().unwrap().push(SdkCall {
                interval: interval.clone(),
                ontology_terms: ontology_terms.to_vec(),
                output_types: output_types.to_vec(),
            });
            self.prediction.clone()
        }

        async fn output_metadata(&self) -> Result<MetadataDescriptor, TransportError> {
            self.metadata.clone()
        }
    }

    #[derive(Default)]
    struct RecordingLogger {
        events: Mutex<Vec<PredictionEvent>>,
    }

    impl RecordingLogger {
        fn types(&self) -> Vec<&'static str> {
            self.events.lock().unwrap().iter().map(|e| e.event_type).collect()
        }

        fn payload(&self, event_type: &str) -> Option<Value> {
            self.events
                .lock()
                .unwrap()
                .iter()
                .find(|e| e.event_type == event_type)
                .map(|e| e.payload.clone())
        }
    }

    impl PredictionLogger for RecordingLogger {
        fn log(&self, event: PredictionEvent) {
            self.events.lock().unwrap().push(event);
        }
    }

    #[derive(Default)]
    struct RecordingProgress {
        fallbacks: Mutex<Vec<String>>,
        attempts: Mutex<Vec<(DispatchMethod, bool)>>,
    }

    impl DispatchProgress for RecordingProgress {
        fn on_attempt_start(&self, _method: DispatchMethod, _description: &str) {}

        fn on_attempt_complete(&self, method: DispatchMethod, success: bool, _elapsed: f64) {
            self.attempts.lock().unwrap().push((method, success));
        }

        fn on_fallback(&self, rest_error: &str) {
            self.fallbacks.lock().unwrap().push(rest_error.to_string());
        }
    }

    fn variant() -> GenomicVariant {
        InputValidator::default()
            .validate_variant("chr12:11223344:G>C")
            .into_value()
            .unwrap()
    }

    fn input() -> VariantPredictionInput {
        VariantPredictionInput::new(variant())
    }

    // ==================== predict_variant_hybrid ====================

    #[tokio::test]
    async fn rest_success_is_returned_unchanged() {
        let rest = Arc::new(MockRest::ok());
        let sdk = Arc::new(MockSdk::ok());
        let dispatcher = HybridDispatcher::new(rest.clone()).with_sdk(sdk.clone());

        let outcome = dispatcher.predict_variant_hybrid(&input(), &NoProgress).await;

        assert!(matches!(outcome, DispatchOutcome::RestSucceeded(_)));
        assert_eq!(outcome.response(), &rest.response);
        assert_eq!(outcome.response().method(), Some(DispatchMethod::Rest));
        assert!(sdk.calls().is_empty());
        assert_eq!(rest.call_count(), 1);
    }

    #[tokio::test]
    async fn rest_failure_falls_back_to_sdk() {
        let rest = Arc::new(MockRest::failing("HTTP 503", Some(503)));
        let sdk = Arc::new(MockSdk::ok());
        let progress = RecordingProgress::default();
        let dispatcher = HybridDispatcher::new(rest.clone()).with_sdk(sdk.clone());

        let outcome = dispatcher.predict_variant_hybrid(&input(), &progress).await;

        let DispatchOutcome::SdkSucceeded {
            response,
            rest_error,
        } = &outcome
        else {
            panic!("expected SDK success, got {:?}", outcome);
        };
        assert_eq!(rest_error, "HTTP 503");
        assert!(response.is_success());
        assert_eq!(response.method(), Some(DispatchMethod::Sdk));
        let data = response.data().unwrap();
        assert_eq!(data["method"], "SDK");
        assert_eq!(data["prediction"], "SDK_RESULT");

        assert_eq!(rest.call_count(), 1);
        assert_eq!(progress.fallbacks.lock().unwrap().as_slice(), ["HTTP 503"]);
        assert_eq!(
            progress.attempts.lock().unwrap().as_slice(),
            [(DispatchMethod::Rest, false), (DispatchMethod::Sdk, true)]
        );
    }

    #[tokio::test]
    async fn sdk_fallback_uses_centered_window_and_defaults() {
        let rest = Arc::new(MockRest::failing("Network error: refused", None));
        let sdk = Arc::new(MockSdk::ok());
        let dispatcher = HybridDispatcher::new(rest).with_sdk(sdk.clone());

        dispatcher.predict_variant_hybrid(&input(), &NoProgress).await;

        let calls = sdk.calls();
        assert_eq!(calls.len(), 1);
        let call = &calls[0];
        assert_eq!(call.interval.chromosome().as_str(), "chr12");
        assert_eq!(call.interval.start(), 11_173_344);
        assert_eq!(call.interval.end(), 11_273_344);
        assert_eq!(call.ontology_terms, vec!["UBERON:0001157"]);
        assert_eq!(call.output_types, vec![OutputType::RnaSeq]);
    }

    #[tokio::test]
    async fn sdk_fallback_forwards_requested_terms_and_size() {
        let rest = Arc::new(MockRest::failing("HTTP 500", Some(500)));
        let sdk = Arc::new(MockSdk::ok());
        let dispatcher = HybridDispatcher::new(rest).with_sdk(sdk.clone());
        let input = input()
            .with_interval_size(2_000)
            .with_ontology_terms(vec!["CL:0000236".into()])
            .with_output_types(vec![OutputType::AtacSeq]);

        dispatcher.predict_variant_hybrid(&input, &NoProgress).await;

        let call = &sdk.calls()[0];
        assert_eq!(call.interval.width(), 2_000);
        assert_eq!(call.ontology_terms, vec!["CL:0000236"]);
        assert_eq!(call.output_types, vec![OutputType::AtacSeq]);
    }

    #[tokio::test]
    async fn both_failures_are_concatenated() {
        let rest = Arc::new(MockRest::failing("HTTP 503", Some(503)));
        let sdk = Arc::new(MockSdk::failing(TransportError::Backend(
            "DEADLINE_EXCEEDED".into(),
        )));
        let dispatcher = HybridDispatcher::new(rest).with_sdk(sdk);

        let outcome = dispatcher.predict_variant_hybrid(&input(), &NoProgress).await;

        assert!(matches!(outcome, DispatchOutcome::BothFailed { .. }));
        assert!(outcome.used_fallback());
        let response = outcome.into_response();
        assert!(!response.is_success());
        assert_eq!(
            response.error(),
            Some("Both REST API and SDK failed. REST: HTTP 503, SDK: DEADLINE_EXCEEDED")
        );
    }

    #[tokio::test]
    async fn no_sdk_returns_rest_failure_unchanged() {
        let rest = Arc::new(MockRest::failing("Invalid API key", Some(401)));
        let dispatcher = HybridDispatcher::new(rest.clone());

        let outcome = dispatcher.predict_variant_hybrid(&input(), &NoProgress).await;

        assert!(matches!(outcome, DispatchOutcome::RestFailedNoSdk(_)));
        assert_eq!(outcome.response(), &rest.response);
        assert!(!outcome.used_fallback());
    }

    #[tokio::test]
    async fn disabled_fallback_skips_sdk() {
        let rest = Arc::new(MockRest::failing("HTTP 503", Some(503)));
        let sdk = Arc::new(MockSdk::ok());
        let dispatcher = HybridDispatcher::new(rest)
            .with_sdk(sdk.clone())
            .with_params(DispatchParams::default().with_sdk_fallback(false));

        let outcome = dispatcher.predict_variant_hybrid(&input(), &NoProgress).await;

        assert_eq!(outcome.as_str(), "rest_failed_no_sdk");
        assert!(sdk.calls().is_empty());
    }

    #[tokio::test]
    async fn events_are_logged_per_attempt() {
        let rest = Arc::new(MockRest::failing("HTTP 503", Some(503)));
        let sdk = Arc::new(MockSdk::ok());
        let logger = Arc::new(RecordingLogger::default());
        let dispatcher = HybridDispatcher::new(rest)
            .with_sdk(sdk)
            .with_prediction_logger(logger.clone());

        dispatcher.predict_variant_hybrid(&input(), &NoProgress).await;

        assert_eq!(logger.types(), ["rest_attempt", "fallback", "sdk_attempt"]);
        let sdk_event = logger.payload("sdk_attempt").unwrap();
        assert_eq!(sdk_event["has_reference"], true);
        assert_eq!(sdk_event["has_alternate"], true);
    }

    #[tokio::test]
    async fn one_sided_sdk_prediction_is_recorded() {
        let rest = Arc::new(MockRest::failing("HTTP 503", Some(503)));
        let sdk = Arc::new(MockSdk {
            prediction: Ok(PredictionResult::new(Some(json!({"rna_seq": [1.0]})), None)),
            ..MockSdk::ok()
        });
        let logger = Arc::new(RecordingLogger::default());
        let dispatcher = HybridDispatcher::new(rest)
            .with_sdk(sdk)
            .with_prediction_logger(logger.clone());

        let outcome = dispatcher.predict_variant_hybrid(&input(), &NoProgress).await;

        assert!(outcome.is_success());
        assert_eq!(outcome.response().data().unwrap()["alternate"], Value::Null);
        let sdk_event = logger.payload("sdk_attempt").unwrap();
        assert_eq!(sdk_event["has_reference"], true);
        assert_eq!(sdk_event["has_alternate"], false);
    }

    #[tokio::test]
    async fn failed_sdk_attempt_records_no_sides() {
        let rest = Arc::new(MockRest::failing("HTTP 503", Some(503)));
        let sdk = Arc::new(MockSdk::failing(TransportError::Timeout(300)));
        let logger = Arc::new(RecordingLogger::default());
        let dispatcher = HybridDispatcher::new(rest)
            .with_sdk(sdk)
            .with_prediction_logger(logger.clone());

        dispatcher.predict_variant_hybrid(&input(), &NoProgress).await;

        let sdk_event = logger.payload("sdk_attempt").unwrap();
        assert_eq!(sdk_event["success"], false);
        assert_eq!(sdk_event["has_reference"], Value::Null);
    }

    // ==================== REST-only calls ====================

    #[tokio::test]
    async fn interval_prediction_never_uses_sdk() {
        let rest = Arc::new(MockRest::failing("HTTP 503", Some(503)));
        let sdk = Arc::new(MockSdk::ok());
        let dispatcher = HybridDispatcher::new(rest.clone()).with_sdk(sdk.clone());
        let interval = InputValidator::default()
            .validate_interval("chr22:35677410-36725986")
            .into_value()
            .unwrap();

        let response = dispatcher
            .predict_interval(&interval, Organism::Human, &[OutputType::RnaSeq], &NoProgress)
            .await;

        assert!(!response.is_success());
        assert!(sdk.calls().is_empty());
        let calls = rest.calls.lock().unwrap();
        assert!(matches!(calls[0], PredictionRequest::Interval { .. }));
    }

    #[tokio::test]
    async fn sequence_prediction_targets_sequence_endpoint() {
        let rest = Arc::new(MockRest::ok());
        let dispatcher = HybridDispatcher::new(rest.clone());

        let response = dispatcher
            .predict_sequence("ACGTACGTAC", Organism::Mouse, &[], &NoProgress)
            .await;

        assert!(response.is_success());
        let calls = rest.calls.lock().unwrap();
        assert_eq!(calls[0].body()["sequence"], "ACGTACGTAC");
        assert_eq!(calls[0].body()["organism"], "mouse");
    }

    // ==================== metadata ====================

    #[tokio::test]
    async fn metadata_falls_back_to_sdk_channels() {
        let rest = Arc::new(MockRest::failing("HTTP 404", Some(404)));
        let sdk = Arc::new(MockSdk::ok());
        let dispatcher = HybridDispatcher::new(rest).with_sdk(sdk);

        let outcome = dispatcher.metadata(&NoProgress).await;

        assert!(matches!(outcome, DispatchOutcome::SdkSucceeded { .. }));
        let data = outcome.response().data().unwrap();
        assert_eq!(data["output_types"], json!(["rna_seq", "atac"]));
        assert_eq!(data["method"], Value::from("SDK"));
    }

    #[tokio::test]
    async fn metadata_rest_success_short_circuits() {
        let rest = Arc::new(MockRest::ok());
        let sdk = Arc::new(MockSdk::failing(TransportError::TransportClosed));
        let dispatcher = HybridDispatcher::new(rest).with_sdk(sdk);

        let outcome = dispatcher.metadata(&NoProgress).await;
        assert!(matches!(outcome, DispatchOutcome::RestSucceeded(_)));
    }
}
