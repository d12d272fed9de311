//! Uniform dispatch response shared by both transports.

use super::error_category::{ClassifiedError, ErrorClassifier};
use super::result::{MetadataDescriptor, PredictionResult};
use serde::Serialize;
use serde_json::{Map, Value, json};

/// Which transport produced a [`DispatchResponse`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DispatchMethod {
    Rest,
    Sdk,
}

impl DispatchMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            DispatchMethod::Rest => "REST",
            DispatchMethod::Sdk => "SDK",
        }
    }
}

impl std::fmt::Display for DispatchMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Result of one dispatch call (Value Object).
///
/// Built once through the constructors below and never mutated. A failed
/// response always carries an `error`; a successful one usually carries
/// `data`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DispatchResponse {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<Map<String, Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    status_code: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    elapsed_seconds: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    method: Option<DispatchMethod>,
}

impl DispatchResponse {
    /// A REST reply with a 2xx status and a parsed JSON object body.
    pub fn rest_success(data: Map<String, Value>, status_code: u16, elapsed_seconds: f64) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            status_code: Some(status_code),
            elapsed_seconds: Some(elapsed_seconds),
            method: Some(DispatchMethod::Rest),
        }
    }

    /// A REST attempt that failed, with or without an HTTP status.
    pub fn rest_failure(
        error: impl Into<String>,
        status_code: Option<u16>,
        elapsed_seconds: Option<f64>,
    ) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
            status_code,
            elapsed_seconds,
            method: Some(DispatchMethod::Rest),
        }
    }

    /// Wrap an SDK variant prediction in the REST-compatible data shape.
    pub fn sdk_prediction(result: &PredictionResult, elapsed_seconds: f64) -> Self {
        let mut data = Map::new();
        data.insert("prediction".into(), json!("SDK_RESULT"));
        data.insert(
            "reference".into(),
            result.reference.clone().unwrap_or(Value::Null),
        );
        data.insert(
            "alternate".into(),
            result.alternate.clone().unwrap_or(Value::Null),
        );
        data.insert("method".into(), json!(DispatchMethod::Sdk.as_str()));
        Self::sdk_success(data, elapsed_seconds)
    }

    /// Wrap SDK output metadata in the REST-compatible data shape.
    pub fn sdk_metadata(metadata: &MetadataDescriptor, elapsed_seconds: f64) -> Self {
        let mut data = Map::new();
        data.insert("output_types".into(), json!(metadata.output_channels));
        data.insert("method".into(), json!(DispatchMethod::Sdk.as_str()));
        Self::sdk_success(data, elapsed_seconds)
    }

    fn sdk_success(data: Map<String, Value>, elapsed_seconds: f64) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            status_code: None,
            elapsed_seconds: Some(elapsed_seconds),
            method: Some(DispatchMethod::Sdk),
        }
    }

    /// Both transports failed; both reasons are kept verbatim.
    pub fn both_failed(rest_error: &str, sdk_error: &str, elapsed_seconds: f64) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(format!(
                "Both REST API and SDK failed. REST: {}, SDK: {}",
                rest_error, sdk_error
            )),
            status_code: None,
            elapsed_seconds: Some(elapsed_seconds),
            method: None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    pub fn data(&self) -> Option<&Map<String, Value>> {
        self.data.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn status_code(&self) -> Option<u16> {
        self.status_code
    }

    pub fn elapsed_seconds(&self) -> Option<f64> {
        self.elapsed_seconds
    }

    pub fn method(&self) -> Option<DispatchMethod> {
        self.method
    }

    /// Classify the failure for display; `None` on success.
    pub fn classify_error(&self) -> Option<ClassifiedError> {
        if self.success {
            return None;
        }
        Some(ErrorClassifier::classify_response(
            self.status_code,
            self.error.as_deref().unwrap_or("Unknown error"),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prediction::error_category::ErrorCategory;

    #[test]
    fn rest_success_carries_status_and_method() {
        let mut data = Map::new();
        data.insert("score".into(), json!(0.5));
        let response = DispatchResponse::rest_success(data, 200, 0.25);
        assert!(response.is_success());
        assert_eq!(response.status_code(), Some(200));
        assert_eq!(response.method(), Some(DispatchMethod::Rest));
        assert!(response.error().is_none());
        assert!(response.classify_error().is_none());
    }

    #[test]
    fn sdk_prediction_tags_method_in_data() {
        let result = PredictionResult::new(Some(json!([1, 2])), None);
        let response = DispatchResponse::sdk_prediction(&result, 1.5);
        let data = response.data().unwrap();
        assert_eq!(data["method"], "SDK");
        assert_eq!(data["prediction"], "SDK_RESULT");
        assert_eq!(data["reference"], json!([1, 2]));
        assert_eq!(data["alternate"], Value::Null);
        assert_eq!(response.method(), Some(DispatchMethod::Sdk));
    }

    #[test]
    fn both_failed_concatenates_reasons() {
        let response = DispatchResponse::both_failed("HTTP 503", "bridge exited", 2.0);
        assert!(!response.is_success());
        assert_eq!(
            response.error(),
            Some("Both REST API and SDK failed. REST: HTTP 503, SDK: bridge exited")
        );
    }

    #[test]
    fn failure_is_classified_with_status_code() {
        let response = DispatchResponse::rest_failure("Too many requests", Some(429), Some(0.1));
        let classified = response.classify_error().unwrap();
        assert_eq!(classified.category, ErrorCategory::QuotaExceeded);
    }

    #[test]
    fn serialization_skips_absent_fields() {
        let response = DispatchResponse::rest_failure("Network error: refused", None, None);
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(
            json,
            json!({"success": false, "error": "Network error: refused", "method": "REST"})
        );
    }
}
