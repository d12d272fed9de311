//! Backend failure taxonomy.
//!
//! Both transports fail with free-form text (HTTP bodies, RPC error
//! messages, network errors). [`ErrorClassifier`] maps that text to one of
//! seven [`ErrorCategory`] values plus a short user-facing explanation.
//!
//! Rules are checked in order against the lower-cased text; the first match
//! wins:
//!
//! | Markers | Category |
//! |---------|----------|
//! | `permission_denied`, `401` | [`ErrorCategory::AuthenticationError`] |
//! | `quota_exceeded`, `429` | [`ErrorCategory::QuotaExceeded`] |
//! | `invalid_argument`, `400` | [`ErrorCategory::InvalidRequest`] (echoes raw text) |
//! | `unavailable`, `503` | [`ErrorCategory::ServiceUnavailable`] |
//! | `deadline_exceeded`, `timeout` | [`ErrorCategory::TimeoutError`] |
//! | `resource_exhausted` | [`ErrorCategory::ResourceExhausted`] |
//! | anything else | [`ErrorCategory::GenericApiError`] (echoes raw text) |

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ErrorCategory {
    AuthenticationError,
    QuotaExceeded,
    InvalidRequest,
    ServiceUnavailable,
    TimeoutError,
    ResourceExhausted,
    GenericApiError,
}

impl ErrorCategory {
    pub fn display_name(&self) -> &'static str {
        match self {
            ErrorCategory::AuthenticationError => "Authentication Error",
            ErrorCategory::QuotaExceeded => "Quota Exceeded",
            ErrorCategory::InvalidRequest => "Invalid Request",
            ErrorCategory::ServiceUnavailable => "Service Unavailable",
            ErrorCategory::TimeoutError => "Timeout Error",
            ErrorCategory::ResourceExhausted => "Resource Exhausted",
            ErrorCategory::GenericApiError => "API Error",
        }
    }

    /// Whether re-issuing the same request later could plausibly succeed.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            ErrorCategory::QuotaExceeded
                | ErrorCategory::ServiceUnavailable
                | ErrorCategory::TimeoutError
                | ErrorCategory::ResourceExhausted
        )
    }
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// A categorized failure with its user-facing detail text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassifiedError {
    pub category: ErrorCategory,
    pub detail: String,
}

impl ClassifiedError {
    /// `"<Category>: <detail>"`, the form shown to users.
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl std::fmt::Display for ClassifiedError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.category.display_name(), self.detail)
    }
}

const RULES: &[(&[&str], ErrorCategory)] = &[
    (&["permission_denied", "401"], ErrorCategory::AuthenticationError),
    (&["quota_exceeded", "429"], ErrorCategory::QuotaExceeded),
    (&["invalid_argument", "400"], ErrorCategory::InvalidRequest),
    (&["unavailable", "503"], ErrorCategory::ServiceUnavailable),
    (&["deadline_exceeded", "timeout"], ErrorCategory::TimeoutError),
    (&["resource_exhausted"], ErrorCategory::ResourceExhausted),
];

/// Pure mapping from error text to [`ClassifiedError`].
pub struct ErrorClassifier;

impl ErrorClassifier {
    pub fn categorize(error_text: &str) -> ErrorCategory {
        let lowered = error_text.to_lowercase();
        RULES
            .iter()
            .find(|(markers, _)| markers.iter().any(|m| lowered.contains(m)))
            .map(|(_, category)| *category)
            .unwrap_or(ErrorCategory::GenericApiError)
    }

    pub fn classify(error_text: &str) -> ClassifiedError {
        let category = Self::categorize(error_text);
        let detail = match category {
            ErrorCategory::AuthenticationError => {
                "Invalid API key. Please check your prediction API key.".to_string()
            }
            ErrorCategory::QuotaExceeded => {
                "You have exceeded your API quota. Please try again later.".to_string()
            }
            ErrorCategory::ServiceUnavailable => {
                "The prediction API is temporarily unavailable. Please try again later."
                    .to_string()
            }
            ErrorCategory::TimeoutError => {
                "Request took too long. Try with a smaller sequence or interval.".to_string()
            }
            ErrorCategory::ResourceExhausted => {
                "Server is overloaded. Please try again later.".to_string()
            }
            ErrorCategory::InvalidRequest | ErrorCategory::GenericApiError => {
                error_text.to_string()
            }
        };
        ClassifiedError { category, detail }
    }

    /// Classify a failed response, folding its HTTP status into the text.
    pub fn classify_response(status_code: Option<u16>, error_text: &str) -> ClassifiedError {
        match status_code {
            Some(code) if !error_text.contains(&code.to_string()) => {
                Self::classify(&format!("HTTP {}: {}", code, error_text))
            }
            _ => Self::classify(error_text),
        }
    }
}
