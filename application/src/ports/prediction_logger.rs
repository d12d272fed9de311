//! Port for structured prediction logging.
//!
//! Defines the [`PredictionLogger`] trait for recording dispatch events
//! (REST attempts, SDK fallbacks, validation failures) to a structured log.
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! human-readable diagnostic messages, while this port captures each
//! prediction attempt in a machine-readable format (JSONL).

use serde_json::Value;

/// A structured prediction event for logging.
///
/// Each event has a type string and a JSON payload containing event-specific
/// fields. The adapter adds the timestamp when it writes the record.
#[derive(Debug, Clone)]
pub struct PredictionEvent {
    /// Event type identifier (e.g., "rest_attempt", "sdk_attempt", "fallback").
    pub event_type: &'static str,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl PredictionEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }
}

/// Port for logging prediction events to a structured log.
///
/// Implementations write each event as a single record (e.g., one JSONL line).
/// The `log` method is synchronous and non-fallible; write failures are
/// dropped so they never affect a prediction.
pub trait PredictionLogger: Send + Sync {
    /// Record a prediction event.
    fn log(&self, event: PredictionEvent);
}

/// No-op implementation for tests and when logging is disabled.
pub struct NoPredictionLogger;

impl PredictionLogger for NoPredictionLogger {
    fn log(&self, _event: PredictionEvent) {}
}
