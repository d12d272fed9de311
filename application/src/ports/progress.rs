//! Progress notification port
//!
//! Defines the interface for reporting progress while a prediction is
//! dispatched.

use genomechat_domain::DispatchMethod;

/// Callback for progress updates during dispatch
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (spinner, plain log lines, etc.)
pub trait DispatchProgress: Send + Sync {
    /// Called before a transport attempt starts
    fn on_attempt_start(&self, method: DispatchMethod, description: &str);

    /// Called when a transport attempt returns
    fn on_attempt_complete(&self, method: DispatchMethod, success: bool, elapsed_seconds: f64);

    /// Called when the REST attempt failed and the SDK will be tried next.
    fn on_fallback(&self, _rest_error: &str) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl DispatchProgress for NoProgress {
    fn on_attempt_start(&self, _method: DispatchMethod, _description: &str) {}
    fn on_attempt_complete(&self, _method: DispatchMethod, _success: bool, _elapsed: f64) {}
}
