//! Progress reporting for prediction dispatch

use colored::Colorize;
use genomechat_application::DispatchProgress;
use genomechat_domain::DispatchMethod;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;

/// Spinner shown while a transport attempt is in flight
pub struct ProgressReporter {
    spinner: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold.cyan} {msg} [{elapsed}]")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn method_label(method: DispatchMethod) -> &'static str {
        match method {
            DispatchMethod::Rest => "REST API",
            DispatchMethod::Sdk => "SDK",
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl DispatchProgress for ProgressReporter {
    fn on_attempt_start(&self, method: DispatchMethod, description: &str) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_prefix(Self::method_label(method));
        pb.set_message(description.to_string());
        pb.enable_steady_tick(Duration::from_millis(100));

        if let Ok(mut slot) = self.spinner.lock()
            && let Some(previous) = slot.replace(pb)
        {
            previous.finish_and_clear();
        }
    }

    fn on_attempt_complete(&self, method: DispatchMethod, success: bool, elapsed_seconds: f64) {
        let Ok(mut slot) = self.spinner.lock() else {
            return;
        };
        if let Some(pb) = slot.take() {
            let status = if success {
                format!("{} ({:.2}s)", "done".green(), elapsed_seconds)
            } else {
                format!("{} ({:.2}s)", "failed".red(), elapsed_seconds)
            };
            pb.finish_with_message(format!("{} {}", Self::method_label(method), status));
        }
    }

    fn on_fallback(&self, rest_error: &str) {
        eprintln!(
            "{} REST API failed ({}), trying SDK...",
            "->".yellow(),
            rest_error
        );
    }
}

/// Simple text-based progress (no spinner)
pub struct SimpleProgress;

impl DispatchProgress for SimpleProgress {
    fn on_attempt_start(&self, method: DispatchMethod, description: &str) {
        eprintln!(
            "{} {} {}",
            "->".cyan(),
            ProgressReporter::method_label(method).bold(),
            description
        );
    }

    fn on_attempt_complete(&self, method: DispatchMethod, success: bool, elapsed_seconds: f64) {
        if success {
            eprintln!("  {} {} ({:.2}s)", "v".green(), method, elapsed_seconds);
        } else {
            eprintln!("  {} {} failed ({:.2}s)", "x".red(), method, elapsed_seconds);
        }
    }

    fn on_fallback(&self, rest_error: &str) {
        eprintln!("  {} falling back to SDK: {}", "!".yellow(), rest_error);
    }
}

/// Pick a progress notifier for the current terminal.
///
/// Spinners only make sense on an interactive stderr; otherwise plain lines
/// are written.
pub fn progress_for(show_progress: bool) -> Box<dyn DispatchProgress> {
    use std::io::IsTerminal;

    if !show_progress {
        Box::new(genomechat_application::NoProgress)
    } else if std::io::stderr().is_terminal() {
        Box::new(ProgressReporter::new())
    } else {
        Box::new(SimpleProgress)
    }
}
