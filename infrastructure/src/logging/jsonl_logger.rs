//! JSONL file writer for prediction events.
//!
//! Each [`PredictionEvent`] becomes a single JSON line with a `type` field and
//! a `timestamp`. The file is opened in append mode so one log can span many
//! sessions.

use genomechat_application::ports::prediction_logger::{PredictionEvent, PredictionLogger};
use serde_json::{Value, json};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::warn;

/// JSONL prediction logger that writes one JSON object per line.
///
/// Thread-safe via `Mutex<BufWriter<File>>`. Flushes after every record and
/// on `Drop`.
pub struct JsonlPredictionLogger {
    writer: Mutex<BufWriter<File>>,
    path: PathBuf,
}

impl JsonlPredictionLogger {
    /// Open (or create) the log at `path`, creating parent directories.
    ///
    /// Returns `None` if the file cannot be opened; prediction logging is
    /// optional and its absence never blocks a session.
    pub fn new(path: impl AsRef<Path>) -> Option<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && let Err(e) = std::fs::create_dir_all(parent)
        {
            warn!(
                "Could not create prediction log directory {}: {}",
                parent.display(),
                e
            );
            return None;
        }

        let file = match OpenOptions::new().create(true).append(true).open(path) {
            Ok(f) => f,
            Err(e) => {
                warn!("Could not open prediction log {}: {}", path.display(), e);
                return None;
            }
        };

        Some(Self {
            writer: Mutex::new(BufWriter::new(file)),
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn record(event: PredictionEvent) -> Value {
        let timestamp = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true);
        match event.payload {
            Value::Object(mut map) => {
                map.insert("type".into(), Value::String(event.event_type.to_string()));
                map.insert("timestamp".into(), Value::String(timestamp));
                Value::Object(map)
            }
            other => json!({
                "type": event.event_type,
                "timestamp": timestamp,
                "data": other,
            }),
        }
    }
}

impl PredictionLogger for JsonlPredictionLogger {
    fn log(&self, event: PredictionEvent) {
        let Ok(line) = serde_json::to_string(&Self::record(event)) else {
            return;
        };

        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", line);
            let _ = writer.flush();
        }
    }
}

impl Drop for JsonlPredictionLogger {
    fn drop(&mut self) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writer.flush();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read_lines(path: &Path) -> Vec<Value> {
        std::fs::read_to_string(path)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect()
    }

    #[test]
    fn writes_one_record_per_event() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("predictions.jsonl");
        let logger = JsonlPredictionLogger::new(&path).unwrap();

        logger.log(PredictionEvent::new(
            "rest_attempt",
            json!({"endpoint": "/v1/predict/variant", "success": false, "status_code": 503}),
        ));
        logger.log(PredictionEvent::new(
            "fallback",
            json!({"rest_error": "HTTP 503"}),
        ));
        drop(logger);

        let records = read_lines(&path);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0]["type"], "rest_attempt");
        assert_eq!(records[0]["status_code"], 503);
        assert!(records[0]["timestamp"].is_string());
        assert_eq!(records[1]["type"], "fallback");
        assert_eq!(records[1]["rest_error"], "HTTP 503");
    }

    #[test]
    fn appends_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("predictions.jsonl");

        for _ in 0..2 {
            let logger = JsonlPredictionLogger::new(&path).unwrap();
            logger.log(PredictionEvent::new("sdk_attempt", json!({"success": true})));
        }

        assert_eq!(read_lines(&path).len(), 2);
    }

    #[test]
    fn non_object_payload_is_wrapped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("predictions.jsonl");
        let logger = JsonlPredictionLogger::new(&path).unwrap();

        logger.log(PredictionEvent::new("validation_failed", json!("bad input")));
        drop(logger);

        let records = read_lines(&path);
        assert_eq!(records[0]["type"], "validation_failed");
        assert_eq!(records[0]["data"], "bad input");
    }
}
