//! Structured prediction logging.
//!
//! Provides [`JsonlPredictionLogger`], a JSONL file writer that implements
//! the [`PredictionLogger`](genomechat_application::PredictionLogger) port.

mod jsonl_logger;

pub use jsonl_logger::JsonlPredictionLogger;
