//! REST prediction transport.

mod client;

pub use client::{RestPredictionClient, build_http_client};
