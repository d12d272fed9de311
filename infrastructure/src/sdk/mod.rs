//! SDK fallback transport.
//!
//! Talks to a helper process hosting the vendor SDK using JSON-RPC 2.0
//! framed with `Content-Length` headers over stdio.

pub mod bridge;
pub mod client;
pub mod error;
pub mod protocol;

pub use bridge::{SdkBridge, SdkBridgeConfig};
pub use client::SdkPredictionClient;
pub use error::SdkBridgeError;
