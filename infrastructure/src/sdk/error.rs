//! Error types for the SDK bridge

use genomechat_application::TransportError;
use thiserror::Error;

/// Result type alias for SDK bridge operations
pub type Result<T> = std::result::Result<T, SdkBridgeError>;

/// Errors that can occur when talking to the SDK bridge process
#[derive(Error, Debug)]
pub enum SdkBridgeError {
    #[error("Failed to spawn SDK bridge '{command}': {source}")]
    SpawnError {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("SDK bridge I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Malformed frame: {0}")]
    InvalidFrame(String),

    /// Error object returned by the bridge; `message` is the SDK's own text.
    #[error("{message}")]
    RpcError { code: i64, message: String },

    #[error("Unexpected response: {0}")]
    UnexpectedResponse(String),

    #[error("Transport closed")]
    TransportClosed,

    #[error("Timeout after {0}s")]
    Timeout(u64),
}

impl SdkBridgeError {
    /// Whether the bridge that raised this error must be replaced.
    ///
    /// A timeout can abandon a frame half read, after which the stdout stream
    /// is out of step with the requests; a hung helper stays hung. Errors the
    /// helper itself reports leave the channel usable.
    pub fn requires_respawn(&self) -> bool {
        matches!(
            self,
            SdkBridgeError::TransportClosed
                | SdkBridgeError::Io(_)
                | SdkBridgeError::Timeout(_)
                | SdkBridgeError::InvalidFrame(_)
                | SdkBridgeError::SerializationError(_)
        )
    }
}

impl From<SdkBridgeError> for TransportError {
    fn from(err: SdkBridgeError) -> Self {
        match err {
            SdkBridgeError::SpawnError { .. } => TransportError::Unavailable(err.to_string()),
            SdkBridgeError::RpcError { message, .. } => TransportError::Backend(message),
            SdkBridgeError::Timeout(secs) => TransportError::Timeout(secs),
            SdkBridgeError::TransportClosed => TransportError::TransportClosed,
            other => TransportError::Protocol(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rpc_error_text_passes_through() {
        let err = SdkBridgeError::RpcError {
            code: -32000,
            message: "RESOURCE_EXHAUSTED: try later".into(),
        };
        assert_eq!(
            TransportError::from(err),
            TransportError::Backend("RESOURCE_EXHAUSTED: try later".into())
        );
    }

    #[test]
    fn spawn_failure_is_unavailable() {
        let err = SdkBridgeError::SpawnError {
            command: "missing-bridge".into(),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        let mapped = TransportError::from(err);
        assert!(matches!(mapped, TransportError::Unavailable(ref m) if m.contains("missing-bridge")));
    }

    #[test]
    fn broken_channel_errors_require_respawn() {
        assert!(SdkBridgeError::Timeout(300).requires_respawn());
        assert!(SdkBridgeError::TransportClosed.requires_respawn());
        assert!(SdkBridgeError::InvalidFrame("bad header".into()).requires_respawn());
        assert!(!SdkBridgeError::UnexpectedResponse("frame without id".into()).requires_respawn());
        assert!(
            !SdkBridgeError::RpcError {
                code: -32000,
                message: "PERMISSION_DENIED".into()
            }
            .requires_respawn()
        );
    }
}
