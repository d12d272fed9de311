//! JSON-RPC protocol types and framing for the SDK bridge.
//!
//! Messages are JSON-RPC 2.0 objects, each preceded by a
//! `Content-Length: <bytes>\r\n\r\n` header, exchanged over the bridge
//! process's stdin and stdout.
//!
//! # Methods
//!
//! - `initialize` `{api_key}`: create the SDK client
//! - `predict_variant` [`PredictVariantParams`] → [`PredictVariantResult`]
//! - `output_metadata` → [`OutputMetadataResult`]

use super::error::{Result, SdkBridgeError};
use genomechat_domain::{GenomicInterval, GenomicVariant, Organism, OutputType};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncReadExt, AsyncWrite, AsyncWriteExt};

/// Global request ID counter for JSON-RPC requests.
static REQUEST_ID: AtomicU64 = AtomicU64::new(1);

fn next_id() -> u64 {
    REQUEST_ID.fetch_add(1, Ordering::SeqCst)
}

/// Upper bound on one frame body; larger `Content-Length` values are rejected
/// before anything is allocated.
pub const MAX_FRAME_BYTES: usize = 128 * 1024 * 1024;

pub const METHOD_INITIALIZE: &str = "initialize";
pub const METHOD_PREDICT_VARIANT: &str = "predict_variant";
pub const METHOD_OUTPUT_METADATA: &str = "output_metadata";

/// JSON-RPC request
#[derive(Debug, Clone, Serialize)]
pub struct JsonRpcRequest {
    pub jsonrpc: &'static str,
    pub id: u64,
    pub method: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<serde_json::Value>,
}

impl JsonRpcRequest {
    /// Creates a new JSON-RPC request with an auto-generated ID.
    pub fn new(method: impl Into<String>, params: Option<serde_json::Value>) -> Self {
        Self {
            jsonrpc: "2.0",
            id: next_id(),
            method: method.into(),
            params,
        }
    }
}

/// JSON-RPC response
#[derive(Debug, Clone, Deserialize)]
pub struct JsonRpcResponse {
    #[serde(default)]
    pub jsonrpc: String,
    pub id: Option<u64>,
    pub result: Option<serde_json::Value>,
    pub error: Option<RpcError>,
}

impl JsonRpcResponse {
    /// Split into the result payload or the bridge's error.
    pub fn into_result(self) -> Result<serde_json::Value> {
        match (self.error, self.result) {
            (Some(err), _) => Err(SdkBridgeError::RpcError {
                code: err.code,
                message: err.message,
            }),
            (None, Some(result)) => Ok(result),
            (None, None) => Ok(serde_json::Value::Null),
        }
    }
}

/// JSON-RPC error object
#[derive(Debug, Clone, Deserialize)]
pub struct RpcError {
    pub code: i64,
    pub message: String,
    pub data: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Serialize)]
pub struct InitializeParams<'a> {
    pub api_key: &'a str,
}

#[derive(Debug, Clone, Serialize)]
pub struct IntervalParams<'a> {
    pub chromosome: &'a str,
    pub start: u64,
    pub end: u64,
}

impl<'a> From<&'a GenomicInterval> for IntervalParams<'a> {
    fn from(interval: &'a GenomicInterval) -> Self {
        Self {
            chromosome: interval.chromosome().as_str(),
            start: interval.start(),
            end: interval.end(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct VariantParams<'a> {
    pub chromosome: &'a str,
    pub position: u64,
    pub reference_bases: &'a str,
    pub alternate_bases: &'a str,
}

impl<'a> From<&'a GenomicVariant> for VariantParams<'a> {
    fn from(variant: &'a GenomicVariant) -> Self {
        Self {
            chromosome: variant.chromosome().as_str(),
            position: variant.position(),
            reference_bases: variant.reference_bases(),
            alternate_bases: variant.alternate_bases(),
        }
    }
}

/// Parameters of `predict_variant`.
#[derive(Debug, Clone, Serialize)]
pub struct PredictVariantParams<'a> {
    pub interval: IntervalParams<'a>,
    pub variant: VariantParams<'a>,
    pub organism: Organism,
    pub ontology_terms: &'a [String],
    pub requested_outputs: &'a [OutputType],
}

/// Result of `predict_variant`: opaque reference and alternate tracks.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PredictVariantResult {
    #[serde(default)]
    pub reference: Option<serde_json::Value>,
    #[serde(default)]
    pub alternate: Option<serde_json::Value>,
}

/// Result of `output_metadata`.
///
/// Bridges may answer with `{"output_types": [...]}` or a bare array.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum OutputMetadataResult {
    Described { output_types: Vec<String> },
    Bare(Vec<String>),
}

impl OutputMetadataResult {
    pub fn into_channels(self) -> Vec<String> {
        match self {
            OutputMetadataResult::Described { output_types } => output_types,
            OutputMetadataResult::Bare(channels) => channels,
        }
    }
}

/// Write one framed message.
pub async fn write_frame<W>(writer: &mut W, message: &impl Serialize) -> Result<()>
where
    W: AsyncWrite + Unpin,
{
    let json = serde_json::to_string(message)?;
    let header = format!("Content-Length: {}\r\n\r\n", json.len());
    writer.write_all(header.as_bytes()).await?;
    writer.write_all(json.as_bytes()).await?;
    writer.flush().await?;
    Ok(())
}

/// Read one framed message.
///
/// Headers other than `Content-Length` are skipped; blank lines before the
/// first header are tolerated.
pub async fn read_frame<R>(reader: &mut R) -> Result<serde_json::Value>
where
    R: AsyncBufRead + Unpin,
{
    let mut line = String::new();
    let mut content_length: Option<usize> = None;

    loop {
        line.clear();
        if reader.read_line(&mut line).await? == 0 {
            return Err(SdkBridgeError::TransportClosed);
        }
        let trimmed = line.trim();
        if trimmed.is_empty() {
            if content_length.is_some() {
                break;
            }
            continue;
        }
        if let Some(len_str) = trimmed.strip_prefix("Content-Length:") {
            let len = len_str.trim().parse::<usize>().map_err(|_| {
                SdkBridgeError::InvalidFrame(format!("bad Content-Length '{}'", len_str.trim()))
            })?;
            if len > MAX_FRAME_BYTES {
                return Err(SdkBridgeError::InvalidFrame(format!(
                    "Content-Length {} exceeds the {} byte limit",
                    len, MAX_FRAME_BYTES
                )));
            }
            content_length = Some(len);
        }
    }

    let len = content_length.unwrap_or_default();
    let mut body = vec![0u8; len];
    reader.read_exact(&mut body).await?;
    Ok(serde_json::from_slice(&body)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tokio::io::BufReader;

    #[test]
    fn request_serializes_without_empty_params() {
        let request = JsonRpcRequest::new(METHOD_OUTPUT_METADATA, None);
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["jsonrpc"], "2.0");
        assert_eq!(value["method"], "output_metadata");
        assert!(value.get("params").is_none());
    }

    #[test]
    fn request_ids_increase() {
        let a = JsonRpcRequest::new("a", None);
        let b = JsonRpcRequest::new("b", None);
        assert!(b.id > a.id);
    }

    #[test]
    fn response_error_wins_over_result() {
        let response: JsonRpcResponse = serde_json::from_value(json!({
            "jsonrpc": "2.0",
            "id": 3,
            "error": {"code": -32000, "message": "UNAVAILABLE: backend down"}
        }))
        .unwrap();
        let err = response.into_result().unwrap_err();
        assert_eq!(err.to_string(), "UNAVAILABLE: backend down");
    }

    #[test]
    fn metadata_accepts_both_shapes() {
        let described: OutputMetadataResult =
            serde_json::from_value(json!({"output_types": ["RNA_SEQ"]})).unwrap();
        assert_eq!(described.into_channels(), vec!["RNA_SEQ"]);

        let bare: OutputMetadataResult = serde_json::from_value(json!(["DNASE", "CAGE"])).unwrap();
        assert_eq!(bare.into_channels(), vec!["DNASE", "CAGE"]);
    }

    #[tokio::test]
    async fn frame_round_trip_with_extra_headers() {
        let raw = b"Content-Type: application/json\r\nContent-Length: 12\r\n\r\n{\"ok\": true}";
        let mut reader = BufReader::new(&raw[..]);
        let value = read_frame(&mut reader).await.unwrap();
        assert_eq!(value, json!({"ok": true}));

        let mut out = Vec::new();
        write_frame(&mut out, &json!({"id": 1})).await.unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Content-Length: 8\r\n\r\n{\"id\":1}");
    }

    #[tokio::test]
    async fn eof_is_transport_closed() {
        let mut reader = BufReader::new(&b""[..]);
        assert!(matches!(
            read_frame(&mut reader).await,
            Err(SdkBridgeError::TransportClosed)
        ));
    }

    #[tokio::test]
    async fn bad_length_is_invalid_frame() {
        let mut reader = BufReader::new(&b"Content-Length: abc\r\n\r\n"[..]);
        assert!(matches!(
            read_frame(&mut reader).await,
            Err(SdkBridgeError::InvalidFrame(_))
        ));
    }

    #[tokio::test]
    async fn oversized_length_is_rejected() {
        let raw = format!("Content-Length: {}\r\n\r\n{{}}", MAX_FRAME_BYTES + 1);
        let mut reader = BufReader::new(raw.as_bytes());
        let err = read_frame(&mut reader).await.unwrap_err();
        assert!(matches!(err, SdkBridgeError::InvalidFrame(ref m) if m.contains("exceeds")));
    }
}
