//! SDK bridge process and its request channel.
//!
//! The vendor SDK has no Rust binding, so predictions that fall back to the
//! SDK go through a helper process (for example a small Python script
//! hosting the SDK client). [`SdkBridge`] spawns that helper, authenticates it
//! with `initialize`, and sends one request at a time over [`RpcChannel`].
//!
//! Requests are serialized through a `tokio::sync::Mutex`: the bridge has a
//! single stdin/stdout pair and answers in order. Each exchange is bounded by
//! the configured timeout; a late answer to an abandoned request is skipped
//! by ID on the next exchange.

use super::error::{Result, SdkBridgeError};
use super::protocol::{
    InitializeParams, JsonRpcRequest, JsonRpcResponse, METHOD_INITIALIZE,
    METHOD_OUTPUT_METADATA, METHOD_PREDICT_VARIANT, OutputMetadataResult, PredictVariantParams,
    PredictVariantResult, read_frame, write_frame,
};
use genomechat_domain::{
    GenomicInterval, GenomicVariant, MetadataDescriptor, Organism, OutputType, PredictionResult,
};
use serde_json::Value;
use std::process::Stdio;
use std::time::Duration;
use tokio::io::{AsyncBufRead, AsyncWrite, BufReader};
use tokio::process::{Child, ChildStdin, ChildStdout, Command};
use tokio::sync::Mutex;
use tracing::{debug, info, trace};

/// How to launch the bridge helper.
#[derive(Debug, Clone, PartialEq)]
pub struct SdkBridgeConfig {
    pub command: String,
    pub args: Vec<String>,
    /// Upper bound for one request/response exchange.
    pub timeout: Duration,
}

impl SdkBridgeConfig {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            args: Vec::new(),
            timeout: Duration::from_secs(300),
        }
    }

    pub fn with_args(mut self, args: Vec<String>) -> Self {
        self.args = args;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

struct BridgeIo<R, W> {
    reader: R,
    writer: W,
}

/// Sequential JSON-RPC exchanges over one reader/writer pair.
pub struct RpcChannel<R, W> {
    io: Mutex<BridgeIo<R, W>>,
    timeout: Duration,
}

impl<R, W> RpcChannel<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    pub fn new(reader: R, writer: W, timeout: Duration) -> Self {
        Self {
            io: Mutex::new(BridgeIo { reader, writer }),
            timeout,
        }
    }

    /// Send `method` and wait for the response carrying the same ID.
    pub async fn call(&self, method: &str, params: Option<Value>) -> Result<Value> {
        let request = JsonRpcRequest::new(method, params);
        let mut io = self.io.lock().await;
        let BridgeIo { reader, writer } = &mut *io;

        let exchange = async {
            write_frame(writer, &request).await?;
            loop {
                let frame = read_frame(reader).await?;
                trace!("Bridge received: {}", frame);

                if frame.get("method").is_some() {
                    debug!(
                        "Bridge: ignoring message method={}",
                        frame["method"].as_str().unwrap_or("?")
                    );
                    continue;
                }
                match frame.get("id").and_then(|v| v.as_u64()) {
                    Some(id) if id == request.id => {
                        let response: JsonRpcResponse = serde_json::from_value(frame)?;
                        return response.into_result();
                    }
                    Some(id) => debug!("Bridge: skipping stale response id={}", id),
                    None => {
                        return Err(SdkBridgeError::UnexpectedResponse(format!(
                            "frame without id: {}",
                            frame
                        )));
                    }
                }
            }
        };

        match tokio::time::timeout(self.timeout, exchange).await {
            Ok(result) => result,
            Err(_) => Err(SdkBridgeError::Timeout(self.timeout.as_secs())),
        }
    }

    /// Authenticate the SDK client inside the bridge.
    pub async fn initialize(&self, api_key: &str) -> Result<()> {
        let params = serde_json::to_value(InitializeParams { api_key })?;
        self.call(METHOD_INITIALIZE, Some(params)).await?;
        Ok(())
    }

    pub async fn predict_variant(
        &self,
        interval: &GenomicInterval,
        variant: &GenomicVariant,
        organism: Organism,
        ontology_terms: &[String],
        output_types: &[OutputType],
    ) -> Result<PredictionResult> {
        let params = serde_json::to_value(PredictVariantParams {
            interval: interval.into(),
            variant: variant.into(),
            organism,
            ontology_terms,
            requested_outputs: output_types,
        })?;
        let value = self.call(METHOD_PREDICT_VARIANT, Some(params)).await?;
        let result: PredictVariantResult = serde_json::from_value(value)?;
        Ok(PredictionResult::new(result.reference, result.alternate))
    }

    pub async fn output_metadata(&self) -> Result<MetadataDescriptor> {
        let value = self.call(METHOD_OUTPUT_METADATA, None).await?;
        let result: OutputMetadataResult = serde_json::from_value(value)?;
        Ok(MetadataDescriptor::new(result.into_channels()))
    }
}

/// A running bridge helper process.
///
/// The child is killed when the bridge is dropped.
pub struct SdkBridge {
    channel: RpcChannel<BufReader<ChildStdout>, ChildStdin>,
    child: Child,
}

impl SdkBridge {
    /// Spawn the helper and initialize it with `api_key`.
    pub async fn spawn(config: &SdkBridgeConfig, api_key: &str) -> Result<Self> {
        debug!("Spawning SDK bridge: {} {:?}", config.command, config.args);

        let mut cmd = Command::new(&config.command);
        cmd.args(&config.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .kill_on_drop(true);

        // Linux: request kernel to send SIGTERM to child when parent dies.
        #[cfg(target_os = "linux")]
        unsafe {
            cmd.pre_exec(|| {
                libc::prctl(libc::PR_SET_PDEATHSIG, libc::SIGTERM);
                Ok(())
            });
        }

        let mut child = cmd.spawn().map_err(|source| SdkBridgeError::SpawnError {
            command: config.command.clone(),
            source,
        })?;

        let stdin = child.stdin.take().ok_or_else(|| {
            SdkBridgeError::Io(std::io::Error::other("Failed to capture bridge stdin"))
        })?;
        let stdout = child.stdout.take().ok_or_else(|| {
            SdkBridgeError::Io(std::io::Error::other("Failed to capture bridge stdout"))
        })?;

        let bridge = Self {
            channel: RpcChannel::new(BufReader::new(stdout), stdin, config.timeout),
            child,
        };
        bridge.channel.initialize(api_key).await?;
        info!("SDK bridge ready ({})", config.command);
        Ok(bridge)
    }

    pub fn channel(&self) -> &RpcChannel<BufReader<ChildStdout>, ChildStdin> {
        &self.channel
    }
}

impl Drop for SdkBridge {
    fn drop(&mut self) {
        debug!("SdkBridge dropping, killing bridge process");
        let _ = self.child.start_kill();
    }
}
