//! [`PredictionSdkPort`] adapter backed by a lazily spawned [`SdkBridge`].

use super::bridge::{SdkBridge, SdkBridgeConfig};
use super::error::SdkBridgeError;
use async_trait::async_trait;
use genomechat_application::{PredictionSdkPort, TransportError};
use genomechat_domain::{
    GenomicInterval, GenomicVariant, MetadataDescriptor, Organism, OutputType, PredictionResult,
};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::warn;

/// SDK transport for one API key.
///
/// The bridge process is started on first use, so sessions that never need
/// the fallback never pay for it. A bridge whose channel broke (closed pipe,
/// timeout, garbled frame) is dropped, which kills the helper, and a fresh
/// one is spawned on the next call.
pub struct SdkPredictionClient {
    config: SdkBridgeConfig,
    api_key: String,
    bridge: Mutex<Option<Arc<SdkBridge>>>,
}

impl SdkPredictionClient {
    pub fn new(config: SdkBridgeConfig, api_key: impl Into<String>) -> Self {
        Self {
            config,
            api_key: api_key.into(),
            bridge: Mutex::new(None),
        }
    }

    async fn bridge(&self) -> Result<Arc<SdkBridge>, SdkBridgeError> {
        let mut slot = self.bridge.lock().await;
        if let Some(bridge) = slot.as_ref() {
            return Ok(Arc::clone(bridge));
        }
        let bridge = Arc::new(SdkBridge::spawn(&self.config, &self.api_key).await?);
        *slot = Some(Arc::clone(&bridge));
        Ok(bridge)
    }

    async fn discard_if_broken(&self, err: &SdkBridgeError) {
        if err.requires_respawn() {
            warn!("SDK bridge unusable ({}), will respawn on next call", err);
            *self.bridge.lock().await = None;
        }
    }
}

#[async_trait]
impl PredictionSdkPort for SdkPredictionClient {
    async fn predict_variant(
        &self,
        interval: &GenomicInterval,
        variant: &GenomicVariant,
        organism: Organism,
        ontology_terms: &[String],
        output_types: &[OutputType],
    ) -> Result<PredictionResult, TransportError> {
        let bridge = self.bridge().await?;
        let result = bridge
            .channel()
            .predict_variant(interval, variant, organism, ontology_terms, output_types)
            .await;
        if let Err(err) = &result {
            self.discard_if_broken(err).await;
        }
        Ok(result?)
    }

    async fn output_metadata(&self) -> Result<MetadataDescriptor, TransportError> {
        let bridge = self.bridge().await?;
        let result = bridge.channel().output_metadata().await;
        if let Err(err) = &result {
            self.discard_if_broken(err).await;
        }
        Ok(result?)
    }
}
