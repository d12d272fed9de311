//! [`TransportFactory`] implementation wiring the REST client and SDK bridge.

use crate::rest::RestPredictionClient;
use crate::sdk::{SdkBridgeConfig, SdkPredictionClient};
use genomechat_application::{PredictionRestPort, PredictionSdkPort, TransportFactory};
use std::sync::{Arc, Mutex};
use tracing::debug;

/// Builds per-key transports over one shared `reqwest::Client`.
///
/// The SDK client for the most recent key is cached so its bridge process
/// survives between commands. Switching keys drops the old bridge.
pub struct HttpTransportFactory {
    http: reqwest::Client,
    base_url: String,
    sdk: Option<SdkBridgeConfig>,
    sdk_cache: Mutex<Option<(String, Arc<SdkPredictionClient>)>>,
}

impl HttpTransportFactory {
    pub fn new(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
            sdk: None,
            sdk_cache: Mutex::new(None),
        }
    }

    /// Enable the SDK fallback through the given bridge.
    pub fn with_sdk(mut self, config: SdkBridgeConfig) -> Self {
        self.sdk = Some(config);
        self
    }
}

impl TransportFactory for HttpTransportFactory {
    fn rest_transport(&self, api_key: &str) -> Arc<dyn PredictionRestPort> {
        Arc::new(RestPredictionClient::new(
            self.http.clone(),
            self.base_url.clone(),
            api_key,
        ))
    }

    fn sdk_transport(&self, api_key: &str) -> Option<Arc<dyn PredictionSdkPort>> {
        let config = self.sdk.as_ref()?;
        let mut cache = self.sdk_cache.lock().unwrap_or_else(|e| e.into_inner());
        if let Some((key, client)) = cache.as_ref()
            && key == api_key
        {
            return Some(Arc::clone(client) as Arc<dyn PredictionSdkPort>);
        }

        debug!("Creating SDK transport for new API key");
        let client = Arc::new(SdkPredictionClient::new(config.clone(), api_key));
        *cache = Some((api_key.to_string(), Arc::clone(&client)));
        Some(client)
    }

    fn has_sdk(&self) -> bool {
        self.sdk.is_some()
    }
}
