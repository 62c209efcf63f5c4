//! HTTP client for a single WMS endpoint.

use std::time::Duration;

use bytes::Bytes;
use tracing::{debug, error, info, instrument, warn};

use wms_common::{LayerList, ServiceConfig, WmsError, WmsResult};
use wms_protocol::{
    build_map_request, capabilities_url, CapabilitiesParser, LayerScope, TileRequest,
};

/// Default request timeout for capabilities fetches.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Fetches capabilities and builds tile requests for one configured service.
#[derive(Debug, Clone)]
pub struct WmsClient {
    http: reqwest::Client,
    config: ServiceConfig,
}

fn fetch_error(err: reqwest::Error) -> WmsError {
    WmsError::FetchFailed(err.to_string())
}

impl WmsClient {
    /// Create a new client.
    pub fn new(config: ServiceConfig) -> WmsResult<Self> {
        Self::with_timeout(config, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(config: ServiceConfig, timeout: Duration) -> WmsResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| WmsError::FetchFailed(format!("failed to create HTTP client: {}", e)))?;

        Ok(Self { http, config })
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    pub fn capabilities_url(&self) -> String {
        capabilities_url(&self.config.base_url)
    }

    /// Download the raw GetCapabilities document.
    ///
    /// Non-2xx responses count as failures. Nothing is retried.
    #[instrument(skip(self), fields(base_url = %self.config.base_url))]
    pub async fn fetch_capabilities(&self) -> WmsResult<Bytes> {
        let url = self.capabilities_url();
        info!(url = %url, "Fetching capabilities");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| {
                error!(error = %e, "Capabilities request failed");
                fetch_error(e)
            })?;

        let body = response.bytes().await.map_err(fetch_error)?;
        debug!(bytes = body.len(), "Received capabilities document");
        Ok(body)
    }

    /// Fetch the capabilities document and extract its layer names.
    ///
    /// The parser only runs once the whole body has arrived.
    pub async fn fetch_layers(&self, scope: LayerScope) -> WmsResult<LayerList> {
        let body = self.fetch_capabilities().await?;

        let layers = CapabilitiesParser::with_scope(scope)
            .parse(&body)
            .map_err(|e| {
                error!(error = %e, "Failed to parse capabilities document");
                WmsError::from(e)
            })?;

        info!(count = layers.len(), "Discovered layers");
        Ok(layers)
    }

    /// Check that every name in `wanted` is advertised by the service.
    ///
    /// Returns the fetched layer list on success, or
    /// [`WmsError::LayerNotFound`] for the first name that is missing.
    pub async fn verify_layers<S: AsRef<str>>(&self, wanted: &[S]) -> WmsResult<LayerList> {
        let layers = self.fetch_layers(LayerScope::Flat).await?;

        if let Some(missing) = wanted
            .iter()
            .map(AsRef::as_ref)
            .find(|name| !layers.contains(name))
        {
            warn!(layer = %missing, "Layer not advertised by service");
            return Err(WmsError::LayerNotFound(missing.to_string()));
        }

        Ok(layers)
    }

    /// GetMap request for `layer` against this client's service.
    pub fn tile_request(&self, layer: &str) -> TileRequest {
        build_map_request(layer, &self.config)
    }
}
