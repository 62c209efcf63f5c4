//! WMS GetMap tile request construction.
//!
//! Pure string templating over a [`ServiceConfig`]: nothing is escaped or
//! validated, so the same `(layer, config)` pair always yields the same URL.
//! Garbage in the config (an unknown version, a non-numeric EPSG code) comes
//! out as a well-formed but meaningless URL.

use serde::Serialize;

use wms_common::{uses_mercator_projection, ReferenceKey, ServiceConfig};

/// Query string appended to the base URL to fetch the capabilities document.
pub const CAPABILITIES_QUERY: &str = "request=GetCapabilities&Service=WMS";

/// URL for the GetCapabilities document of a service.
pub fn capabilities_url(base_url: &str) -> String {
    format!("{}?{}", base_url, CAPABILITIES_QUERY)
}

/// A GetMap URL plus the tiling mode the map overlay must use for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TileRequest {
    pub url: String,
    pub use_mercator_projection: bool,
}

/// Builds GetMap requests for layers of one configured service.
#[derive(Debug, Clone, Copy)]
pub struct TileRequestBuilder<'a> {
    config: &'a ServiceConfig,
}

impl<'a> TileRequestBuilder<'a> {
    pub fn new(config: &'a ServiceConfig) -> Self {
        Self { config }
    }

    /// Query parameters in the order they appear in the URL.
    pub fn query_params(&self, layer: &str) -> Vec<(&'static str, String)> {
        let config = self.config;
        let reference_key = ReferenceKey::for_version(&config.wms_version);
        let tile_size = config.tile_size.to_string();

        vec![
            ("styles", String::new()),
            ("service", "WMS".to_string()),
            ("request", "GetMap".to_string()),
            ("layers", layer.to_string()),
            ("version", config.wms_version.clone()),
            (reference_key.as_str(), format!("EPSG:{}", config.epsg_code)),
            ("width", tile_size.clone()),
            ("height", tile_size),
            ("format", config.image_format.clone()),
            ("transparent", config.transparent.to_string()),
        ]
    }

    /// Build the GetMap request for a layer.
    ///
    /// Every parameter, the last one included, is followed by `&`.
    pub fn build(&self, layer: &str) -> TileRequest {
        let mut url = String::with_capacity(self.config.base_url.len() + 160);
        url.push_str(&self.config.base_url);
        url.push('?');
        for (key, value) in self.query_params(layer) {
            url.push_str(key);
            url.push('=');
            url.push_str(&value);
            url.push('&');
        }

        TileRequest {
            url,
            use_mercator_projection: uses_mercator_projection(&self.config.epsg_code),
        }
    }
}

/// Build the GetMap request for `layer` against `config`.
pub fn build_map_request(layer: &str, config: &ServiceConfig) -> TileRequest {
    TileRequestBuilder::new(config).build(layer)
}
