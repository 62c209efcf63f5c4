//! Service configuration for a single WMS endpoint.
//!
//! Fixed at startup. The GetMap builder reads it on every call and never
//! validates it; callers that want early feedback call [`ServiceConfig::validate`].

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::crs::{is_supported_version, is_valid_epsg_code, WMS_VERSION_1_3_0};
use crate::{WmsError, WmsResult};

/// Connection and tile parameters for one WMS endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Endpoint URL without a query string
    pub base_url: String,

    /// WMS version string, "1.1.1" or "1.3.0"
    pub wms_version: String,

    /// Bare EPSG code, e.g. "4326" or "900913"
    pub epsg_code: String,

    /// Square tile edge in pixels
    pub tile_size: u32,

    /// MIME type of the requested images
    pub image_format: String,

    pub transparent: bool,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: "https://openwms.statkart.no/skwms1/wms.kartdata2".to_string(),
            wms_version: WMS_VERSION_1_3_0.to_string(),
            epsg_code: "4326".to_string(),
            tile_size: 256,
            image_format: "image/png".to_string(),
            transparent: true,
        }
    }
}

impl ServiceConfig {
    /// Parse configuration from a YAML document. Missing fields take their defaults.
    pub fn from_yaml_str(content: &str) -> WmsResult<Self> {
        let config: ServiceConfig = serde_yaml::from_str(content)?;
        Ok(config)
    }

    /// Load configuration from a YAML file.
    pub fn from_file(path: impl AsRef<Path>) -> WmsResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| WmsError::ConfigRead(format!("{}: {}", path.display(), e)))?;
        Self::from_yaml_str(&content)
    }

    /// Validate configuration.
    ///
    /// The GetMap builder happily templates garbage into a URL; this is the
    /// opt-in check a caller can run once before handing the config over.
    pub fn validate(&self) -> WmsResult<()> {
        if self.base_url.trim().is_empty() {
            return Err(WmsError::invalid_config("base_url", "must not be empty"));
        }
        if self.base_url.contains('?') {
            return Err(WmsError::invalid_config(
                "base_url",
                "must not contain a query string",
            ));
        }
        if !is_supported_version(&self.wms_version) {
            return Err(WmsError::invalid_config(
                "wms_version",
                format!("unsupported version '{}'", self.wms_version),
            ));
        }
        if !is_valid_epsg_code(&self.epsg_code) {
            return Err(WmsError::invalid_config(
                "epsg_code",
                format!("'{}' is not a numeric EPSG code", self.epsg_code),
            ));
        }
        if self.tile_size == 0 {
            return Err(WmsError::invalid_config("tile_size", "must be > 0"));
        }
        if self.image_format.trim().is_empty() {
            return Err(WmsError::invalid_config("image_format", "must not be empty"));
        }
        Ok(())
    }
}
