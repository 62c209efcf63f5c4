//! Configuration loading for the browser.
//!
//! Precedence, lowest first: built-in defaults, the YAML file, environment
//! variables, command-line flags. The merged result is validated once.

use std::path::Path;

use clap::Args;
use tracing::debug;

use wms_common::{ServiceConfig, WmsResult};

/// Per-field overrides, settable by flag or environment variable.
#[derive(Debug, Clone, Default, Args)]
pub struct ConfigOverrides {
    /// WMS endpoint URL, without query string
    #[arg(long, env = "WMS_BASE_URL")]
    pub base_url: Option<String>,

    /// WMS version (1.1.1 or 1.3.0)
    #[arg(long = "wms-version", env = "WMS_VERSION")]
    pub wms_version: Option<String>,

    /// EPSG code of the map projection (e.g. 4326, 900913)
    #[arg(long = "epsg", env = "WMS_EPSG")]
    pub epsg_code: Option<String>,

    /// Tile edge length in pixels
    #[arg(long, env = "WMS_TILE_SIZE")]
    pub tile_size: Option<u32>,

    /// Image MIME type (e.g. image/png)
    #[arg(long = "format", env = "WMS_FORMAT")]
    pub image_format: Option<String>,

    /// Request transparent tiles
    #[arg(long, env = "WMS_TRANSPARENT")]
    pub transparent: Option<bool>,
}

impl ConfigOverrides {
    /// Apply every override that is set.
    pub fn apply(self, config: &mut ServiceConfig) {
        if let Some(base_url) = self.base_url {
            config.base_url = base_url;
        }
        if let Some(wms_version) = self.wms_version {
            config.wms_version = wms_version;
        }
        if let Some(epsg_code) = self.epsg_code {
            config.epsg_code = epsg_code;
        }
        if let Some(tile_size) = self.tile_size {
            config.tile_size = tile_size;
        }
        if let Some(image_format) = self.image_format {
            config.image_format = image_format;
        }
        if let Some(transparent) = self.transparent {
            config.transparent = transparent;
        }
    }
}

/// Build the effective service configuration.
pub fn load_config(path: Option<&Path>, overrides: ConfigOverrides) -> WmsResult<ServiceConfig> {
    let mut config = match path {
        Some(path) => {
            debug!(path = %path.display(), "Loading service configuration");
            ServiceConfig::from_file(path)?
        }
        None => ServiceConfig::default(),
    };

    overrides.apply(&mut config);
    config.validate()?;

    debug!(
        base_url = %config.base_url,
        wms_version = %config.wms_version,
        epsg = %config.epsg_code,
        "Service configuration ready"
    );
    Ok(config)
}
