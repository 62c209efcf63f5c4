//! Spatial reference handling for GetMap requests.
//!
//! Only EPSG codes are modelled. The code is carried as the string the
//! service was configured with; nothing here converts between systems.

use serde::{Deserialize, Serialize};
use std::fmt;

/// WMS 1.1.1, the last version to use the `SRS` query key.
pub const WMS_VERSION_1_1_1: &str = "1.1.1";

/// WMS 1.3.0, which renamed the key to `CRS`.
pub const WMS_VERSION_1_3_0: &str = "1.3.0";

/// Versions accepted by [`crate::ServiceConfig::validate`].
pub const SUPPORTED_VERSIONS: [&str; 2] = [WMS_VERSION_1_1_1, WMS_VERSION_1_3_0];

/// The legacy Google Web Mercator code that switches overlays to mercator tiling.
pub const WEB_MERCATOR_EPSG: &str = "900913";

/// Query key carrying the spatial reference in a GetMap request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReferenceKey {
    /// `SRS=` (WMS 1.1.1)
    Srs,
    /// `CRS=` (WMS 1.3.0 and anything unrecognised)
    Crs,
}

impl ReferenceKey {
    /// Select the key for a WMS version string.
    ///
    /// Only the exact string `"1.1.1"` selects `SRS`; every other value,
    /// including unknown or malformed versions, falls through to `CRS`.
    pub fn for_version(version: &str) -> Self {
        if version == WMS_VERSION_1_1_1 {
            ReferenceKey::Srs
        } else {
            ReferenceKey::Crs
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ReferenceKey::Srs => "SRS",
            ReferenceKey::Crs => "CRS",
        }
    }
}

impl fmt::Display for ReferenceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether tiles for this EPSG code are laid out in spherical mercator.
///
/// Exact match on `"900913"`. `"3857"` is deliberately not treated as mercator.
pub fn uses_mercator_projection(epsg_code: &str) -> bool {
    epsg_code == WEB_MERCATOR_EPSG
}

/// Check that an EPSG code is a bare non-empty run of ASCII digits.
pub fn is_valid_epsg_code(epsg_code: &str) -> bool {
    !epsg_code.is_empty() && epsg_code.bytes().all(|b| b.is_ascii_digit())
}

/// Check that a version string is one this client knows how to talk to.
pub fn is_supported_version(version: &str) -> bool {
    SUPPORTED_VERSIONS.contains(&version)
}
