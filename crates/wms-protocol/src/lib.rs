//! OGC WMS client-side protocol handling.
//!
//! Supports:
//! - Layer discovery from WMS 1.1.1 and 1.3.0 GetCapabilities documents
//! - GetMap tile request URLs with version-dependent SRS/CRS keys
//! - A caller-owned registry of active map overlays

pub mod capabilities;
pub mod getmap;
pub mod overlay;

pub use capabilities::{
    parse_capabilities, CapabilitiesParser, LayerNameCollector, LayerScope, ParseError,
    ParserState,
};
pub use getmap::{build_map_request, capabilities_url, TileRequest, TileRequestBuilder};
pub use overlay::{ActiveOverlayMap, OverlaySpec};
