//! Common types and utilities shared across the WMS client crates.

pub mod config;
pub mod crs;
pub mod error;
pub mod layer;

pub use config::ServiceConfig;
pub use crs::{uses_mercator_projection, ReferenceKey, WEB_MERCATOR_EPSG};
pub use error::{WmsError, WmsResult};
pub use layer::{Layer, LayerList};
