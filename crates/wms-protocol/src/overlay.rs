//! Bookkeeping for map overlays the caller has switched on.
//!
//! The registry is owned by whoever drives the map view. This crate only
//! derives what an overlay needs ([`OverlaySpec`]); the handle type and how
//! it gets drawn belong to the caller.

use std::collections::HashMap;

use serde::Serialize;
use tracing::debug;

use wms_common::ServiceConfig;

use crate::getmap::{build_map_request, TileRequest};

/// Everything a tile overlay needs to fetch tiles for one layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OverlaySpec {
    pub layer: String,
    /// GetMap URL template for the layer
    pub url: String,
    pub use_mercator_projection: bool,
    pub wms_version: String,
    /// Always false: WMS layers draw on top of the base map
    pub can_replace_map_content: bool,
}

impl OverlaySpec {
    pub fn for_layer(layer: &str, config: &ServiceConfig) -> Self {
        let TileRequest {
            url,
            use_mercator_projection,
        } = build_map_request(layer, config);

        Self {
            layer: layer.to_string(),
            url,
            use_mercator_projection,
            wms_version: config.wms_version.clone(),
            can_replace_map_content: false,
        }
    }
}

/// Active overlays keyed by layer name.
#[derive(Debug, Clone)]
pub struct ActiveOverlayMap<H> {
    overlays: HashMap<String, H>,
}

impl<H> Default for ActiveOverlayMap<H> {
    fn default() -> Self {
        Self {
            overlays: HashMap::new(),
        }
    }
}

impl<H> ActiveOverlayMap<H> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Derive the overlay for `layer`, let the caller turn it into a handle,
    /// and register that handle. Returns the handle it displaced, if any.
    pub fn activate<F>(&mut self, layer: &str, config: &ServiceConfig, make_handle: F) -> Option<H>
    where
        F: FnOnce(&OverlaySpec) -> H,
    {
        let spec = OverlaySpec::for_layer(layer, config);
        let handle = make_handle(&spec);
        debug!(layer = %layer, url = %spec.url, "Activated overlay");
        self.insert(layer, handle)
    }

    /// Register a handle directly.
    pub fn insert(&mut self, layer: impl Into<String>, handle: H) -> Option<H> {
        self.overlays.insert(layer.into(), handle)
    }

    /// Remove and return the handle for `layer`.
    pub fn deactivate(&mut self, layer: &str) -> Option<H> {
        let removed = self.overlays.remove(layer);
        if removed.is_some() {
            debug!(layer = %layer, "Deactivated overlay");
        }
        removed
    }

    pub fn get(&self, layer: &str) -> Option<&H> {
        self.overlays.get(layer)
    }

    pub fn contains(&self, layer: &str) -> bool {
        self.overlays.contains_key(layer)
    }

    pub fn len(&self) -> usize {
        self.overlays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.overlays.is_empty()
    }

    /// Active layer names, sorted.
    pub fn layer_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.overlays.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &H)> {
        self.overlays.iter().map(|(k, v)| (k.as_str(), v))
    }
}
