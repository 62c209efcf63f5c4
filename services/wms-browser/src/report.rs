//! Output formatting for layers, tile requests and overlays.

use clap::ValueEnum;
use comfy_table::{modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, Table};

use wms_common::LayerList;
use wms_protocol::{ActiveOverlayMap, OverlaySpec, TileRequest};

/// How results are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

/// Formats browser results for output.
pub struct Report;

impl Report {
    /// Format a layer list as a console table.
    pub fn layers_table(layers: &LayerList) -> String {
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .apply_modifier(UTF8_ROUND_CORNERS)
            .set_header(vec!["#", "Layer"]);

        for (i, layer) in layers.iter().enumerate() {
            table.add_row(vec![i.to_string(), layer.name.clone()]);
        }

        table.to_string()
    }

    pub fn layers_json(layers: &LayerList) -> serde_json::Result<String> {
        serde_json::to_string_pretty(layers)
    }

    /// Format a tile request as plain text: the URL, then the projection mode.
    pub fn tile_request_text(request: &TileRequest) -> String {
        let projection = if request.use_mercator_projection {
            "mercator"
        } else {
            "geographic"
        };
        format!("{}\nprojection: {}", request.url, projection)
    }

    pub fn tile_request_json(request: &TileRequest) -> serde_json::Result<String> {
        serde_json::to_string_pretty(request)
    }

    /// Format active overlays as a console table, sorted by layer name.
    pub fn overlays_table(active: &ActiveOverlayMap<OverlaySpec>) -> String {
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .apply_modifier(UTF8_ROUND_CORNERS)
            .set_header(vec!["Layer", "Mercator", "URL"]);

        for name in active.layer_names() {
            if let Some(spec) = active.get(name) {
                table.add_row(vec![
                    spec.layer.clone(),
                    spec.use_mercator_projection.to_string(),
                    spec.url.clone(),
                ]);
            }
        }

        table.to_string()
    }

    pub fn overlays_json(active: &ActiveOverlayMap<OverlaySpec>) -> serde_json::Result<String> {
        let specs: Vec<&OverlaySpec> = active
            .layer_names()
            .into_iter()
            .filter_map(|name| active.get(name))
            .collect();
        serde_json::to_string_pretty(&specs)
    }
}
