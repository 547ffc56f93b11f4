// layers/ - Declarative layer descriptions for deck.gl
//
// Each config serializes to the props object of one deck.gl layer, in
// the form @deck.gl/json's JSONConverter accepts: `type` names the layer
// class and "@@=field" strings become per-datum accessors. No
// subclassing is needed on the JS side.

mod markers;
mod terrain;

pub use markers::*;
pub use terrain::*;

use log::debug;
use serde::Serialize;

use crate::config::MapConfig;
use crate::state::MapState;

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum LayerConfig {
    #[serde(rename = "TerrainLayer")]
    Terrain(TerrainLayerConfig),
    #[serde(rename = "ScatterplotLayer")]
    Markers(MarkerLayerConfig),
}

impl LayerConfig {
    pub fn id(&self) -> &str {
        match self {
            LayerConfig::Terrain(t) => &t.id,
            LayerConfig::Markers(m) => &m.id,
        }
    }
}

/// Layers for the current state, bottom to top. Terrain precedes markers.
pub fn build_layers(state: &MapState, config: &MapConfig) -> Vec<LayerConfig> {
    let layers: Vec<LayerConfig> = [
        terrain_layer(state, config).map(LayerConfig::Terrain),
        marker_layer(state, config).map(LayerConfig::Markers),
    ]
    .into_iter()
    .flatten()
    .collect();

    debug!(
        "rebuilt {} layers (3d={}, exaggeration={})",
        layers.len(),
        state.show_3d,
        state.exaggeration
    );
    layers
}
