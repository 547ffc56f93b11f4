// terrain.rs - GSI terrain layer factory

use serde::Serialize;

use crate::config::MapConfig;
use crate::decoder::ElevationDecoder;
use crate::state::MapState;

pub const TERRAIN_LAYER_ID: &str = "gsi-terrain";

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Material {
    pub diffuse: f64,
    pub ambient: f64,
    pub shininess: f64,
}

impl Default for Material {
    fn default() -> Self {
        Self { diffuse: 0.8, ambient: 0.3, shininess: 32.0 }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TerrainLayerConfig {
    pub id: String,
    pub min_zoom: u8,
    pub max_zoom: u8,
    pub elevation_decoder: ElevationDecoder,
    pub elevation_data: String,
    pub texture: String,
    pub wireframe: bool,
    pub material: Material,
}

impl TerrainLayerConfig {
    /// GSI defaults with the decoder scaled by `exaggeration`
    pub fn new(config: &MapConfig, exaggeration: f64) -> Self {
        Self {
            id: TERRAIN_LAYER_ID.into(),
            min_zoom: config.min_zoom,
            max_zoom: config.max_zoom,
            elevation_decoder: ElevationDecoder::with_exaggeration(exaggeration),
            elevation_data: config.elevation_url.clone(),
            texture: config.texture_url.clone(),
            wireframe: false,
            material: Material::default(),
        }
    }
}

/// None while 3D terrain is switched off
pub fn terrain_layer(state: &MapState, config: &MapConfig) -> Option<TerrainLayerConfig> {
    state.show_3d.then(|| TerrainLayerConfig::new(config, state.exaggeration))
}
