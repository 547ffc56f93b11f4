// config.rs - Map configuration
//
// Every field has a default, so an empty JSON object (or empty string)
// yields the stock GSI map centered on Hanno.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::markers::MARKER_ALTITUDE;
use crate::state::ViewState;

pub const GSI_DEM_URL: &str = "https://cyberjapandata.gsi.go.jp/xyz/dem_png/{z}/{x}/{y}.png";
pub const GSI_STD_URL: &str = "https://cyberjapandata.gsi.go.jp/xyz/std/{z}/{x}/{y}.png";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MapConfig {
    /// Elevation tile template
    pub elevation_url: String,
    /// Surface texture tile template
    pub texture_url: String,
    pub min_zoom: u8,
    pub max_zoom: u8,
    pub initial_view: ViewState,
    /// Where the host fetches the marker CSV from
    pub markers_url: String,
    pub marker_altitude: f64,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            elevation_url: GSI_DEM_URL.into(),
            texture_url: GSI_STD_URL.into(),
            min_zoom: 0,
            max_zoom: 14,
            initial_view: ViewState::default(),
            markers_url: "./restart.csv".into(),
            marker_altitude: MARKER_ALTITUDE,
        }
    }
}

impl MapConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        if json.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(json)?)
    }
}

/// Substitute {z}/{x}/{y} in a tile URL template
pub fn expand_tile_url(template: &str, z: u8, x: u32, y: u32) -> String {
    template
        .replace("{z}", &z.to_string())
        .replace("{x}", &x.to_string())
        .replace("{y}", &y.to_string())
}
