use wasm_bindgen::prelude::*;

// ============================================================================
// GSI TERRAIN - deck.gl layer descriptions for a 3D GSI terrain map
// ============================================================================
//
// The page owns the DOM, the fetches and the Deck instance. This crate owns
// the state and turns it into layer props:
//
//   page event -> TerrainMap setter -> MapState::apply -> layers_json()
//                                                      -> deck.setProps

pub mod config;
pub mod decoder;
pub mod error;
pub mod layers;
pub mod markers;
pub mod state;

pub use config::{expand_tile_url, MapConfig};
pub use decoder::{decode_tile, reference_elevation, Decoding, ElevationDecoder, EncodedPixel, TileStats};
pub use error::Error;
pub use layers::{build_layers, LayerConfig};
pub use markers::{parse_markers, MarkerCategory, MarkerRecord};
pub use state::{MapEvent, MapState, Update, ViewState};

fn js_err(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn init_logging() {
    console_error_panic_hook::set_once();
    #[cfg(target_arch = "wasm32")]
    {
        // Err only means a logger is already installed
        let _ = console_log::init_with_level(log::Level::Debug);
    }
}

#[wasm_bindgen]
pub struct TerrainMap {
    config: MapConfig,
    state: MapState,
}

#[wasm_bindgen]
impl TerrainMap {
    /// `config_json` may be empty for the stock GSI map
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: &str) -> Result<TerrainMap, JsValue> {
        init_logging();
        let config = MapConfig::from_json(config_json).map_err(js_err)?;
        let state = MapState::new(config.initial_view);
        log::info!("terrain map ready at zoom {}", config.initial_view.zoom);
        Ok(Self { config, state })
    }

    // Setters return true when the host must push layers_json() again

    pub fn set_exaggeration(&mut self, k: f64) -> bool {
        self.dispatch(MapEvent::SetExaggeration(k)).layers
    }

    /// Returns true when the host must push view_state_json()
    pub fn set_pitch(&mut self, deg: i32) -> bool {
        self.dispatch(MapEvent::SetPitch(deg)).view
    }

    /// Feed the `viewState` from deck.gl's `onViewStateChange`, so later
    /// pitch changes start from where the user left the camera
    pub fn view_changed(&mut self, view_json: &str) -> Result<(), JsValue> {
        let view: ViewState = serde_json::from_str(view_json).map_err(js_err)?;
        self.dispatch(MapEvent::ViewChanged(view));
        Ok(())
    }

    pub fn set_show_3d(&mut self, on: bool) -> bool {
        self.dispatch(MapEvent::Toggle3d(on)).layers
    }

    pub fn set_show_markers(&mut self, on: bool) -> bool {
        self.dispatch(MapEvent::ToggleMarkers(on)).layers
    }

    /// Parse fetched CSV text. A parse failure is logged, leaves the map
    /// without markers, and returns false.
    pub fn load_markers_csv(&mut self, text: &str) -> bool {
        let event = match parse_markers(text) {
            Ok(markers) => MapEvent::MarkersLoaded(markers),
            Err(e) => MapEvent::MarkersFailed(e.to_string()),
        };
        self.dispatch(event).layers
    }

    /// Report a failed fetch
    pub fn markers_failed(&mut self, reason: &str) {
        self.dispatch(MapEvent::MarkersFailed(reason.to_owned()));
    }

    pub fn layers_json(&self) -> Result<String, JsValue> {
        let layers = build_layers(&self.state, &self.config);
        log::info!("layers: {}", layers.len());
        serde_json::to_string(&layers).map_err(js_err)
    }

    pub fn view_state_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.state.view).map_err(js_err)
    }

    pub fn markers_url(&self) -> String {
        self.config.markers_url.clone()
    }

    pub fn marker_count(&self) -> usize {
        self.state.markers.len()
    }

    /// Popup text for the i-th marker, if any
    pub fn marker_popup(&self, i: usize) -> Option<String> {
        self.state.markers.get(i).map(MarkerRecord::popup_text)
    }

    pub fn exaggeration_label(&self) -> String {
        format!("{:.1}", self.state.exaggeration)
    }

    pub fn zoom_label(zoom: f64) -> String {
        format!("Zoom: {zoom:.1}")
    }
}

impl TerrainMap {
    pub fn state(&self) -> &MapState {
        &self.state
    }

    fn dispatch(&mut self, event: MapEvent) -> Update {
        let (next, update) = self.state.apply(event);
        self.state = next;
        update
    }
}

/// Decoder props for exaggeration `k`, as JSON
#[wasm_bindgen]
pub fn elevation_decoder_json(k: f64) -> Result<String, JsValue> {
    serde_json::to_string(&ElevationDecoder::with_exaggeration(k)).map_err(js_err)
}

/// Decode RGBA tile bytes with the reference rule; NaN marks no-data
#[wasm_bindgen]
pub fn decode_elevation_tile(rgba: &[u8]) -> Result<js_sys::Float32Array, JsValue> {
    let heights = decode_tile(rgba, Decoding::Reference).map_err(js_err)?;
    Ok(js_sys::Float32Array::from(heights.as_slice()))
}
