// state/ - Map UI state and its transitions
//
// State is a plain value. The host feeds discrete events to `apply`,
// gets the next state back, and refreshes whatever `Update` asks for.

use std::rc::Rc;

use log::{debug, error, info};
use serde::{Deserialize, Serialize};

use crate::decoder::MAX_EXAGGERATION;
use crate::markers::MarkerRecord;

/// Camera placement handed to the renderer
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ViewState {
    pub longitude: f64,
    pub latitude: f64,
    pub zoom: f64,
    pub pitch: f64,
    pub bearing: f64,
    pub max_pitch: f64,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            longitude: 139.404210,
            latitude: 35.939096,
            zoom: 11.0,
            pitch: 45.0,
            bearing: 0.0,
            max_pitch: 85.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum MapEvent {
    SetExaggeration(f64),
    /// Degrees, applied to the current camera
    SetPitch(i32),
    /// Camera moved by the renderer's own controller
    ViewChanged(ViewState),
    Toggle3d(bool),
    ToggleMarkers(bool),
    MarkersLoaded(Vec<MarkerRecord>),
    MarkersFailed(String),
}

/// What the host has to push after an event
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Update {
    pub layers: bool,
    pub view: bool,
}

impl Update {
    pub const NONE: Self = Self { layers: false, view: false };
    pub const LAYERS: Self = Self { layers: true, view: false };
    pub const VIEW: Self = Self { layers: false, view: true };
}

#[derive(Clone, Debug, PartialEq)]
pub struct MapState {
    pub show_3d: bool,
    pub show_markers: bool,
    pub exaggeration: f64,
    pub view: ViewState,
    pub markers: Rc<[MarkerRecord]>,
}

impl Default for MapState {
    fn default() -> Self {
        Self::new(ViewState::default())
    }
}

impl MapState {
    pub fn new(view: ViewState) -> Self {
        Self {
            show_3d: true,
            show_markers: true,
            exaggeration: 1.0,
            view,
            markers: Rc::from(Vec::new()),
        }
    }

    /// Next state for `event`. `self` is left untouched.
    pub fn apply(&self, event: MapEvent) -> (MapState, Update) {
        let mut next = self.clone();
        let update = match event {
            MapEvent::SetExaggeration(k) => {
                if !k.is_finite() {
                    debug!("ignoring non-finite exaggeration {k}");
                    return (next, Update::NONE);
                }
                next.exaggeration = k.clamp(0.0, MAX_EXAGGERATION);
                debug!("exaggeration -> {}", next.exaggeration);
                // Terrain is the only layer that depends on it
                if next.show_3d { Update::LAYERS } else { Update::NONE }
            }
            MapEvent::SetPitch(deg) => {
                next.view.pitch = (deg as f64).clamp(0.0, next.view.max_pitch);
                Update::VIEW
            }
            MapEvent::ViewChanged(view) => {
                // The renderer already shows this view
                next.view = view;
                Update::NONE
            }
            MapEvent::Toggle3d(on) => {
                next.show_3d = on;
                debug!("3d terrain: {on}");
                Update::LAYERS
            }
            MapEvent::ToggleMarkers(on) => {
                next.show_markers = on;
                debug!("markers: {on}");
                Update::LAYERS
            }
            MapEvent::MarkersLoaded(markers) => {
                info!("marker dataset ready: {} records", markers.len());
                next.markers = Rc::from(markers);
                Update::LAYERS
            }
            MapEvent::MarkersFailed(reason) => {
                error!("marker dataset failed to load: {reason}");
                next.markers = Rc::from(Vec::new());
                Update::NONE
            }
        };
        (next, update)
    }
}
