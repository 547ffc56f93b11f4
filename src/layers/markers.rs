// markers.rs - Scatterplot layer for point markers
//
// Position and color are evaluated here per record. The layer refers to
// them through @deck.gl/json accessor strings ("@@=field"), so the page
// hands the object to a JSONConverter instead of writing callbacks.

use serde::Serialize;

use crate::config::MapConfig;
use crate::markers::MarkerRecord;
use crate::state::MapState;

pub const MARKER_LAYER_ID: &str = "monuments";

/// Per-datum field accessors
pub const POSITION_ACCESSOR: &str = "@@=position";
pub const FILL_COLOR_ACCESSOR: &str = "@@=fillColor";

/// One marker as the renderer sees it. The record fields ride along so
/// a picked object still describes its marker.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkerDatum {
    pub position: [f64; 3],
    pub fill_color: [u8; 3],
    /// Text for the click popup
    pub popup: String,
    pub lat: f64,
    pub lon: f64,
    /// Category key as read from the dataset
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl MarkerDatum {
    pub fn new(record: &MarkerRecord, altitude: f64) -> Self {
        Self {
            position: record.position(altitude),
            fill_color: record.color(),
            popup: record.popup_text(),
            lat: record.latitude,
            lon: record.longitude,
            kind: record.category.key().to_owned(),
            name: record.name.clone(),
            year: record.year.clone(),
            address: record.address.clone(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkerLayerConfig {
    pub id: String,
    pub data: Vec<MarkerDatum>,
    pub pickable: bool,
    pub opacity: f64,
    pub stroked: bool,
    pub filled: bool,
    pub radius_scale: f64,
    pub radius_min_pixels: f64,
    pub radius_max_pixels: f64,
    pub line_width_min_pixels: f64,
    pub billboard: bool,
    pub get_position: &'static str,
    pub get_fill_color: &'static str,
    /// Constant radius in meters
    pub get_radius: f64,
    pub get_line_color: [u8; 3],
}

impl MarkerLayerConfig {
    pub fn new(records: &[MarkerRecord], altitude: f64) -> Self {
        Self {
            id: MARKER_LAYER_ID.into(),
            data: records.iter().map(|r| MarkerDatum::new(r, altitude)).collect(),
            pickable: true,
            opacity: 0.9,
            stroked: true,
            filled: true,
            radius_scale: 6.0,
            radius_min_pixels: 8.0,
            radius_max_pixels: 100.0,
            line_width_min_pixels: 2.0,
            billboard: true,
            get_position: POSITION_ACCESSOR,
            get_fill_color: FILL_COLOR_ACCESSOR,
            get_radius: 100.0,
            get_line_color: [0, 0, 0],
        }
    }
}

/// None when markers are hidden or there are none to show
pub fn marker_layer(state: &MapState, config: &MapConfig) -> Option<MarkerLayerConfig> {
    if !state.show_markers || state.markers.is_empty() {
        return None;
    }
    Some(MarkerLayerConfig::new(&state.markers, config.marker_altitude))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markers::{parse_markers, FALLBACK_COLOR};
    use crate::state::MapEvent;

    fn state(csv: &str) -> MapState {
        MapState::default()
            .apply(MapEvent::MarkersLoaded(parse_markers(csv).unwrap()))
            .0
    }

    #[test]
    fn per_record_accessors() {
        let s = state("lat,lon,type,name\n35.9,139.4,water,A\n35.8,139.3,zzz,B\n");
        let layer = marker_layer(&s, &MapConfig::default()).unwrap();
        assert_eq!(layer.data.len(), 2);
        assert_eq!(layer.data[0].position, [139.4, 35.9, 500.0]);
        assert_eq!(layer.data[0].fill_color, [0, 0, 255]);
        assert_eq!(layer.data[1].fill_color, FALLBACK_COLOR);
        assert!(layer.data[1].popup.starts_with("B\n"));
    }

    #[test]
    fn all_rows_invalid_means_no_layer() {
        let s = state("lat,lon\n,139.0\n35.0,\n");
        assert!(s.show_markers);
        assert!(marker_layer(&s, &MapConfig::default()).is_none());
    }

    #[test]
    fn hidden_means_no_layer() {
        let s = state("lat,lon\n35.0,139.0\n").apply(MapEvent::ToggleMarkers(false)).0;
        assert!(marker_layer(&s, &MapConfig::default()).is_none());
    }

    #[test]
    fn wire_shape() {
        let layer = MarkerLayerConfig::new(&[], 500.0);
        let json = serde_json::to_value(&layer).unwrap();
        assert_eq!(json["radiusMinPixels"], 8.0);
        assert_eq!(json["lineWidthMinPixels"], 2.0);
        assert_eq!(json["getLineColor"], serde_json::json!([0, 0, 0]));
        assert_eq!(json["getRadius"], 100.0);
        assert_eq!(json["getPosition"], "@@=position");
        assert_eq!(json["getFillColor"], "@@=fillColor");
    }

    #[test]
    fn only_deck_prop_names() {
        let layer = MarkerLayerConfig::new(&[], 500.0);
        let json = serde_json::to_value(&layer).unwrap();
        let mut keys: Vec<&str> = json.as_object().unwrap().keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            [
                "billboard", "data", "filled", "getFillColor", "getLineColor", "getPosition",
                "getRadius", "id", "lineWidthMinPixels", "opacity", "pickable",
                "radiusMaxPixels", "radiusMinPixels", "radiusScale", "stroked",
            ]
        );
    }

    #[test]
    fn accessors_name_datum_fields() {
        let s = state("lat,lon,type,name,year\n35.9,139.4,benten,C,1700\n");
        let layer = marker_layer(&s, &MapConfig::default()).unwrap();
        let json = serde_json::to_value(&layer).unwrap();
        let datum = &json["data"][0];
        for accessor in [POSITION_ACCESSOR, FILL_COLOR_ACCESSOR] {
            let field = accessor.trim_start_matches("@@=");
            assert!(!datum[field].is_null(), "datum lacks {field}");
        }
        assert_eq!(datum["fillColor"], serde_json::json!([255, 140, 0]));
    }

    #[test]
    fn datum_carries_record() {
        let s = state("lat,lon,type,name,year\n35.9,139.4,benten,C,1700\n");
        let layer = marker_layer(&s, &MapConfig::default()).unwrap();
        let json = serde_json::to_value(&layer.data[0]).unwrap();
        assert_eq!(json["lat"], 35.9);
        assert_eq!(json["lon"], 139.4);
        assert_eq!(json["type"], "benten");
        assert_eq!(json["name"], "C");
        assert_eq!(json["year"], "1700");
        assert!(json.get("address").is_none());
    }
}
