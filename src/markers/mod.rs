// markers/ - Point marker records
//
// Records come from a CSV file with a header row. Only lat/lon are
// required; everything else is free text shown on click.

mod category;

pub use category::*;

use log::{debug, info};
use serde::Deserialize;

use crate::error::Result;

/// Height markers float at, in meters
pub const MARKER_ALTITUDE: f64 = 500.0;

#[derive(Clone, Debug, PartialEq)]
pub struct MarkerRecord {
    pub latitude: f64,
    pub longitude: f64,
    pub category: MarkerCategory,
    pub name: Option<String>,
    pub year: Option<String>,
    pub address: Option<String>,
}

impl MarkerRecord {
    /// (longitude, latitude, altitude) in renderer order
    pub fn position(&self, altitude: f64) -> [f64; 3] {
        [self.longitude, self.latitude, altitude]
    }

    pub fn color(&self) -> [u8; 3] {
        self.category.color()
    }

    /// Text shown when the marker is clicked. Missing fields print empty.
    pub fn popup_text(&self) -> String {
        let field = |f: &Option<String>| f.as_deref().unwrap_or("").to_owned();
        format!(
            "{}\nYear: {}\nAddress: {}",
            field(&self.name),
            field(&self.year),
            field(&self.address)
        )
    }
}

// One CSV row before validation
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawRow {
    lat: Option<String>,
    lon: Option<String>,
    #[serde(rename = "type")]
    kind: Option<String>,
    name: Option<String>,
    year: Option<String>,
    address: Option<String>,
}

impl RawRow {
    fn into_record(self) -> Option<MarkerRecord> {
        let latitude = parse_coord(self.lat.as_deref())?;
        let longitude = parse_coord(self.lon.as_deref())?;
        Some(MarkerRecord {
            latitude,
            longitude,
            category: MarkerCategory::from_key(self.kind.as_deref().unwrap_or("")),
            name: non_empty(self.name),
            year: non_empty(self.year),
            address: non_empty(self.address),
        })
    }
}

fn parse_coord(s: Option<&str>) -> Option<f64> {
    let v: f64 = s?.trim().parse().ok()?;
    v.is_finite().then_some(v)
}

fn non_empty(s: Option<String>) -> Option<String> {
    s.filter(|v| !v.is_empty())
}

/// Parse the marker dataset. Rows without a usable lat/lon are dropped;
/// a malformed CSV stream is an error.
pub fn parse_markers(text: &str) -> Result<Vec<MarkerRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());

    let mut markers = Vec::new();
    for (i, row) in reader.deserialize::<RawRow>().enumerate() {
        match row?.into_record() {
            Some(m) => markers.push(m),
            None => debug!("marker row {} dropped: missing lat/lon", i + 1),
        }
    }

    info!("loaded {} markers", markers.len());
    Ok(markers)
}
