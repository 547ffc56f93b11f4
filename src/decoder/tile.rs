// tile.rs - Whole-tile decoding and summary statistics
//
// Input is a row-major RGBA byte buffer as produced by canvas
// getImageData or the image crate. Alpha is ignored.

use super::{reference_elevation, ElevationDecoder, EncodedPixel};
use crate::error::{Error, Result};

/// Which rule turns a pixel into meters
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Decoding {
    Linear(ElevationDecoder),
    Reference,
}

impl Decoding {
    /// Elevation for one pixel; NaN marks no-data
    #[inline]
    pub fn elevation(&self, p: EncodedPixel) -> f32 {
        match self {
            Decoding::Linear(d) => d.decode(p) as f32,
            Decoding::Reference => reference_elevation(p).map_or(f32::NAN, |h| h as f32),
        }
    }
}

/// Decode an RGBA buffer into one elevation per pixel
pub fn decode_tile(rgba: &[u8], decoding: Decoding) -> Result<Vec<f32>> {
    if rgba.len() % 4 != 0 {
        return Err(Error::TileLength(rgba.len()));
    }
    Ok(rgba
        .chunks_exact(4)
        .map(|px| decoding.elevation(EncodedPixel::new(px[0], px[1], px[2])))
        .collect())
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TileStats {
    pub min: f32,
    pub max: f32,
    pub mean: f32,
    pub no_data: usize,
}

impl TileStats {
    /// NaN samples count as no-data and are excluded from min/max/mean.
    /// A tile with no valid samples reports zeros.
    pub fn from_elevations<'a>(values: impl IntoIterator<Item = &'a f32>) -> Self {
        let (mut min, mut max, mut sum) = (f32::MAX, f32::MIN, 0.0f64);
        let (mut n, mut no_data) = (0usize, 0usize);

        for &v in values {
            if v.is_nan() {
                no_data += 1;
                continue;
            }
            min = min.min(v);
            max = max.max(v);
            sum += v as f64;
            n += 1;
        }

        if n == 0 {
            return Self { no_data, ..Self::default() };
        }
        Self { min, max, mean: (sum / n as f64) as f32, no_data }
    }
}
