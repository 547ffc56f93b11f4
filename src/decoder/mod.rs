// decoder/ - Elevation decoding for GSI dem_png tiles
//
// Two decodings live here:
//   - ElevationDecoder: the linear coefficients handed to the renderer,
//     which does the per-pixel arithmetic on the GPU
//   - reference_elevation: the tile provider's own 24-bit signed rule,
//     used offline to inspect tiles
//
// The renderer only ever sees the linear coefficients.

mod tile;

pub use tile::*;

use serde::{Deserialize, Serialize};

/// Meters per unit of the packed 24-bit value
pub const UNIT_METERS: f64 = 0.01;

/// Packed value reserved for "no data" (RGB 128,0,0)
pub const NO_DATA: u32 = 1 << 23;

/// Largest exaggeration magnitude for which a full-white pixel still
/// decodes to a finite height
pub const MAX_EXAGGERATION: f64 = f64::MAX / 2048.0;

/// One RGB sample from an elevation tile
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EncodedPixel {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl EncodedPixel {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// R, G and B packed big-endian into 24 bits
    #[inline]
    pub fn packed(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }
}

/// Linear decoder parameters in the renderer's wire shape
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElevationDecoder {
    pub r_scaler: f64,
    pub g_scaler: f64,
    pub b_scaler: f64,
    pub offset: f64,
}

impl ElevationDecoder {
    /// Coefficients at exaggeration 1.0
    pub const GSI: Self = Self {
        r_scaler: 6.5536,
        g_scaler: 0.0256,
        b_scaler: 0.0001,
        offset: 0.0,
    };

    /// GSI coefficients scaled by `k`. Offset stays 0.
    /// `k` is clamped to +/-MAX_EXAGGERATION so finite input stays finite.
    pub fn with_exaggeration(k: f64) -> Self {
        let k = k.clamp(-MAX_EXAGGERATION, MAX_EXAGGERATION);
        Self {
            r_scaler: Self::GSI.r_scaler * k,
            g_scaler: Self::GSI.g_scaler * k,
            b_scaler: Self::GSI.b_scaler * k,
            offset: 0.0,
        }
    }

    /// Same arithmetic the renderer runs per pixel
    #[inline]
    pub fn decode(&self, p: EncodedPixel) -> f64 {
        p.r as f64 * self.r_scaler
            + p.g as f64 * self.g_scaler
            + p.b as f64 * self.b_scaler
            + self.offset
    }
}

impl Default for ElevationDecoder {
    fn default() -> Self {
        Self::GSI
    }
}

/// Elevation in meters per the tile provider's encoding.
/// Returns None for the no-data sentinel.
///
/// Values above 2^23 are 24-bit two's complement (below sea level).
pub fn reference_elevation(p: EncodedPixel) -> Option<f64> {
    let x = p.packed();
    match x.cmp(&NO_DATA) {
        std::cmp::Ordering::Less => Some(x as f64 * UNIT_METERS),
        std::cmp::Ordering::Equal => None,
        std::cmp::Ordering::Greater => Some((x as i64 - (1 << 24)) as f64 * UNIT_METERS),
    }
}
