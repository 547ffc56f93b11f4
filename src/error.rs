// error.rs - Crate error type
//
// Only the fallible edges live here: CSV/JSON input and tile buffers.
// Decoder math and layer building never fail.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("marker dataset: {0}")]
    Csv(#[from] csv::Error),

    #[error("json: {0}")]
    Json(#[from] serde_json::Error),

    /// RGBA buffer whose length is not a multiple of 4
    #[error("tile buffer length {0} is not a multiple of 4")]
    TileLength(usize),

    #[error("image: {0}")]
    Image(String),
}

pub type Result<T> = std::result::Result<T, Error>;
