// category.rs - Marker categories and their fill colors

/// Fill color for anything outside the table
pub const FALLBACK_COLOR: [u8; 3] = [128, 128, 128];

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum MarkerCategory {
    Water,
    Dragon,
    Benten,
    Other,
    /// Key not in the color table, kept verbatim
    Unknown(String),
}

impl MarkerCategory {
    /// Keys match exactly (case-sensitive), as they appear in the `type` column
    pub fn from_key(key: &str) -> Self {
        match key {
            "water" => Self::Water,
            "dragon" => Self::Dragon,
            "benten" => Self::Benten,
            "other" => Self::Other,
            _ => Self::Unknown(key.to_owned()),
        }
    }

    /// Inverse of `from_key`
    pub fn key(&self) -> &str {
        match self {
            Self::Water => "water",
            Self::Dragon => "dragon",
            Self::Benten => "benten",
            Self::Other => "other",
            Self::Unknown(k) => k,
        }
    }

    pub fn color(&self) -> [u8; 3] {
        match self {
            Self::Water => [0, 0, 255],
            Self::Dragon => [0, 128, 0],
            Self::Benten => [255, 140, 0],
            Self::Other => [0, 100, 0],
            Self::Unknown(_) => FALLBACK_COLOR,
        }
    }
}
