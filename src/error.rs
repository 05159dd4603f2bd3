use std::path::PathBuf;

use pixel_tile::{PaletteError, RasterError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PreviewError {
    #[error("Unknown tile: {0}")]
    UnknownTile(String),

    #[error("Unknown palette: {0}")]
    UnknownPalette(String),

    #[error("Preview too large: {width}x{height} exceeds {max} pixels")]
    TooLarge {
        width: usize,
        height: usize,
        max: usize,
    },

    #[error("Raster error: {0}")]
    Raster(#[from] RasterError),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Config parse error: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Invalid palette {name}: {source}")]
    Palette {
        name: String,
        #[source]
        source: PaletteError,
    },
}
