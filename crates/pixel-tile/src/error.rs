//! Error type shared by every raster in the crate.
//!
//! [`RasterError`] covers tile construction, coordinate access and scaling.
//! Palette resolution failures are wrapped so that `?` carries them through
//! tiles and scaled views unchanged.

use thiserror::Error;

use crate::palette::PaletteError;

/// Error returned by raster construction and pixel access.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RasterError {
    /// Pixel data cannot be split into rows of the requested width
    #[error("data length {len} is not a whole number of rows of width {width}")]
    DimensionMismatch {
        /// Number of pixels supplied
        len: usize,
        /// Requested row width
        width: usize,
    },

    /// Coordinate outside the raster
    #[error("coordinate ({x}, {y}) is outside the {width}x{height} raster")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },

    /// Scale factor is zero, negative or not finite
    #[error("scale factor must be positive and finite, got {0}")]
    InvalidScale(f64),

    /// Palette lookup failed while resolving a pixel
    #[error(transparent)]
    Palette(#[from] PaletteError),
}
