//! Nearest-neighbor scaling of any raster.
//!
//! [`ScaledRaster`] is a lazy view: it stores the source and the factor and
//! computes each destination pixel on request. Every destination pixel
//! takes the color of exactly one source pixel, so hard pixel-art edges are
//! reproduced without blending. Downscaling uses the same rule and can drop
//! features thinner than `1 / factor` pixels.
//!
//! # Dimensions
//!
//! `dst = max(1, round(src * factor))` per axis. Rounding is
//! [`f64::round`], which rounds halfway cases away from zero: a 3 pixel
//! edge at factor 1.5 becomes 5 pixels.
//!
//! # Mapping
//!
//! Destination `(dx, dy)` reads source
//! `(min(floor(dx / factor), srcW - 1), min(floor(dy / factor), srcH - 1))`.
//! The clamp keeps rounded-up destination edges on the last source pixel.
//!
//! # Example
//!
//! ```
//! use pixel_tile::{scale, PaletteCatalog, Raster, Tile};
//!
//! let catalog = PaletteCatalog::builtin();
//! let tile = Tile::new(catalog.by_name("1Bit").unwrap(), 2, vec![0, 1]).unwrap();
//!
//! let scaled = scale(&tile, 2.0).unwrap();
//! assert_eq!(scaled.dimensions(), (4, 2));
//! assert_eq!(scaled.color_at(1, 1).unwrap(), tile.color_at(0, 0).unwrap());
//! assert_eq!(scaled.color_at(2, 0).unwrap(), tile.color_at(1, 0).unwrap());
//! ```

use crate::color::Rgba;
use crate::error::RasterError;
use crate::raster::{check_bounds, Raster};

/// A raster resampled by a constant factor with nearest-neighbor sampling.
#[derive(Debug, Clone)]
pub struct ScaledRaster<R> {
    source: R,
    factor: f64,
    width: usize,
    height: usize,
}

impl<R: Raster> ScaledRaster<R> {
    /// Wrap `source` in a view scaled by `factor`.
    ///
    /// No pixel is resolved here; errors from the source surface when the
    /// affected destination pixel is read.
    ///
    /// # Errors
    ///
    /// [`RasterError::InvalidScale`] if `factor` is zero, negative, NaN or
    /// infinite.
    pub fn new(source: R, factor: f64) -> Result<Self, RasterError> {
        if !(factor.is_finite() && factor > 0.0) {
            return Err(RasterError::InvalidScale(factor));
        }

        let width = scaled_len(source.width(), factor);
        let height = scaled_len(source.height(), factor);
        tracing::debug!(
            src_width = source.width(),
            src_height = source.height(),
            factor,
            width,
            height,
            "Scaling raster"
        );

        Ok(Self {
            source,
            factor,
            width,
            height,
        })
    }

    /// The scale factor.
    #[inline]
    pub fn factor(&self) -> f64 {
        self.factor
    }

    /// The wrapped source raster.
    #[inline]
    pub fn source(&self) -> &R {
        &self.source
    }

    /// Unwrap the source raster.
    pub fn into_source(self) -> R {
        self.source
    }

    /// Source coordinate sampled for destination `(dx, dy)`.
    ///
    /// Does not check that `(dx, dy)` is inside the destination.
    pub fn source_coords(&self, dx: usize, dy: usize) -> (usize, usize) {
        (
            source_index(dx, self.factor, self.source.width()),
            source_index(dy, self.factor, self.source.height()),
        )
    }
}

impl<R: Raster> Raster for ScaledRaster<R> {
    #[inline]
    fn width(&self) -> usize {
        self.width
    }

    #[inline]
    fn height(&self) -> usize {
        self.height
    }

    fn color_at(&self, x: usize, y: usize) -> Result<Rgba, RasterError> {
        check_bounds(x, y, self.width, self.height)?;
        let (sx, sy) = self.source_coords(x, y);
        self.source.color_at(sx, sy)
    }
}

/// Scale `source` by `factor`; shorthand for [`ScaledRaster::new`].
pub fn scale<R: Raster>(source: R, factor: f64) -> Result<ScaledRaster<R>, RasterError> {
    ScaledRaster::new(source, factor)
}

fn scaled_len(len: usize, factor: f64) -> usize {
    // Float-to-int `as` saturates, so absurd factors cannot wrap around.
    (len as f64 * factor).round().max(1.0) as usize
}

fn source_index(dst: usize, factor: f64, len: usize) -> usize {
    let index = (dst as f64 / factor).floor() as usize;
    index.min(len.saturating_sub(1))
}
