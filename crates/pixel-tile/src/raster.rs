//! The raster capability and a materialized RGBA buffer.
//!
//! [`Raster`] is the seam between color sources and consumers: a tile
//! resolves through its palette, an [`RgbaImage`] stores colors directly,
//! and a [`ScaledRaster`](crate::ScaledRaster) computes them on demand from
//! any other raster. Consumers iterate `(x, y) -> Rgba` over
//! `0..width() x 0..height()`.

use crate::color::Rgba;
use crate::error::RasterError;

/// A read-only 2-D surface of colors.
pub trait Raster {
    /// Width in pixels.
    fn width(&self) -> usize;

    /// Height in pixels.
    fn height(&self) -> usize;

    /// Color at `(x, y)`.
    ///
    /// # Errors
    ///
    /// [`RasterError::OutOfBounds`] outside `0..width() x 0..height()`.
    /// Implementations may fail with other kinds when a stored value cannot
    /// be resolved; they never substitute a fallback color.
    fn color_at(&self, x: usize, y: usize) -> Result<Rgba, RasterError>;

    /// `(width, height)` in pixels.
    fn dimensions(&self) -> (usize, usize) {
        (self.width(), self.height())
    }

    /// Returns true if `(x, y)` lies inside the raster.
    fn contains(&self, x: usize, y: usize) -> bool {
        x < self.width() && y < self.height()
    }

    /// Resolve every pixel into an owned [`RgbaImage`].
    ///
    /// Fails on the first pixel that cannot be resolved; no partial image
    /// is returned.
    fn to_image(&self) -> Result<RgbaImage, RasterError> {
        let (width, height) = self.dimensions();
        let mut pixels = Vec::with_capacity(width.saturating_mul(height));
        for y in 0..height {
            for x in 0..width {
                pixels.push(self.color_at(x, y)?);
            }
        }
        Ok(RgbaImage {
            width,
            height,
            pixels,
        })
    }
}

impl<R: Raster + ?Sized> Raster for &R {
    fn width(&self) -> usize {
        (**self).width()
    }

    fn height(&self) -> usize {
        (**self).height()
    }

    fn color_at(&self, x: usize, y: usize) -> Result<Rgba, RasterError> {
        (**self).color_at(x, y)
    }
}

/// Fail with [`RasterError::OutOfBounds`] unless `(x, y)` is inside
/// a `width x height` grid.
#[inline]
pub(crate) fn check_bounds(
    x: usize,
    y: usize,
    width: usize,
    height: usize,
) -> Result<(), RasterError> {
    if x < width && y < height {
        Ok(())
    } else {
        Err(RasterError::OutOfBounds {
            x,
            y,
            width,
            height,
        })
    }
}

/// An image of already-resolved colors.
///
/// Stores one [`Rgba`] per pixel in row-major order. It is both the usual
/// destination of [`Raster::to_image`] and a valid scaler input, which is
/// how non-indexed images get re-scaled.
///
/// # Example
///
/// ```
/// use pixel_tile::{Raster, Rgba, RgbaImage};
///
/// let image = RgbaImage::new(2, vec![Rgba::BLACK, Rgba::WHITE]).unwrap();
/// assert_eq!(image.dimensions(), (2, 1));
/// assert_eq!(image.to_rgba_bytes(), vec![0, 0, 0, 255, 255, 255, 255, 255]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbaImage {
    width: usize,
    height: usize,
    pixels: Vec<Rgba>,
}

impl RgbaImage {
    /// Create an image from row-major pixels.
    ///
    /// # Errors
    ///
    /// [`RasterError::DimensionMismatch`] if `width` is zero or the pixel
    /// count is not a multiple of `width`.
    pub fn new(width: usize, pixels: Vec<Rgba>) -> Result<Self, RasterError> {
        if width == 0 || pixels.len() % width != 0 {
            return Err(RasterError::DimensionMismatch {
                len: pixels.len(),
                width,
            });
        }
        Ok(Self {
            width,
            height: pixels.len() / width,
            pixels,
        })
    }

    /// Create a `width x height` image of a single color.
    pub fn filled(width: usize, height: usize, color: Rgba) -> Self {
        Self {
            width,
            height,
            pixels: vec![color; width * height],
        }
    }

    /// Pixels in row-major order.
    #[inline]
    pub fn pixels(&self) -> &[Rgba] {
        &self.pixels
    }

    /// Consume the image, returning its row-major pixels.
    pub fn into_pixels(self) -> Vec<Rgba> {
        self.pixels
    }

    /// Flat `[R, G, B, A, R, G, B, A, ...]` bytes for encoders.
    ///
    /// The returned buffer has length `width * height * 4`.
    pub fn to_rgba_bytes(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|color| color.to_bytes()).collect()
    }
}

impl Raster for RgbaImage {
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
        Ok(self.pixels[y * self.width + x])
    }
}
