//! Indexed pixel tile.
//!
//! A [`Tile`] stores one palette index per pixel and borrows the
//! [`Palette`] that turns those indices into colors. Index bounds are
//! checked when a pixel is resolved, not when the tile is built: a tile may
//! be swapped onto another palette or scaled before any color is looked
//! up, and the failure surfaces at the pixel that triggers it.

use crate::color::Rgba;
use crate::error::RasterError;
use crate::palette::{Palette, PaletteError};
use crate::raster::{check_bounds, Raster};

/// A grid of palette indices resolved through a shared palette.
///
/// # Example
///
/// ```
/// use pixel_tile::{PaletteCatalog, Raster, Rgba, Tile};
///
/// let catalog = PaletteCatalog::builtin();
/// let one_bit = catalog.by_name("1Bit").unwrap();
///
/// let tile = Tile::new(one_bit, 2, vec![0, 1, 1, 0]).unwrap();
/// assert_eq!(tile.dimensions(), (2, 2));
/// assert_eq!(tile.color_at(1, 0).unwrap(), Rgba::WHITE);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile<'p> {
    palette: &'p Palette,
    width: usize,
    height: usize,
    indices: Vec<u8>,
}

impl<'p> Tile<'p> {
    /// Create a tile from row-major index data.
    ///
    /// The height is `indices.len() / width`. Indices are not checked
    /// against the palette here; see [`Tile::validate`] for an explicit
    /// scan.
    ///
    /// # Errors
    ///
    /// [`RasterError::DimensionMismatch`] if `width` is zero or the data
    /// length is not a multiple of `width`.
    pub fn new(
        palette: &'p Palette,
        width: usize,
        indices: impl Into<Vec<u8>>,
    ) -> Result<Self, RasterError> {
        let indices = indices.into();
        if width == 0 || indices.len() % width != 0 {
            return Err(RasterError::DimensionMismatch {
                len: indices.len(),
                width,
            });
        }
        Ok(Self {
            palette,
            width,
            height: indices.len() / width,
            indices,
        })
    }

    /// The palette indices resolve through.
    #[inline]
    pub fn palette(&self) -> &'p Palette {
        self.palette
    }

    /// Row-major index data.
    #[inline]
    pub fn indices(&self) -> &[u8] {
        &self.indices
    }

    /// Raw palette index at `(x, y)`.
    pub fn index_at(&self, x: usize, y: usize) -> Result<u8, RasterError> {
        check_bounds(x, y, self.width, self.height)?;
        Ok(self.indices[y * self.width + x])
    }

    /// The same indices resolved through another palette.
    ///
    /// ```
    /// use pixel_tile::{PaletteCatalog, Raster, Tile};
    ///
    /// let catalog = PaletteCatalog::builtin();
    /// let gray = catalog.by_name("2BitGrayScale").unwrap();
    /// let en4 = catalog.by_name("EN4").unwrap();
    ///
    /// let tile = Tile::new(gray, 2, vec![0, 1, 2, 3]).unwrap();
    /// let swapped = tile.with_palette(en4);
    /// assert_eq!(swapped.color_at(1, 1).unwrap(), en4[3]);
    /// ```
    pub fn with_palette<'q>(&self, palette: &'q Palette) -> Tile<'q> {
        Tile {
            palette,
            width: self.width,
            height: self.height,
            indices: self.indices.clone(),
        }
    }

    /// Check every stored index against the palette.
    ///
    /// Returns the first out-of-range index in row-major order. Nothing in
    /// the crate calls this implicitly.
    pub fn validate(&self) -> Result<(), PaletteError> {
        let len = self.palette.len();
        match self.indices.iter().find(|&&index| index as usize >= len) {
            Some(&index) => Err(PaletteError::IndexOutOfRange {
                index: index as usize,
                len,
            }),
            None => Ok(()),
        }
    }
}

impl Raster for Tile<'_> {
    #[inline]
    fn width(&self) -> usize {
        self.width
    }

    #[inline]
    fn height(&self) -> usize {
        self.height
    }

    fn color_at(&self, x: usize, y: usize) -> Result<Rgba, RasterError> {
        let index = self.index_at(x, y)?;
        Ok(self.palette.color_at(index as usize)?)
    }
}
