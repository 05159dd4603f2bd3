//! Immutable, shareable color palette.

use std::ops::Index;
use std::sync::Arc;

use super::error::PaletteError;
use crate::color::Rgba;

/// An ordered, immutable list of colors addressed by index.
///
/// Cloning a `Palette` is cheap: the colors live behind an [`Arc`], so the
/// catalog, its count grouping and any number of tiles share one allocation.
/// Equality compares colors, not identity; use [`Palette::ptr_eq`] for the
/// latter.
///
/// # Example
///
/// ```
/// use pixel_tile::{Palette, Rgba};
///
/// let palette = Palette::new(vec![Rgba::BLACK, Rgba::WHITE]).unwrap();
/// assert_eq!(palette.len(), 2);
/// assert_eq!(palette.color_at(1).unwrap(), Rgba::WHITE);
/// assert!(palette.color_at(2).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Palette {
    colors: Arc<[Rgba]>,
}

impl Palette {
    /// Create a palette from a list of colors.
    ///
    /// Duplicate colors are allowed; only an empty list is rejected
    /// ([`PaletteError::EmptyPalette`]).
    pub fn new(colors: impl Into<Arc<[Rgba]>>) -> Result<Self, PaletteError> {
        let colors = colors.into();
        if colors.is_empty() {
            return Err(PaletteError::EmptyPalette);
        }
        Ok(Self { colors })
    }

    /// Wrap a built-in table. Tables are non-empty constants.
    pub(crate) fn from_table(colors: &[Rgba]) -> Self {
        debug_assert!(!colors.is_empty(), "built-in palette table is empty");
        Self {
            colors: Arc::from(colors),
        }
    }

    /// Create a palette from hex color strings.
    ///
    /// Each string uses any format accepted by [`Rgba`]'s `FromStr`.
    ///
    /// ```
    /// use pixel_tile::{Palette, Rgba};
    ///
    /// let palette = Palette::from_hex(&["#000", "#FFFFFF", "FF000080"]).unwrap();
    /// assert_eq!(palette.color_at(2).unwrap(), Rgba::new(255, 0, 0, 0x80));
    /// ```
    pub fn from_hex<S: AsRef<str>>(colors: &[S]) -> Result<Self, PaletteError> {
        let colors = colors
            .iter()
            .map(|s| s.as_ref().parse::<Rgba>())
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(colors)
    }

    /// Returns the number of colors in the palette.
    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Whether the palette has no colors; construction rejects empty palettes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Resolve an index to its color.
    ///
    /// # Errors
    ///
    /// [`PaletteError::IndexOutOfRange`] when `index >= self.len()`.
    #[inline]
    pub fn color_at(&self, index: usize) -> Result<Rgba, PaletteError> {
        self.get(index).ok_or(PaletteError::IndexOutOfRange {
            index,
            len: self.len(),
        })
    }

    /// Resolve an index, returning `None` when it is out of range.
    #[inline]
    pub fn get(&self, index: usize) -> Option<Rgba> {
        self.colors.get(index).copied()
    }

    /// All colors in index order.
    #[inline]
    pub fn colors(&self) -> &[Rgba] {
        &self.colors
    }

    /// Iterate over the colors in index order.
    pub fn iter(&self) -> impl Iterator<Item = Rgba> + '_ {
        self.colors.iter().copied()
    }

    /// Returns true if both palettes share the same storage.
    #[inline]
    pub fn ptr_eq(&self, other: &Palette) -> bool {
        Arc::ptr_eq(&self.colors, &other.colors)
    }
}

impl Index<usize> for Palette {
    type Output = Rgba;

    /// Panics on out-of-range indices; use [`Palette::color_at`] for a
    /// checked lookup.
    fn index(&self, index: usize) -> &Rgba {
        &self.colors[index]
    }
}

impl<'a> IntoIterator for &'a Palette {
    type Item = Rgba;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, Rgba>>;

    fn into_iter(self) -> Self::IntoIter {
        self.colors.iter().copied()
    }
}
