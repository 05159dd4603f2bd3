//! Palette types and the built-in palette catalog
//!
//! A [`Palette`] gives meaning to the index values stored in a tile. The
//! [`PaletteCatalog`] holds the named palettes shipped with the crate and
//! groups them by color count.

pub mod builtin;
mod catalog;
mod error;
mod palette;

pub use catalog::{PaletteCatalog, PaletteLookup};
pub use error::{PaletteError, ParseColorError};
pub use palette::Palette;
