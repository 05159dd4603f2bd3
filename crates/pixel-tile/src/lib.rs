//! pixel-tile: indexed pixel-art tiles and nearest-neighbor scaling
//!
//! This library turns grids of palette indices into truecolor pixels and
//! resamples any color surface by an arbitrary factor while keeping hard
//! pixel edges.
//!
//! # Quick Start
//!
//! ```
//! use pixel_tile::{scale, PaletteCatalog, Raster, Tile};
//!
//! let catalog = PaletteCatalog::builtin();
//! let palette = catalog.by_name("1Bit").unwrap();
//!
//! let tile = Tile::new(palette, 4, vec![
//!     1, 1, 1, 1,
//!     1, 0, 0, 1,
//!     1, 1, 1, 1,
//! ]).unwrap();
//!
//! let preview = scale(&tile, 2.5).unwrap();
//! assert_eq!(preview.dimensions(), (10, 8));
//!
//! let image = preview.to_image().unwrap();
//! assert_eq!(image.to_rgba_bytes().len(), 10 * 8 * 4);
//! ```
//!
//! # Building Blocks
//!
//! - [`Rgba`]: 8-bit straight-alpha color
//! - [`Palette`]: immutable, cheaply shared list of colors
//! - [`PaletteCatalog`]: the built-in named palettes, grouped by color count
//! - [`Raster`]: anything with `width`, `height` and `color_at`
//! - [`Tile`]: palette indices resolved through a borrowed palette
//! - [`RgbaImage`]: a materialized raster of resolved colors
//! - [`ScaledRaster`]: a lazy nearest-neighbor view of another raster
//!
//! # Failure Policy
//!
//! Malformed input never renders as plausible but wrong pixels. Tile
//! construction rejects data that is not a whole number of rows; palette
//! indices are checked when a pixel is resolved, and the error travels
//! unchanged through any scaled view built on top of the tile. A tile may
//! therefore hold indices its palette cannot resolve; [`Tile::validate`]
//! performs the full scan when a caller wants it up front.
//!
//! # Concurrency
//!
//! Every type is immutable after construction and `Send + Sync`. Any
//! number of threads may read the same palette, tile or scaled view.

pub mod color;
pub mod error;
pub mod palette;
pub mod raster;
pub mod scale;
pub mod tile;

#[cfg(test)]
mod domain_tests;

pub use color::Rgba;
pub use error::RasterError;
pub use palette::{Palette, PaletteCatalog, PaletteError, PaletteLookup, ParseColorError};
pub use raster::{Raster, RgbaImage};
pub use scale::{scale, ScaledRaster};
pub use tile::Tile;
