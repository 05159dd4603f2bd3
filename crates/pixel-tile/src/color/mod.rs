//! Color type shared by palettes and rasters.
//!
//! Every surface in this crate resolves to [`Rgba`]: four 8-bit channels,
//! straight (non-premultiplied) alpha.
//!
//! # Example
//!
//! ```
//! use pixel_tile::Rgba;
//!
//! let teal: Rgba = "#0BB5DB".parse().unwrap();
//! assert_eq!(teal.to_bytes(), [0x0B, 0xB5, 0xDB, 0xFF]);
//! ```

mod rgba;

pub use rgba::Rgba;
