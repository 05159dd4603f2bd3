//! Error types for palette operations
//!
//! This module provides error types for color parsing, palette construction
//! and index resolution.

use thiserror::Error;

/// Error type for parsing hex color strings.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseColorError {
    /// Hex string has invalid length (must be 3, 6 or 8 characters after stripping '#')
    #[error("invalid hex color length {0} (expected 3, 6 or 8 characters)")]
    InvalidLength(usize),

    /// A character that is not a hexadecimal digit
    #[error("invalid hex character '{0}'")]
    InvalidHex(char),

    /// Input contains non-ASCII characters
    #[error("hex color must be ASCII")]
    NotAscii,
}

/// Error type for palette construction and lookup.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PaletteError {
    /// No colors provided in palette
    #[error("palette cannot be empty")]
    EmptyPalette,

    /// A stored index has no color in the palette
    #[error("palette index {index} out of range (palette has {len} colors)")]
    IndexOutOfRange {
        /// The index that was resolved
        index: usize,
        /// Number of colors in the palette
        len: usize,
    },

    /// Invalid hex color string
    #[error("invalid color: {0}")]
    ParseColor(#[from] ParseColorError),
}
