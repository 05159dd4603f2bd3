//! 8-bit RGBA color value.

use std::fmt;
use std::str::FromStr;

use crate::palette::ParseColorError;

/// A color with four 8-bit channels.
///
/// Alpha is straight, not premultiplied. `0xFF` is fully opaque.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgba {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
    /// Alpha channel (0 = transparent, 255 = opaque)
    pub a: u8,
}

impl Rgba {
    /// Opaque black.
    pub const BLACK: Self = Self::new(0x00, 0x00, 0x00, 0xFF);
    /// Opaque white.
    pub const WHITE: Self = Self::new(0xFF, 0xFF, 0xFF, 0xFF);
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::new(0x00, 0x00, 0x00, 0x00);

    /// Create a color from its four channels.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color.
    #[inline]
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 0xFF)
    }

    /// Create a color from a byte array `[R, G, B, A]`.
    #[inline]
    pub const fn from_bytes(bytes: [u8; 4]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2], bytes[3])
    }

    /// Convert to a byte array `[R, G, B, A]`.
    #[inline]
    pub const fn to_bytes(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Returns true if the alpha channel is zero.
    #[inline]
    pub const fn is_transparent(self) -> bool {
        self.a == 0
    }

    /// Perceived brightness in `0..=255` (ITU-R BT.601 weights).
    ///
    /// Alpha is ignored.
    ///
    /// ```
    /// use pixel_tile::Rgba;
    /// assert_eq!(Rgba::BLACK.luma(), 0);
    /// assert_eq!(Rgba::WHITE.luma(), 255);
    /// ```
    #[inline]
    pub fn luma(self) -> u8 {
        let weighted = 299 * self.r as u32 + 587 * self.g as u32 + 114 * self.b as u32;
        (weighted / 1000) as u8
    }
}

impl From<[u8; 4]> for Rgba {
    fn from(bytes: [u8; 4]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl From<Rgba> for [u8; 4] {
    fn from(color: Rgba) -> Self {
        color.to_bytes()
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{:02X}{:02X}{:02X}{:02X}",
            self.r, self.g, self.b, self.a
        )
    }
}

impl FromStr for Rgba {
    type Err = ParseColorError;

    /// Parse a color from a hex string.
    ///
    /// Accepted forms, with or without a leading `#`:
    /// - `RGB` - shorthand, each digit doubled, opaque
    /// - `RRGGBB` - opaque
    /// - `RRGGBBAA` - explicit alpha
    ///
    /// Parsing is case-insensitive. Surrounding whitespace is trimmed.
    ///
    /// ```
    /// use pixel_tile::Rgba;
    ///
    /// let red: Rgba = "#F00".parse().unwrap();
    /// assert_eq!(red, Rgba::opaque(255, 0, 0));
    ///
    /// let ghost: Rgba = "FFFFFF80".parse().unwrap();
    /// assert_eq!(ghost.a, 0x80);
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);

        if !s.is_ascii() {
            return Err(ParseColorError::NotAscii);
        }

        if !matches!(s.len(), 3 | 6 | 8) {
            return Err(ParseColorError::InvalidLength(s.len()));
        }

        // Hex digits only, no sign
        let digits = s
            .chars()
            .map(|c| {
                c.to_digit(16)
                    .map(|d| d as u8)
                    .ok_or(ParseColorError::InvalidHex(c))
            })
            .collect::<Result<Vec<u8>, _>>()?;
        let channel = |i: usize| (digits[i] << 4) | digits[i + 1];

        match *digits.as_slice() {
            // 0xF * 17 == 0xFF
            [r, g, b] => Ok(Self::opaque(r * 17, g * 17, b * 17)),
            [_, _, _, _, _, _] => Ok(Self::opaque(channel(0), channel(2), channel(4))),
            _ => Ok(Self::new(channel(0), channel(2), channel(4), channel(6))),
        }
    }
}
