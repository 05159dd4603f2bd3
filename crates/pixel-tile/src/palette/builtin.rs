//! Built-in palette tables.
//!
//! Colors are listed in their canonical order; a tile index addresses
//! the color at that position.

use crate::color::Rgba;

const fn c(r: u8, g: u8, b: u8) -> Rgba {
    Rgba::opaque(r, g, b)
}

/// Black and white.
pub const ONE_BIT: &[Rgba] = &[
    c(0x00, 0x00, 0x00),
    c(0xFF, 0xFF, 0xFF),
];

/// Four evenly spaced greys, as on the original handheld consoles.
pub const TWO_BIT_GRAY_SCALE: &[Rgba] = &[
    c(0x00, 0x00, 0x00),
    c(0x67, 0x67, 0x67),
    c(0xB6, 0xB6, 0xB6),
    c(0xFF, 0xFF, 0xFF),
];

/// One bit per RGB channel.
pub const THREE_BIT: &[Rgba] = &[
    c(0x00, 0x00, 0x00),
    c(0xFF, 0x00, 0x00),
    c(0x00, 0xFF, 0x00),
    c(0x00, 0x00, 0xFF),
    c(0x00, 0xFF, 0xFF),
    c(0xFF, 0x00, 0xFF),
    c(0xFF, 0xFF, 0x00),
    c(0xFF, 0xFF, 0xFF),
];

/// ARQ4 by Endesga.
pub const ARQ4: &[Rgba] = &[
    c(0xFF, 0xFF, 0xFF),
    c(0x67, 0x72, 0xA9),
    c(0x3A, 0x32, 0x77),
    c(0x00, 0x00, 0x00),
];

/// All 16 colors of the IBM Color Graphics Adapter.
pub const CGA: &[Rgba] = &[
    c(0x00, 0x00, 0x00),
    c(0x55, 0x55, 0x55),
    c(0xAA, 0xAA, 0xAA),
    c(0xFF, 0xFF, 0xFF),
    c(0x00, 0x00, 0xAA),
    c(0x55, 0x55, 0xFF),
    c(0x00, 0xAA, 0x00),
    c(0x55, 0xFF, 0x55),
    c(0x00, 0xAA, 0xAA),
    c(0x55, 0xFF, 0xFF),
    c(0xAA, 0x00, 0x00),
    c(0xFF, 0x55, 0x55),
    c(0xAA, 0x00, 0xAA),
    c(0xFF, 0x55, 0xFF),
    c(0xAA, 0x55, 0x00),
    c(0xFF, 0xFF, 0x55),
];

/// Endesga 8.
pub const EDG8: &[Rgba] = &[
    c(0xFD, 0xFD, 0xF8),
    c(0xD3, 0x27, 0x34),
    c(0xDA, 0x7D, 0x22),
    c(0xE6, 0xDA, 0x29),
    c(0x28, 0xC6, 0x41),
    c(0x2D, 0x93, 0xDD),
    c(0x7B, 0x53, 0xAD),
    c(0x1B, 0x1C, 0x33),
];

/// Endesga 16.
pub const EDG16: &[Rgba] = &[
    c(0xE4, 0xA6, 0x72),
    c(0xB8, 0x6F, 0x50),
    c(0x74, 0x3F, 0x39),
    c(0x3F, 0x28, 0x32),
    c(0x9E, 0x28, 0x35),
    c(0xE5, 0x3B, 0x44),
    c(0xFB, 0x92, 0x2B),
    c(0xFF, 0xE7, 0x62),
    c(0x63, 0xC6, 0x4D),
    c(0x32, 0x73, 0x45),
    c(0x19, 0x3D, 0x3F),
    c(0x4F, 0x67, 0x81),
    c(0xAF, 0xBF, 0xD2),
    c(0xFF, 0xFF, 0xFF),
    c(0x2C, 0xE8, 0xF4),
    c(0x04, 0x84, 0xD1),
];

/// Endesga 32.
pub const EDG32: &[Rgba] = &[
    c(0xBE, 0x4A, 0x2F),
    c(0xD7, 0x76, 0x43),
    c(0xEA, 0xD4, 0xAA),
    c(0xE4, 0xA6, 0x72),
    c(0xB8, 0x6F, 0x50),
    c(0x73, 0x3E, 0x39),
    c(0x3E, 0x27, 0x31),
    c(0xA2, 0x26, 0x33),
    c(0xE4, 0x3B, 0x44),
    c(0xF7, 0x76, 0x22),
    c(0xFE, 0xAE, 0x34),
    c(0xFE, 0xE7, 0x61),
    c(0x63, 0xC7, 0x4D),
    c(0x3E, 0x89, 0x48),
    c(0x26, 0x5C, 0x42),
    c(0x19, 0x3C, 0x3E),
    c(0x12, 0x4E, 0x89),
    c(0x00, 0x99, 0xDB),
    c(0x2C, 0xE8, 0xF5),
    c(0xFF, 0xFF, 0xFF),
    c(0xC0, 0xCB, 0xDC),
    c(0x8B, 0x9B, 0xB4),
    c(0x5A, 0x69, 0x88),
    c(0x3A, 0x44, 0x66),
    c(0x26, 0x2B, 0x44),
    c(0x18, 0x14, 0x25),
    c(0xFF, 0x00, 0x44),
    c(0x68, 0x38, 0x6C),
    c(0xB5, 0x50, 0x88),
    c(0xF6, 0x75, 0x7A),
    c(0xE8, 0xB7, 0x96),
    c(0xC2, 0x85, 0x69),
];

/// Endesga 36.
pub const EDG36: &[Rgba] = &[
    c(0xDB, 0xE0, 0xE7),
    c(0xA3, 0xAC, 0xBE),
    c(0x67, 0x70, 0x8B),
    c(0x4E, 0x53, 0x71),
    c(0x39, 0x3A, 0x56),
    c(0x26, 0x24, 0x3A),
    c(0x14, 0x10, 0x20),
    c(0x7B, 0xCF, 0x5C),
    c(0x50, 0x9B, 0x4B),
    c(0x2E, 0x6A, 0x42),
    c(0x1A, 0x45, 0x3B),
    c(0x0F, 0x27, 0x38),
    c(0x0D, 0x2F, 0x6D),
    c(0x0F, 0x4D, 0xA3),
    c(0x0E, 0x82, 0xCE),
    c(0x13, 0xB2, 0xF2),
    c(0x41, 0xF3, 0xFC),
    c(0xF0, 0xD2, 0xAF),
    c(0xE5, 0xAE, 0x78),
    c(0xC5, 0x81, 0x58),
    c(0x94, 0x55, 0x42),
    c(0x62, 0x35, 0x30),
    c(0x46, 0x21, 0x1F),
    c(0x97, 0x43, 0x2A),
    c(0xE5, 0x70, 0x28),
    c(0xF7, 0xAC, 0x37),
    c(0xFB, 0xDF, 0x6B),
    c(0xFE, 0x97, 0x9B),
    c(0xED, 0x52, 0x59),
    c(0xC4, 0x2C, 0x36),
    c(0x78, 0x1F, 0x2C),
    c(0x35, 0x14, 0x28),
    c(0x4D, 0x23, 0x52),
    c(0x7F, 0x3B, 0x86),
    c(0xB4, 0x5E, 0xB3),
    c(0xE3, 0x8D, 0xD6),
];

/// Endesga 64.
pub const EDG64: &[Rgba] = &[
    c(0xFF, 0x00, 0x40),
    c(0x13, 0x13, 0x13),
    c(0x1B, 0x1B, 0x1B),
    c(0x27, 0x27, 0x27),
    c(0x3D, 0x3D, 0x3D),
    c(0x5D, 0x5D, 0x5D),
    c(0x85, 0x85, 0x85),
    c(0xB4, 0xB4, 0xB4),
    c(0xFF, 0xFF, 0xFF),
    c(0xC7, 0xCF, 0xDD),
    c(0x92, 0xA1, 0xB9),
    c(0x65, 0x73, 0x92),
    c(0x42, 0x4C, 0x6E),
    c(0x2A, 0x2F, 0x4E),
    c(0x1A, 0x19, 0x32),
    c(0x0E, 0x07, 0x1B),
    c(0x1C, 0x12, 0x1C),
    c(0x39, 0x1F, 0x21),
    c(0x5D, 0x2C, 0x28),
    c(0x8A, 0x48, 0x36),
    c(0xBF, 0x6F, 0x4A),
    c(0xE6, 0x9C, 0x69),
    c(0xF6, 0xCA, 0x9F),
    c(0xF9, 0xE6, 0xCF),
    c(0xED, 0xAB, 0x50),
    c(0xE0, 0x74, 0x38),
    c(0xC6, 0x45, 0x24),
    c(0x8E, 0x25, 0x1D),
    c(0xFF, 0x50, 0x00),
    c(0xED, 0x76, 0x14),
    c(0xFF, 0xA2, 0x14),
    c(0xFF, 0xC8, 0x25),
    c(0xFF, 0xEB, 0x57),
    c(0xD3, 0xFC, 0x7E),
    c(0x99, 0xE6, 0x5F),
    c(0x5A, 0xC5, 0x4F),
    c(0x33, 0x98, 0x4B),
    c(0x1E, 0x6F, 0x50),
    c(0x13, 0x4C, 0x4C),
    c(0x0C, 0x2E, 0x44),
    c(0x00, 0x39, 0x6D),
    c(0x00, 0x69, 0xAA),
    c(0x00, 0x98, 0xDC),
    c(0x00, 0xCD, 0xF9),
    c(0x0C, 0xF1, 0xFF),
    c(0x94, 0xFD, 0xFF),
    c(0xFD, 0xD2, 0xED),
    c(0xF3, 0x89, 0xF5),
    c(0xDB, 0x3F, 0xFD),
    c(0x7A, 0x09, 0xFA),
    c(0x30, 0x03, 0xD9),
    c(0x0C, 0x02, 0x93),
    c(0x03, 0x19, 0x3F),
    c(0x3B, 0x14, 0x43),
    c(0x62, 0x24, 0x61),
    c(0x93, 0x38, 0x8F),
    c(0xCA, 0x52, 0xC9),
    c(0xC8, 0x50, 0x86),
    c(0xF6, 0x81, 0x87),
    c(0xF5, 0x55, 0x5D),
    c(0xEA, 0x32, 0x3C),
    c(0xC4, 0x24, 0x30),
    c(0x89, 0x1E, 0x2B),
    c(0x57, 0x1C, 0x27),
];

/// EN4 by Endesga.
pub const EN4: &[Rgba] = &[
    c(0xFB, 0xF7, 0xF3),
    c(0xE5, 0xB0, 0x83),
    c(0x42, 0x6E, 0x5D),
    c(0x20, 0x28, 0x3D),
];

/// Ink by AprilSundae.
pub const INK: &[Rgba] = &[
    c(0x1F, 0x1F, 0x29),
    c(0x41, 0x3A, 0x42),
    c(0x59, 0x60, 0x70),
    c(0x96, 0xA2, 0xB3),
    c(0xEA, 0xF0, 0xD8),
];

/// The PICO-8 fantasy console palette.
pub const PICO8: &[Rgba] = &[
    c(0x00, 0x00, 0x00),
    c(0x5F, 0x57, 0x4F),
    c(0xC2, 0xC3, 0xC7),
    c(0xFF, 0xF1, 0xE8),
    c(0xFF, 0xEC, 0x27),
    c(0xFF, 0xA3, 0x00),
    c(0xFF, 0xCC, 0xAA),
    c(0xAB, 0x52, 0x36),
    c(0xFF, 0x77, 0xA8),
    c(0xFF, 0x00, 0x4D),
    c(0x83, 0x76, 0x9C),
    c(0x7E, 0x25, 0x53),
    c(0x29, 0xAD, 0xFF),
    c(0x1D, 0x2B, 0x53),
    c(0x00, 0x87, 0x51),
    c(0x00, 0xE4, 0x36),
];

/// Ammo-8 by rsvp asap.
pub const AMMO8: &[Rgba] = &[
    c(0x04, 0x0C, 0x06),
    c(0x11, 0x23, 0x18),
    c(0x1E, 0x3A, 0x29),
    c(0x30, 0x5D, 0x42),
    c(0x4D, 0x80, 0x61),
    c(0x89, 0xA2, 0x57),
    c(0xBE, 0xDC, 0x7F),
    c(0xEE, 0xFF, 0xCC),
];

/// NYX8 by Javier Guerrero.
pub const NYX8: &[Rgba] = &[
    c(0x08, 0x14, 0x1E),
    c(0x0F, 0x2A, 0x3F),
    c(0x20, 0x39, 0x4F),
    c(0xF6, 0xD6, 0xBD),
    c(0xC3, 0xA3, 0x8A),
    c(0x99, 0x75, 0x77),
    c(0x81, 0x62, 0x71),
    c(0x4E, 0x49, 0x5F),
];

/// 15P DX by GrafxKid.
pub const FIFTEEN_P_DX: &[Rgba] = &[
    c(0x6E, 0x32, 0x32),
    c(0xBB, 0x57, 0x35),
    c(0xDF, 0x92, 0x45),
    c(0xEC, 0xD2, 0x74),
    c(0x83, 0xA8, 0x16),
    c(0x27, 0x72, 0x24),
    c(0x17, 0x3B, 0x47),
    c(0x04, 0x68, 0x94),
    c(0x17, 0xA1, 0xA9),
    c(0x81, 0xDB, 0xCD),
    c(0xFD, 0xF9, 0xF1),
    c(0xC7, 0xB2, 0x95),
    c(0x87, 0x71, 0x5B),
    c(0x46, 0x3F, 0x3C),
    c(0x20, 0x17, 0x08),
];

/// 20P DX by GrafxKid.
pub const TWENTY_P_DX: &[Rgba] = &[
    c(0x17, 0x0D, 0x20),
    c(0x47, 0x47, 0x57),
    c(0x78, 0x78, 0x76),
    c(0xB1, 0xB9, 0xA6),
    c(0xEB, 0xFF, 0xDA),
    c(0x68, 0x29, 0x3E),
    c(0xA9, 0x44, 0x00),
    c(0xD9, 0x7E, 0x00),
    c(0xEB, 0xD0, 0x00),
    c(0x52, 0x3C, 0x14),
    c(0x81, 0x60, 0x31),
    c(0xBC, 0x8B, 0x57),
    c(0xEB, 0xCD, 0x93),
    c(0x0E, 0x4C, 0x58),
    c(0x04, 0x6E, 0x92),
    c(0x01, 0xA3, 0xC3),
    c(0x55, 0xDE, 0xB7),
    c(0x17, 0x79, 0x47),
    c(0x5A, 0xB2, 0x17),
    c(0xB1, 0xE3, 0x29),
];

/// Arne 16.
pub const ARNE16: &[Rgba] = &[
    c(0x00, 0x00, 0x00),
    c(0x49, 0x3C, 0x2B),
    c(0xBE, 0x26, 0x33),
    c(0xE0, 0x6F, 0x8B),
    c(0x9D, 0x9D, 0x9D),
    c(0xA4, 0x64, 0x22),
    c(0xEB, 0x89, 0x31),
    c(0xF7, 0xE2, 0x6B),
    c(0xFF, 0xFF, 0xFF),
    c(0x1B, 0x26, 0x32),
    c(0x2F, 0x48, 0x4E),
    c(0x44, 0x89, 0x1A),
    c(0xA3, 0xCE, 0x27),
    c(0x00, 0x57, 0x84),
    c(0x31, 0xA2, 0xF2),
    c(0xB2, 0xDC, 0xEF),
];

/// Night 16.
pub const NIGHT16: &[Rgba] = &[
    c(0x0F, 0x0F, 0x1E),
    c(0xFF, 0xF8, 0xBC),
    c(0x0C, 0x21, 0x33),
    c(0x48, 0x58, 0x6D),
    c(0x79, 0xA0, 0xB0),
    c(0xB0, 0xCE, 0x9D),
    c(0x65, 0x7F, 0x49),
    c(0x3F, 0x45, 0x36),
    c(0xB9, 0x9D, 0x6A),
    c(0xFF, 0xDD, 0x91),
    c(0xDD, 0x94, 0x5B),
    c(0x9A, 0x51, 0x42),
    c(0x64, 0x4B, 0x48),
    c(0x33, 0x30, 0x33),
    c(0x76, 0x70, 0x88),
    c(0xC5, 0xA3, 0xB3),
];

/// AAP-16 by Adigun Polack.
pub const AAP16: &[Rgba] = &[
    c(0x07, 0x07, 0x08),
    c(0x33, 0x22, 0x22),
    c(0x77, 0x44, 0x33),
    c(0xCC, 0x88, 0x55),
    c(0x99, 0x33, 0x11),
    c(0xDD, 0x77, 0x11),
    c(0xFF, 0xDD, 0x55),
    c(0xFF, 0xFF, 0x33),
    c(0x55, 0xAA, 0x44),
    c(0x11, 0x55, 0x22),
    c(0x44, 0xEE, 0xBB),
    c(0x33, 0x88, 0xDD),
    c(0x55, 0x44, 0xAA),
    c(0x55, 0x55, 0x77),
    c(0xAA, 0xBB, 0xBB),
    c(0xFF, 0xFF, 0xFF),
];

/// AAP-64 by Adigun Polack.
pub const AAP64: &[Rgba] = &[
    c(0x06, 0x06, 0x08),
    c(0x14, 0x10, 0x13),
    c(0x3B, 0x17, 0x25),
    c(0x73, 0x17, 0x2D),
    c(0xB4, 0x20, 0x2A),
    c(0xDF, 0x3E, 0x23),
    c(0xFA, 0x6A, 0x0A),
    c(0xF9, 0xA3, 0x1B),
    c(0xFF, 0xD5, 0x41),
    c(0xFF, 0xFC, 0x40),
    c(0xD6, 0xF2, 0x64),
    c(0x9C, 0xDB, 0x43),
    c(0x59, 0xC1, 0x35),
    c(0x14, 0xA0, 0x2E),
    c(0x1A, 0x7A, 0x3E),
    c(0x24, 0x52, 0x3B),
    c(0x12, 0x20, 0x20),
    c(0x14, 0x34, 0x64),
    c(0x28, 0x5C, 0xC4),
    c(0x24, 0x9F, 0xDE),
    c(0x20, 0xD6, 0xC7),
    c(0xA6, 0xFC, 0xDB),
    c(0xFF, 0xFF, 0xFF),
    c(0xFE, 0xF3, 0xC0),
    c(0xFA, 0xD6, 0xB8),
    c(0xF5, 0xA0, 0x97),
    c(0xE8, 0x6A, 0x73),
    c(0xBC, 0x4A, 0x9B),
    c(0x79, 0x3A, 0x80),
    c(0x40, 0x33, 0x53),
    c(0x24, 0x22, 0x34),
    c(0x22, 0x1C, 0x1A),
    c(0x32, 0x2B, 0x28),
    c(0x71, 0x41, 0x3B),
    c(0xBB, 0x75, 0x47),
    c(0xDB, 0xA4, 0x63),
    c(0xF4, 0xD2, 0x9C),
    c(0xDA, 0xE0, 0xEA),
    c(0xB3, 0xB9, 0xD1),
    c(0x8B, 0x93, 0xAF),
    c(0x6D, 0x75, 0x8D),
    c(0x4A, 0x54, 0x62),
    c(0x33, 0x39, 0x41),
    c(0x42, 0x24, 0x33),
    c(0x5B, 0x31, 0x38),
    c(0x8E, 0x52, 0x52),
    c(0xBA, 0x75, 0x6A),
    c(0xE9, 0xB5, 0xA3),
    c(0xE3, 0xE6, 0xFF),
    c(0xB9, 0xBF, 0xFB),
    c(0x84, 0x9B, 0xE4),
    c(0x58, 0x8D, 0xBE),
    c(0x47, 0x7D, 0x85),
    c(0x23, 0x67, 0x4E),
    c(0x32, 0x84, 0x64),
    c(0x5D, 0xAF, 0x8D),
    c(0x92, 0xDC, 0xBA),
    c(0xCD, 0xF7, 0xE2),
    c(0xE4, 0xD2, 0xAA),
    c(0xC7, 0xB0, 0x8B),
    c(0xA0, 0x86, 0x62),
    c(0x79, 0x67, 0x55),
    c(0x5A, 0x4E, 0x44),
    c(0x42, 0x39, 0x34),
];

/// AAP-Splendor128 by Adigun Polack.
pub const SPLENDOR128: &[Rgba] = &[
    c(0x05, 0x04, 0x03),
    c(0x0E, 0x0C, 0x0C),
    c(0x2D, 0x1B, 0x1E),
    c(0x61, 0x27, 0x21),
    c(0xB9, 0x45, 0x1D),
    c(0xF1, 0x64, 0x1F),
    c(0xFC, 0xA5, 0x70),
    c(0xFF, 0xE0, 0xB7),
    c(0xFF, 0xFF, 0xFF),
    c(0xFF, 0xF0, 0x89),
    c(0xF8, 0xC5, 0x3A),
    c(0xE8, 0x8A, 0x36),
    c(0xB0, 0x5B, 0x2C),
    c(0x67, 0x39, 0x31),
    c(0x27, 0x1F, 0x1B),
    c(0x4C, 0x3D, 0x2E),
    c(0x85, 0x5F, 0x39),
    c(0xD3, 0x97, 0x41),
    c(0xF8, 0xF6, 0x44),
    c(0xD5, 0xDC, 0x1D),
    c(0xAD, 0xB8, 0x34),
    c(0x7F, 0x8E, 0x44),
    c(0x58, 0x63, 0x35),
    c(0x33, 0x3C, 0x24),
    c(0x18, 0x1C, 0x19),
    c(0x29, 0x3F, 0x21),
    c(0x47, 0x72, 0x38),
    c(0x61, 0xA5, 0x3F),
    c(0x8F, 0xD0, 0x32),
    c(0xC4, 0xF1, 0x29),
    c(0xD0, 0xFF, 0xEA),
    c(0x97, 0xED, 0xCA),
    c(0x59, 0xCF, 0x93),
    c(0x42, 0xA4, 0x59),
    c(0x3D, 0x6F, 0x43),
    c(0x27, 0x41, 0x2D),
    c(0x14, 0x12, 0x1D),
    c(0x1B, 0x24, 0x47),
    c(0x2B, 0x4E, 0x95),
    c(0x27, 0x89, 0xCD),
    c(0x42, 0xBF, 0xE8),
    c(0x73, 0xEF, 0xE8),
    c(0xF1, 0xF2, 0xFF),
    c(0xC9, 0xD4, 0xFD),
    c(0x8A, 0xA1, 0xF6),
    c(0x45, 0x72, 0xE3),
    c(0x49, 0x41, 0x82),
    c(0x78, 0x64, 0xC6),
    c(0x9C, 0x8B, 0xDB),
    c(0xCE, 0xAA, 0xED),
    c(0xFA, 0xD6, 0xFF),
    c(0xEE, 0xB5, 0x9C),
    c(0xD4, 0x80, 0xBB),
    c(0x90, 0x52, 0xBC),
    c(0x17, 0x15, 0x16),
    c(0x37, 0x33, 0x34),
    c(0x69, 0x5B, 0x59),
    c(0xB2, 0x8B, 0x78),
    c(0xE2, 0xB2, 0x7E),
    c(0xF6, 0xD8, 0x96),
    c(0xFC, 0xF7, 0xBE),
    c(0xEC, 0xEB, 0xE7),
    c(0xCB, 0xC6, 0xC1),
    c(0xA6, 0x9E, 0x9A),
    c(0x80, 0x7B, 0x7A),
    c(0x59, 0x57, 0x57),
    c(0x32, 0x32, 0x32),
    c(0x4F, 0x34, 0x2F),
    c(0x8C, 0x5B, 0x3E),
    c(0xC6, 0x85, 0x56),
    c(0xD6, 0xA8, 0x51),
    c(0xB4, 0x75, 0x38),
    c(0x72, 0x4B, 0x2C),
    c(0x45, 0x2A, 0x1B),
    c(0x61, 0x68, 0x3A),
    c(0x93, 0x94, 0x46),
    c(0xC6, 0xB8, 0x58),
    c(0xEF, 0xDD, 0x91),
    c(0xB5, 0xE7, 0xCB),
    c(0x86, 0xC6, 0x9A),
    c(0x5D, 0x9B, 0x79),
    c(0x48, 0x68, 0x59),
    c(0x2C, 0x3B, 0x39),
    c(0x17, 0x18, 0x19),
    c(0x2C, 0x34, 0x38),
    c(0x46, 0x54, 0x56),
    c(0x64, 0x87, 0x8C),
    c(0x8A, 0xC4, 0xC3),
    c(0xAF, 0xE9, 0xDF),
    c(0xDC, 0xEA, 0xEE),
    c(0xB8, 0xCC, 0xD8),
    c(0x88, 0xA3, 0xBC),
    c(0x5E, 0x71, 0x8E),
    c(0x48, 0x52, 0x62),
    c(0x28, 0x2C, 0x3C),
    c(0x46, 0x47, 0x62),
    c(0x69, 0x66, 0x82),
    c(0x9A, 0x97, 0xB9),
    c(0xC5, 0xC7, 0xDD),
    c(0xE6, 0xE7, 0xF0),
    c(0xEE, 0xE6, 0xEA),
    c(0xE3, 0xCD, 0xDF),
    c(0xBF, 0xA5, 0xC9),
    c(0x87, 0x73, 0x8F),
    c(0x56, 0x4F, 0x5B),
    c(0x32, 0x2F, 0x35),
    c(0x36, 0x28, 0x2B),
    c(0x65, 0x49, 0x56),
    c(0x96, 0x68, 0x88),
    c(0xC0, 0x90, 0xA9),
    c(0xD4, 0xB8, 0xB8),
    c(0xEA, 0xE0, 0xDD),
    c(0xF1, 0xEB, 0xDB),
    c(0xDD, 0xCE, 0xBF),
    c(0xBD, 0xA4, 0x99),
    c(0x88, 0x6E, 0x6A),
    c(0x59, 0x4D, 0x4D),
    c(0x33, 0x27, 0x2A),
    c(0xB2, 0x94, 0x76),
    c(0xE1, 0xBF, 0x89),
    c(0xF8, 0xE3, 0x98),
    c(0xFF, 0xE9, 0xE3),
    c(0xFD, 0xC9, 0xC9),
    c(0xF6, 0xA2, 0xA8),
    c(0xE2, 0x72, 0x85),
    c(0xB2, 0x52, 0x66),
    c(0x64, 0x36, 0x4B),
    c(0x2A, 0x1E, 0x23),
];

/// Famicube by Arne.
pub const FAMICUBE: &[Rgba] = &[
    c(0x00, 0x00, 0x00),
    c(0x00, 0x17, 0x7D),
    c(0x02, 0x4A, 0xCA),
    c(0x00, 0x84, 0xFF),
    c(0x5B, 0xA8, 0xFF),
    c(0x98, 0xDC, 0xFF),
    c(0x9B, 0xA0, 0xEF),
    c(0x62, 0x64, 0xDC),
    c(0x3D, 0x34, 0xA5),
    c(0x21, 0x16, 0x40),
    c(0x5A, 0x19, 0x91),
    c(0x6A, 0x31, 0xCA),
    c(0xA6, 0x75, 0xFE),
    c(0xE2, 0xC9, 0xFF),
    c(0xFE, 0xC9, 0xED),
    c(0xD5, 0x9C, 0xFC),
    c(0xCC, 0x69, 0xE4),
    c(0xA3, 0x28, 0xB3),
    c(0x87, 0x16, 0x46),
    c(0xCF, 0x3C, 0x71),
    c(0xFF, 0x82, 0xCE),
    c(0xFF, 0xE9, 0xC5),
    c(0xF5, 0xB7, 0x84),
    c(0xE1, 0x82, 0x89),
    c(0xDA, 0x65, 0x5E),
    c(0x82, 0x3C, 0x3D),
    c(0x4F, 0x15, 0x07),
    c(0xE0, 0x3C, 0x28),
    c(0xE2, 0xD7, 0xB5),
    c(0xC5, 0x97, 0x82),
    c(0xAE, 0x6C, 0x37),
    c(0x5C, 0x3C, 0x0D),
    c(0x23, 0x17, 0x12),
    c(0xAD, 0x4E, 0x1A),
    c(0xF6, 0x8F, 0x37),
    c(0xFF, 0xE7, 0x37),
    c(0xFF, 0xBB, 0x31),
    c(0xCC, 0x8F, 0x15),
    c(0x93, 0x97, 0x17),
    c(0xB6, 0xC1, 0x21),
    c(0xEE, 0xFF, 0xA9),
    c(0xBE, 0xEB, 0x71),
    c(0x8C, 0xD6, 0x12),
    c(0x6A, 0xB4, 0x17),
    c(0x37, 0x6D, 0x03),
    c(0x17, 0x28, 0x08),
    c(0x00, 0x4E, 0x00),
    c(0x13, 0x9D, 0x08),
    c(0x58, 0xD3, 0x32),
    c(0x20, 0xB5, 0x62),
    c(0x00, 0x60, 0x4B),
    c(0x00, 0x52, 0x80),
    c(0x0A, 0x98, 0xAC),
    c(0x25, 0xE2, 0xCD),
    c(0xBD, 0xFF, 0xCA),
    c(0x71, 0xA6, 0xA1),
    c(0x41, 0x5D, 0x66),
    c(0x0D, 0x20, 0x30),
    c(0x15, 0x15, 0x15),
    c(0x34, 0x34, 0x34),
    c(0x7B, 0x7B, 0x7B),
    c(0xA8, 0xA8, 0xA8),
    c(0xD7, 0xD7, 0xD7),
    c(0xFF, 0xFF, 0xFF),
];

/// The Tango desktop project palette.
pub const TANGO: &[Rgba] = &[
    c(0xFC, 0xE9, 0x4F),
    c(0xED, 0xD4, 0x00),
    c(0xC4, 0xA0, 0x00),
    c(0xFC, 0xAF, 0x3E),
    c(0xF5, 0x79, 0x00),
    c(0xCE, 0x5C, 0x00),
    c(0xE9, 0xB9, 0x6E),
    c(0xC1, 0x7D, 0x11),
    c(0x8F, 0x59, 0x02),
    c(0x8A, 0xE2, 0x34),
    c(0x73, 0xD2, 0x16),
    c(0x4E, 0x9A, 0x06),
    c(0x72, 0x9F, 0xCF),
    c(0x34, 0x65, 0xA4),
    c(0x20, 0x4A, 0x87),
    c(0xAD, 0x7F, 0xA8),
    c(0x75, 0x50, 0x7B),
    c(0x5C, 0x35, 0x66),
    c(0xEF, 0x29, 0x29),
    c(0xCC, 0x00, 0x00),
    c(0xA4, 0x00, 0x00),
    c(0xEE, 0xEE, 0xEC),
    c(0xD3, 0xD7, 0xCF),
    c(0xBA, 0xBD, 0xB6),
    c(0x88, 0x8A, 0x85),
    c(0x55, 0x57, 0x53),
    c(0x2E, 0x34, 0x36),
];

/// Go brand colors, ordered by hue ramp.
pub const GO: &[Rgba] = &[
    c(0x00, 0xAD, 0xD8),
    c(0x0B, 0xB5, 0xDB),
    c(0x31, 0xBE, 0xE0),
    c(0x4D, 0xC7, 0xE4),
    c(0x68, 0xCC, 0xE7),
    c(0x82, 0xD2, 0xE8),
    c(0x9C, 0xDB, 0xED),
    c(0xB5, 0xE3, 0xF0),
    c(0xE9, 0xF3, 0xF9),
    c(0x5D, 0xC9, 0xE2),
    c(0x7D, 0xD1, 0xE6),
    c(0x98, 0xD9, 0xEA),
    c(0x98, 0xD5, 0xEC),
    c(0xC5, 0xE9, 0xF2),
    c(0xD5, 0xEE, 0xF5),
    c(0xE3, 0xF4, 0xF8),
    c(0xEE, 0xF8, 0xFB),
    c(0xF7, 0xFC, 0xFD),
    c(0x00, 0xA2, 0x9C),
    c(0x5B, 0xC4, 0xBA),
    c(0x77, 0xCB, 0xC5),
    c(0x94, 0xD5, 0xD1),
    c(0xAD, 0xDE, 0xDB),
    c(0xC4, 0xE7, 0xE4),
    c(0xD7, 0xEE, 0xED),
    c(0xE8, 0xF5, 0xF4),
    c(0xD8, 0xEE, 0xEB),
    c(0xCE, 0x32, 0x62),
    c(0xD7, 0x5C, 0x7E),
    c(0xDE, 0x7B, 0x96),
    c(0xE4, 0x97, 0xAD),
    c(0xEB, 0xB1, 0xC1),
    c(0xF2, 0xC9, 0xD4),
    c(0xF6, 0xDC, 0xE3),
    c(0xF9, 0xEA, 0xEE),
    c(0xF1, 0xD2, 0xD3),
    c(0x00, 0x00, 0x00),
    c(0x1B, 0x1A, 0x1A),
    c(0x2E, 0x2D, 0x2C),
    c(0x40, 0x3D, 0x3D),
    c(0x53, 0x50, 0x50),
    c(0x68, 0x64, 0x64),
    c(0x7F, 0x7C, 0x7B),
    c(0x9A, 0x97, 0x96),
    c(0xB5, 0xB2, 0xB3),
    c(0xFD, 0xDD, 0x00),
    c(0xFE, 0xE3, 0x3D),
    c(0xFF, 0xE9, 0x67),
    c(0xFF, 0xED, 0x88),
    c(0xFE, 0xF1, 0xA4),
    c(0xFE, 0xF5, 0xBE),
    c(0xFE, 0xF9, 0xD5),
    c(0xFF, 0xFB, 0xE6),
    c(0xFF, 0xFE, 0xF3),
    c(0x00, 0x75, 0x8D),
    c(0x55, 0x57, 0x59),
    c(0x40, 0x2B, 0x56),
    c(0xDB, 0xD9, 0xD6),
];

/// Muted tones for geographic tile maps.
pub const BASEMAPS: &[Rgba] = &[
    c(0xEE, 0xDD, 0xDE),
    c(0xE1, 0xC7, 0xC9),
    c(0xEA, 0xD5, 0xD7),
    c(0x8B, 0x94, 0xA0),
    c(0x9B, 0xA3, 0xAD),
    c(0x87, 0x91, 0x9D),
    c(0xA4, 0xAB, 0xB3),
    c(0x95, 0x9F, 0xAA),
    c(0xF2, 0xF5, 0xF8),
    c(0xD7, 0xD8, 0xD9),
    c(0xBE, 0xC3, 0xC8),
    c(0x41, 0x5C, 0x77),
    c(0xB9, 0xBF, 0xC5),
    c(0x56, 0x6E, 0x85),
    c(0x68, 0x7D, 0x91),
    c(0x96, 0xA4, 0xB0),
    c(0xC2, 0xC9, 0xCE),
    c(0xD3, 0xE6, 0xEA),
    c(0xC3, 0xDC, 0xE1),
    c(0xD1, 0xE5, 0xE9),
    c(0xAE, 0xCE, 0xD4),
    c(0xBB, 0xD6, 0xDB),
    c(0xC0, 0xDB, 0xE0),
    c(0xCB, 0xE1, 0xE5),
    c(0xB3, 0xD1, 0xD6),
    c(0xC6, 0xDE, 0xE2),
    c(0xC8, 0xE0, 0xE4),
    c(0xD5, 0xE8, 0xEB),
    c(0xCB, 0xE0, 0xE3),
    c(0xCE, 0xE3, 0xE6),
    c(0xBC, 0xD4, 0xD5),
    c(0xE2, 0xEB, 0xEB),
    c(0xDD, 0xE0, 0xE0),
    c(0xE5, 0xEE, 0xED),
    c(0xEE, 0xF2, 0xF1),
    c(0xE3, 0xE5, 0xE4),
    c(0xEC, 0xF1, 0xEE),
    c(0xD5, 0xE3, 0xD7),
    c(0xC9, 0xD6, 0xC9),
    c(0xDC, 0xE9, 0xDB),
    c(0xD9, 0xE7, 0xCE),
    c(0xDA, 0xE8, 0xCF),
    c(0xE2, 0xED, 0xD8),
    c(0xE6, 0xEF, 0xDD),
    c(0xE5, 0xEE, 0xDB),
    c(0xE3, 0xEC, 0xD9),
    c(0xE8, 0xF0, 0xDD),
    c(0xE9, 0xF0, 0xDF),
    c(0xED, 0xF2, 0xE4),
    c(0xF3, 0xF6, 0xED),
    c(0xF1, 0xF2, 0xEE),
    c(0xF5, 0xF5, 0xF2),
    c(0xEB, 0xEB, 0xE8),
    c(0xFF, 0xFF, 0xFE),
    c(0xF6, 0xF6, 0xF5),
    c(0xEE, 0xEE, 0xEC),
    c(0xFE, 0xFC, 0xDA),
    c(0xEE, 0xE9, 0xCE),
    c(0xF6, 0xF4, 0xEB),
    c(0xEF, 0xEE, 0xEA),
    c(0xE6, 0xE5, 0xE1),
    c(0xF1, 0xEE, 0xE3),
    c(0xF0, 0xEE, 0xE7),
    c(0xE3, 0xE1, 0xDA),
    c(0xE4, 0xE3, 0xE0),
    c(0xF2, 0xF0, 0xEA),
    c(0xFE, 0xE8, 0xA9),
    c(0xE8, 0xDB, 0xB8),
    c(0xF9, 0xF6, 0xEE),
    c(0xF4, 0xEB, 0xD4),
    c(0xFD, 0xFB, 0xF6),
    c(0xF9, 0xF6, 0xEF),
    c(0xFC, 0xE1, 0xA4),
    c(0xF8, 0xF4, 0xEB),
    c(0xFF, 0xE8, 0xB7),
    c(0xFA, 0xDD, 0xA1),
    c(0xFA, 0xDC, 0x9E),
    c(0xFA, 0xE7, 0xC0),
    c(0xE3, 0xE2, 0xE0),
    c(0xFC, 0xFA, 0xF6),
    c(0xF4, 0xF2, 0xEE),
    c(0xEF, 0xEA, 0xE0),
    c(0xE5, 0xDB, 0xC7),
    c(0xCD, 0xCC, 0xCA),
    c(0xFE, 0xF9, 0xEF),
    c(0xF9, 0xE0, 0xAF),
    c(0xFB, 0xED, 0xD2),
    c(0xFB, 0xEE, 0xD5),
    c(0xF8, 0xDD, 0xAA),
    c(0xF9, 0xE6, 0xC3),
    c(0xFE, 0xF8, 0xED),
    c(0xF6, 0xF0, 0xE5),
    c(0xFA, 0xE4, 0xBC),
    c(0xFD, 0xEF, 0xD6),
    c(0xED, 0xE7, 0xDD),
    c(0xF2, 0xE9, 0xDA),
    c(0xFB, 0xF8, 0xF3),
    c(0xF7, 0xF1, 0xE7),
    c(0xFD, 0xEC, 0xD0),
    c(0xFD, 0xEB, 0xCE),
    c(0xE7, 0xE0, 0xD5),
    c(0xF5, 0xF3, 0xF0),
    c(0xFC, 0xF2, 0xE3),
    c(0xF4, 0xEC, 0xE0),
    c(0xEA, 0xE2, 0xD6),
    c(0xEE, 0xE1, 0xCE),
    c(0xF1, 0xE6, 0xD6),
    c(0xF6, 0xEF, 0xE5),
    c(0xEB, 0xDD, 0xC9),
    c(0xEB, 0xE4, 0xDA),
    c(0xE7, 0xDB, 0xCA),
    c(0xE7, 0xDA, 0xC8),
    c(0xE4, 0xDC, 0xD1),
    c(0xF5, 0xED, 0xE3),
    c(0xDF, 0xDE, 0xDD),
    c(0xE1, 0xE0, 0xDF),
    c(0xEA, 0xE4, 0xDF),
    c(0xF8, 0xF2, 0xEE),
    c(0xEC, 0xE2, 0xDD),
    c(0xEE, 0xE5, 0xE3),
    c(0xF2, 0xE6, 0xE5),
    c(0xE9, 0xE9, 0xE9),
    c(0xE9, 0xD6, 0xD6),
];

/// Every built-in palette with its lookup name.
pub const BUILTIN: &[(&str, &[Rgba])] = &[
    ("1Bit", ONE_BIT),
    ("2BitGrayScale", TWO_BIT_GRAY_SCALE),
    ("3Bit", THREE_BIT),
    ("CGA", CGA),
    ("15PDX", FIFTEEN_P_DX),
    ("20PDX", TWENTY_P_DX),
    ("AAP16", AAP16),
    ("AAP64", AAP64),
    ("Splendor128", SPLENDOR128),
    ("Arne16", ARNE16),
    ("Famicube", FAMICUBE),
    ("EDG16", EDG16),
    ("EDG32", EDG32),
    ("EDG36", EDG36),
    ("EDG64", EDG64),
    ("EDG8", EDG8),
    ("EN4", EN4),
    ("ARQ4", ARQ4),
    ("Ink", INK),
    ("Ammo8", AMMO8),
    ("NYX8", NYX8),
    ("Night16", NIGHT16),
    ("PICO8", PICO8),
    ("Tango", TANGO),
    ("Go", GO),
    ("Basemaps", BASEMAPS),
];
