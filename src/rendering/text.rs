//! Terminal renderers for rasters and palettes.
//!
//! Each pixel is drawn two characters wide so that square pixels look
//! roughly square in a monospace terminal.

use std::fmt::Write;

use pixel_tile::{Palette, Raster, RasterError, Rgba};

/// Glyph pair for pixels darker than [`DARK_THRESHOLD`].
pub const DARK: &str = "▓▓";

/// Glyph pair for every other pixel.
pub const LIGHT: &str = "░░";

/// Luma below which a pixel is drawn as [`DARK`].
pub const DARK_THRESHOLD: u8 = 128;

const RESET: &str = "\x1b[0m";

/// Upper bound on the up-front allocation of [`render_blocks`].
const MAX_PRESIZE: usize = 1 << 20;

/// Render a raster as shaded glyphs, one line per row.
///
/// Every row, including the last, ends with `\n`. The first pixel that
/// fails to resolve aborts the render.
pub fn render_blocks(raster: &impl Raster) -> Result<String, RasterError> {
    let (width, height) = raster.dimensions();
    let row_len = width.saturating_mul(DARK.len()).saturating_add(1);
    let mut out = String::with_capacity(height.saturating_mul(row_len).min(MAX_PRESIZE));

    for y in 0..height {
        for x in 0..width {
            let color = raster.color_at(x, y)?;
            out.push_str(if color.luma() < DARK_THRESHOLD {
                DARK
            } else {
                LIGHT
            });
        }
        out.push('\n');
    }

    Ok(out)
}

/// Render a raster with 24-bit ANSI background colors.
///
/// Transparent pixels use the terminal's default background. Each row
/// resets attributes before its newline.
pub fn render_ansi(raster: &impl Raster) -> Result<String, RasterError> {
    let (width, height) = raster.dimensions();
    let mut out = String::new();

    for y in 0..height {
        for x in 0..width {
            push_ansi_cell(&mut out, raster.color_at(x, y)?);
        }
        out.push_str(RESET);
        out.push('\n');
    }

    Ok(out)
}

/// One line per palette entry: index, hex value and a color sample.
pub fn render_swatch(palette: &Palette) -> String {
    let digits = (palette.len() - 1).to_string().len();
    let mut out = String::new();

    for (index, color) in palette.iter().enumerate() {
        let _ = write!(out, "{index:>digits$} {color} ");
        for _ in 0..3 {
            push_ansi_cell(&mut out, color);
        }
        out.push_str(RESET);
        out.push('\n');
    }

    out
}

fn push_ansi_cell(out: &mut String, color: Rgba) {
    if color.is_transparent() {
        out.push_str("\x1b[49m  ");
    } else {
        let _ = write!(out, "\x1b[48;2;{};{};{}m  ", color.r, color.g, color.b);
    }
}
