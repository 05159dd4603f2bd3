pub mod text;

pub use text::{render_ansi, render_blocks, render_swatch};
