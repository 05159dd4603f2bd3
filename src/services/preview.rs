use crate::error::{ConfigError, PreviewError};
use crate::models::AppConfig;
use crate::rendering::{render_ansi, render_blocks};
use pixel_tile::{scale, Palette, PaletteCatalog, Raster, Tile};

/// Largest preview, in destination pixels, that [`PreviewService::render`] draws
pub const MAX_PREVIEW_PIXELS: usize = 1 << 20;

/// How a preview is drawn in the terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PreviewStyle {
    /// Shaded glyphs, readable without color support
    #[default]
    Blocks,
    /// 24-bit ANSI background colors
    Ansi,
}

/// A request to preview one configured tile
#[derive(Debug, Clone, Default)]
pub struct PreviewRequest {
    /// Tile name from the configuration
    pub tile: String,
    /// Palette to render with instead of the tile's own
    pub palette: Option<String>,
    /// Scale factor; the configured default when absent
    pub scale: Option<f64>,
    pub style: PreviewStyle,
}

/// Resolves configured tiles against the palette catalog and renders them
pub struct PreviewService {
    catalog: PaletteCatalog,
    config: AppConfig,
}

impl PreviewService {
    pub fn new(config: AppConfig) -> Result<Self, ConfigError> {
        let catalog = config.build_catalog()?;
        Ok(Self { catalog, config })
    }

    pub fn catalog(&self) -> &PaletteCatalog {
        &self.catalog
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Look up a palette by name
    pub fn palette(&self, name: &str) -> Result<&Palette, PreviewError> {
        self.catalog
            .by_name(name)
            .ok_or_else(|| PreviewError::UnknownPalette(name.to_string()))
    }

    /// Build a configured tile, optionally swapped onto another palette
    pub fn tile(&self, name: &str, palette: Option<&str>) -> Result<Tile<'_>, PreviewError> {
        let tile_config = self
            .config
            .tiles
            .get(name)
            .ok_or_else(|| PreviewError::UnknownTile(name.to_string()))?;

        let palette = self.palette(palette.unwrap_or(&tile_config.palette))?;
        let tile = Tile::new(palette, tile_config.width, tile_config.indices.as_slice())?;
        Ok(tile)
    }

    /// Render a preview of a configured tile
    pub fn render(&self, request: &PreviewRequest) -> Result<String, PreviewError> {
        let tile = self.tile(&request.tile, request.palette.as_deref())?;
        let factor = request.scale.unwrap_or(self.config.default_scale);
        let scaled = scale(&tile, factor)?;

        let (width, height) = scaled.dimensions();
        if width.saturating_mul(height) > MAX_PREVIEW_PIXELS {
            return Err(PreviewError::TooLarge {
                width,
                height,
                max: MAX_PREVIEW_PIXELS,
            });
        }

        tracing::debug!(
            tile = %request.tile,
            factor,
            width,
            height,
            "Rendering preview"
        );

        let text = match request.style {
            PreviewStyle::Blocks => render_blocks(&scaled)?,
            PreviewStyle::Ansi => render_ansi(&scaled)?,
        };
        Ok(text)
    }
}
