use crate::error::ConfigError;
use pixel_tile::{Palette, PaletteCatalog};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

/// Application configuration loaded from tilepix.yaml
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    /// Scale used when a render request does not name one
    #[serde(default = "default_scale")]
    pub default_scale: f64,

    /// Custom palettes as hex color lists
    #[serde(default)]
    pub palettes: BTreeMap<String, Vec<String>>,

    /// Named tile definitions
    #[serde(default)]
    pub tiles: BTreeMap<String, TileConfig>,
}

fn default_scale() -> f64 {
    2.0
}

/// Configuration for a single tile
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct TileConfig {
    /// Palette name (custom palettes shadow built-ins)
    pub palette: String,

    /// Width in pixels
    pub width: usize,

    /// Row-major palette indices
    pub indices: Vec<u8>,
}

/// The frame tile shipped with the default configuration
const FRAME_INDICES: [u8; 48] = [
    1, 1, 1, 1, 1, 1, 1, 1, //
    1, 0, 0, 0, 0, 0, 0, 1, //
    1, 0, 0, 1, 1, 0, 0, 1, //
    1, 0, 1, 1, 1, 1, 0, 1, //
    1, 0, 0, 0, 0, 0, 0, 1, //
    1, 1, 1, 1, 1, 1, 1, 1, //
];

impl AppConfig {
    /// Parse configuration from a YAML string
    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(content)?;
        Ok(config)
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_yaml(&content)?;
        tracing::info!(
            path = %path.display(),
            palettes = config.palettes.len(),
            tiles = config.tiles.len(),
            "Loaded configuration"
        );
        Ok(config)
    }

    /// Load from `path` if given, otherwise use the built-in defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => {
                tracing::debug!("No config file given, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Build the palette catalog: built-in palettes plus custom ones
    pub fn build_catalog(&self) -> Result<PaletteCatalog, ConfigError> {
        let mut catalog = PaletteCatalog::builtin();
        for (name, colors) in &self.palettes {
            let palette = Palette::from_hex(colors).map_err(|source| ConfigError::Palette {
                name: name.clone(),
                source,
            })?;
            if catalog.by_name(name).is_some() {
                tracing::debug!(%name, "Custom palette shadows built-in palette");
            }
            catalog = catalog.with_palette(name.clone(), palette);
        }
        Ok(catalog)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        let mut tiles = BTreeMap::new();
        tiles.insert(
            "frame".to_string(),
            TileConfig {
                palette: "1Bit".to_string(),
                width: 8,
                indices: FRAME_INDICES.to_vec(),
            },
        );

        Self {
            default_scale: default_scale(),
            palettes: BTreeMap::new(),
            tiles,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pixel_tile::{PaletteError, Rgba};

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.default_scale, 2.0);
        assert!(config.palettes.is_empty());

        let frame = config.tiles.get("frame").expect("frame tile");
        assert_eq!(frame.palette, "1Bit");
        assert_eq!(frame.width, 8);
        assert_eq!(frame.indices.len(), 48);
    }

    #[test]
    fn test_from_yaml_full() {
        let yaml = r##"
default_scale: 3.5
palettes:
  mono: ["#000", "#fff"]
tiles:
  checker:
    palette: mono
    width: 2
    indices: [0, 1, 1, 0]
"##;
        let config = AppConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.default_scale, 3.5);
        assert_eq!(config.palettes["mono"], vec!["#000", "#fff"]);
        assert_eq!(
            config.tiles["checker"],
            TileConfig {
                palette: "mono".to_string(),
                width: 2,
                indices: vec![0, 1, 1, 0],
            }
        );
    }

    #[test]
    fn test_from_yaml_defaults_missing_sections() {
        let config = AppConfig::from_yaml("{}").unwrap();
        assert_eq!(config.default_scale, 2.0);
        assert!(config.palettes.is_empty());
        assert!(config.tiles.is_empty());
    }

    #[test]
    fn test_from_yaml_rejects_out_of_range_index_bytes() {
        let yaml = "tiles:\n  t:\n    palette: 1Bit\n    width: 1\n    indices: [256]\n";
        assert!(matches!(
            AppConfig::from_yaml(yaml),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_load_or_default_without_path() {
        let config = AppConfig::load_or_default(None).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_load_missing_file() {
        let result = AppConfig::load(Path::new("/nonexistent/tilepix.yaml"));
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }

    #[test]
    fn test_build_catalog_adds_custom_palettes() {
        let mut config = AppConfig::default();
        config
            .palettes
            .insert("ember".to_string(), vec!["#200".into(), "#F80".into(), "#FF0".into()]);

        let catalog = config.build_catalog().unwrap();
        let ember = catalog.by_name("ember").unwrap();
        assert_eq!(ember.len(), 3);
        assert_eq!(ember[1], Rgba::opaque(0xFF, 0x88, 0x00));
        assert!(catalog.by_color_count(3).contains_key("ember"));
        assert!(catalog.by_name("PICO8").is_some());
    }

    #[test]
    fn test_build_catalog_custom_shadows_builtin() {
        let mut config = AppConfig::default();
        config
            .palettes
            .insert("1Bit".to_string(), vec!["#fff".into(), "#000".into()]);

        let catalog = config.build_catalog().unwrap();
        assert_eq!(catalog.by_name("1Bit").unwrap()[0], Rgba::WHITE);
    }

    #[test]
    fn test_build_catalog_reports_bad_palette() {
        let mut config = AppConfig::default();
        config.palettes.insert("broken".to_string(), vec!["#12".into()]);
        config.palettes.insert("empty".to_string(), vec![]);

        match config.build_catalog() {
            Err(ConfigError::Palette { name, source }) => {
                // BTreeMap order: "broken" is checked first
                assert_eq!(name, "broken");
                assert!(matches!(source, PaletteError::ParseColor(_)));
            }
            other => panic!("Expected Palette error, got {other:?}"),
        }
    }
}
