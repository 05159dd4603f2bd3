//! Named palette table with a color-count index.

use std::collections::BTreeMap;

use super::builtin::BUILTIN;
use super::palette::Palette;

/// Palettes keyed by name.
pub type PaletteLookup = BTreeMap<String, Palette>;

static EMPTY_LOOKUP: PaletteLookup = BTreeMap::new();

/// Read-only table of named palettes.
///
/// Built once at startup and passed around by reference. Alongside the
/// name table the catalog keeps a derived grouping of palettes by color
/// count, rebuilt from the name table whenever a palette is added during
/// construction.
///
/// # Example
///
/// ```
/// use pixel_tile::PaletteCatalog;
///
/// let catalog = PaletteCatalog::builtin();
///
/// let pico = catalog.by_name("PICO8").unwrap();
/// assert_eq!(pico.len(), 16);
///
/// let sixteen = catalog.by_color_count(16);
/// assert!(sixteen.contains_key("PICO8"));
///
/// assert!(catalog.by_name("NoSuchPalette").is_none());
/// assert!(catalog.by_color_count(3).is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct PaletteCatalog {
    by_name: PaletteLookup,
    by_count: BTreeMap<usize, PaletteLookup>,
}

impl PaletteCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a catalog holding every built-in palette.
    pub fn builtin() -> Self {
        let by_name: PaletteLookup = BUILTIN
            .iter()
            .map(|&(name, colors)| (name.to_string(), Palette::from_table(colors)))
            .collect();

        let catalog = Self::from_lookup(by_name);
        tracing::debug!(
            palettes = catalog.len(),
            groups = catalog.by_count.len(),
            "Built palette catalog"
        );
        catalog
    }

    /// Create a catalog from an existing name table.
    pub fn from_lookup(by_name: PaletteLookup) -> Self {
        let by_count = group_by_color_count(&by_name);
        Self { by_name, by_count }
    }

    /// Add a palette, replacing any palette already registered under `name`.
    ///
    /// ```
    /// use pixel_tile::{Palette, PaletteCatalog, Rgba};
    ///
    /// let mono = Palette::new(vec![Rgba::BLACK, Rgba::WHITE]).unwrap();
    /// let catalog = PaletteCatalog::builtin().with_palette("mono", mono);
    ///
    /// assert_eq!(catalog.by_color_count(2).len(), 2);
    /// ```
    pub fn with_palette(mut self, name: impl Into<String>, palette: Palette) -> Self {
        self.by_name.insert(name.into(), palette);
        self.by_count = group_by_color_count(&self.by_name);
        self
    }

    /// Look up a palette by exact name.
    ///
    /// A miss is an ordinary outcome, not an error.
    pub fn by_name(&self, name: &str) -> Option<&Palette> {
        self.by_name.get(name)
    }

    /// All palettes with exactly `count` colors.
    ///
    /// Returns an empty mapping when no palette has that many colors.
    pub fn by_color_count(&self, count: usize) -> &PaletteLookup {
        self.by_count.get(&count).unwrap_or(&EMPTY_LOOKUP)
    }

    /// Palette names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.by_name.keys().map(String::as_str)
    }

    /// Distinct color counts in ascending order.
    pub fn color_counts(&self) -> impl Iterator<Item = usize> + '_ {
        self.by_count.keys().copied()
    }

    /// Iterate over `(name, palette)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Palette)> + '_ {
        self.by_name.iter().map(|(name, palette)| (name.as_str(), palette))
    }

    /// Number of named palettes.
    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    /// Returns true if the catalog holds no palettes.
    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}

fn group_by_color_count(by_name: &PaletteLookup) -> BTreeMap<usize, PaletteLookup> {
    let mut groups: BTreeMap<usize, PaletteLookup> = BTreeMap::new();
    for (name, palette) in by_name {
        groups
            .entry(palette.len())
            .or_default()
            .insert(name.clone(), palette.clone());
    }
    groups
}
