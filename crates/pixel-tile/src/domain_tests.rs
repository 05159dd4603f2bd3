//! Domain-critical regression tests for pixel-tile.
//!
//! Each test documents the class of bug it guards against rather than
//! confirming a happy path.

#[cfg(test)]
mod domain_tests {
    use pretty_assertions::assert_eq;

    use crate::color::Rgba;
    use crate::error::RasterError;
    use crate::palette::{Palette, PaletteCatalog, PaletteError};
    use crate::raster::{Raster, RgbaImage};
    use crate::scale::scale;
    use crate::tile::Tile;

    /// 8x6 frame with a small pyramid, indices into a 2-color palette.
    const FRAME: [u8; 48] = [
        1, 1, 1, 1, 1, 1, 1, 1, //
        1, 0, 0, 0, 0, 0, 0, 1, //
        1, 0, 0, 1, 1, 0, 0, 1, //
        1, 0, 1, 1, 1, 1, 0, 1, //
        1, 0, 0, 0, 0, 0, 0, 1, //
        1, 1, 1, 1, 1, 1, 1, 1, //
    ];

    /// Two glyphs per pixel: black reads as shaded, everything else as light.
    fn glyphs(raster: &impl Raster) -> String {
        let mut out = String::new();
        for y in 0..raster.height() {
            for x in 0..raster.width() {
                let color = raster.color_at(x, y).unwrap();
                out.push_str(if color.r == 0 { "▓▓" } else { "░░" });
            }
            out.push('\n');
        }
        out
    }

    // ========================================================================
    // Golden output: integer upscaling is exact block replication
    // ========================================================================

    /// If this breaks, the source coordinate mapping has drifted (e.g. a
    /// rounding mode change or an off-by-one in the clamp): the frame's
    /// one-pixel border would thicken, thin or shift.
    #[test]
    fn test_frame_golden_at_2x() {
        let catalog = PaletteCatalog::builtin();
        let tile = Tile::new(catalog.by_name("1Bit").unwrap(), 8, FRAME).unwrap();

        let expected_source = "\
░░░░░░░░░░░░░░░░
░░▓▓▓▓▓▓▓▓▓▓▓▓░░
░░▓▓▓▓░░░░▓▓▓▓░░
░░▓▓░░░░░░░░▓▓░░
░░▓▓▓▓▓▓▓▓▓▓▓▓░░
░░░░░░░░░░░░░░░░
";
        assert_eq!(glyphs(&tile), expected_source);

        let scaled = scale(&tile, 2.0).unwrap();
        let expected_scaled = "\
░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░
░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░
░░░░▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓░░░░
░░░░▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓░░░░
░░░░▓▓▓▓▓▓▓▓░░░░░░░░▓▓▓▓▓▓▓▓░░░░
░░░░▓▓▓▓▓▓▓▓░░░░░░░░▓▓▓▓▓▓▓▓░░░░
░░░░▓▓▓▓░░░░░░░░░░░░░░░░▓▓▓▓░░░░
░░░░▓▓▓▓░░░░░░░░░░░░░░░░▓▓▓▓░░░░
░░░░▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓░░░░
░░░░▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓░░░░
░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░
░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░
";
        assert_eq!(glyphs(&scaled), expected_scaled);
    }

    /// If this breaks, integer factors no longer produce uniform k x k
    /// blocks, meaning some source pixels are sampled more often than
    /// others.
    #[test]
    fn test_integer_factors_produce_uniform_blocks() {
        let catalog = PaletteCatalog::builtin();
        let tile = Tile::new(catalog.by_name("1Bit").unwrap(), 8, FRAME).unwrap();

        for k in 1..=5usize {
            let scaled = scale(&tile, k as f64).unwrap();
            assert_eq!(scaled.dimensions(), (8 * k, 6 * k));
            for dy in 0..scaled.height() {
                for dx in 0..scaled.width() {
                    assert_eq!(
                        scaled.color_at(dx, dy).unwrap(),
                        tile.color_at(dx / k, dy / k).unwrap(),
                        "factor {k} pixel ({dx}, {dy})"
                    );
                }
            }
        }
    }

    // ========================================================================
    // Identity and dimension rules
    // ========================================================================

    /// If this breaks, scaling by 1.0 is no longer a no-op and previews at
    /// native size would differ from the tile itself.
    #[test]
    fn test_unit_scale_is_identity() {
        let catalog = PaletteCatalog::builtin();
        let pico = catalog.by_name("PICO8").unwrap();
        let indices: Vec<u8> = (0..80).map(|i| (i * 7 % 16) as u8).collect();
        let tile = Tile::new(pico, 10, indices).unwrap();

        let scaled = scale(&tile, 1.0).unwrap();
        assert_eq!(scaled.to_image().unwrap(), tile.to_image().unwrap());
    }

    /// If this breaks, destination sizes stopped following
    /// `max(1, round(src * factor))`.
    #[test]
    fn test_dimension_rule_over_many_factors() {
        let image = RgbaImage::filled(7, 3, Rgba::WHITE);
        for step in 1..=40 {
            let factor = step as f64 * 0.125;
            let scaled = scale(&image, factor).unwrap();
            let want = |len: usize| ((len as f64 * factor).round() as usize).max(1);
            assert_eq!(scaled.dimensions(), (want(7), want(3)), "factor {factor}");
        }
    }

    /// If this breaks, a fractional factor can map the last destination
    /// column past the end of the source and fail with OutOfBounds.
    #[test]
    fn test_every_destination_pixel_resolves_for_fractional_factors() {
        let image = RgbaImage::filled(5, 3, Rgba::BLACK);
        for factor in [0.1, 0.33, 0.5, 0.75, 1.1, 1.5, 1.9, 2.25, 3.7, 10.01] {
            let scaled = scale(&image, factor).unwrap();
            assert!(scaled.to_image().is_ok(), "factor {factor} failed");
        }
    }

    // ========================================================================
    // Failure policy: never a plausible wrong color
    // ========================================================================

    /// If this breaks, tile construction accepts ragged data or rejects
    /// well-formed data.
    #[test]
    fn test_tile_construction_iff_whole_rows() {
        let palette = Palette::new(vec![Rgba::BLACK]).unwrap();
        for width in 1..=12usize {
            for len in 0..=48usize {
                let result = Tile::new(&palette, width, vec![0; len]);
                if len % width == 0 {
                    assert_eq!(result.unwrap().height(), len / width);
                } else {
                    assert_eq!(
                        result,
                        Err(RasterError::DimensionMismatch { len, width }),
                        "width {width} len {len}"
                    );
                }
            }
        }
    }

    /// If this breaks, an index past the end of some palette resolves to a
    /// color instead of failing.
    #[test]
    fn test_out_of_range_index_fails_for_every_builtin_palette() {
        let catalog = PaletteCatalog::builtin();
        for (name, palette) in catalog.iter() {
            let len = palette.len();
            let last = (len - 1) as u8;
            let over = len as u8;
            let tile = Tile::new(palette, 2, vec![last, over]).unwrap();

            assert!(tile.color_at(0, 0).is_ok(), "{name}: last index failed");
            assert_eq!(
                tile.color_at(1, 0),
                Err(RasterError::Palette(PaletteError::IndexOutOfRange {
                    index: len,
                    len
                })),
                "{name}: index {len} resolved"
            );
        }
    }

    /// If this breaks, the scaler swallows source errors (for example by
    /// substituting a default color) instead of propagating them.
    #[test]
    fn test_scaled_tile_propagates_index_errors() {
        let palette = Palette::new(vec![Rgba::BLACK, Rgba::WHITE]).unwrap();
        let tile = Tile::new(&palette, 2, vec![0, 9]).unwrap();
        let scaled = scale(&tile, 2.0).unwrap();

        assert_eq!(scaled.color_at(1, 1), Ok(Rgba::BLACK));
        for (dx, dy) in [(2, 0), (3, 0), (2, 1), (3, 1)] {
            assert_eq!(
                scaled.color_at(dx, dy),
                Err(RasterError::Palette(PaletteError::IndexOutOfRange {
                    index: 9,
                    len: 2
                }))
            );
        }
        assert!(scaled.to_image().is_err());
    }

    /// If this breaks, scaling a zero-height tile produces a pixel out of
    /// nothing instead of failing.
    #[test]
    fn test_scaled_empty_tile_fails_loudly() {
        let palette = Palette::new(vec![Rgba::BLACK]).unwrap();
        let tile = Tile::new(&palette, 3, Vec::new()).unwrap();
        let scaled = scale(&tile, 2.0).unwrap();

        assert_eq!(scaled.dimensions(), (6, 1));
        assert!(matches!(
            scaled.color_at(0, 0),
            Err(RasterError::OutOfBounds { .. })
        ));
    }

    /// If this breaks, an invalid factor produced a raster.
    #[test]
    fn test_invalid_factors_never_produce_a_raster() {
        let palette = Palette::new(vec![Rgba::BLACK]).unwrap();
        let tile = Tile::new(&palette, 1, vec![0]).unwrap();
        for factor in [0.0, -1.0, -2.5, f64::NAN] {
            assert!(scale(&tile, factor).is_err(), "factor {factor}");
        }
    }

    // ========================================================================
    // Catalog consistency
    // ========================================================================

    /// If this breaks, the count grouping and the name table disagree.
    #[test]
    fn test_catalog_groups_match_name_table() {
        let catalog = PaletteCatalog::builtin();
        for (name, palette) in catalog.iter() {
            let group = catalog.by_color_count(palette.len());
            let grouped = group
                .get(name)
                .unwrap_or_else(|| panic!("{name} missing from its count group"));
            assert_eq!(grouped, palette);
        }

        let grouped_total: usize = catalog
            .color_counts()
            .map(|count| catalog.by_color_count(count).len())
            .sum();
        assert_eq!(grouped_total, catalog.len());
    }

    /// If this breaks, palettes are no longer shareable across threads.
    #[test]
    fn test_concurrent_readers() {
        let catalog = PaletteCatalog::builtin();
        let palette = catalog.by_name("EDG32").unwrap();
        let indices: Vec<u8> = (0..64).map(|i| (i % 32) as u8).collect();
        let tile = Tile::new(palette, 8, indices).unwrap();
        let expected = scale(&tile, 1.5).unwrap().to_image().unwrap();

        std::thread::scope(|s| {
            for _ in 0..4 {
                s.spawn(|| {
                    let image = scale(&tile, 1.5).unwrap().to_image().unwrap();
                    assert_eq!(image, expected);
                });
            }
        });
    }
}
