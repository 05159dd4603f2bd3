//! Preview rendering through the service layer.

mod common;

use common::*;
use pretty_assertions::assert_eq;
use tilepix::error::PreviewError;
use tilepix::models::AppConfig;
use tilepix::services::{PreviewRequest, PreviewService, PreviewStyle};

fn request(tile: &str) -> PreviewRequest {
    PreviewRequest {
        tile: tile.to_string(),
        ..Default::default()
    }
}

#[test]
fn test_default_frame_golden_output() {
    let service = PreviewService::new(AppConfig::default()).unwrap();

    let native = service
        .render(&PreviewRequest {
            scale: Some(1.0),
            ..request("frame")
        })
        .unwrap();
    assert_eq!(native, FRAME_1X);

    // default_scale is 2.0
    let doubled = service.render(&request("frame")).unwrap();
    assert_eq!(doubled, FRAME_2X);
}

#[test]
fn test_fractional_scale_from_config() {
    let config = AppConfig::from_yaml(CONFIG_YAML).unwrap();
    let service = PreviewService::new(config).unwrap();

    // 3 columns at 1.5 -> 5 columns reading 0,0,1,2,2; 1 row -> 2 rows
    let text = service.render(&request("stripe")).unwrap();
    assert_eq!(text, "▓▓▓▓░░▓▓▓▓\n▓▓▓▓░░▓▓▓▓\n");
}

#[test]
fn test_palette_swap_onto_custom_palette() {
    let config = AppConfig::from_yaml(CONFIG_YAML).unwrap();
    let service = PreviewService::new(config).unwrap();

    // ember is dark red, orange, yellow: index 0 dark, index 1 light
    let text = service
        .render(&PreviewRequest {
            palette: Some("ember".to_string()),
            scale: Some(1.0),
            ..request("checker")
        })
        .unwrap();
    assert_eq!(text, "▓▓░░\n░░▓▓\n");
}

#[test]
fn test_ansi_preview_rows() {
    let config = AppConfig::from_yaml(CONFIG_YAML).unwrap();
    let service = PreviewService::new(config).unwrap();

    let text = service
        .render(&PreviewRequest {
            scale: Some(1.0),
            style: PreviewStyle::Ansi,
            ..request("checker")
        })
        .unwrap();

    let black = "\x1b[48;2;0;0;0m  ";
    let white = "\x1b[48;2;255;255;255m  ";
    let expected = format!("{black}{white}\x1b[0m\n{white}{black}\x1b[0m\n");
    assert_eq!(text, expected);
}

#[test]
fn test_unknown_names_are_reported() {
    let service = PreviewService::new(AppConfig::default()).unwrap();

    let error = service.render(&request("castle")).unwrap_err();
    assert!(matches!(error, PreviewError::UnknownTile(_)));
    assert_eq!(error.to_string(), "Unknown tile: castle");

    let error = service
        .render(&PreviewRequest {
            palette: Some("Nope16".to_string()),
            ..request("frame")
        })
        .unwrap_err();
    assert_eq!(error.to_string(), "Unknown palette: Nope16");
}

#[test]
fn test_negative_scale_is_rejected() {
    let service = PreviewService::new(AppConfig::default()).unwrap();
    let error = service
        .render(&PreviewRequest {
            scale: Some(-2.0),
            ..request("frame")
        })
        .unwrap_err();
    assert_eq!(
        error.to_string(),
        "Raster error: scale factor must be positive and finite, got -2"
    );
}

#[test]
fn test_huge_scale_is_an_error_not_a_panic() {
    let service = PreviewService::new(AppConfig::default()).unwrap();
    for style in [PreviewStyle::Blocks, PreviewStyle::Ansi] {
        let error = service
            .render(&PreviewRequest {
                scale: Some(1e9),
                style,
                ..request("frame")
            })
            .unwrap_err();
        assert!(matches!(error, PreviewError::TooLarge { .. }));
        assert!(error.to_string().starts_with("Preview too large:"));
    }
}
