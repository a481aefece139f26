//! End-to-end tests for the generate command.

mod common;

use common::{test_config, Workspace};
use palette_engine::{FrequencyOrder, DEFAULT_PALETTE_SIZE};
use palettize::error::AppError;
use palettize::models::{PaletteFile, RunConfig};
use palettize::services::{load_palette, run_convert, run_generate};
use pretty_assertions::assert_eq;

const RED: [u8; 3] = [0xff, 0, 0];
const GREEN: [u8; 3] = [0, 0xff, 0];

fn read_palette_file(path: &std::path::Path) -> PaletteFile {
    let text = std::fs::read_to_string(path).unwrap();
    serde_json::from_str(&text).unwrap()
}

#[test]
fn test_generate_most_used_first() {
    let ws = Workspace::new();
    let image = ws.png("in.png", &[&[RED, RED], &[GREEN, RED]]);
    let out = ws.path("palette.json");

    run_generate(&out, &image, FrequencyOrder::Descending, &test_config()).unwrap();

    assert_eq!(read_palette_file(&out).colors, vec!["#ff0000", "#00ff00"]);
}

#[test]
fn test_generate_least_used_first() {
    let ws = Workspace::new();
    let image = ws.png("in.png", &[&[RED, RED], &[GREEN, RED]]);
    let out = ws.path("palette.json");

    run_generate(&out, &image, FrequencyOrder::Ascending, &test_config()).unwrap();

    assert_eq!(read_palette_file(&out).colors, vec!["#00ff00", "#ff0000"]);
}

#[test]
fn test_generate_writes_capitalized_key() {
    let ws = Workspace::new();
    let image = ws.png("in.png", &[&[RED]]);
    let out = ws.path("palette.json");

    run_generate(&out, &image, FrequencyOrder::Descending, &test_config()).unwrap();

    let text = std::fs::read_to_string(&out).unwrap();
    assert!(text.contains("\"Colors\""), "unexpected document: {text}");
    assert!(text.ends_with('\n'));
}

#[test]
fn test_generate_caps_at_default_size() {
    let ws = Workspace::new();
    let row: Vec<[u8; 3]> = (0..40u8).map(|i| [i * 6, 255 - i, i]).collect();
    let image = ws.png("in.png", &[row.as_slice(), row.as_slice()]);
    let out = ws.path("palette.json");

    run_generate(&out, &image, FrequencyOrder::Descending, &test_config()).unwrap();

    assert_eq!(read_palette_file(&out).colors.len(), DEFAULT_PALETTE_SIZE);
}

#[test]
fn test_generate_respects_configured_size() {
    let ws = Workspace::new();
    let row: Vec<[u8; 3]> = (0..10u8).map(|i| [i, i, i]).collect();
    let image = ws.png("in.png", &[row.as_slice()]);
    let out = ws.path("palette.json");

    let config = RunConfig::new(Some(3), Some(4));
    run_generate(&out, &image, FrequencyOrder::Descending, &config).unwrap();

    assert_eq!(read_palette_file(&out).colors.len(), 4);
}

#[test]
fn test_generate_fewer_colors_than_cap() {
    let ws = Workspace::new();
    let image = ws.png("in.png", &[&[RED, GREEN, [0, 0, 0xff]]]);
    let out = ws.path("palette.json");

    run_generate(&out, &image, FrequencyOrder::Ascending, &test_config()).unwrap();

    // Equal counts keep first-seen order
    assert_eq!(
        read_palette_file(&out).colors,
        vec!["#ff0000", "#00ff00", "#0000ff"]
    );
}

#[test]
fn test_generate_16bit_shades_become_one_entry() {
    let ws = Workspace::new();
    let image = ws.png16("deep.png", &[&[[0x1200, 0, 0], [0x12ff, 0, 0], [0xff00, 0, 0]]]);
    let out = ws.path("palette.json");

    run_generate(&out, &image, FrequencyOrder::Descending, &test_config()).unwrap();

    assert_eq!(read_palette_file(&out).colors, vec!["#120000", "#ff0000"]);
}

#[test]
fn test_generated_palette_feeds_convert() {
    let ws = Workspace::new();
    let image = ws.png("in.png", &[&[RED, RED], &[GREEN, RED]]);
    let palette = ws.path("palette.json");
    let output = ws.path("out.jpg");

    run_generate(&palette, &image, FrequencyOrder::Descending, &test_config()).unwrap();
    assert_eq!(load_palette(&palette).unwrap().len(), 2);

    run_convert(&palette, &image, &output, &test_config()).unwrap();
    assert!(output.exists());
}

#[test]
fn test_generate_missing_image_leaves_no_palette() {
    let ws = Workspace::new();
    let image = ws.path("missing.png");
    let out = ws.path("palette.json");

    let err = run_generate(&out, &image, FrequencyOrder::Descending, &test_config()).unwrap_err();
    assert!(matches!(err, AppError::FileOpen { .. }));
    assert!(!out.exists());
    assert!(ws.entries().is_empty());
}
