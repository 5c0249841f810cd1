//! End-to-end pipeline tests over synthetic map imagery, including the
//! external decode/encode collaborators (the `image` crate) at the crate
//! boundary.

use std::fs;

use regionscan::{ColorClass, PipelineConfig, Pixel, Pixmap};

/// A 16x8 map: a large red block, a smaller red block, a single red
/// speck, and a cyan block that must not classify as red.
fn synthetic_map() -> Pixmap {
    Pixmap::from_fn(16, 8, |x, y| {
        if (2..6).contains(&x) && (1..5).contains(&y) {
            Pixel::rgb(220, 10, 10) // 4x4 red block, 16 px
        } else if (9..11).contains(&x) && (2..4).contains(&y) {
            Pixel::rgb(180, 0, 0) // 2x2 red block, 4 px
        } else if x == 13 && y == 6 {
            Pixel::rgb(255, 0, 0) // lone red speck
        } else if (0..3).contains(&x) && (6..8).contains(&y) {
            Pixel::rgb(0, 200, 220) // cyan block
        } else {
            Pixel::white()
        }
    })
}

#[test]
fn test_full_run_writes_both_summaries() {
    let dir = tempfile::tempdir().unwrap();
    let config = PipelineConfig {
        summary_by_id: dir.path().join("cc-output-2a.txt"),
        summary_by_size: dir.path().join("cc-output-2b.txt"),
        ..PipelineConfig::default()
    };

    let report = regionscan::run(&synthetic_map(), &config).unwrap();
    assert!(report.sink_failures.is_empty());
    assert_eq!(report.by_id, vec![(1, 16), (2, 4), (3, 1)]);
    assert_eq!(report.by_size, vec![(1, 16), (2, 4), (3, 1)]);

    let by_id = fs::read_to_string(&config.summary_by_id).unwrap();
    assert_eq!(
        by_id,
        "Connected Component 1, number of pixels = 16\n\
         Connected Component 2, number of pixels = 4\n\
         Connected Component 3, number of pixels = 1\n\
         Total number of connected components = 3\n"
    );

    let by_size = fs::read_to_string(&config.summary_by_size).unwrap();
    assert!(by_size.starts_with("Connected Component 1, number of pixels = 16\n"));
    assert!(by_size.ends_with("Total number of connected components = 3\n"));
}

#[test]
fn test_highlight_selects_the_two_largest_components() {
    let dir = tempfile::tempdir().unwrap();
    let config = PipelineConfig {
        summary_by_id: dir.path().join("2a.txt"),
        summary_by_size: dir.path().join("2b.txt"),
        ..PipelineConfig::default()
    };

    let report = regionscan::run(&synthetic_map(), &config).unwrap();
    // The speck (component 3, 1 px) is excluded from the top 2.
    assert_eq!(report.highlight.count_foreground(), 20);
    assert_eq!(report.highlight.get(13, 6), 0);
    assert_eq!(report.highlight.get(2, 1), 255);
    assert_eq!(report.highlight.get(9, 2), 255);
}

#[test]
fn test_highlight_survives_png_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let config = PipelineConfig {
        summary_by_id: dir.path().join("2a.txt"),
        summary_by_size: dir.path().join("2b.txt"),
        ..PipelineConfig::default()
    };
    let report = regionscan::run(&synthetic_map(), &config).unwrap();

    // Hand the binary mask to the external encoder, then decode it back.
    let (width, height) = report.highlight.dimensions();
    let encoded =
        image::GrayImage::from_raw(width, height, report.highlight.as_raw().to_vec()).unwrap();
    let png_path = dir.path().join("cc-top-2.png");
    encoded.save(&png_path).unwrap();

    let decoded = image::open(&png_path).unwrap().to_luma8();
    assert_eq!(decoded.dimensions(), (width, height));
    assert_eq!(decoded.as_raw().as_slice(), report.highlight.as_raw());
}

#[test]
fn test_pixmap_from_decoded_rgba_bytes() {
    // Decode path: an RGBA buffer as produced by an external decoder.
    let rgba = image::RgbaImage::from_fn(4, 4, |x, _| {
        if x == 0 {
            image::Rgba([200, 0, 0, 255])
        } else {
            image::Rgba([255, 255, 255, 255])
        }
    });

    let pixmap = Pixmap::from_raw(4, 4, 4, rgba.as_raw()).unwrap();
    let mask = regionscan::classify(&pixmap, ColorClass::Red, 100, 50).unwrap();
    assert_eq!(mask.count_foreground(), 4);

    let labels = regionscan::label(&mask);
    let table = regionscan::aggregate(&labels);
    assert_eq!(regionscan::rank_by_id_ascending(&table), vec![(1, 4)]);
}

#[test]
fn test_cyan_run_over_the_same_map() {
    let dir = tempfile::tempdir().unwrap();
    let config = PipelineConfig {
        class: ColorClass::Cyan,
        summary_by_id: dir.path().join("2a.txt"),
        summary_by_size: dir.path().join("2b.txt"),
        ..PipelineConfig::default()
    };

    let report = regionscan::run(&synthetic_map(), &config).unwrap();
    assert_eq!(report.by_id, vec![(1, 6)]);
    assert_eq!(report.highlight.count_foreground(), 6);
}
