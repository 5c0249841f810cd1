//! A Rust library for connected-component analysis of color map imagery.
//!
//! This crate classifies pixels by per-channel color thresholds into a
//! binary mask, labels 8-connected foreground regions via breadth-first
//! flood fill, aggregates and ranks component sizes, and reports the
//! results as text summaries plus a highlight mask for the largest
//! components.
//!
//! # Quick Start
//!
//! ```
//! use regionscan::{ColorClass, Pixel, Pixmap};
//!
//! // A 4x4 map with a red feature in the top-left corner.
//! let image = Pixmap::from_fn(4, 4, |x, y| {
//!     if x < 2 && y < 2 { Pixel::rgb(200, 0, 0) } else { Pixel::white() }
//! });
//!
//! let mask = regionscan::classify(&image, ColorClass::Red, 100, 50)?;
//! let labels = regionscan::label(&mask);
//! let table = regionscan::aggregate(&labels);
//!
//! let ranked = regionscan::rank_by_size_descending(&table);
//! assert_eq!(ranked, vec![(1, 4)]);
//!
//! let mut summary = Vec::new();
//! regionscan::write_summary(&mut summary, &ranked)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Scope
//!
//! Image decoding and encoding are external collaborators: build a
//! [`Pixmap`] from decoded bytes with [`Pixmap::from_raw`], and hand
//! [`Mask::as_raw`] to your encoder. The optional `rayon` feature
//! parallelizes classification of large images.

// Core modules
pub mod analysis;
pub mod image;
pub mod utils;

// Analysis entry points
pub use analysis::classify::{ColorClass, classify};
pub use analysis::components::{
    ComponentTable, RankedComponentList, aggregate, rank_by_id_ascending,
    rank_by_size_descending, top_k,
};
pub use analysis::label::label;
pub use analysis::neighbors::neighbors;
pub use analysis::pipeline::{PipelineConfig, PipelineReport, run};
pub use analysis::report::{render_highlight, write_summary, write_summary_file};

// Image types
pub use image::formats::{LabelGrid, Mask, Pixel, Pixmap};

// Error types
pub use utils::error::{RegionError, Result};

// Constants
pub const REGIONSCAN_VERSION: &str = "0.3.0";
