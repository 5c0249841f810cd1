// src/analysis/pipeline.rs

//! End-to-end orchestration: classify, label, aggregate, rank, report.
//!
//! The driver mirrors the stock analysis run over a city map: threshold the
//! image, label the mask, write an ascending-id summary and a
//! descending-size summary, and render a highlight mask for the largest
//! components. Summary write failures are recovered locally; the in-memory
//! results stay valid and the highlight is still produced.

use std::path::PathBuf;

use tracing::warn;

use crate::analysis::classify::{ColorClass, classify};
use crate::analysis::components::{
    ComponentTable, RankedComponentList, aggregate, rank_by_id_ascending,
    rank_by_size_descending, top_k,
};
use crate::analysis::label::label;
use crate::analysis::report::{render_highlight, write_summary_file};
use crate::image::formats::{LabelGrid, Mask, Pixmap};
use crate::utils::error::{RegionError, Result};

/// Parameters for a full analysis run.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Color criterion for classification.
    pub class: ColorClass,
    pub upper_threshold: u8,
    pub lower_threshold: u8,
    /// How many of the largest components the highlight mask selects.
    pub top_k: usize,
    /// Destination of the ascending-id summary.
    pub summary_by_id: PathBuf,
    /// Destination of the descending-size summary.
    pub summary_by_size: PathBuf,
}

impl Default for PipelineConfig {
    /// The stock map-analysis run: red features, thresholds 100/50, and
    /// the two largest components highlighted.
    fn default() -> Self {
        PipelineConfig {
            class: ColorClass::Red,
            upper_threshold: 100,
            lower_threshold: 50,
            top_k: 2,
            summary_by_id: PathBuf::from("cc-output-2a.txt"),
            summary_by_size: PathBuf::from("cc-output-2b.txt"),
        }
    }
}

/// Everything a full analysis run produces.
///
/// `mask` and `highlight` are binary grids ready for an external image
/// encoder. `sink_failures` holds any summary write errors that were
/// recovered during the run.
#[derive(Debug)]
pub struct PipelineReport {
    pub mask: Mask,
    pub labels: LabelGrid,
    pub table: ComponentTable,
    pub by_id: RankedComponentList,
    pub by_size: RankedComponentList,
    pub highlight: Mask,
    pub sink_failures: Vec<RegionError>,
}

/// Runs the full analysis chain over `image`.
///
/// Fails only on [`RegionError::InvalidImage`], before any labeling work.
/// Summary write failures do not abort the run: each one is logged,
/// collected into the report, and the remaining outputs are still
/// produced.
pub fn run(image: &Pixmap, config: &PipelineConfig) -> Result<PipelineReport> {
    let mask = classify(
        image,
        config.class,
        config.upper_threshold,
        config.lower_threshold,
    )?;
    let labels = label(&mask);
    let table = aggregate(&labels);
    let by_id = rank_by_id_ascending(&table);
    let by_size = rank_by_size_descending(&table);

    let mut sink_failures = Vec::new();
    for (path, ranked) in [
        (&config.summary_by_id, &by_id),
        (&config.summary_by_size, &by_size),
    ] {
        if let Err(err) = write_summary_file(path, ranked) {
            warn!(path = %path.display(), error = %err, "summary write failed, keeping in-memory results");
            sink_failures.push(err);
        }
    }

    let top_ids: Vec<u32> = top_k(&by_size, config.top_k)
        .iter()
        .map(|&(id, _)| id)
        .collect();
    let highlight = render_highlight(&labels, &top_ids);

    Ok(PipelineReport {
        mask,
        labels,
        table,
        by_id,
        by_size,
        highlight,
        sink_failures,
    })
}
