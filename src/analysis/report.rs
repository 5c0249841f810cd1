// src/analysis/report.rs

//! Rendering of ranked component summaries and highlight masks.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::image::formats::{LabelGrid, Mask};
use crate::utils::error::{RegionError, Result};

/// Writes one line per component followed by a total line:
///
/// ```text
/// Connected Component 1, number of pixels = 320
/// Connected Component 2, number of pixels = 17
/// Total number of connected components = 2
/// ```
pub fn write_summary<W: Write>(sink: &mut W, ranked: &[(u32, usize)]) -> io::Result<()> {
    for &(id, count) in ranked {
        writeln!(sink, "Connected Component {}, number of pixels = {}", id, count)?;
    }
    writeln!(sink, "Total number of connected components = {}", ranked.len())?;
    Ok(())
}

/// Writes a component summary to a file.
///
/// Open or write failure maps to [`RegionError::Sink`]; callers are
/// expected to recover locally since the in-memory results stay valid.
pub fn write_summary_file<P: AsRef<Path>>(path: P, ranked: &[(u32, usize)]) -> Result<()> {
    let path = path.as_ref();
    let sink_err = |source| RegionError::Sink {
        path: path.to_path_buf(),
        source,
    };

    let mut sink = BufWriter::new(File::create(path).map_err(sink_err)?);
    write_summary(&mut sink, ranked).map_err(sink_err)?;
    sink.flush().map_err(sink_err)?;
    Ok(())
}

/// Renders a mask highlighting the given components: cells whose label is
/// in `top_ids` become [`Mask::FOREGROUND`], all others background.
///
/// The result has the grid's dimensions and is handed to an external image
/// encoder for persistence.
pub fn render_highlight(labels: &LabelGrid, top_ids: &[u32]) -> Mask {
    let (width, height) = labels.dimensions();
    let mut mask = Mask::new(width, height);
    for (cell, &id) in mask.as_raw_mut().iter_mut().zip(labels.labels()) {
        if id != 0 && top_ids.contains(&id) {
            *cell = Mask::FOREGROUND;
        }
    }
    mask
}
