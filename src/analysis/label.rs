// src/analysis/label.rs

//! Flood-fill labeling of 8-connected foreground regions.
//!
//! A single raster scan discovers regions; each one is grown breadth-first
//! from its first pixel before the scan resumes. This keeps id assignment
//! deterministic: ids start at 1 and increase strictly in the order regions
//! are first encountered, so relabeling the same mask always reproduces the
//! same grid.

use std::collections::VecDeque;

use tracing::debug;

use crate::analysis::neighbors::neighbors;
use crate::image::formats::{LabelGrid, Mask};

/// Labels every 8-connected foreground region of `mask` with a unique
/// positive id; background cells stay 0.
///
/// Each cell is written at most once (its transition from 0 to an id), and
/// enqueued at most once right after that write, so total work is
/// O(width x height). Queue exhaustion is the normal end of a region, not
/// an error.
pub fn label(mask: &Mask) -> LabelGrid {
    let (width, height) = mask.dimensions();
    let mut labels = LabelGrid::new(width, height);
    let mut queue: VecDeque<(u32, u32)> = VecDeque::new();
    let mut next_id: u32 = 1;

    for y in 0..height {
        for x in 0..width {
            if !mask.is_foreground(x, y) || labels.get(x, y) != 0 {
                continue;
            }

            // New region: claim the seed pixel, then grow breadth-first.
            labels.set(x, y, next_id);
            queue.push_back((x, y));
            while let Some((cx, cy)) = queue.pop_front() {
                for (nx, ny) in neighbors(width, height, cx, cy) {
                    if mask.is_foreground(nx, ny) && labels.get(nx, ny) == 0 {
                        labels.set(nx, ny, next_id);
                        queue.push_back((nx, ny));
                    }
                }
            }
            next_id += 1;
        }
    }

    debug!(components = next_id - 1, "flood fill complete");
    labels
}
