// src/analysis/components.rs

//! Per-component pixel tallies and explicit ranking.
//!
//! A `HashMap` tally has no meaningful iteration order, so ordering is
//! always imposed here as a separate step: ascending by id, or descending
//! by size with ties broken deterministically.

use std::collections::HashMap;

use crate::image::formats::LabelGrid;

/// Mapping from component id to pixel count.
pub type ComponentTable = HashMap<u32, usize>;

/// An explicitly ordered sequence of (id, pixel count) pairs.
pub type RankedComponentList = Vec<(u32, usize)>;

/// Tallies label occurrences into a component table.
///
/// The sum of the counts equals the number of foreground cells in the mask
/// the grid was labeled from.
pub fn aggregate(labels: &LabelGrid) -> ComponentTable {
    let mut table = ComponentTable::new();
    for &id in labels.labels() {
        if id != 0 {
            *table.entry(id).or_insert(0) += 1;
        }
    }
    table
}

/// Orders the table ascending by component id.
pub fn rank_by_id_ascending(table: &ComponentTable) -> RankedComponentList {
    let mut ranked: RankedComponentList =
        table.iter().map(|(&id, &count)| (id, count)).collect();
    ranked.sort_by_key(|&(id, _)| id);
    ranked
}

/// Orders the table descending by pixel count.
///
/// Sorting starts from the ascending-id enumeration and `sort_by` is
/// stable, so equal counts keep ascending-id order. Tie-breaking is
/// therefore deterministic and reproducible.
pub fn rank_by_size_descending(table: &ComponentTable) -> RankedComponentList {
    let mut ranked = rank_by_id_ascending(table);
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked
}

/// The first `k` entries of a ranking, or fewer if the list is shorter.
pub fn top_k(ranked: &[(u32, usize)], k: usize) -> RankedComponentList {
    ranked.iter().take(k).copied().collect()
}
