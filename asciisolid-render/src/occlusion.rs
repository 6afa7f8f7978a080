//! Depth occlusion over the sparse set of occupied cells
//!
//! Far more samples than cells reach the canvas, so most cells are claimed by
//! several samples. Samples are grouped by cell and each group keeps only the
//! sample nearest the viewer (largest depth along the projection normal).
//! This is a z-buffer reduction done as group-by and argmax rather than over a
//! dense raster.

use crate::raster::Cell;
use rayon::prelude::*;
use std::collections::HashMap;

/// A projected sample after window fitting
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RasterSample {
    pub cell: Cell,
    pub depth: f64,
}

/// Group sample indices by cell key.
///
/// Built in a single pass; each group lists its indices in input order.
pub fn group_by_cell(samples: &[RasterSample]) -> HashMap<u64, Vec<usize>> {
    let mut groups: HashMap<u64, Vec<usize>> = HashMap::new();
    for (idx, sample) in samples.iter().enumerate() {
        groups.entry(sample.cell.key()).or_default().push(idx);
    }
    groups
}

/// Index of the nearest sample in a group. Equal depths keep the first one.
fn nearest(group: &[usize], samples: &[RasterSample]) -> usize {
    let mut best = group[0];
    for &idx in &group[1..] {
        if samples[idx].depth > samples[best].depth {
            best = idx;
        }
    }
    best
}

/// Resolve occlusion, returning the index of the one visible sample per
/// occupied cell.
///
/// The result is ordered by cell key (column-major), which makes it
/// independent of hash iteration order and of the thread count.
pub fn resolve_occlusion(samples: &[RasterSample]) -> Vec<usize> {
    let groups = group_by_cell(samples);

    let mut survivors: Vec<(u64, usize)> = groups
        .par_iter()
        .map(|(key, group)| (*key, nearest(group, samples)))
        .collect();
    survivors.par_sort_unstable_by_key(|(key, _)| *key);

    survivors.into_iter().map(|(_, idx)| idx).collect()
}
