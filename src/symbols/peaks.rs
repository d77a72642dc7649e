//! Thresholded local-maximum extraction with box-shaped non-maximum suppression.
use crate::image::{PixelGrid, Raster};
use serde::Serialize;
use std::cmp::Ordering;

/// A surviving maximum of a score surface.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Peak {
    pub row: usize,
    pub col: usize,
    pub score: f32,
}

/// True if `v` is not exceeded by any 8-neighbour of `(r, c)`.
fn is_local_max(surface: &PixelGrid, r: usize, c: usize, v: f32) -> bool {
    let r0 = r.saturating_sub(1);
    let r1 = (r + 1).min(surface.rows - 1);
    let c0 = c.saturating_sub(1);
    let c1 = (c + 1).min(surface.cols - 1);
    surface.window_all(r0..=r1, c0..=c1, |n| n <= v)
}

/// Find peaks of `surface` scoring at least `min_score`.
///
/// Only pixels at least `margin = (row_margin, col_margin)` away from the
/// border are considered. Candidates are the 3×3 local maxima; they are
/// visited by decreasing score and a candidate is dropped when an already
/// kept peak lies within the `window = (rows, cols)` box around it, so two
/// kept peaks are never closer than the window in both axes. Equal scores are
/// visited in raster order. The result is sorted in raster order.
pub fn extract_peaks(
    surface: &PixelGrid,
    window: (usize, usize),
    margin: (usize, usize),
    min_score: f32,
) -> Vec<Peak> {
    let (my, mx) = margin;
    if surface.rows <= 2 * my || surface.cols <= 2 * mx {
        return Vec::new();
    }

    let mut candidates = Vec::new();
    for r in my..surface.rows - my {
        let row = surface.row(r);
        for c in mx..surface.cols - mx {
            let v = row[c];
            if v >= min_score && is_local_max(surface, r, c, v) {
                candidates.push(Peak { row: r, col: c, score: v });
            }
        }
    }

    candidates.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(Ordering::Equal)
            .then(a.row.cmp(&b.row))
            .then(a.col.cmp(&b.col))
    });

    let (wy, wx) = (window.0.max(1), window.1.max(1));
    let mut kept: Vec<Peak> = Vec::new();
    for cand in candidates {
        let suppressed = kept
            .iter()
            .any(|k| k.row.abs_diff(cand.row) < wy && k.col.abs_diff(cand.col) < wx);
        if !suppressed {
            kept.push(cand);
        }
    }

    kept.sort_by(|a, b| a.row.cmp(&b.row).then(a.col.cmp(&b.col)));
    kept
}
