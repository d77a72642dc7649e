//! Two-level images: thresholding, inversion and 180° point reflection.
//!
//! Binarized grids hold exactly `0.0` (ink) and `255.0` (paper). All functions
//! are total and return a fresh grid.
use crate::image::PixelGrid;

/// Paper (light) level of a binarized grid.
pub const LIGHT: f32 = 255.0;
/// Ink (dark) level of a binarized grid.
pub const DARK: f32 = 0.0;

const MIDPOINT: f32 = 127.5;

/// `255` where `v >= t`, else `0`.
pub fn threshold(grid: &PixelGrid, t: f32) -> PixelGrid {
    grid.map(|v| if v >= t { LIGHT } else { DARK })
}

/// Swap ink and paper. Exact involution on integer-valued grids.
pub fn invert(grid: &PixelGrid) -> PixelGrid {
    grid.map(|v| LIGHT - v)
}

/// Point reflection: `out[i][j] = in[rows-1-i][cols-1-j]`.
pub fn flip180(grid: &PixelGrid) -> PixelGrid {
    let mut data = grid.data.clone();
    data.reverse();
    PixelGrid {
        rows: grid.rows,
        cols: grid.cols,
        data,
    }
}

/// Ink test for a binarized pixel.
#[inline]
pub fn is_dark(v: f32) -> bool {
    v < MIDPOINT
}
