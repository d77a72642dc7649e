//! Separable convolution: a horizontal 1D pass followed by a vertical one.
//!
//! Equivalent (up to rounding) to [`convolve_general`](super::convolve_general)
//! with the outer-product kernel `col * rowᵀ`, at `O(k)` instead of `O(k²)`
//! per pixel.
use super::general::check_fits;
use super::{fill_rows, gaussian_taps};
use crate::error::{DetectError, DetectResult};
use crate::image::{PixelGrid, Raster, RasterMut};

/// Anything that can supply odd-length 1D taps.
pub trait SeparableFilter {
    /// Taps in left-to-right (or top-to-bottom) order.
    fn taps(&self) -> &[f32];
}

impl SeparableFilter for [f32] {
    #[inline]
    fn taps(&self) -> &[f32] {
        self
    }
}

impl SeparableFilter for Vec<f32> {
    #[inline]
    fn taps(&self) -> &[f32] {
        self
    }
}

/// Wrapper around a static tap table.
#[derive(Clone, Copy, Debug)]
pub struct StaticSeparableFilter {
    taps: &'static [f32],
}

impl StaticSeparableFilter {
    pub const fn new(taps: &'static [f32]) -> Self {
        Self { taps }
    }
}

impl SeparableFilter for StaticSeparableFilter {
    #[inline]
    fn taps(&self) -> &[f32] {
        self.taps
    }
}

/// Sobel smoothing taps `[1, 2, 1]`.
pub const SOBEL_SMOOTH: StaticSeparableFilter = StaticSeparableFilter::new(&[1.0, 2.0, 1.0]);
/// Sobel derivative taps, stored flipped so that convolution yields a
/// positive response for intensity increasing along the axis.
pub const SOBEL_DIFF: StaticSeparableFilter = StaticSeparableFilter::new(&[1.0, 0.0, -1.0]);

fn check_taps(what: &'static str, taps: &[f32]) -> DetectResult<()> {
    if taps.is_empty() || taps.len() % 2 == 0 {
        return Err(DetectError::configuration(
            what,
            format!("tap count must be odd, got {}", taps.len()),
        ));
    }
    Ok(())
}

/// Convolve with `row` along columns, then with `col` along rows.
pub fn convolve_separable<R, C>(grid: &PixelGrid, row: &R, col: &C) -> DetectResult<PixelGrid>
where
    R: SeparableFilter + ?Sized,
    C: SeparableFilter + ?Sized,
{
    let (row_taps, col_taps) = (row.taps(), col.taps());
    check_taps("row filter", row_taps)?;
    check_taps("column filter", col_taps)?;
    check_fits("separable kernel", col_taps.len(), row_taps.len(), grid)?;

    let rx = row_taps.len() / 2;
    let ry = col_taps.len() / 2;
    let (rows, cols) = (grid.rows, grid.cols);

    let mut horiz = PixelGrid::new(rows, cols);
    fill_rows(&mut horiz, |i, dst| {
        let src = grid.row(i);
        for (j, px) in dst.iter_mut().enumerate().take(cols - rx).skip(rx) {
            *px = row_taps
                .iter()
                .enumerate()
                .map(|(b, &w)| w * src[j + rx - b])
                .sum();
        }
    });

    let mut out = PixelGrid::new(rows, cols);
    fill_rows(&mut out, |i, dst| {
        if i < ry || i + ry >= rows {
            return;
        }
        for (a, &w) in col_taps.iter().enumerate() {
            let src = horiz.row(i + ry - a);
            for j in rx..cols - rx {
                dst[j] += w * src[j];
            }
        }
    });

    Ok(out)
}

/// Gaussian blur that keeps the source values in the unreliable border band,
/// so downstream thresholding does not see a dark frame.
pub fn smooth(grid: &PixelGrid, size: usize, sigma: f32) -> DetectResult<PixelGrid> {
    let taps = gaussian_taps(size, sigma)?;
    let mut out = convolve_separable(grid, &taps, &taps)?;
    let r = size / 2;
    for i in 0..grid.rows {
        let interior_row = i >= r && i + r < grid.rows;
        let src = grid.row(i);
        let dst = out.row_mut(i);
        for j in 0..grid.cols {
            if !interior_row || j < r || j + r >= grid.cols {
                dst[j] = src[j];
            }
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convolve::{convolve_general, Kernel};

    fn ramp(rows: usize, cols: usize) -> PixelGrid {
        PixelGrid::from_fn(rows, cols, |r, c| ((r * 7 + c * 13) % 31) as f32 * 3.5)
    }

    #[test]
    fn separable_matches_general_on_outer_product() {
        let grid = ramp(16, 20);
        let row = [0.25f32, -1.0, 0.5, 2.0, 0.125];
        let col = [1.0f32, 3.0, -2.0];
        let sep = convolve_separable(&grid, &row[..], &col[..]).unwrap();
        let full = convolve_general(&grid, &Kernel::outer(&col, &row).unwrap()).unwrap();
        for (a, b) in sep.data.iter().zip(full.data.iter()) {
            assert!((a - b).abs() < 1e-2, "{a} vs {b}");
        }
    }

    #[test]
    fn smooth_keeps_border_and_constant_interior() {
        let grid = PixelGrid::filled(10, 10, 200.0);
        let out = smooth(&grid, 5, 1.0).unwrap();
        assert_eq!(out.get(0, 0), 200.0);
        assert_eq!(out.get(9, 5), 200.0);
        assert!((out.get(5, 5) - 200.0).abs() < 1e-3);
    }

    #[test]
    fn even_taps_are_rejected() {
        let grid = ramp(8, 8);
        let even = vec![0.5f32, 0.5];
        assert!(convolve_separable(&grid, &even, &SOBEL_SMOOTH).is_err());
    }
}
