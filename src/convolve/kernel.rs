//! Immutable odd-dimensioned convolution kernels.
use crate::error::{DetectError, DetectResult};
use crate::image::PixelGrid;
use nalgebra::{DMatrix, DVector, RowDVector};

/// Small real-valued kernel with odd row and column counts.
#[derive(Clone, Debug, PartialEq)]
pub struct Kernel {
    weights: DMatrix<f32>,
}

fn check_odd(what: &'static str, rows: usize, cols: usize) -> DetectResult<()> {
    if rows == 0 || cols == 0 {
        return Err(DetectError::configuration(what, "dimensions must be non-zero"));
    }
    if rows % 2 == 0 || cols % 2 == 0 {
        return Err(DetectError::configuration(
            what,
            format!("dimensions must be odd, got {rows}x{cols}"),
        ));
    }
    Ok(())
}

impl Kernel {
    /// Wrap a weight matrix, rejecting even or empty shapes.
    pub fn new(weights: DMatrix<f32>) -> DetectResult<Self> {
        check_odd("kernel", weights.nrows(), weights.ncols())?;
        Ok(Self { weights })
    }

    /// Build from row-major weights.
    pub fn from_row_slice(rows: usize, cols: usize, weights: &[f32]) -> DetectResult<Self> {
        if weights.len() != rows * cols {
            return Err(DetectError::configuration(
                "kernel",
                format!("expected {} weights, got {}", rows * cols, weights.len()),
            ));
        }
        Self::new(DMatrix::from_row_slice(rows, cols, weights))
    }

    /// Use a pixel grid (e.g. a binarized template) as kernel weights.
    pub fn from_grid(grid: &PixelGrid) -> DetectResult<Self> {
        check_odd("kernel", grid.rows, grid.cols)?;
        Ok(Self {
            weights: DMatrix::from_fn(grid.rows, grid.cols, |r, c| grid.get(r, c)),
        })
    }

    /// Outer product `col * rowᵀ` of two 1D tap vectors.
    pub fn outer(col: &[f32], row: &[f32]) -> DetectResult<Self> {
        let c = DVector::from_column_slice(col);
        let r = RowDVector::from_row_slice(row);
        Self::new(c * r)
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.weights.nrows()
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.weights.ncols()
    }

    /// Half-sizes `(row_radius, col_radius)`.
    #[inline]
    pub fn radius(&self) -> (usize, usize) {
        (self.rows() / 2, self.cols() / 2)
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.weights[(row, col)]
    }

    pub fn sum(&self) -> f32 {
        self.weights.sum()
    }
}

fn check_gaussian(size: usize, sigma: f32) -> DetectResult<()> {
    check_odd("gaussian kernel", size, size)?;
    if !(sigma > 0.0 && sigma.is_finite()) {
        return Err(DetectError::configuration(
            "gaussian kernel",
            format!("sigma must be positive, got {sigma}"),
        ));
    }
    Ok(())
}

/// `size × size` Gaussian with entries `exp(-r²/2σ²) / 2πσ²`, renormalized
/// to sum to one.
pub fn gaussian_kernel(size: usize, sigma: f32) -> DetectResult<Kernel> {
    check_gaussian(size, sigma)?;
    let half = (size / 2) as f64;
    let s = 2.0 * (sigma as f64) * (sigma as f64);
    let raw = DMatrix::<f64>::from_fn(size, size, |r, c| {
        let dy = r as f64 - half;
        let dx = c as f64 - half;
        (-(dx * dx + dy * dy) / s).exp() / (std::f64::consts::PI * s)
    });
    let sum = raw.sum();
    Ok(Kernel {
        weights: raw.map(|w| (w / sum) as f32),
    })
}

/// Normalized 1D Gaussian taps; the outer product of two of these equals
/// [`gaussian_kernel`] with the same parameters.
pub fn gaussian_taps(size: usize, sigma: f32) -> DetectResult<Vec<f32>> {
    check_gaussian(size, sigma)?;
    let half = (size / 2) as f64;
    let s = 2.0 * (sigma as f64) * (sigma as f64);
    let raw: Vec<f64> = (0..size)
        .map(|i| {
            let d = i as f64 - half;
            (-(d * d) / s).exp()
        })
        .collect();
    let sum: f64 = raw.iter().sum();
    Ok(raw.into_iter().map(|w| (w / sum) as f32).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gaussian_sums_to_one() {
        for &(size, sigma) in &[(3usize, 0.5f32), (5, 1.0), (7, 2.5), (11, 0.8)] {
            let k = gaussian_kernel(size, sigma).unwrap();
            assert!(
                (k.sum() - 1.0).abs() < 1e-5,
                "size={size} sigma={sigma} sum={}",
                k.sum()
            );
        }
    }

    #[test]
    fn gaussian_is_symmetric_and_peaked() {
        let k = gaussian_kernel(5, 1.0).unwrap();
        assert_eq!(k.get(0, 1), k.get(1, 0));
        assert_eq!(k.get(0, 0), k.get(4, 4));
        assert!(k.get(2, 2) > k.get(2, 1));
    }

    #[test]
    fn even_or_degenerate_gaussian_is_rejected() {
        assert!(matches!(
            gaussian_kernel(4, 1.0),
            Err(DetectError::Configuration { .. })
        ));
        assert!(gaussian_kernel(5, 0.0).is_err());
        assert!(gaussian_taps(5, -1.0).is_err());
    }

    #[test]
    fn outer_product_of_taps_matches_gaussian_kernel() {
        let taps = gaussian_taps(5, 1.2).unwrap();
        let sep = Kernel::outer(&taps, &taps).unwrap();
        let full = gaussian_kernel(5, 1.2).unwrap();
        for r in 0..5 {
            for c in 0..5 {
                assert!((sep.get(r, c) - full.get(r, c)).abs() < 1e-6);
            }
        }
    }
}
