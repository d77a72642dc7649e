//! Owned single-channel `f32` pixel grid in row-major layout.
//!
//! Raw input pages hold values in `[0, 255]`; intermediate stages (gradient
//! magnitude, correlation surfaces) may hold any finite value. Dimensions are
//! fixed at construction.
use super::traits::{Raster, RasterMut};
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PixelGrid {
    /// Number of rows (image height)
    pub rows: usize,
    /// Number of columns (image width)
    pub cols: usize,
    /// Row-major backing storage, `rows * cols` values
    #[serde(skip)]
    pub data: Vec<f32>,
}

impl PixelGrid {
    /// Zero-filled grid of `rows × cols`.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self::filled(rows, cols, 0.0)
    }

    pub fn filled(rows: usize, cols: usize, value: f32) -> Self {
        Self {
            rows,
            cols,
            data: vec![value; rows * cols],
        }
    }

    /// Build a grid from a row-major buffer. Returns `None` on a length mismatch.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<f32>) -> Option<Self> {
        (data.len() == rows * cols).then_some(Self { rows, cols, data })
    }

    /// Build a grid by evaluating `f(row, col)` for every pixel.
    pub fn from_fn(rows: usize, cols: usize, mut f: impl FnMut(usize, usize) -> f32) -> Self {
        let mut data = Vec::with_capacity(rows * cols);
        for r in 0..rows {
            for c in 0..cols {
                data.push(f(r, c));
            }
        }
        Self { rows, cols, data }
    }

    #[inline]
    pub fn idx(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.data[self.idx(row, col)]
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, v: f32) {
        let i = self.idx(row, col);
        self.data[i] = v;
    }

    pub fn is_empty(&self) -> bool {
        self.rows == 0 || self.cols == 0
    }

    /// Apply `f` to every pixel, producing a new grid of the same shape.
    pub fn map(&self, f: impl Fn(f32) -> f32) -> Self {
        Self {
            rows: self.rows,
            cols: self.cols,
            data: self.data.iter().map(|&v| f(v)).collect(),
        }
    }

    /// Element-wise combination of two equally sized grids.
    ///
    /// Panics if the shapes differ.
    pub fn zip_map(&self, other: &PixelGrid, f: impl Fn(f32, f32) -> f32) -> Self {
        assert_eq!(
            (self.rows, self.cols),
            (other.rows, other.cols),
            "grid shapes must match"
        );
        Self {
            rows: self.rows,
            cols: self.cols,
            data: self
                .data
                .iter()
                .zip(other.data.iter())
                .map(|(&a, &b)| f(a, b))
                .collect(),
        }
    }

    /// Copy `src` into this grid with its top-left corner at `(row, col)`,
    /// clipping anything that falls outside.
    pub fn paste(&mut self, src: &PixelGrid, row: usize, col: usize) {
        for r in 0..src.rows {
            let dst_r = row + r;
            if dst_r >= self.rows {
                break;
            }
            for c in 0..src.cols {
                let dst_c = col + c;
                if dst_c >= self.cols {
                    break;
                }
                self.set(dst_r, dst_c, src.get(r, c));
            }
        }
    }
}

impl std::ops::Add for &PixelGrid {
    type Output = PixelGrid;

    fn add(self, rhs: &PixelGrid) -> PixelGrid {
        self.zip_map(rhs, |a, b| a + b)
    }
}

impl Raster for PixelGrid {
    type Sample = f32;

    #[inline]
    fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    #[inline]
    fn samples(&self) -> &[f32] {
        &self.data
    }
}

impl RasterMut for PixelGrid {
    #[inline]
    fn samples_mut(&mut self) -> &mut [f32] {
        &mut self.data
    }
}
