//! Row-major raster access shared by the grid-shaped buffers of the crate.
//!
//! Implementors expose only their shape and backing slice; row slicing, row
//! iteration and window queries are derived from those two.
use std::ops::RangeInclusive;
use std::slice::ChunksExact;

pub trait Raster {
    type Sample: Copy;

    /// `(rows, cols)`.
    fn shape(&self) -> (usize, usize);

    /// All samples, row after row.
    fn samples(&self) -> &[Self::Sample];

    #[inline]
    fn row(&self, r: usize) -> &[Self::Sample] {
        let cols = self.shape().1;
        &self.samples()[r * cols..(r + 1) * cols]
    }

    /// Rows from top to bottom.
    fn rows_iter(&self) -> ChunksExact<'_, Self::Sample> {
        self.samples().chunks_exact(self.shape().1.max(1))
    }

    /// True when `pred` holds for every sample of the inclusive window.
    fn window_all(
        &self,
        rows: RangeInclusive<usize>,
        cols: RangeInclusive<usize>,
        mut pred: impl FnMut(Self::Sample) -> bool,
    ) -> bool {
        rows.into_iter()
            .all(|r| self.row(r)[cols.clone()].iter().all(|&s| pred(s)))
    }
}

pub trait RasterMut: Raster {
    fn samples_mut(&mut self) -> &mut [Self::Sample];

    #[inline]
    fn row_mut(&mut self, r: usize) -> &mut [Self::Sample] {
        let cols = self.shape().1;
        &mut self.samples_mut()[r * cols..(r + 1) * cols]
    }
}
