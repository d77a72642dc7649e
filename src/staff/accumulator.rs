//! Dense vote storage indexed directly by `(top_row, spacing)`.
use super::options::StaffOptions;
use crate::binarize::is_dark;
use crate::image::PixelGrid;

/// Two dense `u32` planes: tolerant votes (±tolerance rows) and exact votes
/// (zero tolerance). Row `i`, spacing `h` lives at `i * stride + h`; spacing
/// column 0 is never used.
#[derive(Clone, Debug)]
pub struct AccumulatorSpace {
    row_count: usize,
    max_spacing: usize,
    tolerant: Vec<u32>,
    exact: Vec<u32>,
}

/// Per-pixel ink flags plus their vertical dilation by the line tolerance.
struct InkMasks {
    cols: usize,
    exact: Vec<bool>,
    near: Vec<bool>,
}

impl InkMasks {
    fn build(binary: &PixelGrid, tolerance: usize) -> Self {
        let (rows, cols) = (binary.rows, binary.cols);
        let exact: Vec<bool> = binary.data.iter().map(|&v| is_dark(v)).collect();
        let mut near = vec![false; rows * cols];
        for r in 0..rows {
            let lo = r.saturating_sub(tolerance);
            let hi = (r + tolerance).min(rows - 1);
            let dst = &mut near[r * cols..(r + 1) * cols];
            for rr in lo..=hi {
                let src = &exact[rr * cols..(rr + 1) * cols];
                for (d, &s) in dst.iter_mut().zip(src) {
                    *d |= s;
                }
            }
        }
        Self { cols, exact, near }
    }

    #[inline]
    fn row<'a>(&self, plane: &'a [bool], r: usize) -> &'a [bool] {
        &plane[r * self.cols..(r + 1) * self.cols]
    }
}

impl AccumulatorSpace {
    /// Allocate an empty space for a `rows`-row page.
    pub fn new(rows: usize, options: &StaffOptions) -> Self {
        let row_count = rows.saturating_sub(options.row_margin);
        let max_spacing = options.max_spacing(rows);
        let len = row_count * (max_spacing + 1);
        Self {
            row_count,
            max_spacing,
            tolerant: vec![0; len],
            exact: vec![0; len],
        }
    }

    /// Cast all column votes for a binarized page.
    pub fn vote(binary: &PixelGrid, options: &StaffOptions) -> Self {
        let mut space = Self::new(binary.rows, options);
        if binary.is_empty() || space.row_count == 0 || space.max_spacing == 0 {
            return space;
        }
        let masks = InkMasks::build(binary, options.line_tolerance);
        let stride = space.stride();
        let rows = binary.rows;
        let max_spacing = space.max_spacing;

        let vote_row = |i: usize, tolerant: &mut [u32], exact: &mut [u32]| {
            for h in 1..=max_spacing {
                if i + 4 * h >= rows {
                    break;
                }
                let near_rows: [&[bool]; 5] =
                    std::array::from_fn(|k| masks.row(&masks.near, i + k * h));
                let exact_rows: [&[bool]; 5] =
                    std::array::from_fn(|k| masks.row(&masks.exact, i + k * h));
                let mut t = 0u32;
                let mut e = 0u32;
                for j in 0..binary.cols {
                    if near_rows.iter().all(|row| row[j]) {
                        t += 1;
                        if exact_rows.iter().all(|row| row[j]) {
                            e += 1;
                        }
                    }
                }
                tolerant[h] = t;
                exact[h] = e;
            }
        };

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            space
                .tolerant
                .par_chunks_mut(stride)
                .zip(space.exact.par_chunks_mut(stride))
                .enumerate()
                .for_each(|(i, (t, e))| vote_row(i, t, e));
        }
        #[cfg(not(feature = "parallel"))]
        {
            space
                .tolerant
                .chunks_mut(stride)
                .zip(space.exact.chunks_mut(stride))
                .enumerate()
                .for_each(|(i, (t, e))| vote_row(i, t, e));
        }

        space
    }

    #[inline]
    fn stride(&self) -> usize {
        self.max_spacing + 1
    }

    #[inline]
    fn idx(&self, row: usize, spacing: usize) -> usize {
        debug_assert!(row < self.row_count && spacing <= self.max_spacing);
        row * self.stride() + spacing
    }

    /// Number of candidate top rows.
    pub fn row_count(&self) -> usize {
        self.row_count
    }

    /// Largest candidate spacing (inclusive).
    pub fn max_spacing(&self) -> usize {
        self.max_spacing
    }

    /// Columns where all five lines have ink within the tolerance window.
    pub fn votes(&self, row: usize, spacing: usize) -> u32 {
        self.tolerant[self.idx(row, spacing)]
    }

    /// Columns where all five lines have ink exactly on the expected rows.
    pub fn exact_votes(&self, row: usize, spacing: usize) -> u32 {
        self.exact[self.idx(row, spacing)]
    }

    /// Smallest spacing at `row` whose votes reach `required`.
    pub fn first_accepted(&self, row: usize, required: u32) -> Option<usize> {
        (1..=self.max_spacing).find(|&h| self.votes(row, h) >= required)
    }
}
