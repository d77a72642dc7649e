//! Convolution engine: general and separable 2D convolution plus kernel synthesis.
//!
//! All convolutions follow a "valid" border policy: an output pixel is only
//! computed where the kernel fits entirely inside the input. The remaining
//! border band (kernel radius wide) is left at zero and carries no meaning.
//! Kernels are true convolution kernels (flipped on application); pass a
//! 180°-rotated kernel to obtain cross-correlation.
//!
//! - [`kernel`] – odd-dimensioned `Kernel` backed by a `nalgebra` matrix,
//!   Gaussian synthesis.
//! - [`general`] – direct 2D convolution.
//! - [`separable`] – two-pass 1D convolution and the `SeparableFilter` trait.
//!
//! Output rows are independent, so they are filled in parallel when the
//! `parallel` feature is enabled.

pub mod general;
pub mod kernel;
pub mod separable;

pub use general::convolve_general;
pub use kernel::{gaussian_kernel, gaussian_taps, Kernel};
pub use separable::{convolve_separable, smooth, SeparableFilter, StaticSeparableFilter};

use crate::image::PixelGrid;

/// Fill every output row with `f(row_index, row)`; rows are disjoint so no
/// synchronisation is needed between workers.
pub(crate) fn fill_rows<F>(out: &mut PixelGrid, f: F)
where
    F: Fn(usize, &mut [f32]) + Send + Sync,
{
    let cols = out.cols;
    if cols == 0 {
        return;
    }
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        out.data
            .par_chunks_mut(cols)
            .enumerate()
            .for_each(|(r, row)| f(r, row));
    }
    #[cfg(not(feature = "parallel"))]
    {
        out.data
            .chunks_mut(cols)
            .enumerate()
            .for_each(|(r, row)| f(r, row));
    }
}
