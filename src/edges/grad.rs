use crate::binarize::threshold;
use crate::convolve::separable::{SOBEL_DIFF, SOBEL_SMOOTH};
use crate::convolve::convolve_separable;
use crate::error::DetectResult;
use crate::image::PixelGrid;

/// Derivative direction of a Sobel pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    /// d/dx, responds to vertical edges
    Horizontal,
    /// d/dy, responds to horizontal edges
    Vertical,
}

/// Per-pixel gradient buffers.
#[derive(Clone, Debug)]
pub struct Grad {
    pub gx: PixelGrid,
    pub gy: PixelGrid,
    /// `sqrt(gx² + gy²)`
    pub mag: PixelGrid,
}

/// Apply the standard 3×3 Sobel operator along `axis`.
///
/// The sign convention matches cross-correlation with
/// `[[-1,0,1],[-2,0,2],[-1,0,1]]` (or its transpose): intensity increasing
/// along the axis gives a positive response.
pub fn sobel_gradient(grid: &PixelGrid, axis: Axis) -> DetectResult<PixelGrid> {
    match axis {
        Axis::Horizontal => convolve_separable(grid, &SOBEL_DIFF, &SOBEL_SMOOTH),
        Axis::Vertical => convolve_separable(grid, &SOBEL_SMOOTH, &SOBEL_DIFF),
    }
}

/// Element-wise `sqrt(gx² + gy²)`.
pub fn gradient_magnitude(gx: &PixelGrid, gy: &PixelGrid) -> PixelGrid {
    gx.zip_map(gy, |x, y| (x * x + y * y).sqrt())
}

pub fn sobel_gradients(grid: &PixelGrid) -> DetectResult<Grad> {
    let gx = sobel_gradient(grid, Axis::Horizontal)?;
    let gy = sobel_gradient(grid, Axis::Vertical)?;
    let mag = gradient_magnitude(&gx, &gy);
    Ok(Grad { gx, gy, mag })
}

/// Binary edge image: 255 where the Sobel magnitude reaches `mag_thresh`.
pub fn edge_map(grid: &PixelGrid, mag_thresh: f32) -> DetectResult<PixelGrid> {
    let grad = sobel_gradients(grid)?;
    Ok(threshold(&grad.mag, mag_thresh))
}
