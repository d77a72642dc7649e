//! Edge processing: Sobel gradients built on the separable convolution engine.
//!
//! - `sobel_gradient` convolves with the 3×3 Sobel operator along one axis,
//!   expressed as a `[1,2,1]` smoothing pass and a `[-1,0,1]` derivative pass.
//! - `gradient_magnitude` combines the two derivatives per pixel.
//! - `edge_map` thresholds the magnitude into a binary edge image used for
//!   visual inspection of the page.
//!
//! Border pixels (one pixel wide) follow the convolution engine's "valid"
//! policy and are zero.

pub mod grad;

pub use grad::{edge_map, gradient_magnitude, sobel_gradient, sobel_gradients, Axis, Grad};
