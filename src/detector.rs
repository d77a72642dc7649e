//! Sheet detector orchestrating the staff and symbol stages.
//!
//! Overview
//! - Validates every template against the page first, so configuration
//!   errors surface before any detection work.
//! - Binarizes the page with the staff cutoff and runs accumulator voting to
//!   find five-line staves.
//! - Independently binarizes the page with the matching cutoff and correlates
//!   it with every template, extracting thresholded, suppressed peaks.
//! - Assigns a pitch letter to each notehead from the staff that covers it.
//! - Optionally computes a Sobel edge map of the page for inspection.
//!
//! Modules
//! - [`params`] – all tunables grouped into one deserializable value.
//! - `pipeline` – the [`SheetDetector`] implementation.

pub mod params;
mod pipeline;

pub use params::{DetectorParams, EdgeOptions};
pub use pipeline::SheetDetector;
