#![doc = include_str!("../README.md")]

// Public modules
pub mod config;
pub mod detector;
pub mod error;
pub mod image;
pub mod output;
pub mod pitch;
pub mod report;
pub mod staff;
pub mod symbols;

// Building blocks, public for tools and tests.
pub mod binarize;
pub mod convolve;
pub mod edges;

// --- High-level re-exports -------------------------------------------------

pub use crate::detector::{DetectorParams, SheetDetector};
pub use crate::error::{DetectError, DetectResult};
pub use crate::pitch::Pitch;
pub use crate::report::DetectionReport;
pub use crate::staff::StaffDescriptor;
pub use crate::symbols::{DetectedSymbol, SymbolKind, Template};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use sheet_detector::prelude::*;
/// use std::path::Path;
///
/// # fn main() -> DetectResult<()> {
/// let page = load_grayscale(Path::new("music1.png"))?;
/// let note = load_template(Path::new("template1.png"), SymbolKind::Notehead)?;
///
/// let detector = SheetDetector::new(DetectorParams::default(), vec![note]);
/// let report = detector.process(&page)?;
/// for s in &report.symbols {
///     println!("{} at ({}, {}) pitch={:?}", s.kind, s.row, s.col, s.pitch);
/// }
/// # Ok(())
/// # }
/// ```
pub mod prelude {
    pub use crate::image::io::load_grayscale;
    pub use crate::image::PixelGrid;
    pub use crate::symbols::load_template;
    pub use crate::{
        DetectResult, DetectedSymbol, DetectionReport, DetectorParams, SheetDetector,
        StaffDescriptor, SymbolKind,
    };
}
