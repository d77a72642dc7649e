use super::params::DetectorParams;
use crate::binarize::threshold;
use crate::edges::edge_map;
use crate::error::DetectResult;
use crate::image::PixelGrid;
use crate::pitch::assign_pitches;
use crate::report::{DetectionReport, TimingBreakdown};
use crate::staff::detect_staves;
use crate::symbols::{detect_symbols, Template};
use log::debug;
use std::time::Instant;

/// Staff and symbol detector for single grayscale pages.
pub struct SheetDetector {
    params: DetectorParams,
    templates: Vec<Template>,
}

impl SheetDetector {
    pub fn new(params: DetectorParams, templates: Vec<Template>) -> Self {
        Self { params, templates }
    }

    pub fn params(&self) -> &DetectorParams {
        &self.params
    }

    pub fn templates(&self) -> &[Template] {
        &self.templates
    }

    /// Run the full pipeline on a page with values in `[0, 255]`.
    pub fn process(&self, gray: &PixelGrid) -> DetectResult<DetectionReport> {
        let total_start = Instant::now();
        for t in &self.templates {
            t.check_fits(gray.rows, gray.cols)?;
        }
        let mut timing = TimingBreakdown::default();

        let stage = Instant::now();
        let staff_binary = threshold(gray, self.params.staff.binarize_threshold);
        let staves = detect_staves(&staff_binary, &self.params.staff);
        timing.push("staves", stage);

        let stage = Instant::now();
        let symbols = detect_symbols(gray, &self.templates, &self.params.matching)?;
        timing.push("symbols", stage);

        let stage = Instant::now();
        let symbols = assign_pitches(symbols, &staves, &self.params.pitch);
        timing.push("pitch", stage);

        let edges = if self.params.edges.enabled && gray.rows >= 3 && gray.cols >= 3 {
            let stage = Instant::now();
            let map = edge_map(gray, self.params.edges.magnitude_threshold)?;
            timing.push("edges", stage);
            Some(map)
        } else {
            None
        };

        timing.total_ms = total_start.elapsed().as_secs_f64() * 1000.0;
        debug!(
            "SheetDetector::process {}x{} staves={} symbols={} total_ms={:.3}",
            gray.rows,
            gray.cols,
            staves.len(),
            symbols.len(),
            timing.total_ms
        );

        Ok(DetectionReport {
            rows: gray.rows,
            cols: gray.cols,
            staves,
            symbols,
            edges,
            timing,
        })
    }
}
