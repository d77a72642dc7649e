//! Detection output and stage timings.
use crate::image::PixelGrid;
use crate::staff::StaffDescriptor;
use crate::symbols::{DetectedSymbol, SymbolKind};
use serde::Serialize;
use std::time::Instant;

/// Wall-clock time spent in one pipeline stage.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StageTiming {
    pub label: String,
    pub elapsed_ms: f64,
}

#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimingBreakdown {
    pub total_ms: f64,
    pub stages: Vec<StageTiming>,
}

impl TimingBreakdown {
    /// Record a stage that started at `since`.
    pub fn push(&mut self, label: impl Into<String>, since: Instant) {
        self.stages.push(StageTiming {
            label: label.into(),
            elapsed_ms: since.elapsed().as_secs_f64() * 1000.0,
        });
    }
}

/// Everything detected on one page. This is the whole contract with the
/// record writer and the overlay renderers.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectionReport {
    pub rows: usize,
    pub cols: usize,
    /// Staves by ascending row.
    pub staves: Vec<StaffDescriptor>,
    /// Symbols in raster order of their top-left corners.
    pub symbols: Vec<DetectedSymbol>,
    /// Binary Sobel edge map, when enabled.
    #[serde(skip)]
    pub edges: Option<PixelGrid>,
    pub timing: TimingBreakdown,
}

impl DetectionReport {
    pub fn count(&self, kind: SymbolKind) -> usize {
        self.symbols.iter().filter(|s| s.kind == kind).count()
    }
}
