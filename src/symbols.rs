//! Matched-filter symbol detection against a small fixed template set.
//!
//! For each template the page and template are binarized with the same cutoff
//! and scored with
//! `F = conv(page, flip180(T)) + conv(invert(page), flip180(invert(T)))`,
//! i.e. the number of pixels (scaled by 255²) on which page and template agree
//! on paper plus those on which they agree on ink. Dividing by the largest
//! attainable value `255² · h · w` gives a confidence in `[0, 1]`.
//!
//! Peaks are local maxima of the confidence surface above the acceptance
//! threshold, thinned by non-maximum suppression in a window the size of the
//! template, so every instance on the page is reported once. Templates are
//! independent; an optional pass drops the lower-confidence symbol of any
//! cross-template pair whose boxes overlap too much.
//!
//! Matching runs at the template's native scale and orientation only.

pub mod matcher;
pub mod options;
pub mod overlap;
pub mod peaks;
pub mod template;

pub use matcher::{correlation_surface, detect_symbols, match_template, PreparedPage};
pub use options::{MatchOptions, SmoothingOptions};
pub use overlap::resolve_overlaps;
pub use peaks::{extract_peaks, Peak};
pub use template::{load_template, Template};

use crate::pitch::Pitch;
use serde::{Deserialize, Serialize};

/// Closed set of recognisable symbols.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SymbolKind {
    #[serde(rename = "filled_note")]
    Notehead,
    #[serde(rename = "quarter_rest")]
    QuarterRest,
    #[serde(rename = "eighth_rest")]
    EighthRest,
}

impl SymbolKind {
    pub const ALL: [SymbolKind; 3] = [
        SymbolKind::Notehead,
        SymbolKind::QuarterRest,
        SymbolKind::EighthRest,
    ];

    /// Label used in detection records.
    pub fn label(self) -> &'static str {
        match self {
            SymbolKind::Notehead => "filled_note",
            SymbolKind::QuarterRest => "quarter_rest",
            SymbolKind::EighthRest => "eighth_rest",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.label() == label)
    }
}

impl std::fmt::Display for SymbolKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One matched symbol instance.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectedSymbol {
    /// Top row of the bounding box
    pub row: usize,
    /// Left column of the bounding box
    pub col: usize,
    /// Template width
    pub width: usize,
    /// Template height
    pub height: usize,
    pub kind: SymbolKind,
    /// Pitch letter; only ever set for noteheads
    pub pitch: Option<Pitch>,
    /// Normalized match score in `[0, 1]`
    pub confidence: f32,
}

impl DetectedSymbol {
    /// Row through the middle of the bounding box.
    pub fn center_row(&self) -> usize {
        self.row + self.height / 2
    }

    pub fn center_col(&self) -> usize {
        self.col + self.width / 2
    }

    pub fn area(&self) -> usize {
        self.width * self.height
    }

    /// Area shared by the two bounding boxes.
    pub fn intersection_area(&self, other: &DetectedSymbol) -> usize {
        let top = self.row.max(other.row);
        let left = self.col.max(other.col);
        let bottom = (self.row + self.height).min(other.row + other.height);
        let right = (self.col + self.width).min(other.col + other.width);
        bottom.saturating_sub(top) * right.saturating_sub(left)
    }
}
