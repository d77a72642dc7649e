//! Staff detection by voting in a dense (top row, spacing) accumulator.
//!
//! Overview
//! - A staff is five equally spaced, axis-aligned dark lines. It is described
//!   by the row of its topmost line and the uniform line spacing.
//! - Every column votes for each candidate `(row, spacing)` whose five line
//!   rows all carry ink within a ±`line_tolerance` row window. Candidates
//!   reaching `vote_fraction` of the image width are accepted, so a few
//!   columns blocked by noteheads or barlines do not cost the detection.
//! - Per row only the smallest accepted spacing is kept (greedy first match).
//!   Larger spacings at the same row are never considered afterwards.
//! - The tolerance window makes the rows around a true staff accept too;
//!   chains of accepted rows closer than `min_separation` collapse into one
//!   descriptor, represented by the candidate with the most zero-tolerance
//!   votes.
//!
//! Only horizontal staves at a single scale are searched. A multi-scale or
//! small-angle search would slot in as an extra loop around the voting stage.
//!
//! Complexity: O(rows · cols · max_spacing).

pub mod accumulator;
pub mod detect;
pub mod options;

pub use accumulator::AccumulatorSpace;
pub use detect::detect_staves;
pub use options::StaffOptions;

use crate::error::{DetectError, DetectResult};
use serde::Serialize;

/// Geometry of one detected five-line staff.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffDescriptor {
    row_coordinate: usize,
    spacing: usize,
}

impl StaffDescriptor {
    /// Describe a staff by hand. A zero spacing is a configuration error.
    pub fn new(row_coordinate: usize, spacing: usize) -> DetectResult<Self> {
        if spacing == 0 {
            return Err(DetectError::configuration(
                "staff descriptor",
                "line spacing must be positive",
            ));
        }
        Ok(Self {
            row_coordinate,
            spacing,
        })
    }

    /// Row of the topmost of the five lines.
    pub fn row_coordinate(&self) -> usize {
        self.row_coordinate
    }

    /// Distance in rows between consecutive lines, always positive.
    pub fn spacing(&self) -> usize {
        self.spacing
    }

    /// Rows of the five lines, top to bottom.
    pub fn line_rows(&self) -> [usize; 5] {
        std::array::from_fn(|k| self.row_coordinate + k * self.spacing)
    }

    pub fn middle_row(&self) -> usize {
        self.row_coordinate + 2 * self.spacing
    }
}
