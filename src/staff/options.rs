use serde::Deserialize;

/// Tunables of the staff detector.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct StaffOptions {
    /// Gray level separating ink from paper before voting.
    pub binarize_threshold: f32,
    /// Fraction of the image width a candidate needs in votes.
    pub vote_fraction: f32,
    /// Rows above/below each expected line that still count as a hit.
    pub line_tolerance: usize,
    /// Accepted rows closer than this (inclusive) are one staff.
    pub min_separation: usize,
    /// Largest spacing searched is `rows / spacing_divisor`.
    pub spacing_divisor: usize,
    /// Candidate top rows stop this many rows above the bottom edge.
    pub row_margin: usize,
}

impl Default for StaffOptions {
    fn default() -> Self {
        Self {
            binarize_threshold: 150.0,
            vote_fraction: 0.9,
            line_tolerance: 1,
            min_separation: 5,
            spacing_divisor: 10,
            row_margin: 10,
        }
    }
}

impl StaffOptions {
    /// Minimum vote count for a page of `cols` columns.
    pub fn required_votes(&self, cols: usize) -> u32 {
        (self.vote_fraction as f64 * cols as f64).ceil().max(1.0) as u32
    }

    /// Largest candidate spacing for a page of `rows` rows.
    pub fn max_spacing(&self, rows: usize) -> usize {
        rows / self.spacing_divisor.max(1)
    }
}
