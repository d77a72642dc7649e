//! Parameter types configuring the detector stages.
//!
//! Every threshold the algorithms use lives here rather than as a literal in
//! algorithm code. All groups deserialize with per-field defaults, so a JSON
//! config only needs to name the values it changes.

use crate::pitch::PitchOptions;
use crate::staff::StaffOptions;
use crate::symbols::MatchOptions;
use serde::Deserialize;

/// Detector-wide parameters.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct DetectorParams {
    /// Staff binarization and accumulator voting.
    pub staff: StaffOptions,
    /// Template binarization, acceptance and overlap resolution.
    pub matching: MatchOptions,
    /// Staff span and unresolved-notehead policy.
    pub pitch: PitchOptions,
    /// Sobel edge map for visual inspection.
    pub edges: EdgeOptions,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct EdgeOptions {
    pub enabled: bool,
    /// Sobel magnitude at or above which a pixel is an edge.
    pub magnitude_threshold: f32,
}

impl Default for EdgeOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            magnitude_threshold: 90.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_remaining_defaults() {
        let params: DetectorParams = serde_json::from_str(
            r#"{ "staff": { "vote_fraction": 0.8 }, "matching": { "overlap_fraction": null } }"#,
        )
        .unwrap();
        assert_eq!(params.staff.vote_fraction, 0.8);
        assert_eq!(params.staff.min_separation, 5);
        assert_eq!(params.matching.overlap_fraction, None);
        assert_eq!(params.matching.acceptance, 0.9);
        assert!(params.edges.enabled);
    }

    #[test]
    fn smoothing_and_policy_parse() {
        let params: DetectorParams = serde_json::from_str(
            r#"{ "matching": { "smoothing": { "sigma": 1.5 } }, "pitch": { "unresolved": "drop" } }"#,
        )
        .unwrap();
        let s = params.matching.smoothing.unwrap();
        assert_eq!((s.size, s.sigma), (5, 1.5));
        assert_eq!(params.pitch.unresolved, crate::pitch::UnresolvedPolicy::Drop);
    }
}
