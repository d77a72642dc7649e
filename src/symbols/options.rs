use serde::Deserialize;

/// Optional Gaussian pre-blur of the page before binarization.
#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(default)]
pub struct SmoothingOptions {
    pub size: usize,
    pub sigma: f32,
}

impl Default for SmoothingOptions {
    fn default() -> Self {
        Self {
            size: 5,
            sigma: 1.0,
        }
    }
}

/// Tunables of the template matcher.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct MatchOptions {
    /// Gray level separating ink from paper for page and templates alike.
    pub binarize_threshold: f32,
    /// Minimum normalized score for a peak to become a symbol.
    pub acceptance: f32,
    /// Cross-template overlap (intersection over the smaller box) above which
    /// the lower-confidence symbol is dropped. `None` keeps everything.
    pub overlap_fraction: Option<f32>,
    /// Blur the page before binarizing. Off by default.
    pub smoothing: Option<SmoothingOptions>,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            binarize_threshold: 100.0,
            acceptance: 0.9,
            overlap_fraction: Some(0.5),
            smoothing: None,
        }
    }
}
