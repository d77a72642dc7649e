//! JSON runtime configuration for the command-line tool.
//!
//! Every field is optional; an absent file behaves like `{}`. Relative
//! template paths are resolved against the directory of the input image.
//!
//! ```json
//! {
//!   "templates": [
//!     { "kind": "filled_note", "path": "template1.png" },
//!     { "kind": "quarter_rest", "path": "template2.png" }
//!   ],
//!   "output": { "report_json": "report.json", "edges_image": null },
//!   "params": { "staff": { "vote_fraction": 0.85 } }
//! }
//! ```
use crate::detector::DetectorParams;
use crate::error::{DetectError, DetectResult};
use crate::symbols::SymbolKind;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    pub templates: TemplateSet,
    pub output: OutputConfig,
    pub params: DetectorParams,
}

#[derive(Clone, Debug, Deserialize)]
pub struct TemplateSpec {
    pub kind: SymbolKind,
    pub path: PathBuf,
}

/// Templates to match, in the order they are loaded.
#[derive(Clone, Debug, Deserialize)]
#[serde(transparent)]
pub struct TemplateSet(pub Vec<TemplateSpec>);

impl Default for TemplateSet {
    fn default() -> Self {
        let spec = |kind, path: &str| TemplateSpec {
            kind,
            path: PathBuf::from(path),
        };
        Self(vec![
            spec(SymbolKind::Notehead, "template1.png"),
            spec(SymbolKind::QuarterRest, "template2.png"),
            spec(SymbolKind::EighthRest, "template3.png"),
        ])
    }
}

impl TemplateSet {
    /// Template specs with relative paths joined onto `base`.
    pub fn resolved(&self, base: &Path) -> Vec<TemplateSpec> {
        self.0
            .iter()
            .map(|t| TemplateSpec {
                kind: t.kind,
                path: if t.path.is_absolute() {
                    t.path.clone()
                } else {
                    base.join(&t.path)
                },
            })
            .collect()
    }
}

/// Artifact paths. `None` disables the artifact.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub detections_txt: PathBuf,
    pub detections_image: Option<PathBuf>,
    pub staves_image: Option<PathBuf>,
    pub edges_image: Option<PathBuf>,
    pub report_json: Option<PathBuf>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            detections_txt: PathBuf::from("detected.txt"),
            detections_image: Some(PathBuf::from("detected.png")),
            staves_image: Some(PathBuf::from("staves.png")),
            edges_image: Some(PathBuf::from("edges.png")),
            report_json: None,
        }
    }
}

pub fn load_config(path: &Path) -> DetectResult<RuntimeConfig> {
    let data = fs::read_to_string(path).map_err(|e| DetectError::Config {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    serde_json::from_str(&data).map_err(|e| DetectError::Config {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}
