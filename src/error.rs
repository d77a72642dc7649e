//! Error taxonomy shared by every detection stage.
//!
//! Configuration problems are fatal and raised before any pixel is touched.
//! An unresolved pitch is recoverable: the pipeline decides whether to keep the
//! symbol with an unknown pitch or drop it. "Nothing found" is never an error;
//! it is an empty collection.
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DetectError {
    /// Invalid kernel or template shape (even size, larger than the image,
    /// non-positive sigma, empty template).
    #[error("invalid {what}: {reason}")]
    Configuration { what: &'static str, reason: String },

    /// A notehead centre row lies outside every known staff span.
    #[error("no staff covers notehead centre row {row}")]
    UnresolvedPitch { row: usize },

    /// The input image could not be opened or decoded.
    #[error("failed to read image {}: {reason}", path.display())]
    UnreadableImage { path: PathBuf, reason: String },

    /// Filesystem failure while writing or reading auxiliary files.
    #[error("I/O error on {}: {reason}", path.display())]
    Io { path: PathBuf, reason: String },

    /// Malformed runtime configuration.
    #[error("invalid config {}: {reason}", path.display())]
    Config { path: PathBuf, reason: String },
}

pub type DetectResult<T> = Result<T, DetectError>;

impl DetectError {
    pub(crate) fn configuration(what: &'static str, reason: impl Into<String>) -> Self {
        Self::Configuration {
            what,
            reason: reason.into(),
        }
    }

    pub(crate) fn io(path: &Path, err: impl std::fmt::Display) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            reason: err.to_string(),
        }
    }

    /// True for errors that must abort a run before detection starts.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, Self::UnresolvedPitch { .. })
    }
}
