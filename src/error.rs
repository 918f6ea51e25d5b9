use std::{fmt::Display, path::Path, path::PathBuf};
use thiserror::Error;

/// Central error type for the wav-dataset-prep crate.
#[derive(Debug, Error)]
pub enum PrepError {
    #[error("Usage error: {0}")]
    Usage(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Sample rate mismatch in pair {pair}: input is {input} Hz, target is {target} Hz")]
    PairRateMismatch { pair: usize, input: u32, target: u32 },

    #[error("Sample rate mismatch in pair {pair}: expected {expected} Hz, got {found} Hz")]
    RateMismatch {
        pair: usize,
        expected: u32,
        found: u32,
    },

    #[error("Invalid split bounds: {0}")]
    InvalidBounds(String),

    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Bad audio file {path}: {reason}")]
    Format { path: PathBuf, reason: String },
}

impl PrepError {
    /// True for both the cross-pair and the pair-internal rate checks.
    pub fn is_rate_mismatch(&self) -> bool {
        matches!(
            self,
            PrepError::RateMismatch { .. } | PrepError::PairRateMismatch { .. }
        )
    }

    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        PrepError::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn format(path: &Path, reason: impl Display) -> Self {
        PrepError::Format {
            path: path.to_path_buf(),
            reason: reason.to_string(),
        }
    }

    // --- Path-aware conversions for the codec and config crates ---

    pub(crate) fn from_hound(path: &Path, e: hound::Error) -> Self {
        match e {
            hound::Error::IoError(source) => PrepError::io(path, source),
            other => PrepError::format(path, other),
        }
    }

    pub(crate) fn from_symphonia(path: &Path, e: symphonia::core::errors::Error) -> Self {
        match e {
            symphonia::core::errors::Error::IoError(source) => PrepError::io(path, source),
            other => PrepError::format(path, other),
        }
    }

    pub(crate) fn from_json(path: &Path, e: serde_json::Error) -> Self {
        PrepError::Config(format!("{}: {e}", path.display()))
    }
}

pub type Result<T> = std::result::Result<T, PrepError>;
