use std::path::PathBuf;
use thiserror::Error;

/// Failures while loading the classifier and companion artifacts at startup
#[derive(Debug, Error)]
pub enum ModelLoadError {
    #[error("Artifact file not found: {0}")]
    NotFound(PathBuf),

    #[error("Failed to read artifact {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse artifact {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// The classifier and companion artifacts disagree on shape
    #[error("Artifact shape mismatch: {0}")]
    Shape(String),
}

/// Failures during a single prediction
#[derive(Debug, Error)]
pub enum PredictionError {
    /// The artifacts failed to load at startup; permanent until restart
    #[error("ML model not available or failed to load. Check server logs for details.")]
    Unavailable,

    #[error("Encoded row has {got} features, classifier expects {expected}")]
    FeatureShape { expected: usize, got: usize },

    /// A structurally invalid classifier artifact was hit at predict time
    #[error("Malformed classifier artifact: {0}")]
    Malformed(String),
}
