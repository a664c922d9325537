use std::path::PathBuf;

use thiserror::Error;

/// Failure to persist or restore match results.
#[derive(Debug, Error)]
pub enum ResultsError {
    #[error("cannot access results file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid results JSON: {0}")]
    Json(#[from] serde_json::Error),
}
