use std::path::PathBuf;

use hsvshift_core::CoreError;
use hsvshift_io::IoError;

/// Errors surfaced to the user by the demo.
#[derive(Debug, thiserror::Error)]
pub enum DemoError {
    #[error(transparent)]
    Image(#[from] IoError),
    #[error(transparent)]
    Core(#[from] CoreError),
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid parameters file {path}: {source}")]
    Params {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("failed to serialize results: {0}")]
    Json(#[from] serde_json::Error),
    #[error("no loadable images among the inputs")]
    NoImages,
}
