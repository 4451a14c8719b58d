use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while normalizing a quiz document
#[derive(Debug, Error)]
pub enum ProcessError {
    #[error("quiz file not found or unreadable: {path}")]
    NotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse quiz JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("{0}")]
    Validation(String),

    #[error("failed to write quiz file: {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
