use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SinkError {
    #[error("Could not create file {}: {source}", .path.display())]
    CreateFailed {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("An error occurred while saving data to {}: {source}", .path.display())]
    WriteFailed {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// A failed write. The encoded calendar is handed back so it can be
/// written elsewhere.
#[derive(Debug, Error)]
#[error("{error}")]
pub struct ExportError {
    #[source]
    pub error: SinkError,
    pub content: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FileNameError {
    #[error("file name is empty after removing illegal characters")]
    Empty,
}
