//! Error types for tallylib

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during ingestion and reporting
#[derive(Error, Debug)]
pub enum TallyError {
    /// Failed to read an input file
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Input file is not valid UTF-8 text
    #[error("file '{path}' is not valid UTF-8 text")]
    Decode { path: PathBuf },

    /// Failed to write a report file
    #[error("failed to write report '{path}': {source}")]
    FileWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
