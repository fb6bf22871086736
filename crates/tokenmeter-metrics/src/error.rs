//! Error types for tokenmeter-metrics

use std::path::PathBuf;
use thiserror::Error;

/// Metrics error type
///
/// Accounting itself never fails; only report persistence and history
/// loading touch the filesystem and can return one of these.
#[derive(Debug, Error)]
pub enum Error {
    /// Report directory could not be created
    #[error("failed to create report directory {path:?}: {source}")]
    CreateDir {
        /// Directory that was being created
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Report file could not be written
    #[error("failed to write report {path:?}: {source}")]
    Write {
        /// Destination file
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// History snapshot could not be read
    #[error("failed to read history {path:?}: {source}")]
    Read {
        /// Source file
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// History snapshot is not a JSON array of usage records
    #[error("invalid history snapshot {path:?}: {source}")]
    InvalidHistory {
        /// Source file
        path: PathBuf,
        /// Decoding error
        source: serde_json::Error,
    },

    /// Report could not be encoded
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Unknown report format name
    #[error("unsupported report format: {0} (expected 'json' or 'csv')")]
    UnsupportedFormat(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
