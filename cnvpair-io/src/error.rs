use std::io;
use std::path::PathBuf;

use cnvpair_core::ModelError;
use thiserror::Error;

/// Error type for cnvpair-io operations.
#[derive(Error, Debug)]
pub enum IoError {
    /// IO error occurred during file operations.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("{path}: missing required column '{column}' in header")]
    MissingColumn { path: PathBuf, column: String },

    #[error("{path}: column '{column}' appears more than once in header")]
    DuplicateColumn { path: PathBuf, column: String },

    /// A row that could not be parsed.
    #[error("{path}:{line}: {msg}")]
    Parse {
        path: PathBuf,
        line: usize,
        msg: String,
    },

    /// A row that parsed but does not describe a valid interval or region.
    #[error("{path}:{line}: {source}")]
    InvalidRow {
        path: PathBuf,
        line: usize,
        source: ModelError,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Model(#[from] ModelError),

    #[error("Unknown delimiter: {0}. Valid options are 'comma' or 'tab'")]
    UnknownDelimiter(String),
}

/// Result type alias for cnvpair-io operations.
pub type Result<T> = std::result::Result<T, IoError>;
