//! Loader error types.

use std::path::PathBuf;

use simgraph_core::types::{DateError, SeriesError};
use thiserror::Error;

/// Errors raised while reading price files.
///
/// Every variant carries the offending path; row-level variants also carry
/// the 1-based line number within the file.
#[derive(Error, Debug)]
pub enum LoaderError {
    /// The data root is missing or not a directory.
    #[error("Not a directory: {0}")]
    NotADirectory(PathBuf),

    /// Directory listing failed.
    #[error("I/O error reading {path}: {source}")]
    Io {
        /// Path being read
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// The CSV reader failed (I/O or malformed record).
    #[error("CSV error in {path}: {source}")]
    Csv {
        /// File being read
        path: PathBuf,
        /// Underlying error
        #[source]
        source: csv::Error,
    },

    /// A row is too short to contain a configured column.
    #[error("{path}:{line}: missing column {column}")]
    MissingColumn {
        /// File being read
        path: PathBuf,
        /// Line number
        line: u64,
        /// Zero-based column index
        column: usize,
    },

    /// The date field failed to parse.
    #[error("{path}:{line}: {source}")]
    InvalidDate {
        /// File being read
        path: PathBuf,
        /// Line number
        line: u64,
        /// Underlying error
        #[source]
        source: DateError,
    },

    /// The price field is not a number.
    #[error("{path}:{line}: invalid price '{value}'")]
    InvalidValue {
        /// File being read
        path: PathBuf,
        /// Line number
        line: u64,
        /// Raw field content
        value: String,
    },

    /// The parsed rows violate a series invariant (e.g. unsorted dates).
    #[error("{path}: {source}")]
    InvalidSeries {
        /// File being read
        path: PathBuf,
        /// Underlying error
        #[source]
        source: SeriesError,
    },
}

impl LoaderError {
    /// Path of the file or directory the error refers to.
    pub fn path(&self) -> &std::path::Path {
        match self {
            LoaderError::NotADirectory(path)
            | LoaderError::Io { path, .. }
            | LoaderError::Csv { path, .. }
            | LoaderError::MissingColumn { path, .. }
            | LoaderError::InvalidDate { path, .. }
            | LoaderError::InvalidValue { path, .. }
            | LoaderError::InvalidSeries { path, .. } => path.as_path(),
        }
    }
}
