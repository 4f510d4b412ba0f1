//! CLI error types.

use std::path::PathBuf;

use adapter_loader::LoaderError;
use simgraph_graph::GraphError;
use thiserror::Error;

/// Errors surfaced by `simgraph` commands.
#[derive(Error, Debug)]
pub enum CliError {
    /// The configuration file could not be read.
    #[error("Failed to read config {path}: {source}")]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid TOML for [`SimgraphConfig`].
    ///
    /// [`SimgraphConfig`]: crate::config::SimgraphConfig
    #[error("Invalid config {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// A configuration value is out of range.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A requested file or directory does not exist.
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// A requested instrument key is not present in the data directory.
    #[error("Instrument not found: {0}")]
    UnknownInstrument(String),

    /// An instrument file holds a header but no rows.
    #[error("No data rows in {0}")]
    EmptySeries(PathBuf),

    #[error(transparent)]
    Loader(#[from] LoaderError),

    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error("JSON output failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for CLI commands.
pub type Result<T> = std::result::Result<T, CliError>;
