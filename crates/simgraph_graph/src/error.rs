//! # Graph Error Types
//!
//! Errors raised while configuring the similarity pipeline.
//!
//! Building the graph itself cannot fail: every [`TimeSeries`] was validated
//! on construction, and a pair without overlap or common dates is an
//! ordinary zero-weight pair, not an error.
//!
//! [`TimeSeries`]: simgraph_core::types::TimeSeries

use thiserror::Error;

/// Error type for similarity graph configuration.
///
/// # Example
///
/// ```rust
/// use simgraph_graph::GraphError;
///
/// let error = GraphError::InvalidConfig("max_bins must be positive".to_string());
/// assert_eq!(error.to_string(), "Invalid configuration: max_bins must be positive");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// A pipeline parameter is out of range.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// An edge policy name was not recognised.
    #[error("Unknown edge policy: {0}. Supported: keep-zero, omit-zero")]
    UnknownEdgePolicy(String),
}
