//! # simgraph_graph (L2: Graph Kernel)
//!
//! Turns a set of irregularly dated price histories into an undirected
//! weighted graph whose edge weights measure statistical dependence.
//!
//! ## Pipeline
//!
//! ```text
//! SeriesStore ──► overlap ──► align ──► SimilarityScorer ──► GraphAssembler
//!                 (range)     (pairs)    (weight in [0, 1])   (SimilarityGraph)
//! ```
//!
//! - `overlap`: date range covered by both series of a pair
//! - `align`: merge-join of two date-sorted series inside that range
//! - `similarity`: adjusted mutual information of the most recent aligned
//!   values, floored at zero
//! - `assembler`: visits each unordered pair once and records its weight
//! - `graph`: the resulting read-only graph
//!
//! ## Example
//!
//! ```
//! use simgraph_core::types::{Date, SeriesStore};
//! use simgraph_graph::GraphAssembler;
//!
//! let d = |day| Date::from_ymd(2024, 5, day).unwrap();
//! let dates = vec![d(1), d(2), d(3), d(6)];
//!
//! let store = SeriesStore::from_columns(vec![
//!     ("AAA", dates.clone(), vec![1.0, 2.0, 1.0, 2.0]),
//!     ("BBB", dates.clone(), vec![7.0, 8.0, 7.0, 8.0]),
//! ])
//! .unwrap();
//!
//! let graph = GraphAssembler::default().build(store);
//! assert_eq!(graph.node_count(), 2);
//! assert_eq!(graph.weight("AAA", "BBB"), Some(1.0));
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod align;
pub mod assembler;
pub mod error;
pub mod graph;
pub mod overlap;
pub mod similarity;

// Re-export commonly used types
pub use align::{align, AlignedPairs};
pub use assembler::{EdgePolicy, GraphAssembler, PairWeight, DEFAULT_PROGRESS_INTERVAL};
pub use error::GraphError;
pub use graph::{SimilarityGraph, WeightedEdge};
pub use overlap::{overlap, OverlapRange};
pub use similarity::{compare, pair_weight, PairDiagnostics, SimilarityScorer, MAX_NUMBER_OF_BINS};
