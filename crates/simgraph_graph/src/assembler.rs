//! All-pairs graph assembly.
//!
//! [`GraphAssembler::build`] runs in two steps:
//!
//! 1. [`GraphAssembler::pair_weights`] scores every unordered pair of
//!    instruments, visiting keys in ascending order and only pairs with
//!    `source < target`. Each result depends on its two series alone.
//! 2. The resulting triples are merged into a [`SimilarityGraph`] whose
//!    nodes carry the series.
//!
//! Cost is `O(K²)` pairs for `K` instruments, each linear in series length;
//! the instrument count is bounded by the caller.
//!
//! # Edge policy
//!
//! [`EdgePolicy::KeepZero`] (the default) records an edge for every pair,
//! including weight 0.0, so a graph of `K` nodes has `K(K-1)/2` edges.
//! [`EdgePolicy::OmitZero`] drops zero-weight pairs.

use std::fmt;
use std::str::FromStr;

use simgraph_core::types::SeriesStore;
use tracing::{debug, info};

use crate::error::GraphError;
use crate::graph::SimilarityGraph;
use crate::similarity::{pair_weight, SimilarityScorer};

/// Number of scored pairs between progress log lines.
pub const DEFAULT_PROGRESS_INTERVAL: usize = 100;

/// Whether pairs with zero weight become edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EdgePolicy {
    /// Every pair becomes an edge
    #[default]
    KeepZero,
    /// Pairs with weight 0.0 are left out
    OmitZero,
}

impl EdgePolicy {
    /// Returns whether a pair with `weight` becomes an edge.
    #[inline]
    pub fn admits(&self, weight: f64) -> bool {
        match self {
            EdgePolicy::KeepZero => true,
            EdgePolicy::OmitZero => weight > 0.0,
        }
    }

    /// Configuration name of the policy.
    pub fn name(&self) -> &'static str {
        match self {
            EdgePolicy::KeepZero => "keep-zero",
            EdgePolicy::OmitZero => "omit-zero",
        }
    }
}

impl fmt::Display for EdgePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for EdgePolicy {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "keep-zero" | "keep_zero" | "keep" => Ok(EdgePolicy::KeepZero),
            "omit-zero" | "omit_zero" | "omit" => Ok(EdgePolicy::OmitZero),
            other => Err(GraphError::UnknownEdgePolicy(other.to_string())),
        }
    }
}

/// Weight of one unordered pair, endpoints given by position in key order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PairWeight {
    /// Position of the lower key
    pub source: usize,
    /// Position of the higher key
    pub target: usize,
    /// Similarity weight in `[0, 1]`
    pub weight: f64,
}

/// Builds a [`SimilarityGraph`] from a [`SeriesStore`].
///
/// # Example
///
/// ```
/// use simgraph_core::types::{Date, SeriesStore};
/// use simgraph_graph::{EdgePolicy, GraphAssembler, SimilarityScorer};
///
/// let d = |day| Date::from_ymd(2024, 2, day).unwrap();
/// let store = SeriesStore::from_columns(vec![
///     ("AAA", vec![d(1), d(2)], vec![1.0, 2.0]),
///     ("BBB", vec![d(10), d(11)], vec![1.0, 2.0]),
/// ])
/// .unwrap();
///
/// let assembler = GraphAssembler::new(SimilarityScorer::default())
///     .with_edge_policy(EdgePolicy::OmitZero);
/// let graph = assembler.build(store);
///
/// assert_eq!(graph.node_count(), 2);
/// assert_eq!(graph.edge_count(), 0);
/// ```
#[derive(Debug, Clone)]
pub struct GraphAssembler {
    scorer: SimilarityScorer,
    edge_policy: EdgePolicy,
    progress_interval: usize,
}

impl Default for GraphAssembler {
    fn default() -> Self {
        Self::new(SimilarityScorer::default())
    }
}

impl GraphAssembler {
    /// Creates an assembler with the default edge policy.
    pub fn new(scorer: SimilarityScorer) -> Self {
        Self {
            scorer,
            edge_policy: EdgePolicy::default(),
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
        }
    }

    /// Sets the zero-weight edge policy.
    pub fn with_edge_policy(mut self, edge_policy: EdgePolicy) -> Self {
        self.edge_policy = edge_policy;
        self
    }

    /// Sets how many pairs are scored between progress log lines.
    pub fn with_progress_interval(mut self, interval: usize) -> Self {
        self.progress_interval = interval.max(1);
        self
    }

    /// The scorer applied to each pair.
    pub fn scorer(&self) -> &SimilarityScorer {
        &self.scorer
    }

    /// The zero-weight edge policy.
    pub fn edge_policy(&self) -> EdgePolicy {
        self.edge_policy
    }

    /// Scores every unordered pair of the store exactly once.
    ///
    /// Results are ordered by `(source, target)`.
    pub fn pair_weights(&self, store: &SeriesStore) -> Vec<PairWeight> {
        let series: Vec<_> = store.iter().collect();
        let n = series.len();
        let total = n * n.saturating_sub(1) / 2;

        let mut weights = Vec::with_capacity(total);
        for (source, a) in series.iter().enumerate() {
            for (offset, b) in series[source + 1..].iter().enumerate() {
                let target = source + 1 + offset;
                let weight = pair_weight(a, b, &self.scorer);
                debug!("{} ~ {}: {:.6}", a.id(), b.id(), weight);
                weights.push(PairWeight {
                    source,
                    target,
                    weight,
                });

                let done = weights.len();
                if done % self.progress_interval == 0 || done == total {
                    info!("Scored pairs [{}/{}]", done, total);
                }
            }
        }
        weights
    }

    /// Builds the graph: one node per series, one edge per admitted pair.
    pub fn build(&self, store: SeriesStore) -> SimilarityGraph {
        info!(
            "Building similarity graph over {} instruments (max_bins = {}, edges = {})",
            store.len(),
            self.scorer.max_bins(),
            self.edge_policy
        );

        let weights = self.pair_weights(&store);
        let mut graph = SimilarityGraph::with_nodes(store);

        for pair in weights {
            if self.edge_policy.admits(pair.weight) {
                graph.add_weighted_edge(pair.source, pair.target, pair.weight);
            }
        }

        info!(
            "Similarity graph built: {} nodes, {} edges",
            graph.node_count(),
            graph.edge_count()
        );
        graph
    }
}
