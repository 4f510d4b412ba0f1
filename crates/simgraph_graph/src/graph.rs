//! The assembled similarity graph.
//!
//! Nodes carry the instrument's [`TimeSeries`]; edges carry the similarity
//! weight. The graph is built once by [`GraphAssembler`] and exposes only
//! read access afterwards.
//!
//! [`GraphAssembler`]: crate::assembler::GraphAssembler

use std::collections::BTreeMap;

use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;
use simgraph_core::types::{SeriesStore, TimeSeries};

/// An edge with both endpoints named by instrument key.
///
/// `source` always sorts before `target`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightedEdge<'a> {
    /// Lower instrument key
    pub source: &'a str,
    /// Higher instrument key
    pub target: &'a str,
    /// Similarity weight in `[0, 1]`
    pub weight: f64,
}

/// Undirected weighted graph over instrument keys.
#[derive(Debug, Clone)]
pub struct SimilarityGraph {
    graph: UnGraph<TimeSeries, f64>,
    index: BTreeMap<String, NodeIndex>,
}

impl SimilarityGraph {
    /// Creates an edgeless graph with one node per series, in key order.
    ///
    /// The node at `NodeIndex::new(k)` holds the `k`-th series of the store.
    pub(crate) fn with_nodes(store: SeriesStore) -> Self {
        let mut graph = UnGraph::with_capacity(store.len(), 0);
        let mut index = BTreeMap::new();
        for series in store {
            let key = series.id().to_string();
            let node = graph.add_node(series);
            index.insert(key, node);
        }
        Self { graph, index }
    }

    /// Adds the edge between the `source`-th and `target`-th nodes.
    pub(crate) fn add_weighted_edge(&mut self, source: usize, target: usize, weight: f64) {
        self.graph
            .add_edge(NodeIndex::new(source), NodeIndex::new(target), weight);
    }

    /// Number of instruments.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of recorded pairs.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Returns whether `key` is a node.
    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// The price history attached to `key`.
    pub fn series(&self, key: &str) -> Option<&TimeSeries> {
        self.index.get(key).map(|&node| &self.graph[node])
    }

    /// Weight of the edge between `a` and `b`, in either order.
    ///
    /// `None` if either key is unknown or the pair has no edge.
    pub fn weight(&self, a: &str, b: &str) -> Option<f64> {
        let a = *self.index.get(a)?;
        let b = *self.index.get(b)?;
        self.graph.find_edge(a, b).map(|edge| self.graph[edge])
    }

    /// Instrument keys in ascending order.
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.index.keys().map(String::as_str)
    }

    /// All edges, in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = WeightedEdge<'_>> + '_ {
        self.graph.edge_references().map(move |edge| {
            let a = self.graph[edge.source()].id();
            let b = self.graph[edge.target()].id();
            let (source, target) = if a <= b { (a, b) } else { (b, a) };
            WeightedEdge {
                source,
                target,
                weight: *edge.weight(),
            }
        })
    }

    /// The underlying petgraph graph, for callers running their own analysis.
    pub fn inner(&self) -> &UnGraph<TimeSeries, f64> {
        &self.graph
    }
}
