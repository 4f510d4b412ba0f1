//! Printable summaries of a graph and of a single pair.

use std::fmt::Write as _;

use serde::Serialize;
use simgraph_core::types::Date;
use simgraph_graph::{PairDiagnostics, SimilarityGraph};

/// One edge in a summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EdgeSummary {
    pub source: String,
    pub target: String,
    pub weight: f64,
}

/// Aggregate view of a built graph.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphSummary {
    pub nodes: usize,
    pub edges: usize,
    pub zero_weight_edges: usize,
    /// `None` for a graph without edges
    pub mean_weight: Option<f64>,
    /// Heaviest edges, ties broken by key
    pub top_edges: Vec<EdgeSummary>,
}

impl GraphSummary {
    pub fn from_graph(graph: &SimilarityGraph, top: usize) -> Self {
        let mut edges: Vec<EdgeSummary> = graph
            .edges()
            .map(|e| EdgeSummary {
                source: e.source.to_string(),
                target: e.target.to_string(),
                weight: e.weight,
            })
            .collect();

        let zero_weight_edges = edges.iter().filter(|e| e.weight == 0.0).count();
        let mean_weight = if edges.is_empty() {
            None
        } else {
            Some(edges.iter().map(|e| e.weight).sum::<f64>() / edges.len() as f64)
        };

        let total = edges.len();
        edges.sort_by(|a, b| {
            b.weight
                .total_cmp(&a.weight)
                .then_with(|| a.source.cmp(&b.source))
                .then_with(|| a.target.cmp(&b.target))
        });
        edges.truncate(top);

        Self {
            nodes: graph.node_count(),
            edges: total,
            zero_weight_edges,
            mean_weight,
            top_edges: edges,
        }
    }

    pub fn to_table(&self) -> String {
        let mut out = String::new();
        let mean = self
            .mean_weight
            .map(|m| format!("{:.6}", m))
            .unwrap_or_else(|| "-".to_string());

        let _ = writeln!(out, "Nodes:             {}", self.nodes);
        let _ = writeln!(out, "Edges:             {}", self.edges);
        let _ = writeln!(out, "Zero-weight edges: {}", self.zero_weight_edges);
        let _ = writeln!(out, "Mean weight:       {}", mean);

        if !self.top_edges.is_empty() {
            let width = self
                .top_edges
                .iter()
                .flat_map(|e| [e.source.len(), e.target.len()])
                .max()
                .unwrap_or(0)
                .max(6);
            let _ = writeln!(out);
            let _ = writeln!(
                out,
                "{:<width$}  {:<width$}  {:>8}",
                "Source",
                "Target",
                "Weight",
                width = width
            );
            for e in &self.top_edges {
                let _ = writeln!(
                    out,
                    "{:<width$}  {:<width$}  {:>8.6}",
                    e.source,
                    e.target,
                    e.weight,
                    width = width
                );
            }
        }
        out
    }
}

/// Diagnostics for one pair of instruments.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PairSummary {
    pub source: String,
    pub target: String,
    pub overlap_start: Option<Date>,
    pub overlap_end: Option<Date>,
    pub aligned: usize,
    pub scored: usize,
    pub weight: f64,
}

impl PairSummary {
    pub fn new(source: &str, target: &str, diagnostics: &PairDiagnostics) -> Self {
        Self {
            source: source.to_string(),
            target: target.to_string(),
            overlap_start: diagnostics.overlap.map(|r| r.start),
            overlap_end: diagnostics.overlap.map(|r| r.end),
            aligned: diagnostics.aligned,
            scored: diagnostics.scored,
            weight: diagnostics.weight,
        }
    }

    pub fn to_table(&self) -> String {
        let overlap = match (self.overlap_start, self.overlap_end) {
            (Some(start), Some(end)) => format!("{} .. {}", start, end),
            _ => "none".to_string(),
        };

        let mut out = String::new();
        let _ = writeln!(out, "Pair:    {} / {}", self.source, self.target);
        let _ = writeln!(out, "Overlap: {}", overlap);
        let _ = writeln!(out, "Aligned: {}", self.aligned);
        let _ = writeln!(out, "Scored:  {}", self.scored);
        let _ = writeln!(out, "Weight:  {:.6}", self.weight);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use simgraph_core::types::SeriesStore;
    use simgraph_graph::{GraphAssembler, OverlapRange};

    fn d(day: u32) -> Date {
        Date::from_ymd(2024, 3, day).unwrap()
    }

    fn sample_graph() -> SimilarityGraph {
        let dates = vec![d(1), d(4), d(5), d(6)];
        let store = SeriesStore::from_columns(vec![
            ("AAA", dates.clone(), vec![1.0, 2.0, 1.0, 2.0]),
            ("BBB", dates.clone(), vec![5.0, 6.0, 5.0, 6.0]),
            ("CCC", vec![d(20), d(21)], vec![1.0, 2.0]),
        ])
        .unwrap();
        GraphAssembler::default().build(store)
    }

    #[test]
    fn test_graph_summary_counts() {
        let summary = GraphSummary::from_graph(&sample_graph(), 1);

        assert_eq!(summary.nodes, 3);
        assert_eq!(summary.edges, 3);
        assert_eq!(summary.zero_weight_edges, 2);
        assert_eq!(summary.mean_weight, Some(1.0 / 3.0));
        assert_eq!(
            summary.top_edges,
            vec![EdgeSummary {
                source: "AAA".to_string(),
                target: "BBB".to_string(),
                weight: 1.0,
            }]
        );
    }

    #[test]
    fn test_top_edges_tie_break_by_key() {
        let summary = GraphSummary::from_graph(&sample_graph(), 10);
        let order: Vec<_> = summary
            .top_edges
            .iter()
            .map(|e| (e.source.as_str(), e.target.as_str()))
            .collect();
        assert_eq!(order, vec![("AAA", "BBB"), ("AAA", "CCC"), ("BBB", "CCC")]);
    }

    #[test]
    fn test_empty_graph_summary() {
        let graph = GraphAssembler::default().build(SeriesStore::new());
        let summary = GraphSummary::from_graph(&graph, 5);
        assert_eq!(summary.nodes, 0);
        assert_eq!(summary.mean_weight, None);
        assert!(summary.to_table().contains("Mean weight:       -"));
    }

    #[test]
    fn test_graph_summary_json() {
        let summary = GraphSummary::from_graph(&sample_graph(), 1);
        let json: serde_json::Value = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["nodes"], 3);
        assert_eq!(json["top_edges"][0]["source"], "AAA");
    }

    #[test]
    fn test_pair_summary_without_overlap() {
        let diagnostics = PairDiagnostics {
            overlap: None,
            aligned: 0,
            scored: 0,
            weight: 0.0,
        };
        let summary = PairSummary::new("a", "b", &diagnostics);
        assert!(summary.to_table().contains("Overlap: none"));
    }

    #[test]
    fn test_pair_summary_json_dates() {
        let diagnostics = PairDiagnostics {
            overlap: Some(OverlapRange {
                start: d(1),
                end: d(6),
            }),
            aligned: 4,
            scored: 4,
            weight: 1.0,
        };
        let summary = PairSummary::new("AAA", "BBB", &diagnostics);
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["overlap_start"], "2024-03-01");
        assert!(summary.to_table().contains("2024-03-01 .. 2024-03-06"));
    }
}
