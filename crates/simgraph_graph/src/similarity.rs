//! Similarity weight of a pair of series.
//!
//! The weight is the adjusted mutual information of the two aligned value
//! sequences, each distinct price treated as a category, restricted to the
//! most recent [`MAX_NUMBER_OF_BINS`] pairs and floored at zero.
//!
//! # Degenerate inputs
//!
//! - No overlap or no coinciding dates: weight 0.0
//! - Both windows constant (one distinct value each): the partitions are
//!   trivially identical, weight 1.0
//! - One window constant, the other not: weight 0.0
//! - A single aligned pair: both windows are constant, weight 1.0

use simgraph_core::math::information::{adjusted_mutual_information, encode_categories};
use simgraph_core::types::TimeSeries;
use tracing::warn;

use crate::align::{align, AlignedPairs};
use crate::error::GraphError;
use crate::overlap::{overlap, OverlapRange};

/// Default number of most recent aligned pairs that enter the score.
pub const MAX_NUMBER_OF_BINS: usize = 100;

/// Scores aligned pairs with chance-adjusted mutual information.
///
/// # Example
///
/// ```
/// use simgraph_graph::{AlignedPairs, SimilarityScorer};
///
/// let scorer = SimilarityScorer::default();
/// let pairs: AlignedPairs = vec![(1.0, 5.0), (2.0, 6.0), (1.0, 5.0), (2.0, 6.0)]
///     .into_iter()
///     .collect();
///
/// assert_eq!(scorer.score(&pairs), 1.0);
/// assert_eq!(scorer.score(&AlignedPairs::new()), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimilarityScorer {
    max_bins: usize,
}

impl Default for SimilarityScorer {
    fn default() -> Self {
        Self {
            max_bins: MAX_NUMBER_OF_BINS,
        }
    }
}

impl SimilarityScorer {
    /// Creates a scorer that keeps at most `max_bins` recent pairs.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::InvalidConfig`] if `max_bins` is zero.
    pub fn new(max_bins: usize) -> Result<Self, GraphError> {
        if max_bins == 0 {
            return Err(GraphError::InvalidConfig(
                "max_bins must be positive".to_string(),
            ));
        }
        Ok(Self { max_bins })
    }

    /// Size of the scoring window.
    pub fn max_bins(&self) -> usize {
        self.max_bins
    }

    /// Weight in `[0, 1]` for the given aligned pairs.
    ///
    /// Truncation to the last `max_bins` pairs happens before scoring, so
    /// any longer history with the same tail scores identically.
    pub fn score(&self, pairs: &AlignedPairs) -> f64 {
        if pairs.is_empty() {
            return 0.0;
        }

        let (left, right) = pairs.tail(self.max_bins);
        let left = encode_categories(left);
        let right = encode_categories(right);

        match adjusted_mutual_information(&left, &right) {
            Ok(raw) => clamp_weight(raw),
            Err(e) => {
                warn!("Aligned pairs rejected by scorer: {}", e);
                0.0
            }
        }
    }
}

/// Floors at zero and caps at one; non-finite values become zero.
#[inline]
fn clamp_weight(raw: f64) -> f64 {
    if raw.is_finite() {
        raw.clamp(0.0, 1.0)
    } else {
        0.0
    }
}

/// Intermediate results for one pair of series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PairDiagnostics {
    /// Common date range, `None` if the series do not overlap
    pub overlap: Option<OverlapRange>,
    /// Number of coinciding dates inside the overlap
    pub aligned: usize,
    /// Number of pairs that entered the score
    pub scored: usize,
    /// Similarity weight in `[0, 1]`
    pub weight: f64,
}

/// Runs overlap, alignment and scoring for one pair and reports each stage.
///
/// # Examples
///
/// ```
/// use simgraph_core::types::{Date, TimeSeries};
/// use simgraph_graph::{compare, SimilarityScorer};
///
/// let d = |day| Date::from_ymd(2024, 1, day).unwrap();
/// let a = TimeSeries::new("a", vec![d(1), d(2)], vec![1.0, 1.0]).unwrap();
/// let b = TimeSeries::new("b", vec![d(3), d(4)], vec![1.0, 1.0]).unwrap();
///
/// let report = compare(&a, &b, &SimilarityScorer::default());
/// assert!(report.overlap.is_none());
/// assert_eq!(report.aligned, 0);
/// assert_eq!(report.weight, 0.0);
/// ```
pub fn compare(a: &TimeSeries, b: &TimeSeries, scorer: &SimilarityScorer) -> PairDiagnostics {
    let range = overlap(a, b);
    let pairs = match &range {
        Some(range) => align(a, b, range),
        None => AlignedPairs::new(),
    };

    PairDiagnostics {
        overlap: range,
        aligned: pairs.len(),
        scored: pairs.len().min(scorer.max_bins()),
        weight: scorer.score(&pairs),
    }
}

/// Similarity weight of one pair of series.
///
/// Pure function of its inputs; the assembler calls it once per unordered
/// pair.
#[inline]
pub fn pair_weight(a: &TimeSeries, b: &TimeSeries, scorer: &SimilarityScorer) -> f64 {
    compare(a, b, scorer).weight
}
