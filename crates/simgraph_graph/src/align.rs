//! Date alignment of two series inside their overlap.
//!
//! [`align`] is a linear merge-join: both series are date sorted, so a pair
//! of cursors advancing on the smaller date finds every coinciding date in
//! `O(|a| + |b|)` without a nested scan.

use std::cmp::Ordering;

use simgraph_core::types::TimeSeries;

use crate::overlap::OverlapRange;

/// Values of two series sampled on identical dates, in date order.
///
/// `left` and `right` always have the same length.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AlignedPairs {
    left: Vec<f64>,
    right: Vec<f64>,
}

impl AlignedPairs {
    /// Creates an empty set of pairs.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty set with room for `capacity` pairs.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            left: Vec::with_capacity(capacity),
            right: Vec::with_capacity(capacity),
        }
    }

    /// Appends one aligned pair.
    #[inline]
    pub fn push(&mut self, left: f64, right: f64) {
        self.left.push(left);
        self.right.push(right);
    }

    /// Number of aligned pairs.
    #[inline]
    pub fn len(&self) -> usize {
        self.left.len()
    }

    /// Returns `true` if no dates coincided.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.left.is_empty()
    }

    /// Values of the first series.
    pub fn left(&self) -> &[f64] {
        &self.left
    }

    /// Values of the second series.
    pub fn right(&self) -> &[f64] {
        &self.right
    }

    /// The most recent `max` pairs (all of them if fewer).
    ///
    /// # Examples
    ///
    /// ```
    /// use simgraph_graph::AlignedPairs;
    ///
    /// let pairs: AlignedPairs = (0..5).map(|i| (i as f64, -(i as f64))).collect();
    /// let (left, right) = pairs.tail(2);
    /// assert_eq!(left, &[3.0, 4.0]);
    /// assert_eq!(right, &[-3.0, -4.0]);
    /// ```
    pub fn tail(&self, max: usize) -> (&[f64], &[f64]) {
        let from = self.len().saturating_sub(max);
        (&self.left[from..], &self.right[from..])
    }

    /// Iterates pairs in date order.
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.left.iter().copied().zip(self.right.iter().copied())
    }
}

impl FromIterator<(f64, f64)> for AlignedPairs {
    fn from_iter<I: IntoIterator<Item = (f64, f64)>>(iter: I) -> Self {
        let (left, right) = iter.into_iter().unzip();
        Self { left, right }
    }
}

/// Pairs up the values of `a` and `b` on every date both contain within
/// `range`.
///
/// Each cursor starts at the first date `>= range.start` (binary search)
/// and the merge stops as soon as either cursor passes `range.end` or runs
/// out. Repeated dates are consumed one-for-one.
///
/// # Examples
///
/// ```
/// use simgraph_core::types::{Date, TimeSeries};
/// use simgraph_graph::{align, overlap};
///
/// let d = |day| Date::from_ymd(2024, 1, day).unwrap();
/// let a = TimeSeries::new("a", vec![d(2), d(3), d(4), d(5)], vec![1.0, 2.0, 3.0, 4.0]).unwrap();
/// let b = TimeSeries::new("b", vec![d(3), d(5), d(8)], vec![10.0, 20.0, 30.0]).unwrap();
///
/// let pairs = align(&a, &b, &overlap(&a, &b).unwrap());
/// assert_eq!(pairs.left(), &[2.0, 4.0]);
/// assert_eq!(pairs.right(), &[10.0, 20.0]);
/// ```
pub fn align(a: &TimeSeries, b: &TimeSeries, range: &OverlapRange) -> AlignedPairs {
    let (a_dates, a_values) = (a.dates(), a.values());
    let (b_dates, b_values) = (b.dates(), b.values());

    let mut i = a_dates.partition_point(|d| *d < range.start);
    let mut j = b_dates.partition_point(|d| *d < range.start);

    let mut pairs = AlignedPairs::with_capacity((a.len() - i).min(b.len() - j));

    while i < a_dates.len()
        && j < b_dates.len()
        && a_dates[i] <= range.end
        && b_dates[j] <= range.end
    {
        match a_dates[i].cmp(&b_dates[j]) {
            Ordering::Equal => {
                pairs.push(a_values[i], b_values[j]);
                i += 1;
                j += 1;
            }
            Ordering::Less => i += 1,
            Ordering::Greater => j += 1,
        }
    }

    pairs
}
