//! Information-theoretic dependence between two categorical labelings.
//!
//! The central measure is adjusted mutual information (AMI):
//!
//! ```text
//! AMI = (MI - E[MI]) / (mean(H(a), H(b)) - E[MI])
//! ```
//!
//! where `MI` is the mutual information of the contingency table, `E[MI]`
//! its expectation under random permutations (hypergeometric model) and
//! `H` the Shannon entropy of each labeling. All logarithms are natural.
//!
//! AMI is 1.0 for identical partitions and close to 0.0 for independent
//! ones; it can be negative when agreement is worse than chance.
//!
//! Price values are not categorical, so [`encode_categories`] maps each
//! distinct value to a label before any of this applies.
//!
//! # Examples
//!
//! ```
//! use simgraph_core::math::information::{adjusted_mutual_information, encode_categories};
//!
//! let a = encode_categories(&[10.0, 10.0, 11.0, 11.0]);
//! let b = encode_categories(&[5.0, 5.0, 4.5, 4.5]);
//! assert_eq!(adjusted_mutual_information(&a, &b).unwrap(), 1.0);
//!
//! // One labeling carries no information
//! let ami = adjusted_mutual_information(&[0, 0, 0, 0], &[0, 1, 2, 3]).unwrap();
//! assert_eq!(ami, 0.0);
//! ```

use std::collections::{BTreeMap, HashMap};

use statrs::function::gamma::ln_gamma;

use crate::types::error::InformationError;

/// Maps distinct `f64` values to dense category labels.
///
/// Labels are assigned in first-occurrence order. Values are compared
/// bitwise, except that `-0.0` and `0.0` share a label.
#[derive(Debug, Clone, Default)]
pub struct CategoryEncoder {
    labels: HashMap<u64, usize>,
}

impl CategoryEncoder {
    /// Creates an encoder with no known categories.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the label of `value`, allocating a new one if unseen.
    pub fn encode(&mut self, value: f64) -> usize {
        let next = self.labels.len();
        *self.labels.entry(category_key(value)).or_insert(next)
    }

    /// Number of distinct categories seen so far.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Returns `true` if no value has been encoded.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

#[inline]
fn category_key(value: f64) -> u64 {
    if value == 0.0 {
        0.0_f64.to_bits()
    } else {
        value.to_bits()
    }
}

/// Encodes a value sequence as category labels.
///
/// # Examples
///
/// ```
/// use simgraph_core::math::information::encode_categories;
///
/// assert_eq!(encode_categories(&[2.5, 1.0, 2.5, -0.0, 0.0]), vec![0, 1, 0, 2, 2]);
/// ```
pub fn encode_categories(values: &[f64]) -> Vec<usize> {
    let mut encoder = CategoryEncoder::new();
    values.iter().map(|&v| encoder.encode(v)).collect()
}

/// Sparse contingency table of two labelings.
///
/// Rows index the classes of the first labeling, columns the classes of the
/// second, both in ascending label order. Only non-zero cells are stored.
#[derive(Debug, Clone, PartialEq)]
pub struct Contingency {
    row_sums: Vec<usize>,
    col_sums: Vec<usize>,
    cells: Vec<(usize, usize, usize)>,
    n_samples: usize,
}

impl Contingency {
    /// Builds the table from two parallel labelings.
    ///
    /// # Errors
    ///
    /// Returns [`InformationError::LengthMismatch`] if the labelings differ
    /// in length.
    pub fn from_labels<L: Ord>(a: &[L], b: &[L]) -> Result<Self, InformationError> {
        if a.len() != b.len() {
            return Err(InformationError::LengthMismatch {
                left: a.len(),
                right: b.len(),
            });
        }

        let rows = dense_index(a);
        let cols = dense_index(b);

        let mut row_sums = vec![0; rows.len()];
        let mut col_sums = vec![0; cols.len()];
        let mut counts: BTreeMap<(usize, usize), usize> = BTreeMap::new();

        for (x, y) in a.iter().zip(b) {
            let i = rows[x];
            let j = cols[y];
            row_sums[i] += 1;
            col_sums[j] += 1;
            *counts.entry((i, j)).or_insert(0) += 1;
        }

        let cells = counts.into_iter().map(|((i, j), n)| (i, j, n)).collect();

        Ok(Self {
            row_sums,
            col_sums,
            cells,
            n_samples: a.len(),
        })
    }

    /// Class sizes of the first labeling.
    pub fn row_sums(&self) -> &[usize] {
        &self.row_sums
    }

    /// Class sizes of the second labeling.
    pub fn col_sums(&self) -> &[usize] {
        &self.col_sums
    }

    /// Non-zero cells as `(row, col, count)`, ordered by row then column.
    pub fn cells(&self) -> &[(usize, usize, usize)] {
        &self.cells
    }

    /// Total number of samples.
    pub fn n_samples(&self) -> usize {
        self.n_samples
    }

    /// Returns `true` if every class of one labeling maps to exactly one
    /// class of the other, i.e. the two partitions are identical up to
    /// relabeling.
    ///
    /// Every row and column holds at least one non-zero cell, so equal
    /// row, column and cell counts force a one-to-one correspondence.
    pub fn is_bijection(&self) -> bool {
        self.row_sums.len() == self.col_sums.len() && self.cells.len() == self.row_sums.len()
    }
}

fn dense_index<L: Ord>(labels: &[L]) -> BTreeMap<&L, usize> {
    let mut index: BTreeMap<&L, usize> = labels.iter().map(|l| (l, 0)).collect();
    for (position, slot) in index.values_mut().enumerate() {
        *slot = position;
    }
    index
}

/// Shannon entropy (nats) of a labeling.
///
/// Returns 1.0 for an empty labeling and 0.0 for a single class.
///
/// # Examples
///
/// ```
/// use simgraph_core::math::information::entropy;
///
/// assert_eq!(entropy(&[7, 7, 7]), 0.0);
/// assert!((entropy(&[0, 1]) - 2.0_f64.ln()).abs() < 1e-12);
/// ```
pub fn entropy<L: Ord>(labels: &[L]) -> f64 {
    if labels.is_empty() {
        return 1.0;
    }
    let mut counts: BTreeMap<&L, usize> = BTreeMap::new();
    for label in labels {
        *counts.entry(label).or_insert(0) += 1;
    }
    let counts: Vec<usize> = counts.into_values().collect();
    entropy_of_counts(&counts, labels.len())
}

fn entropy_of_counts(counts: &[usize], n_samples: usize) -> f64 {
    if counts.len() <= 1 {
        return 0.0;
    }
    let total = n_samples as f64;
    let ln_total = total.ln();
    -counts
        .iter()
        .map(|&c| {
            let c = c as f64;
            (c / total) * (c.ln() - ln_total)
        })
        .sum::<f64>()
}

/// Mutual information (nats) of a contingency table.
///
/// Cell contributions smaller than machine epsilon are dropped and the sum
/// is clipped at zero. A table with a single row or column has zero MI.
pub fn mutual_information(contingency: &Contingency) -> f64 {
    if contingency.row_sums.len() == 1 || contingency.col_sums.len() == 1 {
        return 0.0;
    }
    if contingency.n_samples == 0 {
        return 0.0;
    }

    let total = contingency.n_samples as f64;
    let ln_total = total.ln();

    let mi: f64 = contingency
        .cells
        .iter()
        .map(|&(i, j, nij)| {
            let nij = nij as f64;
            let p = nij / total;
            let outer = contingency.row_sums[i] as f64 * contingency.col_sums[j] as f64;
            let log_outer = -outer.ln() + ln_total + ln_total;
            let term = p * (nij.ln() - ln_total) + p * log_outer;
            if term.abs() < f64::EPSILON {
                0.0
            } else {
                term
            }
        })
        .sum();

    mi.max(0.0)
}

/// Expected mutual information (nats) under random relabeling.
///
/// Sums, for every cell, over the feasible overlap sizes `nij` weighted by
/// their hypergeometric probability. Factorials are evaluated in log space.
pub fn expected_mutual_information(contingency: &Contingency) -> f64 {
    let a = &contingency.row_sums;
    let b = &contingency.col_sums;
    if a.len() <= 1 || b.len() <= 1 {
        return 0.0;
    }

    let n = contingency.n_samples;
    let total = n as f64;
    let ln_total = total.ln();

    // ln(m!) for m in 0..=n
    let ln_fact: Vec<f64> = (0..=n).map(|m| ln_gamma(m as f64 + 1.0)).collect();
    let ln_n_fact = ln_fact[n];

    let mut emi = 0.0;
    for &ai in a {
        let ln_ai = (ai as f64).ln();
        for &bj in b {
            let ln_bj = (bj as f64).ln();
            let fixed = ln_fact[ai] + ln_fact[bj] + ln_fact[n - ai] + ln_fact[n - bj] - ln_n_fact;

            let start = (ai + bj).saturating_sub(n).max(1);
            let end = ai.min(bj);
            for nij in start..=end {
                let nij_f = nij as f64;
                let term1 = nij_f / total;
                let term2 = ln_total + nij_f.ln() - ln_ai - ln_bj;
                let gln = fixed
                    - ln_fact[nij]
                    - ln_fact[ai - nij]
                    - ln_fact[bj - nij]
                    - ln_fact[n + nij - ai - bj];
                emi += term1 * term2 * gln.exp();
            }
        }
    }
    emi
}

/// Adjusted mutual information between two labelings.
///
/// Uses the arithmetic mean of the two entropies as normaliser. Identical
/// partitions (including two single-class labelings and two empty ones)
/// score exactly 1.0. Otherwise the denominator is kept at least machine
/// epsilon away from zero, preserving its sign.
///
/// # Errors
///
/// Returns [`InformationError::LengthMismatch`] if the labelings differ in
/// length.
///
/// # Examples
///
/// ```
/// use simgraph_core::math::information::adjusted_mutual_information;
///
/// assert_eq!(adjusted_mutual_information(&[0, 0, 1, 1], &[1, 1, 0, 0]).unwrap(), 1.0);
/// assert!(adjusted_mutual_information(&[0, 1], &[0]).is_err());
/// ```
pub fn adjusted_mutual_information<L: Ord>(a: &[L], b: &[L]) -> Result<f64, InformationError> {
    let contingency = Contingency::from_labels(a, b)?;
    if contingency.is_bijection() {
        return Ok(1.0);
    }

    let mi = mutual_information(&contingency);
    let emi = expected_mutual_information(&contingency);
    let h_a = entropy_of_counts(&contingency.row_sums, contingency.n_samples);
    let h_b = entropy_of_counts(&contingency.col_sums, contingency.n_samples);

    let normaliser = (h_a + h_b) / 2.0;
    let mut denominator = normaliser - emi;
    if denominator < 0.0 {
        denominator = denominator.min(-f64::EPSILON);
    } else {
        denominator = denominator.max(f64::EPSILON);
    }

    Ok((mi - emi) / denominator)
}
