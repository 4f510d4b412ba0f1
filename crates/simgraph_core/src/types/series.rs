//! Validated price histories.
//!
//! A [`TimeSeries`] is one instrument's opening prices keyed by trading
//! date. Construction enforces the invariants the alignment step depends
//! on, after which the series is immutable. A [`SeriesStore`] maps
//! instrument keys to series and iterates them in ascending key order.
//!
//! # Examples
//!
//! ```
//! use simgraph_core::types::{Date, SeriesStore, TimeSeries};
//!
//! let d = |day| Date::from_ymd(2024, 3, day).unwrap();
//!
//! let mut store = SeriesStore::new();
//! store.insert(TimeSeries::new("bbb", vec![d(1), d(4)], vec![10.0, 11.0]).unwrap()).unwrap();
//! store.insert(TimeSeries::new("aaa", vec![d(1)], vec![3.5]).unwrap()).unwrap();
//!
//! let keys: Vec<&str> = store.keys().collect();
//! assert_eq!(keys, vec!["aaa", "bbb"]);
//! ```

use std::collections::btree_map::{self, BTreeMap};

use super::error::SeriesError;
use super::time::Date;

/// One instrument's date-ordered price history.
///
/// # Invariants
///
/// - At least one sample
/// - `dates.len() == values.len()`
/// - Dates are non-decreasing
/// - Every value is finite
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TimeSeries {
    id: String,
    dates: Vec<Date>,
    values: Vec<f64>,
}

impl TimeSeries {
    /// Creates a series after checking every invariant.
    ///
    /// # Errors
    ///
    /// Returns the first violated invariant as a [`SeriesError`].
    ///
    /// # Examples
    ///
    /// ```
    /// use simgraph_core::types::{Date, SeriesError, TimeSeries};
    ///
    /// let d1 = Date::from_ymd(2024, 1, 2).unwrap();
    /// let d2 = Date::from_ymd(2024, 1, 3).unwrap();
    ///
    /// assert!(TimeSeries::new("x", vec![d1, d2], vec![1.0, 2.0]).is_ok());
    ///
    /// let err = TimeSeries::new("x", vec![d2, d1], vec![1.0, 2.0]).unwrap_err();
    /// assert!(matches!(err, SeriesError::UnsortedDates { index: 1, .. }));
    /// ```
    pub fn new(
        id: impl Into<String>,
        dates: Vec<Date>,
        values: Vec<f64>,
    ) -> Result<Self, SeriesError> {
        let id = id.into();

        if dates.len() != values.len() {
            return Err(SeriesError::LengthMismatch {
                id,
                dates: dates.len(),
                values: values.len(),
            });
        }
        if dates.is_empty() {
            return Err(SeriesError::Empty { id });
        }
        if let Some(index) = dates.windows(2).position(|w| w[1] < w[0]) {
            return Err(SeriesError::UnsortedDates {
                id,
                index: index + 1,
                previous: dates[index],
                current: dates[index + 1],
            });
        }
        if let Some(index) = values.iter().position(|v| !v.is_finite()) {
            let value = values[index];
            return Err(SeriesError::NonFiniteValue { id, index, value });
        }

        Ok(Self { id, dates, values })
    }

    /// Instrument key.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Sample dates, non-decreasing.
    pub fn dates(&self) -> &[Date] {
        &self.dates
    }

    /// Sample values, parallel to [`dates`](Self::dates).
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of samples (always at least one).
    #[inline]
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Always `false`; present for API symmetry with collections.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Date of the earliest sample.
    #[inline]
    pub fn first_date(&self) -> Date {
        self.dates[0]
    }

    /// Date of the latest sample.
    #[inline]
    pub fn last_date(&self) -> Date {
        self.dates[self.dates.len() - 1]
    }

    /// Iterates `(date, value)` samples in date order.
    pub fn samples(&self) -> impl Iterator<Item = (Date, f64)> + '_ {
        self.dates.iter().copied().zip(self.values.iter().copied())
    }
}

/// Instrument key to [`TimeSeries`] mapping, ordered by key.
///
/// Key order is the total order the graph assembler uses to visit each
/// unordered pair exactly once.
#[derive(Debug, Clone, Default)]
pub struct SeriesStore {
    series: BTreeMap<String, TimeSeries>,
}

impl SeriesStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from raw `(key, dates, values)` columns, validating each.
    ///
    /// # Errors
    ///
    /// Fails on the first invalid series or duplicate key.
    pub fn from_columns<I, K>(columns: I) -> Result<Self, SeriesError>
    where
        I: IntoIterator<Item = (K, Vec<Date>, Vec<f64>)>,
        K: Into<String>,
    {
        let mut store = Self::new();
        for (key, dates, values) in columns {
            store.insert(TimeSeries::new(key, dates, values)?)?;
        }
        Ok(store)
    }

    /// Adds a series under its own key.
    ///
    /// # Errors
    ///
    /// Returns [`SeriesError::DuplicateInstrument`] if the key is taken.
    pub fn insert(&mut self, series: TimeSeries) -> Result<(), SeriesError> {
        match self.series.entry(series.id.clone()) {
            btree_map::Entry::Occupied(_) => Err(SeriesError::DuplicateInstrument(series.id)),
            btree_map::Entry::Vacant(slot) => {
                slot.insert(series);
                Ok(())
            }
        }
    }

    /// Looks up a series by key.
    pub fn get(&self, key: &str) -> Option<&TimeSeries> {
        self.series.get(key)
    }

    /// Returns whether the key is present.
    pub fn contains(&self, key: &str) -> bool {
        self.series.contains_key(key)
    }

    /// Number of instruments.
    pub fn len(&self) -> usize {
        self.series.len()
    }

    /// Returns `true` if the store holds no instruments.
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// Keys in ascending order.
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.series.keys().map(String::as_str)
    }

    /// Series in ascending key order.
    pub fn iter(&self) -> impl Iterator<Item = &TimeSeries> + '_ {
        self.series.values()
    }
}

impl IntoIterator for SeriesStore {
    type Item = TimeSeries;
    type IntoIter = btree_map::IntoValues<String, TimeSeries>;

    fn into_iter(self) -> Self::IntoIter {
        self.series.into_values()
    }
}
