//! Core error types.
//!
//! - `DateError`: bad calendar components or unparsable date fields
//! - `SeriesError`: violations of the price-history invariants
//! - `InformationError`: mismatched labelings passed to the AMI routines

use thiserror::Error;

use super::time::Date;

/// Errors building a [`Date`].
///
/// # Examples
/// ```
/// use simgraph_core::types::DateError;
///
/// let err = DateError::InvalidDate { year: 2024, month: 2, day: 30 };
/// assert_eq!(format!("{}", err), "Invalid date: 2024-2-30");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    /// The components name a day that does not exist.
    #[error("Invalid date: {year}-{month}-{day}")]
    InvalidDate {
        /// Requested year
        year: i32,
        /// Requested month
        month: u32,
        /// Requested day of month
        day: u32,
    },

    /// The text is not a `YYYY-MM-DD` date.
    #[error("Date parse error: {0}")]
    ParseError(String),
}

/// Price-history validation errors.
///
/// A series that fails any of these checks never reaches the similarity
/// pipeline: the merge-join alignment is only correct on sorted, parallel,
/// non-empty inputs.
///
/// # Variants
/// - `Empty`: No samples at all
/// - `LengthMismatch`: Date and value sequences differ in length
/// - `UnsortedDates`: A date precedes its predecessor
/// - `NonFiniteValue`: A NaN or infinite price
/// - `DuplicateInstrument`: The same key inserted twice into a store
///
/// # Examples
/// ```
/// use simgraph_core::types::SeriesError;
///
/// let err = SeriesError::LengthMismatch { id: "ibm.us.txt".to_string(), dates: 3, values: 2 };
/// assert!(format!("{}", err).contains("3 dates but 2 values"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SeriesError {
    /// The series has no samples.
    #[error("Invalid series '{id}': no samples")]
    Empty {
        /// Instrument key
        id: String,
    },

    /// Date and value sequences differ in length.
    #[error("Invalid series '{id}': {dates} dates but {values} values")]
    LengthMismatch {
        /// Instrument key
        id: String,
        /// Number of dates supplied
        dates: usize,
        /// Number of values supplied
        values: usize,
    },

    /// Dates are not in non-decreasing order.
    #[error("Invalid series '{id}': date {current} at index {index} precedes {previous}")]
    UnsortedDates {
        /// Instrument key
        id: String,
        /// Index of the first out-of-order date
        index: usize,
        /// Date at `index - 1`
        previous: Date,
        /// Date at `index`
        current: Date,
    },

    /// A value is NaN or infinite.
    #[error("Invalid series '{id}': non-finite value {value} at index {index}")]
    NonFiniteValue {
        /// Instrument key
        id: String,
        /// Index of the offending value
        index: usize,
        /// The offending value
        value: f64,
    },

    /// The instrument key is already present in the store.
    #[error("Duplicate instrument: {0}")]
    DuplicateInstrument(String),
}

impl SeriesError {
    /// Returns the instrument key the error refers to.
    pub fn instrument(&self) -> &str {
        match self {
            SeriesError::Empty { id }
            | SeriesError::LengthMismatch { id, .. }
            | SeriesError::UnsortedDates { id, .. }
            | SeriesError::NonFiniteValue { id, .. } => id.as_str(),
            SeriesError::DuplicateInstrument(id) => id.as_str(),
        }
    }
}

/// Errors from information-theoretic measures.
///
/// # Examples
/// ```
/// use simgraph_core::types::InformationError;
///
/// let err = InformationError::LengthMismatch { left: 4, right: 3 };
/// assert_eq!(format!("{}", err), "Labelings differ in length: 4 vs 3");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InformationError {
    /// The two labelings do not have the same number of samples.
    #[error("Labelings differ in length: {left} vs {right}")]
    LengthMismatch {
        /// Length of the first labeling
        left: usize,
        /// Length of the second labeling
        right: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_error_display() {
        let err = DateError::ParseError("'abc': input contains invalid characters".to_string());
        assert!(format!("{}", err).starts_with("Date parse error: 'abc'"));
    }

    #[test]
    fn test_unsorted_display_names_both_dates() {
        let err = SeriesError::UnsortedDates {
            id: "spy.us.txt".to_string(),
            index: 4,
            previous: Date::from_ymd(2010, 1, 5).unwrap(),
            current: Date::from_ymd(2010, 1, 4).unwrap(),
        };
        let msg = format!("{}", err);
        assert!(msg.contains("2010-01-04"));
        assert!(msg.contains("2010-01-05"));
        assert!(msg.contains("index 4"));
    }

    #[test]
    fn test_instrument_accessor() {
        let err = SeriesError::Empty {
            id: "a.us.txt".to_string(),
        };
        assert_eq!(err.instrument(), "a.us.txt");

        let err = SeriesError::DuplicateInstrument("b.us.txt".to_string());
        assert_eq!(err.instrument(), "b.us.txt");
    }
}
