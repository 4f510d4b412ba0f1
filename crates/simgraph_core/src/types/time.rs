//! Calendar date type for price samples.
//!
//! Price files carry one sample per trading day, so day resolution is all
//! the similarity pipeline needs. `Date` orders chronologically, which is
//! what the overlap and merge-join steps rely on.
//!
//! # Examples
//!
//! ```
//! use simgraph_core::types::time::Date;
//!
//! let start = Date::from_ymd(2017, 11, 1).unwrap();
//! let end: Date = "2017-11-10".parse().unwrap();
//!
//! assert!(start < end);
//! assert_eq!(end - start, 9);
//! ```

use chrono::{Datelike, NaiveDate};
use std::fmt;
use std::ops::Sub;
use std::str::FromStr;

use super::error::DateError;

/// Format used by price files and by `Display`.
const ISO_FORMAT: &str = "%Y-%m-%d";

/// Trading day of a price sample, ordered chronologically.
///
/// # Examples
///
/// ```
/// use simgraph_core::types::time::Date;
///
/// let date = Date::from_ymd(2024, 6, 15).unwrap();
/// assert_eq!(date.year(), 2024);
/// assert_eq!(date.to_string(), "2024-06-15");
///
/// let parsed: Date = "2024-06-15".parse().unwrap();
/// assert_eq!(date, parsed);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Date(NaiveDate);

impl Date {
    /// Builds a date from calendar components.
    ///
    /// Fails with [`DateError::InvalidDate`] for days that do not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use simgraph_core::types::time::Date;
    ///
    /// assert!(Date::from_ymd(2024, 2, 29).is_ok());
    /// assert!(Date::from_ymd(2023, 2, 29).is_err());
    /// ```
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, DateError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or(DateError::InvalidDate { year, month, day })
    }

    /// Parses a `YYYY-MM-DD` field from a price file.
    ///
    /// Surrounding whitespace is ignored, since price files are often
    /// written with padded columns.
    ///
    /// # Examples
    ///
    /// ```
    /// use simgraph_core::types::time::Date;
    ///
    /// let date = Date::parse(" 2005-02-25").unwrap();
    /// assert_eq!(date.month(), 2);
    ///
    /// assert!(Date::parse("25/02/2005").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, DateError> {
        let trimmed = s.trim();
        NaiveDate::parse_from_str(trimmed, ISO_FORMAT)
            .map(Date)
            .map_err(|e| DateError::ParseError(format!("'{}': {}", trimmed, e)))
    }

    /// Unwraps the chrono value.
    pub fn into_inner(self) -> NaiveDate {
        self.0
    }

    /// Calendar year.
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Month, 1 to 12.
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Day of month.
    pub fn day(&self) -> u32 {
        self.0.day()
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Date(date)
    }
}

impl Sub for Date {
    type Output = i64;

    /// Signed calendar-day difference.
    fn sub(self, other: Self) -> i64 {
        (self.0 - other.0).num_days()
    }
}

impl FromStr for Date {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, DateError> {
        Date::parse(s)
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(ISO_FORMAT))
    }
}
