//! Core time and price-history types.
//!
//! This module provides:
//! - `time`: `Date`, a type-safe calendar date for price samples
//! - `series`: `TimeSeries` (one validated price history) and `SeriesStore`
//!   (instrument key to series mapping)
//! - `error`: Structured error types for dates, series validation and
//!   information measures
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level:
//! - [`Date`] from `time`
//! - [`TimeSeries`], [`SeriesStore`] from `series`
//! - [`DateError`], [`InformationError`], [`SeriesError`] from `error`

pub mod error;
pub mod series;
pub mod time;

// Re-export commonly used types at module level
pub use error::{DateError, InformationError, SeriesError};
pub use series::{SeriesStore, TimeSeries};
pub use time::Date;
