//! # simgraph_core: Foundation Types for Similarity Graphs
//!
//! ## Layer 1 (Foundation) Role
//!
//! simgraph_core is the bottom layer of the workspace, providing:
//! - Calendar dates: `Date` (`types::time`)
//! - Validated price histories: `TimeSeries`, `SeriesStore` (`types::series`)
//! - Error types: `SeriesError`, `DateError` (`types::error`)
//! - Information theory on categorical labelings: entropy, mutual information,
//!   expected mutual information and adjusted mutual information (`math::information`)
//!
//! ## Zero I/O Principle
//!
//! Layer 1 performs no file or network access. Loading price files is the
//! job of `adapter_loader`; graph assembly lives in `simgraph_graph`.
//!
//! ## Usage Examples
//!
//! ```rust
//! use simgraph_core::math::information::adjusted_mutual_information;
//! use simgraph_core::types::{Date, TimeSeries};
//!
//! let dates = vec![
//!     Date::from_ymd(2024, 1, 2).unwrap(),
//!     Date::from_ymd(2024, 1, 3).unwrap(),
//! ];
//! let series = TimeSeries::new("aapl.us.txt", dates, vec![185.6, 184.2]).unwrap();
//! assert_eq!(series.len(), 2);
//!
//! let ami = adjusted_mutual_information(&[0, 0, 1, 1], &[1, 1, 0, 0]).unwrap();
//! assert!((ami - 1.0).abs() < 1e-12);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Enable serialisation for `Date` and `TimeSeries`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod types;
