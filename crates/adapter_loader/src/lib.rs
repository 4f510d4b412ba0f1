//! # adapter_loader (A: Adapter Layer)
//!
//! Reads a directory tree of per-instrument price files into a
//! [`SeriesStore`](simgraph_core::types::SeriesStore).
//!
//! ## Layout
//!
//! ```text
//! data/
//! ├── ETFs/
//! │   ├── spy.us.txt
//! │   └── ...
//! └── Stocks/
//!     ├── aapl.us.txt
//!     └── ...
//! ```
//!
//! Every immediate sub-directory of the data root is a group. Within a group
//! the file names are sorted and the first `max_nodes_per_group` are read.
//! The file name becomes the instrument key.
//!
//! ## File format
//!
//! CSV with a header row. The date column (default 0) holds `YYYY-MM-DD`
//! dates in ascending order; the value column (default 1) the opening
//! price. Other columns are ignored.
//!
//! ```text
//! Date,Open,High,Low,Close,Volume,OpenInt
//! 2005-02-25,6.4987,6.6009,6.4668,6.5753,55766,0
//! 2005-02-28,6.6072,6.7222,6.5753,6.6263,49343,0
//! ```
//!
//! A file with a header and no rows is skipped. Any malformed row aborts
//! the load with a [`LoaderError`] naming the file and line.

#![deny(missing_docs)]

pub mod csv_source;
pub mod directory;
pub mod error;

pub use csv_source::read_price_file;
pub use directory::{load_directory, LoaderConfig, MAX_NUMBER_OF_NODES};
pub use error::LoaderError;
