//! Mathematical utilities for similarity scoring.
//!
//! This module provides:
//! - `information`: Entropy, mutual information and chance-adjusted mutual
//!   information between two categorical labelings

pub mod information;
