//! Pair command implementation
//!
//! Scores a single pair of instruments and prints the intermediate stages:
//! overlap range, aligned sample count and final weight.

use std::path::{Path, PathBuf};

use adapter_loader::read_price_file;
use simgraph_core::types::TimeSeries;
use simgraph_graph::compare;
use tracing::{debug, info};

use super::OutputFormat;
use crate::config::SimgraphConfig;
use crate::summary::PairSummary;
use crate::{CliError, Result};

/// Run the pair command
pub fn run(config: &SimgraphConfig, key_a: &str, key_b: &str, format: OutputFormat) -> Result<()> {
    let summary = evaluate(config, key_a, key_b)?;

    match format {
        OutputFormat::Table => print!("{}", summary.to_table()),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&summary)?),
    }
    Ok(())
}

/// Locates, loads and compares two instruments.
///
/// The per-group file cap does not apply here: any file in any group can
/// be named.
pub fn evaluate(config: &SimgraphConfig, key_a: &str, key_b: &str) -> Result<PairSummary> {
    config.validate()?;
    let scorer = config.scorer()?;

    let a = load_instrument(config, key_a)?;
    let b = load_instrument(config, key_b)?;
    info!("Comparing {} ({} rows) with {} ({} rows)", key_a, a.len(), key_b, b.len());

    let diagnostics = compare(&a, &b, &scorer);
    Ok(PairSummary::new(key_a, key_b, &diagnostics))
}

fn load_instrument(config: &SimgraphConfig, key: &str) -> Result<TimeSeries> {
    let path = locate(&config.data.dir, key)?;
    debug!("Reading {}", path.display());
    read_price_file(&path, &config.loader_config())?.ok_or(CliError::EmptySeries(path))
}

/// Finds `key` in the first group directory (in name order) that holds it.
fn locate(root: &Path, key: &str) -> Result<PathBuf> {
    if !root.is_dir() {
        return Err(CliError::FileNotFound(root.to_path_buf()));
    }

    let mut groups = Vec::new();
    for entry in std::fs::read_dir(root)? {
        let path = entry?.path();
        if path.is_dir() {
            groups.push(path);
        }
    }
    groups.sort();

    groups
        .into_iter()
        .map(|group| group.join(key))
        .find(|candidate| candidate.is_file())
        .ok_or_else(|| CliError::UnknownInstrument(key.to_string()))
}
