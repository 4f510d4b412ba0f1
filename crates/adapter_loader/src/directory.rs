//! Directory tree traversal.

use std::fs;
use std::path::{Path, PathBuf};

use simgraph_core::types::SeriesStore;
use tracing::{debug, info};

use crate::csv_source::read_price_file;
use crate::error::LoaderError;

/// Default cap on files read per group directory.
///
/// All-pairs scoring is quadratic in the node count, so the loader bounds
/// the candidate set before it reaches the graph assembler.
pub const MAX_NUMBER_OF_NODES: usize = 100;

/// Files read between progress log lines.
const PROGRESS_INTERVAL: usize = 100;

/// Loader settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoaderConfig {
    /// Maximum number of files read from each group directory
    pub max_nodes_per_group: usize,
    /// Zero-based column holding the date
    pub date_column: usize,
    /// Zero-based column holding the price
    pub value_column: usize,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            max_nodes_per_group: MAX_NUMBER_OF_NODES,
            date_column: 0,
            value_column: 1,
        }
    }
}

impl LoaderConfig {
    /// Sets the per-group file cap.
    pub fn with_max_nodes_per_group(mut self, max: usize) -> Self {
        self.max_nodes_per_group = max;
        self
    }

    /// Sets the date column.
    pub fn with_date_column(mut self, column: usize) -> Self {
        self.date_column = column;
        self
    }

    /// Sets the price column.
    pub fn with_value_column(mut self, column: usize) -> Self {
        self.value_column = column;
        self
    }
}

/// Loads every group directory under `root` into one store.
///
/// Groups are visited in name order; within each group, files are sorted
/// by name and truncated to `max_nodes_per_group`. Files without data rows
/// are skipped.
///
/// # Errors
///
/// Fails if `root` is not a directory, on any unreadable or malformed file,
/// and when two groups contain a file with the same name.
pub fn load_directory(root: &Path, config: &LoaderConfig) -> Result<SeriesStore, LoaderError> {
    if !root.is_dir() {
        return Err(LoaderError::NotADirectory(root.to_path_buf()));
    }

    let mut store = SeriesStore::new();
    for group in sorted_entries(root, |p| p.is_dir())? {
        let files = sorted_entries(&group, |p| p.is_file())?;
        let selected = &files[..files.len().min(config.max_nodes_per_group)];
        info!(
            "Loading group {} ({} of {} files)",
            group.display(),
            selected.len(),
            files.len()
        );

        let mut loaded = 0;
        for (i, path) in selected.iter().enumerate() {
            if let Some(series) = read_price_file(path, config)? {
                store
                    .insert(series)
                    .map_err(|source| LoaderError::InvalidSeries {
                        path: path.clone(),
                        source,
                    })?;
                loaded += 1;
            }

            let done = i + 1;
            if done % PROGRESS_INTERVAL == 0 || done == selected.len() {
                debug!("[{}/{}] {}", done, selected.len(), group.display());
            }
        }
        info!("Loaded {} series from {}", loaded, group.display());
    }

    Ok(store)
}

/// Lists the entries of `dir` matching `keep`, sorted by path.
fn sorted_entries(dir: &Path, keep: impl Fn(&Path) -> bool) -> Result<Vec<PathBuf>, LoaderError> {
    let io_error = |source: std::io::Error| LoaderError::Io {
        path: dir.to_path_buf(),
        source,
    };

    let mut entries = Vec::new();
    for entry in fs::read_dir(dir).map_err(io_error)? {
        let path = entry.map_err(io_error)?.path();
        if keep(&path) {
            entries.push(path);
        }
    }
    entries.sort();
    Ok(entries)
}
