//! `simgraph.toml` configuration.
//!
//! ```toml
//! [data]
//! dir = "data"
//! max_nodes_per_group = 100
//! date_column = 0
//! value_column = 1
//!
//! [similarity]
//! max_bins = 100
//!
//! [graph]
//! edge_policy = "keep-zero"
//! progress_interval = 100
//! ```
//!
//! Every key is optional. Command-line flags override file values.

use std::path::{Path, PathBuf};

use adapter_loader::{LoaderConfig, MAX_NUMBER_OF_NODES};
use serde::{Deserialize, Serialize};
use simgraph_graph::{
    EdgePolicy, GraphAssembler, SimilarityScorer, DEFAULT_PROGRESS_INTERVAL, MAX_NUMBER_OF_BINS,
};

use crate::{CliError, Result};

/// Config file read when `--config` is not given.
pub const DEFAULT_CONFIG_PATH: &str = "simgraph.toml";

/// Resolved configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimgraphConfig {
    pub data: DataConfig,
    pub similarity: SimilarityConfig,
    pub graph: GraphConfig,
}

/// `[data]` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DataConfig {
    /// Root directory holding one sub-directory per group
    pub dir: PathBuf,
    pub max_nodes_per_group: usize,
    pub date_column: usize,
    pub value_column: usize,
}

impl Default for DataConfig {
    fn default() -> Self {
        let loader = LoaderConfig::default();
        Self {
            dir: PathBuf::from("data"),
            max_nodes_per_group: MAX_NUMBER_OF_NODES,
            date_column: loader.date_column,
            value_column: loader.value_column,
        }
    }
}

/// `[similarity]` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimilarityConfig {
    /// Most recent aligned pairs entering the score
    pub max_bins: usize,
}

impl Default for SimilarityConfig {
    fn default() -> Self {
        Self {
            max_bins: MAX_NUMBER_OF_BINS,
        }
    }
}

/// `[graph]` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GraphConfig {
    /// `keep-zero` or `omit-zero`
    pub edge_policy: String,
    pub progress_interval: usize,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            edge_policy: EdgePolicy::default().name().to_string(),
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
        }
    }
}

/// Command-line values that take precedence over the file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub data_dir: Option<PathBuf>,
    pub max_nodes: Option<usize>,
    pub max_bins: Option<usize>,
    pub omit_zero_edges: bool,
}

impl SimgraphConfig {
    /// Reads `path`. The file must exist.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| CliError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| CliError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Reads `path` if it exists, otherwise returns the defaults.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Applies command-line overrides.
    pub fn apply(&mut self, overrides: Overrides) {
        if let Some(dir) = overrides.data_dir {
            self.data.dir = dir;
        }
        if let Some(max) = overrides.max_nodes {
            self.data.max_nodes_per_group = max;
        }
        if let Some(max) = overrides.max_bins {
            self.similarity.max_bins = max;
        }
        if overrides.omit_zero_edges {
            self.graph.edge_policy = EdgePolicy::OmitZero.name().to_string();
        }
    }

    /// Checks value ranges without touching the filesystem.
    pub fn validate(&self) -> Result<()> {
        if self.data.max_nodes_per_group == 0 {
            return Err(CliError::Config(
                "data.max_nodes_per_group must be positive".to_string(),
            ));
        }
        if self.data.date_column == self.data.value_column {
            return Err(CliError::Config(format!(
                "data.date_column and data.value_column are both {}",
                self.data.date_column
            )));
        }
        if self.graph.progress_interval == 0 {
            return Err(CliError::Config(
                "graph.progress_interval must be positive".to_string(),
            ));
        }
        self.assembler()?;
        Ok(())
    }

    pub fn loader_config(&self) -> LoaderConfig {
        LoaderConfig::default()
            .with_max_nodes_per_group(self.data.max_nodes_per_group)
            .with_date_column(self.data.date_column)
            .with_value_column(self.data.value_column)
    }

    pub fn scorer(&self) -> Result<SimilarityScorer> {
        Ok(SimilarityScorer::new(self.similarity.max_bins)?)
    }

    pub fn assembler(&self) -> Result<GraphAssembler> {
        let policy: EdgePolicy = self.graph.edge_policy.parse()?;
        Ok(GraphAssembler::new(self.scorer()?)
            .with_edge_policy(policy)
            .with_progress_interval(self.graph.progress_interval))
    }
}
