//! Check command implementation
//!
//! Validates the resolved configuration and the data directory layout.

use tracing::{info, warn};

use crate::config::SimgraphConfig;
use crate::{CliError, Result};

/// Run the check command
pub fn run(config: &SimgraphConfig) -> Result<()> {
    let groups = inspect(config)?;

    println!("Configuration OK");
    println!("  Data directory: {}", config.data.dir.display());
    println!("  Groups: {}", groups.len());
    for (name, files) in &groups {
        println!("    {:<12} {} files", name, files);
    }
    println!("  Max nodes per group: {}", config.data.max_nodes_per_group);
    println!("  Max bins: {}", config.similarity.max_bins);
    println!("  Edge policy: {}", config.graph.edge_policy);
    Ok(())
}

/// Validates `config` and returns each group with its file count, in name
/// order.
pub fn inspect(config: &SimgraphConfig) -> Result<Vec<(String, usize)>> {
    info!("Checking configuration...");
    config.validate()?;

    let root = &config.data.dir;
    if !root.is_dir() {
        return Err(CliError::FileNotFound(root.to_path_buf()));
    }

    let mut groups = Vec::new();
    for entry in std::fs::read_dir(root)? {
        let path = entry?.path();
        if !path.is_dir() {
            continue;
        }
        let mut files = 0;
        for file in std::fs::read_dir(&path)? {
            if file?.path().is_file() {
                files += 1;
            }
        }
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        groups.push((name, files));
    }
    groups.sort();

    if groups.is_empty() {
        warn!("No group directories under {}", root.display());
    }
    info!("Check complete");
    Ok(groups)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_inspect_counts_files_per_group() {
        let root = tempdir().unwrap();
        for (group, count) in [("Stocks", 3), ("ETFs", 1)] {
            let dir = root.path().join(group);
            fs::create_dir(&dir).unwrap();
            for i in 0..count {
                fs::write(dir.join(format!("{}.us.txt", i)), "Date,Open\n").unwrap();
            }
        }
        fs::write(root.path().join("README"), "").unwrap();

        let mut config = SimgraphConfig::default();
        config.data.dir = root.path().to_path_buf();

        let groups = inspect(&config).unwrap();
        assert_eq!(
            groups,
            vec![("ETFs".to_string(), 1), ("Stocks".to_string(), 3)]
        );
    }

    #[test]
    fn test_missing_directory_fails() {
        let root = tempdir().unwrap();
        let mut config = SimgraphConfig::default();
        config.data.dir = root.path().join("missing");
        assert!(matches!(inspect(&config), Err(CliError::FileNotFound(_))));
    }

    #[test]
    fn test_invalid_config_fails_first() {
        let mut config = SimgraphConfig::default();
        config.similarity.max_bins = 0;
        assert!(matches!(inspect(&config), Err(CliError::Graph(_))));
    }
}
