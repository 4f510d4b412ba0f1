//! Build command implementation
//!
//! Loads the data directory, assembles the similarity graph and prints a
//! summary of it.

use adapter_loader::load_directory;
use tracing::info;

use super::OutputFormat;
use crate::config::SimgraphConfig;
use crate::summary::GraphSummary;
use crate::Result;

/// Run the build command
pub fn run(config: &SimgraphConfig, top: usize, format: OutputFormat) -> Result<()> {
    let summary = summarise(config, top)?;

    match format {
        OutputFormat::Table => print!("{}", summary.to_table()),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&summary)?),
    }
    Ok(())
}

/// Loads, builds and summarises without printing.
pub fn summarise(config: &SimgraphConfig, top: usize) -> Result<GraphSummary> {
    config.validate()?;
    let assembler = config.assembler()?;

    info!("Starting graph build...");
    info!("  Data directory: {}", config.data.dir.display());
    info!("  Max nodes per group: {}", config.data.max_nodes_per_group);
    info!("  Max bins: {}", config.similarity.max_bins);
    info!("  Edge policy: {}", assembler.edge_policy());

    let store = load_directory(&config.data.dir, &config.loader_config())?;
    info!("Loaded {} series", store.len());

    let graph = assembler.build(store);
    info!(
        "Graph complete: {} nodes, {} edges",
        graph.node_count(),
        graph.edge_count()
    );

    Ok(GraphSummary::from_graph(&graph, top))
}
