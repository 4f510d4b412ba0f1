//! simgraph CLI - Similarity Graphs over Price Histories
//!
//! Operational entry point for the simgraph workspace.
//!
//! # Commands
//!
//! - `simgraph build` - Load a data directory and summarise its similarity graph
//! - `simgraph pair <KEY_A> <KEY_B>` - Score one pair and show each stage
//! - `simgraph check` - Validate configuration and data directory
//!
//! # Architecture
//!
//! As part of the **S**ervice layer, this crate wires the adapter
//! (`adapter_loader`) to the graph kernel (`simgraph_graph`). Logs go to
//! stderr so that JSON output on stdout stays machine readable.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::{debug, error};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;
mod summary;

pub use error::{CliError, Result};

use commands::OutputFormat;
use config::{Overrides, SimgraphConfig, DEFAULT_CONFIG_PATH};

/// Similarity graph builder for price histories
#[derive(Parser)]
#[command(name = "simgraph")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path [default: simgraph.toml, if present]
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the similarity graph and print a summary
    Build {
        /// Root directory with one sub-directory per group
        #[arg(short, long)]
        data_dir: Option<PathBuf>,

        /// Maximum files read per group
        #[arg(short = 'n', long)]
        max_nodes: Option<usize>,

        /// Most recent aligned samples used for scoring
        #[arg(short = 'b', long)]
        max_bins: Option<usize>,

        /// Leave zero-weight pairs out of the graph
        #[arg(long)]
        omit_zero_edges: bool,

        /// Number of heaviest edges to list
        #[arg(short, long, default_value = "10")]
        top: usize,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// Score a single pair of instruments
    Pair {
        /// Root directory with one sub-directory per group
        #[arg(short, long)]
        data_dir: Option<PathBuf>,

        /// Most recent aligned samples used for scoring
        #[arg(short = 'b', long)]
        max_bins: Option<usize>,

        /// First instrument key (file name)
        key_a: String,

        /// Second instrument key (file name)
        key_b: String,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// Check configuration and data directory
    Check {
        /// Root directory with one sub-directory per group
        #[arg(short, long)]
        data_dir: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}", err);
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = match &cli.config {
        Some(path) => SimgraphConfig::load(path)?,
        None => SimgraphConfig::load_or_default(Path::new(DEFAULT_CONFIG_PATH))?,
    };
    debug!("Loaded configuration: {:?}", config);

    match cli.command {
        Commands::Build {
            data_dir,
            max_nodes,
            max_bins,
            omit_zero_edges,
            top,
            format,
        } => {
            config.apply(Overrides {
                data_dir,
                max_nodes,
                max_bins,
                omit_zero_edges,
            });
            commands::build::run(&config, top, format)
        }
        Commands::Pair {
            data_dir,
            max_bins,
            key_a,
            key_b,
            format,
        } => {
            config.apply(Overrides {
                data_dir,
                max_bins,
                ..Overrides::default()
            });
            commands::pair::run(&config, &key_a, &key_b, format)
        }
        Commands::Check { data_dir } => {
            config.apply(Overrides {
                data_dir,
                ..Overrides::default()
            });
            commands::check::run(&config)
        }
    }
}
