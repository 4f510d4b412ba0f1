//! CLI command implementations
//!
//! Each submodule implements a specific CLI command.

pub mod build;
pub mod check;
pub mod pair;

use clap::ValueEnum;

/// Output format shared by the reporting commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}
