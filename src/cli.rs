use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::types::Category;

/// hostsbundle - pick a StevenBlack hosts bundle for a host configuration
#[derive(Parser, Debug)]
#[command(name = "hostsbundle")]
#[command(about = "Select a blocklist bundle and merge it into a hosts configuration")]
#[command(version)]
pub struct Cli {
    /// Host configuration file (JSON). Created on first save if missing.
    #[arg(short, long, global = true, default_value = "hosts.json")]
    pub config: PathBuf,

    /// Replace the built-in catalog with a JSON table of combinations
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Interactive checklist over the configuration (default)
    Edit,
    /// Show the bundle currently selected in the configuration
    Show,
    /// Select a bundle without the interactive checklist
    Set {
        /// Categories to add on top of ads and malware
        #[arg(short, long, value_delimiter = ',')]
        with: Vec<Category>,

        /// Uncheck everything, leaving the managed entry ignored
        #[arg(long, conflicts_with = "with")]
        disable: bool,
    },
    /// List every combination in the catalog
    Catalog,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
