//! CLI argument definitions

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// siftlint - Incremental caching linter
#[derive(Parser)]
#[command(name = "siftlint")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable caching
    #[arg(long, global = true)]
    pub no_cache: bool,

    /// Cache directory override
    #[arg(long, global = true, value_name = "DIR")]
    pub cache_dir: Option<PathBuf>,

    /// Single-file cache location override (takes precedence over --cache-dir)
    #[arg(long, global = true, value_name = "FILE")]
    pub cache_location: Option<PathBuf>,

    /// Cache invalidation strategy (metadata, content)
    #[arg(long, global = true, value_name = "STRATEGY")]
    pub cache_strategy: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Lint files
    Lint {
        /// Files to lint; all project files when omitted
        files: Vec<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,

        /// Report errors only
        #[arg(short, long)]
        quiet: bool,

        /// Fail when more than this many warnings are found
        #[arg(long, value_name = "N")]
        max_warnings: Option<usize>,
    },

    /// Initialize configuration
    Init {
        /// Force overwrite existing config
        #[arg(long)]
        force: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
