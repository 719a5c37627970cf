//! strict-deps CLI tool.
//!
//! Usage:
//! ```bash
//! strict-deps check [OPTIONS] [EVENTS]
//! strict-deps init
//! ```
//!
//! The CLI is a host for the core engine: it does not parse source files.
//! Import events arrive pre-extracted as JSON Lines (one
//! `{"rawSpecifier", "importerPath", "isTypeOnly"}` object per line),
//! from a file or stdin.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod config_resolver;

/// Import boundary linter: module dependency rules over import events
#[derive(Parser)]
#[command(name = "strict-deps")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to rule configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check import events against the configured boundary rules
    Check {
        /// Import events file in JSON Lines format ("-" for stdin)
        #[arg(default_value = "-")]
        events: PathBuf,

        /// Project root (location of tsconfig.json, base of all paths)
        #[arg(short, long, default_value = ".")]
        root: PathBuf,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// Initialize a starter configuration file
    Init {
        /// Overwrite existing config
        #[arg(long)]
        force: bool,
    },
}

/// Output format for check results.
#[derive(Clone, Copy, Debug, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output.
    #[default]
    Text,
    /// JSON output.
    Json,
    /// One-line-per-violation compact format.
    Compact,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    match cli.command {
        Commands::Check {
            events,
            root,
            format,
        } => commands::check::run(&events, &root, format, cli.config.as_deref()),
        Commands::Init { force } => commands::init::run(force),
    }
}
