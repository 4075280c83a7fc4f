use std::path::PathBuf;

use clap::{Parser, Subcommand};
use ntr::config::ColorMode;

/// ntr - provision, clean and package the NTR monorepo
#[derive(Parser, Debug)]
#[command(name = "ntr")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Workspace root (defaults to the current directory)
    #[arg(long, global = true, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Emit NDJSON events instead of styled output
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v shows per-path details)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Color output
    #[arg(long, value_enum, global = true)]
    pub color: Option<ColorMode>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Install dependencies and provision environment, formatter, hooks and editor config
    Setup,

    /// Remove dependencies, build outputs, caches and local environment files
    Cleanup {
        /// Create a dated .tar.gz snapshot after cleaning
        #[arg(short, long)]
        package: bool,

        /// Skip the warning notice
        #[arg(short, long)]
        yes: bool,
    },
}

impl Commands {
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Setup => "setup",
            Commands::Cleanup { .. } => "cleanup",
        }
    }
}
