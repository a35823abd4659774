//! CLI argument definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Mars Chronicles 2035: a choice-driven narrative game.
#[derive(Debug, Parser)]
#[command(name = "chronicle", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start or resume an interactive story session
    Play {
        /// Load a saved game before starting
        #[arg(long)]
        load: Option<PathBuf>,

        /// Directory where save files are written
        #[arg(long, default_value = ".")]
        save_dir: PathBuf,
    },
}
