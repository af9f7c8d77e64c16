//! Command-line interface for strictly_darts.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Strictly Darts - Cricket scorekeeper
#[derive(Parser, Debug)]
#[command(name = "strictly_darts")]
#[command(about = "Cricket darts scorekeeper", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (falls back to $CRICKET_CONFIG)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Score a game interactively, one dart per line (e.g. T20, D16, BULL, MISS)
    Play {
        /// Player name, in throwing order (repeat for each player)
        #[arg(short, long = "player")]
        players: Vec<String>,
    },

    /// Replay a recorded game from a TOML script
    Replay {
        /// Script with `players` and `throws`
        script: PathBuf,
    },

    /// List the targets and the rings each one has
    Targets,
}
