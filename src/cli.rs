//! Command-line interface for strictly_rounds.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use strictly_rounds::Mark;

/// Strictly Rounds - Local two-player tic-tac-toe with a running score
#[derive(Parser, Debug)]
#[command(name = "strictly_rounds")]
#[command(about = "Type-safe tic-tac-toe rounds for two players", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file
    #[arg(long, default_value = "strictly_rounds.toml")]
    pub config: PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a match in the terminal UI
    Play {
        /// Mark that opens the match (overrides the config)
        #[arg(long)]
        starter: Option<Mark>,
    },

    /// Replay a scripted list of moves and print the final state
    Replay {
        /// Board indices 0-8, position labels, or `n` for the next round
        moves: Vec<String>,

        /// Print the snapshot as JSON
        #[arg(long)]
        json: bool,

        /// Mark that opens the match (overrides the config)
        #[arg(long)]
        starter: Option<Mark>,
    },
}
