//! Strictly Rounds - Unified CLI
//!
//! Terminal match play and headless replay.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use strictly_rounds::{Match, MatchView, StrictlyConfig, parse_steps, replay, run_tui};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = StrictlyConfig::load_or_default(&cli.config)?;

    match cli.command {
        Command::Play { starter } => {
            let config = apply_starter(config, starter);
            let game = Match::new(*config.default_starter());
            run_tui(&config, game).await
        }
        Command::Replay {
            moves,
            json,
            starter,
        } => run_replay(apply_starter(config, starter), &moves, json),
    }
}

fn apply_starter(config: StrictlyConfig, starter: Option<strictly_rounds::Mark>) -> StrictlyConfig {
    match starter {
        Some(mark) => config.with_default_starter(mark),
        None => config,
    }
}

/// Replay moves headlessly and print the result
#[instrument(skip(config, moves))]
fn run_replay(config: StrictlyConfig, moves: &[String], json: bool) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    let steps = parse_steps(moves)?;
    info!(steps = steps.len(), starter = %config.default_starter(), "Replaying moves");

    let mut game = Match::new(*config.default_starter());
    let report = replay(&mut game, &steps);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", MatchView::from(report.snapshot()).to_text());
        for skipped in report.skipped() {
            println!("Ignored step {}: {}", skipped.step(), skipped.reason());
        }
    }

    Ok(())
}
