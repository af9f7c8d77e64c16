//! Strictly Darts - Cricket scorekeeper CLI

#![warn(missing_docs)]

mod cli;

use anyhow::{Result, bail};
use clap::Parser;
use cli::{Cli, Command};
use strictly_cricket::{Multiplier, Session, TARGETS};
use strictly_darts::{AppConfig, GameScript, render, run_interactive};
use strum::IntoEnumIterator;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = AppConfig::load(cli.config.as_deref())?;

    match cli.command {
        Command::Play { players } => run_play(&config, players),
        Command::Replay { script } => run_replay(&config, &script),
        Command::Targets => run_targets(),
    }
}

/// Score a game from stdin
#[instrument(skip(config))]
fn run_play(config: &AppConfig, players: Vec<String>) -> Result<()> {
    let players = if players.is_empty() {
        config.players().clone()
    } else {
        players
    };
    if players.is_empty() {
        bail!(
            "No players given; pass --player NAME for each player or set `players` in the config"
        );
    }

    let mut session = Session::start(&players, config.rules().clone())?;
    info!(?players, "Starting interactive game");

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    match run_interactive(&mut session, config.rules(), stdin.lock(), &mut stdout)? {
        Some(winner) => println!(
            "\nWinner: {} ({} points)",
            winner.winner_name(),
            winner.winner_score()
        ),
        None => println!("\nGame abandoned"),
    }
    Ok(())
}

/// Replay a recorded game
#[instrument(skip(config))]
fn run_replay(config: &AppConfig, script: &std::path::Path) -> Result<()> {
    let script = GameScript::from_file(script)?;
    let game = script.replay(config.rules())?;

    print!("{}", render(game.state(), game.config()));
    if game.winner().is_none() {
        println!("Game still in progress after {} darts", game.history().len());
    }
    Ok(())
}

/// Print the target registry
fn run_targets() -> Result<()> {
    for target in TARGETS {
        let rings: Vec<String> = Multiplier::iter()
            .filter(|m| target.accepts(*m))
            .map(|m| m.to_string())
            .collect();
        println!("{:>4}  {:<5} {}", target.value(), target.label(), rings.join(", "));
    }
    Ok(())
}
