//! Arena - plays Connect 4 matches between search agents
//!
//! A short-lived process that:
//! 1. Resolves settings from the CLI, environment and config.toml
//! 2. Builds the Red and Yellow agents (random, rollout or MCTS)
//! 3. Plays the requested number of games and logs every result
//! 4. Reports the tally, optionally as a JSON file

use anyhow::Result;
use clap::Parser;
use std::path::Path;
use tracing::info;

mod agents;
mod config;
mod game;
mod stats;

use crate::config::Config;
use crate::game::Game;
use crate::stats::MatchStats;

fn init_tracing(level: &str) -> Result<()> {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    Ok(())
}

fn main() -> Result<()> {
    let config = Config::parse();
    config.validate()?;

    init_tracing(&config.log_level)?;
    info!(log_level = %config.log_level, "Tracing initialized");

    let red_kind = config.red_kind()?;
    let yellow_kind = config.yellow_kind()?;
    let seed = config.base_seed();
    let settings = config.agent_settings();

    info!(
        red = %red_kind,
        yellow = %yellow_kind,
        games = config.games,
        seed = ?seed,
        columns = config.columns,
        rows = config.rows,
        "Starting match"
    );

    // Yellow gets the next seed so the two agents never share a stream
    let red = red_kind.build(&settings, seed)?;
    let yellow = yellow_kind.build(&settings, seed.map(|s| s.wrapping_add(1)))?;
    let mut game = Game::new(red, yellow, config.initial_state()?);
    let mut stats = MatchStats::new(&red_kind.to_string(), &yellow_kind.to_string());

    for index in 1..=config.games {
        game.reset();
        let outcome = game.play_game()?;
        let moves = game.state().moves_played();
        stats.record_game(outcome, moves);

        info!(game = index, moves, %outcome, "Game finished\n{}", game.state());
    }

    stats.log_summary();

    if let Some(path) = &config.stats_path {
        stats.write_json(Path::new(path))?;
        info!(path = %path, "Match stats written");
    }

    Ok(())
}
