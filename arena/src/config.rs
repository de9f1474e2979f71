//! Configuration for the arena driver
//!
//! Configuration is loaded from config.toml with environment variable overrides.
//! CLI arguments take highest priority, followed by env vars, then config.toml.

use anyhow::{anyhow, Result};
use clap::Parser;
use engine_config::{load_config, CentralConfig};
use games_connect4::State;
use mcts::{MctsConfig, RolloutConfig};
use once_cell::sync::Lazy;
use tracing::level_filters::LevelFilter;

use crate::agents::{AgentKind, AgentSettings};

// Load central config once at startup
static CENTRAL_CONFIG: Lazy<CentralConfig> = Lazy::new(load_config);

fn default_red() -> String {
    CENTRAL_CONFIG.arena.red.clone()
}

fn default_yellow() -> String {
    CENTRAL_CONFIG.arena.yellow.clone()
}

fn default_games() -> u32 {
    CENTRAL_CONFIG.arena.games
}

fn default_columns() -> usize {
    CENTRAL_CONFIG.board.columns
}

fn default_rows() -> usize {
    CENTRAL_CONFIG.board.rows
}

fn default_rollout_walks() -> u32 {
    CENTRAL_CONFIG.rollout.walks
}

fn default_mcts_walks() -> u32 {
    CENTRAL_CONFIG.mcts.walks
}

fn default_exploration() -> f64 {
    CENTRAL_CONFIG.mcts.exploration
}

fn default_log_level() -> String {
    CENTRAL_CONFIG.common.log_level.clone()
}

#[derive(Parser, Debug, Clone)]
#[command(name = "arena")]
#[command(about = "Connect 4 arena - pits search agents against each other")]
#[command(
    long_about = "Plays one or more games of Connect 4 between two agents and reports
the results.

Configuration is loaded from config.toml with environment variable overrides.
CLI arguments take highest priority."
)]
pub struct Config {
    /// Agent playing Red, who moves first (human, random, rollout, mcts)
    #[arg(long, default_value_t = default_red())]
    pub red: String,

    /// Agent playing Yellow (human, random, rollout, mcts)
    #[arg(long, default_value_t = default_yellow())]
    pub yellow: String,

    /// Number of games to play
    #[arg(long, default_value_t = default_games())]
    pub games: u32,

    /// Base seed for both agents (omit to seed from OS entropy)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Board width
    #[arg(long, default_value_t = default_columns())]
    pub columns: usize,

    /// Board height
    #[arg(long, default_value_t = default_rows())]
    pub rows: usize,

    /// Random playouts per candidate move for the rollout agent
    #[arg(long, default_value_t = default_rollout_walks())]
    pub rollout_walks: u32,

    /// Tree walks per candidate move for the MCTS agent
    #[arg(long, default_value_t = default_mcts_walks())]
    pub mcts_walks: u32,

    /// UCT exploration constant for the MCTS agent
    #[arg(long, default_value_t = default_exploration())]
    pub exploration: f64,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value_t = default_log_level())]
    pub log_level: String,

    /// Write a JSON match summary to this path
    #[arg(long)]
    pub stats_path: Option<String>,
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        self.red_kind()?;
        self.yellow_kind()?;

        if self.games == 0 {
            return Err(anyhow!("games must be greater than 0"));
        }

        self.initial_state()?;

        self.rollout_config()
            .validate()
            .map_err(|e| anyhow!("rollout_walks: {}", e))?;
        self.mcts_config()
            .validate()
            .map_err(|e| anyhow!("exploration: {}", e))?;

        if self.log_level.parse::<LevelFilter>().is_err() {
            return Err(anyhow!(
                "invalid log level '{}', expected one of trace, debug, info, warn, error",
                self.log_level
            ));
        }

        Ok(())
    }

    pub fn red_kind(&self) -> Result<AgentKind> {
        self.red.parse()
    }

    pub fn yellow_kind(&self) -> Result<AgentKind> {
        self.yellow.parse()
    }

    /// Seed from the CLI, falling back to `[common] seed`.
    pub fn base_seed(&self) -> Option<u64> {
        self.seed.or(CENTRAL_CONFIG.common.seed)
    }

    /// Empty board every game starts from
    pub fn initial_state(&self) -> Result<State> {
        Ok(State::with_dimensions(self.columns, self.rows)?)
    }

    pub fn rollout_config(&self) -> RolloutConfig {
        RolloutConfig::default().with_walks(self.rollout_walks)
    }

    pub fn mcts_config(&self) -> MctsConfig {
        MctsConfig::default()
            .with_walks(self.mcts_walks)
            .with_exploration(self.exploration)
    }

    pub fn agent_settings(&self) -> AgentSettings {
        AgentSettings {
            rollout: self.rollout_config(),
            mcts: self.mcts_config(),
        }
    }
}
