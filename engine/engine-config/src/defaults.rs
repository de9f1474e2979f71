//! Built-in values embedded from config.defaults.toml.
//!
//! The file is compiled into the binary and parsed on first access.

use once_cell::sync::Lazy;
use serde::Deserialize;

const DEFAULTS_TOML: &str = include_str!("../../../config.defaults.toml");

static DEFAULTS: Lazy<DefaultsConfig> = Lazy::new(|| {
    toml::from_str(DEFAULTS_TOML).expect("config.defaults.toml should be valid TOML")
});

// ============================================================================
// Shape of config.defaults.toml
// ============================================================================

#[derive(Debug, Deserialize)]
struct DefaultsConfig {
    common: CommonDefaults,
    board: BoardDefaults,
    rollout: RolloutDefaults,
    mcts: MctsDefaults,
    arena: ArenaDefaults,
}

#[derive(Debug, Deserialize)]
struct CommonDefaults {
    log_level: String,
    #[serde(default)]
    seed: Option<u64>,
}

#[derive(Debug, Deserialize)]
struct BoardDefaults {
    columns: usize,
    rows: usize,
}

#[derive(Debug, Deserialize)]
struct RolloutDefaults {
    walks: u32,
}

#[derive(Debug, Deserialize)]
struct MctsDefaults {
    walks: u32,
    exploration: f64,
}

#[derive(Debug, Deserialize)]
struct ArenaDefaults {
    red: String,
    yellow: String,
    games: u32,
}

// ============================================================================
// Accessors
// ============================================================================

// Common
pub fn log_level() -> &'static str {
    &DEFAULTS.common.log_level
}
pub fn seed() -> Option<u64> {
    DEFAULTS.common.seed
}

// Board
pub fn columns() -> usize {
    DEFAULTS.board.columns
}
pub fn rows() -> usize {
    DEFAULTS.board.rows
}

// Rollout
pub fn rollout_walks() -> u32 {
    DEFAULTS.rollout.walks
}

// MCTS
pub fn mcts_walks() -> u32 {
    DEFAULTS.mcts.walks
}
pub fn exploration() -> f64 {
    DEFAULTS.mcts.exploration
}

// Arena
pub fn red_agent() -> &'static str {
    &DEFAULTS.arena.red
}
pub fn yellow_agent() -> &'static str {
    &DEFAULTS.arena.yellow
}
pub fn games() -> u32 {
    DEFAULTS.arena.games
}
