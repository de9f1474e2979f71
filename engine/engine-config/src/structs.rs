//! Sections of config.toml.
//!
//! Every field falls back to config.defaults.toml when missing.

use crate::defaults;
use serde::Deserialize;

// ============================================================================
// Field defaults for serde, backed by the embedded defaults file
// ============================================================================

fn d_log_level() -> String {
    defaults::log_level().into()
}
fn d_seed() -> Option<u64> {
    defaults::seed()
}
fn d_columns() -> usize {
    defaults::columns()
}
fn d_rows() -> usize {
    defaults::rows()
}
fn d_rollout_walks() -> u32 {
    defaults::rollout_walks()
}
fn d_mcts_walks() -> u32 {
    defaults::mcts_walks()
}
fn d_exploration() -> f64 {
    defaults::exploration()
}
fn d_red() -> String {
    defaults::red_agent().into()
}
fn d_yellow() -> String {
    defaults::yellow_agent().into()
}
fn d_games() -> u32 {
    defaults::games()
}

// ============================================================================
// Sections
// ============================================================================

/// Root configuration structure matching config.toml
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CentralConfig {
    #[serde(default)]
    pub common: CommonConfig,
    #[serde(default)]
    pub board: BoardConfig,
    #[serde(default)]
    pub rollout: RolloutSection,
    #[serde(default)]
    pub mcts: MctsSection,
    #[serde(default)]
    pub arena: ArenaConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CommonConfig {
    #[serde(default = "d_log_level")]
    pub log_level: String,
    /// Base seed for every agent RNG. Unset means OS entropy.
    #[serde(default = "d_seed")]
    pub seed: Option<u64>,
}

impl Default for CommonConfig {
    fn default() -> Self {
        Self {
            log_level: d_log_level(),
            seed: d_seed(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    #[serde(default = "d_columns")]
    pub columns: usize,
    #[serde(default = "d_rows")]
    pub rows: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            columns: d_columns(),
            rows: d_rows(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RolloutSection {
    /// Random playouts per candidate move
    #[serde(default = "d_rollout_walks")]
    pub walks: u32,
}

impl Default for RolloutSection {
    fn default() -> Self {
        Self {
            walks: d_rollout_walks(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MctsSection {
    /// Tree walks per candidate move
    #[serde(default = "d_mcts_walks")]
    pub walks: u32,
    /// UCT exploration constant
    #[serde(default = "d_exploration")]
    pub exploration: f64,
}

impl Default for MctsSection {
    fn default() -> Self {
        Self {
            walks: d_mcts_walks(),
            exploration: d_exploration(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    /// Agent kind playing Red ("random", "rollout" or "mcts")
    #[serde(default = "d_red")]
    pub red: String,
    /// Agent kind playing Yellow
    #[serde(default = "d_yellow")]
    pub yellow: String,
    #[serde(default = "d_games")]
    pub games: u32,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            red: d_red(),
            yellow: d_yellow(),
            games: d_games(),
        }
    }
}
