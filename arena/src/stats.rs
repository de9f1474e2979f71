//! Match statistics tracking and persistence.
//!
//! Tallies outcomes over a match and optionally writes a JSON summary.

use anyhow::{Context, Result};
use games_connect4::{Outcome, Player};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info};

/// Running tally for a match.
#[derive(Debug)]
pub struct MatchStats {
    red: String,
    yellow: String,
    games_played: u32,
    red_wins: u32,
    yellow_wins: u32,
    ties: u32,
    total_moves: u64,
    start_time: Instant,
}

/// Serializable stats for JSON output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchSummary {
    pub red: String,
    pub yellow: String,
    pub games_played: u32,
    pub red_wins: u32,
    pub yellow_wins: u32,
    pub ties: u32,
    pub avg_game_length: f64,
    pub runtime_seconds: f64,
}

impl MatchStats {
    pub fn new(red: &str, yellow: &str) -> Self {
        Self {
            red: red.to_string(),
            yellow: yellow.to_string(),
            games_played: 0,
            red_wins: 0,
            yellow_wins: 0,
            ties: 0,
            total_moves: 0,
            start_time: Instant::now(),
        }
    }

    /// Record a finished game.
    pub fn record_game(&mut self, outcome: Outcome, moves: usize) {
        self.games_played += 1;
        self.total_moves += moves as u64;
        match outcome {
            Outcome::Winner(Player::Red) => self.red_wins += 1,
            Outcome::Winner(Player::Yellow) => self.yellow_wins += 1,
            Outcome::Tie => self.ties += 1,
        }
    }

    pub fn snapshot(&self) -> MatchSummary {
        let avg_game_length = if self.games_played > 0 {
            self.total_moves as f64 / self.games_played as f64
        } else {
            0.0
        };

        MatchSummary {
            red: self.red.clone(),
            yellow: self.yellow.clone(),
            games_played: self.games_played,
            red_wins: self.red_wins,
            yellow_wins: self.yellow_wins,
            ties: self.ties,
            avg_game_length,
            runtime_seconds: self.start_time.elapsed().as_secs_f64(),
        }
    }

    pub fn log_summary(&self) {
        let summary = self.snapshot();
        info!(
            red = %summary.red,
            yellow = %summary.yellow,
            games = summary.games_played,
            red_wins = summary.red_wins,
            yellow_wins = summary.yellow_wins,
            ties = summary.ties,
            avg_game_length = format!("{:.1}", summary.avg_game_length),
            runtime_secs = format!("{:.2}", summary.runtime_seconds),
            "Match complete"
        );
    }

    /// Write the current snapshot as pretty JSON.
    pub fn write_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.snapshot())?;
        fs::write(path, json).with_context(|| format!("failed to write {}", path.display()))?;
        debug!(path = %path.display(), "Wrote match stats");
        Ok(())
    }
}
