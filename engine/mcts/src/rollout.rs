//! Random playouts and the random-rollout agent.
//!
//! The agent scores each candidate move by how often uniformly random play
//! from the resulting board ends in a win for the player to move now.

use games_connect4::{Outcome, State};
use rand::seq::SliceRandom;
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use tracing::debug;

use crate::agent::Agent;
use crate::config::RolloutConfig;
use crate::search::{CandidateStats, SearchError, SearchResult};
use crate::tree::GameTree;

/// Play uniformly random moves on a copy of `state` until the game ends.
pub fn playout<R: Rng + ?Sized>(state: &State, rng: &mut R) -> Result<Outcome, SearchError> {
    let mut state = state.clone();
    loop {
        if let Some(outcome) = state.winner() {
            return Ok(outcome);
        }
        let column = *state
            .available_moves()
            .choose(rng)
            .ok_or(SearchError::NoLegalMoves)?;
        state.apply_move(column)?;
    }
}

/// Agent that picks the move with the most random-playout wins.
#[derive(Debug)]
pub struct RandomRollout {
    config: RolloutConfig,
    rng: ChaCha20Rng,
}

impl RandomRollout {
    /// Create an agent seeded from OS entropy.
    pub fn new(config: RolloutConfig) -> Result<Self, SearchError> {
        Self::with_rng(config, ChaCha20Rng::from_entropy())
    }

    pub fn with_seed(config: RolloutConfig, seed: u64) -> Result<Self, SearchError> {
        Self::with_rng(config, ChaCha20Rng::seed_from_u64(seed))
    }

    pub fn with_rng(config: RolloutConfig, rng: ChaCha20Rng) -> Result<Self, SearchError> {
        config.validate()?;
        Ok(Self { config, rng })
    }

    pub fn config(&self) -> &RolloutConfig {
        &self.config
    }

    /// Run `walks` playouts under every candidate and count the wins.
    pub fn evaluate(&mut self, state: &State) -> Result<SearchResult, SearchError> {
        let mut tree = GameTree::new(state.clone());
        let root = tree.root();
        tree.expand(root)?;

        let me = state.to_move();
        let mut candidates = Vec::with_capacity(tree.children(root).len());
        let mut best: Option<(u8, u32)> = None;

        for &child in tree.children(root) {
            let node = tree.get(child);
            let Some(column) = node.action else {
                continue;
            };

            let mut wins = 0u32;
            for _ in 0..self.config.walks {
                if playout(&node.state, &mut self.rng)? == Outcome::Winner(me) {
                    wins += 1;
                }
            }

            let stats = CandidateStats {
                column,
                visits: self.config.walks,
                value: wins as f64,
            };
            debug!(column, wins, win_rate = stats.win_rate(), "Rollout candidate evaluated");

            if best.map_or(true, |(_, count)| wins > count) {
                best = Some((column, wins));
            }
            candidates.push(stats);
        }

        let (action, _) = best.ok_or(SearchError::NoLegalMoves)?;
        Ok(SearchResult {
            action,
            candidates,
            nodes: tree.len(),
        })
    }
}

impl Agent for RandomRollout {
    fn name(&self) -> &str {
        "random-rollout"
    }

    fn select_move(&mut self, state: &State) -> Result<u8, SearchError> {
        self.evaluate(state).map(|result| result.action)
    }
}
