//! MCTS search implementation.
//!
//! Every candidate root move gets its own budget of walks:
//! 1. Selection: descend with UCT while the node is fully expanded
//! 2. Expansion: add children for the selected node
//! 3. Simulation: random playout from a copy of its board
//! 4. Backpropagation: update statistics back up to the candidate

use games_connect4::{IllegalMove, State};
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use thiserror::Error;
use tracing::{debug, trace};

use crate::agent::Agent;
use crate::config::MctsConfig;
use crate::node::NodeId;
use crate::rollout::playout;
use crate::tree::GameTree;

/// Errors that can occur while choosing a move.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("No legal moves available")]
    NoLegalMoves,

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Illegal move: {0}")]
    IllegalMove(#[from] IllegalMove),

    #[error("Game tree is full at {nodes} nodes")]
    TreeFull { nodes: usize },

    /// Reading a move from outside the process failed. Only agents that
    /// take their moves from a person or another program produce this.
    #[error("Agent input failed: {0}")]
    Input(#[from] std::io::Error),
}

/// Statistics gathered for one candidate root move.
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateStats {
    pub column: u8,
    /// Walks credited to this candidate
    pub visits: u32,
    /// Accumulated value (wins, ties counting half for MCTS)
    pub value: f64,
}

impl CandidateStats {
    pub fn win_rate(&self) -> f64 {
        if self.visits == 0 {
            0.0
        } else {
            self.value / self.visits as f64
        }
    }
}

/// Result of a search.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Column to play
    pub action: u8,

    /// Per-candidate statistics in ascending column order
    pub candidates: Vec<CandidateStats>,

    /// Nodes materialized during the search
    pub nodes: usize,
}

/// Agent that runs Monte Carlo Tree Search under each candidate move.
#[derive(Debug)]
pub struct Mcts {
    config: MctsConfig,
    rng: ChaCha20Rng,
}

impl Mcts {
    /// Create an agent seeded from OS entropy.
    pub fn new(config: MctsConfig) -> Result<Self, SearchError> {
        Self::with_rng(config, ChaCha20Rng::from_entropy())
    }

    pub fn with_seed(config: MctsConfig, seed: u64) -> Result<Self, SearchError> {
        Self::with_rng(config, ChaCha20Rng::seed_from_u64(seed))
    }

    pub fn with_rng(config: MctsConfig, rng: ChaCha20Rng) -> Result<Self, SearchError> {
        config.validate()?;
        Ok(Self { config, rng })
    }

    pub fn config(&self) -> &MctsConfig {
        &self.config
    }

    /// Run the search from `state` and report every candidate's statistics.
    pub fn search(&mut self, state: &State) -> Result<SearchResult, SearchError> {
        let mut tree = GameTree::new(state.clone());
        let root = tree.root();
        tree.expand(root)?;

        let candidates = tree.children(root).to_vec();
        if candidates.is_empty() {
            return Err(SearchError::NoLegalMoves);
        }

        for &candidate in &candidates {
            for walk in 0..self.config.walks {
                self.walk(&mut tree, candidate, walk)?;
            }

            let node = tree.get(candidate);
            debug!(
                column = ?node.action,
                visits = node.visit_count,
                value = node.win_value,
                "MCTS candidate evaluated"
            );
        }

        let (action, value) = tree
            .best_child_by_value(root)
            .ok_or(SearchError::NoLegalMoves)?;

        let stats = candidates
            .iter()
            .filter_map(|&id| {
                let node = tree.get(id);
                node.action.map(|column| CandidateStats {
                    column,
                    visits: node.visit_count,
                    value: node.win_value,
                })
            })
            .collect();

        let tree_stats = tree.stats();
        debug!(
            action,
            value,
            nodes = tree_stats.total_nodes,
            max_depth = tree_stats.max_depth,
            "MCTS search complete"
        );

        Ok(SearchResult {
            action,
            candidates: stats,
            nodes: tree.len(),
        })
    }

    /// One select -> expand -> simulate -> backpropagate pass under `candidate`.
    fn walk(&mut self, tree: &mut GameTree, candidate: NodeId, walk: u32) -> Result<(), SearchError> {
        let leaf = self.select(tree, candidate, walk)?;
        tree.expand(leaf)?;

        let outcome = playout(&tree.get(leaf).state, &mut self.rng)?;
        tree.backpropagate(leaf, candidate, outcome);

        trace!(walk, leaf = leaf.0, %outcome, "MCTS walk complete");
        Ok(())
    }

    /// Descend from `start` while every child has been visited, then pick
    /// an unvisited child at random if there is one.
    ///
    /// The logarithm uses the walk index of the current candidate, clamped
    /// to 1 so the first walk scores pure exploitation instead of ln(0).
    fn select(&mut self, tree: &mut GameTree, start: NodeId, walk: u32) -> Result<NodeId, SearchError> {
        let ln_t = f64::from(walk.max(1)).ln();
        let c = self.config.exploration;
        let mut current = start;

        loop {
            tree.expand(current)?;
            if tree.get(current).is_terminal() || !tree.is_fully_expanded(current) {
                break;
            }
            match tree.select_uct(current, ln_t, c) {
                Some(child) => current = child,
                None => break,
            }
        }

        let unvisited: Vec<NodeId> = tree
            .children(current)
            .iter()
            .copied()
            .filter(|&id| tree.get(id).visit_count == 0)
            .collect();

        Ok(unvisited.choose(&mut self.rng).copied().unwrap_or(current))
    }
}

impl Agent for Mcts {
    fn name(&self) -> &str {
        "mcts"
    }

    fn select_move(&mut self, state: &State) -> Result<u8, SearchError> {
        self.search(state).map(|result| result.action)
    }
}
