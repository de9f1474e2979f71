//! Game-tree search agents for Connect 4.
//!
//! This crate provides the search core that turns a board into a column:
//! a lazily expanded game tree, random playouts, and two agents built on
//! them.
//!
//! # Overview
//!
//! - [`RandomRollout`] runs a fixed number of random playouts under every
//!   legal move and plays the one that won most often.
//! - [`Mcts`] runs Monte Carlo Tree Search under every legal move. Each
//!   walk has four phases:
//!
//! 1. **Selection**: Descend with UCT (`w/n + c * sqrt(ln(t) / n)`) while
//!    every child has been visited
//! 2. **Expansion**: Add one child per legal move
//! 3. **Simulation**: Play random moves on a copy of the board until the
//!    game ends
//! 4. **Backpropagation**: Update visit counts and win values back up to
//!    the candidate move
//!
//! # Usage
//!
//! ```rust
//! use games_connect4::State;
//! use mcts::{Agent, Mcts, MctsConfig};
//!
//! let mut agent = Mcts::with_seed(MctsConfig::for_testing(), 42).unwrap();
//! let column = agent.select_move(&State::new()).unwrap();
//! assert!(column < 7);
//! ```
//!
//! # Configuration
//!
//! - [`MctsConfig`]: `walks` per candidate (default 100) and the exploration
//!   constant `c` (default sqrt 2)
//! - [`RolloutConfig`]: `walks` per candidate (default 100)
//!
//! Every agent owns a seedable `ChaCha20Rng`, so a fixed seed reproduces
//! the same choices.

pub mod agent;
pub mod config;
pub mod node;
pub mod rollout;
pub mod search;
pub mod tree;

// Re-export main types
pub use agent::{Agent, RandomAgent};
pub use config::{MctsConfig, RolloutConfig, DEFAULT_WALKS};
pub use node::{Children, Node, NodeId};
pub use rollout::{playout, RandomRollout};
pub use search::{CandidateStats, Mcts, SearchError, SearchResult};
pub use tree::{GameTree, TreeStats};
