//! Move selection agents.

use games_connect4::State;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::search::SearchError;

/// Anything that can choose a column for the player to move.
///
/// Implementations get a shared reference, so the caller's board is never
/// modified; any exploration happens on copies.
pub trait Agent {
    /// Short name used in logs
    fn name(&self) -> &str;

    /// Choose a column for `state.to_move()`.
    ///
    /// Returns [`SearchError::NoLegalMoves`] when the game is already over.
    fn select_move(&mut self, state: &State) -> Result<u8, SearchError>;
}

impl<A: Agent + ?Sized> Agent for Box<A> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn select_move(&mut self, state: &State) -> Result<u8, SearchError> {
        (**self).select_move(state)
    }
}

/// Agent that plays a uniformly random legal column.
#[derive(Debug)]
pub struct RandomAgent {
    rng: ChaCha20Rng,
}

impl RandomAgent {
    pub fn new() -> Self {
        Self::with_rng(ChaCha20Rng::from_entropy())
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(ChaCha20Rng::seed_from_u64(seed))
    }

    pub fn with_rng(rng: ChaCha20Rng) -> Self {
        Self { rng }
    }
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for RandomAgent {
    fn name(&self) -> &str {
        "random"
    }

    fn select_move(&mut self, state: &State) -> Result<u8, SearchError> {
        state
            .legal_moves()
            .choose(&mut self.rng)
            .copied()
            .ok_or(SearchError::NoLegalMoves)
    }
}
