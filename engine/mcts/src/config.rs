//! Agent configuration parameters.

use crate::search::SearchError;

/// Playouts per candidate move when nothing else is configured.
pub const DEFAULT_WALKS: u32 = 100;

/// Configuration for Monte Carlo Tree Search.
#[derive(Debug, Clone)]
pub struct MctsConfig {
    /// Iterations run under each candidate root move.
    /// Zero is allowed: the search then returns the first legal column.
    pub walks: u32,

    /// Exploration constant `c` in the UCT formula.
    /// Higher values encourage exploration, lower values favor exploitation.
    pub exploration: f64,
}

impl Default for MctsConfig {
    fn default() -> Self {
        Self {
            walks: DEFAULT_WALKS,
            exploration: std::f64::consts::SQRT_2,
        }
    }
}

impl MctsConfig {
    /// Create a fast config for testing.
    pub fn for_testing() -> Self {
        Self {
            walks: 20,
            ..Self::default()
        }
    }

    /// Builder pattern: set walks per candidate.
    pub fn with_walks(mut self, walks: u32) -> Self {
        self.walks = walks;
        self
    }

    /// Builder pattern: set the exploration constant.
    pub fn with_exploration(mut self, c: f64) -> Self {
        self.exploration = c;
        self
    }

    pub fn validate(&self) -> Result<(), SearchError> {
        if !self.exploration.is_finite() || self.exploration < 0.0 {
            return Err(SearchError::InvalidConfig(format!(
                "exploration constant must be finite and non-negative, got {}",
                self.exploration
            )));
        }
        Ok(())
    }
}

/// Configuration for random-rollout evaluation.
#[derive(Debug, Clone)]
pub struct RolloutConfig {
    /// Random playouts per candidate move. Must be positive.
    pub walks: u32,
}

impl Default for RolloutConfig {
    fn default() -> Self {
        Self {
            walks: DEFAULT_WALKS,
        }
    }
}

impl RolloutConfig {
    /// Builder pattern: set walks per candidate.
    pub fn with_walks(mut self, walks: u32) -> Self {
        self.walks = walks;
        self
    }

    pub fn validate(&self) -> Result<(), SearchError> {
        if self.walks == 0 {
            return Err(SearchError::InvalidConfig(
                "rollout walks must be positive".to_string(),
            ));
        }
        Ok(())
    }
}
