//! A single game between two agents.

use anyhow::{Context, Result};
use games_connect4::{Outcome, Player, State};
use mcts::Agent;
use tracing::debug;

/// Two agents and the board they are playing on.
pub struct Game {
    red: Box<dyn Agent>,
    yellow: Box<dyn Agent>,
    initial: State,
    state: State,
}

impl Game {
    pub fn new(red: Box<dyn Agent>, yellow: Box<dyn Agent>, initial: State) -> Self {
        Self {
            red,
            yellow,
            state: initial.clone(),
            initial,
        }
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    /// Put the starting board back for another game.
    pub fn reset(&mut self) {
        self.state = self.initial.clone();
    }

    /// Ask the agent whose color is to move for a column and play it.
    pub fn play_turn(&mut self) -> Result<u8> {
        let player = self.state.to_move();
        let agent = match player {
            Player::Red => &mut self.red,
            Player::Yellow => &mut self.yellow,
        };

        let column = agent
            .select_move(&self.state)
            .with_context(|| format!("{} ({}) failed to choose a move", player, agent.name()))?;
        self.state
            .apply_move(column)
            .with_context(|| format!("{} ({}) chose column {}", player, agent.name(), column))?;

        debug!(%player, column, "Move played\n{}", self.state);
        Ok(column)
    }

    /// Play turns until the board is decided.
    pub fn play_game(&mut self) -> Result<Outcome> {
        loop {
            if let Some(outcome) = self.state.winner() {
                return Ok(outcome);
            }
            self.play_turn()?;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mcts::{Mcts, MctsConfig, RandomAgent, RandomRollout, RolloutConfig, SearchError};

    /// Plays a fixed list of columns in order.
    struct Scripted {
        moves: Vec<u8>,
        next: usize,
    }

    impl Scripted {
        fn new(moves: &[u8]) -> Box<dyn Agent> {
            Box::new(Self {
                moves: moves.to_vec(),
                next: 0,
            })
        }
    }

    impl Agent for Scripted {
        fn name(&self) -> &str {
            "scripted"
        }

        fn select_move(&mut self, _state: &State) -> Result<u8, SearchError> {
            let column = self.moves.get(self.next).copied().ok_or(SearchError::NoLegalMoves)?;
            self.next += 1;
            Ok(column)
        }
    }

    #[test]
    fn play_turn_alternates_agents() {
        let mut game = Game::new(Scripted::new(&[3, 3]), Scripted::new(&[4]), State::new());

        assert_eq!(game.play_turn().unwrap(), 3);
        assert_eq!(game.state().to_move(), Player::Yellow);
        assert_eq!(game.play_turn().unwrap(), 4);
        assert_eq!(game.state().to_move(), Player::Red);
        assert_eq!(game.state().moves_played(), 2);
    }

    #[test]
    fn play_game_stops_at_win() {
        // Red stacks column 0 while Yellow stacks column 1
        let mut game = Game::new(
            Scripted::new(&[0, 0, 0, 0]),
            Scripted::new(&[1, 1, 1]),
            State::new(),
        );

        assert_eq!(game.play_game().unwrap(), Outcome::Winner(Player::Red));
        assert_eq!(game.state().moves_played(), 7);
    }

    #[test]
    fn yellow_bottom_row_win() {
        let mut game = Game::new(
            Scripted::new(&[6, 6, 6, 5]),
            Scripted::new(&[0, 1, 2, 3]),
            State::new(),
        );

        assert_eq!(game.play_game().unwrap(), Outcome::Winner(Player::Yellow));
    }

    #[test]
    fn illegal_agent_move_is_error() {
        let mut game = Game::new(Scripted::new(&[9]), Scripted::new(&[]), State::new());

        let err = game.play_turn().unwrap_err();
        assert!(err.to_string().contains("chose column 9"));
        assert_eq!(game.state(), &State::new());
    }

    #[test]
    fn reset_restores_initial_board() {
        let mut game = Game::new(
            Box::new(RandomAgent::with_seed(1)),
            Box::new(RandomAgent::with_seed(2)),
            State::new(),
        );
        game.play_game().unwrap();
        assert!(game.state().is_terminal());

        game.reset();
        assert_eq!(game.state(), &State::new());
    }

    #[test]
    fn search_agents_finish_a_game() {
        let mut game = Game::new(
            Box::new(RandomRollout::with_seed(RolloutConfig::default().with_walks(3), 5).unwrap()),
            Box::new(Mcts::with_seed(MctsConfig::default().with_walks(3), 6).unwrap()),
            State::new(),
        );

        let outcome = game.play_game().unwrap();
        assert_eq!(game.state().winner(), Some(outcome));
    }

    #[test]
    fn custom_board_size() {
        let state = State::with_dimensions(5, 4).unwrap();
        let mut game = Game::new(
            Box::new(RandomAgent::with_seed(11)),
            Box::new(RandomAgent::with_seed(12)),
            state,
        );

        game.play_game().unwrap();
        assert!(game.state().moves_played() <= 20);
    }
}
