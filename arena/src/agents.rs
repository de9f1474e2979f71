//! Agent kinds selectable from the command line and config.toml.

use anyhow::{anyhow, Result};
use games_connect4::State;
use mcts::{Agent, Mcts, MctsConfig, RandomAgent, RandomRollout, RolloutConfig, SearchError};
use std::fmt;
use std::io::{self, BufRead, BufReader, Stdin, Stdout, Write};
use std::str::FromStr;

/// Which move-selection strategy plays a color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgentKind {
    Human,
    Random,
    Rollout,
    Mcts,
}

impl FromStr for AgentKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "human" => Ok(AgentKind::Human),
            "random" => Ok(AgentKind::Random),
            "rollout" | "random-rollout" => Ok(AgentKind::Rollout),
            "mcts" => Ok(AgentKind::Mcts),
            other => Err(anyhow!(
                "unknown agent '{}', expected one of human, random, rollout, mcts",
                other
            )),
        }
    }
}

impl fmt::Display for AgentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AgentKind::Human => "human",
            AgentKind::Random => "random",
            AgentKind::Rollout => "rollout",
            AgentKind::Mcts => "mcts",
        };
        f.write_str(name)
    }
}

/// Search settings shared by every agent built for a match.
#[derive(Debug, Clone)]
pub struct AgentSettings {
    pub rollout: RolloutConfig,
    pub mcts: MctsConfig,
}

impl AgentKind {
    /// Build an agent of this kind, seeded when `seed` is given.
    pub fn build(self, settings: &AgentSettings, seed: Option<u64>) -> Result<Box<dyn Agent>> {
        let agent: Box<dyn Agent> = match (self, seed) {
            (AgentKind::Human, _) => Box::new(HumanAgent::stdio()),
            (AgentKind::Random, Some(seed)) => Box::new(RandomAgent::with_seed(seed)),
            (AgentKind::Random, None) => Box::new(RandomAgent::new()),
            (AgentKind::Rollout, Some(seed)) => {
                Box::new(RandomRollout::with_seed(settings.rollout.clone(), seed)?)
            }
            (AgentKind::Rollout, None) => Box::new(RandomRollout::new(settings.rollout.clone())?),
            (AgentKind::Mcts, Some(seed)) => {
                Box::new(Mcts::with_seed(settings.mcts.clone(), seed)?)
            }
            (AgentKind::Mcts, None) => Box::new(Mcts::new(settings.mcts.clone())?),
        };
        Ok(agent)
    }
}

/// Agent that asks a person for a column, re-prompting until it is legal.
pub struct HumanAgent<R, W> {
    input: R,
    output: W,
}

impl HumanAgent<BufReader<Stdin>, Stdout> {
    pub fn stdio() -> Self {
        Self::new(BufReader::new(io::stdin()), io::stdout())
    }
}

impl<R: BufRead, W: Write> HumanAgent<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> Agent for HumanAgent<R, W> {
    fn name(&self) -> &str {
        "human"
    }

    fn select_move(&mut self, state: &State) -> Result<u8, SearchError> {
        let legal = state.legal_moves();
        if legal.is_empty() {
            return Err(SearchError::NoLegalMoves);
        }

        writeln!(self.output, "{}", state)?;
        loop {
            write!(self.output, "Column (0-{}): ", state.columns() - 1)?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(io::Error::from(io::ErrorKind::UnexpectedEof).into());
            }

            match line.trim().parse::<u8>() {
                Ok(column) if legal.contains(&column) => return Ok(column),
                _ => writeln!(self.output, "'{}' is not a playable column", line.trim())?,
            }
        }
    }
}
