//! Game tree node representation.
//!
//! Each node owns the board reached by taking an action from the parent.
//! Nodes store visit statistics used for UCT selection.

use games_connect4::{Outcome, State};

/// Index into the node arena. Using a newtype for type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub u32);

impl NodeId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Child collection of a node.
///
/// Expansion moves a node from `NotExpanded` to `Expanded` exactly once.
/// An expanded node with an empty list is terminal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Children {
    #[default]
    NotExpanded,
    Expanded(Vec<NodeId>),
}

impl Children {
    /// Child ids in ascending column order; empty until expanded.
    #[inline]
    pub fn as_slice(&self) -> &[NodeId] {
        match self {
            Children::NotExpanded => &[],
            Children::Expanded(ids) => ids,
        }
    }
}

/// A node in the game tree.
#[derive(Debug, Clone)]
pub struct Node {
    /// Parent node index (None for root). Only used to walk back up.
    pub parent: Option<NodeId>,

    /// Column that led to this node from parent (None for root)
    pub action: Option<u8>,

    /// Board at this node, owned by the node
    pub state: State,

    /// Number of times this node has been visited
    pub visit_count: u32,

    /// Accumulated win value from the perspective of the player who moved
    /// into this node. Ties count half.
    pub win_value: f64,

    pub children: Children,
}

impl Node {
    /// Create a new root node.
    pub fn new_root(state: State) -> Self {
        Self {
            parent: None,
            action: None,
            state,
            visit_count: 0,
            win_value: 0.0,
            children: Children::NotExpanded,
        }
    }

    /// Create a new child node.
    pub fn new_child(parent: NodeId, action: u8, state: State) -> Self {
        Self {
            parent: Some(parent),
            action: Some(action),
            ..Self::new_root(state)
        }
    }

    /// Calculate the UCT score for child selection.
    /// UCT = w/n + c * sqrt(ln(t) / n)
    ///
    /// Takes pre-computed ln(t). Only meaningful for visited nodes; an
    /// unvisited node scores +inf so it would always be tried first.
    #[inline]
    pub fn uct_score(&self, ln_t: f64, c: f64) -> f64 {
        if self.visit_count == 0 {
            return f64::INFINITY;
        }
        let n = self.visit_count as f64;
        self.win_value / n + c * (ln_t / n).sqrt()
    }

    /// Value credited to this node for a finished playout.
    ///
    /// `state.to_move()` is the player whose turn it is on this board, the
    /// opponent of whoever chose to come here. A result against the player
    /// to move is a win for the node.
    #[inline]
    pub fn reward(&self, outcome: Outcome) -> f64 {
        match outcome {
            Outcome::Tie => 0.5,
            Outcome::Winner(player) if player != self.state.to_move() => 1.0,
            Outcome::Winner(_) => 0.0,
        }
    }

    #[inline]
    pub fn is_expanded(&self) -> bool {
        matches!(self.children, Children::Expanded(_))
    }

    /// Expanded with no children.
    #[inline]
    pub fn is_terminal(&self) -> bool {
        matches!(&self.children, Children::Expanded(ids) if ids.is_empty())
    }
}
