//! Game tree with arena allocation.
//!
//! Nodes are stored in a contiguous Vec and referenced by NodeId indices.
//! Parents are plain indices, so walking back up never involves ownership.
//! The whole arena is dropped with the tree once a move has been chosen.

use games_connect4::{Outcome, State};

use crate::node::{Children, Node, NodeId};
use crate::search::SearchError;

/// Game tree with arena-based node storage.
#[derive(Debug)]
pub struct GameTree {
    /// Arena storing all nodes
    nodes: Vec<Node>,

    /// Root node index (always 0 after initialization)
    root: NodeId,
}

impl GameTree {
    /// Create a new tree rooted at a copy of the given state.
    pub fn new(root_state: State) -> Self {
        Self {
            nodes: vec![Node::new_root(root_state)],
            root: NodeId(0),
        }
    }

    /// Get the root node ID.
    #[inline]
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Get a reference to a node by ID.
    #[inline]
    pub fn get(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    /// Get a mutable reference to a node by ID.
    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.index()]
    }

    /// Allocate a new node and return its ID.
    fn allocate(&mut self, node: Node) -> Result<NodeId, SearchError> {
        let id = next_id(self.nodes.len())?;
        self.nodes.push(node);
        Ok(id)
    }

    /// Get the total number of nodes in the tree.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if tree is empty (should never be true after construction).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Children of a node in ascending column order (empty until expanded).
    #[inline]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.get(id).children.as_slice()
    }

    /// Materialize one child per legal move.
    ///
    /// A node that is already expanded is left untouched. A decided or full
    /// board expands to an empty child list.
    pub fn expand(&mut self, id: NodeId) -> Result<(), SearchError> {
        if self.get(id).is_expanded() {
            return Ok(());
        }

        let state = self.get(id).state.clone();
        let moves = state.legal_moves();
        let mut children = Vec::with_capacity(moves.len());
        for column in moves {
            let child_state = state.with_move(column)?;
            children.push(self.allocate(Node::new_child(id, column, child_state))?);
        }

        self.get_mut(id).children = Children::Expanded(children);
        Ok(())
    }

    /// Whether every child of an expanded node has been visited.
    ///
    /// Nodes with no children count as fully expanded; unexpanded nodes
    /// do not.
    pub fn is_fully_expanded(&self, id: NodeId) -> bool {
        match &self.get(id).children {
            Children::NotExpanded => false,
            Children::Expanded(ids) => ids.iter().all(|&child| self.get(child).visit_count > 0),
        }
    }

    /// Select the child with the highest UCT score.
    /// Ties keep the first child in column order.
    pub fn select_uct(&self, id: NodeId, ln_t: f64, c: f64) -> Option<NodeId> {
        let mut best: Option<(NodeId, f64)> = None;
        for &child in self.children(id) {
            let score = self.get(child).uct_score(ln_t, c);
            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((child, score));
            }
        }
        best.map(|(child, _)| child)
    }

    /// Credit a finished playout to `leaf` and its ancestors, up to and
    /// including `stop_at` (or the root if `stop_at` is not an ancestor).
    ///
    /// Each node is valued from the perspective of the player who moved
    /// into it, see [`Node::reward`].
    pub fn backpropagate(&mut self, leaf: NodeId, stop_at: NodeId, outcome: Outcome) {
        let mut current = Some(leaf);
        while let Some(id) = current {
            let node = self.get_mut(id);
            let value = node.reward(outcome);
            node.visit_count += 1;
            node.win_value += value;

            if id == stop_at {
                break;
            }
            current = node.parent;
        }
    }

    /// Child of `id` with the highest accumulated win value.
    /// Returns (column, win_value); ties keep the first child in column order.
    pub fn best_child_by_value(&self, id: NodeId) -> Option<(u8, f64)> {
        let mut best: Option<(u8, f64)> = None;
        for &child in self.children(id) {
            let node = self.get(child);
            let Some(action) = node.action else {
                continue;
            };
            if best.map_or(true, |(_, value)| node.win_value > value) {
                best = Some((action, node.win_value));
            }
        }
        best
    }

    /// Get statistics about the tree for debugging.
    pub fn stats(&self) -> TreeStats {
        TreeStats {
            total_nodes: self.nodes.len(),
            candidate_visits: self
                .children(self.root)
                .iter()
                .map(|&id| u64::from(self.get(id).visit_count))
                .sum(),
            max_depth: self.compute_max_depth(self.root, 0),
        }
    }

    fn compute_max_depth(&self, node_id: NodeId, current_depth: u32) -> u32 {
        self.children(node_id)
            .iter()
            .map(|&id| self.compute_max_depth(id, current_depth + 1))
            .max()
            .unwrap_or(current_depth)
    }
}

/// Id for the node stored at arena index `len`.
fn next_id(len: usize) -> Result<NodeId, SearchError> {
    u32::try_from(len)
        .map(NodeId)
        .map_err(|_| SearchError::TreeFull { nodes: len })
}

/// Statistics about a game tree.
#[derive(Debug, Clone)]
pub struct TreeStats {
    pub total_nodes: usize,
    /// Walks credited across all root children
    pub candidate_visits: u64,
    pub max_depth: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use games_connect4::{Player, COLS};

    #[test]
    fn test_new_tree() {
        let tree = GameTree::new(State::new());

        assert_eq!(tree.len(), 1);
        assert!(!tree.is_empty());
        assert_eq!(tree.root(), NodeId(0));

        let root = tree.get(tree.root());
        assert!(root.parent.is_none());
        assert_eq!(root.state, State::new());
        assert!(!root.is_expanded());
    }

    #[test]
    fn test_expand_creates_child_per_move() {
        let mut tree = GameTree::new(State::new());
        tree.expand(tree.root()).unwrap();

        let children = tree.children(tree.root()).to_vec();
        assert_eq!(children.len(), COLS);
        assert_eq!(tree.len(), COLS + 1);

        for (column, &child_id) in children.iter().enumerate() {
            let child = tree.get(child_id);
            assert_eq!(child.parent, Some(tree.root()));
            assert_eq!(child.action, Some(column as u8));
            assert_eq!(child.state, State::from_moves(&[column as u8]).unwrap());
            assert_eq!(child.state.to_move(), Player::Yellow);
        }

        // Root keeps its own snapshot
        assert_eq!(tree.get(tree.root()).state, State::new());
    }

    #[test]
    fn test_expand_is_idempotent() {
        let mut tree = GameTree::new(State::from_moves(&[0, 0, 0, 0, 0, 0]).unwrap());
        tree.expand(tree.root()).unwrap();
        let first = tree.children(tree.root()).to_vec();
        let len = tree.len();

        tree.get_mut(first[0]).visit_count = 3;
        tree.expand(tree.root()).unwrap();

        assert_eq!(tree.children(tree.root()), first.as_slice());
        assert_eq!(tree.len(), len);
        assert_eq!(tree.get(first[0]).visit_count, 3);

        // Full column 0 is skipped
        let actions: Vec<_> = first.iter().map(|&id| tree.get(id).action).collect();
        assert_eq!(actions, (1..COLS as u8).map(Some).collect::<Vec<_>>());
    }

    #[test]
    fn test_expand_decided_board_is_terminal() {
        let won = State::from_moves(&[0, 1, 0, 1, 0, 1, 0]).unwrap();
        let mut tree = GameTree::new(won);
        tree.expand(tree.root()).unwrap();

        let root = tree.get(tree.root());
        assert!(root.is_expanded());
        assert!(root.is_terminal());
        assert!(tree.is_fully_expanded(tree.root()));
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn test_fully_expanded() {
        let mut tree = GameTree::new(State::new());
        assert!(!tree.is_fully_expanded(tree.root()));

        tree.expand(tree.root()).unwrap();
        assert!(!tree.is_fully_expanded(tree.root()));

        let children = tree.children(tree.root()).to_vec();
        for &child in &children[..COLS - 1] {
            tree.get_mut(child).visit_count = 1;
        }
        assert!(!tree.is_fully_expanded(tree.root()));

        tree.get_mut(children[COLS - 1]).visit_count = 1;
        assert!(tree.is_fully_expanded(tree.root()));
    }

    #[test]
    fn test_backpropagate() {
        let mut tree = GameTree::new(State::new());

        // Create a chain: root -> child (Red played 3) -> grandchild (Yellow played 3)
        tree.expand(tree.root()).unwrap();
        let child_id = tree.children(tree.root())[3];
        tree.expand(child_id).unwrap();
        let grandchild_id = tree.children(child_id)[3];

        tree.backpropagate(grandchild_id, tree.root(), Outcome::Winner(Player::Red));

        // Check visits
        assert_eq!(tree.get(grandchild_id).visit_count, 1);
        assert_eq!(tree.get(child_id).visit_count, 1);
        assert_eq!(tree.get(tree.root()).visit_count, 1);

        // Red to move at the grandchild: Yellow chose it, so it is a loss there
        assert_eq!(tree.get(grandchild_id).win_value, 0.0);
        // Yellow to move at the child: Red chose it, so it is a win there
        assert_eq!(tree.get(child_id).win_value, 1.0);
        assert_eq!(tree.get(tree.root()).win_value, 0.0);
    }

    #[test]
    fn test_backpropagate_stops_at_candidate() {
        let mut tree = GameTree::new(State::new());
        tree.expand(tree.root()).unwrap();
        let child_id = tree.children(tree.root())[0];
        tree.expand(child_id).unwrap();
        let grandchild_id = tree.children(child_id)[6];

        tree.backpropagate(grandchild_id, child_id, Outcome::Tie);

        assert_eq!(tree.get(grandchild_id).win_value, 0.5);
        assert_eq!(tree.get(child_id).win_value, 0.5);
        assert_eq!(tree.get(child_id).visit_count, 1);
        assert_eq!(tree.get(tree.root()).visit_count, 0);
    }

    #[test]
    fn test_select_uct() {
        let mut tree = GameTree::new(State::new());
        tree.expand(tree.root()).unwrap();
        let children = tree.children(tree.root()).to_vec();

        for &child in &children {
            tree.get_mut(child).visit_count = 10;
            tree.get_mut(child).win_value = 5.0;
        }
        // Equal scores: first child wins
        assert_eq!(tree.select_uct(tree.root(), 1.0, 1.0), Some(children[0]));

        // Fewer visits means a larger exploration bonus
        tree.get_mut(children[4]).visit_count = 5;
        tree.get_mut(children[4]).win_value = 2.5;
        assert_eq!(tree.select_uct(tree.root(), 1.0, 1.0), Some(children[4]));

        // With ln(t) = 0 only the win rate matters
        tree.get_mut(children[2]).win_value = 6.0;
        assert_eq!(tree.select_uct(tree.root(), 0.0, 1.0), Some(children[2]));
    }

    #[test]
    fn test_select_uct_no_children() {
        let tree = GameTree::new(State::new());
        assert_eq!(tree.select_uct(tree.root(), 1.0, 1.0), None);
    }

    #[test]
    fn test_best_child_by_value() {
        let mut tree = GameTree::new(State::new());
        assert_eq!(tree.best_child_by_value(tree.root()), None);

        tree.expand(tree.root()).unwrap();
        // All zero: first column
        assert_eq!(tree.best_child_by_value(tree.root()), Some((0, 0.0)));

        let children = tree.children(tree.root()).to_vec();
        tree.get_mut(children[2]).win_value = 4.5;
        tree.get_mut(children[5]).win_value = 4.5;
        assert_eq!(tree.best_child_by_value(tree.root()), Some((2, 4.5)));
    }

    #[test]
    fn test_tree_stats() {
        let mut tree = GameTree::new(State::new());
        tree.expand(tree.root()).unwrap();
        let child = tree.children(tree.root())[0];
        tree.expand(child).unwrap();

        let grandchild = tree.children(child)[2];
        tree.backpropagate(grandchild, child, Outcome::Tie);
        tree.backpropagate(child, child, Outcome::Tie);

        let stats = tree.stats();
        assert_eq!(stats.total_nodes, 1 + COLS + COLS);
        assert_eq!(stats.max_depth, 2);
        assert_eq!(stats.candidate_visits, 2);
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn test_node_ids_stop_at_u32_limit() {
        assert_eq!(next_id(0).unwrap(), NodeId(0));
        assert_eq!(next_id(u32::MAX as usize).unwrap(), NodeId(u32::MAX));

        let overflow = u32::MAX as usize + 1;
        assert!(matches!(
            next_id(overflow),
            Err(SearchError::TreeFull { nodes }) if nodes == overflow
        ));
    }
}
