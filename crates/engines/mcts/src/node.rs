//! Search tree node.
//!
//! Nodes store no board. The state at a node is recovered by replaying the
//! moves on the path from the root onto the tree's anchor position.

use isolation_core::Move;

/// Handle into the node arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub u32);

impl NodeId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// A node in the search tree.
///
/// `visits` and `utility` are from the point of view of the player to move
/// at the parent, i.e. the player who made `mv`.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchNode {
    /// Move that led here from the parent (None at the root)
    pub mv: Option<Move>,
    pub parent: Option<NodeId>,
    /// Empty until the node is expanded; ordered like the legal moves.
    pub children: Vec<NodeId>,
    pub visits: u32,
    /// Sum of backpropagated scores, each in [0, 1]
    pub utility: f64,
}

impl SearchNode {
    pub fn root() -> Self {
        Self {
            mv: None,
            parent: None,
            children: Vec::new(),
            visits: 0,
            utility: 0.0,
        }
    }

    pub fn child(parent: NodeId, mv: Move) -> Self {
        Self {
            mv: Some(mv),
            parent: Some(parent),
            children: Vec::new(),
            visits: 0,
            utility: 0.0,
        }
    }

    #[inline]
    pub fn is_expanded(&self) -> bool {
        !self.children.is_empty()
    }

    /// Average score, 0 if never visited.
    #[inline]
    pub fn mean_value(&self) -> f64 {
        if self.visits == 0 {
            0.0
        } else {
            self.utility / self.visits as f64
        }
    }

    /// UCT score: mean value plus `c * sqrt(ln(N) / n)`.
    ///
    /// Unvisited nodes score `+inf`; selection never reaches this case
    /// because it returns the first unvisited child directly.
    #[inline]
    pub fn uct(&self, parent_visits: u32, c: f64) -> f64 {
        if self.visits == 0 {
            return f64::INFINITY;
        }
        let n = self.visits as f64;
        self.mean_value() + c * ((parent_visits as f64).ln() / n).sqrt()
    }
}
