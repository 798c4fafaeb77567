//! Search tree with arena allocation.
//!
//! Nodes live in a slot vector and are referenced by [`NodeId`]. Rebasing
//! frees whole subtrees at once; their slots go on a free list and are
//! handed out again by later expansions.

use std::ops::{Index, IndexMut};

use isolation_core::{Board, Move};

use crate::config::FinalMoveRule;
use crate::node::{NodeId, SearchNode};

/// Size summary used in per-turn logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeStats {
    /// Live nodes
    pub nodes: usize,
    /// Longest root-to-node path, in plies
    pub max_depth: usize,
    pub root_visits: u32,
}

/// Arena-backed search tree.
#[derive(Debug, Clone)]
pub struct SearchTree {
    slots: Vec<Option<SearchNode>>,
    free: Vec<NodeId>,
    root: NodeId,
    len: usize,
}

impl Default for SearchTree {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchTree {
    /// Tree holding a single unexpanded root.
    pub fn new() -> Self {
        Self {
            slots: vec![Some(SearchNode::root())],
            free: Vec::new(),
            root: NodeId(0),
            len: 1,
        }
    }

    #[inline]
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Node behind `id`, or None if its slot was freed.
    #[inline]
    pub fn get(&self, id: NodeId) -> Option<&SearchNode> {
        self.slots.get(id.index()).and_then(Option::as_ref)
    }

    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut SearchNode> {
        self.slots.get_mut(id.index()).and_then(Option::as_mut)
    }

    /// Number of live nodes.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always false: the root is never freed.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Slots ever allocated, live or free.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    fn allocate(&mut self, node: SearchNode) -> NodeId {
        self.len += 1;
        match self.free.pop() {
            Some(id) => {
                self.slots[id.index()] = Some(node);
                id
            }
            None => {
                let id = NodeId(self.slots.len() as u32);
                self.slots.push(Some(node));
                id
            }
        }
    }

    /// Free `id` and everything below it.
    fn free_subtree(&mut self, id: NodeId) {
        let mut stack = vec![id];
        while let Some(id) = stack.pop() {
            if let Some(node) = self.slots.get_mut(id.index()).and_then(Option::take) {
                stack.extend(node.children);
                self.free.push(id);
                self.len -= 1;
            }
        }
    }

    /// Create one child per legal move of the side to move in `board`, the
    /// state at `id`. Returns the number of children created: 0 if the node
    /// was already expanded or the side to move is stuck.
    pub fn expand(&mut self, id: NodeId, board: &Board) -> usize {
        if self[id].is_expanded() {
            return 0;
        }

        let moves = board.legal_moves(board.active_player());
        let children: Vec<NodeId> = moves
            .into_iter()
            .map(|mv| self.allocate(SearchNode::child(id, mv)))
            .collect();
        let created = children.len();
        self[id].children = children;
        created
    }

    /// UCT descent from the root.
    ///
    /// Stops at the first node that is unexpanded, or at the first unvisited
    /// child of the current node. Otherwise follows the child with the
    /// highest UCT score, first maximum on ties.
    pub fn select(&self, c: f64) -> NodeId {
        let mut current = self.root;
        loop {
            let node = &self[current];
            if node.children.is_empty() {
                return current;
            }
            if let Some(&unvisited) = node.children.iter().find(|&&child| self[child].visits == 0) {
                return unvisited;
            }

            let mut best = node.children[0];
            let mut best_uct = f64::NEG_INFINITY;
            for &child in &node.children {
                let uct = self[child].uct(node.visits, c);
                if uct > best_uct {
                    best_uct = uct;
                    best = child;
                }
            }
            current = best;
        }
    }

    /// Add `score` at `id`, then walk to the root flipping it to `1 - score`
    /// at every step up.
    pub fn backpropagate(&mut self, id: NodeId, score: f64) {
        let mut current = Some(id);
        let mut score = score;
        while let Some(id) = current {
            let node = &mut self[id];
            node.visits += 1;
            node.utility += score;
            score = 1.0 - score;
            current = node.parent;
        }
    }

    /// Moves from the root down to `id`, in play order.
    pub fn path_moves(&self, id: NodeId) -> Vec<Move> {
        let mut moves = Vec::new();
        let mut current = id;
        while let Some(node) = self.get(current) {
            match (node.mv, node.parent) {
                (Some(mv), Some(parent)) => {
                    moves.push(mv);
                    current = parent;
                }
                _ => break,
            }
        }
        moves.reverse();
        moves
    }

    /// Child of the root reached by `mv`, if the root has one.
    pub fn root_child(&self, mv: Move) -> Option<NodeId> {
        self[self.root]
            .children
            .iter()
            .copied()
            .find(|&child| self[child].mv == Some(mv))
    }

    /// Root child to play under `rule`, first maximum on ties.
    pub fn best_child(&self, rule: FinalMoveRule) -> Option<NodeId> {
        let key = |id: NodeId| -> f64 {
            let node = &self[id];
            match rule {
                FinalMoveRule::MeanValue => node.mean_value(),
                FinalMoveRule::MostVisits => node.visits as f64,
            }
        };

        let mut best: Option<(NodeId, f64)> = None;
        for &child in &self[self.root].children {
            let value = key(child);
            if best.map_or(true, |(_, b)| value > b) {
                best = Some((child, value));
            }
        }
        best.map(|(id, _)| id)
    }

    /// Make the root child reached by `mv` the new root.
    ///
    /// The old root and every sibling subtree are freed; the new root keeps
    /// its statistics and descendants but loses its move and parent link.
    /// Returns None, leaving the tree untouched, if no child matches.
    pub fn advance(&mut self, mv: Move) -> Option<NodeId> {
        let keep = self.root_child(mv)?;
        let old_root = self.root;

        let siblings = std::mem::take(&mut self[old_root].children);
        for child in siblings {
            if child != keep {
                self.free_subtree(child);
            }
        }
        self.free_subtree(old_root);

        let node = &mut self[keep];
        node.parent = None;
        node.mv = None;
        self.root = keep;
        Some(keep)
    }

    pub fn stats(&self) -> TreeStats {
        let mut max_depth = 0;
        let mut stack = vec![(self.root, 0usize)];
        while let Some((id, depth)) = stack.pop() {
            max_depth = max_depth.max(depth);
            stack.extend(self[id].children.iter().map(|&child| (child, depth + 1)));
        }
        TreeStats {
            nodes: self.len,
            max_depth,
            root_visits: self[self.root].visits,
        }
    }
}

impl Index<NodeId> for SearchTree {
    type Output = SearchNode;

    /// Panics on a handle whose node was freed.
    fn index(&self, id: NodeId) -> &SearchNode {
        match self.get(id) {
            Some(node) => node,
            None => panic!("stale node handle {id:?}"),
        }
    }
}

impl IndexMut<NodeId> for SearchTree {
    fn index_mut(&mut self, id: NodeId) -> &mut SearchNode {
        match self.get_mut(id) {
            Some(node) => node,
            None => panic!("stale node handle {id:?}"),
        }
    }
}

#[cfg(test)]
#[path = "tree_tests.rs"]
mod tree_tests;
