//! Monte Carlo Tree Search for Isolation
//!
//! UCT selection over an arena-backed tree, random or greedy rollouts, and
//! rebasing so the tree built during one turn is reused on the next.

pub mod config;
pub mod node;
pub mod search;
pub mod tree;

pub use config::{FinalMoveRule, MctsConfig, RolloutPolicy};
pub use node::{NodeId, SearchNode};
pub use search::{iterate, rollout, run_iterations, IterationReport};
pub use tree::{SearchTree, TreeStats};
