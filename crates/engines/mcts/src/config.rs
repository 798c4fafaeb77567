//! MCTS configuration parameters.

use serde::{Deserialize, Serialize};

/// How a rollout picks moves.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RolloutPolicy {
    /// Uniformly random legal moves.
    #[default]
    Random,
    /// The move leaving the mover the most legal moves, first maximum.
    Greedy,
}

/// Which root child is played once the search stops.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FinalMoveRule {
    /// Highest `utility / visits`.
    #[default]
    MeanValue,
    /// Highest visit count (robust child).
    MostVisits,
}

/// Configuration for Monte Carlo Tree Search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MctsConfig {
    /// Exploration constant C in the UCT formula.
    /// Higher values favour rarely visited children.
    pub exploration_constant: f64,

    pub rollout_policy: RolloutPolicy,

    /// Playouts averaged per iteration. With 1 every backpropagated score
    /// is either 0 or 1.
    pub rollouts_per_iteration: u32,

    pub final_move: FinalMoveRule,

    /// Seed for the rollout RNG. None draws from entropy.
    pub seed: Option<u64>,

    /// Stop after this many iterations even if time remains.
    /// None runs until the clock says stop.
    pub max_iterations: Option<u64>,
}

impl Default for MctsConfig {
    fn default() -> Self {
        Self {
            exploration_constant: 0.3,
            rollout_policy: RolloutPolicy::Random,
            rollouts_per_iteration: 1,
            final_move: FinalMoveRule::MeanValue,
            seed: None,
            max_iterations: None,
        }
    }
}

impl MctsConfig {
    /// Builder pattern: set exploration constant.
    pub fn with_exploration_constant(mut self, c: f64) -> Self {
        self.exploration_constant = c;
        self
    }

    /// Builder pattern: set rollout policy.
    pub fn with_rollout_policy(mut self, policy: RolloutPolicy) -> Self {
        self.rollout_policy = policy;
        self
    }

    /// Builder pattern: set playouts per iteration.
    pub fn with_rollouts_per_iteration(mut self, n: u32) -> Self {
        self.rollouts_per_iteration = n;
        self
    }

    /// Builder pattern: set final move rule.
    pub fn with_final_move(mut self, rule: FinalMoveRule) -> Self {
        self.final_move = rule;
        self
    }

    /// Builder pattern: fix the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Builder pattern: cap iterations per turn.
    pub fn with_max_iterations(mut self, n: u64) -> Self {
        self.max_iterations = Some(n);
        self
    }
}
