//! Isolation Agent
//!
//! The player a game driver talks to. A [`TurnController`] is built from an
//! [`AgentConfig`] and implements [`isolation_core::Agent`]: each call to
//! `choose_move` runs minimax, alpha-beta or MCTS until the turn clock runs
//! low, carrying the MCTS tree over to the next turn.

pub mod config;
pub mod controller;

pub use config::{AgentConfig, ConfigError, Strategy};
pub use controller::{TurnController, OPENING_MOVES};

// Re-export the engine configs so callers need only this crate
pub use mcts_engine::{FinalMoveRule, MctsConfig, RolloutPolicy};
pub use minimax_engine::MinimaxConfig;

impl TryFrom<AgentConfig> for TurnController {
    type Error = ConfigError;

    fn try_from(config: AgentConfig) -> Result<Self, Self::Error> {
        TurnController::try_new(config)
    }
}
