//! Agent configuration loaded from TOML.
//!
//! Every key is optional; missing keys fall back to the defaults below.
//!
//! ```toml
//! strategy = "mcts"
//! time_threshold_ms = 10
//!
//! [mcts]
//! exploration_constant = 0.3
//! rollout_policy = "greedy"
//!
//! [minimax]
//! max_fixed_depth = 4
//! ```

use std::path::Path;
use std::time::Duration;

use mcts_engine::MctsConfig;
use minimax_engine::{MinimaxConfig, SearchMethod};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Search strategy run on each turn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    Minimax,
    #[serde(alias = "alpha_beta")]
    Alphabeta,
    #[default]
    Mcts,
}

impl Strategy {
    /// Search method for the minimax family, None for MCTS.
    pub fn search_method(self) -> Option<SearchMethod> {
        match self {
            Strategy::Minimax => Some(SearchMethod::Minimax),
            Strategy::Alphabeta => Some(SearchMethod::AlphaBeta),
            Strategy::Mcts => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentConfig {
    pub strategy: Strategy,
    /// Stop searching once less than this much turn time remains.
    pub time_threshold_ms: u64,
    pub mcts: MctsConfig,
    pub minimax: MinimaxConfig,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::Mcts,
            time_threshold_ms: 10,
            mcts: MctsConfig::default(),
            minimax: MinimaxConfig::default(),
        }
    }
}

impl AgentConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let c = self.mcts.exploration_constant;
        if !c.is_finite() || c < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "mcts.exploration_constant must be finite and non-negative, got {c}"
            )));
        }
        if self.mcts.rollouts_per_iteration == 0 {
            return Err(ConfigError::Invalid(
                "mcts.rollouts_per_iteration must be at least 1".into(),
            ));
        }
        if self.minimax.max_fixed_depth == 0 {
            return Err(ConfigError::Invalid(
                "minimax.max_fixed_depth must be at least 1".into(),
            ));
        }
        Ok(())
    }

    pub fn time_threshold(&self) -> Duration {
        Duration::from_millis(self.time_threshold_ms)
    }

    /// Builder pattern: set strategy.
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Builder pattern: set time threshold.
    pub fn with_time_threshold(mut self, threshold: Duration) -> Self {
        self.time_threshold_ms = threshold.as_millis() as u64;
        self
    }

    /// Builder pattern: replace the MCTS section.
    pub fn with_mcts(mut self, mcts: MctsConfig) -> Self {
        self.mcts = mcts;
        self
    }

    /// Builder pattern: replace the minimax section.
    pub fn with_minimax(mut self, minimax: MinimaxConfig) -> Self {
        self.minimax = minimax;
        self
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
