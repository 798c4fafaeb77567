//! Turn controller.
//!
//! Owns whatever has to survive between turns (the MCTS tree and the board
//! it is anchored at) and runs the configured strategy once per turn.

use std::time::Duration;

use isolation_core::{Agent, Board, SearchResult};
use mcts_engine::{run_iterations, SearchTree};
use minimax_engine::MinimaxEngine;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, trace, warn};

use crate::config::{AgentConfig, ConfigError};

/// Moves played before the game leaves its opening. Until then no tree is
/// carried over.
pub const OPENING_MOVES: u32 = 4;

/// Tree kept between turns, rooted at `anchor`.
#[derive(Debug, Clone)]
struct Reused {
    tree: SearchTree,
    anchor: Board,
}

/// Agent that answers every turn with the configured strategy.
pub struct TurnController {
    config: AgentConfig,
    rng: StdRng,
    /// Present only between MCTS turns.
    reused: Option<Reused>,
    /// Built once for the minimax family of strategies.
    minimax: Option<MinimaxEngine>,
}

impl TurnController {
    /// Validate `config` and build a controller from it.
    pub fn try_new(config: AgentConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(config))
    }

    /// Build a controller from a config that is already known to be valid,
    /// such as one from [`AgentConfig::load`]. Use [`TurnController::try_new`]
    /// for configs assembled with the builders.
    pub fn new(config: AgentConfig) -> Self {
        let rng = match config.mcts.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let minimax = config
            .strategy
            .search_method()
            .map(|method| MinimaxEngine::new(method, config.minimax.clone(), config.time_threshold()));

        Self {
            config,
            rng,
            reused: None,
            minimax,
        }
    }

    pub fn config(&self) -> &AgentConfig {
        &self.config
    }

    /// Tree carried over from the previous turn, if any.
    pub fn tree(&self) -> Option<&SearchTree> {
        self.reused.as_ref().map(|r| &r.tree)
    }

    /// Board the carried tree is rooted at.
    pub fn anchor(&self) -> Option<&Board> {
        self.reused.as_ref().map(|r| &r.anchor)
    }

    /// Tree rooted at `board`: the previous one rebased onto the
    /// opponent's reply when possible, a fresh one otherwise.
    fn tree_for(&mut self, board: &Board) -> SearchTree {
        let previous = self.reused.take();
        if board.move_count() < OPENING_MOVES {
            return SearchTree::new();
        }
        let Some(Reused { mut tree, anchor }) = previous else {
            return SearchTree::new();
        };

        let me = board.active_player();
        let Some(reply) = board.player_location(board.opponent(me)) else {
            warn!("opponent has no location after the opening, starting a fresh tree");
            return SearchTree::new();
        };

        if tree.advance(reply).is_none() {
            warn!(%reply, "opponent move not in tree, starting a fresh tree");
            return SearchTree::new();
        }
        if anchor.forecast_move(reply) != *board {
            warn!(%reply, "rebased tree does not match the board, starting a fresh tree");
            return SearchTree::new();
        }

        debug!(%reply, nodes = tree.len(), root_visits = tree[tree.root()].visits, "reusing tree");
        tree
    }

    fn search_mcts(&mut self, board: &Board, time_left: &dyn Fn() -> Duration) -> SearchResult {
        let mut tree = self.tree_for(board);
        tree.expand(tree.root(), board);
        if !tree[tree.root()].is_expanded() {
            return SearchResult::no_move();
        }

        let report = run_iterations(
            &mut tree,
            board,
            &self.config.mcts,
            &mut self.rng,
            time_left,
            self.config.time_threshold(),
        );

        let Some(best) = tree.best_child(self.config.mcts.final_move) else {
            return SearchResult::no_move();
        };
        let node = &tree[best];
        let (score, mv) = (node.mean_value(), node.mv);

        let stats = tree.stats();
        debug!(
            iterations = report.iterations,
            nodes = stats.nodes,
            max_depth = stats.max_depth,
            root_visits = stats.root_visits,
            score,
            best = ?mv,
            "mcts search finished"
        );

        if let Some(mv) = mv {
            if tree.advance(mv).is_some() {
                self.reused = Some(Reused {
                    tree,
                    anchor: board.forecast_move(mv),
                });
            }
        }

        SearchResult {
            best_move: mv,
            score,
            depth: stats.max_depth.min(u8::MAX as usize) as u8,
            nodes: report.iterations,
            stopped: report.stopped,
        }
    }
}

impl Agent for TurnController {
    fn search(&mut self, board: &Board, time_left: &dyn Fn() -> Duration) -> SearchResult {
        trace!(strategy = ?self.config.strategy, move_count = board.move_count(), "turn started");
        match self.minimax.as_mut() {
            Some(engine) => engine.search(board, time_left),
            None => self.search_mcts(board, time_left),
        }
    }

    fn name(&self) -> &str {
        match self.minimax.as_ref() {
            Some(engine) => engine.name(),
            None => "MCTS",
        }
    }

    fn new_game(&mut self) {
        self.reused = None;
        if let Some(engine) = self.minimax.as_mut() {
            engine.new_game();
        }
    }
}

#[cfg(test)]
#[path = "controller_tests.rs"]
mod controller_tests;
