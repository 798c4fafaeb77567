//! Turn clocks and the cooperative time check.
//!
//! Agents never see a clock object directly: they receive a zero-argument
//! `time_left` query and poll it against a fixed threshold. Whoever drives
//! the game decides what that query measures.

use std::time::{Duration, Instant};

use crate::error::SearchError;

/// Zero-argument query for the time remaining in the current turn.
pub type TimeLeft<'a> = &'a dyn Fn() -> Duration;

/// Poll `time_left` and abort once it drops below `threshold`.
///
/// Called at the top of every search frame and between rollout steps; the
/// error is propagated with `?` until the engine boundary catches it.
#[inline]
pub fn check_time(time_left: TimeLeft<'_>, threshold: Duration) -> Result<(), SearchError> {
    if time_left() < threshold {
        Err(SearchError::Aborted)
    } else {
        Ok(())
    }
}

/// Wall-clock budget for a single move.
#[derive(Debug, Clone, Copy)]
pub struct TurnClock {
    start: Instant,
    budget: Duration,
}

impl TurnClock {
    /// Start the clock now.
    pub fn start(budget: Duration) -> Self {
        Self {
            start: Instant::now(),
            budget,
        }
    }

    /// Get elapsed time since the turn started.
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Get remaining time, saturating at zero.
    pub fn remaining(&self) -> Duration {
        self.budget.saturating_sub(self.elapsed())
    }

    /// True once the full budget has been used.
    pub fn expired(&self) -> bool {
        self.elapsed() >= self.budget
    }

    pub fn budget(&self) -> Duration {
        self.budget
    }
}

#[cfg(test)]
#[path = "time_control_tests.rs"]
mod time_control_tests;
