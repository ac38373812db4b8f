//! Depth-first backtracking over incrementally built configurations.
//!
//! Each configuration writes one more decision than its parent. A child that
//! fails [`Backtrack::is_valid`] is pruned immediately and its subtree is
//! never generated.

use tracing::{debug, info};

/// A partial assignment that can be extended one decision at a time.
pub trait Backtrack: Sized {
    /// Checks only what the most recent decision could have broken.
    fn is_valid(&self) -> bool;

    /// Returns true for a complete assignment that satisfies every rule.
    fn is_goal(&self) -> bool;

    /// Children in the order they should be tried.
    fn successors(&self) -> Vec<Self>;
}

/// Counters gathered during one backtracking run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BacktrackStats {
    /// Configurations popped off the stack, including the initial one.
    pub examined: usize,
    /// Configurations rejected by the validity check.
    pub pruned: usize,
    pub solutions: usize,
}

/// Iterative depth-first driver for [`Backtrack`] configurations.
///
/// Uses an explicit stack instead of recursion so deep grids cannot overflow
/// the call stack.
#[derive(Debug, Default)]
pub struct Backtracker {
    stats: BacktrackStats,
}

impl Backtracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the first goal reached in successor order.
    pub fn solve<C: Backtrack>(&mut self, initial: C) -> Option<C> {
        self.solve_all(initial, Some(1)).into_iter().next()
    }

    /// Enumerates goals depth-first, stopping after `max_solutions` if given.
    pub fn solve_all<C: Backtrack>(&mut self, initial: C, max_solutions: Option<usize>) -> Vec<C> {
        self.stats = BacktrackStats::default();
        let mut solutions = Vec::new();

        if max_solutions == Some(0) {
            return solutions;
        }

        info!(event = "backtrack_start", max_solutions = ?max_solutions);

        let mut stack = vec![initial];
        while let Some(config) = stack.pop() {
            self.stats.examined += 1;

            if config.is_goal() {
                solutions.push(config);
                self.stats.solutions += 1;
                debug!(event = "solution_found", examined = self.stats.examined);

                if max_solutions.is_some_and(|max| solutions.len() >= max) {
                    break;
                }
                continue;
            }

            // pushed in reverse so the first successor is explored first
            for child in config.successors().into_iter().rev() {
                if child.is_valid() {
                    stack.push(child);
                } else {
                    self.stats.pruned += 1;
                }
            }
        }

        info!(
            event = "backtrack_end",
            examined = self.stats.examined,
            pruned = self.stats.pruned,
            solutions = self.stats.solutions,
        );

        solutions
    }

    /// Configurations examined by the last run.
    pub fn examined(&self) -> usize {
        self.stats.examined
    }

    pub fn stats(&self) -> BacktrackStats {
        self.stats
    }
}
