//! State-space puzzle search library.
//!
//! Provides two generic search engines and the puzzles that exercise them:
//! a breadth-first shortest-path [`solver`] over any [`Configuration`], and a
//! depth-first [`backtrack`] driver for incrementally validated assignments.

pub mod backtrack;
pub mod configuration;
pub mod error;
pub mod puzzles;
pub mod report;
pub mod solver;

pub use backtrack::{Backtrack, Backtracker};
pub use configuration::Configuration;
pub use error::{ParseError, Result};
pub use solver::{solve, SearchStats, Solution, Solver};

use puzzles::magnets::MagnetsConfig;
use puzzles::strings::StringConfig;
use puzzles::tilt::TiltConfig;
use puzzles::water::WaterConfig;
use report::format_list;

/// Trait that erases the concrete puzzle type for dynamic dispatch.
///
/// Lets a driver describe and solve any puzzle without knowing which search
/// engine it needs.
pub trait PuzzleOps {
    /// Summary of the puzzle as given, printed before solving.
    fn describe(&self) -> String;
    /// Runs the matching search engine and formats its result.
    fn solve(&self) -> String;
}

/// Shared [`PuzzleOps::solve`] for every breadth-first puzzle.
fn solve_shortest<C: Configuration>(start: &C) -> String {
    let mut solver = Solver::new();
    let path = solver.search(start);
    solver.report(&path)
}

impl PuzzleOps for StringConfig {
    fn describe(&self) -> String {
        format!("Start: {}, End: {}", self.content(), self.goal())
    }

    fn solve(&self) -> String {
        solve_shortest(self)
    }
}

impl PuzzleOps for WaterConfig {
    fn describe(&self) -> String {
        format!("Amount: {}, Buckets: {}", self.goal(), format_list(self.capacities()))
    }

    fn solve(&self) -> String {
        solve_shortest(self)
    }
}

impl PuzzleOps for TiltConfig {
    fn describe(&self) -> String {
        format!("Board:{}", self)
    }

    fn solve(&self) -> String {
        solve_shortest(self)
    }
}

impl PuzzleOps for MagnetsConfig {
    fn describe(&self) -> String {
        format!(
            "Rows: {}, Columns: {}\nPairs:\n{}Initial config:\n{}",
            self.rows(),
            self.cols(),
            self.puzzle().format_pairs(),
            self
        )
    }

    fn solve(&self) -> String {
        let mut backtracker = Backtracker::new();
        let solution = backtracker.solve(self.clone());
        let mut output = format!("Configs examined: {}\n", backtracker.examined());
        match solution {
            Some(solution) => {
                output.push_str("Solution:\n");
                output.push_str(&solution.to_string());
            }
            None => output.push_str("No solution!\n"),
        }
        output
    }
}
