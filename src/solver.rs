//! Breadth-first shortest-path solver.
//!
//! Explores the implicit transition graph of any [`Configuration`] level by
//! level, recording the state that first discovered each visited state. The
//! first goal popped off the frontier is therefore reached by a path with the
//! fewest possible transitions.

use std::collections::VecDeque;

use rustc_hash::FxHashMap;
use tracing::{debug, info, trace};

use crate::configuration::Configuration;
use crate::report::format_path;

/// Counters gathered during one search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchStats {
    /// Every neighbor produced, duplicates included, plus the start state.
    pub total: usize,
    /// Distinct states inserted into the predecessor map, start included.
    pub unique: usize,
}

impl Default for SearchStats {
    fn default() -> Self {
        // the start state counts as one of each
        Self {
            total: 1,
            unique: 1,
        }
    }
}

/// Outcome of a breadth-first search.
#[derive(Debug, Clone)]
pub struct Solution<C> {
    /// States from start to goal inclusive; empty when no goal is reachable.
    pub path: Vec<C>,
    pub stats: SearchStats,
}

impl<C> Solution<C> {
    /// Returns true if a goal was reached.
    pub fn is_solved(&self) -> bool {
        !self.path.is_empty()
    }

    /// Number of transitions in the path, or `None` if unsolved.
    pub fn moves(&self) -> Option<usize> {
        self.path.len().checked_sub(1)
    }
}

/// Finds a shortest path from `start` to the first goal discovered.
///
/// Each call owns its frontier, predecessor map, and counters, so separate
/// searches never share state.
pub fn solve<C: Configuration>(start: &C) -> Solution<C> {
    let mut stats = SearchStats::default();
    let mut frontier: VecDeque<C> = VecDeque::new();
    let mut predecessors: FxHashMap<C, C> = FxHashMap::default();

    frontier.push_back(start.clone());
    // the start state is its own predecessor, marking the end of every path
    predecessors.insert(start.clone(), start.clone());

    info!(event = "search_start", start = %start);

    let mut goal = None;
    while let Some(current) = frontier.pop_front() {
        if current.is_goal() {
            debug!(event = "goal_found", goal = %current);
            goal = Some(current);
            break;
        }

        // absent neighbors are impossible moves and never enter the frontier
        for neighbor in current.neighbors().into_iter().flatten() {
            stats.total += 1;
            if !predecessors.contains_key(&neighbor) {
                predecessors.insert(neighbor.clone(), current.clone());
                frontier.push_back(neighbor);
                stats.unique += 1;
            }
        }

        trace!(event = "expand", frontier = frontier.len(), unique = stats.unique);
    }

    let path = match goal {
        Some(goal) => reconstruct_path(&predecessors, start, goal),
        None => Vec::new(),
    };

    info!(
        event = "search_end",
        solved = !path.is_empty(),
        path_len = path.len(),
        total = stats.total,
        unique = stats.unique,
    );

    Solution { path, stats }
}

/// Walks predecessor links from `goal` back to `start`.
///
/// Returns an empty path if the goal was never recorded.
fn reconstruct_path<C: Configuration>(
    predecessors: &FxHashMap<C, C>,
    start: &C,
    goal: C,
) -> Vec<C> {
    if !predecessors.contains_key(&goal) {
        return Vec::new();
    }

    let mut path = Vec::new();
    let mut current = goal;
    while current != *start {
        let Some(previous) = predecessors.get(&current) else {
            return Vec::new();
        };
        let previous = previous.clone();
        path.push(current);
        current = previous;
    }
    path.push(current);
    path.reverse();
    path
}

/// Stateful front for [`solve`] that keeps the counters of its last run.
///
/// The counters are replaced on every call to [`Solver::search`]; taking
/// `&mut self` keeps two searches from interleaving on one instance.
#[derive(Debug, Default)]
pub struct Solver {
    stats: SearchStats,
}

impl Solver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs a search and returns the path, empty if there is no solution.
    pub fn search<C: Configuration>(&mut self, start: &C) -> Vec<C> {
        let solution = solve(start);
        self.stats = solution.stats;
        solution.path
    }

    /// Total configurations generated by the last search.
    pub fn total_configs(&self) -> usize {
        self.stats.total
    }

    /// Unique configurations generated by the last search.
    pub fn unique_configs(&self) -> usize {
        self.stats.unique
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Formats `path` together with the counters of the last search.
    pub fn report<C: Configuration>(&self, path: &[C]) -> String {
        format_path(path, &self.stats)
    }
}

#[cfg(test)]
mod tests {
    use std::fmt;

    use super::*;

    /// A position on a bounded number line, stepping by one in either direction.
    #[derive(Clone, PartialEq, Eq, Hash, Debug)]
    struct Line {
        position: i32,
        target: i32,
        limit: i32,
    }

    impl Line {
        fn at(position: i32, target: i32) -> Self {
            Self {
                position,
                target,
                limit: 10,
            }
        }

        fn step(&self, delta: i32) -> Option<Self> {
            let position = self.position + delta;
            (0..=self.limit).contains(&position).then(|| Self {
                position,
                ..self.clone()
            })
        }
    }

    impl fmt::Display for Line {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{}", self.position)
        }
    }

    impl Configuration for Line {
        fn is_goal(&self) -> bool {
            self.position == self.target
        }

        fn neighbors(&self) -> Vec<Option<Self>> {
            vec![self.step(-1), self.step(1)]
        }
    }

    /// A state with no transitions at all.
    #[derive(Clone, PartialEq, Eq, Hash, Debug)]
    struct DeadEnd;

    impl fmt::Display for DeadEnd {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "dead end")
        }
    }

    impl Configuration for DeadEnd {
        fn is_goal(&self) -> bool {
            false
        }

        fn neighbors(&self) -> Vec<Option<Self>> {
            vec![None, None]
        }
    }

    #[test]
    fn test_start_that_is_goal_yields_single_state_path() {
        let solution = solve(&Line::at(4, 4));
        assert_eq!(solution.path, vec![Line::at(4, 4)]);
        assert_eq!(solution.moves(), Some(0));
        assert_eq!(solution.stats, SearchStats { total: 1, unique: 1 });
    }

    #[test]
    fn test_path_is_shortest() {
        let solution = solve(&Line::at(2, 6));
        let positions: Vec<i32> = solution.path.iter().map(|s| s.position).collect();
        assert_eq!(positions, vec![2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_counters_on_number_line() {
        // expanding 3 discovers 2 and 4; expanding 2 discovers 1 and revisits 3
        let solution = solve(&Line::at(3, 4));
        assert_eq!(solution.stats, SearchStats { total: 5, unique: 4 });
        assert!(solution.stats.total >= solution.stats.unique);
    }

    #[test]
    fn test_unreachable_goal_returns_empty_path() {
        let solution = solve(&Line::at(3, 42));
        assert!(!solution.is_solved());
        assert_eq!(solution.moves(), None);
        // every position 0..=10 is discovered exactly once
        assert_eq!(solution.stats.unique, 11);
    }

    #[test]
    fn test_absent_neighbors_are_not_counted() {
        let solution = solve(&DeadEnd);
        assert!(solution.path.is_empty());
        assert_eq!(solution.stats, SearchStats { total: 1, unique: 1 });
    }

    #[test]
    fn test_solver_keeps_counters_of_last_search() {
        let mut solver = Solver::new();
        let first = solver.search(&Line::at(3, 4));
        let first_stats = solver.stats();
        let second = solver.search(&Line::at(3, 4));

        assert_eq!(first, second);
        assert_eq!(solver.stats(), first_stats);
        assert_eq!(solver.total_configs(), 5);
        assert_eq!(solver.unique_configs(), 4);
    }
}
