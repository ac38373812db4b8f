//! The capability set every shortest-path state exposes to the solver.

use std::fmt::Display;
use std::hash::Hash;

/// One immutable state of a shortest-path puzzle.
///
/// Equality and hashing must agree, since the solver tracks visited states
/// in a hash map. Any problem-wide parameters (goal, capacities) that take
/// part in equality must also take part in the hash.
pub trait Configuration: Clone + Eq + Hash + Display {
    /// Returns true if this state satisfies the puzzle's terminal condition.
    fn is_goal(&self) -> bool;

    /// Produces every state reachable by one transition.
    ///
    /// A `None` entry marks a move that is not possible from this state; the
    /// solver discards it before it reaches the frontier. Keeping the slot
    /// lets puzzles with positional moves (such as tilt directions) map a
    /// neighbor back to the move that produced it.
    fn neighbors(&self) -> Vec<Option<Self>>;
}
