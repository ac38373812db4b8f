//! Concrete puzzle families.
//!
//! `strings`, `water`, and `tilt` are solved by breadth-first search through
//! [`Configuration`](crate::configuration::Configuration); `magnets` is solved
//! by backtracking through [`Backtrack`](crate::backtrack::Backtrack).

pub mod magnets;
pub mod strings;
pub mod tilt;
pub mod water;
