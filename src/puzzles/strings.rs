//! Letter-rotation puzzle.
//!
//! Each move rotates one letter a single step through the cyclic alphabet
//! `A..=Z`. Blank positions never change.

use std::fmt;
use std::sync::Arc;

use crate::configuration::Configuration;
use crate::error::{ParseError, Result};

/// Character that no move may change.
pub const BLANK: char = ' ';

const FIRST: u8 = b'A';
const LAST: u8 = b'Z';

/// One string in the rotation puzzle, together with the shared goal.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct StringConfig {
    content: String,
    goal: Arc<str>,
}

impl StringConfig {
    /// Creates the start state for a search from `start` towards `goal`.
    pub fn new(start: &str, goal: &str) -> Result<Self> {
        if start.chars().count() != goal.chars().count() {
            return Err(ParseError::LengthMismatch {
                start: start.to_string(),
                goal: goal.to_string(),
            });
        }
        if let Some(bad) = start.chars().chain(goal.chars()).find(|&c| !is_symbol(c)) {
            return Err(ParseError::InvalidCharacter(bad));
        }

        Ok(Self {
            content: start.to_string(),
            goal: Arc::from(goal),
        })
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn goal(&self) -> &str {
        &self.goal
    }

    /// Copies this state with the letter at `index` rotated by one step.
    fn with_rotated(&self, index: usize, forward: bool) -> Self {
        let mut bytes = self.content.as_bytes().to_vec();
        bytes[index] = rotate(bytes[index], forward);
        Self {
            // only ASCII symbols pass validation, so any byte edit stays valid UTF-8
            content: bytes.into_iter().map(char::from).collect(),
            goal: Arc::clone(&self.goal),
        }
    }
}

fn is_symbol(c: char) -> bool {
    c == BLANK || c.is_ascii_uppercase()
}

/// Rotates an uppercase letter one step, wrapping at either end.
fn rotate(letter: u8, forward: bool) -> u8 {
    match (forward, letter) {
        (true, LAST) => FIRST,
        (true, _) => letter + 1,
        (false, FIRST) => LAST,
        (false, _) => letter - 1,
    }
}

impl Configuration for StringConfig {
    fn is_goal(&self) -> bool {
        *self.content == *self.goal
    }

    /// Two neighbors per non-blank position: one step back, then one forward.
    fn neighbors(&self) -> Vec<Option<Self>> {
        let mut neighbors = Vec::with_capacity(self.content.len() * 2);
        for (index, byte) in self.content.bytes().enumerate() {
            if char::from(byte) == BLANK {
                continue;
            }
            neighbors.push(Some(self.with_rotated(index, false)));
            neighbors.push(Some(self.with_rotated(index, true)));
        }
        neighbors
    }
}

impl fmt::Display for StringConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::{solve, SearchStats};

    fn contents(path: &[StringConfig]) -> Vec<&str> {
        path.iter().map(StringConfig::content).collect()
    }

    #[test]
    fn test_rotation_wraps_both_ways() {
        assert_eq!(rotate(b'Z', true), b'A');
        assert_eq!(rotate(b'A', false), b'Z');
        assert_eq!(rotate(b'M', true), b'N');
        assert_eq!(rotate(b'M', false), b'L');
    }

    #[test]
    fn test_two_neighbors_per_letter() {
        let config = StringConfig::new("ABC", "AAA").unwrap();
        let neighbors: Vec<String> = config
            .neighbors()
            .into_iter()
            .flatten()
            .map(|n| n.content().to_string())
            .collect();
        assert_eq!(neighbors, vec!["ZBC", "BBC", "AAC", "ACC", "ABB", "ABD"]);
    }

    #[test]
    fn test_blank_contributes_no_neighbors() {
        let config = StringConfig::new("A B", "A B").unwrap();
        assert_eq!(config.neighbors().len(), 4);
        assert!(config.neighbors().iter().flatten().all(|n| n.content().as_bytes()[1] == b' '));
    }

    #[test]
    fn test_adjacent_letter_path() {
        let solution = solve(&StringConfig::new("AA", "AB").unwrap());
        assert_eq!(contents(&solution.path), vec!["AA", "AB"]);
        assert_eq!(solution.stats, SearchStats { total: 17, unique: 12 });
    }

    #[test]
    fn test_wraparound_is_shorter() {
        let solution = solve(&StringConfig::new("A", "Y").unwrap());
        assert_eq!(contents(&solution.path), vec!["A", "Z", "Y"]);
    }

    #[test]
    fn test_equality_includes_goal() {
        let a = StringConfig::new("AB", "CD").unwrap();
        let b = StringConfig::new("AB", "EF").unwrap();
        assert_ne!(a, b);
        assert_eq!(a, StringConfig::new("AB", "CD").unwrap());
    }

    #[test]
    fn test_rejects_bad_input() {
        assert!(matches!(
            StringConfig::new("ABC", "AB"),
            Err(ParseError::LengthMismatch { .. })
        ));
        assert!(matches!(
            StringConfig::new("ab", "AB"),
            Err(ParseError::InvalidCharacter('a'))
        ));
    }

    #[test]
    fn test_repeated_search_is_deterministic() {
        let start = StringConfig::new("CAT", "DOG").unwrap();
        let first = solve(&start);
        let second = solve(&start.clone());
        assert_eq!(first.path, second.path);
        assert_eq!(first.stats, second.stats);
        // 1 + 12 + 13 rotations, each letter taking its shorter way round
        assert_eq!(first.moves(), Some(26));
        assert_eq!(first.path.last().map(StringConfig::content), Some("DOG"));
    }
}
