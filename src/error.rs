//! Errors raised while reading textual puzzle definitions.
//!
//! Searching never fails with an error: an unsolvable puzzle yields an empty
//! path or `None`. Only malformed input is reported through [`ParseError`].

use thiserror::Error;

/// Problems found while parsing a puzzle definition.
#[derive(Debug, Error)]
pub enum ParseError {
    /// Failed to read the definition from disk.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The input contained no lines at all.
    #[error("puzzle definition is empty")]
    Empty,

    /// A header or count line is missing.
    #[error("missing line: expected {0}")]
    MissingLine(&'static str),

    /// A token that should have been an integer was not.
    #[error("invalid integer {token:?} on line {line}")]
    InvalidInteger { line: usize, token: String },

    /// The declared dimensions are unusable.
    #[error("invalid dimensions: {0}")]
    InvalidDimensions(String),

    /// A row or list had the wrong number of entries.
    #[error("line {line}: expected {expected} entries, found {found}")]
    WrongLength {
        line: usize,
        expected: usize,
        found: usize,
    },

    /// A grid cell used a symbol outside the puzzle's alphabet.
    #[error("unknown symbol {symbol:?} at row {row}, column {col}")]
    UnknownSymbol { row: usize, col: usize, symbol: char },

    /// A pair cell has no matching partner next to it.
    #[error("unpaired {symbol:?} at row {row}, column {col}")]
    Unpaired { row: usize, col: usize, symbol: char },

    /// A tilt board must contain exactly one hole.
    #[error("board must contain exactly one hole, found {0}")]
    HoleCount(usize),

    /// Start and goal strings differ in length.
    #[error("start {start:?} and goal {goal:?} differ in length")]
    LengthMismatch { start: String, goal: String },

    /// A string contained a character outside `A..=Z` and the blank.
    #[error("character {0:?} is not in the alphabet")]
    InvalidCharacter(char),

    /// Non-blank lines followed the last declared row.
    #[error("unexpected trailing input {0:?}")]
    TrailingInput(String),

    /// A bucket set needs at least one bucket.
    #[error("at least one bucket capacity is required")]
    NoBuckets,
}

/// Result type alias for parsing operations.
pub type Result<T> = std::result::Result<T, ParseError>;

/// Parses a whitespace-separated line of integers.
pub(crate) fn parse_ints(line: &str, line_number: usize) -> Result<Vec<i64>> {
    line.split_whitespace()
        .map(|token| {
            token.parse::<i64>().map_err(|_| ParseError::InvalidInteger {
                line: line_number,
                token: token.to_string(),
            })
        })
        .collect()
}
