//! Sliding-gravity tilt puzzle.
//!
//! A square board holds green and blue markers, static blockers, and a single
//! hole. Tilting the board slides every marker as far as it can go in one
//! direction. Green markers that reach the hole drop out of the board; a blue
//! marker reaching the hole makes the whole tilt illegal. The puzzle is solved
//! once no green markers remain.

use std::fmt;
use std::str::FromStr;

use crate::configuration::Configuration;
use crate::error::{ParseError, Result};
use crate::solver::solve;

/// Contents of one board square.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Cell {
    Empty,
    Green,
    Blue,
    Blocker,
    Hole,
}

impl Cell {
    fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '.' => Some(Cell::Empty),
            'G' => Some(Cell::Green),
            'B' => Some(Cell::Blue),
            '*' => Some(Cell::Blocker),
            'O' => Some(Cell::Hole),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Green => 'G',
            Cell::Blue => 'B',
            Cell::Blocker => '*',
            Cell::Hole => 'O',
        }
    }

    fn is_marker(self) -> bool {
        matches!(self, Cell::Green | Cell::Blue)
    }
}

/// A tilt direction.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// Neighbor order used by the solver.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    /// Row and column step for one square of movement.
    fn delta(self) -> (isize, isize) {
        match self {
            Direction::North => (-1, 0),
            Direction::South => (1, 0),
            Direction::East => (0, 1),
            Direction::West => (0, -1),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::North => "north",
            Direction::South => "south",
            Direction::East => "east",
            Direction::West => "west",
        };
        f.write_str(name)
    }
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "n" | "north" => Ok(Direction::North),
            "s" | "south" => Ok(Direction::South),
            "e" | "east" => Ok(Direction::East),
            "w" | "west" => Ok(Direction::West),
            other => Err(format!("unknown direction {other:?}")),
        }
    }
}

/// A square tilt board, stored row-major.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct TiltConfig {
    dim: usize,
    cells: Vec<Cell>,
}

impl TiltConfig {
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Returns the cell at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if either coordinate is outside the board.
    pub fn cell(&self, row: usize, col: usize) -> Cell {
        assert!(row < self.dim && col < self.dim, "({row}, {col}) is off the board");
        self.cells[row * self.dim + col]
    }

    pub fn green_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell == Cell::Green).count()
    }

    /// Tilts the board, returning `None` if a blue marker would drop into the hole.
    ///
    /// The result may equal `self` when nothing can move.
    pub fn tilt(&self, direction: Direction) -> Option<Self> {
        let mut cells = self.cells.clone();
        for (row, col) in self.leading_edge_order(direction) {
            if cells[row * self.dim + col].is_marker() {
                self.slide(&mut cells, row, col, direction)?;
            }
        }
        Some(Self {
            dim: self.dim,
            cells,
        })
    }

    /// Finds the first move of a shortest solution, if the board is solvable
    /// and not already solved.
    pub fn hint(&self) -> Option<Direction> {
        let solution = solve(self);
        let next = solution.path.get(1)?;
        Direction::ALL
            .into_iter()
            .zip(self.neighbors())
            .find(|(_, neighbor)| neighbor.as_ref() == Some(next))
            .map(|(direction, _)| direction)
    }

    /// Visits squares so that markers nearest the destination edge move first.
    fn leading_edge_order(&self, direction: Direction) -> Vec<(usize, usize)> {
        let dim = self.dim;
        let row_major = (0..dim).flat_map(|row| (0..dim).map(move |col| (row, col)));
        let col_major = (0..dim).flat_map(|col| (0..dim).map(move |row| (row, col)));
        match direction {
            Direction::North => row_major.collect(),
            Direction::South => row_major.rev().collect(),
            Direction::West => col_major.collect(),
            Direction::East => col_major.rev().collect(),
        }
    }

    /// Slides the marker at `(row, col)` until it is stopped or drops out.
    ///
    /// Returns `None` if the marker is blue and reaches the hole.
    fn slide(
        &self,
        cells: &mut [Cell],
        row: usize,
        col: usize,
        direction: Direction,
    ) -> Option<()> {
        let (row_step, col_step) = direction.delta();
        let mut current = row * self.dim + col;
        let (mut row, mut col) = (row, col);
        let marker = cells[current];

        loop {
            let Some(next_row) = row.checked_add_signed(row_step).filter(|&r| r < self.dim) else {
                break;
            };
            let Some(next_col) = col.checked_add_signed(col_step).filter(|&c| c < self.dim) else {
                break;
            };
            let next = next_row * self.dim + next_col;

            match cells[next] {
                Cell::Empty => {
                    cells[next] = marker;
                    cells[current] = Cell::Empty;
                    current = next;
                    row = next_row;
                    col = next_col;
                }
                Cell::Hole if marker == Cell::Blue => return None,
                Cell::Hole => {
                    cells[current] = Cell::Empty;
                    break;
                }
                Cell::Green | Cell::Blue | Cell::Blocker => break,
            }
        }

        Some(())
    }
}

impl Configuration for TiltConfig {
    fn is_goal(&self) -> bool {
        !self.cells.contains(&Cell::Green)
    }

    /// One slot per direction in [`Direction::ALL`] order; tilts that are
    /// illegal or leave the board unchanged are `None`.
    fn neighbors(&self) -> Vec<Option<Self>> {
        Direction::ALL
            .into_iter()
            .map(|direction| self.tilt(direction).filter(|tilted| tilted != self))
            .collect()
    }
}

impl FromStr for TiltConfig {
    type Err = ParseError;

    /// Parses a dimension line followed by that many rows of space-separated symbols.
    fn from_str(s: &str) -> Result<Self> {
        let mut lines = s.lines().filter(|line| !line.trim().is_empty());
        let header = lines.next().ok_or(ParseError::Empty)?;
        let dim: usize = header
            .trim()
            .parse()
            .map_err(|_| ParseError::InvalidInteger {
                line: 1,
                token: header.trim().to_string(),
            })?;
        if dim == 0 || dim.checked_mul(dim).is_none() {
            return Err(ParseError::InvalidDimensions(format!(
                "{dim}x{dim} is not a usable board"
            )));
        }

        let mut cells = Vec::new();
        for row in 0..dim {
            let line = lines.next().ok_or(ParseError::MissingLine("board row"))?;
            let symbols: Vec<&str> = line.split_whitespace().collect();
            if symbols.len() != dim {
                return Err(ParseError::WrongLength {
                    line: row + 2,
                    expected: dim,
                    found: symbols.len(),
                });
            }
            for (col, token) in symbols.into_iter().enumerate() {
                let symbol = token.chars().next().unwrap_or(' ');
                let cell = Cell::from_symbol(symbol)
                    .filter(|_| token.len() == 1)
                    .ok_or(ParseError::UnknownSymbol { row, col, symbol })?;
                cells.push(cell);
            }
        }

        if let Some(extra) = lines.next() {
            return Err(ParseError::TrailingInput(extra.trim().to_string()));
        }

        let holes = cells.iter().filter(|&&cell| cell == Cell::Hole).count();
        if holes != 1 {
            return Err(ParseError::HoleCount(holes));
        }

        Ok(Self { dim, cells })
    }
}

impl fmt::Display for TiltConfig {
    /// Starts with a newline so the board lines up under a `Step n:` label.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.dim) {
            let symbols: Vec<String> = row.iter().map(|cell| cell.symbol().to_string()).collect();
            write!(f, "\n{}", symbols.join(" "))?;
        }
        Ok(())
    }
}
