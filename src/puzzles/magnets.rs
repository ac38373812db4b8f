//! Polarized-magnet placement puzzle.
//!
//! A rectangular board is tiled with two-cell magnets. Each magnet is either
//! blank (both halves neutral) or polarized (one positive half, one negative
//! half). Like poles may not touch orthogonally, and each row and column must
//! hold exactly the declared number of positive and negative poles, unless
//! that target is ignored.
//!
//! Configurations are filled one cell at a time, left to right and top to
//! bottom, so validity only needs checking around the newest cell.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::backtrack::Backtrack;
use crate::error::{parse_ints, ParseError, Result};

/// A per-row or per-column pole target; `None` means the count is unconstrained.
pub type Target = Option<usize>;

/// Target value used in puzzle files for an unconstrained row or column.
pub const IGNORED: i64 = -1;

/// Value written into one board cell.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Cell {
    Unassigned,
    Blank,
    Positive,
    Negative,
}

impl Cell {
    /// Values tried at each cell, in order.
    pub const CANDIDATES: [Cell; 3] = [Cell::Positive, Cell::Negative, Cell::Blank];

    pub fn symbol(self) -> char {
        match self {
            Cell::Unassigned => '.',
            Cell::Blank => 'X',
            Cell::Positive => '+',
            Cell::Negative => '-',
        }
    }

    /// The value the other half of the same magnet must hold.
    fn partner(self) -> Cell {
        match self {
            Cell::Positive => Cell::Negative,
            Cell::Negative => Cell::Positive,
            other => other,
        }
    }

    fn is_pole(self) -> bool {
        matches!(self, Cell::Positive | Cell::Negative)
    }
}

/// Which half of a magnet a cell is.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Pair {
    Left,
    Right,
    Top,
    Bottom,
}

impl Pair {
    fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'L' => Some(Pair::Left),
            'R' => Some(Pair::Right),
            'T' => Some(Pair::Top),
            'B' => Some(Pair::Bottom),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Pair::Left => 'L',
            Pair::Right => 'R',
            Pair::Top => 'T',
            Pair::Bottom => 'B',
        }
    }
}

/// Row and column pole targets.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Targets {
    pub positive_rows: Vec<Target>,
    pub negative_rows: Vec<Target>,
    pub positive_cols: Vec<Target>,
    pub negative_cols: Vec<Target>,
}

/// Problem data shared by every configuration of one search.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct MagnetsPuzzle {
    rows: usize,
    cols: usize,
    targets: Targets,
    pairs: Vec<Pair>,
}

impl MagnetsPuzzle {
    /// Builds a puzzle from targets and a row-major pair layout.
    ///
    /// Every `Left` must sit directly left of a `Right`, and every `Top`
    /// directly above a `Bottom`.
    pub fn new(rows: usize, cols: usize, targets: Targets, pairs: Vec<Pair>) -> Result<Self> {
        let cells = checked_area(rows, cols)?;
        // ordered as the lines of a puzzle file
        let lengths = [
            (targets.positive_rows.len(), rows),
            (targets.positive_cols.len(), cols),
            (targets.negative_rows.len(), rows),
            (targets.negative_cols.len(), cols),
            (pairs.len(), cells),
        ];
        for (line, (found, expected)) in lengths.into_iter().enumerate() {
            if found != expected {
                return Err(ParseError::WrongLength {
                    line: line + 2,
                    expected,
                    found,
                });
            }
        }

        let puzzle = Self {
            rows,
            cols,
            targets,
            pairs,
        };
        puzzle.check_pairs()?;
        Ok(puzzle)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn targets(&self) -> &Targets {
        &self.targets
    }

    pub fn pair(&self, row: usize, col: usize) -> Pair {
        self.pairs[row * self.cols + col]
    }

    /// Coordinates of the other half of the magnet covering `(row, col)`.
    fn partner_of(&self, row: usize, col: usize) -> Option<(usize, usize)> {
        let (partner_row, partner_col) = match self.pair(row, col) {
            Pair::Left => (row, col + 1),
            Pair::Right => (row, col.checked_sub(1)?),
            Pair::Top => (row + 1, col),
            Pair::Bottom => (row.checked_sub(1)?, col),
        };
        (partner_row < self.rows && partner_col < self.cols)
            .then_some((partner_row, partner_col))
    }

    fn check_pairs(&self) -> Result<()> {
        for row in 0..self.rows {
            for col in 0..self.cols {
                let pair = self.pair(row, col);
                let matched = self.partner_of(row, col).is_some_and(|(r, c)| {
                    let expected = match pair {
                        Pair::Left => Pair::Right,
                        Pair::Right => Pair::Left,
                        Pair::Top => Pair::Bottom,
                        Pair::Bottom => Pair::Top,
                    };
                    self.pair(r, c) == expected
                });
                if !matched {
                    return Err(ParseError::Unpaired {
                        row,
                        col,
                        symbol: pair.symbol(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Renders the pair layout, one row per line.
    pub fn format_pairs(&self) -> String {
        let mut output = String::new();
        for row in self.pairs.chunks(self.cols) {
            let symbols: Vec<String> = row.iter().map(|p| p.symbol().to_string()).collect();
            output.push_str(&symbols.join(" "));
            output.push('\n');
        }
        output
    }
}

/// Cell count of a `rows` by `cols` board, rejecting empty or oversized boards.
fn checked_area(rows: usize, cols: usize) -> Result<usize> {
    rows.checked_mul(cols)
        .filter(|&cells| cells > 0)
        .ok_or_else(|| {
            ParseError::InvalidDimensions(format!("{rows}x{cols} is not a usable board"))
        })
}

/// Converts a target line, treating [`IGNORED`] as unconstrained.
fn parse_targets(line: &str, line_number: usize) -> Result<Vec<Target>> {
    parse_ints(line, line_number)?
        .into_iter()
        .map(|value| match value {
            IGNORED => Ok(None),
            value => usize::try_from(value)
                .map(Some)
                .map_err(|_| ParseError::InvalidInteger {
                    line: line_number,
                    token: value.to_string(),
                }),
        })
        .collect()
}

impl FromStr for MagnetsPuzzle {
    type Err = ParseError;

    /// Parses the dimensions, the four target lines (positive rows, positive
    /// columns, negative rows, negative columns), then the pair layout.
    fn from_str(s: &str) -> Result<Self> {
        let mut lines = s.lines().filter(|line| !line.trim().is_empty());

        let header = lines.next().ok_or(ParseError::Empty)?;
        let dims = parse_ints(header, 1)?;
        let &[rows, cols] = dims.as_slice() else {
            return Err(ParseError::InvalidDimensions(header.trim().to_string()));
        };
        let (Ok(rows), Ok(cols)) = (usize::try_from(rows), usize::try_from(cols)) else {
            return Err(ParseError::InvalidDimensions(header.trim().to_string()));
        };
        checked_area(rows, cols)?;

        let mut next_targets = |what: &'static str, line_number: usize| -> Result<Vec<Target>> {
            let line = lines.next().ok_or(ParseError::MissingLine(what))?;
            parse_targets(line, line_number)
        };
        let positive_rows = next_targets("positive row targets", 2)?;
        let positive_cols = next_targets("positive column targets", 3)?;
        let negative_rows = next_targets("negative row targets", 4)?;
        let negative_cols = next_targets("negative column targets", 5)?;

        let mut pairs = Vec::new();
        for row in 0..rows {
            let line = lines.next().ok_or(ParseError::MissingLine("pair row"))?;
            let symbols: Vec<&str> = line.split_whitespace().collect();
            if symbols.len() != cols {
                return Err(ParseError::WrongLength {
                    line: row + 6,
                    expected: cols,
                    found: symbols.len(),
                });
            }
            for (col, token) in symbols.into_iter().enumerate() {
                let symbol = token.chars().next().unwrap_or(' ');
                let pair = Pair::from_symbol(symbol)
                    .filter(|_| token.len() == 1)
                    .ok_or(ParseError::UnknownSymbol { row, col, symbol })?;
                pairs.push(pair);
            }
        }

        if let Some(extra) = lines.next() {
            return Err(ParseError::TrailingInput(extra.trim().to_string()));
        }

        let targets = Targets {
            positive_rows,
            negative_rows,
            positive_cols,
            negative_cols,
        };
        Self::new(rows, cols, targets, pairs)
    }
}

/// Running positive and negative counts along one axis.
#[derive(Clone, PartialEq, Eq, Debug)]
struct Tally {
    positive: Vec<usize>,
    negative: Vec<usize>,
}

impl Tally {
    fn new(len: usize) -> Self {
        Self {
            positive: vec![0; len],
            negative: vec![0; len],
        }
    }

    fn record(&mut self, index: usize, value: Cell) {
        match value {
            Cell::Positive => self.positive[index] += 1,
            Cell::Negative => self.negative[index] += 1,
            Cell::Blank | Cell::Unassigned => {}
        }
    }

    fn within(&self, index: usize, positive: Target, negative: Target) -> bool {
        positive.map_or(true, |max| self.positive[index] <= max)
            && negative.map_or(true, |max| self.negative[index] <= max)
    }

    fn exactly(&self, positive: &[Target], negative: &[Target]) -> bool {
        let matches = |counts: &[usize], targets: &[Target]| {
            counts
                .iter()
                .zip(targets)
                .all(|(&count, target)| target.map_or(true, |t| count == t))
        };
        matches(&self.positive, positive) && matches(&self.negative, negative)
    }
}

/// A partially filled magnets board.
///
/// The cursor is the most recently written cell; `None` before the first.
#[derive(Clone, Debug)]
pub struct MagnetsConfig {
    puzzle: Arc<MagnetsPuzzle>,
    grid: Vec<Cell>,
    row_tally: Tally,
    col_tally: Tally,
    cursor: Option<usize>,
}

impl MagnetsConfig {
    /// Creates the empty board that starts a search.
    pub fn new(puzzle: MagnetsPuzzle) -> Self {
        Self::from_shared(Arc::new(puzzle))
    }

    pub fn from_shared(puzzle: Arc<MagnetsPuzzle>) -> Self {
        let cells = puzzle.rows * puzzle.cols;
        Self {
            grid: vec![Cell::Unassigned; cells],
            row_tally: Tally::new(puzzle.rows),
            col_tally: Tally::new(puzzle.cols),
            cursor: None,
            puzzle,
        }
    }

    pub fn puzzle(&self) -> &MagnetsPuzzle {
        &self.puzzle
    }

    pub fn rows(&self) -> usize {
        self.puzzle.rows
    }

    pub fn cols(&self) -> usize {
        self.puzzle.cols
    }

    pub fn pos_row_count(&self, row: usize) -> Target {
        self.puzzle.targets.positive_rows[row]
    }

    pub fn neg_row_count(&self, row: usize) -> Target {
        self.puzzle.targets.negative_rows[row]
    }

    pub fn pos_col_count(&self, col: usize) -> Target {
        self.puzzle.targets.positive_cols[col]
    }

    pub fn neg_col_count(&self, col: usize) -> Target {
        self.puzzle.targets.negative_cols[col]
    }

    pub fn pair(&self, row: usize, col: usize) -> Pair {
        self.puzzle.pair(row, col)
    }

    pub fn value(&self, row: usize, col: usize) -> Cell {
        self.grid[row * self.cols() + col]
    }

    /// Row and column of the most recently written cell.
    pub fn cursor(&self) -> Option<(usize, usize)> {
        self.cursor.map(|index| (index / self.cols(), index % self.cols()))
    }

    fn is_final(&self) -> bool {
        self.cursor == Some(self.grid.len() - 1)
    }

    /// Copies this board, advances the cursor, and writes `value` there.
    fn advance(&self, value: Cell) -> Self {
        let index = self.cursor.map_or(0, |cursor| cursor + 1);
        let (row, col) = (index / self.cols(), index % self.cols());

        let mut child = self.clone();
        child.grid[index] = value;
        child.row_tally.record(row, value);
        child.col_tally.record(col, value);
        child.cursor = Some(index);
        child
    }

    /// The newest cell must complete its magnet with the opposite pole, or
    /// with another blank. An unassigned partner is checked later.
    fn pairing_holds(&self, row: usize, col: usize, value: Cell) -> bool {
        let Some((partner_row, partner_col)) = self.puzzle.partner_of(row, col) else {
            return true;
        };
        match self.value(partner_row, partner_col) {
            Cell::Unassigned => true,
            partner => partner == value.partner(),
        }
    }

    /// Like poles may not touch the newest cell from above or from the left.
    fn no_like_neighbors(&self, row: usize, col: usize, value: Cell) -> bool {
        if !value.is_pole() {
            return true;
        }
        let above = row > 0 && self.value(row - 1, col) == value;
        let left = col > 0 && self.value(row, col - 1) == value;
        !above && !left
    }

    fn within_capacity(&self, row: usize, col: usize) -> bool {
        self.row_tally
            .within(row, self.pos_row_count(row), self.neg_row_count(row))
            && self
                .col_tally
                .within(col, self.pos_col_count(col), self.neg_col_count(col))
    }

    fn counts_complete(&self) -> bool {
        let targets = &self.puzzle.targets;
        self.row_tally
            .exactly(&targets.positive_rows, &targets.negative_rows)
            && self
                .col_tally
                .exactly(&targets.positive_cols, &targets.negative_cols)
    }
}

impl Backtrack for MagnetsConfig {
    fn is_valid(&self) -> bool {
        let Some((row, col)) = self.cursor() else {
            return true;
        };
        let value = self.value(row, col);

        self.pairing_holds(row, col, value)
            && self.no_like_neighbors(row, col, value)
            && self.within_capacity(row, col)
            && (!self.is_final() || self.counts_complete())
    }

    fn is_goal(&self) -> bool {
        self.is_final() && self.is_valid()
    }

    /// Positive, negative, then blank at the next cell.
    fn successors(&self) -> Vec<Self> {
        if self.is_final() {
            return Vec::new();
        }
        Cell::CANDIDATES
            .into_iter()
            .map(|value| self.advance(value))
            .collect()
    }
}

/// Formats a target, leaving ignored targets blank.
fn target_label(target: Target) -> String {
    target.map_or_else(|| " ".to_string(), |count| count.to_string())
}

impl fmt::Display for MagnetsConfig {
    /// Positive targets run along the top and left edges, negative targets
    /// along the bottom and right.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cols = self.cols();
        let border = format!("  {}", "-".repeat(2 * cols - 1));

        let top: Vec<String> = (0..cols).map(|c| target_label(self.pos_col_count(c))).collect();
        writeln!(f, "+ {}", top.join(" "))?;
        writeln!(f, "{border}")?;

        for row in 0..self.rows() {
            let cells: Vec<String> = (0..cols)
                .map(|col| self.value(row, col).symbol().to_string())
                .collect();
            writeln!(
                f,
                "{}|{}|{}",
                target_label(self.pos_row_count(row)),
                cells.join(" "),
                target_label(self.neg_row_count(row)),
            )?;
        }

        writeln!(f, "{border}")?;
        f.write_str("  ")?;
        for col in 0..cols {
            write!(f, "{} ", target_label(self.neg_col_count(col)))?;
        }
        writeln!(f, " -")
    }
}
