use crate::error::Error;
use crate::geometry::Position;
use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

/// The dimension of the standard board: N x N squares
pub const N: usize = 15;
const Q: usize = 1 + N / 2;

const DEFAULT_QUARTER_BOARD: [&str; Q] = [
    "3w -- -- 2l -- -- -- 3w",
    "-- 2w -- -- -- 3l -- --",
    "-- -- 2w -- -- -- 2l --",
    "2l -- -- 2w -- -- -- 2l",
    "-- -- -- -- 2w -- -- --",
    "-- 3l -- -- -- 3l -- --",
    "-- -- 2l -- -- -- 2l --",
    "3w -- -- 2l -- -- -- 2s",
];

/// A square on the board grid.
///
/// A `Start` square is a center square: the first word must cover one of them.
/// It can carry a word bonus.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Cell {
    NoBonus,
    Start(u32),
    LetterBonus(u32),
    WordBonus(u32),
}

use Cell::{LetterBonus, NoBonus, Start, WordBonus};

impl Cell {
    /// Multiplier for the letter placed on this square
    pub fn letter_multiplier(self) -> u32 {
        match self {
            LetterBonus(n) => n,
            _ => 1,
        }
    }

    /// Multiplier for the word that places a letter on this square
    pub fn word_multiplier(self) -> u32 {
        match self {
            WordBonus(n) | Start(n) => n,
            _ => 1,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            NoBonus => write!(f, "--"),
            Start(1) => write!(f, "ss"),
            Start(n) => write!(f, "{}s", n),
            LetterBonus(n) => write!(f, "{}l", n),
            WordBonus(n) => write!(f, "{}w", n),
        }
    }
}

impl FromStr for Cell {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "--" {
            return Ok(NoBonus);
        }
        if s == "ss" {
            return Ok(Start(1));
        }
        let mut chars = s.chars();
        let n = chars.next().and_then(|ch| ch.to_digit(10));
        match (n, chars.next(), chars.next()) {
            (Some(n), Some('l'), None) if n > 1 => Ok(LetterBonus(n)),
            (Some(n), Some('w'), None) if n > 1 => Ok(WordBonus(n)),
            (Some(n), Some('s'), None) if n > 0 => Ok(Start(n)),
            _ => Err(Error::GridParseError(String::from(s))),
        }
    }
}

/// Board grid, consisting of size x size (normal or bonus) squares.
///
/// A bonus square has a letter bonus or a word bonus.
/// The `Start` squares (normally just the center square) must be used in the first turn.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid(Vec<Vec<Cell>>);

impl Deref for Grid {
    type Target = Vec<Vec<Cell>>;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_strings().join("\n"))
    }
}

impl Default for Grid {
    /// The standard grid: 15x15 squares with the center square at (7,7).
    /// ## Example
    /// ```
    /// # use wordplay_solver::{Grid, Position};
    /// let grid = Grid::default();
    /// assert!(grid.is_center(Position::new(7, 7)));
    /// println!("{}", grid);
    /// ```
    fn default() -> Self {
        Grid::expand_quarter_board(&DEFAULT_QUARTER_BOARD)
    }
}

impl Grid {
    /// Create a new grid of `size` x `size` cells with no bonus.
    pub fn empty(size: usize) -> Grid {
        Grid(vec![vec![NoBonus; size]; size])
    }

    /// Create a symmetrical board by mirroring a quarter board
    /// horizontally and vertically
    fn expand_quarter_board(qb: &[&str; Q]) -> Grid {
        let mut board = Grid::empty(N);
        for (i, row) in qb.iter().enumerate() {
            for (j, c) in row.split(' ').enumerate() {
                let val = c.parse().unwrap_or(NoBonus);
                board.0[i][j] = val;
                board.0[N - i - 1][j] = val;
                board.0[i][N - j - 1] = val;
                board.0[N - i - 1][N - j - 1] = val;
            }
        }
        board
    }

    /// Number of squares in a row (and in a column)
    pub fn size(&self) -> usize {
        self.0.len()
    }

    /// The square at `pos`. Positions outside the grid have no bonus.
    pub fn cell(&self, pos: Position) -> Cell {
        self.0
            .get(pos.y)
            .and_then(|row| row.get(pos.x))
            .copied()
            .unwrap_or(NoBonus)
    }

    /// Check if `pos` is a center square
    pub fn is_center(&self, pos: Position) -> bool {
        matches!(self.cell(pos), Start(_))
    }

    /// All center squares
    pub fn centers(&self) -> Vec<Position> {
        let mut centers = Vec::new();
        for (y, row) in self.0.iter().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                if let Start(_) = cell {
                    centers.push(Position::new(x, y));
                }
            }
        }
        centers
    }

    /// Get board cells as a vec of strings
    pub fn to_strings(&self) -> Vec<String> {
        self.iter()
            .map(|row| {
                row.iter()
                    .map(Cell::to_string)
                    .collect::<Vec<String>>()
                    .join(" ")
            })
            .collect::<Vec<_>>()
    }

    /// Create a `Grid` from strings.
    /// Parameter `grid` must have as many rows as each row has elements, the elements joined by spaces.
    ///
    /// ## Errors
    /// If `grid` is not square, or elements can not be parsed as a `Cell`.
    /// ## Examples
    /// ```
    /// # use wordplay_solver::{Grid, Error};
    /// let grid = Grid::from_strings(&[
    ///     "3w -- 3w",
    ///     "-- 2s --",
    ///     "3w -- 3l",
    /// ])?;
    /// assert_eq!(grid.size(), 3);
    /// assert_eq!(grid.centers().len(), 1);
    /// # Ok::<(), Error>(())
    /// ```
    pub fn from_strings<S: AsRef<str>>(grid: &[S]) -> Result<Grid, Error> {
        let size = grid.len();
        if size == 0 {
            return Err(Error::InvalidRowCount(0));
        }
        let mut board = Grid::empty(size);
        for (i, row) in grid.iter().enumerate() {
            let cells: Vec<&str> = row.as_ref().split_whitespace().collect();
            if cells.len() != size {
                return Err(Error::InvalidRowLength(
                    String::from(row.as_ref()),
                    cells.len(),
                ));
            }
            for (j, &cell) in cells.iter().enumerate() {
                board.0[i][j] = cell.parse()?;
            }
        }
        Ok(board)
    }
}
