//! Positions, word spans and the cached layout of filled runs on a board.
mod boundary;
mod state;

pub use boundary::Boundary;
pub use state::BoardState;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt;

/// Direction of a word on the board.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// Both orientations, horizontal first
    pub const ALL: [Orientation; 2] = [Orientation::Horizontal, Orientation::Vertical];

    /// The perpendicular orientation
    pub fn other(self) -> Orientation {
        match self {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        }
    }

    pub fn is_horizontal(self) -> bool {
        self == Orientation::Horizontal
    }
}

impl From<bool> for Orientation {
    /// `true` is horizontal
    fn from(horizontal: bool) -> Self {
        if horizontal {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Orientation::Horizontal => write!(f, "horizontal"),
            Orientation::Vertical => write!(f, "vertical"),
        }
    }
}

/// A square on the board, `x` is the column and `y` the row.
///
/// Along an orientation a position can also be given as a line and an offset on that line:
/// a horizontal line is a row (`fixed` is `y`, `offset` is `x`), a vertical line is a column.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    pub fn new(x: usize, y: usize) -> Position {
        Position { x, y }
    }

    /// Create a position from the line `fixed` and the `offset` on that line.
    /// ## Example
    /// ```
    /// use wordplay_solver::{Orientation, Position};
    /// let pos = Position::new(3, 9);
    /// let o = Orientation::Vertical;
    /// assert_eq!(Position::from_line(o, pos.fixed(o), pos.offset(o)), pos);
    /// ```
    pub fn from_line(orientation: Orientation, fixed: usize, offset: usize) -> Position {
        match orientation {
            Orientation::Horizontal => Position::new(offset, fixed),
            Orientation::Vertical => Position::new(fixed, offset),
        }
    }

    /// The line through this position along `orientation`
    pub fn fixed(self, orientation: Orientation) -> usize {
        match orientation {
            Orientation::Horizontal => self.y,
            Orientation::Vertical => self.x,
        }
    }

    /// The offset of this position on its line along `orientation`
    pub fn offset(self, orientation: Orientation) -> usize {
        match orientation {
            Orientation::Horizontal => self.x,
            Orientation::Vertical => self.y,
        }
    }

    /// The next position along `orientation`. It can be outside the board.
    pub fn next(self, orientation: Orientation) -> Position {
        Position::from_line(
            orientation,
            self.fixed(orientation),
            self.offset(orientation) + 1,
        )
    }

    /// The previous position along `orientation`, or `None` at the edge of the board.
    pub fn prev(self, orientation: Orientation) -> Option<Position> {
        let offset = self.offset(orientation).checked_sub(1)?;
        Some(Position::from_line(
            orientation,
            self.fixed(orientation),
            offset,
        ))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
