use super::{Orientation, Position};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt;

/// A span of squares on one line of the board: the extent of a word, or of a candidate word.
///
/// `start` and `end` are offsets on the line `fixed`, both inclusive.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Boundary {
    pub orientation: Orientation,
    pub fixed: usize,
    pub start: usize,
    pub end: usize,
}

impl Boundary {
    /// Create a boundary. The offsets may be given in any order.
    pub fn new(orientation: Orientation, fixed: usize, start: usize, end: usize) -> Boundary {
        Boundary {
            orientation,
            fixed,
            start: start.min(end),
            end: start.max(end),
        }
    }

    /// The boundary from `start` to `end` along `orientation`.
    ///
    /// Returns `None` if the positions are not on the same line, or `end` comes before `start`.
    /// ## Example
    /// ```
    /// use wordplay_solver::{Boundary, Orientation, Position};
    /// let o = Orientation::Vertical;
    /// let b = Boundary::between(o, Position::new(3, 4), Position::new(3, 6));
    /// assert_eq!(b, Some(Boundary::new(o, 3, 4, 6)));
    /// assert_eq!(Boundary::between(o, Position::new(3, 6), Position::new(3, 4)), None);
    /// ```
    pub fn between(orientation: Orientation, start: Position, end: Position) -> Option<Boundary> {
        let fixed = start.fixed(orientation);
        if end.fixed(orientation) != fixed || start.offset(orientation) > end.offset(orientation) {
            return None;
        }
        Some(Boundary {
            orientation,
            fixed,
            start: start.offset(orientation),
            end: end.offset(orientation),
        })
    }

    /// A boundary of a single square
    pub fn at(orientation: Orientation, pos: Position) -> Boundary {
        let offset = pos.offset(orientation);
        Boundary::new(orientation, pos.fixed(orientation), offset, offset)
    }

    /// Number of squares in the boundary
    pub fn len(&self) -> usize {
        self.end - self.start + 1
    }

    /// A boundary always has at least one square.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The first square
    pub fn start_position(&self) -> Position {
        Position::from_line(self.orientation, self.fixed, self.start)
    }

    /// The last square
    pub fn end_position(&self) -> Position {
        Position::from_line(self.orientation, self.fixed, self.end)
    }

    /// The square in front of the boundary, if the boundary does not start at the edge.
    pub fn before(&self) -> Option<Position> {
        self.start_position().prev(self.orientation)
    }

    /// The square after the boundary. It can be outside the board.
    pub fn after(&self) -> Position {
        self.end_position().next(self.orientation)
    }

    /// All squares, from start to end
    pub fn positions(&self) -> impl Iterator<Item = Position> {
        let (orientation, fixed) = (self.orientation, self.fixed);
        (self.start..=self.end).map(move |offset| Position::from_line(orientation, fixed, offset))
    }

    /// The union with the offsets `start` ..= `end` on the same line.
    /// ## Example
    /// ```
    /// use wordplay_solver::{Boundary, Orientation};
    /// let b = Boundary::new(Orientation::Horizontal, 7, 4, 6);
    /// assert_eq!(b.stretch(2, 5), Boundary::new(Orientation::Horizontal, 7, 2, 6));
    /// assert_eq!(b.shrink(5, 9), Some(Boundary::new(Orientation::Horizontal, 7, 5, 6)));
    /// ```
    pub fn stretch(&self, start: usize, end: usize) -> Boundary {
        Boundary::new(
            self.orientation,
            self.fixed,
            self.start.min(start),
            self.end.max(end),
        )
    }

    /// The intersection with the offsets `start` ..= `end` on the same line,
    /// or `None` if they do not overlap.
    pub fn shrink(&self, start: usize, end: usize) -> Option<Boundary> {
        let (start, end) = (self.start.max(start), self.end.min(end));
        if start > end {
            return None;
        }
        Some(Boundary::new(self.orientation, self.fixed, start, end))
    }

    /// Check if `other` lies on the same line, within this boundary.
    pub fn contains(&self, other: &Boundary) -> bool {
        self.orientation == other.orientation
            && self.fixed == other.fixed
            && self.start <= other.start
            && self.end >= other.end
    }

    /// Check if `other` is perpendicular to this boundary and crosses it.
    pub fn intersects(&self, other: &Boundary) -> bool {
        self.orientation != other.orientation
            && (other.start..=other.end).contains(&self.fixed)
            && (self.start..=self.end).contains(&other.fixed)
    }

    /// Check if `pos` is one of the squares of the boundary
    pub fn contains_position(&self, pos: Position) -> bool {
        pos.fixed(self.orientation) == self.fixed
            && (self.start..=self.end).contains(&pos.offset(self.orientation))
    }
}

impl fmt::Display for Boundary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} {} .. {}",
            self.orientation,
            self.start_position(),
            self.end_position()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Orientation::{Horizontal, Vertical};

    #[test]
    fn test_contains() {
        let b = Boundary::new(Horizontal, 7, 3, 8);
        assert!(b.contains(&b));
        assert!(b.contains(&Boundary::new(Horizontal, 7, 4, 8)));
        assert!(!b.contains(&Boundary::new(Horizontal, 7, 2, 8)));
        assert!(!b.contains(&Boundary::new(Horizontal, 6, 3, 8)));
        assert!(!b.contains(&Boundary::new(Vertical, 7, 3, 8)));
        let other = Boundary::new(Horizontal, 8, 3, 8);
        assert!(!b.contains(&other) && !other.contains(&b));
    }

    #[test]
    fn test_between() {
        let (a, b) = (Position::new(2, 7), Position::new(5, 7));
        assert_eq!(Boundary::between(Horizontal, a, b), Some(Boundary::new(Horizontal, 7, 2, 5)));
        assert_eq!(Boundary::between(Horizontal, a, a), Some(Boundary::at(Horizontal, a)));
        // reversed
        assert_eq!(Boundary::between(Horizontal, b, a), None);
        // not on one line
        assert_eq!(Boundary::between(Horizontal, a, Position::new(5, 8)), None);
        assert_eq!(Boundary::between(Vertical, a, b), None);
    }

    #[test]
    fn test_intersects() {
        let b = Boundary::new(Horizontal, 7, 3, 8);
        assert!(b.intersects(&Boundary::new(Vertical, 5, 6, 9)));
        assert!(b.intersects(&Boundary::new(Vertical, 8, 7, 7)));
        assert!(!b.intersects(&Boundary::new(Vertical, 9, 6, 9)));
        assert!(!b.intersects(&Boundary::new(Vertical, 5, 0, 6)));
        assert!(!b.intersects(&b));
    }

    #[test]
    fn test_stretch_shrink() {
        let b = Boundary::new(Vertical, 2, 9, 5);
        assert_eq!((b.start, b.end, b.len()), (5, 9, 5));
        assert_eq!(b.stretch(7, 12), Boundary::new(Vertical, 2, 5, 12));
        assert_eq!(b.shrink(7, 12), Some(Boundary::new(Vertical, 2, 7, 9)));
        assert_eq!(b.shrink(10, 12), None);
        assert!(b.stretch(0, 14).contains(&b));
    }

    #[test]
    fn test_positions() {
        let b = Boundary::new(Vertical, 2, 5, 7);
        let positions: Vec<Position> = b.positions().collect();
        assert_eq!(
            positions,
            vec![Position::new(2, 5), Position::new(2, 6), Position::new(2, 7)]
        );
        assert_eq!(b.before(), Some(Position::new(2, 4)));
        assert_eq!(b.after(), Position::new(2, 8));
        assert!(b.contains_position(Position::new(2, 6)));
        assert!(!b.contains_position(Position::new(6, 2)));
        assert_eq!(Boundary::new(Horizontal, 0, 0, 3).before(), None);
    }
}
