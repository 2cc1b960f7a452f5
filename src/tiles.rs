//! Basic types for working with letter tiles.
//!
//! Tiles have a simple text representation that is used for racks and board states:
//! - `a` .. `z`: a regular tile
//! - `A` .. `Z`: a blank tile assigned to `a` .. `z`
//! - `*`: a blank tile that is not assigned yet
//! - `.` or ` `: no tile (empty square)
use crate::error::Error;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::convert::TryFrom;
use std::fmt;
use std::iter::FromIterator;
use std::ops::{Deref, DerefMut};
use std::str::FromStr;

/// Text representation of an unassigned blank tile
pub const BLANK: char = '*';

/// Text representation of an empty square
pub const EMPTY: char = '.';

/// Check if `letter` can be used in words: `a` .. `z`.
pub fn is_letter(letter: char) -> bool {
    letter.is_ascii_lowercase()
}

/// A tile on the rack or on the board.
///
/// Either a regular letter, or a blank. A blank on the rack has no letter yet,
/// a blank on the board is assigned to the letter it stands for.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Tile {
    letter: char,
    blank: bool,
}

impl Default for Tile {
    fn default() -> Self {
        Tile::blank()
    }
}

impl Tile {
    /// A regular tile for `letter`.
    /// ## Errors
    /// If `letter` is not in `a` .. `z`.
    pub fn new(letter: char) -> Result<Tile, Error> {
        if !is_letter(letter) {
            return Err(Error::InvalidLetter(letter));
        }
        Ok(Tile {
            letter,
            blank: false,
        })
    }

    /// An unassigned blank tile.
    pub fn blank() -> Tile {
        Tile {
            letter: BLANK,
            blank: true,
        }
    }

    /// A blank tile assigned to `letter`.
    /// ## Errors
    /// If `letter` is not in `a` .. `z`.
    /// ## Example
    /// ```
    /// use wordplay_solver::Tile;
    /// let tile = Tile::assigned('q')?;
    /// assert!(tile.is_blank());
    /// assert_eq!(tile.letter(), 'q');
    /// assert_eq!(tile.to_string(), "Q");
    /// # Ok::<(), wordplay_solver::Error>(())
    /// ```
    pub fn assigned(letter: char) -> Result<Tile, Error> {
        if !is_letter(letter) {
            return Err(Error::InvalidLetter(letter));
        }
        Ok(Tile {
            letter,
            blank: true,
        })
    }

    /// The letter of the tile, or [`BLANK`] for an unassigned blank.
    pub fn letter(&self) -> char {
        self.letter
    }

    /// Check if the tile is a blank (assigned or not).
    pub fn is_blank(&self) -> bool {
        self.blank
    }

    /// Check if the tile is a blank that does not stand for a letter yet.
    pub fn is_unassigned(&self) -> bool {
        self.letter == BLANK
    }

    /// Return the tile as it is on the rack: an assigned blank becomes unassigned again.
    pub fn to_rack_tile(self) -> Tile {
        if self.blank {
            Tile::blank()
        } else {
            self
        }
    }

    /// Text representation of the tile
    pub fn to_char(&self) -> char {
        match (self.blank, self.letter) {
            (true, BLANK) => BLANK,
            (true, letter) => letter.to_ascii_uppercase(),
            (false, letter) => letter,
        }
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

impl TryFrom<char> for Tile {
    type Error = Error;
    fn try_from(ch: char) -> Result<Self, Self::Error> {
        match ch {
            BLANK => Ok(Tile::blank()),
            'a'..='z' => Tile::new(ch),
            'A'..='Z' => Tile::assigned(ch.to_ascii_lowercase()),
            _ => Err(Error::EncodeInvalidToken(String::from(ch))),
        }
    }
}

/// Parse the contents of a square: `None` for an empty square.
pub(crate) fn parse_square(ch: char) -> Result<Option<Tile>, Error> {
    match ch {
        EMPTY | ' ' => Ok(None),
        BLANK => Err(Error::EncodeInvalidToken(String::from(ch))),
        _ => Tile::try_from(ch).map(Some),
    }
}

/// The tiles a player can use.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rack(Vec<Tile>);

impl Deref for Rack {
    type Target = Vec<Tile>;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for Rack {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl Rack {
    /// An empty rack
    pub fn new() -> Rack {
        Rack(Vec::new())
    }

    /// Number of blanks on the rack
    pub fn blanks(&self) -> usize {
        self.iter().filter(|tile| tile.is_blank()).count()
    }

    /// The letters of the regular tiles on the rack
    pub fn letters(&self) -> Vec<char> {
        self.iter()
            .filter(|tile| !tile.is_blank())
            .map(Tile::letter)
            .collect()
    }

    /// Remove the rack tiles used for `tiles`, as returned by [`play`](crate::Solver::play).
    /// Assigned blanks take a blank from the rack.
    /// Return false (leaving the rack unchanged) if a tile is not on the rack.
    pub fn remove_tiles(&mut self, tiles: &[Tile]) -> bool {
        let mut remaining = self.0.clone();
        for tile in tiles {
            let wanted = tile.to_rack_tile();
            match remaining.iter().position(|&t| t == wanted) {
                Some(i) => {
                    remaining.remove(i);
                }
                None => return false,
            }
        }
        self.0 = remaining;
        true
    }
}

impl FromIterator<Tile> for Rack {
    fn from_iter<I: IntoIterator<Item = Tile>>(iter: I) -> Self {
        Rack(iter.into_iter().collect())
    }
}

impl From<Vec<Tile>> for Rack {
    fn from(tiles: Vec<Tile>) -> Self {
        Rack(tiles)
    }
}

impl FromStr for Rack {
    type Err = Error;

    /// Parse a rack like `"rusta*"`. Uppercase letters are not allowed on a rack.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars()
            .map(|ch| match ch {
                BLANK | 'a'..='z' => Tile::try_from(ch),
                _ => Err(Error::EncodeInvalidToken(String::from(ch))),
            })
            .collect()
    }
}

impl fmt::Display for Rack {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s: String = self.iter().map(Tile::to_char).collect();
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tile_codec() -> Result<(), Error> {
        for &ch in &['a', 'z', 'A', 'Z', '*'] {
            let tile = Tile::try_from(ch)?;
            assert_eq!(tile.to_char(), ch);
        }
        assert!(Tile::try_from('A')?.is_blank());
        assert!(!Tile::try_from('a')?.is_blank());
        assert!(Tile::try_from('*')?.is_unassigned());
        Ok(())
    }

    #[test]
    #[should_panic(expected = "EncodeInvalidToken")]
    fn test_encode_error() {
        Tile::try_from('!').unwrap();
    }

    #[test]
    fn test_square() -> Result<(), Error> {
        assert_eq!(parse_square('.')?, None);
        assert_eq!(parse_square(' ')?, None);
        assert_eq!(parse_square('Q')?, Some(Tile::assigned('q')?));
        assert!(parse_square('*').is_err());
        Ok(())
    }

    #[test]
    fn test_rack() -> Result<(), Error> {
        let rack: Rack = "rus*ta*".parse()?;
        assert_eq!(rack.len(), 7);
        assert_eq!(rack.blanks(), 2);
        assert_eq!(rack.letters(), vec!['r', 'u', 's', 't', 'a']);
        assert_eq!(rack.to_string(), "rus*ta*");
        assert!("Rust".parse::<Rack>().is_err());
        Ok(())
    }

    #[test]
    fn test_remove_tiles() -> Result<(), Error> {
        let mut rack: Rack = "ab*".parse()?;
        assert!(!rack.remove_tiles(&[Tile::new('c')?]));
        assert_eq!(rack.len(), 3);
        assert!(rack.remove_tiles(&[Tile::new('a')?, Tile::assigned('c')?]));
        assert_eq!(rack.to_string(), "b");
        Ok(())
    }
}
