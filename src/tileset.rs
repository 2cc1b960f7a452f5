use crate::error::Error;
use crate::tiles::{is_letter, Tile};

/// These languages have a built in tile distribution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Language {
    /// English
    EN,
}

/// letter, count, points
pub type TileInfo = (char, u32, u32);

const EN: &[TileInfo] = &[
    ('a', 9, 1),
    ('b', 2, 3),
    ('c', 2, 3),
    ('d', 4, 2),
    ('e', 12, 1),
    ('f', 2, 4),
    ('g', 3, 2),
    ('h', 2, 4),
    ('i', 9, 1),
    ('j', 1, 8),
    ('k', 1, 5),
    ('l', 4, 1),
    ('m', 2, 3),
    ('n', 6, 1),
    ('o', 8, 1),
    ('p', 2, 3),
    ('q', 1, 10),
    ('r', 6, 1),
    ('s', 4, 1),
    ('t', 6, 1),
    ('u', 4, 1),
    ('v', 2, 4),
    ('w', 2, 4),
    ('x', 1, 8),
    ('y', 2, 4),
    ('z', 1, 10),
];

/// A tile distribution: the number of tiles for each letter, the points of each letter,
/// and the number of blanks.
#[derive(Debug, Clone, PartialEq)]
pub struct TileSet {
    tiles: Vec<TileInfo>,
    blanks: u32,
}

impl Default for TileSet {
    fn default() -> Self {
        TileSet::new(Language::EN)
    }
}

impl TileSet {
    /// Return a new `TileSet` for `language`.
    pub fn new(language: Language) -> TileSet {
        let tiles = match language {
            Language::EN => EN,
        };
        TileSet {
            tiles: tiles.to_vec(),
            blanks: 2,
        }
    }

    /// Return a tileset with the given (`letter`, `count`, `points`) entries and `blanks` blank tiles.
    /// ## Errors
    /// If a letter is not in `a` .. `z`.
    /// ## Example
    /// ```
    /// use wordplay_solver::TileSet;
    /// let tileset = TileSet::custom(&[('a', 4, 1), ('b', 2, 5)], 1)?;
    /// assert_eq!(tileset.points('b'), 5);
    /// assert_eq!(tileset.points('c'), 0);
    /// # Ok::<(), wordplay_solver::Error>(())
    /// ```
    pub fn custom(tiles: &[TileInfo], blanks: u32) -> Result<TileSet, Error> {
        if let Some(&(letter, _, _)) = tiles.iter().find(|(letter, _, _)| !is_letter(*letter)) {
            return Err(Error::InvalidLetter(letter));
        }
        Ok(TileSet {
            tiles: tiles.to_vec(),
            blanks,
        })
    }

    fn info(&self, letter: char) -> Option<&TileInfo> {
        self.tiles.iter().find(|(l, _, _)| *l == letter)
    }

    /// Return the points for `letter`, or 0 if not found
    pub fn points(&self, letter: char) -> u32 {
        self.info(letter).map_or(0, |&(_, _, points)| points)
    }

    /// Return the points for `tile`. Blanks are worth nothing.
    pub fn tile_points(&self, tile: Tile) -> u32 {
        if tile.is_blank() {
            0
        } else {
            self.points(tile.letter())
        }
    }

    /// Return the number of tiles with `letter` in tileset, or 0 if not found
    pub fn count(&self, letter: char) -> u32 {
        self.info(letter).map_or(0, |&(_, count, _)| count)
    }

    /// Return the number of blank tiles
    pub fn blanks(&self) -> u32 {
        self.blanks
    }

    /// Iterate over the (`letter`, `count`, `points`) entries
    pub fn iter(&self) -> impl Iterator<Item = &TileInfo> {
        self.tiles.iter()
    }
}
