use crate::tiles::{Rack, Tile};
use crate::{Board, TileSet};
use log::debug;
use multiset::HashMultiSet;
use rand::{seq::SliceRandom, Rng};
use std::convert::From;
use std::ops::{Deref, Sub};

/// Keeps track of the tiles that have not been drawn.
///
/// Blanks are stored unassigned. Randomness always comes from the caller, so a seeded
/// generator gives reproducible draws.
#[derive(Debug, Clone)]
pub struct TileBag(HashMultiSet<Tile>);

impl Deref for TileBag {
    type Target = HashMultiSet<Tile>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Sub for TileBag {
    type Output = Self;
    fn sub(self, other: Self) -> Self::Output {
        Self(self.0 - other.0)
    }
}

impl Default for TileBag {
    fn default() -> Self {
        Self::new()
    }
}

impl TileBag {
    /// An empty bag
    pub fn new() -> Self {
        Self(HashMultiSet::new())
    }

    fn from_tileset(tileset: &TileSet) -> Self {
        let mut bag = HashMultiSet::new();
        for &(letter, count, _points) in tileset.iter() {
            if let (Ok(tile), true) = (Tile::new(letter), count > 0) {
                bag.insert_times(tile, count as usize);
            }
        }
        if tileset.blanks() > 0 {
            bag.insert_times(Tile::blank(), tileset.blanks() as usize);
        }
        Self(bag)
    }

    fn from_tiles<T: AsRef<[Tile]>>(tiles: T) -> TileBag {
        let mut bag = HashMultiSet::new();
        for &tile in tiles.as_ref() {
            bag.insert(tile.to_rack_tile());
        }
        Self(bag)
    }

    /// The tiles that are not on the `board` and not on the `rack`, given the full `tileset`.
    pub fn remaining(tileset: &TileSet, board: &Board, rack: &Rack) -> TileBag {
        let mut used: Vec<Tile> = board.tiles().map(|(_, tile)| tile).collect();
        used.extend(rack.iter().copied());
        TileBag::from(tileset) - TileBag::from(used)
    }

    /// All tiles in a fixed order, independent of the hashing of the bag.
    pub fn sorted(&self) -> Vec<Tile> {
        let mut tiles: Vec<Tile> = self.0.iter().copied().collect();
        tiles.sort_unstable_by_key(Tile::to_char);
        tiles
    }

    /// All tiles in random order.
    pub fn shuffled<R: Rng>(&self, rng: &mut R) -> Vec<Tile> {
        let mut tiles = self.sorted();
        tiles.shuffle(rng);
        tiles
    }

    /// Draw up to `n` random tiles from the bag.
    pub fn draw<R: Rng>(&mut self, n: usize, rng: &mut R) -> Vec<Tile> {
        let drawn: Vec<Tile> = self.shuffled(rng).into_iter().take(n).collect();
        for tile in &drawn {
            self.0.remove(tile);
        }
        debug!("drew {} tiles, {} left in bag", drawn.len(), self.0.len());
        drawn
    }

    /// Put tiles back in the bag, for example when a player exchanges tiles.
    pub fn put_back(&mut self, tiles: &[Tile]) {
        for tile in tiles {
            self.0.insert(tile.to_rack_tile());
        }
    }
}

impl<'a> From<&'a TileSet> for TileBag {
    fn from(tileset: &TileSet) -> Self {
        TileBag::from_tileset(tileset)
    }
}

impl<T> From<T> for TileBag
where
    T: AsRef<[Tile]>,
{
    fn from(tiles: T) -> Self {
        TileBag::from_tiles(tiles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Error, Language};
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_bag() {
        let tileset = TileSet::new(Language::EN);
        let bag = TileBag::from(&tileset);
        assert_eq!(bag.len(), 100);
        assert_eq!(bag.count_of(&Tile::blank()), 2);
    }

    #[test]
    fn test_draw_is_reproducible() {
        let tileset = TileSet::new(Language::EN);
        let mut bag1 = TileBag::from(&tileset);
        let mut bag2 = TileBag::from(&tileset);
        let drawn1 = bag1.draw(7, &mut StdRng::seed_from_u64(123));
        let drawn2 = bag2.draw(7, &mut StdRng::seed_from_u64(123));
        assert_eq!(drawn1, drawn2);
        assert_eq!(bag1.len(), 93);
        bag1.put_back(&drawn1);
        assert_eq!(bag1.len(), 100);
    }

    #[test]
    fn test_remaining() -> Result<(), Error> {
        let tileset = TileSet::new(Language::EN);
        let mut board = Board::default();
        board.place_word("qUiz", 7, 7, true)?;
        let rack: Rack = "abe*".parse()?;
        let remaining = TileBag::remaining(&tileset, &board, &rack);
        // the assigned blank on the board counts as a blank
        assert_eq!(remaining.count_of(&Tile::new('q')?), 0);
        assert_eq!(remaining.count_of(&Tile::blank()), 0);
        assert_eq!(remaining.count_of(&Tile::new('u')?), 4);
        assert_eq!(remaining.count_of(&Tile::new('e')?), 11);
        assert_eq!(remaining.len(), 92);
        Ok(())
    }
}
