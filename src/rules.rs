#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Game rules that affect move generation and scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rules {
    /// The number of tiles on a full rack.
    /// A word can not use more new tiles than this.
    pub rack_size: usize,
    /// Extra points when all `rack_size` tiles are played in one turn.
    pub bingo_bonus: u32,
    /// The minimum number of tiles for the first word on the board.
    pub min_first_move_tiles: usize,
}

impl Default for Rules {
    fn default() -> Self {
        Rules {
            rack_size: 7,
            bingo_bonus: 50,
            min_first_move_tiles: 1,
        }
    }
}
