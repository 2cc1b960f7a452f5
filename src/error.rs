use crate::{Position, Word};
use thiserror::Error;

#[derive(Error, Debug)]
/// Errors that can be returned while building or loading the lexicon, or setting up a board.
pub enum Error {
    /// Error reading a word file or lexicon snapshot
    #[error("File \"{path}\" could not be read")]
    ReadError {
        path: String,
        source: std::io::Error,
    },

    /// Error writing a lexicon snapshot
    #[error("File \"{path}\" could not be written")]
    WriteError {
        path: String,
        source: std::io::Error,
    },

    /// The lexicon snapshot is truncated or malformed
    #[error("Invalid lexicon snapshot: {0}")]
    SnapshotError(String),

    /// Attempt to insert a word after the graph was finalized
    #[error("Word graph is finalized")]
    GraphFinalized,

    /// Words must be inserted in ascending order
    #[error("Word \"{1}\" is inserted after \"{0}\"")]
    WordOrder(String, String),

    /// Only ascii letters can be used in the word graph and on the board
    #[error("Invalid letter '{0}'")]
    InvalidLetter(char),

    /// Token can not be encoded as a tile
    #[error("Encoder: invalid token '{0}'")]
    EncodeInvalidToken(String),

    /// Error parsing board state or grid from strings
    #[error("Invalid number of rows {0}")]
    InvalidRowCount(usize),

    /// Every row on the board must have the same number of cells as there are rows
    #[error("Invalid row \"{0}\": length {1}")]
    InvalidRowLength(String, usize),

    /// Error parsing bonus cell
    #[error("Invalid grid bonus cell: \"{0}\"")]
    GridParseError(String),

    /// Attempt to place (part of) a word outside the board
    #[error("Playing {len} tiles at x={x}, y={y} does not fit")]
    TilePlacementError {
        x: usize,
        y: usize,
        horizontal: bool,
        len: usize,
    },

    /// Attempt to replace a tile already on the board
    #[error("Attempt to replace tile at x:{x}, y:{y}")]
    TileReplaceError { x: usize, y: usize },
}

#[derive(Error, Debug, Clone, PartialEq)]
/// Reasons why a placement is rejected, or why no placement can be made.
pub enum PlayError {
    /// The placed tiles do not form a single line, or overlap existing tiles
    #[error("Invalid arrangement of tiles")]
    InvalidArrangement,

    /// The main word or one of the crossing words is not in the word graph
    #[error("Invalid word \"{}\"", .0.text)]
    InvalidWord(Word),

    /// The placed tiles do not touch any tile on the board
    #[error("Word does not connect to any word on the board")]
    NoIntersection,

    /// The first word on the board must cover a center square
    #[error("First word must cover the center square")]
    NoCenterIntersection,

    /// Not enough tiles were placed, or the tiles are not on the rack
    #[error("Insufficient tiles")]
    InsufficientTiles,

    /// The word spans a square without a tile
    #[error("Square at x:{}, y:{} is not filled", .0.x, .0.y)]
    UnfilledSquare(Position),

    /// The solver found no legal placement for the rack
    #[error("No moves")]
    NoMoves,
}
