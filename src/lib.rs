//! A word placement engine for crossword-style tile games in Rust.
//! <br>
//! This crate finds all legal placements of the tiles on a rack on a square board,
//! checks placements made by a player, scores them and picks a move for a difficulty level.
//! Words are looked up in a [`WordGraph`], a minimized letter graph that can be saved
//! to a compact binary snapshot. With the `rayon` feature (on by default) the search
//! runs one word length per thread.
//!
//! # How to use `wordplay_solver`
//! Build a [`WordGraph`] from a list of words or from a file with one word per line,
//! then create a [`Board`] and a [`Solver`]. By default the board is a standard 15x15
//! board with the english tile set; a custom bonus layout, tile set or [`Rules`] can be set.
//!
//! # Basic usage
//!  ```
//! use wordplay_solver::{Board, Difficulty, Execution, Rack, Solver, WordGraph};
//!
//! let graph = WordGraph::from_words(&["rust", "rest", "rusts"])?;
//! let solver = Solver::new(&graph);
//! let mut board = Board::default();
//! let rack: Rack = "rusta".parse()?;
//! let solutions = solver.solutions(&board, &rack, Execution::Parallel);
//! assert_eq!(solutions.len(), 8);
//! for solution in &solutions {
//!     println!("{}", solution);
//! }
//! let best = solver.solve(&solutions, Difficulty::Best)?.clone();
//! solver.play(&mut board, &best)?;
//! println!("{}", board);
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! # About implementation
//! The board keeps the runs of filled squares in a [`BoardState`]. From the runs the board
//! computes every [`Boundary`] where a word can be played. The solver groups the boundaries
//! by length, and finds the words for each boundary with [`WordGraph::anagrams_of`].
//! Every word is tried on the board in a [`Trial`], that is rolled back when it is dropped.
mod board;
mod error;
mod geometry;
mod grid;
mod rules;
mod solver;
mod tilebag;
mod tiles;
mod tileset;
mod wordgraph;

pub use board::{Board, Trial};
pub use error::{Error, PlayError};
pub use geometry::{BoardState, Boundary, Orientation, Position};
pub use grid::{Cell, Grid};
pub use rules::Rules;
pub use solver::{Difficulty, Execution, Solution, Solver, Word};
pub use tilebag::TileBag;
pub use tiles::{Rack, Tile};
pub use tileset::{Language, TileSet};
pub use wordgraph::WordGraph;
