//! Find, validate, rank and play word placements.
mod aggregate;
mod search;

use crate::board::Board;
use crate::error::{Error, PlayError};
use crate::geometry::{Boundary, Orientation, Position};
use crate::tiles::{Rack, Tile};
use crate::wordgraph::WordGraph;
use aggregate::Aggregator;
use log::{debug, info};
#[cfg(feature = "rayon")]
use rayon::prelude::*;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::collections::BTreeMap;
use std::fmt;

/// A word on the board: its letters, first square and direction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Word {
    pub text: String,
    pub position: Position,
    pub orientation: Orientation,
}

impl Word {
    pub fn new(text: &str, position: Position, orientation: Orientation) -> Word {
        Word {
            text: String::from(text),
            position,
            orientation,
        }
    }

    /// Number of letters
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// The squares covered by the word
    pub fn boundary(&self) -> Boundary {
        let start = self.position.offset(self.orientation);
        Boundary::new(
            self.orientation,
            self.position.fixed(self.orientation),
            start,
            start + self.len().saturating_sub(1),
        )
    }

    pub fn positions(&self) -> impl Iterator<Item = Position> {
        self.boundary().positions()
    }

    fn on(board: &Board, boundary: &Boundary) -> Result<Word, PlayError> {
        Ok(Word::new(
            &board.letters(boundary)?,
            boundary.start_position(),
            boundary.orientation,
        ))
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} at {} {}", self.text, self.position, self.orientation)
    }
}

/// A legal placement with its score.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Solution {
    /// The main word, including tiles that were already on the board
    pub word: Word,
    pub score: u32,
    /// The new tiles, in order along the main word
    pub tiles: Vec<(Position, Tile)>,
    /// Words of two or more letters formed across the main word
    pub intersections: Vec<Word>,
}

impl Solution {
    /// Positions of the new tiles that are blanks
    pub fn blanks(&self) -> Vec<Position> {
        self.tiles
            .iter()
            .filter(|(_, tile)| tile.is_blank())
            .map(|&(pos, _)| pos)
            .collect()
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}: {} points", self.word, self.score)
    }
}

/// How strong a move [`solve`](Solver::solve) picks.
///
/// `Best` picks the highest score. The other settings pick the score nearest
/// to a fraction of the highest score.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Best,
    Fraction(f32),
}

impl Difficulty {
    /// The fraction of the best score to aim for, `None` for the best score.
    pub fn fraction(self) -> Option<f32> {
        match self {
            Difficulty::Easy => Some(0.25),
            Difficulty::Medium => Some(0.5),
            Difficulty::Hard => Some(0.75),
            Difficulty::Best => None,
            Difficulty::Fraction(f) if f < 1.0 => Some(f.max(0.0)),
            Difficulty::Fraction(_) => None,
        }
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Difficulty::Best
    }
}

/// Run the word lengths of a search one after another, or in parallel.
///
/// Without the `rayon` feature, `Parallel` runs serially.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Execution {
    Serial,
    Parallel,
}

impl Default for Execution {
    fn default() -> Self {
        Execution::Parallel
    }
}

/// Finds and checks word placements using the words of a [`WordGraph`].
///
/// The solver keeps no state between calls. The board is never changed, except by [`play`](Solver::play).
///
/// ## Examples
/// ```
/// use wordplay_solver::{Board, Difficulty, Execution, Rack, Solver, WordGraph};
///
/// let graph = WordGraph::from_words(&["act", "at", "cat"])?;
/// let solver = Solver::new(&graph);
/// let mut board = Board::default();
/// let rack: Rack = "tac".parse()?;
/// let solutions = solver.solutions(&board, &rack, Execution::Serial);
/// let best = solver.solve(&solutions, Difficulty::Best)?.clone();
/// assert_eq!(best.score, 10);
/// solver.play(&mut board, &best)?;
/// assert!(!board.is_first_play());
/// # Ok::<(), anyhow::Error>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Solver<'a> {
    graph: &'a WordGraph,
}

impl<'a> Solver<'a> {
    pub fn new(graph: &'a WordGraph) -> Solver<'a> {
        Solver { graph }
    }

    pub fn graph(&self) -> &'a WordGraph {
        self.graph
    }

    /// All legal placements of tiles from `rack` on `board`, sorted by descending score.
    ///
    /// Placements with the same score keep the order in which they were found:
    /// by word length, then by the order of the boundaries.
    pub fn solutions(&self, board: &Board, rack: &Rack, execution: Execution) -> Vec<Solution> {
        let mut result = Vec::new();
        self.solutions_with(board, rack, execution, |solutions| result = solutions);
        result
    }

    /// Find all legal placements like [`solutions`](Solver::solutions), and pass them to `done`.
    ///
    /// The search is split in one partition per word length. `done` is called exactly once,
    /// by the partition that completes last, before this function returns.
    pub fn solutions_with<F>(&self, board: &Board, rack: &Rack, execution: Execution, done: F)
    where
        F: FnOnce(Vec<Solution>) + Send,
    {
        let mut partitions: BTreeMap<usize, Vec<Boundary>> = BTreeMap::new();
        for boundary in board.all_playable_boundaries(rack.len()) {
            if boundary.len() > 1 {
                partitions.entry(boundary.len()).or_default().push(boundary);
            }
        }
        debug!(
            "rack \"{}\": {} word lengths to search",
            rack,
            partitions.len()
        );
        let partitions: Vec<(usize, Vec<Boundary>)> = partitions.into_iter().collect();
        let aggregator = Aggregator::new(partitions.len(), done);

        let scan = |index: usize, len: usize, boundaries: &[Boundary]| {
            let found = self.scan(board, rack, boundaries);
            debug!(
                "length {}: {} boundaries, {} solutions",
                len,
                boundaries.len(),
                found.len()
            );
            aggregator.complete(index, found);
        };
        match execution {
            #[cfg(feature = "rayon")]
            Execution::Parallel => partitions
                .par_iter()
                .enumerate()
                .for_each(|(index, (len, boundaries))| scan(index, *len, boundaries.as_slice())),
            _ => {
                for (index, (len, boundaries)) in partitions.iter().enumerate() {
                    scan(index, *len, boundaries.as_slice());
                }
            }
        }
    }

    /// Pick a solution from `solutions` for the `difficulty`.
    ///
    /// With a fraction, the solution whose score is nearest to that fraction of the best score
    /// is picked. On a tie the higher score wins. A single solution is always picked.
    /// ## Errors
    /// [`NoMoves`](PlayError::NoMoves) if `solutions` is empty.
    pub fn solve<'s>(
        &self,
        solutions: &'s [Solution],
        difficulty: Difficulty,
    ) -> Result<&'s Solution, PlayError> {
        let mut ranked: Vec<&Solution> = solutions.iter().collect();
        ranked.sort_by_key(|solution| Reverse(solution.score));
        let best = ranked.first().copied().ok_or(PlayError::NoMoves)?;
        let fraction = match difficulty.fraction() {
            Some(fraction) if ranked.len() > 1 => fraction,
            _ => return Ok(best),
        };
        let target = fraction * best.score as f32;
        let mut choice = best;
        let mut distance = f32::INFINITY;
        for solution in ranked {
            let d = (solution.score as f32 - target).abs();
            if d < distance {
                choice = solution;
                distance = d;
            }
        }
        Ok(choice)
    }

    /// Check if the letters `placed` form a legal move on `board`, and compute its score.
    /// The letters on the squares in `blanks` are blanks.
    ///
    /// The placed letters must be on one line. Together with the tiles on the board between
    /// and next to them they form the main word. A single letter can form a word in either
    /// direction.
    /// ## Errors
    /// - [`InsufficientTiles`](PlayError::InsufficientTiles) if nothing is placed, or less than
    ///   the minimum number of tiles for the first move.
    /// - [`InvalidArrangement`](PlayError::InvalidArrangement) if the letters are not on one line,
    ///   not on empty squares, or not `a` .. `z`.
    /// - [`UnfilledSquare`](PlayError::UnfilledSquare) if there is a gap in the main word.
    /// - [`NoCenterIntersection`](PlayError::NoCenterIntersection) or
    ///   [`NoIntersection`](PlayError::NoIntersection) if the word is not connected.
    /// - [`InvalidWord`](PlayError::InvalidWord) for the first word that is not in the word graph.
    /// ## Examples
    /// ```
    /// # use wordplay_solver::{Board, PlayError, Position, Solver, WordGraph};
    /// let graph = WordGraph::from_words(&["test"])?;
    /// let solver = Solver::new(&graph);
    /// let board = Board::default();
    /// let placed: Vec<(Position, char)> = "test"
    ///     .chars()
    ///     .enumerate()
    ///     .map(|(i, letter)| (Position::new(4 + i, 7), letter))
    ///     .collect();
    /// let solution = solver.validate(&board, &placed, &[])?;
    /// // the center square doubles the word
    /// assert_eq!(solution.score, 8);
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    pub fn validate(
        &self,
        board: &Board,
        placed: &[(Position, char)],
        blanks: &[Position],
    ) -> Result<Solution, PlayError> {
        if placed.is_empty()
            || (board.is_first_play() && placed.len() < board.rules().min_first_move_tiles)
        {
            return Err(PlayError::InsufficientTiles);
        }
        let tiles = placed_tiles(placed, blanks).map_err(|_| PlayError::InvalidArrangement)?;
        for (i, &(pos, _)) in tiles.iter().enumerate() {
            if !board.contains(pos) || board.is_filled(pos) || tiles[..i].iter().any(|&(p, _)| p == pos)
            {
                return Err(PlayError::InvalidArrangement);
            }
        }

        let first = tiles[0].0;
        let mut scratch = board.clone();
        if tiles.len() > 1 {
            let orientation = if tiles.iter().all(|(pos, _)| pos.y == first.y) {
                Orientation::Horizontal
            } else if tiles.iter().all(|(pos, _)| pos.x == first.x) {
                Orientation::Vertical
            } else {
                return Err(PlayError::InvalidArrangement);
            };
            return self.validate_along(&mut scratch, &tiles, orientation);
        }

        let mut errors = Vec::with_capacity(2);
        for &orientation in &single_tile_orientations(board, first) {
            match self.validate_along(&mut scratch, &tiles, orientation) {
                Ok(solution) => return Ok(solution),
                Err(err) => errors.push(err),
            }
        }
        match errors.first() {
            Some(err @ PlayError::InvalidWord(_))
                if errors.iter().all(|e| matches!(e, PlayError::InvalidWord(_))) =>
            {
                Err(err.clone())
            }
            _ => Err(PlayError::InvalidArrangement),
        }
    }

    /// Like [`validate`](Solver::validate), and check that the placed tiles are on the `rack`.
    /// ## Errors
    /// [`InsufficientTiles`](PlayError::InsufficientTiles) if a placed tile is not on the rack,
    /// or an error from [`validate`](Solver::validate).
    pub fn validate_rack(
        &self,
        board: &Board,
        rack: &Rack,
        placed: &[(Position, char)],
        blanks: &[Position],
    ) -> Result<Solution, PlayError> {
        let tiles = placed_tiles(placed, blanks).map_err(|_| PlayError::InvalidArrangement)?;
        let tiles: Vec<Tile> = tiles.into_iter().map(|(_, tile)| tile).collect();
        if !rack.clone().remove_tiles(&tiles) {
            return Err(PlayError::InsufficientTiles);
        }
        self.validate(board, placed, blanks)
    }

    /// Put the tiles of `solution` on the board, and return them.
    /// ## Errors
    /// If a tile is outside the board or on a filled square. The board is not changed then.
    pub fn play(&self, board: &mut Board, solution: &Solution) -> Result<Vec<Tile>, Error> {
        board.place_tiles(&solution.tiles)?;
        info!("played {}", solution);
        Ok(solution.tiles.iter().map(|&(_, tile)| tile).collect())
    }

    /// Validate `tiles` as a word along `orientation`.
    fn validate_along(
        &self,
        board: &mut Board,
        tiles: &[(Position, Tile)],
        orientation: Orientation,
    ) -> Result<Solution, PlayError> {
        let positions = tiles.iter().map(|&(pos, _)| pos);
        let first = positions.clone().min_by_key(|pos| pos.offset(orientation));
        let last = positions.max_by_key(|pos| pos.offset(orientation));
        let span = match (first, last) {
            (Some(first), Some(last)) => Boundary::between(orientation, first, last)
                .ok_or(PlayError::InvalidArrangement)?,
            _ => return Err(PlayError::InsufficientTiles),
        };

        // include the tiles directly before and after the placed tiles
        let start = span
            .before()
            .filter(|&pos| board.is_filled(pos))
            .map_or(span.start, |pos| board.run_through(pos, orientation).start);
        let after = span.after();
        let end = if board.is_filled(after) {
            board.run_through(after, orientation).end
        } else {
            span.end
        };
        let boundary = span.stretch(start, end);

        for pos in boundary.positions() {
            if !board.is_filled(pos) && !tiles.iter().any(|&(p, _)| p == pos) {
                return Err(PlayError::UnfilledSquare(pos));
            }
        }
        board.check_boundary(&boundary)?;
        let trial = board
            .trial(tiles)
            .map_err(|_| PlayError::InvalidArrangement)?;
        self.evaluate(&trial, &boundary, trial.placed())
    }

    /// Check the main word on `boundary` and the words across the `placed` tiles,
    /// and compute the score. The new tiles must be on the board.
    fn evaluate(
        &self,
        board: &Board,
        boundary: &Boundary,
        placed: &[Position],
    ) -> Result<Solution, PlayError> {
        let word = Word::on(board, boundary)?;
        if word.len() > 1 && !self.graph.lookup(&word.text) {
            return Err(PlayError::InvalidWord(word));
        }
        let across = boundary.orientation.other();
        let mut score = 0;
        let mut intersections = Vec::new();
        for &pos in placed {
            let run = board.run_through(pos, across);
            if run.len() < 2 {
                continue;
            }
            let cross = Word::on(board, &run)?;
            if !self.graph.lookup(&cross.text) {
                return Err(PlayError::InvalidWord(cross));
            }
            score += board.word_points(&run, &[pos]);
            intersections.push(cross);
        }
        // a single letter only scores by itself when it forms no other word
        if word.len() > 1 || intersections.is_empty() {
            score += board.word_points(boundary, placed);
        }
        if placed.len() == board.rules().rack_size {
            score += board.rules().bingo_bonus;
        }
        let tiles = placed
            .iter()
            .filter_map(|&pos| board.tile_at(pos).map(|tile| (pos, tile)))
            .collect();
        Ok(Solution {
            word,
            score,
            tiles,
            intersections,
        })
    }
}

/// The orientations to try for a single new tile at `pos`: the one with the longer run first.
fn single_tile_orientations(board: &Board, pos: Position) -> [Orientation; 2] {
    let mut orientations = Orientation::ALL;
    orientations.sort_by_key(|&o| Reverse(board.run_through(pos, o).len()));
    orientations
}

/// Convert placed letters to tiles, blanks for the positions in `blanks`.
fn placed_tiles(
    placed: &[(Position, char)],
    blanks: &[Position],
) -> Result<Vec<(Position, Tile)>, Error> {
    placed
        .iter()
        .map(|&(pos, letter)| {
            let tile = if blanks.contains(&pos) {
                Tile::assigned(letter)?
            } else {
                Tile::new(letter)?
            };
            Ok((pos, tile))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Rules;
    use std::collections::HashSet;

    type Result<T> = anyhow::Result<T>;

    const WORDS: &[&str] = &[
        "act", "at", "cat", "eat", "letters", "sat", "set", "ta", "tact", "tea", "test",
    ];

    fn graph() -> WordGraph {
        WordGraph::from_words(WORDS).unwrap()
    }

    fn along(word: &str, x: usize, y: usize, orientation: Orientation) -> Vec<(Position, char)> {
        Word::new(word, Position::new(x, y), orientation)
            .positions()
            .zip(word.chars())
            .collect()
    }

    fn solution(score: u32) -> Solution {
        Solution {
            word: Word::new("at", Position::new(7, 7), Orientation::Horizontal),
            score,
            tiles: Vec::new(),
            intersections: Vec::new(),
        }
    }

    #[test]
    fn test_score_on_center() -> Result<()> {
        let graph = graph();
        let solver = Solver::new(&graph);
        let board = Board::default();
        let placed = along("test", 4, 7, Orientation::Horizontal);
        let solution = solver.validate(&board, &placed, &[])?;
        assert_eq!(solution.score, 8);
        assert_eq!(solution.word, Word::new("test", Position::new(4, 7), Orientation::Horizontal));
        assert!(solution.intersections.is_empty());
        Ok(())
    }

    #[test]
    fn test_single_tile_first_play() -> Result<()> {
        let graph = graph();
        let solver = Solver::new(&graph);
        let board = Board::default();
        let res = solver.validate(&board, &[(Position::new(3, 3), 'a')], &[]);
        assert_eq!(res, Err(PlayError::InvalidArrangement));
        let solution = solver.validate(&board, &[(Position::new(7, 7), 'a')], &[])?;
        assert_eq!(solution.score, 2);
        Ok(())
    }

    #[test]
    fn test_min_first_move_tiles() -> Result<()> {
        let graph = graph();
        let solver = Solver::new(&graph);
        let rules = Rules {
            min_first_move_tiles: 2,
            ..Rules::default()
        };
        let mut board = Board::default().with_rules(rules);
        let res = solver.validate(&board, &[(Position::new(7, 7), 'a')], &[]);
        assert_eq!(res, Err(PlayError::InsufficientTiles));
        let placed = along("at", 7, 7, Orientation::Horizontal);
        assert_eq!(solver.validate(&board, &placed, &[])?.score, 4);
        // later moves may use a single tile
        board.place_word("at", 7, 7, true)?;
        let solution = solver.validate(&board, &[(Position::new(6, 7), 's')], &[]);
        assert_eq!(solution.map(|s| s.word.text), Ok(String::from("sat")));
        Ok(())
    }

    #[test]
    fn test_bingo() -> Result<()> {
        let graph = graph();
        let solver = Solver::new(&graph);
        let board = Board::default();
        let placed = along("letters", 1, 7, Orientation::Horizontal);
        let solution = solver.validate(&board, &placed, &[])?;
        // one t on a letter bonus, the s on the center square
        assert_eq!(solution.score, (7 + 1) * 2 + 50);
        Ok(())
    }

    #[test]
    fn test_validate_blanks() -> Result<()> {
        let graph = graph();
        let solver = Solver::new(&graph);
        let board = Board::default();
        let placed = along("cat", 7, 6, Orientation::Vertical);
        let solution = solver.validate(&board, &placed, &[Position::new(7, 6)])?;
        assert_eq!(solution.blanks(), vec![Position::new(7, 6)]);
        assert_eq!(solution.score, (0 + 1 + 1) * 2);
        Ok(())
    }

    #[test]
    fn test_validate_arrangement() -> Result<()> {
        let graph = graph();
        let solver = Solver::new(&graph);
        let board = Board::default().with_state_from_strings(&[
            "...............",
            "...............",
            "...............",
            "...............",
            "...............",
            "...............",
            "...............",
            "......cat......",
            "...............",
            "...............",
            "...............",
            "...............",
            "...............",
            "...............",
            "...............",
        ])?;
        let diagonal = [(Position::new(1, 1), 'a'), (Position::new(2, 2), 't')];
        assert_eq!(solver.validate(&board, &diagonal, &[]), Err(PlayError::InvalidArrangement));
        let filled = [(Position::new(6, 7), 'a')];
        assert_eq!(solver.validate(&board, &filled, &[]), Err(PlayError::InvalidArrangement));
        assert_eq!(solver.validate(&board, &[], &[]), Err(PlayError::InsufficientTiles));
        let gap = [(Position::new(1, 1), 'a'), (Position::new(3, 1), 't')];
        assert_eq!(
            solver.validate(&board, &gap, &[]),
            Err(PlayError::UnfilledSquare(Position::new(2, 1)))
        );
        let far = along("at", 1, 1, Orientation::Horizontal);
        assert_eq!(solver.validate(&board, &far, &[]), Err(PlayError::NoIntersection));
        let invalid = [(Position::new(7, 6), '!')];
        assert_eq!(solver.validate(&board, &invalid, &[]), Err(PlayError::InvalidArrangement));
        Ok(())
    }

    #[test]
    fn test_validate_along_one_line() -> Result<()> {
        let graph = graph();
        let solver = Solver::new(&graph);
        let mut board = Board::default();
        let tiles = [(Position::new(7, 7), Tile::new('a')?), (Position::new(8, 8), Tile::new('t')?)];
        let res = solver.validate_along(&mut board, &tiles, Orientation::Horizontal);
        assert_eq!(res, Err(PlayError::InvalidArrangement));
        let res = solver.validate_along(&mut board, &[], Orientation::Vertical);
        assert_eq!(res, Err(PlayError::InsufficientTiles));
        let tiles = [(Position::new(8, 7), Tile::new('t')?), (Position::new(7, 7), Tile::new('a')?)];
        let solution = solver.validate_along(&mut board, &tiles, Orientation::Horizontal)?;
        assert_eq!(solution.word, Word::new("at", Position::new(7, 7), Orientation::Horizontal));
        Ok(())
    }

    #[test]
    fn test_validate_words() -> Result<()> {
        let graph = graph();
        let solver = Solver::new(&graph);
        let mut board = Board::default();
        board.place_word("cat", 6, 7, true)?;

        // "ta" down from the t
        let solution = solver.validate(&board, &[(Position::new(8, 8), 'a')], &[])?;
        assert_eq!(solution.word, Word::new("ta", Position::new(8, 7), Orientation::Vertical));
        // the a is on a double letter square
        assert_eq!(solution.score, 1 + 2);

        // "cats" is not a word
        let res = solver.validate(&board, &[(Position::new(9, 7), 's')], &[]);
        assert_eq!(
            res,
            Err(PlayError::InvalidWord(Word::new("cats", Position::new(6, 7), Orientation::Horizontal)))
        );

        // "at" is a word, but it forms "aa" across
        let placed = along("at", 7, 6, Orientation::Horizontal);
        let res = solver.validate(&board, &placed, &[]);
        assert_eq!(
            res,
            Err(PlayError::InvalidWord(Word::new("aa", Position::new(7, 6), Orientation::Vertical)))
        );

        // "tact" down through the c
        let placed = [(Position::new(6, 5), 't'), (Position::new(6, 6), 'a'), (Position::new(6, 8), 't')];
        let solution = solver.validate(&board, &placed, &[])?;
        assert_eq!(solution.word.text, "tact");
        assert_eq!(solution.tiles.len(), 3);
        Ok(())
    }

    #[test]
    fn test_validate_rack() -> Result<()> {
        let graph = graph();
        let solver = Solver::new(&graph);
        let board = Board::default();
        let placed = along("cat", 6, 7, Orientation::Horizontal);
        let rack: Rack = "ct*".parse()?;
        assert_eq!(
            solver.validate_rack(&board, &rack, &placed, &[]),
            Err(PlayError::InsufficientTiles)
        );
        let solution = solver.validate_rack(&board, &rack, &placed, &[Position::new(7, 7)])?;
        assert_eq!(solution.blanks(), vec![Position::new(7, 7)]);
        Ok(())
    }

    #[test]
    fn test_solve() {
        let graph = graph();
        let solver = Solver::new(&graph);
        let solutions: Vec<Solution> = [10, 20, 30, 40].iter().map(|&s| solution(s)).collect();
        let pick = |difficulty| solver.solve(&solutions, difficulty).map(|s| s.score);
        assert_eq!(pick(Difficulty::Best), Ok(40));
        assert_eq!(pick(Difficulty::Fraction(0.5)), Ok(20));
        assert_eq!(pick(Difficulty::Medium), Ok(20));
        assert_eq!(pick(Difficulty::Easy), Ok(10));
        assert_eq!(pick(Difficulty::Hard), Ok(30));
        assert_eq!(pick(Difficulty::Fraction(2.0)), Ok(40));
        assert_eq!(pick(Difficulty::Fraction(0.0)), Ok(10));
        assert_eq!(solver.solve(&[], Difficulty::Best), Err(PlayError::NoMoves));
        let single = [solution(15)];
        assert_eq!(solver.solve(&single, Difficulty::Easy).map(|s| s.score), Ok(15));
    }

    #[test]
    fn test_solutions_first_play() -> Result<()> {
        let graph = graph();
        let solver = Solver::new(&graph);
        let board = Board::default();
        let rack: Rack = "cat".parse()?;
        let solutions = solver.solutions(&board, &rack, Execution::Serial);
        // "act" and "cat" at 3 places in each direction, "at" and "ta" at 2 places in each direction
        assert_eq!(solutions.len(), 12 + 8);
        assert_eq!(solutions[0].score, 10);
        assert!(solutions.windows(2).all(|w| w[0].score >= w[1].score));
        for solution in &solutions {
            assert!(solution.word.boundary().contains_position(Position::new(7, 7)));
        }
        Ok(())
    }

    #[test]
    fn test_solutions_with_blank() -> Result<()> {
        let graph = graph();
        let solver = Solver::new(&graph);
        let board = Board::default();
        let rack: Rack = "ca*".parse()?;
        let solutions = solver.solutions(&board, &rack, Execution::Serial);
        let cat: Vec<&Solution> = solutions.iter().filter(|s| s.word.text == "cat").collect();
        assert_eq!(cat.len(), 6);
        for solution in cat {
            assert_eq!(solution.blanks().len(), 1);
            assert_eq!(solution.score, (3 + 1) * 2);
        }
        Ok(())
    }

    #[test]
    fn test_serial_parallel() -> Result<()> {
        let graph = graph();
        let solver = Solver::new(&graph);
        let mut board = Board::default();
        board.place_word("test", 4, 7, true)?;
        board.place_word("ta", 7, 7, false)?;
        let rack: Rack = "aecst*".parse()?;
        let serial = solver.solutions(&board, &rack, Execution::Serial);
        let parallel = solver.solutions(&board, &rack, Execution::Parallel);
        assert!(!serial.is_empty());
        let serial_set: HashSet<&Solution> = serial.iter().collect();
        let parallel_set: HashSet<&Solution> = parallel.iter().collect();
        assert_eq!(serial_set, parallel_set);
        assert_eq!(serial.len(), parallel.len());
        assert_eq!(
            solver.solve(&serial, Difficulty::Best)?.score,
            solver.solve(&parallel, Difficulty::Best)?.score
        );
        for solution in &serial {
            let placed: Vec<(Position, char)> = solution
                .tiles
                .iter()
                .map(|&(pos, tile)| (pos, tile.letter()))
                .collect();
            assert_eq!(solver.validate(&board, &placed, &solution.blanks()).as_ref(), Ok(solution));
        }
        Ok(())
    }

    #[test]
    fn test_completion_handler() -> Result<()> {
        let graph = graph();
        let solver = Solver::new(&graph);
        let board = Board::default();
        let rack: Rack = "tea".parse()?;
        let mut calls = 0;
        let mut count = 0;
        solver.solutions_with(&board, &rack, Execution::Parallel, |solutions| {
            calls += 1;
            count = solutions.len();
        });
        assert_eq!(calls, 1);
        assert_eq!(count, solver.solutions(&board, &rack, Execution::Serial).len());

        let empty: Rack = "".parse()?;
        let mut calls = 0;
        solver.solutions_with(&board, &empty, Execution::Parallel, |solutions| {
            calls += 1;
            assert!(solutions.is_empty());
        });
        assert_eq!(calls, 1);
        Ok(())
    }

    #[test]
    fn test_play() -> Result<()> {
        let graph = graph();
        let solver = Solver::new(&graph);
        let mut board = Board::default();
        let rack: Rack = "tca".parse()?;
        let solutions = solver.solutions(&board, &rack, Execution::Serial);
        let best = solver.solve(&solutions, Difficulty::Best)?.clone();
        let tiles = solver.play(&mut board, &best)?;
        assert_eq!(tiles.len(), 3);
        assert_eq!(board.tiles().count(), 3);
        assert!(!board.is_first_play());
        assert!(matches!(solver.play(&mut board, &best), Err(Error::TileReplaceError { .. })));
        Ok(())
    }
}
