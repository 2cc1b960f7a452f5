use crate::error::{Error, PlayError};
use crate::geometry::{BoardState, Boundary, Orientation, Position};
use crate::grid::{Cell, Grid};
use crate::rules::Rules;
use crate::tiles::{parse_square, Tile, BLANK, EMPTY};
use crate::tileset::{Language, TileSet};
use std::collections::{BTreeSet, HashSet};
use std::convert::TryFrom;
use std::fmt;
use std::ops::Deref;

/// Display the board state as one line per row.
/// Empty squares show as ".", blanks as uppercase letters.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let size = self.size();
        let repr = self
            .cells
            .chunks(size.max(1))
            .map(|row| {
                row.iter()
                    .map(|square| square.map_or(EMPTY, |tile| tile.to_char()))
                    .collect::<String>()
            })
            .collect::<Vec<String>>()
            .join("\n");
        write!(f, "{}", repr)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(Language::EN)
    }
}

/// The state of a game board:
/// * A grid of squares with possible letter/word bonus,
/// * The tiles on the board,
/// * The tile distribution for the language used (number of letters, and value of each letter),
/// * The rules of the game.
///
/// The filled runs of the board are cached in a [`BoardState`], which is rebuilt
/// whenever tiles are committed to the board.
#[derive(Debug, Clone)]
pub struct Board {
    grid: Grid,
    cells: Vec<Option<Tile>>,
    tileset: TileSet,
    rules: Rules,
    state: BoardState,
}

impl Board {
    /// Create a new empty board with the standard 15x15 grid.
    /// The [`language`](crate::Language) is used to specify the tile distribution used in the game.
    ///
    /// ## Examples
    ///```
    /// use wordplay_solver::{Board, Language};
    ///
    /// let board = Board::new(Language::EN);
    /// assert!(board.is_first_play());
    ///```
    /// Additional builder functions can be used to set the grid, state, tileset and rules of the board.
    /// See also:
    /// - [`with_grid_from_strings`](Board::with_grid_from_strings)
    /// - [`with_state_from_strings`](Board::with_state_from_strings)
    /// - [`with_tileset`](Board::with_tileset)
    /// - [`with_rules`](Board::with_rules)
    #[must_use]
    pub fn new(language: Language) -> Board {
        let grid = Grid::default();
        let size = grid.size();
        Board {
            grid,
            cells: vec![None; size * size],
            tileset: TileSet::new(language),
            rules: Rules::default(),
            state: BoardState::new(size, |_| false),
        }
    }

    /// Set the grid from its string representation, and return the modified board.
    /// If the size of the board changes, the board is cleared.
    /// ## Errors
    /// If the grid is not square or cannot be parsed as valid board cells.
    /// ## Examples
    /// ```
    /// # use wordplay_solver::{Board, Error};
    /// let board = Board::default().with_grid_from_strings(&[
    ///     "3w -- 3w",
    ///     "-- ss --",
    ///     "3w -- 3w",
    /// ])?;
    /// assert_eq!(board.size(), 3);
    /// # Ok::<(), Error>(())
    /// ```
    pub fn with_grid_from_strings<S: AsRef<str>>(mut self, grid: &[S]) -> Result<Board, Error> {
        self.set_grid_from_strings(grid)?;
        Ok(self)
    }

    /// Set the grid from its string representation.
    /// ## Errors
    /// If the grid is not square or cannot be parsed as valid board cells.
    pub fn set_grid_from_strings<S: AsRef<str>>(&mut self, grid: &[S]) -> Result<(), Error> {
        let grid = Grid::from_strings(grid)?;
        if grid.size() != self.size() {
            self.cells = vec![None; grid.size() * grid.size()];
        }
        self.grid = grid;
        self.update_state();
        Ok(())
    }

    /// Set the tiles on the board from a list of strings, and return the modified board.
    ///
    /// There must be one string per row, with one character per square:
    /// `.` or space for an empty square, lowercase for a regular tile,
    /// uppercase for a blank assigned to that letter.
    /// ## Errors
    /// If the list of strings has wrong dimensions or cannot be parsed as tiles.
    /// ## Examples
    /// ```
    /// # use wordplay_solver::{Board, Error, Position};
    /// let board = Board::default()
    ///     .with_grid_from_strings(&["-- -- --", "-- ss --", "-- -- --"])?
    ///     .with_state_from_strings(&["...", "aXe", "..."])?;
    /// assert!(board.tile_at(Position::new(1, 1)).map_or(false, |tile| tile.is_blank()));
    /// assert_eq!(board.to_string(), "...\naXe\n...");
    /// # Ok::<(), Error>(())
    /// ```
    pub fn with_state_from_strings<S: AsRef<str>>(mut self, rows: &[S]) -> Result<Board, Error> {
        self.set_state_from_strings(rows)?;
        Ok(self)
    }

    /// Set the tiles on the board from a list of strings.
    /// ## Errors
    /// If the list of strings has wrong dimensions or cannot be parsed as tiles.
    pub fn set_state_from_strings<S: AsRef<str>>(&mut self, rows: &[S]) -> Result<(), Error> {
        let size = self.size();
        if rows.len() != size {
            return Err(Error::InvalidRowCount(rows.len()));
        }
        let mut cells = Vec::with_capacity(size * size);
        for row in rows {
            let row = row.as_ref();
            let squares = row
                .chars()
                .map(parse_square)
                .collect::<Result<Vec<_>, Error>>()?;
            if squares.len() != size {
                return Err(Error::InvalidRowLength(String::from(row), squares.len()));
            }
            cells.extend(squares);
        }
        self.cells = cells;
        self.update_state();
        Ok(())
    }

    /// Use `tileset` for the points of the letters.
    #[must_use]
    pub fn with_tileset(mut self, tileset: TileSet) -> Board {
        self.tileset = tileset;
        self
    }

    #[must_use]
    pub fn with_rules(mut self, rules: Rules) -> Board {
        self.rules = rules;
        self
    }

    /// Number of squares in a row (and in a column)
    pub fn size(&self) -> usize {
        self.grid.size()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn tileset(&self) -> &TileSet {
        &self.tileset
    }

    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    /// The cached runs of the committed tiles.
    pub fn state(&self) -> &BoardState {
        &self.state
    }

    fn index(&self, pos: Position) -> Option<usize> {
        let size = self.size();
        if pos.x < size && pos.y < size {
            Some(pos.y * size + pos.x)
        } else {
            None
        }
    }

    /// Check if `pos` is on the board
    pub fn contains(&self, pos: Position) -> bool {
        self.index(pos).is_some()
    }

    /// Return the tile at `pos`, or `None` for an empty square or a position outside the board.
    pub fn tile_at(&self, pos: Position) -> Option<Tile> {
        self.index(pos).and_then(|i| self.cells[i])
    }

    pub fn is_filled(&self, pos: Position) -> bool {
        self.tile_at(pos).is_some()
    }

    /// The bonus square at `pos`
    pub fn cell(&self, pos: Position) -> Cell {
        self.grid.cell(pos)
    }

    pub fn is_center(&self, pos: Position) -> bool {
        self.grid.is_center(pos)
    }

    /// Check if no tiles are committed to the board yet.
    pub fn is_first_play(&self) -> bool {
        self.state.is_empty()
    }

    /// All squares of the board, row by row
    pub fn positions(&self) -> impl Iterator<Item = Position> {
        let size = self.size();
        (0..size * size).map(move |i| Position::new(i % size, i / size))
    }

    /// All tiles on the board with their position, row by row
    pub fn tiles(&self) -> impl Iterator<Item = (Position, Tile)> + '_ {
        self.positions()
            .zip(self.cells.iter())
            .filter_map(|(pos, square)| square.map(|tile| (pos, tile)))
    }

    fn update_state(&mut self) {
        let size = self.size();
        let cells = &self.cells;
        self.state = BoardState::new(size, |pos| cells[pos.y * size + pos.x].is_some());
    }

    /// Index of `pos` if a `tile` can be put there.
    fn free_index(&self, pos: Position, tile: Tile) -> Result<usize, Error> {
        if tile.is_unassigned() {
            return Err(Error::InvalidLetter(BLANK));
        }
        let index = self.index(pos).ok_or(Error::TilePlacementError {
            x: pos.x,
            y: pos.y,
            horizontal: true,
            len: 1,
        })?;
        if self.cells[index].is_some() {
            return Err(Error::TileReplaceError { x: pos.x, y: pos.y });
        }
        Ok(index)
    }

    /// Put `tiles` on the board for as long as the returned [`Trial`] lives.
    /// The tiles are removed again when the trial is dropped, unless it is committed.
    /// The cached state is not changed by a trial.
    /// ## Errors
    /// If a tile is outside the board, on a filled square, or an unassigned blank.
    /// The board is not changed in that case.
    /// ## Examples
    /// ```
    /// # use wordplay_solver::{Board, Error, Position, Tile};
    /// let mut board = Board::default();
    /// let pos = Position::new(7, 7);
    /// {
    ///     let trial = board.trial(&[(pos, Tile::new('a')?)])?;
    ///     assert!(trial.is_filled(pos));
    /// }
    /// assert!(!board.is_filled(pos));
    /// # Ok::<(), Error>(())
    /// ```
    pub fn trial(&mut self, tiles: &[(Position, Tile)]) -> Result<Trial<'_>, Error> {
        let mut trial = Trial {
            board: self,
            placed: Vec::with_capacity(tiles.len()),
        };
        for &(pos, tile) in tiles {
            let index = trial.board.free_index(pos, tile)?;
            trial.board.cells[index] = Some(tile);
            trial.placed.push(pos);
        }
        Ok(trial)
    }

    /// Commit `tiles` to the board.
    /// ## Errors
    /// If a tile can not be placed. The board is not changed in that case.
    pub fn place_tiles(&mut self, tiles: &[(Position, Tile)]) -> Result<(), Error> {
        self.trial(tiles)?.commit();
        Ok(())
    }

    /// Place `word` at `x`, `y` on the board in the given direction.
    /// Lowercase letters are regular tiles, uppercase letters are blanks.
    /// Returns the tiles that were added, in order. Letters of `word` that are already on the
    /// board are not included.
    /// ## Errors
    /// - If `word` contains other characters than letters.
    /// - If `word` does not fit on the board.
    /// - If a different letter is already on the board where `word` has a letter.
    /// ## Examples
    /// ```
    /// # use wordplay_solver::{Board, Error};
    /// let mut board = Board::default();
    /// let placed = board.place_word("zebra", 7, 7, true)?;
    /// assert_eq!(placed.len(), 5);
    /// let placed = board.place_word("raZor", 10, 7, false)?;
    /// assert_eq!(placed.len(), 4);
    /// # Ok::<(), Error>(())
    /// ```
    pub fn place_word(
        &mut self,
        word: &str,
        x: usize,
        y: usize,
        horizontal: bool,
    ) -> Result<Vec<Tile>, Error> {
        let orientation = Orientation::from(horizontal);
        let len = word.chars().count();
        let start = Position::new(x, y);
        let end = match start.offset(orientation).checked_add(len) {
            Some(end) if len > 0 && end <= self.size() && start.fixed(orientation) < self.size() => {
                end
            }
            _ => {
                return Err(Error::TilePlacementError {
                    x,
                    y,
                    horizontal,
                    len,
                })
            }
        };
        let boundary = Boundary::new(
            orientation,
            start.fixed(orientation),
            start.offset(orientation),
            end - 1,
        );
        let mut placed = Vec::new();
        for (pos, ch) in boundary.positions().zip(word.chars()) {
            let tile = Tile::try_from(ch)?;
            if tile.is_unassigned() {
                return Err(Error::EncodeInvalidToken(String::from(ch)));
            }
            match self.tile_at(pos) {
                None => placed.push((pos, tile)),
                Some(existing) if existing.letter() == tile.letter() => {}
                Some(_) => return Err(Error::TileReplaceError { x: pos.x, y: pos.y }),
            }
        }
        self.place_tiles(&placed)?;
        Ok(placed.into_iter().map(|(_, tile)| tile).collect())
    }

    /// The run of filled squares along `orientation` through `pos`,
    /// including tiles of a running trial.
    pub fn run_through(&self, pos: Position, orientation: Orientation) -> Boundary {
        let mut start = pos;
        while let Some(prev) = start.prev(orientation).filter(|&p| self.is_filled(p)) {
            start = prev;
        }
        let mut end = pos;
        while self.is_filled(end.next(orientation)) {
            end = end.next(orientation);
        }
        Boundary::new(
            orientation,
            pos.fixed(orientation),
            start.offset(orientation),
            end.offset(orientation),
        )
    }

    /// The letters on the squares of `boundary`.
    /// ## Errors
    /// [`UnfilledSquare`](PlayError::UnfilledSquare) for the first empty square.
    pub fn letters(&self, boundary: &Boundary) -> Result<String, PlayError> {
        boundary
            .positions()
            .map(|pos| {
                self.tile_at(pos)
                    .map(|tile| tile.letter())
                    .ok_or(PlayError::UnfilledSquare(pos))
            })
            .collect()
    }

    fn has_perpendicular_neighbor(&self, pos: Position, orientation: Orientation) -> bool {
        let across = orientation.other();
        pos.prev(across).map_or(false, |p| self.is_filled(p)) || self.is_filled(pos.next(across))
    }

    /// Check if new tiles on the empty squares of `boundary` would form a word of
    /// exactly that extent, connected to the board.
    /// ## Errors
    /// - [`InvalidArrangement`](PlayError::InvalidArrangement) if the boundary is not on the
    ///   board, has no empty square, or has a filled square directly before or after it.
    /// - [`NoCenterIntersection`](PlayError::NoCenterIntersection) if it is the first play
    ///   and the boundary does not cover a center square.
    /// - [`NoIntersection`](PlayError::NoIntersection) if it is not the first play and the
    ///   boundary does not contain or touch a tile on the board.
    pub fn check_boundary(&self, boundary: &Boundary) -> Result<(), PlayError> {
        let size = self.size();
        if boundary.fixed >= size || boundary.end >= size {
            return Err(PlayError::InvalidArrangement);
        }
        let before = boundary.before().map_or(false, |pos| self.is_filled(pos));
        if before || self.is_filled(boundary.after()) {
            return Err(PlayError::InvalidArrangement);
        }
        let mut empty = 0;
        let mut touches = false;
        for pos in boundary.positions() {
            if self.is_filled(pos) {
                touches = true;
            } else {
                empty += 1;
                touches = touches || self.has_perpendicular_neighbor(pos, boundary.orientation);
            }
        }
        if empty == 0 {
            return Err(PlayError::InvalidArrangement);
        }
        if self.is_first_play() {
            if !boundary.positions().any(|pos| self.is_center(pos)) {
                return Err(PlayError::NoCenterIntersection);
            }
        } else if !touches {
            return Err(PlayError::NoIntersection);
        }
        Ok(())
    }

    /// Returns true if a word can be placed on `boundary`, see [`check_boundary`](Board::check_boundary).
    pub fn is_valid_at(&self, boundary: &Boundary) -> bool {
        self.check_boundary(boundary).is_ok()
    }

    /// Extend `seed` in both directions over filled squares and at most `budget`
    /// empty squares on each side.
    fn reach(&self, seed: &Boundary, budget: usize) -> Boundary {
        let line = |offset| Position::from_line(seed.orientation, seed.fixed, offset);
        let mut start = seed.start;
        let mut empty = 0;
        while start > 0 {
            if !self.is_filled(line(start - 1)) {
                if empty == budget {
                    break;
                }
                empty += 1;
            }
            start -= 1;
        }
        let mut end = seed.end;
        let mut empty = 0;
        while end + 1 < self.size() {
            if !self.is_filled(line(end + 1)) {
                if empty == budget {
                    break;
                }
                empty += 1;
            }
            end += 1;
        }
        seed.stretch(start, end)
    }

    /// All boundaries where a word can be placed with at most `rack_size` new tiles.
    ///
    /// The boundaries are found from seeds: every run of tiles, and every empty square next to a
    /// perpendicular run. On an empty board the center squares are the seeds.
    /// Each seed is extended over the board, and every part of the extended span that is
    /// [valid](Board::is_valid_at) is a playable boundary.
    /// ## Examples
    /// ```
    /// # use wordplay_solver::Board;
    /// let board = Board::default();
    /// let boundaries = board.all_playable_boundaries(2);
    /// // 3 spans through the center square in each direction
    /// assert_eq!(boundaries.len(), 6);
    /// ```
    pub fn all_playable_boundaries(&self, rack_size: usize) -> BTreeSet<Boundary> {
        let mut seeds = Vec::new();
        let min_tiles = if self.is_first_play() {
            for center in self.grid.centers() {
                for &o in &Orientation::ALL {
                    seeds.push(Boundary::at(o, center));
                }
            }
            self.rules.min_first_move_tiles.max(1)
        } else {
            for &o in &Orientation::ALL {
                seeds.extend_from_slice(self.state.runs(o));
                // hooks
                seeds.extend(
                    self.positions()
                        .filter(|&pos| !self.is_filled(pos) && self.has_perpendicular_neighbor(pos, o))
                        .map(|pos| Boundary::at(o, pos)),
                );
            }
            1
        };

        let mut seen = HashSet::new();
        let mut boundaries = BTreeSet::new();
        for seed in seeds {
            let span = self.reach(&seed, rack_size);
            for start in span.start..=span.end {
                for end in start..=span.end {
                    let boundary = Boundary::new(span.orientation, span.fixed, start, end);
                    if !seen.insert(boundary) {
                        continue;
                    }
                    let empty = boundary
                        .positions()
                        .filter(|&pos| !self.is_filled(pos))
                        .count();
                    if empty >= min_tiles && empty <= rack_size && self.is_valid_at(&boundary) {
                        boundaries.insert(boundary);
                    }
                }
            }
        }
        boundaries
    }

    /// Points for the word on `boundary`, where the squares in `placed` have new tiles.
    ///
    /// A new tile gets the letter bonus of its square, and the word gets the word bonus.
    /// Tiles that were already on the board count with their face value. Blanks count 0.
    pub fn word_points(&self, boundary: &Boundary, placed: &[Position]) -> u32 {
        let mut word_multiplier = 1;
        let mut points = 0;
        for pos in boundary.positions() {
            let tile_points = self
                .tile_at(pos)
                .map_or(0, |tile| self.tileset.tile_points(tile));
            if placed.contains(&pos) {
                let cell = self.cell(pos);
                points += tile_points * cell.letter_multiplier();
                word_multiplier *= cell.word_multiplier();
            } else {
                points += tile_points;
            }
        }
        points * word_multiplier
    }
}

/// Tiles put on a [`Board`] on trial. They are taken off the board when the trial is dropped.
#[derive(Debug)]
pub struct Trial<'a> {
    board: &'a mut Board,
    placed: Vec<Position>,
}

impl<'a> Trial<'a> {
    /// The positions of the tiles on trial
    pub fn placed(&self) -> &[Position] {
        &self.placed
    }

    /// Keep the tiles on the board, and rebuild the board state.
    pub fn commit(mut self) {
        self.placed.clear();
        self.board.update_state();
    }
}

impl<'a> Deref for Trial<'a> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl<'a> Drop for Trial<'a> {
    fn drop(&mut self) {
        for &pos in &self.placed {
            if let Some(index) = self.board.index(pos) {
                self.board.cells[index] = None;
            }
        }
    }
}
