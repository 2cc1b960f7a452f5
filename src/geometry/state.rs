use super::{Boundary, Orientation, Position};

/// The filled runs of a board, in both orientations.
///
/// A run is a maximal sequence of adjacent filled squares on a line; a single tile is a run too.
/// The state is computed from the tiles at once, and must be rebuilt when tiles are added.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoardState {
    size: usize,
    /// runs per orientation, in order of line and offset
    runs: [Vec<Boundary>; 2],
    /// index in `runs` for every square, per orientation
    run_index: [Vec<Option<usize>>; 2],
}

fn slot(orientation: Orientation) -> usize {
    match orientation {
        Orientation::Horizontal => 0,
        Orientation::Vertical => 1,
    }
}

impl BoardState {
    /// Compute the runs of a `size` x `size` board, where `filled` tells if a square has a tile.
    pub fn new<F>(size: usize, filled: F) -> BoardState
    where
        F: Fn(Position) -> bool,
    {
        let mut state = BoardState {
            size,
            runs: [Vec::new(), Vec::new()],
            run_index: [vec![None; size * size], vec![None; size * size]],
        };
        for &o in &Orientation::ALL {
            for fixed in 0..size {
                let mut run_start = None;
                // one step past the end closes a run at the edge
                for offset in 0..=size {
                    let is_filled =
                        offset < size && filled(Position::from_line(o, fixed, offset));
                    match (is_filled, run_start) {
                        (true, None) => run_start = Some(offset),
                        (false, Some(start)) => {
                            state.add_run(Boundary::new(o, fixed, start, offset - 1));
                            run_start = None;
                        }
                        _ => {}
                    }
                }
            }
        }
        state
    }

    fn add_run(&mut self, run: Boundary) {
        let slot = slot(run.orientation);
        let index = self.runs[slot].len();
        for pos in run.positions() {
            self.run_index[slot][pos.y * self.size + pos.x] = Some(index);
        }
        self.runs[slot].push(run);
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// All runs along `orientation`
    pub fn runs(&self, orientation: Orientation) -> &[Boundary] {
        &self.runs[slot(orientation)]
    }

    /// The run along `orientation` that contains `pos`, if `pos` is filled.
    pub fn run_at(&self, pos: Position, orientation: Orientation) -> Option<Boundary> {
        if pos.x >= self.size || pos.y >= self.size {
            return None;
        }
        let slot = slot(orientation);
        self.run_index[slot][pos.y * self.size + pos.x].map(|index| self.runs[slot][index])
    }

    pub fn is_filled(&self, pos: Position) -> bool {
        self.run_at(pos, Orientation::Horizontal).is_some()
    }

    /// Check if no square is filled
    pub fn is_empty(&self) -> bool {
        self.runs[0].is_empty()
    }
}
