//! Move generation for the boundaries of one word length.
use super::{single_tile_orientations, Solution, Solver};
use crate::board::Board;
use crate::geometry::{Boundary, Position};
use crate::tiles::{Rack, Tile, BLANK};
use log::trace;
use std::collections::{BTreeMap, BTreeSet};

/// All distinct multisets of `size` tiles from `rack`, as sorted letters with [`BLANK`] for blanks.
fn rack_subsets(rack: &Rack, size: usize) -> BTreeSet<Vec<char>> {
    fn collect(tiles: &[char], size: usize, chosen: &mut Vec<char>, out: &mut BTreeSet<Vec<char>>) {
        if chosen.len() == size {
            out.insert(chosen.clone());
            return;
        }
        for (i, &tile) in tiles.iter().enumerate() {
            // the same letter at this depth gives the same multisets
            if i > 0 && tiles[i - 1] == tile {
                continue;
            }
            chosen.push(tile);
            collect(&tiles[i + 1..], size, chosen, out);
            chosen.pop();
        }
    }

    let mut tiles: Vec<char> = rack
        .iter()
        .map(|tile| if tile.is_blank() { BLANK } else { tile.letter() })
        .collect();
    tiles.sort_unstable();
    let mut subsets = BTreeSet::new();
    if size == tiles.len() {
        subsets.insert(tiles);
    } else if size < tiles.len() {
        collect(&tiles, size, &mut Vec::with_capacity(size), &mut subsets);
    }
    subsets
}

/// All `k`-element combinations of `items`, in order.
fn combinations(items: &[usize], k: usize) -> Vec<Vec<usize>> {
    if k == 0 {
        return vec![Vec::new()];
    }
    let mut out = Vec::new();
    for (i, &item) in items.iter().enumerate() {
        for mut rest in combinations(&items[i + 1..], k - 1) {
            rest.insert(0, item);
            out.push(rest);
        }
    }
    out
}

/// Every distinct way to lay the letters of `word` on the empty squares of `boundary`
/// with tiles from `rack`.
///
/// A blank is only used for a letter the rack runs short of, but it can go on any square
/// holding that letter, and the squares score differently. Each choice of squares for the
/// blanks gives one tile list. Empty if the rack can not cover the word.
fn tile_assignments(
    board: &Board,
    boundary: &Boundary,
    word: &str,
    rack: &Rack,
) -> Vec<Vec<(Position, Tile)>> {
    let mut counts = [0usize; 26];
    for tile in rack.iter().filter(|tile| !tile.is_blank()) {
        match (tile.letter() as usize).checked_sub('a' as usize) {
            Some(i) if i < counts.len() => counts[i] += 1,
            _ => return Vec::new(),
        }
    }

    let free: Vec<(Position, char)> = boundary
        .positions()
        .zip(word.chars())
        .filter(|&(pos, _)| !board.is_filled(pos))
        .collect();

    // for each letter the rack runs short of, the ways to pick its blank squares
    let mut choices = Vec::new();
    let mut needed = 0;
    for (i, count) in counts.iter().enumerate() {
        let letter = (b'a' + i as u8) as char;
        let squares: Vec<usize> = (0..free.len()).filter(|&j| free[j].1 == letter).collect();
        if squares.len() > *count {
            let short = squares.len() - count;
            needed += short;
            choices.push(combinations(&squares, short));
        }
    }
    let uncovered = free.iter().any(|&(_, letter)| !letter.is_ascii_lowercase());
    if uncovered || needed > rack.blanks() {
        return Vec::new();
    }

    let mut placements: Vec<Vec<usize>> = vec![Vec::new()];
    for options in &choices {
        placements = placements
            .iter()
            .flat_map(|chosen| {
                options.iter().map(move |option| {
                    let mut chosen = chosen.clone();
                    chosen.extend(option);
                    chosen
                })
            })
            .collect();
    }

    placements
        .into_iter()
        .filter_map(|blanks| {
            free.iter()
                .enumerate()
                .map(|(j, &(pos, letter))| {
                    let tile = if blanks.contains(&j) {
                        Tile::assigned(letter)
                    } else {
                        Tile::new(letter)
                    };
                    tile.map(|tile| (pos, tile))
                })
                .collect::<Result<Vec<_>, _>>()
                .ok()
        })
        .collect()
}

impl<'a> Solver<'a> {
    /// Find the solutions on `boundaries`. The words are tried on a copy of `board`.
    pub(crate) fn scan(&self, board: &Board, rack: &Rack, boundaries: &[Boundary]) -> Vec<Solution> {
        let mut scratch = board.clone();
        let mut found = Vec::new();
        for boundary in boundaries {
            self.scan_boundary(&mut scratch, rack, boundary, &mut found);
        }
        found
    }

    fn scan_boundary(
        &self,
        board: &mut Board,
        rack: &Rack,
        boundary: &Boundary,
        found: &mut Vec<Solution>,
    ) {
        let mut fixed = BTreeMap::new();
        let mut free = Vec::new();
        for (offset, pos) in boundary.positions().enumerate() {
            match board.tile_at(pos) {
                Some(tile) => {
                    fixed.insert(offset, tile.letter());
                }
                None => free.push(pos),
            }
        }
        if free.is_empty() || free.len() > rack.len() {
            return;
        }
        // a single new tile is found along the direction where validation looks first
        if let [pos] = free.as_slice() {
            if single_tile_orientations(board, *pos)[0] != boundary.orientation {
                return;
            }
        }

        let mut words = BTreeSet::new();
        for subset in rack_subsets(rack, free.len()) {
            let letters: Vec<char> = subset.iter().copied().filter(|&ch| ch != BLANK).collect();
            let blanks = subset.len() - letters.len();
            words.extend(
                self.graph
                    .anagrams_of(&letters, blanks, boundary.len(), &fixed),
            );
        }

        for word in words {
            let mut best: Option<Solution> = None;
            for tiles in tile_assignments(board, boundary, &word, rack) {
                let trial = match board.trial(&tiles) {
                    Ok(trial) => trial,
                    Err(err) => {
                        trace!("can not place {} on {}: {}", word, boundary, err);
                        continue;
                    }
                };
                match self.evaluate(&trial, boundary, trial.placed()) {
                    // the first placement wins a tie
                    Ok(solution) if best.as_ref().map_or(true, |b| solution.score > b.score) => {
                        best = Some(solution)
                    }
                    Ok(_) => (),
                    Err(err) => trace!("rejected {} on {}: {}", word, boundary, err),
                }
            }
            found.extend(best);
        }
    }
}
