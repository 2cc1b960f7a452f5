use super::{NodeIndex, WordGraph, ROOT};
use crate::tiles::is_letter;
use std::collections::{BTreeMap, BTreeSet};

/// Multiset of the letters `a` .. `z`, passed by value down the search.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct LetterCounts([u8; 26]);

impl LetterCounts {
    fn from_letters(letters: &[char]) -> LetterCounts {
        let mut counts = LetterCounts::default();
        for &ch in letters.iter().filter(|&&ch| is_letter(ch)) {
            let i = (ch as u8 - b'a') as usize;
            counts.0[i] = counts.0[i].saturating_add(1);
        }
        counts
    }

    /// The remaining letters after using one `letter`, or `None` if `letter` is not available.
    fn take(self, letter: u8) -> Option<LetterCounts> {
        let i = letter.checked_sub(b'a')? as usize;
        match self.0.get(i) {
            Some(&n) if n > 0 => {
                let mut next = self;
                next.0[i] = n - 1;
                Some(next)
            }
            _ => None,
        }
    }
}

struct Search<'a> {
    graph: &'a WordGraph,
    /// the required letter at each offset, if any
    fixed: &'a [Option<u8>],
    word: Vec<u8>,
    found: BTreeSet<String>,
}

impl<'a> Search<'a> {
    fn descend(&mut self, node: NodeIndex, counts: LetterCounts, blanks: usize) {
        let depth = self.word.len();
        if depth == self.fixed.len() {
            if self.graph.is_terminal(node) {
                self.found
                    .insert(self.word.iter().map(|&letter| letter as char).collect());
            }
            return;
        }
        if let Some(letter) = self.fixed[depth] {
            if let Some(child) = self.graph.child(node, letter) {
                self.word.push(letter);
                self.descend(child, counts, blanks);
                self.word.pop();
            }
            return;
        }
        let graph = self.graph;
        for &(letter, child) in graph.nodes[node as usize].children.iter() {
            // a letter from the rack is always at least as good as a blank
            let next = match counts.take(letter) {
                Some(next) => (next, blanks),
                None if blanks > 0 => (counts, blanks - 1),
                None => continue,
            };
            self.word.push(letter);
            self.descend(child, next.0, next.1);
            self.word.pop();
        }
    }
}

impl WordGraph {
    /// Return all words of exactly `length` letters that can be made with `letters` and `blanks`,
    /// with the letters in `fixed` at their offsets.
    ///
    /// Every letter of `letters` can be used once, every blank can stand for any letter.
    /// Not all letters need to be used. Offsets in `fixed` must be smaller than `length`.
    ///
    /// ## Examples
    /// ```
    /// # use std::collections::BTreeMap;
    /// use wordplay_solver::WordGraph;
    /// let graph = WordGraph::from_words(&["cart", "cast", "cat"])?;
    /// let mut fixed = BTreeMap::new();
    /// fixed.insert(2, 'r');
    /// let words = graph.anagrams_of(&['t', 'a', 'c'], 0, 4, &fixed);
    /// assert_eq!(words.into_iter().collect::<Vec<_>>(), vec!["cart"]);
    /// # Ok::<(), wordplay_solver::Error>(())
    /// ```
    pub fn anagrams_of(
        &self,
        letters: &[char],
        blanks: usize,
        length: usize,
        fixed: &BTreeMap<usize, char>,
    ) -> BTreeSet<String> {
        let mut constraints = vec![None; length];
        for (&offset, &ch) in fixed {
            if offset >= length || !is_letter(ch) {
                return BTreeSet::new();
            }
            constraints[offset] = Some(ch as u8);
        }
        let mut search = Search {
            graph: self,
            fixed: &constraints,
            word: Vec::with_capacity(length),
            found: BTreeSet::new(),
        };
        search.descend(ROOT, LetterCounts::from_letters(letters), blanks);
        search.found
    }
}
