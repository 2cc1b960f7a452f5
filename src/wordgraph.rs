mod anagram;
mod builder;
mod snapshot;

use crate::error::Error;
use crate::tiles::is_letter;
use std::collections::HashMap;
use std::fmt;
use std::fs::read_to_string;
use tinyvec::TinyVec;

/// Index of a node in the arena of a [`WordGraph`].
pub(crate) type NodeIndex = u32;

/// The structural signature of a node: terminal flag and the sorted (letter, child) edges.
/// Two nodes with the same signature accept the same suffixes.
type Signature = (bool, Vec<(u8, NodeIndex)>);

const ROOT: NodeIndex = 0;

#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct Node {
    /// Identity of the node, written to and read from snapshots
    id: u32,
    /// True if a word ends here
    terminal: bool,
    /// (letter, child) edges, sorted by letter
    children: TinyVec<[(u8, NodeIndex); 4]>,
}

impl Node {
    fn new(id: u32) -> Node {
        Node {
            id,
            ..Node::default()
        }
    }

    fn signature(&self) -> Signature {
        (self.terminal, self.children.iter().copied().collect())
    }
}

/// A minimized directed acyclic word graph (DAWG).
///
/// Words are inserted in ascending order with [`insert`](WordGraph::insert), and common suffixes are
/// shared while inserting. After [`finalize`](WordGraph::finalize) the graph is immutable.
/// All nodes are owned by an arena, edges refer to nodes by index.
///
/// ## Examples
/// ```
/// use wordplay_solver::WordGraph;
/// let graph = WordGraph::from_words(&["act", "cat", "cart"])?;
/// assert!(graph.lookup("cart"));
/// assert!(!graph.lookup("car"));
/// let anagrams = graph.anagrams_of(&['t', 'c', 'a'], 0, 3, &Default::default());
/// assert_eq!(anagrams.into_iter().collect::<Vec<_>>(), vec!["act", "cat"]);
/// # Ok::<(), wordplay_solver::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct WordGraph {
    nodes: Vec<Node>,
    finalized: bool,
    word_count: usize,
    /// the most recently inserted word
    previous: Vec<u8>,
    /// (parent, letter, child) edges that are not minimized yet
    unchecked: Vec<(NodeIndex, u8, NodeIndex)>,
    /// canonical nodes by signature
    minimized: HashMap<Signature, NodeIndex>,
    next_id: u32,
}

impl Default for WordGraph {
    fn default() -> Self {
        WordGraph::new()
    }
}

impl fmt::Display for WordGraph {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "<WordGraph: {} words, {} nodes>",
            self.word_count,
            self.node_count()
        )
    }
}

impl WordGraph {
    /// Create an empty graph, ready for inserting words.
    pub fn new() -> WordGraph {
        WordGraph {
            nodes: vec![Node::new(0)],
            finalized: false,
            word_count: 0,
            previous: Vec::new(),
            unchecked: Vec::new(),
            minimized: HashMap::new(),
            next_id: 1,
        }
    }

    /// Build a finalized graph from a list of words. The words do not need to be sorted.
    /// ## Errors
    /// If a word contains other characters than `a` .. `z`.
    pub fn from_words<S: AsRef<str>>(words: &[S]) -> Result<WordGraph, Error> {
        let mut words: Vec<&str> = words.iter().map(AsRef::as_ref).collect();
        words.sort_unstable();
        words.dedup();
        let mut graph = WordGraph::new();
        for word in words {
            graph.insert(word)?;
        }
        graph.finalize();
        Ok(graph)
    }

    /// Read the words from a file and build a finalized graph. The file must be encoded
    /// in utf-8 and have one word per line. Words are converted to lowercase.
    /// Empty lines and lines starting with `#` are skipped.
    /// ## Errors
    /// Fails if the file can not be read, or a word has other letters than `a` .. `z`.
    pub fn from_file(wordfile: &str) -> Result<WordGraph, Error> {
        let contents = read_to_string(wordfile).map_err(|source| Error::ReadError {
            path: String::from(wordfile),
            source,
        })?;
        let words: Vec<String> = contents
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(str::to_lowercase)
            .collect();
        WordGraph::from_words(&words)
    }

    /// Check if the graph is finalized
    pub fn is_finalized(&self) -> bool {
        self.finalized
    }

    /// The number of words in the graph
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    /// The number of nodes in the graph
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Get the child of node `i` with `letter` if present.
    pub(crate) fn child(&self, i: NodeIndex, letter: u8) -> Option<NodeIndex> {
        let children = &self.nodes[i as usize].children;
        children
            .binary_search_by_key(&letter, |&(l, _)| l)
            .ok()
            .map(|pos| children[pos].1)
    }

    fn is_terminal(&self, i: NodeIndex) -> bool {
        self.nodes[i as usize].terminal
    }

    /// Returns true if `word` is in the graph.
    pub fn lookup(&self, word: &str) -> bool {
        let mut node = ROOT;
        for ch in word.chars() {
            if !is_letter(ch) {
                return false;
            }
            match self.child(node, ch as u8) {
                Some(child) => node = child,
                None => return false,
            }
        }
        self.is_terminal(node)
    }

    /// All words in the graph, in lexicographic order.
    pub fn words(&self) -> Vec<String> {
        let mut words = Vec::with_capacity(self.word_count);
        let mut stack: Vec<(NodeIndex, String)> = vec![(ROOT, String::new())];
        while let Some((node, prefix)) = stack.pop() {
            if self.is_terminal(node) {
                words.push(prefix.clone());
            }
            // push in reverse order, so the smallest letter is visited first
            for &(letter, child) in self.nodes[node as usize].children.iter().rev() {
                let mut word = prefix.clone();
                word.push(letter as char);
                stack.push((child, word));
            }
        }
        words
    }

    /// Count the words reachable from every node, sharing the counts of shared nodes.
    fn count_words(&self) -> usize {
        fn count(graph: &WordGraph, node: NodeIndex, memo: &mut Vec<Option<usize>>) -> usize {
            if let Some(n) = memo[node as usize] {
                return n;
            }
            let mut n = graph.is_terminal(node) as usize;
            for &(_, child) in graph.nodes[node as usize].children.iter() {
                n += count(graph, child, memo);
            }
            memo[node as usize] = Some(n);
            n
        }
        let mut memo = vec![None; self.nodes.len()];
        count(self, ROOT, &mut memo)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WORDS: &[&str] = &[
        "af", "ah", "al", "aar", "aas", "bi", "bo", "bar", "bes", "bel", "belt",
    ];

    fn test_graph() -> WordGraph {
        WordGraph::from_words(WORDS).unwrap()
    }

    #[test]
    fn test_lookup() {
        let graph = test_graph();
        for &word in WORDS {
            assert!(graph.lookup(word), "graph should have word '{}'", word);
        }
        for &word in &["a", "b", "aa", "be", "belts", "", "Bar", "ba!"] {
            assert!(!graph.lookup(word), "graph should not have word '{}'", word);
        }
    }

    #[test]
    fn test_counts() {
        let graph = test_graph();
        assert_eq!(graph.word_count(), 11);
        assert_eq!(graph.count_words(), 11);
        assert!(graph.is_finalized());
        assert_eq!(graph.to_string(), format!("<WordGraph: 11 words, {} nodes>", graph.node_count()));
    }

    #[test]
    fn test_words() {
        let graph = test_graph();
        let mut expect: Vec<String> = WORDS.iter().map(|&w| String::from(w)).collect();
        expect.sort();
        assert_eq!(graph.words(), expect);
    }

    #[test]
    fn test_empty_graph() {
        let graph = WordGraph::from_words::<&str>(&[]).unwrap();
        assert!(!graph.lookup("a"));
        assert!(!graph.lookup(""));
        assert!(graph.words().is_empty());
        assert!(graph.anagrams_of(&['a'], 1, 1, &Default::default()).is_empty());
    }

    #[test]
    fn test_from_words_invalid() {
        let res = WordGraph::from_words(&["caf\u{e9}"]);
        assert!(matches!(res, Err(Error::InvalidLetter('\u{e9}'))));
    }

    #[test]
    fn test_from_file() -> Result<(), Error> {
        use std::io::Write;
        let mut file = tempfile::NamedTempFile::new().map_err(|source| Error::WriteError {
            path: String::from("tempfile"),
            source,
        })?;
        writeln!(file, "# a comment\nZebra\n\naardvark\nzebra").map_err(|source| {
            Error::WriteError {
                path: String::from("tempfile"),
                source,
            }
        })?;
        let path = file.path().to_string_lossy().to_string();
        let graph = WordGraph::from_file(&path)?;
        assert_eq!(graph.word_count(), 2);
        assert!(graph.lookup("zebra"));
        assert!(graph.lookup("aardvark"));
        Ok(())
    }

    #[test]
    fn test_from_file_missing() {
        let res = WordGraph::from_file("no/such/wordfile.txt");
        assert!(matches!(res, Err(Error::ReadError { .. })));
    }
}
