//! Binary snapshot of a word graph.
//!
//! Nodes are written depth first from the root. Each node record is
//! `[terminal: u8][id: u32][child count: u32]`, followed by `[letter: u8][child record]`
//! for each child. Integers are little endian.
//! A node that was already written is written again as `[terminal][id][0]`: a reference
//! to the earlier record, so shared nodes stay shared after reading the snapshot.
use super::{Node, NodeIndex, WordGraph, ROOT};
use crate::error::Error;
use crate::tiles::is_letter;
use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use log::debug;
use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Cursor, Read, Write};

/// Longest word that can be read from a snapshot.
const MAX_DEPTH: usize = 256;

fn snapshot_error(err: io::Error) -> Error {
    match err.kind() {
        io::ErrorKind::UnexpectedEof => Error::SnapshotError(String::from("unexpected end of data")),
        _ => Error::SnapshotError(err.to_string()),
    }
}

struct Reader<R: Read> {
    reader: R,
    nodes: Vec<Node>,
    /// node index for each id read so far
    known: HashMap<u32, NodeIndex>,
    /// nodes whose children are still being read
    open: HashSet<NodeIndex>,
}

impl<R: Read> Reader<R> {
    fn read_node(&mut self, depth: usize) -> Result<NodeIndex, Error> {
        if depth > MAX_DEPTH {
            return Err(Error::SnapshotError(format!(
                "graph is deeper than {} letters",
                MAX_DEPTH
            )));
        }
        let terminal = match self.reader.read_u8().map_err(snapshot_error)? {
            0 => false,
            1 => true,
            n => return Err(Error::SnapshotError(format!("invalid terminal flag {}", n))),
        };
        let id = self
            .reader
            .read_u32::<LittleEndian>()
            .map_err(snapshot_error)?;
        let count = self
            .reader
            .read_u32::<LittleEndian>()
            .map_err(snapshot_error)?;

        if let Some(&index) = self.known.get(&id) {
            if count != 0 {
                return Err(Error::SnapshotError(format!("node {} is defined twice", id)));
            }
            if self.open.contains(&index) {
                return Err(Error::SnapshotError(format!("node {} refers to itself", id)));
            }
            return Ok(index);
        }
        if count > 26 {
            return Err(Error::SnapshotError(format!(
                "node {} has {} children",
                id, count
            )));
        }

        let index = self.nodes.len() as NodeIndex;
        let mut node = Node::new(id);
        node.terminal = terminal;
        self.nodes.push(node);
        self.known.insert(id, index);
        self.open.insert(index);

        let mut previous = None;
        for _ in 0..count {
            let letter = self.reader.read_u8().map_err(snapshot_error)?;
            if !is_letter(letter as char) || previous >= Some(letter) {
                return Err(Error::SnapshotError(format!(
                    "invalid letter {} in node {}",
                    letter, id
                )));
            }
            previous = Some(letter);
            let child = self.read_node(depth + 1)?;
            self.nodes[index as usize].children.push((letter, child));
        }
        self.open.remove(&index);
        Ok(index)
    }
}

impl WordGraph {
    /// Write the graph as a binary snapshot to `writer`.
    /// ## Errors
    /// If writing fails.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        let mut written = vec![false; self.nodes.len()];
        self.write_node(writer, ROOT, &mut written)
    }

    fn write_node<W: Write>(
        &self,
        writer: &mut W,
        index: NodeIndex,
        written: &mut Vec<bool>,
    ) -> io::Result<()> {
        let node = &self.nodes[index as usize];
        writer.write_u8(node.terminal as u8)?;
        writer.write_u32::<LittleEndian>(node.id)?;
        if written[index as usize] {
            return writer.write_u32::<LittleEndian>(0);
        }
        written[index as usize] = true;
        writer.write_u32::<LittleEndian>(node.children.len() as u32)?;
        for &(letter, child) in node.children.iter() {
            writer.write_u8(letter)?;
            self.write_node(writer, child, written)?;
        }
        Ok(())
    }

    /// Read a graph from a binary snapshot. The graph is finalized.
    /// ## Errors
    /// If the snapshot can not be read, or is not a valid snapshot.
    pub fn read_from<R: Read>(reader: R) -> Result<WordGraph, Error> {
        let mut reader = Reader {
            reader,
            nodes: Vec::new(),
            known: HashMap::new(),
            open: HashSet::new(),
        };
        reader.read_node(0)?;
        let mut graph = WordGraph::new();
        graph.next_id = reader.nodes.iter().map(|node| node.id).max().unwrap_or(0) + 1;
        graph.nodes = reader.nodes;
        graph.finalized = true;
        graph.word_count = graph.count_words();
        Ok(graph)
    }

    /// The binary snapshot as bytes.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::new();
        // writing to a Vec can not fail
        let _ = self.write_to(&mut bytes);
        bytes
    }

    /// Read a graph from snapshot `bytes`.
    /// ## Errors
    /// If `bytes` is not a valid snapshot, or has trailing data.
    pub fn from_bytes(bytes: &[u8]) -> Result<WordGraph, Error> {
        let mut cursor = Cursor::new(bytes);
        let graph = WordGraph::read_from(&mut cursor)?;
        if cursor.position() as usize != bytes.len() {
            return Err(Error::SnapshotError(format!(
                "{} bytes of trailing data",
                bytes.len() - cursor.position() as usize
            )));
        }
        Ok(graph)
    }

    /// Save the graph as a binary snapshot file.
    /// ## Errors
    /// If the file can not be written.
    pub fn save(&self, path: &str) -> Result<(), Error> {
        let write_error = |source: io::Error| Error::WriteError {
            path: String::from(path),
            source,
        };
        let file = File::create(path).map_err(write_error)?;
        let mut writer = BufWriter::new(file);
        self.write_to(&mut writer).map_err(write_error)?;
        writer.flush().map_err(write_error)?;
        debug!("saved {} to {}", self, path);
        Ok(())
    }

    /// Load a graph from a binary snapshot file.
    /// ## Errors
    /// If the file can not be read, or is not a valid snapshot.
    pub fn load(path: &str) -> Result<WordGraph, Error> {
        let file = File::open(path).map_err(|source| Error::ReadError {
            path: String::from(path),
            source,
        })?;
        let graph = WordGraph::read_from(BufReader::new(file))?;
        debug!("loaded {} from {}", graph, path);
        Ok(graph)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WORDS: &[&str] = &[
        "bake", "baked", "cake", "caked", "cart", "cat", "fake", "lake", "make", "tact",
    ];

    #[test]
    fn test_round_trip() -> Result<(), Error> {
        let graph = WordGraph::from_words(WORDS)?;
        let restored = WordGraph::from_bytes(&graph.to_bytes())?;
        assert_eq!(restored.node_count(), graph.node_count());
        assert_eq!(restored.word_count(), graph.word_count());
        assert_eq!(restored.nodes, graph.nodes);
        for &word in WORDS.iter().chain(&["ake", "bak", "cakes", "tac", ""]) {
            assert_eq!(restored.lookup(word), graph.lookup(word), "{}", word);
        }
        assert!(restored.is_finalized());
        Ok(())
    }

    #[test]
    fn test_shared_nodes_written_once() -> Result<(), Error> {
        let graph = WordGraph::from_words(&["bake", "cake"])?;
        // root, "ake", "ke", "e", leaf
        assert_eq!(graph.node_count(), 5);
        let bytes = graph.to_bytes();
        // 5 node records, 5 edge letters, and one reference to "ake"
        assert_eq!(bytes.len(), 5 * 9 + 5 + 9);
        let restored = WordGraph::from_bytes(&bytes)?;
        assert_eq!(restored.child(ROOT, b'b'), restored.child(ROOT, b'c'));
        Ok(())
    }

    #[test]
    fn test_layout() -> Result<(), Error> {
        let graph = WordGraph::from_words(&["a"])?;
        assert_eq!(
            graph.to_bytes(),
            vec![0, 0, 0, 0, 0, 1, 0, 0, 0, b'a', 1, 1, 0, 0, 0, 0, 0, 0, 0]
        );
        Ok(())
    }

    #[test]
    fn test_truncated() -> Result<(), Error> {
        let bytes = WordGraph::from_words(WORDS)?.to_bytes();
        for len in &[0, 1, 8, bytes.len() - 1] {
            let res = WordGraph::from_bytes(&bytes[..*len]);
            assert!(matches!(res, Err(Error::SnapshotError(_))), "{}", len);
        }
        Ok(())
    }

    #[test]
    fn test_trailing_data() -> Result<(), Error> {
        let mut bytes = WordGraph::from_words(WORDS)?.to_bytes();
        bytes.push(0);
        assert!(WordGraph::from_bytes(&bytes).is_err());
        Ok(())
    }

    #[test]
    fn test_self_reference() {
        // root with child 'a' referring back to the root
        let bytes = vec![0, 7, 0, 0, 0, 1, 0, 0, 0, b'a', 0, 7, 0, 0, 0, 0, 0, 0, 0];
        assert!(matches!(
            WordGraph::from_bytes(&bytes),
            Err(Error::SnapshotError(_))
        ));
    }

    #[test]
    fn test_foreign_ids() -> Result<(), Error> {
        // root 100 -a-> 200 (terminal), -b-> reference to 200
        let mut bytes = vec![0, 100, 0, 0, 0, 2, 0, 0, 0];
        bytes.extend(&[b'a', 1, 200, 0, 0, 0, 0, 0, 0, 0]);
        bytes.extend(&[b'b', 1, 200, 0, 0, 0, 0, 0, 0, 0]);
        let graph = WordGraph::from_bytes(&bytes)?;
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.word_count(), 2);
        assert!(graph.lookup("a") && graph.lookup("b"));
        assert_eq!(graph.to_bytes(), bytes);
        Ok(())
    }

    #[test]
    fn test_save_load() -> Result<(), Error> {
        let graph = WordGraph::from_words(WORDS)?;
        let dir = tempfile::tempdir().map_err(|source| Error::WriteError {
            path: String::from("tempdir"),
            source,
        })?;
        let path = dir.path().join("words.dawg").to_string_lossy().to_string();
        graph.save(&path)?;
        let loaded = WordGraph::load(&path)?;
        assert_eq!(loaded.words(), graph.words());
        Ok(())
    }

    #[test]
    fn test_load_missing() {
        assert!(matches!(
            WordGraph::load("no/such/file.dawg"),
            Err(Error::ReadError { .. })
        ));
    }
}
