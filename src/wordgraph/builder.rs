//! Incremental construction of a minimal word graph from sorted words.
//!
//! When a word is inserted, the edges below its common prefix with the previous word
//! can never change anymore. They are minimized: a node that has the same signature as
//! an already known node is replaced by that node.
use super::{Node, NodeIndex, WordGraph, ROOT};
use crate::error::Error;
use crate::tiles::is_letter;
use log::debug;
use std::collections::HashMap;

impl WordGraph {
    /// Insert `word` into the graph.
    ///
    /// Words must be inserted in ascending order. Inserting the previous word again, or an empty
    /// word, does nothing.
    /// ## Errors
    /// - [`GraphFinalized`](Error::GraphFinalized) if the graph is finalized. The graph is not changed.
    /// - [`WordOrder`](Error::WordOrder) if `word` sorts before the previous word.
    /// - [`InvalidLetter`](Error::InvalidLetter) if `word` has other letters than `a` .. `z`.
    pub fn insert(&mut self, word: &str) -> Result<(), Error> {
        if self.finalized {
            return Err(Error::GraphFinalized);
        }
        if let Some(ch) = word.chars().find(|&ch| !is_letter(ch)) {
            return Err(Error::InvalidLetter(ch));
        }
        let letters = word.as_bytes();
        if letters.is_empty() || letters == self.previous.as_slice() {
            return Ok(());
        }
        if letters < self.previous.as_slice() {
            return Err(Error::WordOrder(
                String::from_utf8_lossy(&self.previous).into_owned(),
                String::from(word),
            ));
        }

        let common = letters
            .iter()
            .zip(&self.previous)
            .take_while(|(a, b)| a == b)
            .count();
        self.minimize(common);

        let mut node = self.unchecked.last().map_or(ROOT, |&(_, _, child)| child);
        for &letter in &letters[common..] {
            let child = self.new_node();
            // letters are inserted in order, so the new edge is the last one
            self.nodes[node as usize].children.push((letter, child));
            self.unchecked.push((node, letter, child));
            node = child;
        }
        self.nodes[node as usize].terminal = true;
        self.previous = letters.to_vec();
        self.word_count += 1;
        Ok(())
    }

    /// Minimize the remaining edges and make the graph immutable.
    ///
    /// The nodes are renumbered depth first, starting with the root as node 0, and
    /// nodes that were replaced during minimization are dropped.
    pub fn finalize(&mut self) {
        if self.finalized {
            return;
        }
        self.minimize(0);
        self.compact();
        self.finalized = true;
        self.previous = Vec::new();
        self.minimized = HashMap::new();
        debug!(
            "finalized word graph: {} words, {} nodes",
            self.word_count,
            self.nodes.len()
        );
    }

    fn new_node(&mut self) -> NodeIndex {
        let index = self.nodes.len() as NodeIndex;
        self.nodes.push(Node::new(self.next_id));
        self.next_id += 1;
        index
    }

    /// Minimize the unchecked edges deeper than `down_to`.
    fn minimize(&mut self, down_to: usize) {
        while self.unchecked.len() > down_to {
            let (parent, letter, child) = match self.unchecked.pop() {
                Some(edge) => edge,
                None => break,
            };
            let signature = self.nodes[child as usize].signature();
            match self.minimized.get(&signature) {
                Some(&canonical) => {
                    let edges = &mut self.nodes[parent as usize].children;
                    if let Some(edge) = edges.iter_mut().rev().find(|(l, _)| *l == letter) {
                        edge.1 = canonical;
                    }
                }
                None => {
                    self.minimized.insert(signature, child);
                }
            }
        }
    }

    /// Drop unreachable nodes, and renumber the reachable nodes depth first.
    fn compact(&mut self) {
        let mut remap: Vec<Option<NodeIndex>> = vec![None; self.nodes.len()];
        let mut order: Vec<NodeIndex> = Vec::new();
        let mut stack = vec![ROOT];
        while let Some(node) = stack.pop() {
            if remap[node as usize].is_some() {
                continue;
            }
            remap[node as usize] = Some(order.len() as NodeIndex);
            order.push(node);
            for &(_, child) in self.nodes[node as usize].children.iter().rev() {
                if remap[child as usize].is_none() {
                    stack.push(child);
                }
            }
        }
        let mut nodes = Vec::with_capacity(order.len());
        for (id, &old) in order.iter().enumerate() {
            let mut node = std::mem::take(&mut self.nodes[old as usize]);
            node.id = id as u32;
            for edge in node.children.iter_mut() {
                // every child of a reachable node is reachable
                edge.1 = remap[edge.1 as usize].unwrap_or(edge.1);
            }
            nodes.push(node);
        }
        self.nodes = nodes;
        self.next_id = self.nodes.len() as u32;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shares_suffixes() -> Result<(), Error> {
        let single = WordGraph::from_words(&["abcdef"])?;
        assert_eq!(single.node_count(), "abcdef".len() + 1);
        let shared = WordGraph::from_words(&["abcdef", "abdef", "abef", "af"])?;
        assert_eq!(single.node_count(), shared.node_count());
        Ok(())
    }

    #[test]
    fn test_suffix_node_identity() -> Result<(), Error> {
        let graph = WordGraph::from_words(&["bake", "cake", "fake", "lake", "make"])?;
        let ake = graph.child(ROOT, b'b');
        for &first in b"cflm" {
            assert_eq!(graph.child(ROOT, first), ake);
        }
        // root, "ake", "ke", "e", end
        assert_eq!(graph.node_count(), 5);
        Ok(())
    }

    #[test]
    fn test_insert_order() -> Result<(), Error> {
        let mut graph = WordGraph::new();
        graph.insert("bravo")?;
        graph.insert("bravo")?;
        let res = graph.insert("alfa");
        assert!(matches!(res, Err(Error::WordOrder(ref prev, ref word)) if prev == "bravo" && word == "alfa"));
        graph.insert("charlie")?;
        assert_eq!(graph.word_count(), 2);
        Ok(())
    }

    #[test]
    fn test_insert_after_finalize() -> Result<(), Error> {
        let mut graph = WordGraph::new();
        graph.insert("alfa")?;
        graph.finalize();
        let nodes = graph.node_count();
        assert!(matches!(graph.insert("bravo"), Err(Error::GraphFinalized)));
        assert_eq!(graph.node_count(), nodes);
        assert!(graph.lookup("alfa"));
        assert!(!graph.lookup("bravo"));
        Ok(())
    }

    #[test]
    fn test_lookup_while_building() -> Result<(), Error> {
        let mut graph = WordGraph::new();
        graph.insert("tea")?;
        graph.insert("ten")?;
        assert!(graph.lookup("tea"));
        assert!(graph.lookup("ten"));
        assert!(!graph.lookup("te"));
        Ok(())
    }

    #[test]
    fn test_prefix_words() -> Result<(), Error> {
        let keys = &["i", "in", "inn", "tea", "ten", "to", "we"];
        let graph = WordGraph::from_words(keys)?;
        for key in keys {
            assert!(graph.lookup(key), "graph should have key '{}'", key);
        }
        for key in &["te", "inno", "web", "hoge", ""] {
            assert!(!graph.lookup(key), "graph should not have key '{}'", key);
        }
        Ok(())
    }

    #[test]
    fn test_node_ids() -> Result<(), Error> {
        let graph = WordGraph::from_words(&["cart", "cat", "dart"])?;
        for (i, node) in graph.nodes.iter().enumerate() {
            assert_eq!(node.id as usize, i);
        }
        Ok(())
    }
}
