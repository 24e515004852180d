//! Core graph structure — sense nodes with dual adjacency and a word index.

use std::collections::{BTreeSet, HashMap};

use serde::Serialize;

use crate::types::{Direction, LexError, LexResult};

/// One word sense (synset): an ID and the surface words that express it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SenseNode {
    /// Unique node ID, assigned by the data source.
    pub id: u64,
    /// Surface words, never empty.
    pub words: BTreeSet<String>,
}

/// Directed graph of sense nodes.
///
/// Child and parent adjacency are only ever updated together by
/// [`SenseGraph::add_edge`], so `c ∈ children(p) ⇔ p ∈ parents(c)` always holds.
#[derive(Debug)]
pub struct SenseGraph {
    /// All nodes, indexed by ID.
    nodes: HashMap<u64, SenseNode>,
    /// Hyponym adjacency: parent_id -> sorted child IDs.
    children: HashMap<u64, Vec<u64>>,
    /// Hypernym adjacency: child_id -> sorted parent IDs.
    parents: HashMap<u64, Vec<u64>>,
    /// Word index: word -> sorted IDs of the nodes containing it.
    word_index: HashMap<String, Vec<u64>>,
    /// Number of distinct edges.
    edge_count: usize,
}

impl SenseGraph {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self {
            nodes: HashMap::new(),
            children: HashMap::new(),
            parents: HashMap::new(),
            word_index: HashMap::new(),
            edge_count: 0,
        }
    }

    /// Insert a node and register each of its words.
    pub fn create_node<I, S>(&mut self, id: u64, words: I) -> LexResult<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if self.nodes.contains_key(&id) {
            return Err(LexError::DuplicateId(id));
        }
        let words: BTreeSet<String> = words.into_iter().map(Into::into).collect();
        if words.is_empty() {
            return Err(LexError::EmptySynset(id));
        }

        for word in &words {
            insert_sorted(self.word_index.entry(word.clone()).or_default(), id);
        }
        self.nodes.insert(id, SenseNode { id, words });
        Ok(())
    }

    /// Add a parent -> child edge, updating both adjacency maps.
    ///
    /// Self-edges are accepted; traversal tolerates the resulting cycle.
    pub fn add_edge(&mut self, parent_id: u64, child_id: u64) -> LexResult<()> {
        if !self.nodes.contains_key(&parent_id) {
            return Err(LexError::UnknownNode(parent_id));
        }
        if !self.nodes.contains_key(&child_id) {
            return Err(LexError::UnknownNode(child_id));
        }

        let added = insert_sorted(self.children.entry(parent_id).or_default(), child_id);
        insert_sorted(self.parents.entry(child_id).or_default(), parent_id);
        if added {
            self.edge_count += 1;
        }
        Ok(())
    }

    /// IDs of all nodes containing the word. Empty for unknown words.
    pub fn nodes_for(&self, word: &str) -> &[u64] {
        self.word_index
            .get(word)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// Words of a node.
    pub fn words_of(&self, node_id: u64) -> LexResult<&BTreeSet<String>> {
        self.nodes
            .get(&node_id)
            .map(|n| &n.words)
            .ok_or(LexError::UnknownNode(node_id))
    }

    /// Children (descendants) or parents (ancestors) of a node. Empty when it has none.
    pub fn neighbors(&self, node_id: u64, direction: Direction) -> &[u64] {
        let adjacency = match direction {
            Direction::Descendants => &self.children,
            Direction::Ancestors => &self.parents,
        };
        adjacency
            .get(&node_id)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// Get a node by ID.
    pub fn get_node(&self, id: u64) -> Option<&SenseNode> {
        self.nodes.get(&id)
    }

    /// Whether any node contains the word.
    pub fn contains_word(&self, word: &str) -> bool {
        self.word_index.contains_key(word)
    }

    /// All node IDs, ascending.
    pub fn node_ids(&self) -> Vec<u64> {
        let mut ids: Vec<u64> = self.nodes.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of distinct edges.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Number of distinct surface words.
    pub fn word_count(&self) -> usize {
        self.word_index.len()
    }
}

impl Default for SenseGraph {
    fn default() -> Self {
        Self::new()
    }
}

/// Insert into a sorted list, skipping duplicates. Returns whether it was new.
fn insert_sorted(list: &mut Vec<u64>, id: u64) -> bool {
    match list.binary_search(&id) {
        Ok(_) => false,
        Err(pos) => {
            list.insert(pos, id);
            true
        }
    }
}
