//! Fluent API for building SenseGraph instances.

use std::collections::BTreeSet;

use crate::types::LexResult;

use super::SenseGraph;

/// Fluent builder for constructing a SenseGraph.
///
/// Nodes and edges are buffered and validated on [`build`](Self::build), so
/// edges may be declared before the nodes they reference.
pub struct SenseGraphBuilder {
    nodes: Vec<(u64, BTreeSet<String>)>,
    edges: Vec<(u64, u64)>,
}

impl SenseGraphBuilder {
    /// Create a new, empty builder.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Add a sense node with its words.
    pub fn node<I, S>(&mut self, id: u64, words: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.nodes
            .push((id, words.into_iter().map(Into::into).collect()));
        self
    }

    /// Add a parent -> child edge.
    pub fn edge(&mut self, parent_id: u64, child_id: u64) -> &mut Self {
        self.edges.push((parent_id, child_id));
        self
    }

    /// Add one edge from the parent to each child.
    pub fn edges(&mut self, parent_id: u64, child_ids: &[u64]) -> &mut Self {
        for &child_id in child_ids {
            self.edges.push((parent_id, child_id));
        }
        self
    }

    /// Build the final SenseGraph.
    pub fn build(self) -> LexResult<SenseGraph> {
        let mut graph = SenseGraph::new();
        for (id, words) in self.nodes {
            graph.create_node(id, words)?;
        }
        for (parent_id, child_id) in self.edges {
            graph.add_edge(parent_id, child_id)?;
        }
        Ok(graph)
    }
}

impl Default for SenseGraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}
