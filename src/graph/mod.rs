//! In-memory sense graph — the core data structure.

pub mod builder;
pub mod sense_graph;
pub mod traversal;

pub use builder::SenseGraphBuilder;
pub use sense_graph::{SenseGraph, SenseNode};
pub use traversal::{reachable_nodes, reachable_words};
