//! Lexigraph — lexical-relation query engine.
//!
//! Holds a directed graph of word senses (synsets) and a per-word frequency
//! history index, and answers hyponym/hypernym closure queries whose results
//! are ranked by how often each word occurs over a range of years.

pub mod cli;
pub mod engine;
pub mod format;
pub mod graph;
pub mod index;
pub mod types;

// Re-export commonly used types at the crate root
pub use engine::{ClosureEngine, HistoryEngine, WordHistory};
pub use format::{NGramReader, WordNetReader};
pub use graph::{SenseGraph, SenseGraphBuilder, SenseNode};
pub use index::{FrequencyIndex, FrequencySeries};
pub use types::{
    Direction, LexError, LexResult, Query, RankedResult, RankedWord, DEFAULT_HYPOHIST_K, MAX_YEAR,
    MIN_YEAR,
};
