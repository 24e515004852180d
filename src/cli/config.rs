//! Data source locations for the command layer.

use std::path::PathBuf;

use clap::ValueEnum;

use crate::format::{NGramReader, WordNetReader};
use crate::graph::SenseGraph;
use crate::index::FrequencyIndex;
use crate::types::LexResult;

/// Default synsets source.
pub const DEFAULT_SYNSETS: &str = "./data/wordnet/synsets.txt";
/// Default hyponyms source.
pub const DEFAULT_HYPONYMS: &str = "./data/wordnet/hyponyms.txt";
/// Default word-count source.
pub const DEFAULT_WORDS: &str = "./data/ngrams/top_14377_words.csv";
/// Default total-count source.
pub const DEFAULT_COUNTS: &str = "./data/ngrams/total_counts.csv";

/// Rendering of command output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

impl OutputFormat {
    pub fn is_json(self) -> bool {
        self == OutputFormat::Json
    }
}

/// Paths of the four textual data sources.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataPaths {
    pub synsets: PathBuf,
    pub hyponyms: PathBuf,
    pub words: PathBuf,
    pub counts: PathBuf,
}

impl DataPaths {
    /// Load the sense graph from the synsets and hyponyms sources.
    pub fn load_graph(&self) -> LexResult<SenseGraph> {
        WordNetReader::read_from_files(&self.synsets, &self.hyponyms)
    }

    /// Load the frequency index from the word and total count sources.
    pub fn load_index(&self) -> LexResult<FrequencyIndex> {
        NGramReader::read_from_files(&self.words, &self.counts)
    }
}

impl Default for DataPaths {
    fn default() -> Self {
        Self {
            synsets: PathBuf::from(DEFAULT_SYNSETS),
            hyponyms: PathBuf::from(DEFAULT_HYPONYMS),
            words: PathBuf::from(DEFAULT_WORDS),
            counts: PathBuf::from(DEFAULT_COUNTS),
        }
    }
}
