//! Reads synset and hyponym sources into a SenseGraph.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::graph::SenseGraph;
use crate::types::{LexError, LexResult};

use super::parse_field;

/// Reader for `id,words,definition` synsets plus `parent,child,...` hyponyms.
pub struct WordNetReader;

impl WordNetReader {
    /// Read both sources from disk.
    pub fn read_from_files(synsets: &Path, hyponyms: &Path) -> LexResult<SenseGraph> {
        let synsets_reader = BufReader::new(File::open(synsets)?);
        let hyponyms_reader = BufReader::new(File::open(hyponyms)?);
        let graph = Self::read_from(synsets_reader, hyponyms_reader)?;
        log::info!(
            "Loaded {} synsets, {} edges from {} and {}",
            graph.node_count(),
            graph.edge_count(),
            synsets.display(),
            hyponyms.display()
        );
        Ok(graph)
    }

    /// Read from any pair of buffered readers. Nodes first, then edges.
    pub fn read_from(synsets: impl BufRead, hyponyms: impl BufRead) -> LexResult<SenseGraph> {
        let mut graph = SenseGraph::new();
        read_synsets(&mut graph, synsets)?;
        read_hyponyms(&mut graph, hyponyms)?;
        Ok(graph)
    }
}

fn read_synsets(graph: &mut SenseGraph, reader: impl BufRead) -> LexResult<()> {
    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = i + 1;
        if line.trim().is_empty() {
            continue;
        }

        // The definition may contain commas; only the first two fields matter.
        let mut fields = line.splitn(3, ',');
        let id: u64 = parse_field(fields.next(), "synset id", "synsets", line_no)?;
        let words = fields.next().ok_or_else(|| LexError::Parse {
            source_name: "synsets".to_string(),
            line: line_no,
            reason: "missing words".to_string(),
        })?;
        graph.create_node(id, words.split_whitespace())?;
    }
    Ok(())
}

fn read_hyponyms(graph: &mut SenseGraph, reader: impl BufRead) -> LexResult<()> {
    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = i + 1;
        if line.trim().is_empty() {
            continue;
        }

        let mut fields = line.split(',');
        let parent_id: u64 = parse_field(fields.next(), "parent id", "hyponyms", line_no)?;
        for field in fields {
            if field.trim().is_empty() {
                continue;
            }
            let child_id: u64 = parse_field(Some(field), "child id", "hyponyms", line_no)?;
            graph.add_edge(parent_id, child_id)?;
        }
    }
    Ok(())
}
