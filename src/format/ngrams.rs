//! Reads word-count and total-count sources into a FrequencyIndex.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::index::FrequencyIndex;
use crate::types::{LexError, LexResult};

use super::parse_field;

/// Reader for `word\tyear\tcount[\tvolumes]` and `year,total[,...]` sources.
pub struct NGramReader;

impl NGramReader {
    /// Read both sources from disk.
    pub fn read_from_files(words: &Path, counts: &Path) -> LexResult<FrequencyIndex> {
        let words_reader = BufReader::new(File::open(words)?);
        let counts_reader = BufReader::new(File::open(counts)?);
        let index = Self::read_from(words_reader, counts_reader)?;
        log::info!(
            "Loaded {} words over {} years from {} and {}",
            index.word_count(),
            index.year_count(),
            words.display(),
            counts.display()
        );
        Ok(index)
    }

    /// Read from any pair of buffered readers.
    pub fn read_from(words: impl BufRead, counts: impl BufRead) -> LexResult<FrequencyIndex> {
        let mut index = FrequencyIndex::new();
        read_words(&mut index, words)?;
        read_counts(&mut index, counts)?;
        Ok(index)
    }
}

fn read_words(index: &mut FrequencyIndex, reader: impl BufRead) -> LexResult<()> {
    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = i + 1;
        if line.trim().is_empty() {
            continue;
        }

        let mut fields = line.split('\t');
        let word = fields
            .next()
            .filter(|w| !w.is_empty())
            .ok_or_else(|| LexError::Parse {
                source_name: "words".to_string(),
                line: line_no,
                reason: "missing word".to_string(),
            })?;
        let year: i32 = parse_field(fields.next(), "year", "words", line_no)?;
        let count: f64 = parse_field(fields.next(), "count", "words", line_no)?;
        index.record(word, year, count)?;
    }
    Ok(())
}

fn read_counts(index: &mut FrequencyIndex, reader: impl BufRead) -> LexResult<()> {
    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = i + 1;
        if line.trim().is_empty() {
            continue;
        }

        let mut fields = line.split(',');
        let year: i32 = parse_field(fields.next(), "year", "counts", line_no)?;
        let total: f64 = parse_field(fields.next(), "total", "counts", line_no)?;
        index.set_total(year, total)?;
    }
    Ok(())
}
