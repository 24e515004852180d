//! Weight-history reports for words and ranked closures.

use serde::Serialize;

use crate::index::{FrequencyIndex, FrequencySeries};
use crate::types::{LexResult, Query, DEFAULT_HYPOHIST_K};

use super::ClosureEngine;

/// A word with its relative frequency over a year range.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WordHistory {
    pub word: String,
    pub weights: FrequencySeries,
}

/// Builds weight histories from a frequency index.
pub struct HistoryEngine<'i> {
    index: &'i FrequencyIndex,
}

impl<'i> HistoryEngine<'i> {
    /// Create an engine over a built index.
    pub fn new(index: &'i FrequencyIndex) -> Self {
        Self { index }
    }

    /// One weight history per word, in the given order. Unknown words get an
    /// empty series.
    pub fn history<S: AsRef<str>>(
        &self,
        words: &[S],
        start_year: i32,
        end_year: i32,
    ) -> LexResult<Vec<WordHistory>> {
        let mut histories = Vec::with_capacity(words.len());
        for word in words {
            let word = word.as_ref();
            histories.push(WordHistory {
                word: word.to_string(),
                weights: self.index.weight_history(word, start_year, end_year)?,
            });
        }
        Ok(histories)
    }

    /// Weight histories of the top-ranked closure words.
    ///
    /// A query with `k == 0` is ranked with a bound of five.
    pub fn hypohist(
        &self,
        closure: &ClosureEngine<'_>,
        query: &Query,
    ) -> LexResult<Vec<WordHistory>> {
        let mut query = query.clone();
        if query.k == 0 {
            query.k = DEFAULT_HYPOHIST_K;
        }
        let ranked = closure.execute(&query, self.index)?;
        self.history(&ranked.into_words(), query.start_year, query.end_year)
    }
}
