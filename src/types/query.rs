//! Query values and ranked results.

use serde::Serialize;

use super::{Direction, LexError, LexResult, MAX_YEAR, MIN_YEAR};

/// A single closure/ranking request. Ephemeral, never stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Query {
    /// Query words, in caller order.
    pub words: Vec<String>,
    /// First year of the counting window (inclusive).
    pub start_year: i32,
    /// Last year of the counting window (inclusive).
    pub end_year: i32,
    /// Result bound: `< 0` yields nothing, `0` is unbounded, `> 0` keeps the top K.
    pub k: i64,
    /// Edge direction to follow.
    pub direction: Direction,
}

impl Query {
    /// Start a descendants query over the full year range with no bound.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
            start_year: MIN_YEAR,
            end_year: MAX_YEAR,
            k: 0,
            direction: Direction::Descendants,
        }
    }

    /// Restrict the counting window.
    pub fn years(mut self, start_year: i32, end_year: i32) -> Self {
        self.start_year = start_year;
        self.end_year = end_year;
        self
    }

    /// Set the result bound.
    pub fn k(mut self, k: i64) -> Self {
        self.k = k;
        self
    }

    /// Set the traversal direction.
    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Check the query-level preconditions: at least one word and an ordered range.
    pub fn validate(&self) -> LexResult<()> {
        if self.words.is_empty() {
            return Err(LexError::EmptyQuery);
        }
        if self.start_year > self.end_year {
            return Err(LexError::InvalidRange {
                start: self.start_year,
                end: self.end_year,
            });
        }
        Ok(())
    }
}

/// One word of a ranked result with its in-range occurrence count.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedWord {
    pub word: String,
    pub score: f64,
}

/// Ordered (word, score) pairs returned for a query, alphabetical by word.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RankedResult {
    pub entries: Vec<RankedWord>,
}

impl RankedResult {
    /// Result with no entries.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The words alone, in result order.
    pub fn words(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.word.clone()).collect()
    }

    /// Consume the result, keeping only the words.
    pub fn into_words(self) -> Vec<String> {
        self.entries.into_iter().map(|e| e.word).collect()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the result is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
