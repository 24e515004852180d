//! Per-word count histories plus the global per-year totals.

use std::collections::HashMap;

use crate::types::{LexResult, MAX_YEAR, MIN_YEAR};

use super::FrequencySeries;

/// Word -> count series, and year -> total count across all words.
///
/// Built once from external data, read-only afterwards.
#[derive(Debug)]
pub struct FrequencyIndex {
    /// Count history per known word.
    words: HashMap<String, FrequencySeries>,
    /// Total recorded words per year.
    totals: FrequencySeries,
}

impl FrequencyIndex {
    /// Create a new, empty index.
    pub fn new() -> Self {
        Self {
            words: HashMap::new(),
            totals: FrequencySeries::new(),
        }
    }

    /// Accumulate one (word, year, count) observation. Repeats for the same
    /// word and year are summed.
    pub fn record(&mut self, word: &str, year: i32, count: f64) -> LexResult<()> {
        if let Some(series) = self.words.get_mut(word) {
            return series.add(year, count);
        }
        let mut series = FrequencySeries::new();
        series.put(year, count)?;
        self.words.insert(word.to_string(), series);
        Ok(())
    }

    /// Set the total word count for a year. A repeated year overwrites.
    pub fn set_total(&mut self, year: i32, total: f64) -> LexResult<()> {
        if self.totals.contains_year(year) {
            log::warn!(
                "Total count for {} recorded twice, keeping {} over {}",
                year,
                total,
                self.totals.get(year)
            );
        }
        self.totals.put(year, total)
    }

    /// The word's count history within the range. Empty for unknown words.
    pub fn count_history(
        &self,
        word: &str,
        start_year: i32,
        end_year: i32,
    ) -> LexResult<FrequencySeries> {
        match self.words.get(word) {
            Some(series) => series.slice(start_year, end_year),
            None => FrequencySeries::new().slice(start_year, end_year),
        }
    }

    /// The word's count history over `MIN_YEAR..=MAX_YEAR`.
    pub fn count_history_all(&self, word: &str) -> FrequencySeries {
        self.words
            .get(word)
            .map(|series| series.within(MIN_YEAR, MAX_YEAR))
            .unwrap_or_default()
    }

    /// Copy of the per-year totals.
    pub fn total_count_history(&self) -> FrequencySeries {
        self.totals.clone()
    }

    /// Relative frequency per year: word count over that year's total.
    ///
    /// Years without a positive recorded total are omitted.
    pub fn weight_history(
        &self,
        word: &str,
        start_year: i32,
        end_year: i32,
    ) -> LexResult<FrequencySeries> {
        let counts = self.count_history(word, start_year, end_year)?;
        Ok(counts.ratio_over(&self.totals))
    }

    /// Relative frequency of a word over `MIN_YEAR..=MAX_YEAR`.
    pub fn weight_history_all(&self, word: &str) -> FrequencySeries {
        self.count_history_all(word).ratio_over(&self.totals)
    }

    /// Sum of the weight histories of all given words. Unknown words add nothing.
    pub fn summed_weight_history<S: AsRef<str>>(
        &self,
        words: &[S],
        start_year: i32,
        end_year: i32,
    ) -> LexResult<FrequencySeries> {
        let mut summed = FrequencySeries::new().slice(start_year, end_year)?;
        for word in words {
            summed = summed.plus(&self.weight_history(word.as_ref(), start_year, end_year)?);
        }
        Ok(summed)
    }

    /// Summed weight history over `MIN_YEAR..=MAX_YEAR`.
    pub fn summed_weight_history_all<S: AsRef<str>>(&self, words: &[S]) -> FrequencySeries {
        words.iter().fold(FrequencySeries::new(), |summed, word| {
            summed.plus(&self.weight_history_all(word.as_ref()))
        })
    }

    /// Whether any observation was recorded for this word.
    pub fn contains_word(&self, word: &str) -> bool {
        self.words.contains_key(word)
    }

    /// Number of distinct words.
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Number of years with a recorded total.
    pub fn year_count(&self) -> usize {
        self.totals.len()
    }
}

impl Default for FrequencyIndex {
    fn default() -> Self {
        Self::new()
    }
}
