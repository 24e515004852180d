//! Closure engine — word closures, multi-word intersection and top-K ranking.

use std::cmp::{Ordering, Reverse};
use std::collections::{BTreeSet, BinaryHeap};

use crate::graph::traversal::reachable_words;
use crate::graph::SenseGraph;
use crate::index::FrequencyIndex;
use crate::types::{Direction, LexError, LexResult, Query, RankedResult, RankedWord};

/// A ranking candidate. Ordered by score, then by reversed word so that among
/// equal scores the alphabetically later word is the smaller one and is
/// evicted first.
struct Candidate {
    score: f64,
    word: String,
}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.score
            .total_cmp(&other.score)
            .then_with(|| other.word.cmp(&self.word))
    }
}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Candidate {}

/// Answers closure and ranking queries over a read-only sense graph.
pub struct ClosureEngine<'g> {
    graph: &'g SenseGraph,
}

impl<'g> ClosureEngine<'g> {
    /// Create an engine over a built graph.
    pub fn new(graph: &'g SenseGraph) -> Self {
        Self { graph }
    }

    /// The graph this engine reads.
    pub fn graph(&self) -> &'g SenseGraph {
        self.graph
    }

    /// Every word reachable from any node containing `word`, the word itself
    /// included. Empty for unknown words.
    pub fn closure_of(&self, word: &str, direction: Direction) -> BTreeSet<String> {
        let start_ids = self.graph.nodes_for(word);
        if start_ids.is_empty() {
            return BTreeSet::new();
        }
        reachable_words(self.graph, start_ids, direction)
    }

    /// Words reachable from every one of `words`, sorted ascending.
    pub fn closure<S: AsRef<str>>(
        &self,
        words: &[S],
        direction: Direction,
    ) -> LexResult<Vec<String>> {
        let (first, rest) = words.split_first().ok_or(LexError::EmptyQuery)?;

        let mut common = self.closure_of(first.as_ref(), direction);
        for word in rest {
            if common.is_empty() {
                break;
            }
            let next = self.closure_of(word.as_ref(), direction);
            common.retain(|w| next.contains(w));
        }

        log::debug!(
            "closure of {} word(s) ({}): {} result(s)",
            words.len(),
            direction,
            common.len()
        );
        Ok(common.into_iter().collect())
    }

    /// Up to `k` closure words with the highest in-range counts, alphabetical.
    ///
    /// `k < 0` returns nothing, `k == 0` returns the whole closure unranked.
    /// Any `k >= 0`, zero included, first validates the query: no words fails
    /// with `EmptyQuery` and `start_year > end_year` with `InvalidRange`.
    pub fn top_k<S: AsRef<str>>(
        &self,
        words: &[S],
        start_year: i32,
        end_year: i32,
        k: i64,
        direction: Direction,
        index: &FrequencyIndex,
    ) -> LexResult<Vec<String>> {
        let query = Query {
            words: words.iter().map(|w| w.as_ref().to_string()).collect(),
            start_year,
            end_year,
            k,
            direction,
        };
        Ok(self.execute(&query, index)?.into_words())
    }

    /// Run the full ranking pipeline, keeping each word's score.
    ///
    /// Validation follows `top_k`: skipped for `k < 0`, applied otherwise.
    pub fn execute(&self, query: &Query, index: &FrequencyIndex) -> LexResult<RankedResult> {
        if query.k < 0 {
            return Ok(RankedResult::empty());
        }
        query.validate()?;

        let candidates = self.closure(&query.words, query.direction)?;

        if query.k == 0 {
            let mut entries = Vec::with_capacity(candidates.len());
            for word in candidates {
                let score = index
                    .count_history(&word, query.start_year, query.end_year)?
                    .total();
                entries.push(RankedWord { word, score });
            }
            return Ok(RankedResult { entries });
        }

        let k = usize::try_from(query.k).unwrap_or(usize::MAX);
        let candidate_count = candidates.len();
        let mut heap: BinaryHeap<Reverse<Candidate>> = BinaryHeap::new();

        for word in candidates {
            let score = index
                .count_history(&word, query.start_year, query.end_year)?
                .total();
            if score <= 0.0 {
                continue;
            }
            heap.push(Reverse(Candidate { score, word }));
            if heap.len() > k {
                heap.pop();
            }
        }

        let mut entries: Vec<RankedWord> = heap
            .into_iter()
            .map(|Reverse(c)| RankedWord {
                word: c.word,
                score: c.score,
            })
            .collect();
        entries.sort_by(|a, b| a.word.cmp(&b.word));

        log::debug!(
            "top {} of {} candidate(s) for {:?}: kept {}",
            k,
            candidate_count,
            query.words,
            entries.len()
        );
        Ok(RankedResult { entries })
    }
}
