//! Readers for the textual data sources that feed the graph and the index.

pub mod ngrams;
pub mod wordnet;

pub use ngrams::NGramReader;
pub use wordnet::WordNetReader;

use std::str::FromStr;

use crate::types::{LexError, LexResult};

/// Parse one delimited field, naming the source and line on failure.
fn parse_field<T: FromStr>(
    field: Option<&str>,
    what: &str,
    source_name: &str,
    line: usize,
) -> LexResult<T> {
    let raw = field.map(str::trim).ok_or_else(|| LexError::Parse {
        source_name: source_name.to_string(),
        line,
        reason: format!("missing {}", what),
    })?;
    raw.parse().map_err(|_| LexError::Parse {
        source_name: source_name.to_string(),
        line,
        reason: format!("invalid {}: {:?}", what, raw),
    })
}
