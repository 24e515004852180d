//! All data types for the lexigraph library.

pub mod direction;
pub mod error;
pub mod query;

pub use direction::Direction;
pub use error::{LexError, LexResult};
pub use query::{Query, RankedResult, RankedWord};

/// Earliest year covered by an unbounded history.
pub const MIN_YEAR: i32 = 1400;

/// Latest year covered by an unbounded history.
pub const MAX_YEAR: i32 = 2100;

/// Result bound used by `hypohist` reports when the query asks for `k == 0`.
pub const DEFAULT_HYPOHIST_K: i64 = 5;
