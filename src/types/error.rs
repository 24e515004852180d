//! Error types for the lexigraph library.

use thiserror::Error;

/// All errors that can occur in the lexigraph library.
#[derive(Error, Debug)]
pub enum LexError {
    /// Frequency value is negative or not finite.
    #[error("Invalid frequency value: {0}")]
    InvalidValue(f64),

    /// Year range with start after end.
    #[error("Invalid year range: {start} > {end}")]
    InvalidRange { start: i32, end: i32 },

    /// A node with this ID already exists.
    #[error("Duplicate node ID: {0}")]
    DuplicateId(u64),

    /// Node not found by ID.
    #[error("Node ID {0} not found")]
    UnknownNode(u64),

    /// Node created without any surface words.
    #[error("Node {0} has no words")]
    EmptySynset(u64),

    /// Closure requested over zero words.
    #[error("Query has no words")]
    EmptyQuery,

    /// Malformed record in a textual data source.
    #[error("{source_name}:{line}: {reason}")]
    Parse {
        source_name: String,
        line: usize,
        reason: String,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result type for lexigraph operations.
pub type LexResult<T> = Result<T, LexError>;
