//! High-level operations — closure engine and history reports.

pub mod closure;
pub mod history;

pub use closure::ClosureEngine;
pub use history::{HistoryEngine, WordHistory};
