//! Command layer behind the `lexi` binary.

pub mod commands;
pub mod config;

pub use config::{DataPaths, OutputFormat};
