//! Traversal direction through the sense graph.

use serde::Serialize;

/// Which adjacency a closure follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Follow child edges: hyponyms, more specific senses.
    Descendants,
    /// Follow parent edges: hypernyms, more general senses.
    Ancestors,
}

impl Direction {
    /// Return a human-readable name for this direction.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Descendants => "descendants",
            Self::Ancestors => "ancestors",
        }
    }

    /// Parse a direction from a string name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "descendants" | "hyponyms" | "down" => Some(Self::Descendants),
            "ancestors" | "hypernyms" | "up" => Some(Self::Ancestors),
            _ => None,
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
