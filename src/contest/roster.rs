//! Contest roster: one contest's final ranking

use crate::types::ContestantId;

/// Read-only ordered list of contestant identifiers, best first
///
/// Rank is implied by position: index 0 finished first. The roster is pure
/// data and performs no validation of its own; the engine owns the failure
/// semantics for empty or duplicate-laden rosters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContestRoster {
    entrants: Vec<ContestantId>,
}

impl ContestRoster {
    /// Create a roster from an already-ordered list of identifiers
    pub fn new(entrants: Vec<ContestantId>) -> Self {
        Self { entrants }
    }

    /// Parse a line-oriented listing, one identifier per line, best first
    ///
    /// Surrounding whitespace is trimmed and blank lines are skipped.
    pub fn from_lines(text: &str) -> Self {
        Self::new(
            text.lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(str::to_string)
                .collect(),
        )
    }

    /// The ranked identifiers, best first
    pub fn entrants(&self) -> &[ContestantId] {
        &self.entrants
    }

    /// Number of entrants
    pub fn len(&self) -> usize {
        self.entrants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entrants.is_empty()
    }
}
