//! Match Result Model
//!
//! The per-line outcome of applying the active pattern to the sample
//! text, plus the aggregate summary shown under the result list. Results
//! are derived values; they are rebuilt in full on every evaluation and
//! never mutated in place.

use serde::{Deserialize, Serialize};

/// Outcome of testing one sample line against the active pattern
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    /// The trimmed sample line that was tested
    pub text: String,
    /// Whether the pattern matched the line
    pub is_match: bool,
    /// Captured substrings, whole match first, then participating groups
    pub captures: Vec<String>,
}

impl MatchResult {
    /// Record a non-matching line
    pub fn miss(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_match: false,
            captures: Vec::new(),
        }
    }

    /// Record a matching line with its captured substrings
    pub fn hit(text: impl Into<String>, captures: Vec<String>) -> Self {
        Self {
            text: text.into(),
            is_match: true,
            captures,
        }
    }
}

/// Aggregate counts over one evaluation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSummary {
    pub total: usize,
    pub matched: usize,
    pub unmatched: usize,
}

impl MatchSummary {
    /// Tally a result list
    pub fn from_results(results: &[MatchResult]) -> Self {
        let matched = results.iter().filter(|r| r.is_match).count();
        Self {
            total: results.len(),
            matched,
            unmatched: results.len() - matched,
        }
    }
}
