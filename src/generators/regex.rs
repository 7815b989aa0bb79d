//! Pattern validation and match evaluation
//!
//! The regex generator's derivation step: compile the active pattern,
//! then apply it independently to every non-blank sample line. The whole
//! outcome for one (pattern, sample) snapshot is an [`Evaluation`]; a
//! compile failure is data carried in it, never a panic crossing into the
//! presentation layer.
//!
//! Matching is delegated entirely to the `regex` crate; there is no
//! custom engine here.

use regex::Regex;

use crate::error::{Error, Result};
use crate::models::{MatchResult, MatchSummary, PatternConfig};

/// The validation state of the regex generator
///
/// Driven solely by the active pattern string and the sample text; every
/// evaluation recomputes it from scratch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PatternStatus {
    /// No active pattern
    #[default]
    Empty,
    /// Non-empty pattern that fails to compile
    Invalid,
    /// Pattern compiles but there is no sample text to test
    ValidNoInput,
    /// Pattern compiles and per-line results are present
    Evaluated,
}

/// The full derived output of one evaluation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Evaluation {
    pub status: PatternStatus,
    /// Compile failure reason when `status` is `Invalid`
    pub error: Option<String>,
    /// Per-line results when `status` is `Evaluated`, in input order
    pub results: Vec<MatchResult>,
    pub summary: MatchSummary,
}

impl Evaluation {
    fn with_status(status: PatternStatus) -> Self {
        Self {
            status,
            ..Self::default()
        }
    }

    /// Whether the active pattern compiled (or no pattern is set)
    pub fn is_valid(&self) -> bool {
        self.status != PatternStatus::Invalid
    }
}

/// Compile a pattern, mapping the engine error to a descriptive failure
pub fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|e| Error::PatternCompileFailed {
        pattern: pattern.to_string(),
        reason: e.to_string(),
    })
}

/// Derive the evaluation for the current configuration
///
/// The matcher is built once and reused for every line. Sample lines are
/// split on newlines, trimmed, and blank lines are discarded before
/// evaluation; results preserve input order.
pub fn evaluate(config: &PatternConfig) -> Evaluation {
    let pattern = config.active_pattern();
    if pattern.is_empty() {
        return Evaluation::with_status(PatternStatus::Empty);
    }

    let matcher = match compile(pattern) {
        Ok(matcher) => matcher,
        Err(e) => {
            // Do not retain stale results from a previously valid pattern.
            return Evaluation {
                status: PatternStatus::Invalid,
                error: Some(e.to_string()),
                results: Vec::new(),
                summary: MatchSummary::default(),
            };
        }
    };

    let lines: Vec<&str> = config
        .sample_text
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    if lines.is_empty() {
        return Evaluation::with_status(PatternStatus::ValidNoInput);
    }

    let results: Vec<MatchResult> = lines
        .iter()
        .map(|line| match matcher.captures(line) {
            Some(caps) => {
                let captures = caps
                    .iter()
                    .flatten()
                    .map(|m| m.as_str().to_string())
                    .collect();
                MatchResult::hit(*line, captures)
            }
            None => MatchResult::miss(*line),
        })
        .collect();

    let summary = MatchSummary::from_results(&results);
    Evaluation {
        status: PatternStatus::Evaluated,
        error: None,
        results,
        summary,
    }
}
