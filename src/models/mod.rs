//! Core data models for ExprBox
//!
//! This module contains the core data structures that represent the
//! domain entities in ExprBox: the editable cron and pattern
//! configurations and the derived per-line match results.

pub mod cron_config;
pub mod match_result;
pub mod pattern_config;

// Re-exports for convenience
pub use cron_config::{CronConfig, CronField};
pub use match_result::{MatchResult, MatchSummary};
pub use pattern_config::PatternConfig;
