//! Expression derivation and evaluation
//!
//! Pure functions turning the editable configurations into their derived
//! outputs: the canonical cron expression and its natural-language
//! description, and the compile-and-test evaluation of the active regex
//! pattern. Nothing here holds state; derive twice on an unchanged
//! configuration and the outputs are identical.

pub mod cron;
pub mod regex;

pub use regex::{evaluate, Evaluation, PatternStatus};
