//! Pattern Configuration Model
//!
//! The mutable state behind the regex generator: a template-selected
//! pattern, a custom pattern, and the multi-line sample text. At most one
//! of the two pattern sources is non-empty at a time; the custom pattern
//! always wins and clears the template selection.

use serde::{Deserialize, Serialize};

use crate::catalog::RegexTemplate;

/// Editable state of the regex generator
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternConfig {
    /// Pattern taken from a selected template (empty when none selected)
    pub template_pattern: String,
    /// Pattern typed directly by the user (empty when none entered)
    pub custom_pattern: String,
    /// Sample text; one test line per newline-separated line
    pub sample_text: String,
}

impl PatternConfig {
    /// Create the default (all-empty) configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// The pattern currently in effect: custom entry wins over a template
    pub fn active_pattern(&self) -> &str {
        if !self.custom_pattern.is_empty() {
            &self.custom_pattern
        } else {
            &self.template_pattern
        }
    }

    /// Whether any pattern is active
    pub fn has_pattern(&self) -> bool {
        !self.active_pattern().is_empty()
    }

    /// Select a template: load its pattern and example, drop custom entry
    pub fn select_template(&mut self, template: &RegexTemplate) {
        self.template_pattern = template.pattern.to_string();
        self.custom_pattern.clear();
        self.sample_text = template.example.to_string();
    }

    /// Enter a custom pattern, clearing any template selection
    ///
    /// An empty custom pattern leaves the template selection alone so a
    /// cleared text box falls back to the selected template.
    pub fn set_custom_pattern(&mut self, pattern: impl Into<String>) {
        self.custom_pattern = pattern.into();
        if !self.custom_pattern.is_empty() {
            self.template_pattern.clear();
        }
    }

    /// Replace the sample text
    pub fn set_sample_text(&mut self, text: impl Into<String>) {
        self.sample_text = text.into();
    }

    /// Restore the all-empty default state
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
