//! Configuration management for ExprBox
//!
//! Persistent application settings: UI preferences and the active
//! language. Generator state (the cron fields, the active pattern, the
//! sample text) is deliberately not persisted; only these settings
//! survive a restart.

pub mod loader;

pub use loader::{ConfigLoader, LoadOptions};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::i18n::Language;

/// Main configuration structure for ExprBox
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Active UI language
    pub language: Language,

    /// UI configuration
    pub ui: UiConfig,
}

/// UI-related configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Base font size in points
    pub font_size: f32,

    /// Initial window width in logical pixels
    pub window_width: f32,

    /// Initial window height in logical pixels
    pub window_height: f32,

    /// How long a toast notification stays visible, in milliseconds
    pub toast_duration_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            font_size: 14.0,
            window_width: 1100.0,
            window_height: 760.0,
            toast_duration_ms: 3000,
        }
    }
}

impl Config {
    /// Validate the configuration values
    pub fn validate(&self) -> Result<()> {
        if !(8.0..=32.0).contains(&self.ui.font_size) {
            return Err(Error::ConfigValidationFailed {
                field: "ui.font_size".to_string(),
                reason: format!("{} is outside 8-32", self.ui.font_size),
            });
        }
        if self.ui.window_width < 400.0 || self.ui.window_height < 300.0 {
            return Err(Error::ConfigValidationFailed {
                field: "ui.window_width/window_height".to_string(),
                reason: "window must be at least 400x300".to_string(),
            });
        }
        if self.ui.toast_duration_ms == 0 {
            return Err(Error::ConfigValidationFailed {
                field: "ui.toast_duration_ms".to_string(),
                reason: "must be greater than zero".to_string(),
            });
        }
        Ok(())
    }
}
