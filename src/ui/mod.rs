//! UI components and rendering
//!
//! This module contains the egui components for ExprBox: the generator
//! panels, the home and documentation views, and the toast overlay. The
//! panels own their editable configuration and read derived values from
//! the generator functions; they never compute matches or expressions
//! themselves.

pub mod cron_panel;
pub mod docs_panel;
pub mod home_panel;
pub mod regex_panel;
pub mod toasts;

// Re-exports for convenience
pub use cron_panel::CronPanel;
pub use docs_panel::DocsPanel;
pub use home_panel::HomePanel;
pub use regex_panel::RegexPanel;
pub use toasts::{ToastLevel, Toasts};

use crate::error::{Error, Result};

/// The selectable application views
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Home,
    Cron,
    Regex,
    Docs,
}

/// Write text to the system clipboard
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut clipboard = arboard::Clipboard::new().map_err(|e| Error::ClipboardUnavailable {
        reason: e.to_string(),
    })?;
    clipboard
        .set_text(text.to_string())
        .map_err(|e| Error::ClipboardWriteFailed {
            reason: e.to_string(),
        })
}
