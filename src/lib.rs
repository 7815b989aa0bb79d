//! ExprBox - a desktop developer toolbox for expression generation
//!
//! This library provides the core functionality for ExprBox, a small GUI
//! toolbox offering two form-driven generators and a localized
//! documentation viewer.
//!
//! ## Features
//!
//! - **Cron builder:** Five-field configuration with option menus,
//!   common templates, and a derived expression plus natural-language
//!   description
//! - **Regex lab:** Template or custom patterns compiled with the
//!   `regex` crate and tested line-by-line against sample text
//! - **Localization:** Chinese and English UI via a closed message-key
//!   enum
//! - **Configuration:** TOML configuration files for UI settings
//!
//! ## Module Organization
//!
//! ### Core Functionality
//!
//! - [`catalog`] - Fixed template and option catalogs for both generators
//! - [`models`] - Editable configurations and derived match results
//! - [`generators`] - Pure derivation and evaluation functions
//! - [`config`] - Configuration loading, validation, persistence
//! - [`mod@error`] - Error types and Result aliases
//!
//! ### UI Components
//!
//! - [`ui`] - The egui views (generator panels, home, docs, toasts)
//! - [`i18n`] - Language handling and message lookup
//! - [`docs`] - Bundled README parsing for the documentation view
//!
//! ## Architecture
//!
//! Everything runs synchronously on the egui UI thread. The derived
//! outputs (expression string, description, match results) are pure
//! functions of the current configuration; input handlers mutate the
//! configuration and the next frame re-derives. Derivation is O(field
//! count) for the cron builder and O(sample line count) for the regex
//! lab, so there is no debouncing and no caching beyond a dirty flag.
//!
//! ## Safety and Reliability
//!
//! - **No Panics:** All fallible operations return `Result`
//! - **Graceful Degradation:** Falls back to defaults when config
//!   loading fails; an invalid regex becomes an explicit UI state, never
//!   an error that crosses into rendering

#![allow(unexpected_cfgs)]

pub mod catalog;
pub mod config;
pub mod docs;
pub mod error;
pub mod generators;
pub mod i18n;
pub mod models;
pub mod ui;

// Re-exports for core functionality
pub use config::{Config, UiConfig};
pub use error::{Error, Result};
pub use i18n::Language;

// Convenience re-exports for common types
pub use config::loader::ConfigLoader;
pub use models::{CronConfig, CronField, MatchResult, MatchSummary, PatternConfig};

// Version information
/// The current version of ExprBox from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The application name from Cargo.toml
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// The application description from Cargo.toml
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Initialize ExprBox with default settings
///
/// Loads the configuration from the standard locations, falling back to
/// the defaults when no file exists or the file is unreadable.
pub fn init() -> Result<Config> {
    let config = ConfigLoader::new().load()?;
    tracing::info!(
        "{} v{} initialized (language: {})",
        NAME,
        VERSION,
        config.language
    );
    Ok(config)
}
