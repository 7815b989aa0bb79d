//! Error types and Result aliases for ExprBox

use std::fmt;
use std::path::PathBuf;

/// Result type alias for ExprBox operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for ExprBox
#[derive(Debug)]
pub enum Error {
    // === Schedule expression errors ===
    /// Expression does not split into the five cron fields
    ScheduleFieldCount {
        expression: String,
        count: usize,
    },

    /// A field token is outside the field's vocabulary or numeric range
    ScheduleFieldInvalid {
        field: String,
        token: String,
        reason: String,
    },

    // === Pattern errors ===
    /// Active pattern failed to compile
    PatternCompileFailed {
        pattern: String,
        reason: String,
    },

    // === Configuration errors ===
    /// Failed to load configuration file
    ConfigLoadFailed {
        path: PathBuf,
        reason: String,
    },

    /// Failed to save configuration file
    ConfigSaveFailed {
        path: PathBuf,
        reason: String,
    },

    /// Configuration file not found
    ConfigNotFound,

    /// Configuration validation failed
    ConfigValidationFailed {
        field: String,
        reason: String,
    },

    /// Failed to serialize configuration
    ConfigSerializationFailed {
        format: String,
        reason: String,
    },

    // === Clipboard errors ===
    /// Clipboard handle could not be acquired
    ClipboardUnavailable {
        reason: String,
    },

    /// Clipboard write failed
    ClipboardWriteFailed {
        reason: String,
    },

    // === I/O and serialization errors ===
    /// I/O errors
    Io(std::io::Error),

    /// Serialization errors
    Serde(serde_json::Error),

    /// TOML parsing errors
    Toml(toml::de::Error),

    // === Generic fallback (use sparingly) ===
    /// Generic errors (for cases not yet categorized)
    Other(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Schedule expression errors
            Error::ScheduleFieldCount { expression, count } => {
                write!(
                    f,
                    "Expression '{}' has {} fields, expected 5",
                    expression, count
                )
            }
            Error::ScheduleFieldInvalid {
                field,
                token,
                reason,
            } => {
                write!(f, "Invalid {} token '{}': {}", field, token, reason)
            }

            // Pattern errors
            Error::PatternCompileFailed { pattern, reason } => {
                write!(f, "Pattern '{}' failed to compile: {}", pattern, reason)
            }

            // Configuration errors
            Error::ConfigLoadFailed { path, reason } => {
                write!(f, "Failed to load config from '{}': {}", path.display(), reason)
            }
            Error::ConfigSaveFailed { path, reason } => {
                write!(f, "Failed to save config to '{}': {}", path.display(), reason)
            }
            Error::ConfigNotFound => {
                write!(f, "Configuration file not found")
            }
            Error::ConfigValidationFailed { field, reason } => {
                write!(f, "Configuration validation failed for '{}': {}", field, reason)
            }
            Error::ConfigSerializationFailed { format, reason } => {
                write!(f, "Failed to serialize config as {}: {}", format, reason)
            }

            // Clipboard errors
            Error::ClipboardUnavailable { reason } => {
                write!(f, "Clipboard unavailable: {}", reason)
            }
            Error::ClipboardWriteFailed { reason } => {
                write!(f, "Failed to write to clipboard: {}", reason)
            }

            // I/O and serialization errors
            Error::Io(err) => write!(f, "I/O error: {}", err),
            Error::Serde(err) => write!(f, "Serialization error: {}", err),
            Error::Toml(err) => write!(f, "TOML parsing error: {}", err),

            // Generic fallback
            Error::Other(msg) => write!(f, "Error: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serde(err)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Toml(err)
    }
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Error::Other(err.to_string())
    }
}

impl From<String> for Error {
    fn from(err: String) -> Self {
        Error::Other(err)
    }
}

impl From<&str> for Error {
    fn from(err: &str) -> Self {
        Error::Other(err.to_string())
    }
}
