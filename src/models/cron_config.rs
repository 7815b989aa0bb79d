//! Cron Configuration Model
//!
//! The mutable five-field state behind the cron generator. Each field
//! holds a raw token from the cron vocabulary (`*`, a literal, `*/N`,
//! `A-B`, or a comma list); validation lives in `generators::cron` so the
//! model itself stays a plain value type.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// The five cron fields, in canonical expression order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CronField {
    Minute,
    Hour,
    Day,
    Month,
    Weekday,
}

impl CronField {
    /// All fields in canonical order (minute, hour, day, month, weekday)
    pub const ALL: [CronField; 5] = [
        CronField::Minute,
        CronField::Hour,
        CronField::Day,
        CronField::Month,
        CronField::Weekday,
    ];

    /// Inclusive numeric range of valid literal values for the field
    pub fn valid_range(&self) -> (u32, u32) {
        match self {
            CronField::Minute => (0, 59),
            CronField::Hour => (0, 23),
            CronField::Day => (1, 31),
            CronField::Month => (1, 12),
            CronField::Weekday => (0, 6),
        }
    }

    /// Stable lowercase name, used in error messages
    pub fn name(&self) -> &'static str {
        match self {
            CronField::Minute => "minute",
            CronField::Hour => "hour",
            CronField::Day => "day",
            CronField::Month => "month",
            CronField::Weekday => "weekday",
        }
    }
}

/// The editable five-field cron configuration
///
/// Defaults to `*` in every field ("run every minute"). The struct is
/// never discarded by the UI; it is mutated field-by-field or replaced
/// wholesale by a template load, and the derived expression and
/// description are recomputed from it after every change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CronConfig {
    pub minute: String,
    pub hour: String,
    pub day: String,
    pub month: String,
    pub weekday: String,
}

impl Default for CronConfig {
    fn default() -> Self {
        Self {
            minute: "*".to_string(),
            hour: "*".to_string(),
            day: "*".to_string(),
            month: "*".to_string(),
            weekday: "*".to_string(),
        }
    }
}

impl CronConfig {
    /// Create the default configuration (every field `*`)
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a canonical five-field expression into a configuration
    ///
    /// Fields are assigned positionally. Anything other than exactly five
    /// whitespace-separated fields is rejected.
    pub fn from_expression(expression: &str) -> Result<Self> {
        let parts: Vec<&str> = expression.split_whitespace().collect();
        if parts.len() != 5 {
            return Err(Error::ScheduleFieldCount {
                expression: expression.to_string(),
                count: parts.len(),
            });
        }
        Ok(Self {
            minute: parts[0].to_string(),
            hour: parts[1].to_string(),
            day: parts[2].to_string(),
            month: parts[3].to_string(),
            weekday: parts[4].to_string(),
        })
    }

    /// Replace all five fields from a catalog template
    ///
    /// The replacement is wholesale; a malformed template leaves the
    /// configuration untouched.
    pub fn apply_template(&mut self, template: &crate::catalog::CronTemplate) -> Result<()> {
        *self = Self::from_expression(template.expression)?;
        Ok(())
    }

    /// Get the token for a field
    pub fn get(&self, field: CronField) -> &str {
        match field {
            CronField::Minute => &self.minute,
            CronField::Hour => &self.hour,
            CronField::Day => &self.day,
            CronField::Month => &self.month,
            CronField::Weekday => &self.weekday,
        }
    }

    /// Set the token for a field
    pub fn set(&mut self, field: CronField, token: impl Into<String>) {
        let token = token.into();
        match field {
            CronField::Minute => self.minute = token,
            CronField::Hour => self.hour = token,
            CronField::Day => self.day = token,
            CronField::Month => self.month = token,
            CronField::Weekday => self.weekday = token,
        }
    }

    /// All five tokens in canonical order
    pub fn fields(&self) -> [&str; 5] {
        [
            &self.minute,
            &self.hour,
            &self.day,
            &self.month,
            &self.weekday,
        ]
    }

    /// Restore the default configuration
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
