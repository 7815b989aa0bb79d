//! Cron expression derivation
//!
//! Turns a [`CronConfig`] into its canonical five-field expression string
//! and a best-effort natural-language description. The description
//! inspects each field token's shape and emits a clause per field (hour,
//! day, month and weekday are skipped when `*`); it never computes actual
//! next-run timestamps.
//!
//! [`validate_field`] checks range correctness for the tokens the UI can
//! produce: `*`, in-range literals, `*/N` steps, `A-B` ranges, and comma
//! lists of literals and ranges.

use crate::error::{Error, Result};
use crate::i18n::Language;
use crate::models::{CronConfig, CronField};

/// The canonical expression: five field tokens joined by single spaces
pub fn expression(config: &CronConfig) -> String {
    config.fields().join(" ")
}

/// A natural-language description of the configured schedule
pub fn describe(config: &CronConfig, lang: Language) -> String {
    match lang {
        Language::Zh => describe_zh(config),
        Language::En => describe_en(config),
    }
}

fn describe_zh(config: &CronConfig) -> String {
    let mut parts = Vec::new();

    if config.minute == "*" {
        parts.push("每分钟".to_string());
    } else if let Some(step) = config.minute.strip_prefix("*/") {
        parts.push(format!("每{}分钟", step));
    } else {
        parts.push(format!("第{}分钟", config.minute));
    }

    if config.hour != "*" {
        if let Some(step) = config.hour.strip_prefix("*/") {
            parts.push(format!("每{}小时", step));
        } else {
            parts.push(format!("{}点", config.hour));
        }
    }

    if config.day != "*" {
        if let Some(step) = config.day.strip_prefix("*/") {
            parts.push(format!("每{}天", step));
        } else {
            parts.push(format!("每月{}号", config.day));
        }
    }

    if config.month != "*" {
        parts.push(format!("{}月", config.month));
    }

    if config.weekday != "*" {
        let weekday = match config.weekday.as_str() {
            "0" => "周日",
            "1" => "周一",
            "2" => "周二",
            "3" => "周三",
            "4" => "周四",
            "5" => "周五",
            "6" => "周六",
            "1-5" => "工作日",
            "0,6" => "周末",
            other => other,
        };
        parts.push(weekday.to_string());
    }

    format!("{} 执行", parts.join(" "))
}

fn describe_en(config: &CronConfig) -> String {
    let mut parts = Vec::new();

    if config.minute == "*" {
        parts.push("every minute".to_string());
    } else if let Some(step) = config.minute.strip_prefix("*/") {
        parts.push(format!("every {} minutes", step));
    } else {
        parts.push(format!("at minute {}", config.minute));
    }

    if config.hour != "*" {
        if let Some(step) = config.hour.strip_prefix("*/") {
            parts.push(format!("every {} hours", step));
        } else {
            parts.push(format!("at hour {}", config.hour));
        }
    }

    if config.day != "*" {
        if let Some(step) = config.day.strip_prefix("*/") {
            parts.push(format!("every {} days", step));
        } else {
            parts.push(format!("on day {} of the month", config.day));
        }
    }

    if config.month != "*" {
        parts.push(format!("in month {}", config.month));
    }

    if config.weekday != "*" {
        let weekday = match config.weekday.as_str() {
            "0" => "on Sunday".to_string(),
            "1" => "on Monday".to_string(),
            "2" => "on Tuesday".to_string(),
            "3" => "on Wednesday".to_string(),
            "4" => "on Thursday".to_string(),
            "5" => "on Friday".to_string(),
            "6" => "on Saturday".to_string(),
            "1-5" => "on weekdays".to_string(),
            "0,6" => "on weekends".to_string(),
            other => other.to_string(),
        };
        parts.push(weekday);
    }

    format!("{} - runs on this schedule", parts.join(", "))
}

/// Validate a single field token against the field's numeric range
///
/// Accepted shapes: `*`, a literal, `*/N`, `A-B`, and a comma list of
/// literals and ranges. Everything else is rejected with a reason.
pub fn validate_field(field: CronField, token: &str) -> Result<()> {
    if token.is_empty() {
        return Err(invalid(field, token, "token is empty"));
    }
    if token == "*" {
        return Ok(());
    }
    if let Some(step) = token.strip_prefix("*/") {
        let step: u32 = step
            .parse()
            .map_err(|_| invalid(field, token, "step is not a number"))?;
        let (_, max) = field.valid_range();
        if step == 0 {
            return Err(invalid(field, token, "step must be at least 1"));
        }
        if step > max.max(1) {
            return Err(invalid(field, token, "step exceeds the field range"));
        }
        return Ok(());
    }
    for part in token.split(',') {
        validate_literal_or_range(field, token, part)?;
    }
    Ok(())
}

fn validate_literal_or_range(field: CronField, token: &str, part: &str) -> Result<()> {
    if part.is_empty() {
        return Err(invalid(field, token, "empty list item"));
    }
    let (min, max) = field.valid_range();
    let in_range = |value: u32| value >= min && value <= max;

    if let Some((start, end)) = part.split_once('-') {
        let start: u32 = start
            .parse()
            .map_err(|_| invalid(field, token, "range start is not a number"))?;
        let end: u32 = end
            .parse()
            .map_err(|_| invalid(field, token, "range end is not a number"))?;
        if start > end {
            return Err(invalid(field, token, "range start exceeds range end"));
        }
        if !in_range(start) || !in_range(end) {
            return Err(invalid(field, token, "range value outside the field range"));
        }
        return Ok(());
    }

    let value: u32 = part
        .parse()
        .map_err(|_| invalid(field, token, "value is not a number"))?;
    if !in_range(value) {
        return Err(invalid(field, token, "value outside the field range"));
    }
    Ok(())
}

fn invalid(field: CronField, token: &str, reason: &str) -> Error {
    Error::ScheduleFieldInvalid {
        field: field.name().to_string(),
        token: token.to_string(),
        reason: reason.to_string(),
    }
}
