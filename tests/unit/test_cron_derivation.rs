//! Unit tests for cron expression derivation
//!
//! These tests validate the expression/description derivation and the
//! field token validation through the public library API.

use exprbox::generators::cron::{describe, expression, validate_field};
use exprbox::i18n::Language;
use exprbox::models::{CronConfig, CronField};

#[cfg(test)]
mod cron_derivation_tests {
    use super::*;

    #[test]
    fn test_expression_is_fields_joined_by_spaces() {
        let mut config = CronConfig::new();
        assert_eq!(expression(&config), "* * * * *");

        config.set(CronField::Minute, "0");
        config.set(CronField::Hour, "9");
        config.set(CronField::Weekday, "1-5");
        assert_eq!(expression(&config), "0 9 * * 1-5");
    }

    #[test]
    fn test_expression_preserves_field_order() {
        let mut config = CronConfig::new();
        // Set in reverse order; output order must not change.
        config.set(CronField::Weekday, "1");
        config.set(CronField::Month, "2");
        config.set(CronField::Day, "3");
        config.set(CronField::Hour, "4");
        config.set(CronField::Minute, "5");
        assert_eq!(expression(&config), "5 4 3 2 1");
    }

    #[test]
    fn test_split_round_trip_equals_config() {
        let config = CronConfig::from_expression("*/15 9 1 6 0,6").unwrap();
        let derived = expression(&config);
        let parts: Vec<&str> = derived.split(' ').collect();
        assert_eq!(parts, config.fields());
    }

    #[test]
    fn test_template_load_reproduces_expression() {
        for template in exprbox::catalog::cron_templates() {
            let config = CronConfig::from_expression(template.expression).unwrap();
            assert_eq!(expression(&config), template.expression);
        }
    }

    #[test]
    fn test_describe_skips_wildcard_fields() {
        let config = CronConfig::from_expression("0 * * * *").unwrap();
        let text = describe(&config, Language::En);
        assert!(text.contains("at minute 0"));
        assert!(!text.contains("hour"));
        assert!(!text.contains("day"));
        assert!(!text.contains("month"));
    }

    #[test]
    fn test_describe_minute_always_present() {
        for expr in ["* * * * *", "0 * * * *", "*/5 * * * *"] {
            let config = CronConfig::from_expression(expr).unwrap();
            let text = describe(&config, Language::En);
            assert!(text.contains("minute"), "no minute clause in '{}'", text);
        }
    }

    #[test]
    fn test_describe_weekend_map() {
        let config = CronConfig::from_expression("0 0 * * 0,6").unwrap();
        assert!(describe(&config, Language::En).contains("on weekends"));
        assert!(describe(&config, Language::Zh).contains("周末"));
    }

    #[test]
    fn test_describe_is_locale_dependent_but_stable() {
        let config = CronConfig::from_expression("*/10 18 * 12 5").unwrap();
        let en = describe(&config, Language::En);
        let zh = describe(&config, Language::Zh);
        assert_ne!(en, zh);
        assert_eq!(en, describe(&config, Language::En));
        assert_eq!(zh, describe(&config, Language::Zh));
    }

    #[test]
    fn test_validate_all_catalog_options() {
        for field in CronField::ALL {
            for option in exprbox::catalog::field_options(field) {
                assert!(
                    validate_field(field, option.value).is_ok(),
                    "{} option '{}' rejected",
                    field.name(),
                    option.value
                );
            }
        }
    }

    #[test]
    fn test_validate_boundaries() {
        assert!(validate_field(CronField::Minute, "59").is_ok());
        assert!(validate_field(CronField::Minute, "60").is_err());
        assert!(validate_field(CronField::Day, "31").is_ok());
        assert!(validate_field(CronField::Day, "32").is_err());
        assert!(validate_field(CronField::Weekday, "0-6").is_ok());
        assert!(validate_field(CronField::Weekday, "0-7").is_err());
    }
}
