//! Property-based tests for cron expression derivation

use exprbox::generators::cron::{describe, expression, validate_field};
use exprbox::i18n::Language;
use exprbox::models::{CronConfig, CronField};
use proptest::prelude::*;

/// Tokens a user can actually reach through the field selectors
fn field_token() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("*".to_string()),
        (0u32..60).prop_map(|n| n.to_string()),
        (2u32..30).prop_map(|n| format!("*/{}", n)),
        (0u32..5).prop_map(|a| format!("{}-{}", a, a + 1)),
    ]
}

proptest! {
    #[test]
    fn test_expression_round_trips_through_parse(
        minute in field_token(),
        hour in field_token(),
        day in field_token(),
        month in field_token(),
        weekday in field_token(),
    ) {
        let mut config = CronConfig::new();
        config.set(CronField::Minute, &minute);
        config.set(CronField::Hour, &hour);
        config.set(CronField::Day, &day);
        config.set(CronField::Month, &month);
        config.set(CronField::Weekday, &weekday);

        let expr = expression(&config);
        let reparsed = CronConfig::from_expression(&expr).unwrap();
        prop_assert_eq!(&reparsed, &config);
        prop_assert_eq!(expression(&reparsed), expr);
    }

    #[test]
    fn test_expression_always_has_five_fields(
        minute in field_token(),
        weekday in field_token(),
    ) {
        let mut config = CronConfig::new();
        config.set(CronField::Minute, &minute);
        config.set(CronField::Weekday, &weekday);
        prop_assert_eq!(expression(&config).split(' ').count(), 5);
    }

    #[test]
    fn test_describe_never_panics_and_is_nonempty(
        minute in "\\PC{0,10}",
        hour in "\\PC{0,10}",
    ) {
        // describe() renders whatever is in the config, valid or not.
        let mut config = CronConfig::new();
        config.set(CronField::Minute, &minute);
        config.set(CronField::Hour, &hour);
        for lang in Language::ALL {
            prop_assert!(!describe(&config, lang).is_empty());
        }
    }

    #[test]
    fn test_validate_accepts_in_range_literals(value in 0u32..60) {
        prop_assert!(validate_field(CronField::Minute, &value.to_string()).is_ok());
    }

    #[test]
    fn test_validate_rejects_out_of_range_literals(value in 60u32..1000) {
        prop_assert!(validate_field(CronField::Minute, &value.to_string()).is_err());
    }

    #[test]
    fn test_validate_never_panics(token in "\\PC{0,20}") {
        for field in CronField::ALL {
            let _ = validate_field(field, &token);
        }
    }

    #[test]
    fn test_parse_rejects_wrong_field_counts(count in 0usize..10) {
        let expr = vec!["*"; count].join(" ");
        let result = CronConfig::from_expression(&expr);
        if count == 5 {
            prop_assert!(result.is_ok());
        } else {
            prop_assert!(result.is_err());
        }
    }
}
