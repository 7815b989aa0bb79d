//! End-to-end generator flows
//!
//! Exercises the user-visible flows: picking a template, deriving the
//! expression and description, switching to a custom pattern, and
//! resetting back to defaults.

use exprbox::catalog;
use exprbox::generators::{cron, regex};
use exprbox::generators::regex::PatternStatus;
use exprbox::i18n::Language;
use exprbox::models::{CronConfig, CronField, PatternConfig};

#[test]
fn test_cron_template_to_expression_flow() {
    // Pick "weekdays at 9" from the catalog, the way the panel does.
    let template = catalog::cron_templates()
        .iter()
        .find(|t| t.expression == "0 9 * * 1-5")
        .unwrap();

    let mut config = CronConfig::new();
    config.apply_template(template).unwrap();
    assert_eq!(cron::expression(&config), template.expression);

    let en = cron::describe(&config, Language::En);
    assert!(en.contains("at minute 0"));
    assert!(en.contains("at hour 9"));
    assert!(en.contains("on weekdays"));
}

#[test]
fn test_cron_manual_edit_after_template() {
    let mut config = CronConfig::from_expression("0 9 * * 1-5").unwrap();
    config.set(CronField::Minute, "*/30");
    assert_eq!(cron::expression(&config), "*/30 9 * * 1-5");

    config.reset();
    assert_eq!(cron::expression(&config), "* * * * *");
}

#[test]
fn test_cron_every_field_option_combination_is_valid() {
    // Any selector choice must produce a field that validates and
    // round-trips through the derived expression.
    for field in CronField::ALL {
        for option in catalog::field_options(field) {
            let mut config = CronConfig::new();
            config.set(field, option.value);
            assert!(cron::validate_field(field, config.get(field)).is_ok());

            let reparsed = CronConfig::from_expression(&cron::expression(&config)).unwrap();
            assert_eq!(reparsed, config);
        }
    }
}

#[test]
fn test_regex_template_then_custom_flow() {
    let template = catalog::regex_templates()
        .iter()
        .find(|t| t.pattern == r"^\d+$")
        .unwrap();

    let mut config = PatternConfig::new();
    config.select_template(template);
    assert_eq!(config.template_pattern, template.pattern);
    assert_eq!(config.sample_text, template.example);
    assert!(config.custom_pattern.is_empty());

    // Typing a custom pattern takes over and clears the template.
    config.set_custom_pattern(r"[a-z]+");
    assert!(config.template_pattern.is_empty());
    assert_eq!(config.active_pattern(), r"[a-z]+");

    config.set_sample_text("hello\nWORLD\n  mixedCase  ");
    let eval = regex::evaluate(&config);
    assert_eq!(eval.status, PatternStatus::Evaluated);
    assert_eq!(eval.summary.total, 3);
    assert_eq!(eval.summary.matched, 2);
}

#[test]
fn test_regex_template_examples_all_evaluate_clean() {
    for template in catalog::regex_templates() {
        let mut config = PatternConfig::new();
        config.select_template(template);
        let eval = regex::evaluate(&config);
        assert_eq!(
            eval.status,
            PatternStatus::Evaluated,
            "template '{}' example did not evaluate",
            template.pattern
        );
        assert_eq!(
            eval.summary.unmatched, 0,
            "template '{}' example failed its own pattern",
            template.pattern
        );
    }
}

#[test]
fn test_regex_clear_returns_to_empty_state() {
    let mut config = PatternConfig::new();
    config.set_custom_pattern(r"\d+");
    config.set_sample_text("123");
    assert_eq!(regex::evaluate(&config).status, PatternStatus::Evaluated);

    config.clear();
    assert!(!config.has_pattern());
    assert_eq!(regex::evaluate(&config).status, PatternStatus::Empty);
}

#[test]
fn test_clearing_custom_pattern_does_not_restore_template() {
    let template = &catalog::regex_templates()[0];
    let mut config = PatternConfig::new();
    config.select_template(template);
    config.set_custom_pattern(r"\d+");
    config.set_custom_pattern("");
    // Template was cleared when the custom pattern appeared; emptying
    // the custom pattern leaves no active pattern at all.
    assert!(config.active_pattern().is_empty());
}
