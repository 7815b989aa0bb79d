//! Unit tests for pattern validation and match evaluation
//!
//! These tests drive the evaluation state machine through the public
//! library API: Empty -> Invalid -> Valid-NoInput -> Evaluated.

use exprbox::generators::regex::{evaluate, PatternStatus};
use exprbox::models::PatternConfig;

fn config(pattern: &str, sample: &str) -> PatternConfig {
    let mut config = PatternConfig::new();
    config.set_custom_pattern(pattern);
    config.set_sample_text(sample);
    config
}

#[cfg(test)]
mod regex_evaluation_tests {
    use super::*;

    #[test]
    fn test_state_machine_transitions() {
        let mut config = PatternConfig::new();
        assert_eq!(evaluate(&config).status, PatternStatus::Empty);

        config.set_custom_pattern("[abc");
        assert_eq!(evaluate(&config).status, PatternStatus::Invalid);

        config.set_custom_pattern("[abc]");
        assert_eq!(evaluate(&config).status, PatternStatus::ValidNoInput);

        config.set_sample_text("a\nz");
        assert_eq!(evaluate(&config).status, PatternStatus::Evaluated);
    }

    #[test]
    fn test_spec_sample_two_matches_one_miss() {
        let eval = evaluate(&config(r"^\d+$", "123\nabc\n456"));
        assert_eq!(eval.summary.total, 3);
        assert_eq!(eval.summary.matched, 2);
        assert_eq!(eval.summary.unmatched, 1);
        let texts: Vec<&str> = eval.results.iter().map(|r| r.text.as_str()).collect();
        assert_eq!(texts, ["123", "abc", "456"]);
    }

    #[test]
    fn test_invalid_pattern_yields_no_results_despite_sample() {
        let eval = evaluate(&config("[abc", "123\n456"));
        assert_eq!(eval.status, PatternStatus::Invalid);
        assert!(eval.results.is_empty());
        assert_eq!(eval.summary.total, 0);
        assert!(eval.error.is_some());
    }

    #[test]
    fn test_recovery_after_invalid_pattern() {
        let mut config = config("[abc", "123");
        assert_eq!(evaluate(&config).status, PatternStatus::Invalid);
        config.set_custom_pattern(r"\d+");
        let eval = evaluate(&config);
        assert_eq!(eval.status, PatternStatus::Evaluated);
        assert_eq!(eval.summary.matched, 1);
    }

    #[test]
    fn test_template_pattern_used_when_no_custom_entry() {
        let template = &exprbox::catalog::regex_templates()[0];
        let mut config = PatternConfig::new();
        config.select_template(template);
        let eval = evaluate(&config);
        // Every template example matches its own pattern.
        assert_eq!(eval.status, PatternStatus::Evaluated);
        assert_eq!(eval.summary.unmatched, 0);
    }

    #[test]
    fn test_custom_pattern_overrides_template() {
        let template = &exprbox::catalog::regex_templates()[0];
        let mut config = PatternConfig::new();
        config.select_template(template);
        config.set_custom_pattern(r"^\d+$");
        config.set_sample_text("12345");
        let eval = evaluate(&config);
        assert_eq!(eval.summary.matched, 1);
    }

    #[test]
    fn test_whole_match_is_first_capture() {
        let eval = evaluate(&config(r"(\w+)@(\w+)", "user@example"));
        assert_eq!(
            eval.results[0].captures,
            vec!["user@example", "user", "example"]
        );
    }

    #[test]
    fn test_non_participating_groups_are_skipped() {
        let eval = evaluate(&config(r"(a)|(b)", "a"));
        assert_eq!(eval.results[0].captures, vec!["a", "a"]);
    }

    #[test]
    fn test_crlf_sample_lines_are_trimmed() {
        let eval = evaluate(&config(r"^\d+$", "123\r\n456\r\n"));
        assert_eq!(eval.summary.total, 2);
        assert_eq!(eval.summary.matched, 2);
    }
}
