//! Property-based tests for pattern evaluation

use exprbox::generators::regex::{evaluate, PatternStatus};
use exprbox::models::PatternConfig;
use proptest::prelude::*;

fn config(pattern: &str, sample: &str) -> PatternConfig {
    let mut config = PatternConfig::new();
    config.set_custom_pattern(pattern);
    config.set_sample_text(sample);
    config
}

proptest! {
    #[test]
    fn test_evaluate_never_panics(pattern in "\\PC{0,30}", sample in "\\PC{0,100}") {
        let _ = evaluate(&config(&pattern, &sample));
    }

    #[test]
    fn test_result_count_bounded_by_line_count(sample in "[a-z0-9 \n]{0,200}") {
        let eval = evaluate(&config(r"\d+", &sample));
        let line_count = sample.split('\n').count();
        prop_assert!(eval.results.len() <= line_count);
        prop_assert_eq!(eval.summary.total, eval.results.len());
    }

    #[test]
    fn test_summary_partition_holds(sample in "[a-zA-Z0-9\n]{0,200}") {
        let eval = evaluate(&config(r"^[0-9]+$", &sample));
        prop_assert_eq!(eval.summary.matched + eval.summary.unmatched, eval.summary.total);
        let matched = eval.results.iter().filter(|r| r.is_match).count();
        prop_assert_eq!(matched, eval.summary.matched);
    }

    #[test]
    fn test_blank_lines_never_appear_in_results(sample in "[ \t\na-z]{0,100}") {
        let eval = evaluate(&config("[a-z]+", &sample));
        for result in &eval.results {
            prop_assert!(!result.text.trim().is_empty());
            prop_assert_eq!(result.text.trim(), result.text.as_str());
        }
    }

    #[test]
    fn test_invalid_pattern_always_empty_results(sample in "\\PC{0,50}") {
        let eval = evaluate(&config("(unclosed", &sample));
        prop_assert_eq!(eval.status, PatternStatus::Invalid);
        prop_assert!(eval.results.is_empty());
        prop_assert_eq!(eval.summary.total, 0);
    }

    #[test]
    fn test_evaluation_is_deterministic(sample in "[a-z0-9\n]{0,100}") {
        let cfg = config(r"[0-9]+", &sample);
        prop_assert_eq!(evaluate(&cfg), evaluate(&cfg));
    }

    #[test]
    fn test_matched_lines_have_whole_match_capture(sample in "[0-9\n]{1,60}") {
        let eval = evaluate(&config(r"[0-9]+", &sample));
        for result in eval.results.iter().filter(|r| r.is_match) {
            prop_assert!(!result.captures.is_empty());
            prop_assert!(result.text.contains(&result.captures[0]));
        }
    }
}
