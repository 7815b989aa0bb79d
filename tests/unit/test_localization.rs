//! Unit tests for localization
//!
//! The message tables are exhaustive matches, so coverage here focuses
//! on behavior: language parsing, placeholder substitution, and the
//! localized catalog text.

use exprbox::catalog;
use exprbox::i18n::{tr, tr_with, Language, MessageKey};

#[cfg(test)]
mod localization_tests {
    use super::*;

    #[test]
    fn test_nav_labels_translate() {
        assert_eq!(tr(Language::En, MessageKey::NavHome), "Home");
        assert_eq!(tr(Language::Zh, MessageKey::NavHome), "首页");
    }

    #[test]
    fn test_template_toast_substitution() {
        let template = &catalog::cron_templates()[0];
        let zh = tr_with(
            Language::Zh,
            MessageKey::ToastTemplateLoaded,
            &[("name", template.name.get(Language::Zh))],
        );
        assert!(zh.contains(template.name.get(Language::Zh)));
        assert!(!zh.contains("{name}"));
    }

    #[test]
    fn test_catalog_names_have_both_languages() {
        for template in catalog::cron_templates() {
            assert!(!template.name.get(Language::Zh).is_empty());
            assert!(!template.name.get(Language::En).is_empty());
        }
        for template in catalog::regex_templates() {
            assert!(!template.name.get(Language::Zh).is_empty());
            assert!(!template.name.get(Language::En).is_empty());
        }
    }

    #[test]
    fn test_language_display_and_parse_agree() {
        for lang in Language::ALL {
            let round: Language = lang.to_string().parse().unwrap();
            assert_eq!(round, lang);
        }
    }
}
