//! Regex generator view
//!
//! Three columns: the template list, the custom builder with the syntax
//! reference, and the test area. The evaluation is recomputed only when
//! the pattern or the sample text changed; it is O(sample line count) so
//! a dirty flag is enough.

use eframe::egui;
use tracing::{info, warn};

use super::toasts::Toasts;
use crate::catalog;
use crate::generators::regex::{evaluate, Evaluation, PatternStatus};
use crate::i18n::{tr, tr_with, Language, MessageKey};
use crate::models::PatternConfig;

const SYNTAX_REFERENCE: &[(&str, &str, &str)] = &[
    (".", "匹配任意字符", "any character"),
    ("*", "匹配0次或多次", "zero or more"),
    ("+", "匹配1次或多次", "one or more"),
    ("?", "匹配0次或1次", "zero or one"),
    (r"\d", "匹配数字", "digit"),
    (r"\w", "匹配字母数字下划线", "word character"),
    (r"\s", "匹配空白字符", "whitespace"),
    ("[abc]", "匹配a、b或c", "a, b or c"),
    ("[a-z]", "匹配小写字母", "lowercase letter"),
    ("^", "行首", "start of line"),
    ("$", "行尾", "end of line"),
];

/// Regex generator view component
#[derive(Debug)]
pub struct RegexPanel {
    config: PatternConfig,
    evaluation: Evaluation,
    dirty: bool,
}

impl Default for RegexPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl RegexPanel {
    pub fn new() -> Self {
        Self {
            config: PatternConfig::new(),
            evaluation: Evaluation::default(),
            dirty: false,
        }
    }

    /// The current configuration (used by tests)
    pub fn config(&self) -> &PatternConfig {
        &self.config
    }

    /// The most recent evaluation
    pub fn evaluation(&self) -> &Evaluation {
        &self.evaluation
    }

    /// Render the regex generator view
    pub fn render(&mut self, ui: &mut egui::Ui, lang: Language, toasts: &mut Toasts) {
        if self.dirty {
            self.evaluation = evaluate(&self.config);
            self.dirty = false;
        }

        ui.vertical_centered(|ui| {
            ui.label(egui::RichText::new(tr(lang, MessageKey::RegexTitle)).size(24.0).strong());
            ui.label(tr(lang, MessageKey::RegexSubtitle));
        });
        ui.add_space(12.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.columns(3, |columns| {
                    self.render_templates(&mut columns[0], lang, toasts);
                    self.render_builder(&mut columns[1], lang, toasts);
                    Self::render_syntax_help(&mut columns[1], lang);
                    self.render_test_area(&mut columns[2], lang);
                });
            });
    }

    fn render_templates(&mut self, ui: &mut egui::Ui, lang: Language, toasts: &mut Toasts) {
        ui.group(|ui| {
            ui.label(egui::RichText::new(tr(lang, MessageKey::RegexTemplatesHeading)).strong());
            ui.add_space(6.0);

            for template in catalog::regex_templates() {
                let selected = self.config.template_pattern == template.pattern;
                let clicked = ui
                    .vertical(|ui| {
                        let response = ui.selectable_label(selected, template.name.get(lang));
                        ui.label(egui::RichText::new(template.description.get(lang)).weak());
                        ui.label(
                            egui::RichText::new(format!(
                                "{}: {}",
                                tr(lang, MessageKey::ExampleLabel),
                                template.example
                            ))
                            .monospace()
                            .weak(),
                        );
                        ui.add_space(4.0);
                        response.clicked()
                    })
                    .inner;
                if clicked {
                    self.config.select_template(template);
                    self.dirty = true;
                    info!("Loaded regex template '{}'", template.name.en);
                    toasts.success(tr_with(
                        lang,
                        MessageKey::ToastTemplateLoaded,
                        &[("name", template.name.get(lang))],
                    ));
                }
            }
        });
    }

    fn render_builder(&mut self, ui: &mut egui::Ui, lang: Language, toasts: &mut Toasts) {
        ui.group(|ui| {
            ui.label(egui::RichText::new(tr(lang, MessageKey::RegexCustomHeading)).strong());
            ui.add_space(6.0);

            ui.label(tr(lang, MessageKey::RegexPatternLabel));
            let mut custom = self.config.custom_pattern.clone();
            let response = ui.add(
                egui::TextEdit::multiline(&mut custom)
                    .font(egui::TextStyle::Monospace)
                    .desired_rows(4)
                    .desired_width(f32::INFINITY)
                    .hint_text(tr(lang, MessageKey::RegexPatternPlaceholder)),
            );
            if response.changed() {
                self.config.set_custom_pattern(custom);
                self.dirty = true;
            }
            if !self.evaluation.is_valid() {
                ui.label(
                    egui::RichText::new(tr(lang, MessageKey::RegexInvalidInline))
                        .color(egui::Color32::from_rgb(230, 90, 90))
                        .small(),
                );
                if let Some(reason) = &self.evaluation.error {
                    ui.label(egui::RichText::new(reason).monospace().small().weak());
                }
            }

            ui.add_space(8.0);
            ui.label(tr(lang, MessageKey::RegexActiveLabel));
            let active = self.config.active_pattern();
            if active.is_empty() {
                ui.label(egui::RichText::new(tr(lang, MessageKey::RegexNoneSelected)).weak());
            } else {
                ui.label(egui::RichText::new(active).monospace());
            }

            ui.add_space(8.0);
            ui.horizontal(|ui| {
                if ui.button(tr(lang, MessageKey::ClearButton)).clicked() {
                    self.config.clear();
                    self.dirty = true;
                    toasts.success(tr(lang, MessageKey::ToastCleared));
                }
                let copy = ui
                    .button("📋")
                    .on_hover_text(tr(lang, MessageKey::CopyTooltip));
                if copy.clicked() {
                    self.copy_active_pattern(lang, toasts);
                }
            });
        });
        ui.add_space(8.0);
    }

    fn copy_active_pattern(&self, lang: Language, toasts: &mut Toasts) {
        let active = self.config.active_pattern();
        if active.is_empty() {
            toasts.error(tr(lang, MessageKey::ToastNothingToCopy));
            return;
        }
        match super::copy_to_clipboard(active) {
            Ok(()) => toasts.success(tr(lang, MessageKey::ToastCopied)),
            Err(e) => {
                warn!("Clipboard copy failed: {}", e);
                toasts.error(tr(lang, MessageKey::ToastCopyFailed));
            }
        }
    }

    fn render_syntax_help(ui: &mut egui::Ui, lang: Language) {
        ui.group(|ui| {
            ui.label(egui::RichText::new(tr(lang, MessageKey::RegexSyntaxHeading)).strong());
            ui.add_space(6.0);
            egui::Grid::new("regex_syntax")
                .num_columns(2)
                .spacing([12.0, 4.0])
                .show(ui, |ui| {
                    for (token, zh, en) in SYNTAX_REFERENCE {
                        ui.label(egui::RichText::new(*token).monospace());
                        ui.label(match lang {
                            Language::Zh => *zh,
                            Language::En => *en,
                        });
                        ui.end_row();
                    }
                });
        });
    }

    fn render_test_area(&mut self, ui: &mut egui::Ui, lang: Language) {
        ui.group(|ui| {
            ui.label(egui::RichText::new(tr(lang, MessageKey::RegexTestHeading)).strong());
            ui.add_space(6.0);

            ui.label(tr(lang, MessageKey::RegexTestLabel));
            let mut sample = self.config.sample_text.clone();
            let response = ui.add(
                egui::TextEdit::multiline(&mut sample)
                    .desired_rows(6)
                    .desired_width(f32::INFINITY)
                    .hint_text(tr(lang, MessageKey::RegexTestPlaceholder)),
            );
            if response.changed() {
                self.config.set_sample_text(sample);
                self.dirty = true;
            }

            ui.add_space(8.0);
            match self.evaluation.status {
                PatternStatus::Empty => {
                    ui.label(egui::RichText::new(tr(lang, MessageKey::RegexEmptyHint)).weak());
                }
                PatternStatus::Invalid => {
                    ui.label(
                        egui::RichText::new(tr(lang, MessageKey::RegexInvalidBanner))
                            .color(egui::Color32::from_rgb(230, 90, 90)),
                    );
                }
                PatternStatus::ValidNoInput => {}
                PatternStatus::Evaluated => self.render_results(ui, lang),
            }
        });
    }

    fn render_results(&self, ui: &mut egui::Ui, lang: Language) {
        ui.label(tr(lang, MessageKey::RegexResultsLabel));
        egui::ScrollArea::vertical()
            .max_height(280.0)
            .auto_shrink([false, true])
            .show(ui, |ui| {
                for result in &self.evaluation.results {
                    let (icon, color) = if result.is_match {
                        ("✔", egui::Color32::from_rgb(80, 200, 120))
                    } else {
                        ("✖", egui::Color32::from_rgb(230, 90, 90))
                    };
                    ui.horizontal(|ui| {
                        ui.label(egui::RichText::new(icon).color(color));
                        ui.label(egui::RichText::new(&result.text).monospace());
                    });
                    if result.is_match && !result.captures.is_empty() {
                        ui.label(
                            egui::RichText::new(format!(
                                "{}{}",
                                tr(lang, MessageKey::RegexMatchesPrefix),
                                result.captures.join(", ")
                            ))
                            .small()
                            .color(color),
                        );
                    }
                    ui.add_space(2.0);
                }
            });

        ui.add_space(6.0);
        let summary = self.evaluation.summary;
        ui.label(tr_with(
            lang,
            MessageKey::RegexSummary,
            &[
                ("total", &summary.total.to_string()),
                ("matched", &summary.matched.to_string()),
                ("unmatched", &summary.unmatched.to_string()),
            ],
        ));
    }
}
