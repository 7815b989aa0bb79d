//! Cron generator view
//!
//! Left side: the visual builder (one option menu per field) and the
//! template grid. Right side: the derived expression with a copy button,
//! the natural-language description, and the format reference. The
//! expression and description are re-derived from the configuration on
//! every frame; derivation is O(field count) so no caching is needed.

use eframe::egui;
use tracing::{info, warn};

use super::toasts::Toasts;
use crate::catalog;
use crate::generators::cron;
use crate::i18n::{tr, tr_with, Language, MessageKey};
use crate::models::{CronConfig, CronField};

/// Cron generator view component
#[derive(Debug, Default)]
pub struct CronPanel {
    config: CronConfig,
}

impl CronPanel {
    pub fn new() -> Self {
        Self {
            config: CronConfig::new(),
        }
    }

    /// The current configuration (used by the preview and by tests)
    pub fn config(&self) -> &CronConfig {
        &self.config
    }

    /// Render the cron generator view
    pub fn render(&mut self, ui: &mut egui::Ui, lang: Language, toasts: &mut Toasts) {
        ui.vertical_centered(|ui| {
            ui.label(egui::RichText::new(tr(lang, MessageKey::CronTitle)).size(24.0).strong());
            ui.label(tr(lang, MessageKey::CronSubtitle));
        });
        ui.add_space(12.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.columns(2, |columns| {
                    self.render_builder(&mut columns[0], lang, toasts);
                    self.render_templates(&mut columns[0], lang, toasts);
                    self.render_preview(&mut columns[1], lang, toasts);
                    Self::render_format_help(&mut columns[1], lang);
                });
            });
    }

    fn render_builder(&mut self, ui: &mut egui::Ui, lang: Language, toasts: &mut Toasts) {
        ui.group(|ui| {
            ui.label(egui::RichText::new(tr(lang, MessageKey::CronBuilderHeading)).strong());
            ui.add_space(6.0);

            egui::Grid::new("cron_builder")
                .num_columns(2)
                .spacing([12.0, 8.0])
                .show(ui, |ui| {
                    for field in CronField::ALL {
                        ui.label(tr(lang, Self::field_key(field)));
                        self.field_selector(ui, lang, field);
                        ui.end_row();
                    }
                });

            ui.add_space(8.0);
            if ui.button(tr(lang, MessageKey::ResetButton)).clicked() {
                self.config.reset();
                toasts.success(tr(lang, MessageKey::ToastReset));
            }
        });
        ui.add_space(8.0);
    }

    fn field_selector(&mut self, ui: &mut egui::Ui, lang: Language, field: CronField) {
        let current = self.config.get(field).to_string();
        let options = catalog::field_options(field);
        let selected_text = options
            .iter()
            .find(|o| o.value == current)
            .map(|o| o.label.get(lang).to_string())
            .unwrap_or_else(|| current.clone());

        egui::ComboBox::from_id_salt(("cron_field", field.name()))
            .width(200.0)
            .selected_text(selected_text)
            .show_ui(ui, |ui| {
                for option in options {
                    let label = format!("{} ({})", option.label.get(lang), option.value);
                    if ui.selectable_label(current == option.value, label).clicked() {
                        self.config.set(field, option.value);
                    }
                }
            });
    }

    fn render_templates(&mut self, ui: &mut egui::Ui, lang: Language, toasts: &mut Toasts) {
        ui.group(|ui| {
            ui.label(egui::RichText::new(tr(lang, MessageKey::CronTemplatesHeading)).strong());
            ui.add_space(6.0);

            for template in catalog::cron_templates() {
                let clicked = ui
                    .vertical(|ui| {
                        let response = ui.button(template.name.get(lang));
                        ui.label(egui::RichText::new(template.expression).monospace().weak());
                        ui.label(egui::RichText::new(template.description.get(lang)).weak());
                        ui.add_space(4.0);
                        response.clicked()
                    })
                    .inner;
                if clicked {
                    self.load_template(template, lang, toasts);
                }
            }
        });
    }

    fn load_template(
        &mut self,
        template: &catalog::CronTemplate,
        lang: Language,
        toasts: &mut Toasts,
    ) {
        // The catalog is trusted data; a parse failure here is a bug.
        match self.config.apply_template(template) {
            Ok(()) => {
                info!("Loaded cron template '{}'", template.name.en);
                toasts.success(tr_with(
                    lang,
                    MessageKey::ToastTemplateLoaded,
                    &[("name", template.name.get(lang))],
                ));
            }
            Err(e) => warn!("Malformed cron template '{}': {}", template.name.en, e),
        }
    }

    fn render_preview(&mut self, ui: &mut egui::Ui, lang: Language, toasts: &mut Toasts) {
        let expression = cron::expression(&self.config);
        let description = cron::describe(&self.config, lang);

        ui.group(|ui| {
            ui.label(egui::RichText::new(tr(lang, MessageKey::CronPreviewHeading)).strong());
            ui.add_space(6.0);

            ui.label(tr(lang, MessageKey::CronExpressionLabel));
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(&expression).monospace().size(18.0));
                let copy = ui
                    .button("📋")
                    .on_hover_text(tr(lang, MessageKey::CopyTooltip));
                if copy.clicked() {
                    match super::copy_to_clipboard(&expression) {
                        Ok(()) => toasts.success(tr(lang, MessageKey::ToastCopied)),
                        Err(e) => {
                            warn!("Clipboard copy failed: {}", e);
                            toasts.error(tr(lang, MessageKey::ToastCopyFailed));
                        }
                    }
                }
            });

            ui.add_space(8.0);
            ui.label(tr(lang, MessageKey::CronDescriptionLabel));
            ui.label(
                egui::RichText::new(&description).color(egui::Color32::from_rgb(80, 200, 120)),
            );
        });
        ui.add_space(8.0);
    }

    fn render_format_help(ui: &mut egui::Ui, lang: Language) {
        ui.group(|ui| {
            ui.label(egui::RichText::new(tr(lang, MessageKey::CronFormatHeading)).strong());
            ui.add_space(6.0);
            ui.label(egui::RichText::new(tr(lang, MessageKey::CronFormatFields)).monospace());
            ui.label(egui::RichText::new("*      *    *   *     *").monospace().weak());
            ui.add_space(6.0);
            for field in CronField::ALL {
                ui.label(tr(lang, Self::field_key(field)));
            }
            ui.add_space(6.0);
            ui.label(egui::RichText::new(tr(lang, MessageKey::CronSpecialChars)).strong());
            ui.label(egui::RichText::new("*  ,  -  /").monospace());
        });
    }

    fn field_key(field: CronField) -> MessageKey {
        match field {
            CronField::Minute => MessageKey::FieldMinute,
            CronField::Hour => MessageKey::FieldHour,
            CronField::Day => MessageKey::FieldDay,
            CronField::Month => MessageKey::FieldMonth,
            CronField::Weekday => MessageKey::FieldWeekday,
        }
    }
}
