//! Documentation view
//!
//! Renders the bundled README for the active language from the parsed
//! block model in `docs`.

use eframe::egui;

use crate::docs::{self, DocBlock};
use crate::i18n::{tr, Language, MessageKey};

/// Documentation view component
#[derive(Debug, Default)]
pub struct DocsPanel;

impl DocsPanel {
    pub fn new() -> Self {
        Self
    }

    /// Render the documentation view
    pub fn render(&mut self, ui: &mut egui::Ui, lang: Language) {
        ui.vertical_centered(|ui| {
            ui.label(egui::RichText::new(tr(lang, MessageKey::DocsTitle)).size(24.0).strong());
            ui.label(tr(lang, MessageKey::DocsDesc));
        });
        ui.add_space(12.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                for block in docs::readme(lang) {
                    Self::render_block(ui, block);
                }
            });
    }

    fn render_block(ui: &mut egui::Ui, block: &DocBlock) {
        match block {
            DocBlock::Heading { level, text } => {
                let size = match level {
                    1 => 24.0,
                    2 => 19.0,
                    _ => 16.0,
                };
                ui.add_space(8.0);
                ui.label(egui::RichText::new(text).size(size).strong());
                ui.add_space(4.0);
            }
            DocBlock::Bullet(text) => {
                ui.horizontal(|ui| {
                    ui.label("•");
                    ui.label(text);
                });
            }
            DocBlock::Code(code) => {
                ui.add_space(4.0);
                egui::Frame::group(ui.style())
                    .fill(egui::Color32::from_rgb(30, 30, 40))
                    .show(ui, |ui| {
                        ui.label(egui::RichText::new(code).monospace());
                    });
                ui.add_space(4.0);
            }
            DocBlock::Paragraph(text) => {
                ui.label(text);
            }
        }
    }
}
