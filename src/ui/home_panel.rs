//! Home view
//!
//! Two feature cards introducing the generators, each with a button that
//! navigates to the corresponding view.

use eframe::egui;

use super::View;
use crate::i18n::{tr, Language, MessageKey};

/// Home view component
#[derive(Debug, Default)]
pub struct HomePanel;

impl HomePanel {
    pub fn new() -> Self {
        Self
    }

    /// Render the home view; returns a view to navigate to when a card
    /// button is clicked
    pub fn render(&mut self, ui: &mut egui::Ui, lang: Language) -> Option<View> {
        let mut navigate = None;

        ui.vertical_centered(|ui| {
            ui.add_space(24.0);
            ui.label(egui::RichText::new(tr(lang, MessageKey::HomeTitle)).size(28.0).strong());
            ui.add_space(8.0);
            ui.label(tr(lang, MessageKey::HomeSubtitle));
            ui.add_space(24.0);
        });

        ui.columns(2, |columns| {
            if Self::card(
                &mut columns[0],
                tr(lang, MessageKey::HomeCronTitle),
                tr(lang, MessageKey::HomeCronDesc),
                tr(lang, MessageKey::HomeOpen),
            ) {
                navigate = Some(View::Cron);
            }
            if Self::card(
                &mut columns[1],
                tr(lang, MessageKey::HomeRegexTitle),
                tr(lang, MessageKey::HomeRegexDesc),
                tr(lang, MessageKey::HomeOpen),
            ) {
                navigate = Some(View::Regex);
            }
        });

        navigate
    }

    fn card(ui: &mut egui::Ui, title: &str, description: &str, open: &str) -> bool {
        let mut clicked = false;
        ui.group(|ui| {
            ui.set_min_height(140.0);
            ui.vertical(|ui| {
                ui.label(egui::RichText::new(title).size(18.0).strong());
                ui.add_space(6.0);
                ui.label(description);
                ui.add_space(10.0);
                if ui.button(open).clicked() {
                    clicked = true;
                }
            });
        });
        clicked
    }
}
