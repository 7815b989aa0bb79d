//! Main application structure
//!
//! `ExprBoxApp` implements `eframe::App` and wires the library views
//! together: a top navigation bar with the language selector, one
//! central view at a time, and the toast overlay. All state changes
//! happen synchronously inside the update loop; there are no background
//! threads.

use std::time::Duration;

use eframe::egui;
use tracing::{info, warn};

use exprbox::config::Config;
use exprbox::i18n::{tr, Language, MessageKey};
use exprbox::ui::{CronPanel, DocsPanel, HomePanel, RegexPanel, Toasts, View};
use exprbox::ConfigLoader;

/// Main ExprBox application
pub struct ExprBoxApp {
    /// Persistent application settings
    config: Config,
    /// Loader used to write settings changes back to disk
    loader: ConfigLoader,
    /// Currently displayed view
    view: View,
    /// View components
    home_panel: HomePanel,
    cron_panel: CronPanel,
    regex_panel: RegexPanel,
    docs_panel: DocsPanel,
    /// Toast overlay
    toasts: Toasts,
}

impl ExprBoxApp {
    /// Create the application from a loaded configuration
    ///
    /// The loader is the one the configuration was loaded with; settings
    /// changes are saved back through it so they land in the same file.
    pub fn new(cc: &eframe::CreationContext<'_>, config: Config, loader: ConfigLoader) -> Self {
        info!("Initializing ExprBox application");

        // Scale the whole UI relative to the default font size.
        let zoom = config.ui.font_size / 14.0;
        if (zoom - 1.0).abs() > f32::EPSILON {
            cc.egui_ctx.set_zoom_factor(zoom);
        }

        let toasts = Toasts::new(Duration::from_millis(config.ui.toast_duration_ms));

        Self {
            config,
            loader,
            view: View::Home,
            home_panel: HomePanel::new(),
            cron_panel: CronPanel::new(),
            regex_panel: RegexPanel::new(),
            docs_panel: DocsPanel::new(),
            toasts,
        }
    }

    fn nav_bar(&mut self, ctx: &egui::Context) {
        let lang = self.config.language;
        egui::TopBottomPanel::top("nav_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new(tr(lang, MessageKey::NavTitle))
                        .size(16.0)
                        .strong(),
                );
                ui.separator();

                for (view, key) in [
                    (View::Home, MessageKey::NavHome),
                    (View::Cron, MessageKey::NavCron),
                    (View::Regex, MessageKey::NavRegex),
                    (View::Docs, MessageKey::NavDocs),
                ] {
                    if ui
                        .selectable_label(self.view == view, tr(lang, key))
                        .clicked()
                    {
                        self.view = view;
                    }
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    self.language_selector(ui);
                });
            });
        });
    }

    fn language_selector(&mut self, ui: &mut egui::Ui) {
        let mut selected = self.config.language;
        egui::ComboBox::from_id_salt("language_selector")
            .selected_text(selected.native_name())
            .show_ui(ui, |ui| {
                for lang in Language::ALL {
                    ui.selectable_value(&mut selected, lang, lang.native_name());
                }
            });
        if selected != self.config.language {
            info!("Switching language to {}", selected);
            self.config.language = selected;
            // Best effort; the session keeps the new language either way.
            if let Err(e) = self.loader.save(&self.config) {
                warn!("Failed to persist language change: {}", e);
            }
        }
    }
}

impl eframe::App for ExprBoxApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.nav_bar(ctx);

        let lang = self.config.language;
        egui::CentralPanel::default().show(ctx, |ui| match self.view {
            View::Home => {
                if let Some(target) = self.home_panel.render(ui, lang) {
                    self.view = target;
                }
            }
            View::Cron => self.cron_panel.render(ui, lang, &mut self.toasts),
            View::Regex => self.regex_panel.render(ui, lang, &mut self.toasts),
            View::Docs => self.docs_panel.render(ui, lang),
        });

        self.toasts.ui(ctx);
    }
}
