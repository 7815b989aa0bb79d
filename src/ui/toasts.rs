//! Toast notifications
//!
//! Transient success/error messages drawn as a top-right overlay. Toasts
//! expire after a configurable duration; expiry drives a delayed repaint
//! so a toast disappears without further input events.

use std::time::{Duration, Instant};

use eframe::egui;

/// Severity of a toast message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
}

#[derive(Debug)]
struct Toast {
    message: String,
    level: ToastLevel,
    created: Instant,
}

/// Toast overlay component
#[derive(Debug)]
pub struct Toasts {
    toasts: Vec<Toast>,
    lifetime: Duration,
}

impl Default for Toasts {
    fn default() -> Self {
        Self::new(Duration::from_millis(3000))
    }
}

impl Toasts {
    /// Create a toast overlay with the given per-toast lifetime
    pub fn new(lifetime: Duration) -> Self {
        Self {
            toasts: Vec::new(),
            lifetime,
        }
    }

    /// Queue a success toast
    pub fn success(&mut self, message: impl Into<String>) {
        self.push(message.into(), ToastLevel::Success);
    }

    /// Queue an error toast
    pub fn error(&mut self, message: impl Into<String>) {
        self.push(message.into(), ToastLevel::Error);
    }

    fn push(&mut self, message: String, level: ToastLevel) {
        self.toasts.push(Toast {
            message,
            level,
            created: Instant::now(),
        });
    }

    /// Number of currently visible toasts
    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    /// Whether no toasts are visible
    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    /// Draw the overlay and drop expired toasts
    pub fn ui(&mut self, ctx: &egui::Context) {
        let lifetime = self.lifetime;
        self.toasts.retain(|t| t.created.elapsed() < lifetime);
        if self.toasts.is_empty() {
            return;
        }

        egui::Area::new(egui::Id::new("toast_overlay"))
            .anchor(egui::Align2::RIGHT_TOP, egui::vec2(-12.0, 42.0))
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                for toast in &self.toasts {
                    let (icon, color) = match toast.level {
                        ToastLevel::Success => ("✔", egui::Color32::from_rgb(80, 200, 120)),
                        ToastLevel::Error => ("✖", egui::Color32::from_rgb(230, 90, 90)),
                    };
                    egui::Frame::popup(ui.style()).show(ui, |ui| {
                        ui.horizontal(|ui| {
                            ui.label(egui::RichText::new(icon).color(color));
                            ui.label(&toast.message);
                        });
                    });
                    ui.add_space(4.0);
                }
            });

        // Wake up again to remove the oldest toast when it expires.
        if let Some(oldest) = self.toasts.iter().map(|t| t.created.elapsed()).max() {
            ctx.request_repaint_after(lifetime.saturating_sub(oldest));
        }
    }
}
