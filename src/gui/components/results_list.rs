// src/gui/components/results_list.rs
use eframe::egui::{self, RichText};

use crate::gui::{app::App, WARN_COLOR};

pub fn draw(ui: &mut egui::Ui, app: &App) {
    ui.group(|ui| {
        ui.set_width(ui.available_width());
        ui.label(RichText::new("Maps to Sacrifice").strong());

        egui::ScrollArea::vertical()
            .id_salt("results_scroll")
            .max_height(140.0)
            .auto_shrink([false, true])
            .show(ui, |ui| {
                for lookup in &app.resolution().lookups {
                    if lookup.is_found() {
                        ui.label(lookup.to_string());
                    } else {
                        ui.colored_label(WARN_COLOR, lookup.to_string());
                    }
                }
            });
    });
}
