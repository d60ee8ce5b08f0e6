// src/gui/components/tag_input.rs
//
// Tag entry, live n/6 counter and the status line. Every edit goes through
// App::refresh, which cleans the text and re-resolves it.

use eframe::egui::{self, RichText, TextEdit};

use crate::config::consts::{MAX_TAG_LENGTH, MIN_TAG_LENGTH};
use crate::gui::{app::App, WARN_COLOR};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.group(|ui| {
        ui.set_width(ui.available_width());
        ui.label(RichText::new("Guild Tag").strong());

        ui.horizontal(|ui| {
            ui.label(format!("Tag ({}-{} characters):", MIN_TAG_LENGTH, MAX_TAG_LENGTH));

            let resp = ui.add(
                TextEdit::singleline(&mut app.tag_text)
                    .char_limit(MAX_TAG_LENGTH)
                    .desired_width(160.0),
            );
            if app.focus_pending {
                resp.request_focus();
                app.focus_pending = false;
            }
            if resp.changed() {
                app.refresh();
            }

            ui.label(app.tag().counter_label());
        });

        if !app.status().is_empty() {
            ui.colored_label(WARN_COLOR, app.status());
        }
    });
}
