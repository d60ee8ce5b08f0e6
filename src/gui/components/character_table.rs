// src/gui/components/character_table.rs
//
// Static reference table: every known character and the maps granting it,
// in display order (letters, digits, symbols). Double-clicking a row appends
// its character to the tag.

use eframe::egui::{self, Align, Layout, RichText, TextWrapMode};
use egui_extras::{Column, TableBuilder};

use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let rows = app.table_rows();

    ui.horizontal(|ui| {
        ui.label(RichText::new("All Guild Tag Characters (A-Z, 0-9, then symbols)").strong());
        ui.label(format!("{} characters", rows.len()));
    });

    // Scroll bars take space instead of floating over the maps column
    {
        let s = &mut ui.style_mut().spacing.scroll;
        s.floating = false;
        s.bar_width = 10.0;
        s.handle_min_length = 48.0;
    }

    let avail_h = ui.available_height();
    let mut picked: Option<char> = None;

    TableBuilder::new(ui)
        .id_salt("characters_table")
        .striped(true)
        .sense(egui::Sense::click())
        .cell_layout(Layout::left_to_right(Align::Center))
        .column(Column::exact(90.0))
        .column(Column::remainder().clip(true))
        .min_scrolled_height(0.0)
        .max_scroll_height(avail_h)
        .header(24.0, |mut header| {
            header.col(|ui| {
                ui.centered_and_justified(|ui| { ui.strong("Character"); });
            });
            header.col(|ui| { ui.strong("Maps"); });
        })
        .body(|body| {
            body.rows(20.0, rows.len(), |mut row| {
                let (ch, maps) = &rows[row.index()];
                row.col(|ui| {
                    ui.centered_and_justified(|ui| { ui.label(ch.to_string()); });
                });
                row.col(|ui| {
                    ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                    ui.label(maps);
                });
                if row.response().double_clicked() {
                    picked = Some(*ch);
                }
            });
        });

    if let Some(ch) = picked {
        app.append_character(ch);
    }
}
