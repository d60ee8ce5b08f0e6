// src/gui/app.rs
use std::error::Error;

use eframe::egui::{self, ViewportBuilder};

use crate::{
    config::{consts::{APP_TITLE, MAX_TAG_LENGTH}, options::GuiOptions},
    tags::{
        CharacterMapIndex, GuildTag, Resolution,
        load_index, resolve_tag, sort_characters, status_message,
    },
};

pub fn run(options: GuiOptions) -> Result<(), Box<dyn Error>> {
    logf!("Init: data file {}", options.data_file.display());

    // Load failures are fatal: show the message, never the form.
    let (index, warnings) = match load_index(&options.data_file) {
        Ok(loaded) => loaded,
        Err(e) => {
            loge!("Init: {e}");
            return show_startup_error(e.to_string());
        }
    };
    for w in &warnings {
        logf!("Data warning: {w}");
    }

    let native = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_title(APP_TITLE)
            .with_inner_size([options.window_w, options.window_h])
            .with_min_inner_size([options.min_w, options.min_h]),
        ..Default::default()
    };
    eframe::run_native(
        APP_TITLE,
        native,
        Box::new(|_cc| Ok(Box::new(App::new(index, warnings)))),
    )?;
    Ok(())
}

fn show_startup_error(message: String) -> Result<(), Box<dyn Error>> {
    let native = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_title(APP_TITLE)
            .with_inner_size([440.0, 130.0])
            .with_resizable(false),
        ..Default::default()
    };
    eframe::run_native(
        APP_TITLE,
        native,
        Box::new(|_cc| Ok(Box::new(StartupError { message }))),
    )?;
    Ok(())
}

struct StartupError {
    message: String,
}

impl eframe::App for StartupError {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(8.0);
            ui.colored_label(super::WARN_COLOR, &self.message);
            ui.add_space(12.0);
            if ui.button("OK").clicked() {
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            }
        });
    }
}

pub struct App {
    // read-only after load
    index: CharacterMapIndex,
    table: Vec<(char, String)>,
    data_warning: Option<String>,

    // view state (UI thread only)
    pub tag_text: String,
    tag: GuildTag,
    resolution: Resolution,
    status: String,
    pub(crate) focus_pending: bool,
}

impl App {
    pub fn new(index: CharacterMapIndex, warnings: Vec<String>) -> Self {
        let table = sort_characters(&index)
            .into_iter()
            .map(|ch| {
                let maps = index.get(ch).map(|m| m.join(", ")).unwrap_or_default();
                (ch, maps)
            })
            .collect();

        let data_warning = (!warnings.is_empty())
            .then(|| format!("Data warning: {}", warnings.join(" | ")));

        let mut app = Self {
            index,
            table,
            data_warning,
            tag_text: s!(),
            tag: GuildTag::default(),
            resolution: Resolution::default(),
            status: s!(),
            focus_pending: true,
        };
        app.refresh();
        logf!("Init: {} character(s) in table", app.table.len());
        app
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn tag(&self) -> &GuildTag { &self.tag }

    #[inline]
    pub fn resolution(&self) -> &Resolution { &self.resolution }

    #[inline]
    pub fn status(&self) -> &str { &self.status }

    #[inline]
    pub fn table_rows(&self) -> &[(char, String)] { &self.table }

    #[inline]
    pub fn data_warning(&self) -> Option<&str> { self.data_warning.as_deref() }

    /// Replace the input text and recompute everything derived from it.
    pub fn set_tag_text(&mut self, text: &str) {
        self.tag_text = s!(text);
        self.refresh();
    }

    /// Append one character from the table. Ignored once the tag is full.
    pub fn append_character(&mut self, ch: char) -> bool {
        if self.tag.char_count() >= MAX_TAG_LENGTH {
            logd!("UI: tag full, {ch:?} not appended");
            return false;
        }
        self.tag_text.push(ch);
        self.refresh();
        self.focus_pending = true;
        true
    }

    /// Clean the input (line breaks, length) and re-resolve it.
    pub fn refresh(&mut self) {
        let tag = GuildTag::clean(&self.tag_text);
        if tag.as_str() != self.tag_text {
            self.tag_text = s!(tag.as_str());
        }
        self.resolution = resolve_tag(tag.as_str(), &self.index);
        self.status = status_message(tag.as_str(), &self.resolution);
        logd!(
            "UI: tag {:?} → {} found, {} missing",
            tag.as_str(),
            self.resolution.lookups.iter().filter(|l| l.is_found()).count(),
            self.resolution.missing.len()
        );
        self.tag = tag;
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if let Some(warning) = self.data_warning.clone() {
            egui::TopBottomPanel::bottom("data_warning").show(ctx, |ui| {
                ui.colored_label(super::WARN_COLOR, warning);
            });
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            super::components::tag_input::draw(ui, self);
            ui.add_space(10.0);
            super::components::results_list::draw(ui, self);
            ui.add_space(10.0);
            super::components::character_table::draw(ui, self);
        });
    }
}
