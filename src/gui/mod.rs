// src/gui/mod.rs
pub mod app;
pub mod components;

pub use app::{run, App};

use eframe::egui::Color32;

/// Status and warning text (firebrick)
pub(crate) const WARN_COLOR: Color32 = Color32::from_rgb(0xB2, 0x22, 0x22);
