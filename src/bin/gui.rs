// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use guild_tag::{config::options::GuiOptions, gui, logging};

fn main() {
    if let Err(e) = logging::init() {
        eprintln!("Logging disabled: {e}");
    }

    // Optional first argument: data file path
    let options = GuiOptions::from_arg(std::env::args_os().nth(1));

    if let Err(e) = gui::run(options) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
