// src/bin/scrape.rs
use guild_tag::{cli, logging};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    if let Err(e) = logging::init() {
        eprintln!("Warning: logging disabled ({e})");
    }
    cli::run()
}
