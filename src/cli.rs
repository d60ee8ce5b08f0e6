// src/cli.rs
use std::path::PathBuf;

use clap::Parser;

use crate::config::consts::{DEFAULT_OUTPUT, DEFAULT_URL};
use crate::config::options::{HtmlSource, ScrapeOptions};
use crate::scrape;

/// Generate a map-to-guild-character CSV from PoEDB.
#[derive(Debug, Parser)]
#[command(name = "scrape", version)]
pub struct Args {
    /// Optional path to a saved PoEDB Maps HTML page.
    #[arg(long = "input-html", value_name = "PATH")]
    pub input_html: Option<PathBuf>,

    /// Output CSV path.
    #[arg(long, value_name = "PATH", default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// PoEDB Maps URL.
    #[arg(long, default_value = DEFAULT_URL)]
    pub url: String,
}

impl From<Args> for ScrapeOptions {
    fn from(args: Args) -> Self {
        let source = match args.input_html {
            Some(path) => HtmlSource::File(path),
            None => HtmlSource::Url(args.url),
        };
        Self { source, output: args.output }
    }
}

pub fn run() -> color_eyre::Result<()> {
    let opts = ScrapeOptions::from(Args::parse());
    let result = scrape::run(&opts)?;

    println!("Wrote {} map entries to {}", result.maps.len(), opts.output.display());
    if !result.conflicts.is_empty() {
        println!("Conflicts detected (same map with different characters):");
        for c in &result.conflicts {
            println!("- {}: {} vs {}", c.map, c.existing, c.found);
        }
    }
    Ok(())
}
