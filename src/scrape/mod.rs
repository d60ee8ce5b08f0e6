// src/scrape/mod.rs
//
// Data refresh: PoEDB page → map/character pairs → CSV.

mod export;
mod poedb;

use std::path::Path;

use crate::error::ScrapeError;

pub use export::{write_csv, write_csv_file};
pub use poedb::{parse_maps, Conflict, MapScanner, ScrapeResult};

/// Scan `html`, refuse an empty result, write the CSV to `output`.
pub fn scrape_document(html: &str, output: &Path) -> Result<ScrapeResult, ScrapeError> {
    let result = parse_maps(html);
    if result.maps.is_empty() {
        loge!("Scrape: no map entries in {} bytes of HTML", html.len());
        return Err(ScrapeError::Empty);
    }
    write_csv_file(output, &result.maps)?;
    Ok(result)
}

/// Read a saved page. Invalid UTF-8 is replaced rather than rejected.
pub fn read_html_file(path: &Path) -> Result<String, ScrapeError> {
    let bytes = std::fs::read(path)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

#[cfg(feature = "cli")]
pub fn run(opts: &crate::config::options::ScrapeOptions) -> Result<ScrapeResult, ScrapeError> {
    use crate::config::options::HtmlSource;

    let html = match &opts.source {
        HtmlSource::File(path) => {
            logf!("Scrape: reading {}", path.display());
            read_html_file(path)?
        }
        HtmlSource::Url(url) => crate::core::net::fetch_html(url)?,
    };
    scrape_document(&html, &opts.output)
}
