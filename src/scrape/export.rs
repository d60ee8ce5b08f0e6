// src/scrape/export.rs
use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use csv::WriterBuilder;

use crate::config::consts::{CSV_SEP, OUTPUT_HEADERS};
use crate::error::ScrapeError;

/// Header row, then one `map,character` row per map in map-name order.
pub fn write_csv<W: Write>(w: W, maps: &BTreeMap<String, String>) -> Result<(), csv::Error> {
    let mut out = WriterBuilder::new().delimiter(CSV_SEP).from_writer(w);
    out.write_record(OUTPUT_HEADERS)?;
    for (map, ch) in maps {
        out.write_record([map.as_str(), ch.as_str()])?;
    }
    out.flush()?;
    Ok(())
}

/// Create/truncate `path` (parent directories included) and write the CSV.
pub fn write_csv_file(path: &Path, maps: &BTreeMap<String, String>) -> Result<(), ScrapeError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    let file = File::create(path)?;
    write_csv(BufWriter::new(file), maps)?;
    logf!("Export: {} row(s) → {}", maps.len(), path.display());
    Ok(())
}

fn ensure_directory(dir: &Path) -> std::io::Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(std::io::Error::new(
            std::io::ErrorKind::AlreadyExists,
            format!("Path exists but is not a directory: {}", dir.display()),
        ));
    }
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    Ok(())
}
