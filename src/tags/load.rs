// src/tags/load.rs
use std::fs;
use std::path::Path;

use csv::ReaderBuilder;

use crate::config::consts::CSV_SEP;
use crate::error::DataError;
use super::index::{build_index_with_report, CharacterMapIndex};

/// Load the data file at `path` into an index plus advisory warnings.
pub fn load_index(path: &Path) -> Result<(CharacterMapIndex, Vec<String>), DataError> {
    if !path.exists() {
        return Err(DataError::NotFound { path: path.to_path_buf() });
    }
    let text = fs::read_to_string(path)?;
    logd!("Data: read {} ({} bytes)", path.display(), text.len());
    load_index_from_str(&text)
}

/// Same as `load_index`, from text already in memory.
/// The first line is the header and is discarded unread, even when blank.
pub fn load_index_from_str(text: &str) -> Result<(CharacterMapIndex, Vec<String>), DataError> {
    let text = strip_bom(text);
    if text.is_empty() {
        return Err(DataError::Format(s!("Data file is empty.")));
    }

    let mut rows = parse_rows(text)?.into_iter();
    // Blank lines never reach the parsed rows, so a blank header is already gone
    if !header_is_blank(text) {
        rows.next();
    }

    let (index, report) = build_index_with_report(rows);
    logf!(
        "Data: {} character(s) indexed, {} invalid row(s), {} invalid value(s)",
        index.len(),
        report.invalid_rows,
        report.invalid_entries
    );
    Ok((index, report.warnings()))
}

/// Comma-separated text → rows of raw fields. Tolerates a leading BOM and
/// rows of differing width; blank lines are dropped.
pub fn parse_rows(text: &str) -> Result<Vec<Vec<String>>, csv::Error> {
    let text = strip_bom(text);
    let mut reader = ReaderBuilder::new()
        .delimiter(CSV_SEP)
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(|f| s!(f)).collect());
    }
    Ok(rows)
}

fn strip_bom(text: &str) -> &str {
    text.strip_prefix('\u{feff}').unwrap_or(text)
}

fn header_is_blank(text: &str) -> bool {
    let first = text.split('\n').next().unwrap_or_default();
    first.trim_end_matches('\r').is_empty()
}
