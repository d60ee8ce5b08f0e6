// src/tags/index.rs
use std::collections::{BTreeSet, HashMap};

use crate::config::consts::NO_CHARACTER_MARKER;

/// Tag character → maps that unlock it.
/// Every key is one code point; every map list is non-empty, sorted and deduplicated.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CharacterMapIndex {
    map: HashMap<char, Vec<String>>,
}

impl CharacterMapIndex {
    pub fn get(&self, ch: char) -> Option<&[String]> {
        self.map.get(&ch).map(Vec::as_slice)
    }

    pub fn contains(&self, ch: char) -> bool {
        self.map.contains_key(&ch)
    }

    pub fn len(&self) -> usize { self.map.len() }

    pub fn is_empty(&self) -> bool { self.map.is_empty() }

    /// Keys in arbitrary order; see `sort_characters` for display order.
    pub fn characters(&self) -> impl Iterator<Item = char> + '_ {
        self.map.keys().copied()
    }
}

/// Row-level problems seen while building the index. Never fatal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Rows with an empty map name.
    pub invalid_rows: usize,
    /// Tag values that were not a single character.
    pub invalid_entries: usize,
}

impl LoadReport {
    /// At most two advisory lines, one per non-zero count.
    pub fn warnings(&self) -> Vec<String> {
        let mut out = Vec::new();
        if self.invalid_rows > 0 {
            out.push(format!("{} row(s) are missing a map name.", self.invalid_rows));
        }
        if self.invalid_entries > 0 {
            out.push(format!(
                "Ignored {} tag value(s) that were not single characters.",
                self.invalid_entries
            ));
        }
        out
    }
}

/// Build the index from data rows (header already removed).
pub fn build_index<I, R, S>(rows: I) -> (CharacterMapIndex, Vec<String>)
where
    I: IntoIterator<Item = R>,
    R: AsRef<[S]>,
    S: AsRef<str>,
{
    let (index, report) = build_index_with_report(rows);
    (index, report.warnings())
}

pub fn build_index_with_report<I, R, S>(rows: I) -> (CharacterMapIndex, LoadReport)
where
    I: IntoIterator<Item = R>,
    R: AsRef<[S]>,
    S: AsRef<str>,
{
    let mut sets: HashMap<char, BTreeSet<String>> = HashMap::new();
    let mut report = LoadReport::default();

    for row in rows {
        let row = row.as_ref();
        if row.len() < 2 {
            continue; // malformed, not worth a warning
        }

        let map_name = row[0].as_ref().trim();
        if map_name.is_empty() {
            report.invalid_rows += 1;
            continue;
        }

        for field in &row[1..] {
            let value = field.as_ref().trim();
            if value.is_empty() || value == NO_CHARACTER_MARKER {
                continue;
            }
            let mut chars = value.chars();
            match (chars.next(), chars.next()) {
                (Some(ch), None) => {
                    sets.entry(ch).or_default().insert(s!(map_name));
                }
                _ => report.invalid_entries += 1,
            }
        }
    }

    let map = sets
        .into_iter()
        .map(|(ch, maps)| (ch, maps.into_iter().collect()))
        .collect();

    (CharacterMapIndex { map }, report)
}
