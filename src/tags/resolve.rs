// src/tags/resolve.rs
use std::collections::BTreeSet;
use std::fmt;

use crate::config::consts::{MAX_TAG_LENGTH, MIN_TAG_LENGTH};
use super::index::CharacterMapIndex;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LookupResult {
    Found(Vec<String>),
    NotFound,
}

/// One position of a resolved tag.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TagLookup {
    /// 1-based
    pub position: usize,
    pub character: char,
    pub result: LookupResult,
}

impl TagLookup {
    pub fn is_found(&self) -> bool {
        matches!(self.result, LookupResult::Found(_))
    }
}

impl fmt::Display for TagLookup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.result {
            LookupResult::Found(maps) => {
                write!(f, "{}. {} -> {}", self.position, self.character, maps.join(", "))
            }
            LookupResult::NotFound => {
                write!(f, "{}. {} -> No map found", self.position, self.character)
            }
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Resolution {
    /// One entry per input character, in input order.
    pub lookups: Vec<TagLookup>,
    /// Distinct unresolved characters, sorted.
    pub missing: BTreeSet<char>,
}

impl Resolution {
    pub fn is_complete(&self) -> bool { self.missing.is_empty() }
}

/// Maps for one tag character. ASCII letters fall back to lowercase, then
/// uppercase, when the exact character is unknown.
pub fn resolve_char(ch: char, index: &CharacterMapIndex) -> Option<&[String]> {
    let lookup = move |c: char| index.get(c).filter(|maps| !maps.is_empty());

    if let Some(maps) = lookup(ch) {
        return Some(maps);
    }
    if !ch.is_ascii_alphabetic() {
        return None;
    }

    let lower = ch.to_ascii_lowercase();
    let upper = ch.to_ascii_uppercase();
    if lower != ch {
        if let Some(maps) = lookup(lower) {
            return Some(maps);
        }
    }
    if upper != ch && upper != lower {
        if let Some(maps) = lookup(upper) {
            return Some(maps);
        }
    }
    None
}

/// Resolve every character of `tag`. Pure; cheap enough to run per keystroke.
pub fn resolve_tag(tag: &str, index: &CharacterMapIndex) -> Resolution {
    let mut out = Resolution::default();

    for (i, ch) in tag.chars().enumerate() {
        let result = match resolve_char(ch, index) {
            Some(maps) => LookupResult::Found(maps.to_vec()),
            None => {
                out.missing.insert(ch);
                LookupResult::NotFound
            }
        };
        out.lookups.push(TagLookup { position: i + 1, character: ch, result });
    }
    out
}

/// Status line for the tag input.
pub fn status_message(tag: &str, resolution: &Resolution) -> String {
    if tag.is_empty() {
        return format!(
            "Enter {}-{} characters to see required maps.",
            MIN_TAG_LENGTH, MAX_TAG_LENGTH
        );
    }
    if resolution.missing.is_empty() {
        return s!();
    }
    let missing: Vec<String> = resolution.missing.iter().map(char::to_string).collect();
    format!("Unknown character(s): {}", missing.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tags::build_index;

    fn index() -> CharacterMapIndex {
        build_index(vec![
            vec!["Acid Lakes", "a"],
            vec!["Bog", "B"],
            vec!["Core", "c"],
            vec!["Colonnade", "C"],
        ])
        .0
    }

    #[test]
    fn exact_match_beats_case_fallback() {
        let idx = index();
        assert_eq!(resolve_char('c', &idx).unwrap(), ["Core"]);
        assert_eq!(resolve_char('C', &idx).unwrap(), ["Colonnade"]);
    }

    #[test]
    fn fallback_goes_both_ways() {
        let idx = index();
        assert_eq!(resolve_char('A', &idx).unwrap(), ["Acid Lakes"]);
        assert_eq!(resolve_char('b', &idx).unwrap(), ["Bog"]);
    }

    #[test]
    fn no_fallback_for_non_letters() {
        let idx = build_index(vec![vec!["Dunes", "1"]]).0;
        assert!(resolve_char('!', &idx).is_none());
        assert!(resolve_char('\u{00c9}', &idx).is_none());
    }

    #[test]
    fn display_lines() {
        let r = resolve_tag("a?", &index());
        assert_eq!(r.lookups[0].to_string(), "1. a -> Acid Lakes");
        assert_eq!(r.lookups[1].to_string(), "2. ? -> No map found");
    }

    #[test]
    fn status_lines() {
        let idx = index();
        assert_eq!(
            status_message("", &resolve_tag("", &idx)),
            "Enter 1-6 characters to see required maps."
        );
        assert_eq!(status_message("aB", &resolve_tag("aB", &idx)), "");
        let r = resolve_tag("zyz", &idx);
        assert_eq!(status_message("zyz", &r), "Unknown character(s): y, z");
    }
}
