// src/scrape/poedb.rs
//
// PoEDB Maps page → (map name, guild tag character).
//
// The page lists each map as an anchor (class contains "itemclass_map" and
// "Map") and, somewhere after it, a "Guild Tag Editor:" label followed by a
// span (class contains "colourDefault") holding the character. The scanner
// walks tokenizer events once and keeps only an explicit state.

use std::collections::BTreeMap;

use crate::config::consts::{GUILD_CHAR_CLASS, GUILD_TAG_LABEL, MAP_ANCHOR_CLASSES};
use crate::core::html::{self, HtmlEvent};

/// Same map seen twice with different characters. The first value is kept.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Conflict {
    pub map: String,
    pub existing: String,
    pub found: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScrapeResult {
    /// Map name → character, ordered by map name.
    pub maps: BTreeMap<String, String>,
    pub conflicts: Vec<Conflict>,
}

/// Progress towards the guild tag character of the current card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum GuildPhase {
    #[default]
    Idle,
    /// Saw the label; waiting for the character span.
    Awaiting,
    /// Inside the character span; next text is the character.
    Capturing,
}

/// The map name and the guild character are tracked independently: an
/// anchor can open while a character span is still pending and vice versa.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct ScanState {
    /// Inside a map anchor; next text is the map name.
    map_name: bool,
    guild: GuildPhase,
}

#[derive(Debug, Default)]
pub struct MapScanner {
    state: ScanState,
    last_map: Option<String>,
    result: ScrapeResult,
}

impl MapScanner {
    pub fn new() -> Self { Self::default() }

    pub fn feed(&mut self, event: HtmlEvent) {
        let state = &mut self.state;

        match event {
            HtmlEvent::StartTag { name, class } => {
                if name == "a" && is_map_anchor(&class) {
                    state.map_name = true;
                } else if name == "span"
                    && state.guild != GuildPhase::Idle
                    && class.contains(GUILD_CHAR_CLASS)
                {
                    state.guild = GuildPhase::Capturing;
                }
            }

            HtmlEvent::Text(raw) => {
                let text = raw.trim();
                if text.is_empty() {
                    return;
                }
                if state.map_name {
                    state.map_name = false;
                    self.last_map = Some(s!(text));
                } else if text == GUILD_TAG_LABEL {
                    // a repeated label inside the span keeps the capture open
                    if state.guild == GuildPhase::Idle {
                        state.guild = GuildPhase::Awaiting;
                    }
                } else if state.guild == GuildPhase::Capturing {
                    state.guild = GuildPhase::Idle;
                    self.record(text);
                }
            }

            HtmlEvent::EndTag { name } => {
                if name == "span" && state.guild == GuildPhase::Capturing {
                    state.guild = GuildPhase::Awaiting;
                } else if name == "a" {
                    state.map_name = false;
                }
            }
        }
    }

    fn record(&mut self, ch: &str) {
        let Some(map) = self.last_map.as_deref() else {
            logd!("Scan: character {ch:?} with no preceding map, skipped");
            return;
        };

        match self.result.maps.get(map) {
            Some(existing) if existing != ch => {
                logd!("Scan: conflict for {map}: {existing} vs {ch}");
                self.result.conflicts.push(Conflict {
                    map: s!(map),
                    existing: existing.clone(),
                    found: s!(ch),
                });
            }
            _ => {
                self.result.maps.insert(s!(map), s!(ch));
            }
        }
    }

    pub fn finish(self) -> ScrapeResult {
        self.result
    }
}

fn is_map_anchor(class: &str) -> bool {
    MAP_ANCHOR_CLASSES.iter().all(|c| class.contains(c))
}

/// Scan a whole page.
pub fn parse_maps(doc: &str) -> ScrapeResult {
    let t = std::time::Instant::now();
    let mut scanner = MapScanner::new();
    for ev in html::events(doc) {
        scanner.feed(ev);
    }
    let out = scanner.finish();
    logd!(
        "Scan: {} map(s), {} conflict(s) in {:?}",
        out.maps.len(),
        out.conflicts.len(),
        t.elapsed()
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    // Shape of one PoEDB map card, trimmed to what the scanner looks at.
    fn card(map: &str, ch: &str) -> String {
        format!(
            r#"<div class="itemboxstats">
                 <a class="itemclass_map whiteitem Map" href="/us/{map}">{map}</a>
                 <div class="property">Map Tier: <span class="colourDefault">5</span></div>
                 <div class="property">Guild Tag Editor: <span class="colourDefault">{ch}</span></div>
               </div>"#
        )
    }

    #[test]
    fn picks_character_after_label_not_other_spans() {
        let doc = card("Acid Lakes", "a");
        let out = parse_maps(&doc);
        assert_eq!(out.maps.len(), 1);
        assert_eq!(out.maps["Acid Lakes"], "a");
        assert!(out.conflicts.is_empty());
    }

    #[test]
    fn several_maps_and_entities() {
        let doc = [card("Bog", "B"), card("Arena", "&amp;"), card("Wharf", "w")].concat();
        let out = parse_maps(&doc);
        let keys: Vec<&str> = out.maps.keys().map(String::as_str).collect();
        assert_eq!(keys, ["Arena", "Bog", "Wharf"]);
        assert_eq!(out.maps["Arena"], "&");
    }

    #[test]
    fn conflicting_duplicate_keeps_first() {
        let doc = [card("Bog", "B"), card("Bog", "b"), card("Bog", "B")].concat();
        let out = parse_maps(&doc);
        assert_eq!(out.maps["Bog"], "B");
        assert_eq!(
            out.conflicts,
            vec![Conflict { map: "Bog".into(), existing: "B".into(), found: "b".into() }]
        );
    }

    #[test]
    fn non_map_anchors_are_ignored() {
        let doc = r#"<a class="itemclass_map">Not a map</a>
                     Guild Tag Editor: <span class="colourDefault">x</span>"#;
        assert!(parse_maps(doc).maps.is_empty());
    }

    #[test]
    fn empty_span_keeps_waiting_for_character() {
        let doc = r#"<a class="itemclass_map Map">Crater</a>
                     Guild Tag Editor: <span class="colourDefault"> </span>
                     <span class="colourDefault">c</span>"#;
        assert_eq!(parse_maps(doc).maps["Crater"], "c");
    }

    #[test]
    fn label_inside_a_later_card_uses_latest_map() {
        let doc = r#"<a class="itemclass_map Map">Dunes</a>
                     <a class="itemclass_map Map">Estuary</a>
                     Guild Tag Editor: <span class="colourDefault">e</span>"#;
        let out = parse_maps(doc);
        assert_eq!(out.maps.len(), 1);
        assert_eq!(out.maps["Estuary"], "e");
    }

    #[test]
    fn label_repeated_inside_span_keeps_capture() {
        let doc = r#"<a class="itemclass_map Map">Bog</a>
                     Guild Tag Editor: <span class="colourDefault"><b>Guild Tag Editor:</b>q</span>"#;
        assert_eq!(parse_maps(doc).maps.get("Bog").map(String::as_str), Some("q"));
    }

    #[test]
    fn anchor_inside_span_names_map_and_keeps_capture() {
        let doc = r#"Guild Tag Editor: <span class="colourDefault">
                       <a class="itemclass_map Map">Cells</a>k</span>"#;
        let out = parse_maps(doc);
        assert_eq!(out.maps.len(), 1);
        assert_eq!(out.maps["Cells"], "k");
    }

    #[test]
    fn label_before_any_map_is_skipped() {
        let doc = r#"Guild Tag Editor: <span class="colourDefault">z</span>
                     <a class="itemclass_map Map">Docks</a>"#;
        let out = parse_maps(doc);
        assert!(out.maps.is_empty());
        assert!(out.conflicts.is_empty());
    }
}
