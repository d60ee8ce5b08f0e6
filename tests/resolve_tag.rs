// tests/resolve_tag.rs
//
// Tag resolution through the public API, plus the GUI state that wraps it.
//
use std::collections::BTreeSet;

use guild_tag::gui::App;
use guild_tag::tags::{
    build_index, resolve_tag, status_message, CharacterMapIndex, GuildTag, LookupResult,
};

fn index(rows: &[(&str, &str)]) -> CharacterMapIndex {
    build_index(rows.iter().map(|(m, c)| vec![*m, *c])).0
}

fn alphabet_without_c_and_f() -> CharacterMapIndex {
    index(&[("Alleyways", "a"), ("Basilica", "b"), ("Dunes", "d"), ("Estuary", "e")])
}

#[test]
fn empty_tag_resolves_to_nothing() {
    let r = resolve_tag("", &alphabet_without_c_and_f());
    assert!(r.lookups.is_empty());
    assert!(r.missing.is_empty());
}

#[test]
fn uppercase_falls_back_to_lowercase_key() {
    let idx = index(&[("M1", "a")]);
    let r = resolve_tag("A", &idx);
    assert_eq!(r.lookups.len(), 1);
    assert_eq!(r.lookups[0].position, 1);
    assert_eq!(r.lookups[0].character, 'A');
    assert_eq!(r.lookups[0].result, LookupResult::Found(vec!["M1".to_string()]));
}

#[test]
fn six_chars_with_two_missing() {
    let r = resolve_tag("abcdef", &alphabet_without_c_and_f());
    assert_eq!(r.lookups.len(), 6);

    let not_found: Vec<usize> = r
        .lookups
        .iter()
        .filter(|l| l.result == LookupResult::NotFound)
        .map(|l| l.position)
        .collect();
    assert_eq!(not_found, vec![3, 6]);
    assert_eq!(r.missing, BTreeSet::from(['c', 'f']));
    assert!(!r.is_complete());
}

#[test]
fn missing_set_is_distinct_and_sorted() {
    let r = resolve_tag("zz?az", &alphabet_without_c_and_f());
    assert_eq!(r.missing.iter().collect::<String>(), "?z");
    assert_eq!(r.lookups.len(), 5);
}

#[test]
fn resolving_twice_is_identical() {
    let idx = alphabet_without_c_and_f();
    let first = resolve_tag("aXe!", &idx);
    let second = resolve_tag("aXe!", &idx);
    assert_eq!(first, second);
}

#[test]
fn unknown_symbols_are_just_not_found() {
    let r = resolve_tag("\u{1F600}", &alphabet_without_c_and_f());
    assert_eq!(r.lookups[0].result, LookupResult::NotFound);
    assert_eq!(status_message("\u{1F600}", &r), "Unknown character(s): \u{1F600}");
}

#[test]
fn clean_strips_breaks_and_clamps() {
    assert_eq!(GuildTag::clean("ab\r\ncd").as_str(), "abcd");
    let tag = GuildTag::clean("abcdefgh");
    assert_eq!(tag.as_str(), "abcdef");
    assert_eq!(tag.counter_label(), "6/6");
    assert_eq!(GuildTag::clean("\u{00e9}\u{00e9}\u{00e9}\u{00e9}\u{00e9}\u{00e9}\u{00e9}").char_count(), 6);
}

#[test]
fn app_state_follows_edits() {
    let idx = alphabet_without_c_and_f();
    let mut app = App::new(idx, vec!["1 row(s) are missing a map name.".into()]);

    assert_eq!(app.status(), "Enter 1-6 characters to see required maps.");
    assert_eq!(app.data_warning(), Some("Data warning: 1 row(s) are missing a map name."));
    assert_eq!(app.table_rows()[0], ('a', "Alleyways".to_string()));

    app.set_tag_text("ab\ncdefgh");
    assert_eq!(app.tag_text, "abcdef");
    assert_eq!(app.tag().counter_label(), "6/6");
    assert_eq!(app.resolution().lookups.len(), 6);
    assert_eq!(app.status(), "Unknown character(s): c, f");

    app.set_tag_text("AB");
    assert_eq!(app.status(), "");
    assert_eq!(app.resolution().lookups[1].to_string(), "2. B -> Basilica");
}

#[test]
fn appending_from_the_table_stops_at_six() {
    let mut app = App::new(alphabet_without_c_and_f(), Vec::new());

    for ch in ['a', 'b', 'd', 'e', 'a', 'b'] {
        assert!(app.append_character(ch));
    }
    assert_eq!(app.tag_text, "abdeab");
    assert_eq!(app.tag().counter_label(), "6/6");
    assert_eq!(app.resolution().lookups.len(), 6);
    assert_eq!(app.status(), "");

    assert!(!app.append_character('d'));
    assert_eq!(app.tag_text, "abdeab");
    assert_eq!(app.resolution().lookups.len(), 6);
}

#[test]
fn appended_unknown_character_updates_status() {
    let mut app = App::new(alphabet_without_c_and_f(), Vec::new());
    app.set_tag_text("a");
    assert!(app.append_character('?'));
    assert_eq!(app.tag().counter_label(), "2/6");
    assert_eq!(app.status(), "Unknown character(s): ?");
}
