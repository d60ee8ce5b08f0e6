// src/tags/order.rs
use super::index::CharacterMapIndex;

// Variant order is the display order: letters, then digits, then the rest.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
enum DisplayKey {
    Letter(char, char), // (folded, original)
    Digit(u32),
    Other(u32),
}

fn display_key(ch: char) -> DisplayKey {
    if ch.is_ascii_alphabetic() {
        DisplayKey::Letter(ch.to_ascii_lowercase(), ch)
    } else if let Some(d) = ch.to_digit(10) {
        DisplayKey::Digit(d)
    } else {
        DisplayKey::Other(ch as u32)
    }
}

/// All index keys in display order: ASCII letters (case-insensitive, `A`
/// before `a`), ASCII digits, then everything else by code point.
pub fn sort_characters(index: &CharacterMapIndex) -> Vec<char> {
    let mut chars: Vec<char> = index.characters().collect();
    chars.sort_by_key(|&ch| display_key(ch));
    chars
}
