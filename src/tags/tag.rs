// src/tags/tag.rs
use crate::config::consts::MAX_TAG_LENGTH;

/// Tag text as accepted from the input field: no line breaks, at most
/// `MAX_TAG_LENGTH` code points. Characters are not validated otherwise.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GuildTag(String);

impl GuildTag {
    pub fn clean(input: &str) -> Self {
        Self(
            input
                .chars()
                .filter(|c| !matches!(c, '\n' | '\r'))
                .take(MAX_TAG_LENGTH)
                .collect(),
        )
    }

    pub fn as_str(&self) -> &str { &self.0 }

    pub fn char_count(&self) -> usize { self.0.chars().count() }

    pub fn is_empty(&self) -> bool { self.0.is_empty() }

    /// "n/6"
    pub fn counter_label(&self) -> String {
        format!("{}/{}", self.char_count(), MAX_TAG_LENGTH)
    }
}
