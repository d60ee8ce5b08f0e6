// src/core/html.rs
//
// Forgiving, single-pass HTML tokenizer. Yields start tags (name + class),
// decoded text runs and end tags in document order. No tree is built.
// Comments, doctype/processing instructions and <script>/<style> bodies are
// skipped.

use super::sanitize::decode_entities;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HtmlEvent {
    /// Tag name is ASCII-lowercased; `class` is empty when absent.
    StartTag { name: String, class: String },
    Text(String),
    EndTag { name: String },
}

pub fn events(doc: &str) -> Events<'_> {
    Events { s: doc, i: 0, raw_until: None }
}

pub struct Events<'a> {
    s: &'a str,
    i: usize,
    // Inside <script>/<style>: skip to this closing tag.
    raw_until: Option<&'static str>,
}

impl<'a> Iterator for Events<'a> {
    type Item = HtmlEvent;

    fn next(&mut self) -> Option<HtmlEvent> {
        loop {
            if self.i >= self.s.len() {
                return None;
            }
            let rest = &self.s[self.i..];

            if let Some(close) = self.raw_until.take() {
                match find_ci(rest, close) {
                    Some(off) => self.i += off,
                    None => self.i = self.s.len(),
                }
                continue;
            }

            if rest.starts_with("<!--") {
                self.i += rest.find("-->").map(|e| e + 3).unwrap_or(rest.len());
                continue;
            }

            if rest.starts_with('<') {
                match rest.as_bytes().get(1) {
                    Some(b'!') | Some(b'?') => {
                        self.i += tag_end(rest).unwrap_or(rest.len());
                        continue;
                    }
                    Some(b'/') => {
                        let end = tag_end(rest).unwrap_or(rest.len());
                        self.i += end;
                        let name = tag_name(&rest[2..end]);
                        if name.is_empty() {
                            continue;
                        }
                        return Some(HtmlEvent::EndTag { name });
                    }
                    Some(c) if c.is_ascii_alphabetic() => {
                        let end = tag_end(rest).unwrap_or(rest.len());
                        self.i += end;
                        let inner = rest[1..end].trim_end_matches('>');
                        let name = tag_name(inner);
                        let self_closing = inner.ends_with('/');
                        if !self_closing {
                            self.raw_until = match name.as_str() {
                                "script" => Some("</script"),
                                "style" => Some("</style"),
                                _ => None,
                            };
                        }
                        let class = attr_value(&inner[name.len()..], "class").unwrap_or_default();
                        return Some(HtmlEvent::StartTag { name, class });
                    }
                    _ => {} // stray '<' is text
                }
            }

            // Text up to the next '<' (a leading stray '<' belongs to it)
            let first = rest.chars().next().map(char::len_utf8).unwrap_or(1);
            let end = rest[first..].find('<').map(|e| e + first).unwrap_or(rest.len());
            self.i += end;
            return Some(HtmlEvent::Text(decode_entities(&rest[..end])));
        }
    }
}

/// Byte offset just past the '>' closing the tag that starts `s`.
/// Quotes only count when they open an attribute value.
fn tag_end(s: &str) -> Option<usize> {
    let mut quote: Option<u8> = None;
    let mut prev_sig = 0u8;
    for (i, &b) in s.as_bytes().iter().enumerate() {
        match quote {
            Some(q) => {
                if b == q {
                    quote = None;
                    prev_sig = b;
                }
            }
            None => match b {
                b'>' => return Some(i + 1),
                b'"' | b'\'' if prev_sig == b'=' => quote = Some(b),
                _ if b.is_ascii_whitespace() => {}
                _ => prev_sig = b,
            },
        }
    }
    None
}

fn tag_name(inner: &str) -> String {
    inner
        .split(|c: char| c.is_ascii_whitespace() || c == '/' || c == '>')
        .next()
        .unwrap_or("")
        .to_ascii_lowercase()
}

/// Value of attribute `want` (case-insensitive name) in the attribute part of a tag.
fn attr_value(attrs: &str, want: &str) -> Option<String> {
    let b = attrs.as_bytes();
    let n = b.len();
    let mut i = 0;

    while i < n {
        while i < n && (b[i].is_ascii_whitespace() || b[i] == b'/') {
            i += 1;
        }
        let ns = i;
        while i < n && !b[i].is_ascii_whitespace() && b[i] != b'=' && b[i] != b'/' {
            i += 1;
        }
        if ns == i {
            i += 1; // stray '='
            continue;
        }
        let name = &attrs[ns..i];

        while i < n && b[i].is_ascii_whitespace() {
            i += 1;
        }
        let mut value = "";
        if i < n && b[i] == b'=' {
            i += 1;
            while i < n && b[i].is_ascii_whitespace() {
                i += 1;
            }
            if i < n && (b[i] == b'"' || b[i] == b'\'') {
                let q = b[i];
                i += 1;
                let vs = i;
                while i < n && b[i] != q {
                    i += 1;
                }
                value = &attrs[vs..i];
                i = (i + 1).min(n);
            } else {
                let vs = i;
                while i < n && !b[i].is_ascii_whitespace() {
                    i += 1;
                }
                value = &attrs[vs..i];
            }
        }

        if name.eq_ignore_ascii_case(want) {
            return Some(decode_entities(value));
        }
    }
    None
}

fn find_ci(haystack: &str, needle: &str) -> Option<usize> {
    let h = haystack.as_bytes();
    let nd = needle.as_bytes();
    if nd.is_empty() || h.len() < nd.len() {
        return None;
    }
    (0..=h.len() - nd.len()).find(|&i| h[i..i + nd.len()].eq_ignore_ascii_case(nd))
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::HtmlEvent::{EndTag, StartTag, Text};

    fn start(name: &str, class: &str) -> HtmlEvent {
        StartTag { name: name.into(), class: class.into() }
    }
    fn end(name: &str) -> HtmlEvent {
        EndTag { name: name.into() }
    }
    fn text(t: &str) -> HtmlEvent {
        Text(t.into())
    }

    #[test]
    fn tags_text_and_classes() {
        let evs: Vec<_> = events(r#"<A class="x y" href=/m>Bog &amp; Fen</a><br/>"#).collect();
        assert_eq!(evs, vec![start("a", "x y"), text("Bog & Fen"), end("a"), start("br", "")]);
    }

    #[test]
    fn unquoted_and_single_quoted_classes() {
        let evs: Vec<_> = events("<span class=colourDefault>R</span><i class='a>b'>").collect();
        assert_eq!(evs[0], start("span", "colourDefault"));
        assert_eq!(evs[3], start("i", "a>b"));
    }

    #[test]
    fn skips_comments_doctype_and_scripts() {
        let doc = "<!DOCTYPE html><!-- <a class=x>no</a> --><script>if (a<b) {}</script><p>yes</p>";
        let evs: Vec<_> = events(doc).collect();
        assert_eq!(evs, vec![start("script", ""), end("script"), start("p", ""), text("yes"), end("p")]);
    }

    #[test]
    fn stray_lt_is_text() {
        let evs: Vec<_> = events("1 < 2 <b>x</b>").collect();
        assert_eq!(evs[0], text("1 "));
        assert_eq!(evs[1], text("< 2 "));
        assert_eq!(evs[2], start("b", ""));
    }

    #[test]
    fn multibyte_text_start() {
        let evs: Vec<_> = events("<b>\u{00e9}t\u{00e9}</b>").collect();
        assert_eq!(evs[1], text("\u{00e9}t\u{00e9}"));
    }

    #[test]
    fn apostrophe_in_unquoted_text_does_not_swallow_tag() {
        let evs: Vec<_> = events("<img alt=don't><p>after</p>").collect();
        assert_eq!(evs[0], start("img", ""));
        assert_eq!(evs[2], text("after"));
    }
}
