//! Attribute and class extraction.
//!
//! Works on the raw attribute text captured by the tokenizer. Attributes and
//! classes are extracted independently from the same text: the class list is
//! read straight from the `class="..."` span rather than from the parsed map.

use once_cell::sync::Lazy;
use regex::{Match, Regex};
use sprig_dom::AttributesMap;

/// `key` or `key="value"`.
static ATTRIBUTE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"([A-Za-z_:][A-Za-z0-9_:.-]*)(?:="([^"]*)")?"#).expect("valid regex")
});

/// `class="..."` at the start of the text or after whitespace.
static CLASS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?:^|\s)class="([^"]*)""#).expect("valid regex"));

/// Parse `key="value"` pairs and bare `key`s.
///
/// Bare keys map to `""`. When a key repeats, the last value wins. Anything
/// that is not an identifier (stray quotes, `=`, `/`) is skipped; an unquoted
/// value is read as another bare key.
#[must_use]
pub fn parse_attributes(raw: &str) -> AttributesMap {
    let mut attributes = AttributesMap::new();
    for caps in ATTRIBUTE.captures_iter(raw) {
        let value = caps.get(2).as_ref().map_or("", Match::as_str);
        let _ = attributes.insert(caps[1].to_string(), value.to_string());
    }
    attributes
}

/// Split the first `class="..."` value into whitespace-separated tokens.
///
/// Order and duplicates are preserved. Returns an empty list when there is no
/// `class` attribute.
#[must_use]
pub fn parse_classes(raw: &str) -> Vec<String> {
    CLASS.captures(raw).map_or_else(Vec::new, |caps| {
        caps[1].split_whitespace().map(str::to_string).collect()
    })
}
