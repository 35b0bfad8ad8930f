//! Frontmatter parsing
//!
//! Note documents carry an optional leading metadata block delimited by
//! `---` markers, holding simple `key: value` lines. This is deliberately
//! not full YAML: a line is split on its first colon only and every value
//! stays a string (dates included). The parser is total; malformed input
//! degrades to "no metadata" rather than an error.

use std::collections::HashMap;

use crate::constants as C;

/// Metadata mapping parsed from a frontmatter block
pub type Metadata = HashMap<String, String>;

/// Split a raw document into its metadata mapping and body
///
/// Returns empty metadata with the input unchanged as body when the document
/// does not start with the marker, or when the closing marker is missing.
/// Duplicate keys within the block resolve to the last occurrence.
pub fn parse(raw: &str) -> (Metadata, String) {
    if !raw.starts_with(C::FRONTMATTER_MARKER) {
        return (Metadata::new(), raw.to_string());
    }

    let parts: Vec<&str> = raw.splitn(3, C::FRONTMATTER_MARKER).collect();
    if parts.len() < 3 {
        return (Metadata::new(), raw.to_string());
    }

    let mut metadata = Metadata::new();
    for line in parts[1].trim().lines() {
        if let Some((key, value)) = line.split_once(':') {
            metadata.insert(key.trim().to_string(), value.trim().to_string());
        }
    }

    (metadata, parts[2].trim().to_string())
}
