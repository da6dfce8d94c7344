//! Frontmatter extraction for slide sources.
//!
//! Slide decks carry their metadata in a leading `---`-delimited block:
//!
//! ```text
//! ---
//! title: Intro to Systems
//! info: |
//!   # A workshop deck
//!   Three hours, bring a laptop.
//! ---
//! # First slide
//! ```
//!
//! This is deliberately *not* a YAML parser. The renderer owns the full
//! frontmatter semantics; deckhand only needs the handful of scalar keys it
//! displays (`title`, `info`), so the grammar is restricted to `key: value`
//! lines plus a `|` multi-line continuation form. Anything the parser doesn't
//! recognize is skipped, and input without a leading block yields an empty
//! map — malformed metadata is never a build error.
//!
//! The parser is an explicit two-state machine: scanning for a key line, or
//! accumulating a multi-line value until the next key line ends it. A repeated
//! key silently overwrites the earlier occurrence.

use std::collections::HashMap;

/// Extract the leading frontmatter block as a key → value map.
///
/// Returns an empty map when the content has no leading `---` block. Keys are
/// trimmed; multi-line values are newline-joined from their trimmed
/// continuation lines and outer-trimmed. Accepts CRLF line endings.
pub fn extract(content: &str) -> HashMap<String, String> {
    let Some(block) = leading_block(content) else {
        return HashMap::new();
    };

    let mut fields = HashMap::new();
    // (key, value accumulated so far); Some(..) means we are in the
    // accumulating state and continuation lines extend this entry.
    let mut current: Option<(String, String)> = None;

    for line in block.lines() {
        if let Some((key, rest)) = split_key_line(line) {
            if let Some((k, v)) = current.take() {
                fields.insert(k, v.trim().to_string());
            }
            let value = rest.trim();
            // A bare `|` announces a multi-line value; the lines that follow
            // are the actual content.
            let value = if value == "|" { "" } else { value };
            current = Some((key.to_string(), value.to_string()));
        } else if let Some((_, value)) = current.as_mut() {
            let trimmed = line.trim();
            if !trimmed.is_empty() {
                if !value.is_empty() {
                    value.push('\n');
                }
                value.push_str(trimmed);
            }
        }
    }

    if let Some((k, v)) = current {
        fields.insert(k, v.trim().to_string());
    }

    fields
}

/// The text between the opening `---` line and the next line starting with
/// `---`, or `None` if the content doesn't open with a delimiter.
fn leading_block(content: &str) -> Option<&str> {
    let rest = content
        .strip_prefix("---\r\n")
        .or_else(|| content.strip_prefix("---\n"))?;
    let end = rest.find("\n---")?;
    Some(rest[..end].trim_end_matches('\r'))
}

/// Split a `key: value` line, returning `None` unless the key matches the
/// restricted `[A-Za-z_-]+` alphabet. Indented keys are continuation content,
/// not keys — the alphabet check rejects the leading whitespace.
fn split_key_line(line: &str) -> Option<(&str, &str)> {
    let (key, rest) = line.split_once(':')?;
    if key.is_empty() {
        return None;
    }
    if !key
        .chars()
        .all(|c| c.is_ascii_alphabetic() || c == '_' || c == '-')
    {
        return None;
    }
    Some((key, rest))
}
