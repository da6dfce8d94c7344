//! Landing page emission.
//!
//! The index page is a hand-maintained HTML template with two assignment
//! placeholders the emitter fills in:
//!
//! ```text
//! const baseUrl = '';
//! const slides = [];
//! ```
//!
//! Substitution is literal, first-occurrence string replacement — not a
//! template engine. A template missing a placeholder is left untouched for
//! that placeholder; the page author opting out of one of the assignments is
//! their call, and keeping the mechanism dumb keeps the emitted bytes
//! predictable. The slide list is serialized as pretty JSON so the generated
//! page stays diffable.
//!
//! The index is regenerated on every successful run, covering built and
//! skipped decks alike, with each deck's last-modified date read from
//! filesystem metadata at emission time.

use crate::scan::SlideSource;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::Path;
use thiserror::Error;

/// Placeholder for the base URL assignment.
pub const BASE_PLACEHOLDER: &str = "const baseUrl = '';";
/// Placeholder for the slide list assignment.
pub const SLIDES_PLACEHOLDER: &str = "const slides = [];";

#[derive(Error, Debug)]
pub enum IndexError {
    #[error("failed to read template {path}: {source}")]
    Template {
        path: String,
        source: std::io::Error,
    },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// One deck entry as embedded in the landing page.
///
/// Field order is the serialization order — the page's inline data is part of
/// the observable output.
#[derive(Debug, Clone, Serialize)]
pub struct IndexEntry {
    pub name: String,
    pub title: String,
    pub description: String,
    pub category: String,
    /// Deck slug, relative to the base URL.
    pub path: String,
    /// Source file path as scanned, for provenance.
    pub file: String,
    pub hash: String,
    /// `YYYY-MM-DD`, UTC, from the source file's mtime.
    #[serde(rename = "lastModified")]
    pub last_modified: String,
}

impl IndexEntry {
    /// Build an entry from a source, reading its mtime from disk.
    pub fn from_source(source: &SlideSource, content_root: &Path) -> std::io::Result<Self> {
        let file_path = content_root.join(&source.rel_path);
        let mtime = std::fs::metadata(&file_path)?.modified()?;
        Ok(Self {
            name: source.name.clone(),
            title: source.title.clone(),
            description: source.description.clone(),
            category: source.category.clone(),
            path: source.url_path.clone(),
            file: file_path.display().to_string(),
            hash: source.hash.clone(),
            last_modified: format_date(mtime),
        })
    }
}

/// Substitute both placeholders in the template text.
///
/// Pure function over strings; file IO lives in [`emit`].
pub fn render_index(
    template: &str,
    base: &str,
    entries: &[IndexEntry],
) -> Result<String, serde_json::Error> {
    let slides_json = serde_json::to_string_pretty(entries)?;
    Ok(template
        .replacen(BASE_PLACEHOLDER, &format!("const baseUrl = '{base}';"), 1)
        .replacen(SLIDES_PLACEHOLDER, &format!("const slides = {slides_json};"), 1))
}

/// Read the template, substitute, and write `<output_root>/index.html`.
pub fn emit(
    sources: &[SlideSource],
    content_root: &Path,
    output_root: &Path,
    template_path: &Path,
    base: &str,
) -> Result<(), IndexError> {
    let template =
        std::fs::read_to_string(template_path).map_err(|source| IndexError::Template {
            path: template_path.display().to_string(),
            source,
        })?;

    let entries = sources
        .iter()
        .map(|s| IndexEntry::from_source(s, content_root))
        .collect::<Result<Vec<_>, _>>()?;

    let page = render_index(&template, base, &entries)?;
    std::fs::write(output_root.join("index.html"), page)?;
    Ok(())
}

fn format_date(mtime: std::time::SystemTime) -> String {
    DateTime::<Utc>::from(mtime).format("%Y-%m-%d").to_string()
}
