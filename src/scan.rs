//! Slide source discovery and metadata derivation.
//!
//! Walks the content root for markdown deck sources and produces one
//! [`SlideSource`] per file, carrying everything later stages need: derived
//! url path and category, display title, description, and the content hash
//! the planner compares against the fingerprint store.
//!
//! ## Content Structure
//!
//! ```text
//! slides/                          # Content root
//! ├── welcome.md                   # Top-level deck → category "General"
//! ├── rust/
//! │   ├── intro-to-systems.md      # Category "Rust", url path "rust-intro-to-systems"
//! │   └── ownership.md
//! └── web-platform/
//!     └── css-layout.md            # Category "Web Platform"
//! ```
//!
//! ## Derivation Rules
//!
//! All rules operate on the path relative to the content root:
//!
//! - **url path**: directory components plus the filename stem, joined with
//!   `-`. This is the deck's output directory name under the output root.
//! - **category**: the first directory component, hyphen-words capitalized
//!   and space-joined. Decks sitting directly in the root fall back to
//!   `General`.
//! - **title**: frontmatter `title` verbatim when present; otherwise the
//!   filename stem with hyphen-words capitalized (`intro-to-systems` →
//!   `Intro To Systems`).
//! - **description**: first line of the frontmatter `info` value, leading
//!   `#` markers stripped.
//!
//! A moved or renamed file derives a different url path and is treated by the
//! planner as a delete plus an add, never a rename.

use crate::{fingerprint, frontmatter};
use serde::Serialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("walk error: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("no deck sources found in {0}")]
    NoDecks(PathBuf),
}

/// One discovered slide deck source.
///
/// Recomputed fresh every run; `rel_path` is the identity key used by the
/// fingerprint store.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SlideSource {
    /// Path relative to the content root, `/`-separated on all platforms.
    pub rel_path: String,
    /// Filename stem (`rust/intro.md` → `intro`).
    pub name: String,
    /// Display title: frontmatter `title` or capitalized stem.
    pub title: String,
    /// First line of frontmatter `info`, `#` markers stripped. Empty if none.
    pub description: String,
    /// Capitalized first directory component, or `General` for root decks.
    pub category: String,
    /// Output directory slug: directory components + stem joined with `-`.
    pub url_path: String,
    /// SHA-256 hex of the raw file bytes.
    pub hash: String,
}

/// Fallback category for decks directly under the content root.
pub const DEFAULT_CATEGORY: &str = "General";

/// Discover all `*.md` sources under `root`, sorted by relative path.
///
/// An empty result is fatal: a build with nothing to build is a
/// misconfiguration (wrong `--source`), not a successful no-op.
pub fn scan(root: &Path) -> Result<Vec<SlideSource>, ScanError> {
    let mut rel_paths = Vec::new();
    for entry in WalkDir::new(root) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        if !entry
            .path()
            .extension()
            .is_some_and(|e| e.eq_ignore_ascii_case("md"))
        {
            continue;
        }
        let rel = entry
            .path()
            .strip_prefix(root)
            .unwrap_or(entry.path())
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");
        rel_paths.push(rel);
    }
    rel_paths.sort();

    if rel_paths.is_empty() {
        return Err(ScanError::NoDecks(root.to_path_buf()));
    }

    rel_paths
        .into_iter()
        .map(|rel| read_source(root, rel))
        .collect()
}

/// Build a [`SlideSource`] from one file: hash the raw bytes, then derive
/// metadata from the frontmatter and the relative path.
fn read_source(root: &Path, rel_path: String) -> Result<SlideSource, ScanError> {
    let bytes = std::fs::read(root.join(&rel_path))?;
    let hash = fingerprint::hash_bytes(&bytes);
    let content = String::from_utf8_lossy(&bytes);
    let fm = frontmatter::extract(&content);

    let name = file_stem(&rel_path).to_string();
    let title = fm
        .get("title")
        .cloned()
        .unwrap_or_else(|| capitalize_hyphenated(&name));
    let description = fm
        .get("info")
        .map(|info| first_info_line(info))
        .unwrap_or_default();

    Ok(SlideSource {
        url_path: url_path_for(&rel_path),
        category: category_for(&rel_path),
        name,
        title,
        description,
        hash,
        rel_path,
    })
}

/// Derive the output slug for a root-relative source path.
///
/// `rust/intro.md` → `rust-intro`; `welcome.md` → `welcome`. The planner uses
/// this same function for sources that only exist in the previous fingerprint
/// store, so cleanup and live builds always agree on output locations.
pub fn url_path_for(rel_path: &str) -> String {
    let mut segments = dir_segments(rel_path);
    segments.push(file_stem(rel_path));
    segments.join("-")
}

/// Derive the display category for a root-relative source path.
pub fn category_for(rel_path: &str) -> String {
    match dir_segments(rel_path).first() {
        Some(first) => capitalize_hyphenated(first),
        None => DEFAULT_CATEGORY.to_string(),
    }
}

/// Capitalize each hyphen-separated word and join with spaces:
/// `intro-to-systems` → `Intro To Systems`.
pub fn capitalize_hyphenated(s: &str) -> String {
    s.split('-')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// First line of an `info` value with leading `#` markers and the whitespace
/// after them stripped.
fn first_info_line(info: &str) -> String {
    let line = info.lines().next().unwrap_or_default();
    line.trim_start_matches('#').trim_start().to_string()
}

fn dir_segments(rel_path: &str) -> Vec<&str> {
    let mut parts: Vec<&str> = rel_path.split('/').filter(|s| !s.is_empty()).collect();
    parts.pop(); // drop the filename
    parts
}

fn file_stem(rel_path: &str) -> &str {
    let filename = rel_path.rsplit('/').next().unwrap_or(rel_path);
    filename.strip_suffix(".md").unwrap_or(filename)
}
