//! Shared test utilities for the deckhand test suite.
//!
//! Provides fixture writers and a `SlideSource` constructor that fills the
//! derived fields the same way the scanner does, so planner and output tests
//! don't need a filesystem.

use crate::scan::{self, SlideSource};
use std::path::Path;

/// Write a deck source at `rel` under `root`, creating parent directories.
pub fn write_deck(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(path, content).unwrap();
}

/// An in-memory `SlideSource` with metadata derived from `rel_path`, as the
/// scanner would produce for a file with no frontmatter.
pub fn source(rel_path: &str, hash: &str) -> SlideSource {
    let name = rel_path
        .rsplit('/')
        .next()
        .unwrap()
        .trim_end_matches(".md")
        .to_string();
    SlideSource {
        url_path: scan::url_path_for(rel_path),
        category: scan::category_for(rel_path),
        title: scan::capitalize_hyphenated(&name),
        description: String::new(),
        name,
        hash: hash.to_string(),
        rel_path: rel_path.to_string(),
    }
}
