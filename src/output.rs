//! CLI output formatting for the scan and build commands.
//!
//! # Information-First Display
//!
//! Output is information-centric, not file-centric: decks are shown by
//! category and title, with source paths as indented `Source:` context
//! lines. This keeps the listing readable as a content inventory while
//! still letting users trace a deck back to its file.
//!
//! ```text
//! Decks
//! Rust
//!     001 Intro To Systems
//!         Source: rust/intro-to-systems.md
//!     002 Ownership
//!         Source: rust/ownership.md
//! ```
//!
//! # Architecture
//!
//! Each display has a `format_*` function (returns `Vec<String>` or a
//! `String`) for testability and a `print_*` wrapper that writes to stdout.
//! Format functions are pure — no I/O, no side effects.

use crate::pipeline::BuildReport;
use crate::plan::DeletedDeck;
use crate::scan::SlideSource;
use std::collections::BTreeMap;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

// ============================================================================
// Scan inventory
// ============================================================================

/// Category-grouped deck inventory for the `scan` command.
pub fn format_scan(sources: &[SlideSource]) -> Vec<String> {
    let mut by_category: BTreeMap<&str, Vec<&SlideSource>> = BTreeMap::new();
    for source in sources {
        by_category.entry(&source.category).or_default().push(source);
    }

    let mut lines = vec!["Decks".to_string()];
    for (category, decks) in by_category {
        lines.push(category.to_string());
        for (i, deck) in decks.iter().enumerate() {
            lines.push(format!("{}{} {}", indent(1), format_index(i + 1), deck.title));
            lines.push(format!("{}Source: {}", indent(2), deck.rel_path));
            if !deck.description.is_empty() {
                lines.push(format!("{}Description: {}", indent(2), deck.description));
            }
        }
    }
    lines.push(String::new());
    lines.push(format!("{} decks total", sources.len()));
    lines
}

pub fn print_scan(sources: &[SlideSource]) {
    for line in format_scan(sources) {
        println!("{line}");
    }
}

// ============================================================================
// Build progress and report
// ============================================================================

/// One progress line per rendered deck.
pub fn format_progress(current: usize, total: usize, source: &SlideSource) -> String {
    format!(
        "[{current}/{total}] Building {} ({})",
        source.name, source.category
    )
}

/// Lines announcing removed outputs; empty when nothing was deleted.
pub fn format_deleted(deleted: &[DeletedDeck]) -> Vec<String> {
    if deleted.is_empty() {
        return Vec::new();
    }
    let mut lines = vec![format!("Cleaning up {} deleted deck(s):", deleted.len())];
    for deck in deleted {
        lines.push(format!("{}{}", indent(1), deck.url_path));
    }
    lines
}

/// Lines announcing skipped decks; empty when nothing was skipped.
pub fn format_skipped(skipped: &[SlideSource]) -> Vec<String> {
    if skipped.is_empty() {
        return Vec::new();
    }
    let mut lines = vec![format!("Skipping {} unchanged deck(s):", skipped.len())];
    for deck in skipped {
        lines.push(format!("{}{} ({})", indent(1), deck.name, deck.category));
    }
    lines
}

/// Post-build listing: every deck with its build status and output slug.
pub fn format_listing(report: &BuildReport) -> Vec<String> {
    let mut lines = vec!["All decks:".to_string()];
    for planned in &report.plan.to_build {
        lines.push(deck_line("built", &planned.source));
    }
    for source in &report.plan.skipped {
        lines.push(deck_line("skipped", source));
    }
    lines
}

fn deck_line(status: &str, source: &SlideSource) -> String {
    format!(
        "{}{:<8}{} ({}) -> {}",
        indent(1),
        status,
        source.title,
        source.category,
        source.url_path
    )
}

/// One-line build summary.
pub fn format_summary(report: &BuildReport) -> String {
    format!(
        "Built: {} | Skipped: {} | Deleted: {} | Total: {}",
        report.built(),
        report.skipped(),
        report.deleted.len(),
        report.plan.total()
    )
}

pub fn print_build_report(report: &BuildReport) {
    println!();
    for line in format_listing(report) {
        println!("{line}");
    }
    println!();
    println!("{}", format_summary(report));
}
