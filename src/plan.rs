//! Build planning: decide which decks rebuild, which skip, which outputs die.
//!
//! The planner is pure. It sees the scanned sources, the previous fingerprint
//! store, the force flag, and a predicate answering "does this deck's output
//! exist" — and produces a [`BuildPlan`]. All filesystem effects (removing
//! orphaned outputs, invoking the renderer) happen in the pipeline, so every
//! decision here is unit-testable without touching disk.
//!
//! ## Decision rule
//!
//! Per source, checked in order; the first trigger wins:
//!
//! 1. `--force` set → build ([`BuildReason::Forced`])
//! 2. no hash recorded for this path → build ([`BuildReason::New`])
//! 3. recorded hash ≠ current hash → build ([`BuildReason::Changed`])
//! 4. output artifact missing → build ([`BuildReason::MissingOutput`])
//! 5. otherwise → skip
//!
//! `to_build` and `skipped` always partition the full source list.
//!
//! ## Deletion detection
//!
//! Store keys with no matching source are decks that were removed (or moved —
//! a move is a delete plus an add, because [`scan::url_path_for`] is applied
//! to the stale key exactly as it is to live sources). Their would-be output
//! directories are reported for cleanup.

use crate::fingerprint::FingerprintStore;
use crate::scan::{self, SlideSource};
use std::collections::HashSet;

/// Why a deck landed in the rebuild set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildReason {
    /// `--force` was passed; fingerprints ignored.
    Forced,
    /// No fingerprint recorded: never successfully built.
    New,
    /// Content hash differs from the recorded fingerprint.
    Changed,
    /// Fingerprint matches but the output artifact is gone.
    MissingOutput,
}

/// A deck scheduled for rendering, with the trigger that put it there.
#[derive(Debug, Clone)]
pub struct PlannedBuild {
    pub source: SlideSource,
    pub reason: BuildReason,
}

/// Partition of all scanned sources into rebuilds and skips.
#[derive(Debug, Default)]
pub struct BuildPlan {
    pub to_build: Vec<PlannedBuild>,
    pub skipped: Vec<SlideSource>,
}

impl BuildPlan {
    pub fn total(&self) -> usize {
        self.to_build.len() + self.skipped.len()
    }
}

/// A deck present in the previous store but absent from the current scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletedDeck {
    pub rel_path: String,
    pub url_path: String,
}

/// Partition `sources` into rebuild and skip sets.
///
/// `output_exists` answers whether the deck's entry-point artifact is already
/// on disk (in production: `<output>/<url_path>/index.html`).
pub fn plan<F>(
    sources: Vec<SlideSource>,
    previous: &FingerprintStore,
    force: bool,
    output_exists: F,
) -> BuildPlan
where
    F: Fn(&SlideSource) -> bool,
{
    let mut result = BuildPlan::default();
    for source in sources {
        match decide(&source, previous, force, &output_exists) {
            Some(reason) => result.to_build.push(PlannedBuild { source, reason }),
            None => result.skipped.push(source),
        }
    }
    result
}

/// Apply the ordered decision rule to one source.
fn decide<F>(
    source: &SlideSource,
    previous: &FingerprintStore,
    force: bool,
    output_exists: &F,
) -> Option<BuildReason>
where
    F: Fn(&SlideSource) -> bool,
{
    if force {
        return Some(BuildReason::Forced);
    }
    let Some(prev_hash) = previous.get(&source.rel_path) else {
        return Some(BuildReason::New);
    };
    if prev_hash != source.hash {
        return Some(BuildReason::Changed);
    }
    if !output_exists(source) {
        return Some(BuildReason::MissingOutput);
    }
    None
}

/// Store entries whose sources vanished since the last run, with the output
/// slug each one would have produced.
pub fn deletions(previous: &FingerprintStore, sources: &[SlideSource]) -> Vec<DeletedDeck> {
    let current: HashSet<&str> = sources.iter().map(|s| s.rel_path.as_str()).collect();
    previous
        .iter()
        .filter(|(rel_path, _)| !current.contains(rel_path))
        .map(|(rel_path, _)| DeletedDeck {
            rel_path: rel_path.to_string(),
            url_path: scan::url_path_for(rel_path),
        })
        .collect()
}
