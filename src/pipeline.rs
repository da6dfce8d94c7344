//! Sequential build orchestration: scan → clean → plan → render → index.
//!
//! One synchronous pass, fail-fast. The stages are the pure/leaf modules;
//! this module owns the filesystem effects and their ordering:
//!
//! 1. Scan the content root (zero decks is fatal).
//! 2. Ensure the output root exists.
//! 3. Remove output directories of decks deleted since the last run.
//! 4. Plan rebuilds against the previous fingerprint store.
//! 5. Render each planned deck, blocking, recording its fingerprint only
//!    after the renderer exits successfully.
//! 6. Save the fresh store — skipped decks keep their fingerprints, decks
//!    that no longer exist drop out.
//! 7. Emit the landing page for all decks, built and skipped.
//!
//! A render failure aborts between 5 and 6: nothing is saved, so the
//! previous store stays intact and the next run retries the failed deck,
//! everything after it, and anything newly changed. Re-running with
//! unchanged inputs renders nothing and leaves deck outputs untouched.

use crate::config::Config;
use crate::fingerprint::FingerprintStore;
use crate::index::{self, IndexError};
use crate::output;
use crate::plan::{self, BuildPlan, DeletedDeck};
use crate::render::{self, RenderError, RenderJob};
use crate::scan::{self, ScanError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BuildError {
    #[error(transparent)]
    Scan(#[from] ScanError),
    #[error(transparent)]
    Render(#[from] RenderError),
    #[error(transparent)]
    Index(#[from] IndexError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// What a build run did, for summary output and tests.
#[derive(Debug)]
pub struct BuildReport {
    pub plan: BuildPlan,
    pub deleted: Vec<DeletedDeck>,
}

impl BuildReport {
    pub fn built(&self) -> usize {
        self.plan.to_build.len()
    }

    pub fn skipped(&self) -> usize {
        self.plan.skipped.len()
    }
}

/// Run the full build against `cfg`.
pub fn run_build(cfg: &Config, force: bool) -> Result<BuildReport, BuildError> {
    let sources = scan::scan(&cfg.content_dir)?;
    std::fs::create_dir_all(&cfg.output_dir)?;

    let previous = FingerprintStore::load(&cfg.cache_dir);

    // Reconcile outputs of decks whose sources vanished. Only decks whose
    // output actually existed are reported as deleted.
    let mut deleted = Vec::new();
    for candidate in plan::deletions(&previous, &sources) {
        let out_dir = cfg.output_dir.join(&candidate.url_path);
        if out_dir.exists() {
            std::fs::remove_dir_all(&out_dir)?;
            deleted.push(candidate);
        }
    }
    for line in output::format_deleted(&deleted) {
        println!("{line}");
    }

    let plan = plan::plan(sources.clone(), &previous, force, |s| {
        cfg.output_dir
            .join(&s.url_path)
            .join("index.html")
            .exists()
    });
    for line in output::format_skipped(&plan.skipped) {
        println!("{line}");
    }

    // Skipped decks carry their fingerprints forward; built decks are added
    // one by one as each render succeeds.
    let mut fresh = FingerprintStore::empty();
    for source in &plan.skipped {
        fresh.insert(source.rel_path.clone(), source.hash.clone());
    }

    let total = plan.to_build.len();
    for (i, planned) in plan.to_build.iter().enumerate() {
        println!(
            "{}",
            output::format_progress(i + 1, total, &planned.source)
        );
        let job = RenderJob::for_source(
            &planned.source,
            &cfg.content_dir,
            &cfg.output_dir,
            &cfg.base,
        );
        render::render(&cfg.renderer, &job)?;
        fresh.insert(planned.source.rel_path.clone(), planned.source.hash.clone());
    }

    fresh.save(&cfg.cache_dir)?;

    index::emit(
        &sources,
        &cfg.content_dir,
        &cfg.output_dir,
        &cfg.template,
        &cfg.base,
    )?;

    Ok(BuildReport { plan, deleted })
}
