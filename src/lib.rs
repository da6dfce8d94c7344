//! # deckhand
//!
//! An incremental build orchestrator for markdown slide decks. Your
//! filesystem is the catalog: every markdown file under the content root is
//! one presentation, directories become categories, and an external renderer
//! (slidev by default) turns each deck into a static site under the output
//! root.
//!
//! # Architecture: Scan, Plan, Render, Emit
//!
//! A build is one sequential pass:
//!
//! ```text
//! 1. Scan      slides/   →  SlideSource list     (frontmatter + content hash)
//! 2. Plan      sources   →  BuildPlan            (diff against fingerprint store)
//! 3. Render    plan      →  dist/<deck>/         (external renderer, per deck)
//! 4. Emit      sources   →  dist/index.html      (landing page, inline data)
//! ```
//!
//! The only state surviving between runs is the fingerprint store, a flat
//! `path → content hash` JSON file. Everything else is recomputed fresh,
//! which keeps the planner a pure function and makes re-runs idempotent:
//! unchanged decks produce zero renderer invocations and zero writes to
//! their output directories.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | Deck discovery, url path / category / title derivation |
//! | [`frontmatter`] | Restricted `key: value` (+ `\|` multi-line) header parser |
//! | [`fingerprint`] | Persisted content-hash store for incremental builds |
//! | [`plan`] | Pure build planner: rebuild set, skip set, deletion set |
//! | [`render`] | External renderer invocation contract and subprocess call |
//! | [`index`] | Landing page emission via literal placeholder substitution |
//! | [`pipeline`] | Sequential orchestration of a full build run |
//! | [`config`] | `deckhand.toml` loading and defaults |
//! | [`output`] | CLI output formatting — category-grouped inventory, summaries |
//!
//! # Design Decisions
//!
//! ## The Renderer Is a Subprocess
//!
//! Slide rendering is slidev's job. deckhand constructs the invocation
//! (source file, base URL prefix, output directory) and blocks on the exit
//! status; it never inspects the renderer's output beyond "did the entry
//! point land on disk". This keeps the orchestrator renderer-agnostic — the
//! command is plain argv in the config.
//!
//! ## Content Hashes, Not Mtimes
//!
//! Rebuild decisions compare SHA-256 content hashes, so fingerprints survive
//! `git checkout` and CI cache restores that reset modification times. The
//! hash is change detection only, nothing security-relevant.
//!
//! ## Literal Template Substitution
//!
//! The landing page is produced by replacing two assignment placeholders in
//! an HTML template with serialized values. This is intentionally not a
//! template engine: the substitution is exact string replacement, so the
//! emitted page is byte-predictable from the template and the deck list.
//!
//! ## Fail-Fast Renders
//!
//! One failed render aborts the run without saving the fingerprint store.
//! The previous state stays intact, so the next run retries the failed deck
//! and everything not yet built — never silently shipping a half-built
//! index.

pub mod config;
pub mod fingerprint;
pub mod frontmatter;
pub mod index;
pub mod output;
pub mod pipeline;
pub mod plan;
pub mod render;
pub mod scan;

#[cfg(test)]
pub(crate) mod test_helpers;
