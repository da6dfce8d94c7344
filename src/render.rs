//! External renderer invocation.
//!
//! deckhand does not render slides. Each deck that needs building is handed
//! to an external renderer command (by default `npx slidev build`) as a
//! blocking subprocess with inherited stdio, one deck at a time:
//!
//! ```text
//! npx slidev build <source.md> --base <base><url_path>/ --out <output_dir>
//! ```
//!
//! The renderer argv is configurable so tests (and anyone not using slidev)
//! can substitute their own command; deckhand only appends the source file
//! and the `--base`/`--out` arguments. A non-zero exit aborts the whole run —
//! the pipeline never records a fingerprint for a deck whose render failed,
//! so the next run retries it.

use crate::scan::SlideSource;
use std::path::{Path, PathBuf};
use std::process::Command;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("renderer command is empty")]
    EmptyCommand,
    #[error("failed to launch renderer '{command}': {source}")]
    Launch {
        command: String,
        source: std::io::Error,
    },
    #[error("renderer exited with {status} while building {deck}")]
    Failed {
        deck: String,
        status: std::process::ExitStatus,
    },
}

/// Everything the renderer needs for one deck.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderJob {
    /// Path to the markdown source, under the content root.
    pub source_file: PathBuf,
    /// Directory the rendered deck lands in: `<output>/<url_path>`.
    pub output_dir: PathBuf,
    /// Base URL prefix for deck-internal assets: `<base><url_path>/`.
    pub base_prefix: String,
}

impl RenderJob {
    /// Construct the invocation contract for one source.
    pub fn for_source(
        source: &SlideSource,
        content_root: &Path,
        output_root: &Path,
        base: &str,
    ) -> Self {
        Self {
            source_file: content_root.join(&source.rel_path),
            output_dir: output_root.join(&source.url_path),
            base_prefix: format!("{}{}/", base, source.url_path),
        }
    }
}

/// Run the renderer for one job, blocking until it exits.
///
/// Stdio is inherited so the renderer's own progress output reaches the
/// terminal unmodified. No timeout is imposed.
pub fn render(renderer: &[String], job: &RenderJob) -> Result<(), RenderError> {
    let (program, args) = renderer.split_first().ok_or(RenderError::EmptyCommand)?;

    let status = Command::new(program)
        .args(args)
        .arg(&job.source_file)
        .arg("--base")
        .arg(&job.base_prefix)
        .arg("--out")
        .arg(&job.output_dir)
        .status()
        .map_err(|source| RenderError::Launch {
            command: program.clone(),
            source,
        })?;

    if !status.success() {
        return Err(RenderError::Failed {
            deck: job.source_file.display().to_string(),
            status,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::source;
    use std::path::Path;

    // =========================================================================
    // Job construction
    // =========================================================================

    #[test]
    fn job_paths_derived_from_source() {
        let s = source("rust/intro.md", "h1");
        let job = RenderJob::for_source(&s, Path::new("slides"), Path::new("dist"), "/");

        assert_eq!(job.source_file, Path::new("slides/rust/intro.md"));
        assert_eq!(job.output_dir, Path::new("dist/rust-intro"));
        assert_eq!(job.base_prefix, "/rust-intro/");
    }

    #[test]
    fn base_prefix_concatenates_configured_base() {
        let s = source("welcome.md", "h1");
        let job = RenderJob::for_source(&s, Path::new("slides"), Path::new("dist"), "/decks/");

        assert_eq!(job.base_prefix, "/decks/welcome/");
    }

    // =========================================================================
    // Invocation
    // =========================================================================

    fn stub_job() -> RenderJob {
        RenderJob {
            source_file: "slides/a.md".into(),
            output_dir: "dist/a".into(),
            base_prefix: "/a/".into(),
        }
    }

    #[test]
    fn empty_renderer_command_is_an_error() {
        assert!(matches!(
            render(&[], &stub_job()),
            Err(RenderError::EmptyCommand)
        ));
    }

    #[test]
    fn successful_exit_is_ok() {
        let renderer = vec!["true".to_string()];
        assert!(render(&renderer, &stub_job()).is_ok());
    }

    #[test]
    fn nonzero_exit_is_failed() {
        let renderer = vec!["false".to_string()];
        assert!(matches!(
            render(&renderer, &stub_job()),
            Err(RenderError::Failed { .. })
        ));
    }

    #[test]
    fn unlaunchable_renderer_is_launch_error() {
        let renderer = vec!["/nonexistent/renderer-binary".to_string()];
        assert!(matches!(
            render(&renderer, &stub_job()),
            Err(RenderError::Launch { .. })
        ));
    }
}
