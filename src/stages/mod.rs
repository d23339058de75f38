//! # External stage interfaces
//!
//! The lint engine, repository downloader, enrichment pipeline, and report
//! renderer are external subsystems. This module defines the typed capability
//! each one exposes to the orchestrator, plus the production implementations
//! that shell out to the real tools. The orchestrator only ever sees the
//! traits, so tests substitute spies and the production wiring stays in one
//! place.

mod downloader;
mod enrichment;
mod lint_engine;
mod renderer;

pub use downloader::{repo_name_from_url, GitDownloader};
pub use enrichment::SageProcess;
pub use lint_engine::{AnsibleLintCli, LintRun, Lintable};
pub use renderer::TextReportRenderer;

use std::path::Path;

use crate::artifacts::ArtifactPaths;
use crate::config::EnrichmentConfig;

/// The lint engine: scans the current working directory and writes the SARIF
/// artifact as a side effect of the argument vector it is given.
pub trait LintEngine {
    /// Run the engine with `argv`, returning its per-file inventory.
    ///
    /// The caller has already entered the scan directory; paths in `argv`
    /// are absolute.
    fn run(&self, argv: &[String]) -> anyhow::Result<LintRun>;
}

/// The repository downloader: fetches a remote URL into the output directory.
pub trait Downloader {
    /// Extract the repository under `out_dir`, returning the extracted
    /// subdirectory's name. Extraction is idempotent.
    fn extract(&self, url: &str, out_dir: &Path) -> anyhow::Result<String>;
}

/// The enrichment pipeline: classifies the scanned content and writes the
/// `sage-objects.json` artifact.
pub trait EnrichmentPipeline {
    /// Run the pipeline with the given configuration mapping.
    ///
    /// `Ok(None)` and `Ok(Some(0))` both mean success; any other code is the
    /// pipeline's own failure signal and becomes the process exit code.
    fn run(&self, config: &EnrichmentConfig) -> anyhow::Result<Option<i32>>;
}

/// The report renderer: consumes the three input artifacts and writes the
/// final `parser-report.txt`.
pub trait ReportRenderer {
    /// Render the report from `paths.lint_result`, `paths.sarif`, and
    /// `paths.sage_objects` into `paths.parser_report`.
    fn render(&self, paths: &ArtifactPaths) -> anyhow::Result<()>;
}
