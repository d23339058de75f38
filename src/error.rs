//! Error types for the content parser
//!
//! This module defines custom error types using `thiserror` for better error
//! handling and more descriptive error messages throughout the application.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the content parser
#[derive(Error, Debug)]
pub enum ParserError {
    /// Invalid or incomplete command-line input
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The repository downloader failed to fetch or extract the source
    #[error("failed to download repository: {0}")]
    Download(#[source] anyhow::Error),

    /// The lint engine raised while scanning the source tree
    #[error("lint stage failed: {0}")]
    Lint(#[source] anyhow::Error),

    /// The enrichment pipeline raised (as opposed to returning a code)
    #[error("enrichment stage failed: {0}")]
    Enrichment(#[source] anyhow::Error),

    /// The report renderer failed to synthesize the final report
    #[error("report stage failed: {0}")]
    Report(#[source] anyhow::Error),

    /// A problem with a stage artifact on disk
    #[error(transparent)]
    Artifact(#[from] ArtifactError),

    /// Any other I/O failure
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Errors around the on-disk artifact contract between stages
#[derive(Error, Debug)]
pub enum ArtifactError {
    /// A downstream stage expected an artifact that no stage produced
    #[error("expected artifact '{name}' is missing at '{path}'")]
    Missing {
        /// Logical artifact file name
        name: &'static str,
        /// Full path that was checked
        path: PathBuf,
    },

    /// Writing an artifact file failed
    #[error("failed to write artifact '{path}': {source}")]
    Write {
        /// Full path of the artifact being written
        path: PathBuf,
        /// The underlying I/O error
        source: std::io::Error,
    },

    /// Reading an artifact file failed
    #[error("failed to read artifact '{path}': {source}")]
    Read {
        /// Full path of the artifact being read
        path: PathBuf,
        /// The underlying I/O error
        source: std::io::Error,
    },

    /// An artifact exists but does not parse as expected
    #[error("artifact '{path}' is malformed: {source}")]
    Malformed {
        /// Full path of the artifact
        path: PathBuf,
        /// The underlying JSON error
        source: serde_json::Error,
    },
}

impl ParserError {
    /// Whether this error is a broken pipe on stdout/stderr.
    ///
    /// Broken pipes mean a downstream consumer closed early and are
    /// deliberately not reported.
    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, ParserError::Io(e) if e.kind() == std::io::ErrorKind::BrokenPipe)
    }
}
