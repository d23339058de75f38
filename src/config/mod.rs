//! Configuration module
//!
//! Typed run configuration built once per invocation from the CLI, plus the
//! configuration mapping handed to the enrichment pipeline. Every recognized
//! field is enumerated here rather than carried in an ad hoc map.

use std::path::PathBuf;

/// Where the content to scan comes from. Exactly one variant per run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// An already-checked-out directory on the local filesystem
    Local(PathBuf),
    /// A remote repository URL to be fetched into the output directory
    Remote(String),
}

impl Source {
    /// The remote URL, when this run scans a remote repository
    pub fn url(&self) -> Option<&str> {
        match self {
            Source::Remote(url) => Some(url),
            Source::Local(_) => None,
        }
    }
}

/// Immutable run configuration, validated before any stage executes.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Local directory or remote URL (exactly one)
    pub source: Source,
    /// Free-form source type label forwarded to enrichment
    pub source_type: Option<String>,
    /// Repository name; derived from the URL for remote runs
    pub repo_name: Option<String>,
    /// Directory receiving every stage artifact
    pub out_dir: PathBuf,
    /// Explain what is being done
    pub verbose: bool,
}

/// Configuration mapping for the external enrichment pipeline.
///
/// Field set mirrors the scanning arguments the pipeline recognizes; nothing
/// else is forwarded.
#[derive(Debug, Clone)]
pub struct EnrichmentConfig {
    /// Knowledge-base data directory override, from `ARI_KB_DATA_DIR`
    pub kb_data_dir: Option<String>,
    /// The scanned source location
    pub target_dir: PathBuf,
    /// Directory where `sage-objects.json` is written
    pub output_dir: PathBuf,
    /// Repository name label
    pub repo_name: Option<String>,
    /// Source type label
    pub source_type: Option<String>,
    /// Remote URL for remote runs
    pub repo_url: Option<String>,
}
