//! Production repository downloader backed by `git`
//!
//! Fetches a remote repository into a subdirectory of the output directory
//! named after the repository. Extraction is idempotent: an existing
//! destination is reused as-is.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context};

use super::Downloader;
use crate::utils::command::run_captured;

/// Derive the repository name from its URL: the last path segment, without
/// a `.git` suffix.
pub fn repo_name_from_url(url: &str) -> String {
    url.trim_end_matches('/')
        .rsplit('/')
        .next()
        .unwrap_or(url)
        .trim_end_matches(".git")
        .to_string()
}

/// Downloader implementation doing a shallow `git clone`.
pub struct GitDownloader;

impl Downloader for GitDownloader {
    fn extract(&self, url: &str, out_dir: &Path) -> anyhow::Result<String> {
        let name = repo_name_from_url(url);
        if name.is_empty() {
            bail!("cannot derive a repository name from '{url}'");
        }

        let destination = out_dir.join(&name);
        if destination.is_dir() {
            tracing::debug!(dest = %destination.display(), "reusing existing checkout");
            return Ok(name);
        }

        fs::create_dir_all(out_dir)
            .with_context(|| format!("failed to create '{}'", out_dir.display()))?;

        let destination_arg = destination.display().to_string();
        let args = ["clone", "--depth", "1", url, destination_arg.as_str()];
        let outcome =
            run_captured("git", &args, None).context("failed to execute 'git clone'")?;
        if !outcome.success() {
            bail!(
                "'git clone {url}' exited with code {}: {}",
                outcome.code,
                outcome.stderr
            );
        }

        Ok(name)
    }
}
