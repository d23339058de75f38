//! Lint stage adapter
//!
//! Runs the lint engine inside the scanned tree via a [`DirGuard`], then
//! normalizes the engine's per-file entities into [`LintableRecord`] values
//! and writes them as the `lint-result.json` artifact. The SARIF artifact is
//! a side effect of the engine itself; this adapter only threads the desired
//! path through the argument vector.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::artifacts::{self, ArtifactPaths, LintResult, LintableRecord};
use crate::config::RunConfig;
use crate::error::ParserError;
use crate::stages::{LintEngine, Lintable};
use crate::utils::workdir::{absolutize, DirGuard};

impl From<&Lintable> for LintableRecord {
    fn from(lintable: &Lintable) -> Self {
        Self {
            base_kind: lintable.base_kind.clone(),
            dir: lintable.dir.clone(),
            exc: lintable.exc.clone(),
            filename: lintable.filename.clone(),
            kind: lintable.kind.clone(),
            name: lintable.name.clone(),
            parent: lintable.parent.clone(),
            role: lintable.role.clone(),
            stop_processing: lintable.stop_processing,
            updated: lintable.updated,
        }
    }
}

/// Run the lint stage, returning the number of examined files.
pub(crate) fn execute(
    engine: &dyn LintEngine,
    config: &RunConfig,
    work_dir: &Path,
    paths: &ArtifactPaths,
) -> Result<usize, ParserError> {
    fs::create_dir_all(&config.out_dir)?;

    // The engine runs inside work_dir; the SARIF path must stay anchored to
    // the invocation directory.
    let sarif_file = absolutize(&paths.sarif)?;
    let mut argv = vec![
        "--sarif-file".to_string(),
        sarif_file.display().to_string(),
        "--write".to_string(),
    ];
    if config.verbose {
        argv.push("-v".to_string());
    }

    let run = {
        let _cwd = DirGuard::change_to(work_dir)?;
        engine.run(&argv).map_err(ParserError::Lint)?
    };

    let result = LintResult {
        files: run.files.iter().map(LintableRecord::from).collect(),
    };
    artifacts::write_json(&paths.lint_result, &result)?;

    info!(files = result.files.len(), "lint stage complete");
    Ok(result.files.len())
}
