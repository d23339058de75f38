//! Pipeline orchestrator
//!
//! Sequences the three analysis stages (lint, enrichment, report synthesis)
//! over the on-disk artifact contract, with an optional fetch step for remote
//! sources. Strictly sequential: no stage starts before the prior stage's
//! artifacts are durable, and there is no parallelism within a run.
//!
//! Failure policy per stage:
//! - fetch or lint exceptions abort the run; the lint sentinel exit code is
//!   returned after logging, and later stages never execute;
//! - a non-zero enrichment return code stops the run and becomes the process
//!   exit code;
//! - report-stage preconditions and renderer failures are fatal and surfaced
//!   to the caller.

mod enrich;
mod lint;
mod report;

use std::fmt;
use std::fs;
use std::path::PathBuf;

use tracing::{error, info, warn};

use crate::artifacts::ArtifactPaths;
use crate::cli::exit_codes;
use crate::config::{RunConfig, Source};
use crate::error::ParserError;
use crate::stages::{
    AnsibleLintCli, Downloader, EnrichmentPipeline, GitDownloader, LintEngine, ReportRenderer,
    SageProcess, TextReportRenderer,
};

/// Result of running one stage, driving the sequencing decision.
#[derive(Debug)]
pub enum StageOutcome {
    /// The stage completed; continue to the next one.
    Success,
    /// The stage signalled failure via a return code: skip the remaining
    /// stages and exit with that code.
    Recoverable(i32),
    /// The stage raised: abort and surface the error.
    Fatal(ParserError),
}

/// Orchestrator state, advanced strictly forward; `Aborted` is absorbing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Init,
    Fetching,
    Linting,
    Enriching,
    Reporting,
    Done,
    Aborted,
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            State::Init => "init",
            State::Fetching => "fetching",
            State::Linting => "linting",
            State::Enriching => "enriching",
            State::Reporting => "reporting",
            State::Done => "done",
            State::Aborted => "aborted",
        };
        f.write_str(name)
    }
}

/// The pipeline with its four injected stage capabilities.
pub struct Pipeline {
    engine: Box<dyn LintEngine>,
    downloader: Box<dyn Downloader>,
    enrichment: Box<dyn EnrichmentPipeline>,
    renderer: Box<dyn ReportRenderer>,
}

impl Pipeline {
    /// Assemble a pipeline from explicit stage implementations.
    pub fn new(
        engine: Box<dyn LintEngine>,
        downloader: Box<dyn Downloader>,
        enrichment: Box<dyn EnrichmentPipeline>,
        renderer: Box<dyn ReportRenderer>,
    ) -> Self {
        Self {
            engine,
            downloader,
            enrichment,
            renderer,
        }
    }

    /// The production wiring: `ansible-lint`, `git`, `sage-process`, and the
    /// plain-text report renderer.
    pub fn production() -> Self {
        Self::new(
            Box::new(AnsibleLintCli::new()),
            Box::new(GitDownloader),
            Box::new(SageProcess::new()),
            Box::new(TextReportRenderer),
        )
    }

    /// Run every stage for the given configuration.
    ///
    /// `Ok(code)` is the process exit code, including stage-signalled failure
    /// codes; `Err` carries a fatal error the caller logs before exiting
    /// non-zero.
    pub fn run(&self, config: &RunConfig) -> Result<i32, ParserError> {
        // Derived unconditionally: every artifact path is anchored in the
        // output directory whether or not this run fetches by URL.
        let paths = ArtifactPaths::new(&config.out_dir);
        let mut state = State::Init;
        info!(state = %state, out_dir = %config.out_dir.display(), "starting pipeline");

        let (scan_dir, repo_name): (PathBuf, Option<String>) = match &config.source {
            Source::Local(dir) => (dir.clone(), config.repo_name.clone()),
            Source::Remote(url) => {
                state = State::Fetching;
                info!(state = %state, url = %url, "fetching repository");
                let name = self
                    .downloader
                    .extract(url, &config.out_dir)
                    .map_err(ParserError::Download)?;
                (config.out_dir.join(&name), Some(name))
            }
        };

        state = State::Linting;
        info!(state = %state, dir = %scan_dir.display(), "running the lint engine");
        if let Err(err) = lint::execute(self.engine.as_ref(), config, &scan_dir, &paths) {
            state = State::Aborted;
            error!(state = %state, error = ?err, "an exception was thrown while running the lint engine");
            // The output directory still materializes so callers find a
            // stable location for whatever partial result exists.
            let _ = fs::create_dir_all(&config.out_dir);
            return Ok(exit_codes::LINT_FAILURE);
        }

        state = State::Enriching;
        info!(state = %state, "running the enrichment pipeline");
        match enrich::execute(
            self.enrichment.as_ref(),
            config,
            &scan_dir,
            repo_name.as_deref(),
        ) {
            StageOutcome::Success => {}
            StageOutcome::Recoverable(code) => {
                warn!(code, "enrichment pipeline returned a failure code");
                return Ok(code);
            }
            StageOutcome::Fatal(err) => {
                state = State::Aborted;
                error!(state = %state, error = ?err, "enrichment stage raised");
                return Err(err);
            }
        }

        state = State::Reporting;
        info!(state = %state, "synthesizing the final report");
        match report::execute(self.renderer.as_ref(), &paths) {
            StageOutcome::Success => {}
            StageOutcome::Recoverable(code) => return Ok(code),
            StageOutcome::Fatal(err) => {
                state = State::Aborted;
                error!(state = %state, error = ?err, "report stage raised");
                return Err(err);
            }
        }

        state = State::Done;
        info!(state = %state, report = %paths.parser_report.display(), "pipeline complete");
        Ok(exit_codes::SUCCESS)
    }
}
