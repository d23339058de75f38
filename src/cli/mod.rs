//! # CLI Module
//!
//! This module defines the command-line interface for the content parser
//! using `clap`.
//!
//! ## Flags
//!
//! | Flag | Description |
//! |------|-------------|
//! | `-d, --dir <DIR>` | Root directory for the scan |
//! | `-u, --url <URL>` | Repository URL (mutually exclusive with `--dir`) |
//! | `-o, --out-dir <DIR>` | Output directory for stage artifacts (required) |
//! | `-t, --source-type <TYPE>` | Source type label |
//! | `-r, --repo-name <NAME>` | Repository name label |
//! | `-v, --verbose` | Explain what is being done |
//!
//! A run is rejected before any stage executes unless an output directory is
//! given and exactly one of `--dir` / `--url` is given.
//!
//! ## Submodules
//!
//! - [`exit_codes`] - Standardized exit codes

pub mod exit_codes;

use std::path::PathBuf;

use clap::{CommandFactory, Parser};

use crate::config::{RunConfig, Source};
use crate::error::ParserError;

/// Scan Ansible content and produce lint, enrichment, and report artifacts
#[derive(Parser, Debug)]
#[command(name = "ansible-content-parser")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Root directory for the scan
    #[arg(short, long, value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Source type label
    #[arg(short = 't', long, value_name = "TYPE")]
    pub source_type: Option<String>,

    /// Repo name (e.g. "IBM/Ansible-OpenShift-Provisioning")
    #[arg(short, long, value_name = "NAME")]
    pub repo_name: Option<String>,

    /// Output directory for the rule evaluation result
    #[arg(short, long, value_name = "DIR")]
    pub out_dir: Option<PathBuf>,

    /// Explain what is being done
    #[arg(short, long)]
    pub verbose: bool,

    /// Repository URL
    #[arg(short, long, value_name = "URL")]
    pub url: Option<String>,
}

impl Cli {
    /// Validate the parsed flags into an immutable [`RunConfig`].
    ///
    /// Rejects the run unless an output directory is present and exactly one
    /// of the local directory and the URL is present.
    pub fn into_config(self) -> Result<RunConfig, ParserError> {
        let out_dir = match self.out_dir {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => {
                return Err(ParserError::Configuration(
                    "an output directory is required".to_string(),
                ))
            }
        };

        let source = match (self.dir, self.url) {
            (Some(dir), None) => Source::Local(dir),
            (None, Some(url)) => Source::Remote(url),
            (Some(_), Some(_)) => {
                return Err(ParserError::Configuration(
                    "--dir and --url are mutually exclusive".to_string(),
                ))
            }
            (None, None) => {
                return Err(ParserError::Configuration(
                    "either a scan directory or a repository URL is required".to_string(),
                ))
            }
        };

        Ok(RunConfig {
            source,
            source_type: self.source_type,
            repo_name: self.repo_name,
            out_dir,
            verbose: self.verbose,
        })
    }

    /// Print the usage text to standard output, swallowing a broken pipe.
    pub fn print_usage() {
        let _ = Cli::command().print_help();
    }
}
