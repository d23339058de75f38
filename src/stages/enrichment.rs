//! Production enrichment pipeline backed by the `sage-process` executable
//!
//! The pipeline consumes the scanned content and writes `sage-objects.json`
//! under the output directory. Its configuration mapping is passed as
//! command-line flags; unset optional fields are simply omitted. The
//! pipeline's log level is governed by the process-wide `SAGE_LOG_LEVEL`
//! variable, which the child inherits.

use anyhow::Context;

use super::EnrichmentPipeline;
use crate::config::EnrichmentConfig;
use crate::utils::command::run_inherited;

/// Enrichment pipeline implementation spawning `sage-process`.
pub struct SageProcess {
    program: String,
}

impl SageProcess {
    pub fn new() -> Self {
        Self {
            program: "sage-process".to_string(),
        }
    }
}

impl Default for SageProcess {
    fn default() -> Self {
        Self::new()
    }
}

impl EnrichmentPipeline for SageProcess {
    fn run(&self, config: &EnrichmentConfig) -> anyhow::Result<Option<i32>> {
        let mut args: Vec<String> = vec![
            "--target-dir".to_string(),
            config.target_dir.display().to_string(),
            "--output-dir".to_string(),
            config.output_dir.display().to_string(),
        ];
        if let Some(kb) = &config.kb_data_dir {
            args.push("--ari-kb-data-dir".to_string());
            args.push(kb.clone());
        }
        if let Some(name) = &config.repo_name {
            args.push("--repo-name".to_string());
            args.push(name.clone());
        }
        if let Some(source_type) = &config.source_type {
            args.push("--source-type".to_string());
            args.push(source_type.clone());
        }
        if let Some(url) = &config.repo_url {
            args.push("--repo-url".to_string());
            args.push(url.clone());
        }

        run_inherited(&self.program, &args)
            .with_context(|| format!("failed to execute '{}'", self.program))
    }
}
