//! Enrichment stage adapter
//!
//! Builds the typed configuration mapping for the external enrichment
//! pipeline and invokes it. A non-zero return code is a recoverable failure:
//! the pipeline stops and the process exits with that code, so content that
//! failed enrichment is never reported on.

use std::env;
use std::path::Path;

use tracing::debug;

use super::StageOutcome;
use crate::config::{EnrichmentConfig, RunConfig};
use crate::error::ParserError;
use crate::stages::EnrichmentPipeline;

/// Environment variable overriding the knowledge-base data directory.
pub const KB_DATA_DIR_VAR: &str = "ARI_KB_DATA_DIR";

/// Environment variable governing the enrichment pipeline's log level.
///
/// Set for the remainder of the run when verbose; never reset, since the
/// process terminates or proceeds linearly afterward.
pub const SAGE_LOG_LEVEL_VAR: &str = "SAGE_LOG_LEVEL";

/// Run the enrichment stage.
pub(crate) fn execute(
    pipeline: &dyn EnrichmentPipeline,
    run_config: &RunConfig,
    target_dir: &Path,
    repo_name: Option<&str>,
) -> StageOutcome {
    let config = EnrichmentConfig {
        kb_data_dir: env::var(KB_DATA_DIR_VAR).ok(),
        target_dir: target_dir.to_path_buf(),
        output_dir: run_config.out_dir.clone(),
        repo_name: repo_name.map(str::to_string),
        source_type: run_config.source_type.clone(),
        repo_url: run_config.source.url().map(str::to_string),
    };

    if run_config.verbose {
        env::set_var(SAGE_LOG_LEVEL_VAR, "debug");
    }

    debug!(target_dir = %config.target_dir.display(), "invoking enrichment pipeline");
    match pipeline.run(&config) {
        Ok(None) | Ok(Some(0)) => StageOutcome::Success,
        Ok(Some(code)) => StageOutcome::Recoverable(code),
        Err(err) => StageOutcome::Fatal(ParserError::Enrichment(err)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Source;
    use serial_test::serial;
    use std::cell::RefCell;
    use std::path::PathBuf;

    struct CapturingPipeline {
        config: RefCell<Option<EnrichmentConfig>>,
        result: anyhow::Result<Option<i32>>,
    }

    impl CapturingPipeline {
        fn returning(result: anyhow::Result<Option<i32>>) -> Self {
            Self {
                config: RefCell::new(None),
                result,
            }
        }
    }

    impl EnrichmentPipeline for CapturingPipeline {
        fn run(&self, config: &EnrichmentConfig) -> anyhow::Result<Option<i32>> {
            *self.config.borrow_mut() = Some(config.clone());
            match &self.result {
                Ok(code) => Ok(*code),
                Err(err) => Err(anyhow::anyhow!("{err}")),
            }
        }
    }

    fn remote_config() -> RunConfig {
        RunConfig {
            source: Source::Remote("https://example.com/widgets.git".to_string()),
            source_type: Some("galaxy".to_string()),
            repo_name: None,
            out_dir: PathBuf::from("/tmp/out"),
            verbose: false,
        }
    }

    #[test]
    #[serial]
    fn test_config_mapping_carries_recognized_fields() {
        env::remove_var(KB_DATA_DIR_VAR);
        let pipeline = CapturingPipeline::returning(Ok(None));

        let outcome = execute(
            &pipeline,
            &remote_config(),
            Path::new("/tmp/out/widgets"),
            Some("widgets"),
        );
        assert!(matches!(outcome, StageOutcome::Success));

        let config = pipeline.config.borrow().clone().unwrap();
        assert_eq!(config.kb_data_dir, None);
        assert_eq!(config.target_dir, PathBuf::from("/tmp/out/widgets"));
        assert_eq!(config.output_dir, PathBuf::from("/tmp/out"));
        assert_eq!(config.repo_name.as_deref(), Some("widgets"));
        assert_eq!(config.source_type.as_deref(), Some("galaxy"));
        assert_eq!(
            config.repo_url.as_deref(),
            Some("https://example.com/widgets.git")
        );
    }

    #[test]
    #[serial]
    fn test_kb_data_dir_override_is_read() {
        env::set_var(KB_DATA_DIR_VAR, "/var/kb");
        let pipeline = CapturingPipeline::returning(Ok(Some(0)));

        execute(&pipeline, &remote_config(), Path::new("/tmp/x"), None);
        env::remove_var(KB_DATA_DIR_VAR);

        let config = pipeline.config.borrow().clone().unwrap();
        assert_eq!(config.kb_data_dir.as_deref(), Some("/var/kb"));
    }

    #[test]
    #[serial]
    fn test_verbose_sets_log_level_override() {
        env::remove_var(SAGE_LOG_LEVEL_VAR);
        let mut run_config = remote_config();
        run_config.verbose = true;
        let pipeline = CapturingPipeline::returning(Ok(None));

        execute(&pipeline, &run_config, Path::new("/tmp/x"), None);

        assert_eq!(env::var(SAGE_LOG_LEVEL_VAR).as_deref(), Ok("debug"));
        env::remove_var(SAGE_LOG_LEVEL_VAR);
    }

    #[test]
    #[serial]
    fn test_nonzero_code_is_recoverable() {
        let pipeline = CapturingPipeline::returning(Ok(Some(7)));
        let outcome = execute(&pipeline, &remote_config(), Path::new("/tmp/x"), None);
        assert!(matches!(outcome, StageOutcome::Recoverable(7)));
    }

    #[test]
    #[serial]
    fn test_pipeline_exception_is_fatal() {
        let pipeline = CapturingPipeline::returning(Err(anyhow::anyhow!("kb unavailable")));
        let outcome = execute(&pipeline, &remote_config(), Path::new("/tmp/x"), None);
        assert!(matches!(
            outcome,
            StageOutcome::Fatal(ParserError::Enrichment(_))
        ));
    }
}
