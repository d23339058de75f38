//! Report stage adapter
//!
//! Checks that the three input artifacts exist, then invokes the report
//! renderer with the fixed artifact paths. A missing input or a renderer
//! failure is fatal.

use tracing::info;

use super::StageOutcome;
use crate::artifacts::ArtifactPaths;
use crate::error::ParserError;
use crate::stages::ReportRenderer;

/// Run the report synthesis stage.
pub(crate) fn execute(renderer: &dyn ReportRenderer, paths: &ArtifactPaths) -> StageOutcome {
    if let Err(err) = paths.require_report_inputs() {
        return StageOutcome::Fatal(err.into());
    }

    info!("Generate parser-report.txt...");
    match renderer.render(paths) {
        Ok(()) => StageOutcome::Success,
        Err(err) => StageOutcome::Fatal(ParserError::Report(err)),
    }
}
