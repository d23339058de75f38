//! Production report renderer
//!
//! Synthesizes the final `parser-report.txt` from the three upstream
//! artifacts: file counts per kind from the lint result, findings from the
//! SARIF document, and object totals from the enrichment output.

use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::fs;

use anyhow::Context;
use serde_json::Value;

use super::ReportRenderer;
use crate::artifacts::{self, ArtifactPaths, LintResult};

/// Renderer implementation writing a plain-text summary report.
pub struct TextReportRenderer;

impl ReportRenderer for TextReportRenderer {
    fn render(&self, paths: &ArtifactPaths) -> anyhow::Result<()> {
        let lint_result: LintResult = artifacts::read_json(&paths.lint_result)?;
        let sarif: Value = artifacts::read_json(&paths.sarif)?;
        let sage: Value = artifacts::read_json(&paths.sage_objects)?;

        let mut report = String::new();
        let _ = writeln!(report, "{}", "=".repeat(60));
        let _ = writeln!(report, "Ansible content parser report");
        let _ = writeln!(report, "{}", "=".repeat(60));

        render_file_summary(&mut report, &lint_result);
        render_findings(&mut report, &sarif);
        render_enrichment(&mut report, &sage);

        fs::write(&paths.parser_report, report).with_context(|| {
            format!("failed to write '{}'", paths.parser_report.display())
        })?;
        Ok(())
    }
}

fn render_file_summary(report: &mut String, lint_result: &LintResult) {
    let mut by_kind: BTreeMap<&str, usize> = BTreeMap::new();
    for file in &lint_result.files {
        *by_kind.entry(file.kind.as_str()).or_default() += 1;
    }

    let _ = writeln!(report, "\n[ Files scanned: {} ]", lint_result.files.len());
    for (kind, count) in by_kind {
        let _ = writeln!(report, "  {kind:<14} {count}");
    }

    let broken: Vec<_> = lint_result
        .files
        .iter()
        .filter(|f| f.exc.is_some())
        .collect();
    if !broken.is_empty() {
        let _ = writeln!(report, "\n[ Files with errors: {} ]", broken.len());
        for file in broken {
            let _ = writeln!(
                report,
                "  {}: {}",
                file.name,
                file.exc.as_deref().unwrap_or("")
            );
        }
    }
}

fn render_findings(report: &mut String, sarif: &Value) {
    let results: Vec<&Value> = sarif["runs"]
        .as_array()
        .into_iter()
        .flatten()
        .flat_map(|run| run["results"].as_array().into_iter().flatten())
        .collect();

    let mut by_rule: BTreeMap<&str, usize> = BTreeMap::new();
    for result in &results {
        let rule = result["ruleId"].as_str().unwrap_or("(unknown)");
        *by_rule.entry(rule).or_default() += 1;
    }

    let _ = writeln!(report, "\n[ Lint findings: {} ]", results.len());
    for (rule, count) in by_rule {
        let _ = writeln!(report, "  {rule:<40} {count}");
    }
}

fn render_enrichment(report: &mut String, sage: &Value) {
    let total = count_objects(sage);
    let _ = writeln!(report, "\n[ Enrichment objects: {total} ]");
}

/// Total object count of the enrichment output, whichever of its shapes was
/// written (a bare array, or a mapping of named arrays).
fn count_objects(value: &Value) -> usize {
    match value {
        Value::Array(items) => items.len(),
        Value::Object(map) => map
            .values()
            .map(|v| match v {
                Value::Array(items) => items.len(),
                _ => 0,
            })
            .sum(),
        _ => 0,
    }
}
