//! Artifact store - the on-disk contract between pipeline stages
//!
//! Each stage communicates with its successor only through named files under
//! the output directory. Each artifact is written by exactly one stage; the
//! report stage reads the three that precede it. An artifact missing when a
//! downstream stage expects it is a reportable error, never a silent skip.

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::ArtifactError;

/// File name of the normalized lint result, written by the lint stage.
pub const LINT_RESULT_FILE: &str = "lint-result.json";
/// File name of the SARIF findings, written by the lint engine itself.
pub const SARIF_FILE: &str = "sarif.json";
/// File name of the enrichment objects, written by the enrichment pipeline.
pub const SAGE_OBJECTS_FILE: &str = "sage-objects.json";
/// File name of the final human-readable report.
pub const PARSER_REPORT_FILE: &str = "parser-report.txt";

/// Normalized, serializable projection of one file examined by the lint
/// engine. Created once after the lint stage completes and immutable
/// thereafter; serialized verbatim into `lint-result.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LintableRecord {
    /// Content-type of the underlying file
    pub base_kind: String,
    /// Containing directory
    pub dir: String,
    /// Error description, if the engine could not process the file
    pub exc: Option<String>,
    /// File path
    pub filename: String,
    /// Specific kind, e.g. `playbook`, `tasks`
    pub kind: String,
    /// Display name
    pub name: String,
    /// Name of the parent record; root files have none
    pub parent: Option<String>,
    /// Assigned role, empty outside roles
    pub role: String,
    /// Processing was stopped early
    pub stop_processing: bool,
    /// The file was rewritten by the linter
    pub updated: bool,
}

/// Schema of the `lint-result.json` artifact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct LintResult {
    /// Examined files, in the engine's discovery order
    pub files: Vec<LintableRecord>,
}

/// The four fixed artifact paths of one run.
#[derive(Debug, Clone)]
pub struct ArtifactPaths {
    /// `lint-result.json`
    pub lint_result: PathBuf,
    /// `sarif.json`
    pub sarif: PathBuf,
    /// `sage-objects.json`
    pub sage_objects: PathBuf,
    /// `parser-report.txt`
    pub parser_report: PathBuf,
}

impl ArtifactPaths {
    /// Derive every artifact path from the output directory.
    pub fn new(out_dir: &Path) -> Self {
        Self {
            lint_result: out_dir.join(LINT_RESULT_FILE),
            sarif: out_dir.join(SARIF_FILE),
            sage_objects: out_dir.join(SAGE_OBJECTS_FILE),
            parser_report: out_dir.join(PARSER_REPORT_FILE),
        }
    }

    /// Check that the three report-stage inputs exist on disk.
    pub fn require_report_inputs(&self) -> Result<(), ArtifactError> {
        require(LINT_RESULT_FILE, &self.lint_result)?;
        require(SARIF_FILE, &self.sarif)?;
        require(SAGE_OBJECTS_FILE, &self.sage_objects)?;
        Ok(())
    }
}

fn require(name: &'static str, path: &Path) -> Result<(), ArtifactError> {
    if path.is_file() {
        Ok(())
    } else {
        Err(ArtifactError::Missing {
            name,
            path: path.to_path_buf(),
        })
    }
}

/// Write a value as a pretty-printed (two-space indented) JSON artifact.
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), ArtifactError> {
    let body = serde_json::to_string_pretty(value).map_err(|source| ArtifactError::Malformed {
        path: path.to_path_buf(),
        source,
    })?;
    fs::write(path, body).map_err(|source| ArtifactError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Read a JSON artifact back into a typed value.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, ArtifactError> {
    let body = fs::read_to_string(path).map_err(|source| ArtifactError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&body).map_err(|source| ArtifactError::Malformed {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct Sample {
        files: Vec<String>,
    }

    #[test]
    fn test_paths_are_anchored_in_out_dir() {
        let paths = ArtifactPaths::new(Path::new("/tmp/out"));
        assert_eq!(paths.lint_result, Path::new("/tmp/out/lint-result.json"));
        assert_eq!(paths.sarif, Path::new("/tmp/out/sarif.json"));
        assert_eq!(paths.sage_objects, Path::new("/tmp/out/sage-objects.json"));
        assert_eq!(paths.parser_report, Path::new("/tmp/out/parser-report.txt"));
    }

    #[test]
    fn test_json_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("sample.json");
        let value = Sample {
            files: vec!["site.yml".to_string(), "roles/web".to_string()],
        };

        write_json(&path, &value).unwrap();
        let parsed: Sample = read_json(&path).unwrap();
        assert_eq!(parsed, value);

        // two-space indentation, as downstream consumers expect
        let body = fs::read_to_string(&path).unwrap();
        assert!(body.contains("\n  \"files\""));
    }

    #[test]
    fn test_missing_input_is_reported() {
        let dir = TempDir::new().unwrap();
        let paths = ArtifactPaths::new(dir.path());
        let err = paths.require_report_inputs().unwrap_err();
        assert!(matches!(
            err,
            ArtifactError::Missing {
                name: LINT_RESULT_FILE,
                ..
            }
        ));
    }

    #[test]
    fn test_all_inputs_present_passes() {
        let dir = TempDir::new().unwrap();
        let paths = ArtifactPaths::new(dir.path());
        fs::write(&paths.lint_result, "{}").unwrap();
        fs::write(&paths.sarif, "{}").unwrap();
        fs::write(&paths.sage_objects, "{}").unwrap();
        assert!(paths.require_report_inputs().is_ok());
    }

    #[test]
    fn test_malformed_artifact_is_reported() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "not json").unwrap();
        let err = read_json::<Sample>(&path).unwrap_err();
        assert!(matches!(err, ArtifactError::Malformed { .. }));
    }
}
