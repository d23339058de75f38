//! Production lint engine backed by the `ansible-lint` executable
//!
//! The engine is handed an argument vector carrying the SARIF output path and
//! the `--write` flag; it scans the current working directory. After the run
//! the scanned tree is inventoried into [`Lintable`] units the way the
//! engine's own file discovery classifies them.

use std::path::Path;

use anyhow::{bail, Context};
use walkdir::WalkDir;

use super::LintEngine;
use crate::utils::command::run_captured;

/// Exit code the engine uses when it found rule violations; the scan itself
/// still completed and the SARIF artifact was written.
const VIOLATIONS_FOUND: i32 = 2;

/// One file-like unit examined by the lint engine.
#[derive(Debug, Clone)]
pub struct Lintable {
    /// Content-type of the underlying file, e.g. `text/yaml`
    pub base_kind: String,
    /// Directory containing the file, relative to the scan root
    pub dir: String,
    /// Error description when the engine could not process the file
    pub exc: Option<String>,
    /// Path of the file relative to the scan root
    pub filename: String,
    /// Specific kind, e.g. `playbook`, `tasks`, `galaxy`
    pub kind: String,
    /// Display name, same shape as `filename`
    pub name: String,
    /// Name of the owning unit, e.g. `roles/web`; root files have none
    pub parent: Option<String>,
    /// Role the file belongs to, empty outside roles
    pub role: String,
    /// The engine stopped processing this file early
    pub stop_processing: bool,
    /// The file was rewritten by the engine's `--write` mode
    pub updated: bool,
}

/// Result of one lint engine run: the examined files, in engine order.
#[derive(Debug, Clone, Default)]
pub struct LintRun {
    /// Per-file inventory, ordered as the engine discovered them
    pub files: Vec<Lintable>,
}

/// Lint engine implementation shelling out to `ansible-lint`.
pub struct AnsibleLintCli {
    program: String,
}

impl AnsibleLintCli {
    pub fn new() -> Self {
        Self {
            program: "ansible-lint".to_string(),
        }
    }

    /// Use a different executable name, e.g. a wrapper script.
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for AnsibleLintCli {
    fn default() -> Self {
        Self::new()
    }
}

impl LintEngine for AnsibleLintCli {
    fn run(&self, argv: &[String]) -> anyhow::Result<LintRun> {
        let outcome = run_captured(&self.program, argv, None)
            .with_context(|| format!("failed to execute '{}'", self.program))?;

        if !(outcome.success() || outcome.code == VIOLATIONS_FOUND) {
            bail!(
                "'{}' exited with code {}: {}",
                self.program,
                outcome.code,
                outcome.stderr
            );
        }

        let files = inventory_lintables(Path::new("."))?;
        Ok(LintRun { files })
    }
}

/// Walk the scanned tree and classify its Ansible content files, mirroring
/// the engine's own discovery. Ordering is deterministic (lexicographic).
fn inventory_lintables(root: &Path) -> anyhow::Result<Vec<Lintable>> {
    let mut files = Vec::new();

    let walker = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| {
            // The root itself may be dot-prefixed; only prune below it.
            entry.depth() == 0 || !entry.file_name().to_string_lossy().starts_with('.')
        });

    for entry in walker {
        let entry = entry.context("failed to walk scan directory")?;
        if !entry.file_type().is_file() {
            continue;
        }

        let relative = entry
            .path()
            .strip_prefix(root)
            .unwrap_or_else(|_| entry.path());
        let name = relative.to_string_lossy().replace('\\', "/");
        if !(name.ends_with(".yml") || name.ends_with(".yaml")) {
            continue;
        }

        let dir = relative
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(|p| p.to_string_lossy().replace('\\', "/"))
            .unwrap_or_else(|| ".".to_string());
        let role = role_of(&name);
        let parent = role.as_ref().map(|r| format!("roles/{r}"));

        files.push(Lintable {
            base_kind: "text/yaml".to_string(),
            dir,
            exc: None,
            filename: name.clone(),
            kind: kind_of(&name),
            name,
            parent,
            role: role.unwrap_or_default(),
            stop_processing: false,
            updated: false,
        });
    }

    Ok(files)
}

/// The role a path belongs to, when it sits under a `roles/<name>/` tree.
fn role_of(path: &str) -> Option<String> {
    let mut segments = path.split('/');
    while let Some(segment) = segments.next() {
        if segment == "roles" {
            return segments.next().map(str::to_string);
        }
    }
    None
}

/// Specific kind of an Ansible content file, by its path shape.
fn kind_of(path: &str) -> String {
    let segments: Vec<&str> = path.split('/').collect();
    let file_name = *segments.last().unwrap_or(&path);
    let dirs = &segments[..segments.len().saturating_sub(1)];
    let in_dir = |dir: &str| dirs.iter().any(|s| *s == dir);

    let kind = if file_name == "galaxy.yml" {
        "galaxy"
    } else if file_name.starts_with("requirements.") {
        "requirements"
    } else if in_dir("meta") {
        "meta"
    } else if in_dir("tasks") {
        "tasks"
    } else if in_dir("handlers") {
        "handlers"
    } else if in_dir("vars") || in_dir("defaults") {
        "vars"
    } else if in_dir("inventory") || file_name.starts_with("hosts.") {
        "inventory"
    } else if in_dir("playbooks") || dirs.is_empty() {
        "playbook"
    } else {
        "yaml"
    };
    kind.to_string()
}
