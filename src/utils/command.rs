//! Subprocess execution helpers
//!
//! The external stages (lint engine, downloader, enrichment pipeline) are
//! separate executables; these helpers run them with consistent output
//! capture and exit-code handling.

use std::ffi::OsStr;
use std::io;
use std::path::Path;
use std::process::{Command, Stdio};

/// Captured outcome of a finished subprocess
#[derive(Debug, Clone)]
pub struct CommandOutcome {
    /// Exit code, or -1 when the process was killed by a signal
    pub code: i32,
    /// Trimmed standard output
    pub stdout: String,
    /// Trimmed standard error
    pub stderr: String,
}

impl CommandOutcome {
    /// Whether the process exited with code 0
    pub fn success(&self) -> bool {
        self.code == 0
    }
}

/// Run a program to completion, capturing stdout and stderr.
pub fn run_captured<S: AsRef<OsStr>>(
    program: &str,
    args: &[S],
    working_dir: Option<&Path>,
) -> io::Result<CommandOutcome> {
    let mut cmd = Command::new(program);
    cmd.args(args);
    if let Some(dir) = working_dir {
        cmd.current_dir(dir);
    }
    let output = cmd.output()?;

    Ok(CommandOutcome {
        code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).trim().to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
    })
}

/// Run a program with inherited stdio, returning its raw exit code.
///
/// `None` means the process terminated without a code (killed by a signal).
pub fn run_inherited<S: AsRef<OsStr>>(program: &str, args: &[S]) -> io::Result<Option<i32>> {
    let status = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .status()?;
    Ok(status.code())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_captured_success() {
        let outcome = run_captured("echo", &["hello"], None).unwrap();
        assert!(outcome.success());
        assert_eq!(outcome.stdout, "hello");
    }

    #[test]
    fn test_run_captured_failure_code() {
        let outcome = run_captured("false", &[] as &[&str], None).unwrap();
        assert!(!outcome.success());
        assert_eq!(outcome.code, 1);
    }

    #[test]
    fn test_run_captured_working_dir() {
        let dir = tempfile::TempDir::new().unwrap();
        let outcome = run_captured("pwd", &[] as &[&str], Some(dir.path())).unwrap();
        assert_eq!(
            outcome.stdout,
            dir.path().canonicalize().unwrap().display().to_string()
        );
    }

    #[test]
    fn test_missing_program_is_io_error() {
        let result = run_captured("nonexistent-program-xyz", &[] as &[&str], None);
        assert!(result.is_err());
    }

    #[test]
    fn test_run_inherited_reports_code() {
        let code = run_inherited("true", &[] as &[&str]).unwrap();
        assert_eq!(code, Some(0));
    }
}
