//! Directory-scoped invocation
//!
//! The lint engine resolves its inputs relative to the process working
//! directory, so the lint stage runs inside the scanned tree. [`DirGuard`]
//! changes the working directory on construction and restores the previous
//! one when dropped, on every exit path including unwinding panics.
//!
//! The working directory is process-wide mutable state: concurrent guards in
//! one process race each other, so callers (including tests) must serialize.

use std::env;
use std::io;
use std::path::{Path, PathBuf};

/// Scoped working-directory change, restored on drop.
pub struct DirGuard {
    previous: PathBuf,
}

impl DirGuard {
    /// Change the process working directory to `target`.
    pub fn change_to(target: &Path) -> io::Result<Self> {
        let previous = env::current_dir()?;
        env::set_current_dir(target)?;
        Ok(Self { previous })
    }
}

impl Drop for DirGuard {
    fn drop(&mut self) {
        // Nothing sensible to do if the original directory vanished.
        let _ = env::set_current_dir(&self.previous);
    }
}

/// Resolve a possibly-relative path against the current working directory.
///
/// Artifact paths handed to the lint engine must stay anchored to the
/// invocation directory even though the engine runs inside the scanned tree.
pub fn absolutize(path: &Path) -> io::Result<PathBuf> {
    if path.is_absolute() {
        Ok(path.to_path_buf())
    } else {
        Ok(env::current_dir()?.join(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::TempDir;

    #[test]
    #[serial]
    fn test_guard_restores_on_success() {
        let before = env::current_dir().unwrap();
        let target = TempDir::new().unwrap();

        {
            let _guard = DirGuard::change_to(target.path()).unwrap();
            assert_eq!(
                env::current_dir().unwrap(),
                target.path().canonicalize().unwrap()
            );
        }

        assert_eq!(env::current_dir().unwrap(), before);
    }

    #[test]
    #[serial]
    fn test_guard_restores_on_panic() {
        let before = env::current_dir().unwrap();
        let target = TempDir::new().unwrap();
        let target_path = target.path().to_path_buf();

        let result = std::panic::catch_unwind(move || {
            let _guard = DirGuard::change_to(&target_path).unwrap();
            panic!("induced failure inside the scoped operation");
        });

        assert!(result.is_err());
        assert_eq!(env::current_dir().unwrap(), before);
    }

    #[test]
    #[serial]
    fn test_guard_rejects_missing_directory() {
        let before = env::current_dir().unwrap();
        let result = DirGuard::change_to(Path::new("/nonexistent/dir/for/guard"));
        assert!(result.is_err());
        assert_eq!(env::current_dir().unwrap(), before);
    }

    #[test]
    #[serial]
    fn test_absolutize_keeps_absolute_paths() {
        let path = Path::new("/tmp/out/sarif.json");
        assert_eq!(absolutize(path).unwrap(), path);
    }

    #[test]
    #[serial]
    fn test_absolutize_anchors_relative_paths() {
        let resolved = absolutize(Path::new("out/sarif.json")).unwrap();
        assert_eq!(
            resolved,
            env::current_dir().unwrap().join("out/sarif.json")
        );
    }
}
