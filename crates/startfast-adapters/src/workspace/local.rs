//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use startfast_core::{application::ports::Workspace, error::StartfastResult};

/// Production workspace implementation backed by `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalWorkspace;

impl LocalWorkspace {
    pub fn new() -> Self {
        Self
    }
}

impl Workspace for LocalWorkspace {
    fn create_dir_all(&self, path: &Path) -> StartfastResult<()> {
        std::fs::create_dir_all(path).map_err(|e| write_failure(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &str) -> StartfastResult<()> {
        std::fs::write(path, content).map_err(|e| write_failure(path, e, "write file"))
    }

    fn mark_executable(&self, path: &Path) -> StartfastResult<()> {
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let metadata =
                std::fs::metadata(path).map_err(|e| write_failure(path, e, "read metadata"))?;
            let mut perms = metadata.permissions();
            perms.set_mode(perms.mode() | 0o111);
            std::fs::set_permissions(path, perms)
                .map_err(|e| write_failure(path, e, "set permissions"))?;
        }
        #[cfg(not(unix))]
        {
            // No executable bit outside unix.
            let _ = path;
        }
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn dir_is_empty(&self, path: &Path) -> StartfastResult<bool> {
        let mut entries =
            std::fs::read_dir(path).map_err(|e| write_failure(path, e, "read directory"))?;
        Ok(entries.next().is_none())
    }
}

fn write_failure(
    path: &Path,
    e: io::Error,
    operation: &str,
) -> startfast_core::error::StartfastError {
    use startfast_core::application::error::ApplicationError;

    ApplicationError::WriteFailure {
        path: path.to_path_buf(),
        reason: format!("failed to {operation}: {e}"),
    }
    .into()
}

// ── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn writes_and_reads_back() {
        let dir = TempDir::new().unwrap();
        let ws = LocalWorkspace::new();

        let nested = dir.path().join("a/b");
        ws.create_dir_all(&nested).unwrap();
        assert!(ws.is_dir(&nested));
        assert!(ws.dir_is_empty(&nested).unwrap());

        let file = nested.join("hello.txt");
        ws.write_file(&file, "hi").unwrap();
        assert!(ws.exists(&file));
        assert!(!ws.is_dir(&file));
        assert!(!ws.dir_is_empty(&nested).unwrap());
        assert_eq!(std::fs::read_to_string(&file).unwrap(), "hi");
    }

    #[cfg(unix)]
    #[test]
    fn mark_executable_sets_mode_bits() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let ws = LocalWorkspace::new();
        let script = dir.path().join("start.sh");
        ws.write_file(&script, "#!/bin/sh\n").unwrap();
        ws.mark_executable(&script).unwrap();

        let mode = std::fs::metadata(&script).unwrap().permissions().mode();
        assert_ne!(mode & 0o111, 0);
    }

    #[test]
    fn dir_is_empty_errors_on_missing_path() {
        let ws = LocalWorkspace::new();
        assert!(ws.dir_is_empty(Path::new("/no/such/dir/here")).is_err());
    }
}
