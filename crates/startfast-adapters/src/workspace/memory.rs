//! In-memory workspace adapter for testing.

use std::{
    collections::{HashMap, HashSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use startfast_core::{
    application::{error::ApplicationError, ports::Workspace},
    error::StartfastResult,
};

/// In-memory workspace for tests: records every write, never touches disk.
#[derive(Debug, Clone, Default)]
pub struct MemoryWorkspace {
    inner: Arc<RwLock<MemoryWorkspaceInner>>,
}

#[derive(Debug, Default)]
struct MemoryWorkspaceInner {
    files: HashMap<PathBuf, String>,
    directories: HashSet<PathBuf>,
    executables: HashSet<PathBuf>,
    /// Paths whose writes are forced to fail, for partial-failure tests.
    poisoned: HashSet<PathBuf>,
}

impl MemoryWorkspace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path).cloned()
    }

    /// Check if a file was marked executable.
    pub fn is_executable(&self, path: &Path) -> bool {
        self.inner.read().unwrap().executables.contains(path)
    }

    /// All written file paths, sorted for stable assertions.
    pub fn file_paths(&self) -> Vec<PathBuf> {
        let mut paths: Vec<_> = self.inner.read().unwrap().files.keys().cloned().collect();
        paths.sort();
        paths
    }

    pub fn file_count(&self) -> usize {
        self.inner.read().unwrap().files.len()
    }

    /// Force subsequent writes to `path` to fail.
    pub fn poison(&self, path: impl Into<PathBuf>) {
        self.inner.write().unwrap().poisoned.insert(path.into());
    }
}

impl Workspace for MemoryWorkspace {
    fn create_dir_all(&self, path: &Path) -> StartfastResult<()> {
        let mut inner = self.inner.write().map_err(|_| ApplicationError::LockPoisoned)?;
        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            inner.directories.insert(current.clone());
        }
        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> StartfastResult<()> {
        let mut inner = self.inner.write().map_err(|_| ApplicationError::LockPoisoned)?;

        if inner.poisoned.contains(path) {
            return Err(ApplicationError::WriteFailure {
                path: path.to_path_buf(),
                reason: "poisoned by test".into(),
            }
            .into());
        }

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(ApplicationError::WriteFailure {
                    path: path.to_path_buf(),
                    reason: "parent directory does not exist".into(),
                }
                .into());
            }
        }

        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn mark_executable(&self, path: &Path) -> StartfastResult<()> {
        let mut inner = self.inner.write().map_err(|_| ApplicationError::LockPoisoned)?;
        inner.executables.insert(path.to_path_buf());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        let inner = self.inner.read().unwrap();
        inner.files.contains_key(path) || inner.directories.contains(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.inner.read().unwrap().directories.contains(path)
    }

    fn dir_is_empty(&self, path: &Path) -> StartfastResult<bool> {
        let inner = self.inner.read().map_err(|_| ApplicationError::LockPoisoned)?;
        let has_child = inner
            .files
            .keys()
            .chain(inner.directories.iter())
            .any(|p| p != path && p.starts_with(path));
        Ok(!has_child)
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────
