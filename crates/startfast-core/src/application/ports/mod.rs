//! Driven (output) ports — implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `startfast-adapters` crate provides implementations.

use crate::domain::{RenderParams, TemplateId};
use crate::error::StartfastResult;
use std::path::Path;

/// Port for destination-filesystem operations.
///
/// Implemented by:
/// - `startfast_adapters::workspace::LocalWorkspace` (production)
/// - `startfast_adapters::workspace::MemoryWorkspace` (testing)
///
/// ## Design Notes
///
/// - Reads (`exists`, `is_dir`, `dir_is_empty`) are the only operations the
///   planning path may perform; writes happen strictly after a plan exists
/// - The executable flag is capability-based, a no-op on platforms without
///   a mode bit
pub trait Workspace: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> StartfastResult<()>;

    /// Write content to a file, truncating any previous content.
    fn write_file(&self, path: &Path, content: &str) -> StartfastResult<()>;

    /// Mark a written file executable.
    fn mark_executable(&self, path: &Path) -> StartfastResult<()>;

    /// Check if a path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Check if a path is a directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// Check if a directory has no entries. Errors if unreadable.
    fn dir_is_empty(&self, path: &Path) -> StartfastResult<bool>;
}

/// Port for template rendering.
///
/// This is the entire capability the core requires from its template
/// collaborator: one operation, body content treated as a black box.
///
/// Implemented by:
/// - `startfast_adapters::renderer::CatalogRenderer` (builtin bodies +
///   optional per-id overrides)
pub trait TemplateRenderer: Send + Sync {
    /// Render the body registered under `template` with the given variables.
    fn render(&self, template: TemplateId, params: &RenderParams) -> StartfastResult<String>;
}
