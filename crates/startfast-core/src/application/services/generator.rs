//! Generator service — the application orchestrator.
//!
//! Coordinates the whole generation workflow:
//! 1. Validate the destination (read-only checks)
//! 2. Compose the plan (pure)
//! 3. Render and write every entry, in plan order
//!
//! Validation and planning errors are raised before any filesystem
//! mutation, so the destination is untouched on any planning-stage failure.
//! Only execution-stage failures can leave partial output, and those are
//! surfaced with the failing path — never swallowed, never rolled back.

use std::path::Path;

use tracing::{info, instrument, warn};

use crate::{
    application::{
        error::ApplicationError,
        ports::{TemplateRenderer, Workspace},
    },
    domain::{BuildConfig, DomainError, EntryKind, GenerationPlan},
    error::StartfastResult,
};

/// Main generation service.
pub struct GeneratorService {
    renderer: Box<dyn TemplateRenderer>,
    workspace: Box<dyn Workspace>,
}

impl GeneratorService {
    /// Create a new generator service with the given adapters.
    pub fn new(renderer: Box<dyn TemplateRenderer>, workspace: Box<dyn Workspace>) -> Self {
        Self {
            renderer,
            workspace,
        }
    }

    /// Compose the plan for a configuration without writing anything.
    ///
    /// Performs the read-only destination checks so a dry run reports the
    /// same early failures a real run would.
    #[instrument(skip_all, fields(project = %config.project_name()))]
    pub fn plan(&self, config: &BuildConfig) -> StartfastResult<GenerationPlan> {
        self.check_target_path(config)?;

        let plan = GenerationPlan::compose(config)?;
        info!(
            plan = %plan.id(),
            entries = plan.len(),
            "plan composed"
        );
        Ok(plan)
    }

    /// Generate the project: plan, check the destination, write every entry.
    #[instrument(skip_all, fields(project = %config.project_name()))]
    pub fn generate(&self, config: &BuildConfig) -> StartfastResult<GenerationPlan> {
        let plan = self.plan(config)?;
        self.check_destination(config, plan.destination())?;

        info!(
            destination = %plan.destination().display(),
            files = plan.files().count(),
            "writing plan"
        );
        self.execute(&plan)?;

        info!(plan = %plan.id(), "generation completed");
        Ok(plan)
    }

    // ── Destination checks (read-only) ───────────────────────────────────────

    /// `target_path` may be missing (created on demand) but must not be a
    /// file.
    fn check_target_path(&self, config: &BuildConfig) -> StartfastResult<()> {
        let target = config.target_path();
        if self.workspace.exists(target) && !self.workspace.is_dir(target) {
            return Err(DomainError::InvalidConfiguration {
                field: "path",
                reason: format!("{} exists and is not a directory", target.display()),
            }
            .into());
        }
        Ok(())
    }

    /// Refuse a pre-existing, non-empty destination unless `force` is set.
    fn check_destination(&self, config: &BuildConfig, destination: &Path) -> StartfastResult<()> {
        if !self.workspace.exists(destination) {
            return Ok(());
        }
        let conflict = ApplicationError::DestinationConflict {
            path: destination.to_path_buf(),
        };
        if !self.workspace.is_dir(destination) {
            // A file squatting on the destination is a conflict even with
            // force; overwriting it would not produce a project directory.
            return Err(conflict.into());
        }
        if !self.workspace.dir_is_empty(destination)? && !config.force() {
            return Err(conflict.into());
        }
        Ok(())
    }

    // ── Execution ────────────────────────────────────────────────────────────

    /// Write all entries in plan order. Halts at the first failure; the
    /// partially-materialized tree is left in place and the failing path is
    /// in the returned error.
    fn execute(&self, plan: &GenerationPlan) -> StartfastResult<()> {
        self.workspace.create_dir_all(plan.destination())?;

        for entry in plan.entries() {
            let path = plan.destination().join(entry.path.as_path());
            let result = match entry.kind {
                EntryKind::Directory => self.workspace.create_dir_all(&path),
                EntryKind::File | EntryKind::Script => self.write_entry(entry, &path),
            };

            if let Err(e) = result {
                warn!(
                    path = %path.display(),
                    "write failed; leaving partial output in place"
                );
                return Err(e);
            }
        }

        Ok(())
    }

    fn write_entry(
        &self,
        entry: &crate::domain::PlanEntry,
        path: &Path,
    ) -> StartfastResult<()> {
        let template = entry
            .template
            .ok_or_else(|| DomainError::MissingTemplate {
                template: entry.feature.to_string(),
            })?;
        let content = self.renderer.render(template, &entry.params)?;

        // Root-level files have no directory entry of their own.
        if let Some(parent) = path.parent() {
            self.workspace.create_dir_all(parent)?;
        }
        self.workspace.write_file(path, &content)?;

        if entry.kind == EntryKind::Script {
            self.workspace.mark_executable(path)?;
        }
        Ok(())
    }
}
