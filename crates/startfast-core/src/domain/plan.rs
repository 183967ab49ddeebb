//! The composition planner and its output, [`GenerationPlan`].
//!
//! A plan is the complete, ordered description of everything the executor
//! will write: one entry per active feature, with its concrete output path
//! and render parameters resolved. Planning performs no I/O; a plan can be
//! inspected, diffed, or dry-run before anything touches the disk.
//!
//! # Invariants
//!
//! 1. Every path is relative (never escapes the destination root)
//! 2. No two entries target the same output path
//! 3. Every directory entry precedes any file entry nested under it
//! 4. Identical configurations produce identical plans (entry-wise)
//!
//! Invariant 2 is enforced during composition with an incremental
//! path→feature-key index so a registry defect is reported with *both*
//! contributing keys, not a late generic collision message.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use uuid::Uuid;

use crate::domain::{
    common::RelativePath,
    config::BuildConfig,
    error::DomainError,
    features,
    params::RenderParams,
    registry::{EntryKind, FeatureKey, TEMPLATE_REGISTRY, TemplateEntry, TemplateId},
};

/// One unit of output: a directory to create or a file to render and write.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanEntry {
    /// The feature this entry materializes.
    pub feature: FeatureKey,

    /// Output path relative to the plan's destination root.
    pub path: RelativePath,

    /// Directory, file, or executable file.
    pub kind: EntryKind,

    /// Template body to render. `None` for directories.
    pub template: Option<TemplateId>,

    /// Variables handed to the rendering collaborator.
    pub params: RenderParams,
}

impl PlanEntry {
    pub fn is_file(&self) -> bool {
        self.kind.is_file()
    }
}

/// Ordered, validated output plan for one generation run.
///
/// # Identity vs equality
///
/// The `id` is instance identity (one per composition, for log correlation);
/// it is deliberately excluded from `PartialEq` so the determinism guarantee
/// — equal configs produce equal plans — is expressed directly by `==`.
#[derive(Debug, Clone)]
pub struct GenerationPlan {
    id: Uuid,
    destination: PathBuf,
    entries: Vec<PlanEntry>,
}

impl PartialEq for GenerationPlan {
    fn eq(&self, other: &Self) -> bool {
        self.destination == other.destination && self.entries == other.entries
    }
}

impl GenerationPlan {
    /// Compose the plan for a configuration against the process registry.
    pub fn compose(config: &BuildConfig) -> Result<Self, DomainError> {
        Self::compose_from(config, TEMPLATE_REGISTRY)
    }

    /// Compose against an explicit entry table. Split out so registry-defect
    /// handling is testable without poisoning the real registry.
    fn compose_from(config: &BuildConfig, table: &[TemplateEntry]) -> Result<Self, DomainError> {
        let params = RenderParams::from_config(config);

        // Incremental path index: first writer wins, second reports both.
        let mut claimed: BTreeMap<String, FeatureKey> = BTreeMap::new();
        let mut entries = Vec::new();

        for entry in features::active_entries(config, table) {
            let concrete = params.render(entry.path);
            let path = RelativePath::try_new(concrete.as_str())?;

            if let Some(first) = claimed.insert(concrete.clone(), entry.key) {
                return Err(DomainError::TemplateConflict {
                    path: concrete,
                    first: first.to_string(),
                    second: entry.key.to_string(),
                });
            }

            entries.push(PlanEntry {
                feature: entry.key,
                path,
                kind: entry.kind,
                template: entry.template,
                params: params.clone(),
            });
        }

        // Directories first, then files; within each group by depth, then
        // lexically. Reproducible across runs with identical input.
        entries.sort_by(|a, b| {
            (a.kind.is_file(), a.path.depth(), a.path.as_str()).cmp(&(
                b.kind.is_file(),
                b.path.depth(),
                b.path.as_str(),
            ))
        });

        let plan = Self {
            id: Uuid::new_v4(),
            destination: config.destination(),
            entries,
        };
        plan.validate()?;
        Ok(plan)
    }

    /// Instance identity for log correlation.
    pub const fn id(&self) -> Uuid {
        self.id
    }

    /// The directory this plan materializes into (`target_path/project_name`).
    pub fn destination(&self) -> &Path {
        &self.destination
    }

    pub fn entries(&self) -> &[PlanEntry] {
        &self.entries
    }

    pub fn files(&self) -> impl Iterator<Item = &PlanEntry> {
        self.entries.iter().filter(|e| e.is_file())
    }

    pub fn directories(&self) -> impl Iterator<Item = &PlanEntry> {
        self.entries.iter().filter(|e| !e.is_file())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Re-check the structural invariants.
    ///
    /// Composition already guarantees these; this exists for defense after
    /// any future deserialization or external construction.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.entries.is_empty() {
            return Err(DomainError::InvalidPlan("plan has no entries".into()));
        }

        let mut seen = BTreeMap::new();
        for entry in &self.entries {
            if let Some(first) = seen.insert(entry.path.as_str().to_string(), entry.feature) {
                return Err(DomainError::TemplateConflict {
                    path: entry.path.to_string(),
                    first: first.to_string(),
                    second: entry.feature.to_string(),
                });
            }
        }

        for (i, dir) in self.entries.iter().enumerate() {
            if dir.is_file() {
                continue;
            }
            for earlier in &self.entries[..i] {
                if earlier.is_file() && dir.path.is_ancestor_of(&earlier.path) {
                    return Err(DomainError::InvalidPlan(format!(
                        "file {} precedes its directory {}",
                        earlier.path, dir.path
                    )));
                }
            }
        }

        Ok(())
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────
