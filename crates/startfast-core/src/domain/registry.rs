//! The template registry: the static catalog of everything startfast can
//! generate.
//!
//! # Design Rationale
//!
//! The feature matrix (project-type × database × auth × mode × toggles)
//! lives here as one inspectable table instead of conditional branching
//! spread across filesystem code. Each generatable unit is described exactly
//! once by a [`TemplateEntry`]: its feature key, its output path (possibly
//! parameterized), and a pure applicability predicate over [`BuildConfig`].
//!
//! The registry is process-wide, read-only static data — initialized at
//! compile time, never mutated, safe for unlimited concurrent reads.
//!
//! # Adding a New Generated File
//!
//! 1. Add one [`TemplateEntry`] here (key, path, predicate, template id)
//! 2. Register the template body in the adapters crate
//! 3. That's it — resolution, planning, and conflict checks derive from the
//!    table
//!
//! # Variant Pairs
//!
//! Mutually exclusive variants (async/sync main, session, service layer;
//! per-auth security modules) are separate entries targeting the same output
//! path with disjoint predicates. The planner's path-collision check turns
//! any overlap between such predicates into a loud [`TemplateConflict`]
//! instead of a silently shadowed file.
//!
//! [`TemplateConflict`]: crate::domain::error::DomainError::TemplateConflict

use std::fmt;

use crate::domain::{
    config::BuildConfig,
    value_objects::{Auth, Database, ProjectType},
};

// ── Identifiers ──────────────────────────────────────────────────────────────

/// Opaque identifier naming one generatable unit (a file or directory).
///
/// Unique within a plan; dotted segments group related units into subtrees
/// (`docker.compose`, `tests.api`) so toggle subtraction is observable per
/// subtree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FeatureKey(pub &'static str);

impl FeatureKey {
    pub const fn as_str(&self) -> &'static str {
        self.0
    }

    /// Whether this key belongs to the given dotted subtree.
    pub fn in_subtree(&self, prefix: &str) -> bool {
        self.0 == prefix
            || self
                .0
                .strip_prefix(prefix)
                .is_some_and(|rest| rest.starts_with('.'))
    }
}

impl fmt::Display for FeatureKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Identifier of a template body, resolved by the rendering collaborator.
///
/// The core never inspects template content; this is the entire coupling
/// surface between planning and rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TemplateId(pub &'static str);

impl TemplateId {
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// What kind of filesystem node an entry materializes as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    File,
    /// A file with the executable bit set (shell scripts).
    Script,
}

impl EntryKind {
    pub const fn is_file(self) -> bool {
        matches!(self, Self::File | Self::Script)
    }
}

// ── Registry entries ─────────────────────────────────────────────────────────

/// Static record describing one generatable unit.
///
/// Defined once at process start, never mutated.
#[derive(Clone, Copy)]
pub struct TemplateEntry {
    /// Stable identifier for this unit.
    pub key: FeatureKey,

    /// Directory, file, or executable file.
    pub kind: EntryKind,

    /// Output path relative to the project root. May contain render-param
    /// placeholders (e.g. `{{DATABASE}}`), substituted at planning time.
    pub path: &'static str,

    /// Body to render for files. Directories carry no template.
    pub template: Option<TemplateId>,

    /// Pure predicate deciding whether this unit is part of a configuration.
    pub applies: fn(&BuildConfig) -> bool,
}

impl fmt::Debug for TemplateEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TemplateEntry")
            .field("key", &self.key)
            .field("kind", &self.kind)
            .field("path", &self.path)
            .field("template", &self.template)
            .finish_non_exhaustive()
    }
}

const fn dir(key: &'static str, path: &'static str, applies: fn(&BuildConfig) -> bool) -> TemplateEntry {
    TemplateEntry {
        key: FeatureKey(key),
        kind: EntryKind::Directory,
        path,
        template: None,
        applies,
    }
}

const fn file(
    key: &'static str,
    path: &'static str,
    template: &'static str,
    applies: fn(&BuildConfig) -> bool,
) -> TemplateEntry {
    TemplateEntry {
        key: FeatureKey(key),
        kind: EntryKind::File,
        path,
        template: Some(TemplateId(template)),
        applies,
    }
}

const fn script(
    key: &'static str,
    path: &'static str,
    template: &'static str,
    applies: fn(&BuildConfig) -> bool,
) -> TemplateEntry {
    TemplateEntry {
        key: FeatureKey(key),
        kind: EntryKind::Script,
        path,
        template: Some(TemplateId(template)),
        applies,
    }
}

// ── Predicates ───────────────────────────────────────────────────────────────

fn always(_: &BuildConfig) -> bool {
    true
}

// ── The registry ─────────────────────────────────────────────────────────────

/// Every unit startfast can generate, with its applicability condition.
///
/// Order within the table is the authoring order; the planner re-sorts
/// entries into directory-first, depth-then-lexical order, so ordering here
/// is not semantic.
pub static TEMPLATE_REGISTRY: &[TemplateEntry] = &[
    // ── Package directories ──────────────────────────────────────────────────
    dir("dir.app", "app", always),
    dir("dir.api", "app/api", always),
    dir("dir.api.v1", "app/api/v1", always),
    dir("dir.core", "app/core", always),
    dir("dir.db", "app/db", |c| c.database().is_some()),
    dir("dir.models", "app/models", |c| c.database().is_sql()),
    dir("dir.schemas", "app/schemas", |c| c.auth().is_some()),
    dir("dir.services", "app/services", |c| {
        c.project_type() != ProjectType::Api
    }),
    dir("dir.worker", "app/worker", |c| c.celery()),
    dir("dir.scripts", "scripts", |c| c.docker()),
    dir("dir.tests", "tests", |c| c.tests()),
    dir("dir.docs", "docs", |c| c.docs()),
    // ── Application entry point ──────────────────────────────────────────────
    file("app.init", "app/__init__.py", "app/init", always),
    file("app.main.async", "app/main.py", "app/main_async", |c| {
        c.is_async()
    }),
    file("app.main.sync", "app/main.py", "app/main_sync", |c| {
        !c.is_async()
    }),
    // ── API layer ────────────────────────────────────────────────────────────
    file("api.init", "app/api/__init__.py", "api/init", always),
    file(
        "api.router.plain",
        "app/api/v1/__init__.py",
        "api/router_plain",
        |c| !c.auth().is_some(),
    ),
    file(
        "api.router.auth",
        "app/api/v1/__init__.py",
        "api/router_auth",
        |c| c.auth().is_some(),
    ),
    file(
        "api.endpoints",
        "app/api/v1/endpoints.py",
        "api/endpoints",
        always,
    ),
    file(
        "api.auth.token",
        "app/api/v1/auth.py",
        "api/auth_routes_token",
        |c| matches!(c.auth(), Auth::Jwt | Auth::Oauth2),
    ),
    file(
        "api.auth.api-key",
        "app/api/v1/auth.py",
        "api/auth_routes_api_key",
        |c| c.auth() == Auth::ApiKey,
    ),
    // ── Core settings and security ───────────────────────────────────────────
    file("core.init", "app/core/__init__.py", "core/init", always),
    file("core.config", "app/core/config.py", "core/config", always),
    file(
        "core.security.jwt",
        "app/core/security.py",
        "core/security_jwt",
        |c| c.auth() == Auth::Jwt,
    ),
    file(
        "core.security.oauth2",
        "app/core/security.py",
        "core/security_oauth2",
        |c| c.auth() == Auth::Oauth2,
    ),
    file(
        "core.security.api-key",
        "app/core/security.py",
        "core/security_api_key",
        |c| c.auth() == Auth::ApiKey,
    ),
    // ── Persistence ──────────────────────────────────────────────────────────
    file("db.init", "app/db/__init__.py", "db/init", |c| {
        c.database().is_some()
    }),
    file("db.session.async", "app/db/session.py", "db/session_async", |c| {
        c.database().is_sql() && c.is_async()
    }),
    file("db.session.sync", "app/db/session.py", "db/session_sync", |c| {
        c.database().is_sql() && !c.is_async()
    }),
    file(
        "db.client.mongodb.async",
        "app/db/{{DATABASE}}_client.py",
        "db/mongodb_client_async",
        |c| c.database() == Database::Mongodb && c.is_async(),
    ),
    file(
        "db.client.mongodb.sync",
        "app/db/{{DATABASE}}_client.py",
        "db/mongodb_client_sync",
        |c| c.database() == Database::Mongodb && !c.is_async(),
    ),
    file(
        "db.client.redis.async",
        "app/db/{{DATABASE}}_client.py",
        "db/redis_client_async",
        |c| c.database() == Database::Redis && c.is_async(),
    ),
    file(
        "db.client.redis.sync",
        "app/db/{{DATABASE}}_client.py",
        "db/redis_client_sync",
        |c| c.database() == Database::Redis && !c.is_async(),
    ),
    file("models.init", "app/models/__init__.py", "models/init", |c| {
        c.database().is_sql()
    }),
    file("models.base", "app/models/base.py", "models/base", |c| {
        c.database().is_sql()
    }),
    file("models.auth", "app/models/auth.py", "models/auth_user", |c| {
        c.database().is_sql() && c.auth().needs_user_model()
    }),
    // ── Schemas ──────────────────────────────────────────────────────────────
    file("schemas.init", "app/schemas/__init__.py", "schemas/init", |c| {
        c.auth().is_some()
    }),
    file("schemas.auth", "app/schemas/auth.py", "schemas/auth", |c| {
        c.auth().is_some()
    }),
    // ── Service layer (archetype-specific) ───────────────────────────────────
    file("services.init", "app/services/__init__.py", "services/init", |c| {
        c.project_type() != ProjectType::Api
    }),
    file(
        "services.items.async",
        "app/services/item_service.py",
        "services/item_async",
        |c| c.project_type() == ProjectType::Crud && c.is_async(),
    ),
    file(
        "services.items.sync",
        "app/services/item_service.py",
        "services/item_sync",
        |c| c.project_type() == ProjectType::Crud && !c.is_async(),
    ),
    file(
        "services.prediction",
        "app/services/prediction_service.py",
        "services/prediction",
        |c| c.project_type() == ProjectType::MlApi,
    ),
    file(
        "services.processing",
        "app/services/processing_service.py",
        "services/processing",
        |c| c.project_type() == ProjectType::Microservice,
    ),
    // ── Background worker ────────────────────────────────────────────────────
    file("worker.init", "app/worker/__init__.py", "worker/init", |c| {
        c.celery()
    }),
    file("worker.app", "app/worker/celery_app.py", "worker/celery_app", |c| {
        c.celery()
    }),
    file("worker.tasks", "app/worker/tasks.py", "worker/tasks", |c| {
        c.celery()
    }),
    // ── Monitoring ───────────────────────────────────────────────────────────
    file(
        "monitoring.metrics",
        "app/core/monitoring.py",
        "core/monitoring",
        |c| c.monitoring(),
    ),
    // ── Advanced scaffolding (strictly additive) ─────────────────────────────
    file(
        "advanced.logging",
        "app/core/logging.py",
        "core/logging",
        |c| c.advanced(),
    ),
    file(
        "advanced.middleware",
        "app/core/middleware.py",
        "core/middleware",
        |c| c.advanced(),
    ),
    file("advanced.makefile", "Makefile", "advanced/makefile", |c| {
        c.advanced()
    }),
    file(
        "advanced.precommit",
        ".pre-commit-config.yaml",
        "advanced/precommit",
        |c| c.advanced(),
    ),
    // ── Project metadata ─────────────────────────────────────────────────────
    file(
        "meta.requirements",
        "requirements.txt",
        "meta/requirements",
        always,
    ),
    file("meta.env", ".env.example", "meta/env", always),
    file("meta.gitignore", ".gitignore", "meta/gitignore", always),
    // ── Docker ───────────────────────────────────────────────────────────────
    file("docker.dockerfile", "Dockerfile", "docker/dockerfile", |c| {
        c.docker()
    }),
    file("docker.compose", "docker-compose.yml", "docker/compose", |c| {
        c.docker()
    }),
    file("docker.ignore", ".dockerignore", "docker/ignore", |c| {
        c.docker()
    }),
    script("docker.start", "scripts/start.sh", "docker/start", |c| {
        c.docker()
    }),
    // ── Tests ────────────────────────────────────────────────────────────────
    file("tests.init", "tests/__init__.py", "tests/init", |c| c.tests()),
    file("tests.conftest", "tests/conftest.py", "tests/conftest", |c| {
        c.tests()
    }),
    file("tests.api", "tests/test_api.py", "tests/test_api", |c| {
        c.tests()
    }),
    // ── Documentation ────────────────────────────────────────────────────────
    file("docs.readme", "README.md", "docs/readme", |c| c.docs()),
    file("docs.index", "docs/index.md", "docs/index", |c| c.docs()),
];

/// Look up a registry entry by feature key.
pub fn entry(key: FeatureKey) -> Option<&'static TemplateEntry> {
    TEMPLATE_REGISTRY.iter().find(|e| e.key == key)
}

// ── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn feature_keys_are_unique() {
        let mut seen = HashSet::new();
        for entry in TEMPLATE_REGISTRY {
            assert!(
                seen.insert(entry.key),
                "duplicate feature key: {}",
                entry.key
            );
        }
    }

    #[test]
    fn directories_carry_no_template_and_files_carry_one() {
        for entry in TEMPLATE_REGISTRY {
            match entry.kind {
                EntryKind::Directory => assert!(
                    entry.template.is_none(),
                    "{} is a directory with a template",
                    entry.key
                ),
                EntryKind::File | EntryKind::Script => assert!(
                    entry.template.is_some(),
                    "{} is a file without a template",
                    entry.key
                ),
            }
        }
    }

    #[test]
    fn paths_are_relative() {
        for entry in TEMPLATE_REGISTRY {
            assert!(
                !entry.path.starts_with('/'),
                "{} has an absolute path",
                entry.key
            );
        }
    }

    #[test]
    fn entry_lookup_finds_known_keys() {
        assert!(entry(FeatureKey("core.config")).is_some());
        assert!(entry(FeatureKey("docker.compose")).is_some());
        assert!(entry(FeatureKey("does.not.exist")).is_none());
    }

    #[test]
    fn subtree_matching_is_segment_aware() {
        assert!(FeatureKey("docker.compose").in_subtree("docker"));
        assert!(FeatureKey("docker").in_subtree("docker"));
        assert!(!FeatureKey("dockerx.compose").in_subtree("docker"));
    }

    #[test]
    fn variant_pairs_share_paths_with_disjoint_predicates() {
        // Entries that target the same path must never co-apply; spot-check
        // the known variant pairs across representative configs.
        use crate::domain::value_objects::{Auth, Database, ExecutionMode, ProjectType};

        let configs = [
            crate::domain::config::BuildConfig::builder()
                .project_name("probe")
                .build()
                .unwrap(),
            crate::domain::config::BuildConfig::builder()
                .project_name("probe")
                .project_type(ProjectType::Crud)
                .database(Database::Mysql)
                .auth(Auth::Jwt)
                .execution_mode(ExecutionMode::Sync)
                .build()
                .unwrap(),
            crate::domain::config::BuildConfig::builder()
                .project_name("probe")
                .database(Database::Redis)
                .auth(Auth::ApiKey)
                .celery(true)
                .monitoring(true)
                .advanced(true)
                .build()
                .unwrap(),
        ];

        for config in &configs {
            let mut paths = HashSet::new();
            for entry in TEMPLATE_REGISTRY {
                if (entry.applies)(config) {
                    assert!(
                        paths.insert(entry.path),
                        "path {} emitted twice for {config}",
                        entry.path
                    );
                }
            }
        }
    }
}
