//! The `BuildConfig` aggregate root and its typestate builder.
//!
//! A `BuildConfig` is the fully-resolved, validated description of the
//! project the user wants to generate. All fields are checked at build time;
//! once a `BuildConfig` exists it is guaranteed internally consistent — no
//! combination the validator rejects can be observed downstream.
//!
//! # Typestate builder
//!
//! The builder uses two phantom marker types (`NoName` / `HasName`) to
//! enforce at *compile time* that a project name is set before any other
//! field. Runtime validation (`validate`) still runs at `build()` to catch
//! cross-field invariants that cannot be expressed in the type system.
//!
//! # Domain purity
//!
//! Construction is a pure function of the options. Checking that
//! `target_path` is actually usable on disk belongs to the application
//! layer, which owns the filesystem port.

use std::fmt;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use crate::domain::{
    capabilities,
    error::DomainError,
    value_objects::{Auth, Database, ExecutionMode, ProjectType, PythonVersion},
};

/// Names that would collide with generated content or OS device files.
const RESERVED_NAMES: &[&str] = &[
    "app", "tests", "test", "src", "docs", "scripts", "con", "prn", "aux", "nul",
];

// ── Aggregate root ───────────────────────────────────────────────────────────

/// A fully-validated generation configuration.
///
/// Guaranteed on construction:
/// - `project_name` is non-empty, filesystem-safe, and not reserved
/// - `project_type` and `database` are a legal combination
/// - `python_version` is a CPython 3 line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildConfig {
    project_name: String,
    target_path: PathBuf,
    project_type: ProjectType,
    database: Database,
    auth: Auth,
    execution_mode: ExecutionMode,
    python_version: PythonVersion,
    docker: bool,
    tests: bool,
    docs: bool,
    monitoring: bool,
    celery: bool,
    advanced: bool,
    force: bool,
}

impl BuildConfig {
    /// Start building a new `BuildConfig`.
    pub fn builder() -> BuildConfigBuilder<NoName> {
        BuildConfigBuilder::new()
    }

    pub fn project_name(&self) -> &str {
        &self.project_name
    }
    pub fn target_path(&self) -> &Path {
        &self.target_path
    }
    pub const fn project_type(&self) -> ProjectType {
        self.project_type
    }
    pub const fn database(&self) -> Database {
        self.database
    }
    pub const fn auth(&self) -> Auth {
        self.auth
    }
    pub const fn execution_mode(&self) -> ExecutionMode {
        self.execution_mode
    }
    pub const fn python_version(&self) -> PythonVersion {
        self.python_version
    }
    pub const fn docker(&self) -> bool {
        self.docker
    }
    pub const fn tests(&self) -> bool {
        self.tests
    }
    pub const fn docs(&self) -> bool {
        self.docs
    }
    pub const fn monitoring(&self) -> bool {
        self.monitoring
    }
    pub const fn celery(&self) -> bool {
        self.celery
    }
    pub const fn advanced(&self) -> bool {
        self.advanced
    }
    pub const fn force(&self) -> bool {
        self.force
    }

    pub const fn is_async(&self) -> bool {
        self.execution_mode.is_async()
    }

    /// The directory the plan materializes into: `target_path/project_name`.
    pub fn destination(&self) -> PathBuf {
        self.target_path.join(&self.project_name)
    }

    /// Validate this configuration's internal consistency.
    ///
    /// Called automatically by the builder. Available for re-validation
    /// after deserialization or external construction.
    pub fn validate(&self) -> Result<(), DomainError> {
        validate_project_name(&self.project_name)?;

        if let Err(reason) =
            capabilities::validate_project_database(self.project_type, self.database)
        {
            return Err(DomainError::IncompatibleOptions {
                left: format!("type={}", self.project_type),
                right: format!("database={}", self.database),
                reason,
            });
        }

        if self.python_version.major != 3 {
            return Err(DomainError::InvalidConfiguration {
                field: "python-version",
                reason: format!(
                    "{} is not a CPython 3 line; FastAPI requires Python 3",
                    self.python_version
                ),
            });
        }

        Ok(())
    }
}

impl fmt::Display for BuildConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}, {}, db={}, auth={})",
            self.project_name, self.project_type, self.execution_mode, self.database, self.auth
        )
    }
}

/// Project-name rules: non-empty, no separators, no leading dot, safe chars,
/// not reserved.
fn validate_project_name(name: &str) -> Result<(), DomainError> {
    let invalid = |reason: String| DomainError::InvalidConfiguration {
        field: "name",
        reason,
    };

    if name.is_empty() {
        return Err(invalid("project name cannot be empty".into()));
    }
    if name.contains('/') || name.contains('\\') {
        return Err(invalid(format!(
            "'{name}' contains a path separator; use --path to choose a parent directory"
        )));
    }
    let first = name.chars().next().expect("checked non-empty");
    if !first.is_ascii_alphanumeric() {
        return Err(invalid(format!(
            "'{name}' must start with a letter or digit"
        )));
    }
    if let Some(bad) = name
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || *c == '-' || *c == '_'))
    {
        return Err(invalid(format!(
            "'{name}' contains '{bad}'; only letters, digits, '-' and '_' are allowed"
        )));
    }
    if RESERVED_NAMES.contains(&name.to_ascii_lowercase().as_str()) {
        return Err(invalid(format!(
            "'{name}' is reserved; it would collide with generated content"
        )));
    }
    Ok(())
}

// ── Typestate markers ────────────────────────────────────────────────────────

/// Marker: project name has not yet been set.
pub struct NoName;
/// Marker: project name has been set; other fields may now be configured.
pub struct HasName;

// ── Builder ──────────────────────────────────────────────────────────────────

/// Typestate builder for [`BuildConfig`].
///
/// Compile-time guarantee: every other option is only reachable after
/// `project_name` has been set. Defaults mirror the CLI surface: api project,
/// sqlite, no auth, async, docker/tests/docs on, everything else off.
pub struct BuildConfigBuilder<S> {
    project_name: Option<String>,
    target_path: PathBuf,
    project_type: ProjectType,
    database: Database,
    auth: Auth,
    execution_mode: ExecutionMode,
    python_version: PythonVersion,
    docker: bool,
    tests: bool,
    docs: bool,
    monitoring: bool,
    celery: bool,
    advanced: bool,
    force: bool,
    _marker: PhantomData<S>,
}

impl BuildConfigBuilder<NoName> {
    pub fn new() -> Self {
        Self {
            project_name: None,
            target_path: PathBuf::from("."),
            project_type: ProjectType::Api,
            database: Database::Sqlite,
            auth: Auth::None,
            execution_mode: ExecutionMode::Async,
            python_version: PythonVersion::default(),
            docker: true,
            tests: true,
            docs: true,
            monitoring: false,
            celery: false,
            advanced: false,
            force: false,
            _marker: PhantomData,
        }
    }

    /// Set the project name. This transitions the builder to `HasName`.
    pub fn project_name(self, name: impl Into<String>) -> BuildConfigBuilder<HasName> {
        BuildConfigBuilder {
            project_name: Some(name.into()),
            target_path: self.target_path,
            project_type: self.project_type,
            database: self.database,
            auth: self.auth,
            execution_mode: self.execution_mode,
            python_version: self.python_version,
            docker: self.docker,
            tests: self.tests,
            docs: self.docs,
            monitoring: self.monitoring,
            celery: self.celery,
            advanced: self.advanced,
            force: self.force,
            _marker: PhantomData,
        }
    }
}

impl Default for BuildConfigBuilder<NoName> {
    fn default() -> Self {
        Self::new()
    }
}

impl BuildConfigBuilder<HasName> {
    pub fn target_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.target_path = path.into();
        self
    }

    pub fn project_type(mut self, project_type: ProjectType) -> Self {
        self.project_type = project_type;
        self
    }

    pub fn database(mut self, database: Database) -> Self {
        self.database = database;
        self
    }

    pub fn auth(mut self, auth: Auth) -> Self {
        self.auth = auth;
        self
    }

    pub fn execution_mode(mut self, mode: ExecutionMode) -> Self {
        self.execution_mode = mode;
        self
    }

    pub fn python_version(mut self, version: PythonVersion) -> Self {
        self.python_version = version;
        self
    }

    pub fn docker(mut self, on: bool) -> Self {
        self.docker = on;
        self
    }

    pub fn tests(mut self, on: bool) -> Self {
        self.tests = on;
        self
    }

    pub fn docs(mut self, on: bool) -> Self {
        self.docs = on;
        self
    }

    pub fn monitoring(mut self, on: bool) -> Self {
        self.monitoring = on;
        self
    }

    pub fn celery(mut self, on: bool) -> Self {
        self.celery = on;
        self
    }

    pub fn advanced(mut self, on: bool) -> Self {
        self.advanced = on;
        self
    }

    pub fn force(mut self, on: bool) -> Self {
        self.force = on;
        self
    }

    /// Build and validate the `BuildConfig`.
    pub fn build(self) -> Result<BuildConfig, DomainError> {
        let config = BuildConfig {
            project_name: self.project_name.expect("typestate guarantees name is set"),
            target_path: self.target_path,
            project_type: self.project_type,
            database: self.database,
            auth: self.auth,
            execution_mode: self.execution_mode,
            python_version: self.python_version,
            docker: self.docker,
            tests: self.tests,
            docs: self.docs,
            monitoring: self.monitoring,
            celery: self.celery,
            advanced: self.advanced,
            force: self.force,
        };

        config.validate()?;
        Ok(config)
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────
