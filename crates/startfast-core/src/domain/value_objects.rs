//! Domain value objects: ProjectType, Database, Auth, ExecutionMode, PythonVersion.
//!
//! # Design
//!
//! These are pure value types — `Copy` (except `PythonVersion`'s parse),
//! equality-by-value, no identity. They hold NO capability logic. All
//! driver/requirement/compatibility knowledge lives in `capabilities.rs`.
//! This file's only job is to define the types, their string
//! representations, and their `FromStr` parsers.
//!
//! # Adding New Variants
//!
//! 1. Add the enum variant here
//! 2. Add the `as_str` arm and the `FromStr` arm here
//! 3. Add a capability entry in `capabilities.rs`
//! 4. Done — nothing else changes

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── ProjectType ──────────────────────────────────────────────────────────────

/// The service archetype to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectType {
    Api,
    Crud,
    MlApi,
    Microservice,
}

impl ProjectType {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Api => "api",
            Self::Crud => "crud",
            Self::MlApi => "ml-api",
            Self::Microservice => "microservice",
        }
    }

    /// Whether this archetype is meaningless without a persistence backend.
    ///
    /// Delegates to `capabilities::project_type_def`. Do not add match arms
    /// here — register capabilities in `capabilities.rs` instead.
    pub fn requires_persistence(self) -> bool {
        crate::domain::capabilities::project_type_def(self).requires_persistence
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProjectType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "api" | "rest" => Ok(Self::Api),
            "crud" => Ok(Self::Crud),
            "ml-api" | "ml" | "mlapi" => Ok(Self::MlApi),
            "microservice" | "micro" => Ok(Self::Microservice),
            other => Err(DomainError::InvalidConfiguration {
                field: "type",
                reason: format!("unknown project type: {other}"),
            }),
        }
    }
}

// ── Database ─────────────────────────────────────────────────────────────────

/// The persistence backend wired into the generated service.
///
/// `None` means the service ships without any database scaffolding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Database {
    Sqlite,
    Postgresql,
    Mysql,
    Mongodb,
    Redis,
    None,
}

impl Database {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Sqlite => "sqlite",
            Self::Postgresql => "postgresql",
            Self::Mysql => "mysql",
            Self::Mongodb => "mongodb",
            Self::Redis => "redis",
            Self::None => "none",
        }
    }

    /// Whether any database scaffolding is generated at all.
    pub const fn is_some(self) -> bool {
        !matches!(self, Self::None)
    }

    /// Whether this backend goes through SQLAlchemy sessions.
    ///
    /// Delegates to `capabilities::database_def`.
    pub fn is_sql(self) -> bool {
        crate::domain::capabilities::database_def(self)
            .is_some_and(|def| def.family == crate::domain::capabilities::EngineFamily::Sql)
    }
}

impl fmt::Display for Database {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Database {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sqlite" => Ok(Self::Sqlite),
            "postgresql" | "postgres" | "pg" => Ok(Self::Postgresql),
            "mysql" => Ok(Self::Mysql),
            "mongodb" | "mongo" => Ok(Self::Mongodb),
            "redis" => Ok(Self::Redis),
            "none" => Ok(Self::None),
            other => Err(DomainError::InvalidConfiguration {
                field: "database",
                reason: format!("unknown database: {other}"),
            }),
        }
    }
}

// ── Auth ─────────────────────────────────────────────────────────────────────

/// Authentication style for the generated API.
///
/// `None` leaves the service without any protected-route scaffolding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Auth {
    None,
    Jwt,
    Oauth2,
    ApiKey,
}

impl Auth {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Jwt => "jwt",
            Self::Oauth2 => "oauth2",
            Self::ApiKey => "api-key",
        }
    }

    pub const fn is_some(self) -> bool {
        !matches!(self, Self::None)
    }

    /// Whether this auth style persists user accounts.
    ///
    /// Delegates to `capabilities::auth_def`.
    pub fn needs_user_model(self) -> bool {
        crate::domain::capabilities::auth_def(self).is_some_and(|def| def.needs_user_model)
    }
}

impl fmt::Display for Auth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Auth {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "none" => Ok(Self::None),
            "jwt" => Ok(Self::Jwt),
            "oauth2" | "oauth" => Ok(Self::Oauth2),
            "api-key" | "apikey" => Ok(Self::ApiKey),
            other => Err(DomainError::InvalidConfiguration {
                field: "auth",
                reason: format!("unknown auth style: {other}"),
            }),
        }
    }
}

// ── ExecutionMode ────────────────────────────────────────────────────────────

/// Whether the generated service uses async or sync endpoints and sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionMode {
    Async,
    Sync,
}

impl ExecutionMode {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Async => "async",
            Self::Sync => "sync",
        }
    }

    pub const fn is_async(self) -> bool {
        matches!(self, Self::Async)
    }
}

impl fmt::Display for ExecutionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExecutionMode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "async" => Ok(Self::Async),
            "sync" => Ok(Self::Sync),
            other => Err(DomainError::InvalidConfiguration {
                field: "mode",
                reason: format!("unknown execution mode: {other}"),
            }),
        }
    }
}

// ── PythonVersion ────────────────────────────────────────────────────────────

/// A CPython version in `major.minor[.patch]` form.
///
/// Stored parsed so the planner can derive docker tags and tool-config
/// fragments without re-parsing strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PythonVersion {
    pub major: u8,
    pub minor: u8,
    pub patch: Option<u8>,
}

impl PythonVersion {
    pub const fn new(major: u8, minor: u8) -> Self {
        Self {
            major,
            minor,
            patch: None,
        }
    }

    /// The `major.minor` tag used for docker base images and tool configs.
    pub fn tag(&self) -> String {
        format!("{}.{}", self.major, self.minor)
    }
}

impl Default for PythonVersion {
    fn default() -> Self {
        Self::new(3, 11)
    }
}

impl fmt::Display for PythonVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.patch {
            Some(patch) => write!(f, "{}.{}.{}", self.major, self.minor, patch),
            None => write!(f, "{}.{}", self.major, self.minor),
        }
    }
}

impl FromStr for PythonVersion {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || DomainError::InvalidConfiguration {
            field: "python-version",
            reason: format!("'{s}' does not parse as major.minor[.patch]"),
        };

        let mut parts = s.split('.');
        let major = parts
            .next()
            .and_then(|p| p.parse::<u8>().ok())
            .ok_or_else(|| invalid())?;
        let minor = parts
            .next()
            .and_then(|p| p.parse::<u8>().ok())
            .ok_or_else(|| invalid())?;
        let patch = match parts.next() {
            Some(p) => Some(p.parse::<u8>().map_err(|_| invalid())?),
            None => None,
        };
        if parts.next().is_some() {
            return Err(invalid());
        }

        Ok(Self {
            major,
            minor,
            patch,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_type_from_str_accepts_aliases() {
        assert_eq!("ml".parse::<ProjectType>().unwrap(), ProjectType::MlApi);
        assert_eq!(
            "micro".parse::<ProjectType>().unwrap(),
            ProjectType::Microservice
        );
        assert_eq!("rest".parse::<ProjectType>().unwrap(), ProjectType::Api);
    }

    #[test]
    fn project_type_unknown_errors() {
        assert!("graphql".parse::<ProjectType>().is_err());
        assert!("".parse::<ProjectType>().is_err());
    }

    #[test]
    fn database_from_str_accepts_aliases() {
        assert_eq!("pg".parse::<Database>().unwrap(), Database::Postgresql);
        assert_eq!("mongo".parse::<Database>().unwrap(), Database::Mongodb);
    }

    #[test]
    fn database_is_sql_matches_family() {
        assert!(Database::Sqlite.is_sql());
        assert!(Database::Postgresql.is_sql());
        assert!(Database::Mysql.is_sql());
        assert!(!Database::Mongodb.is_sql());
        assert!(!Database::Redis.is_sql());
        assert!(!Database::None.is_sql());
    }

    #[test]
    fn auth_display_is_kebab() {
        assert_eq!(Auth::ApiKey.to_string(), "api-key");
        assert_eq!(Auth::Jwt.to_string(), "jwt");
    }

    #[test]
    fn auth_none_is_not_some() {
        assert!(!Auth::None.is_some());
        assert!(Auth::Oauth2.is_some());
    }

    #[test]
    fn execution_mode_parses() {
        assert_eq!(
            "async".parse::<ExecutionMode>().unwrap(),
            ExecutionMode::Async
        );
        assert!("threaded".parse::<ExecutionMode>().is_err());
    }

    #[test]
    fn python_version_parses_two_and_three_parts() {
        let v: PythonVersion = "3.11".parse().unwrap();
        assert_eq!((v.major, v.minor, v.patch), (3, 11, None));

        let v: PythonVersion = "3.12.4".parse().unwrap();
        assert_eq!((v.major, v.minor, v.patch), (3, 12, Some(4)));
    }

    #[test]
    fn python_version_rejects_garbage() {
        assert!("3".parse::<PythonVersion>().is_err());
        assert!("3.".parse::<PythonVersion>().is_err());
        assert!("3.11.2.1".parse::<PythonVersion>().is_err());
        assert!("three.eleven".parse::<PythonVersion>().is_err());
        assert!("".parse::<PythonVersion>().is_err());
    }

    #[test]
    fn python_version_tag_drops_patch() {
        let v: PythonVersion = "3.12.4".parse().unwrap();
        assert_eq!(v.tag(), "3.12");
        assert_eq!(v.to_string(), "3.12.4");
    }
}
