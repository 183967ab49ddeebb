//! Command handlers.
//!
//! Each submodule implements one subcommand. The shared translation from
//! CLI arguments to a core [`BuildConfig`] lives here so `new` and `plan`
//! can never drift apart.

pub mod completions;
pub mod config;
pub mod new;
pub mod plan;

use std::str::FromStr;

use startfast_core::domain::{
    Auth as CoreAuth, BuildConfig, Database as CoreDatabase, ExecutionMode,
    ProjectType as CoreProjectType, PythonVersion,
};

use crate::{
    cli::{Auth, Database, ProjectArgs, ProjectType},
    config::AppConfig,
    error::{CliError, CliResult},
};

/// Translate CLI arguments (plus config-file defaults) into a validated
/// core configuration.
///
/// Precedence per option: explicit flag → config-file default → built-in
/// default.
pub(crate) fn build_config(
    args: &ProjectArgs,
    config: &AppConfig,
    force: bool,
) -> CliResult<BuildConfig> {
    let mut builder = BuildConfig::builder()
        .project_name(&args.name)
        .target_path(&args.path)
        .force(force);

    if let Some(ptype) = resolve(args.project_type.map(convert_project_type), config.defaults.project_type.as_deref())? {
        builder = builder.project_type(ptype);
    }
    if let Some(db) = resolve(args.database.map(convert_database), config.defaults.database.as_deref())? {
        builder = builder.database(db);
    }
    if let Some(auth) = resolve(args.auth.map(convert_auth), config.defaults.auth.as_deref())? {
        builder = builder.auth(auth);
    }

    if args.sync {
        builder = builder.execution_mode(ExecutionMode::Sync);
    }

    let version_str = args
        .python_version
        .as_deref()
        .or(config.defaults.python_version.as_deref());
    if let Some(raw) = version_str {
        let version = PythonVersion::from_str(raw).map_err(startfast_core::error::StartfastError::from)?;
        builder = builder.python_version(version);
    }

    builder = builder
        .docker(!args.no_docker)
        .tests(!args.no_tests)
        .docs(!args.no_docs)
        .monitoring(args.monitoring)
        .celery(args.celery)
        .advanced(args.advanced);

    builder.build().map_err(|e| CliError::Core(e.into()))
}

/// Resolve an option: explicit CLI value wins, otherwise parse the
/// config-file default (reporting a config error if it is garbage).
fn resolve<T: FromStr<Err = startfast_core::domain::DomainError>>(
    explicit: Option<T>,
    configured: Option<&str>,
) -> CliResult<Option<T>> {
    if let Some(value) = explicit {
        return Ok(Some(value));
    }
    match configured {
        Some(raw) => raw
            .parse::<T>()
            .map(Some)
            .map_err(|e| CliError::ConfigError {
                message: format!("invalid default in config file: {e}"),
                source: None,
            }),
        None => Ok(None),
    }
}

// ── Type conversions CLI → core ──────────────────────────────────────────────

fn convert_project_type(ptype: ProjectType) -> CoreProjectType {
    match ptype {
        ProjectType::Api => CoreProjectType::Api,
        ProjectType::Crud => CoreProjectType::Crud,
        ProjectType::MlApi => CoreProjectType::MlApi,
        ProjectType::Microservice => CoreProjectType::Microservice,
    }
}

fn convert_database(db: Database) -> CoreDatabase {
    match db {
        Database::Sqlite => CoreDatabase::Sqlite,
        Database::Postgresql => CoreDatabase::Postgresql,
        Database::Mysql => CoreDatabase::Mysql,
        Database::Mongodb => CoreDatabase::Mongodb,
        Database::Redis => CoreDatabase::Redis,
        Database::None => CoreDatabase::None,
    }
}

fn convert_auth(auth: Auth) -> CoreAuth {
    match auth {
        Auth::None => CoreAuth::None,
        Auth::Jwt => CoreAuth::Jwt,
        Auth::Oauth2 => CoreAuth::Oauth2,
        Auth::ApiKey => CoreAuth::ApiKey,
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn project_args(name: &str) -> ProjectArgs {
        ProjectArgs {
            name: name.into(),
            path: PathBuf::from("."),
            project_type: None,
            database: None,
            auth: None,
            sync: false,
            python_version: None,
            advanced: false,
            no_docker: false,
            no_tests: false,
            no_docs: false,
            monitoring: false,
            celery: false,
        }
    }

    #[test]
    fn defaults_flow_through() {
        let config = build_config(&project_args("svc"), &AppConfig::default(), false).unwrap();
        assert_eq!(config.project_type(), CoreProjectType::Api);
        assert_eq!(config.database(), CoreDatabase::Sqlite);
        assert!(config.is_async());
        assert!(config.docker());
    }

    #[test]
    fn explicit_flags_override_config_file() {
        let mut app = AppConfig::default();
        app.defaults.database = Some("mysql".into());

        let mut args = project_args("svc");
        args.database = Some(Database::Redis);

        let config = build_config(&args, &app, false).unwrap();
        assert_eq!(config.database(), CoreDatabase::Redis);
    }

    #[test]
    fn config_file_defaults_apply_when_flag_absent() {
        let mut app = AppConfig::default();
        app.defaults.database = Some("postgres".into());
        app.defaults.auth = Some("jwt".into());

        let config = build_config(&project_args("svc"), &app, false).unwrap();
        assert_eq!(config.database(), CoreDatabase::Postgresql);
        assert_eq!(config.auth(), CoreAuth::Jwt);
    }

    #[test]
    fn garbage_config_default_is_a_config_error() {
        let mut app = AppConfig::default();
        app.defaults.database = Some("oracle".into());

        assert!(matches!(
            build_config(&project_args("svc"), &app, false),
            Err(CliError::ConfigError { .. })
        ));
    }

    #[test]
    fn sync_flag_switches_mode() {
        let mut args = project_args("svc");
        args.sync = true;
        let config = build_config(&args, &AppConfig::default(), false).unwrap();
        assert!(!config.is_async());
    }

    #[test]
    fn negative_toggles_subtract() {
        let mut args = project_args("svc");
        args.no_docker = true;
        args.no_docs = true;
        let config = build_config(&args, &AppConfig::default(), false).unwrap();
        assert!(!config.docker());
        assert!(!config.docs());
        assert!(config.tests());
    }

    #[test]
    fn bad_python_version_is_rejected() {
        let mut args = project_args("svc");
        args.python_version = Some("three".into());
        assert!(build_config(&args, &AppConfig::default(), false).is_err());
    }

    #[test]
    fn incompatible_combo_propagates_as_core_error() {
        let mut args = project_args("svc");
        args.project_type = Some(ProjectType::Crud);
        args.database = Some(Database::None);
        assert!(matches!(
            build_config(&args, &AppConfig::default(), false),
            Err(CliError::Core(_))
        ));
    }
}
