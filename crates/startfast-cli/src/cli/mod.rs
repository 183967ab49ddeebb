//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums. No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "startfast",
    bin_name = "startfast",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} Deterministic FastAPI project generator",
    long_about = "startfast materializes a production-shaped FastAPI service \
                  skeleton from a handful of declarative options.",
    after_help = "EXAMPLES:\n\
        \x20 startfast new simple-api\n\
        \x20 startfast new shop --type crud --database postgresql --auth jwt\n\
        \x20 startfast plan worker-svc --type microservice --celery --format json\n\
        \x20 startfast completions bash > /usr/share/bash-completion/completions/startfast",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ──────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate a new project.
    #[command(
        visible_alias = "n",
        about = "Generate a new project",
        after_help = "EXAMPLES:\n\
            \x20 startfast new simple-api\n\
            \x20 startfast new shop   --type crud --database postgresql --auth jwt\n\
            \x20 startfast new legacy --sync --no-docker --python-version 3.10"
    )]
    New(NewArgs),

    /// Show the generation plan without writing anything.
    #[command(
        visible_alias = "p",
        about = "Inspect the generation plan",
        after_help = "EXAMPLES:\n\
            \x20 startfast plan simple-api\n\
            \x20 startfast plan shop --type crud --database mysql --format json"
    )]
    Plan(PlanArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 startfast completions bash > ~/.local/share/bash-completion/completions/startfast\n\
            \x20 startfast completions zsh  > ~/.zfunc/_startfast\n\
            \x20 startfast completions fish > ~/.config/fish/completions/startfast.fish"
    )]
    Completions(CompletionsArgs),

    /// Manage the startfast configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 startfast config get defaults.database\n\
            \x20 startfast config set defaults.auth jwt\n\
            \x20 startfast config list"
    )]
    Config(ConfigCommands),
}

// ── Shared project options ───────────────────────────────────────────────────

/// Generation options shared by `new` and `plan`.
#[derive(Debug, Args)]
pub struct ProjectArgs {
    /// Project name. The project is created at `<path>/<name>`.
    #[arg(value_name = "NAME", help = "Project name")]
    pub name: String,

    /// Parent directory for the generated project.
    #[arg(
        short = 'p',
        long = "path",
        value_name = "DIR",
        default_value = ".",
        help = "Parent directory for the project"
    )]
    pub path: PathBuf,

    /// Service archetype.
    #[arg(
        short = 't',
        long = "type",
        value_name = "TYPE",
        value_enum,
        help = "Project type"
    )]
    pub project_type: Option<ProjectType>,

    /// Persistence backend.
    #[arg(
        short = 'd',
        long = "database",
        value_name = "DB",
        value_enum,
        help = "Database backend"
    )]
    pub database: Option<Database>,

    /// Authentication style.
    #[arg(
        short = 'a',
        long = "auth",
        value_name = "AUTH",
        value_enum,
        help = "Authentication style"
    )]
    pub auth: Option<Auth>,

    /// Generate synchronous endpoints and sessions instead of async.
    #[arg(long = "sync", help = "Generate the synchronous variant")]
    pub sync: bool,

    /// Target Python version (major.minor[.patch]).
    #[arg(
        long = "python-version",
        value_name = "VERSION",
        help = "Target Python version"
    )]
    pub python_version: Option<String>,

    /// Include extra configuration/observability scaffolding.
    #[arg(long = "advanced", help = "Include advanced scaffolding")]
    pub advanced: bool,

    /// Skip the Docker subtree.
    #[arg(long = "no-docker", help = "Skip Dockerfile and compose files")]
    pub no_docker: bool,

    /// Skip the test scaffold.
    #[arg(long = "no-tests", help = "Skip the test scaffold")]
    pub no_tests: bool,

    /// Skip README and docs.
    #[arg(long = "no-docs", help = "Skip README and docs")]
    pub no_docs: bool,

    /// Include Prometheus monitoring wiring.
    #[arg(long = "monitoring", help = "Include Prometheus monitoring")]
    pub monitoring: bool,

    /// Include a Celery background worker.
    #[arg(long = "celery", help = "Include a Celery worker")]
    pub celery: bool,
}

// ── new ──────────────────────────────────────────────────────────────────────

/// Arguments for `startfast new`.
#[derive(Debug, Args)]
pub struct NewArgs {
    #[command(flatten)]
    pub project: ProjectArgs,

    /// Skip the confirmation prompt.
    #[arg(
        short = 'y',
        long = "yes",
        help = "Skip confirmation and generate immediately"
    )]
    pub yes: bool,

    /// Overwrite a non-empty destination (destructive).
    #[arg(long = "force", help = "Overwrite an existing non-empty destination")]
    pub force: bool,

    /// Preview what would be created without writing any files.
    #[arg(long = "dry-run", help = "Show the plan without creating anything")]
    pub dry_run: bool,
}

// ── plan ─────────────────────────────────────────────────────────────────────

/// Arguments for `startfast plan`.
#[derive(Debug, Args)]
pub struct PlanArgs {
    #[command(flatten)]
    pub project: ProjectArgs,

    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: PlanFormat,
}

/// Output format for the `plan` command.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum PlanFormat {
    /// Human-readable table.
    Table,
    /// One path per line.
    List,
    /// JSON array.
    Json,
}

// ── completions ──────────────────────────────────────────────────────────────

/// Arguments for `startfast completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ───────────────────────────────────────────────────────

/// Subcommands for `startfast config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `defaults.database`.
        key: String,
    },
    /// Set a configuration key to a value.
    Set {
        /// Dotted key path.
        key: String,
        /// New value.
        value: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── value enums ──────────────────────────────────────────────────────────────

/// Supported service archetypes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "kebab-case")]
pub enum ProjectType {
    Api,
    Crud,
    /// Also accepted as `ml`.
    #[value(alias = "ml")]
    MlApi,
    Microservice,
}

impl std::fmt::Display for ProjectType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Api => write!(f, "api"),
            Self::Crud => write!(f, "crud"),
            Self::MlApi => write!(f, "ml-api"),
            Self::Microservice => write!(f, "microservice"),
        }
    }
}

/// Supported persistence backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum Database {
    Sqlite,
    /// Also accepted as `postgres`.
    #[value(alias = "postgres")]
    Postgresql,
    Mysql,
    #[value(alias = "mongo")]
    Mongodb,
    Redis,
    None,
}

impl std::fmt::Display for Database {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite => write!(f, "sqlite"),
            Self::Postgresql => write!(f, "postgresql"),
            Self::Mysql => write!(f, "mysql"),
            Self::Mongodb => write!(f, "mongodb"),
            Self::Redis => write!(f, "redis"),
            Self::None => write!(f, "none"),
        }
    }
}

/// Supported authentication styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "kebab-case")]
pub enum Auth {
    None,
    Jwt,
    Oauth2,
    ApiKey,
}

impl std::fmt::Display for Auth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::None => write!(f, "none"),
            Self::Jwt => write!(f, "jwt"),
            Self::Oauth2 => write!(f, "oauth2"),
            Self::ApiKey => write!(f, "api-key"),
        }
    }
}

// ── tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn cli_structure_is_valid() {
        // clap's internal consistency check — catches conflicts, missing values, etc.
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_new_command() {
        let cli = Cli::parse_from([
            "startfast",
            "new",
            "shop",
            "--type",
            "crud",
            "--database",
            "postgresql",
            "--auth",
            "jwt",
        ]);
        assert!(matches!(cli.command, Commands::New(_)));
    }

    #[test]
    fn database_aliases_are_accepted() {
        let cli = Cli::parse_from(["startfast", "plan", "svc", "-d", "postgres"]);
        if let Commands::Plan(args) = cli.command {
            assert_eq!(args.project.database, Some(Database::Postgresql));
        } else {
            panic!("expected Plan command");
        }

        let cli = Cli::parse_from(["startfast", "plan", "svc", "-d", "mongo"]);
        if let Commands::Plan(args) = cli.command {
            assert_eq!(args.project.database, Some(Database::Mongodb));
        } else {
            panic!("expected Plan command");
        }
    }

    #[test]
    fn ml_alias_is_accepted() {
        let cli = Cli::parse_from(["startfast", "new", "model-svc", "-t", "ml"]);
        if let Commands::New(args) = cli.command {
            assert_eq!(args.project.project_type, Some(ProjectType::MlApi));
        } else {
            panic!("expected New command");
        }
    }

    #[test]
    fn toggles_default_off() {
        let cli = Cli::parse_from(["startfast", "new", "svc"]);
        if let Commands::New(args) = cli.command {
            assert!(!args.project.sync);
            assert!(!args.project.no_docker);
            assert!(!args.project.monitoring);
            assert!(!args.force);
            assert!(!args.dry_run);
        } else {
            panic!("expected New command");
        }
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["startfast", "--quiet", "--verbose", "plan", "x"]);
        assert!(result.is_err());
    }

    #[test]
    fn unknown_database_value_is_rejected() {
        let result = Cli::try_parse_from(["startfast", "new", "svc", "-d", "oracle"]);
        assert!(result.is_err());
    }
}
