//! `startfast config` — read and write configuration values.

use crate::{
    cli::ConfigCommands,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
pub fn execute(cmd: ConfigCommands, config: AppConfig, output: OutputManager) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            let value = get_value(&config, &key)?;
            output.print(&format!("{key} = {value}"))?;
        }

        ConfigCommands::Set { key, value } => {
            let mut config = config;
            set_value(&mut config, &key, &value)?;
            let path = AppConfig::config_path();
            config.save_to(&path)?;
            output.print(&format!("{key} = {value} (written to {})", path.display()))?;
        }

        ConfigCommands::List => {
            output.header("Current Configuration:")?;
            let serialised =
                toml::to_string_pretty(&config).map_err(|e| CliError::ConfigError {
                    message: format!("failed to serialise config: {e}"),
                    source: Some(Box::new(e)),
                })?;
            output.print(&serialised)?;
        }

        ConfigCommands::Path => {
            output.print(&AppConfig::config_path().display().to_string())?;
        }
    }

    Ok(())
}

// ── helpers ──────────────────────────────────────────────────────────────────

fn get_value(config: &AppConfig, key: &str) -> CliResult<String> {
    let value = match key {
        "defaults.type" => config.defaults.project_type.clone(),
        "defaults.database" => config.defaults.database.clone(),
        "defaults.auth" => config.defaults.auth.clone(),
        "defaults.python-version" => config.defaults.python_version.clone(),
        "output.no_color" => Some(config.output.no_color.to_string()),
        "templates.override_dir" => config
            .templates
            .override_dir
            .as_ref()
            .map(|p| p.display().to_string()),
        _ => {
            return Err(unknown_key(key));
        }
    };
    Ok(value.unwrap_or_else(|| "(unset)".into()))
}

fn set_value(config: &mut AppConfig, key: &str, value: &str) -> CliResult<()> {
    match key {
        "defaults.type" => config.defaults.project_type = Some(value.into()),
        "defaults.database" => config.defaults.database = Some(value.into()),
        "defaults.auth" => config.defaults.auth = Some(value.into()),
        "defaults.python-version" => config.defaults.python_version = Some(value.into()),
        "output.no_color" => {
            config.output.no_color = value.parse().map_err(|_| CliError::ConfigError {
                message: format!("'{value}' is not a boolean"),
                source: None,
            })?;
        }
        "templates.override_dir" => config.templates.override_dir = Some(value.into()),
        _ => return Err(unknown_key(key)),
    }
    Ok(())
}

fn unknown_key(key: &str) -> CliError {
    CliError::ConfigError {
        message: format!("unknown config key: '{key}'"),
        source: None,
    }
}

// ── tests ────────────────────────────────────────────────────────────────────
