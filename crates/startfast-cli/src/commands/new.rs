//! Implementation of the `startfast new` command.
//!
//! Responsibility: translate CLI arguments into a `BuildConfig`, call the
//! core generator service, and display results. No feature-matrix logic
//! lives here.

use tracing::{debug, info, instrument};

use startfast_adapters::{CatalogRenderer, LocalWorkspace};
use startfast_core::{application::GeneratorService, domain::BuildConfig};

use crate::{
    cli::{NewArgs, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `startfast new` command.
///
/// Dispatch sequence:
/// 1. Build and validate the configuration (flags + config-file defaults)
/// 2. Show the configuration and confirm, unless `--yes` or `--quiet`
/// 3. Early-exit with a plan preview if `--dry-run`
/// 4. Generate via `GeneratorService`
/// 5. Print next-steps guidance
#[instrument(skip_all, fields(project = %args.project.name))]
pub fn execute(
    args: NewArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let build = super::build_config(&args.project, &config, args.force)?;

    debug!(
        project_type = %build.project_type(),
        database = %build.database(),
        auth = %build.auth(),
        mode = %build.execution_mode(),
        "configuration resolved"
    );

    if !global.quiet && !args.yes && !args.dry_run {
        show_configuration(&build, &output)?;
        if !confirm()? {
            return Err(CliError::Cancelled);
        }
    }

    if args.force {
        output.warning("--force: existing files under planned paths will be overwritten")?;
    }

    let service = make_service(&config)?;

    if args.dry_run {
        let plan = service.plan(&build).map_err(CliError::Core)?;
        output.info(&format!(
            "Dry run: would create {} entries under {}",
            plan.len(),
            plan.destination().display(),
        ))?;
        for entry in plan.entries() {
            output.print(&format!("  {}", entry.path))?;
        }
        return Ok(());
    }

    output.header(&format!("Creating '{}'...", build.project_name()))?;
    info!(destination = %build.destination().display(), "generation started");

    let plan = service.generate(&build).map_err(CliError::Core)?;

    info!(files = plan.files().count(), "generation completed");
    output.success(&format!(
        "Project '{}' created ({} files)",
        build.project_name(),
        plan.files().count(),
    ))?;

    if !global.quiet {
        output.print("")?;
        output.print("Next steps:")?;
        output.print(&format!("  cd {}", build.project_name()))?;
        output.print("  python -m venv .venv && . .venv/bin/activate")?;
        output.print("  pip install -r requirements.txt")?;
        output.print("  uvicorn app.main:app --reload")?;
    }

    Ok(())
}

/// Assemble the generator service with production adapters.
///
/// A configured override directory takes precedence over the standard
/// discovery locations.
fn make_service(config: &AppConfig) -> CliResult<GeneratorService> {
    let renderer = match &config.templates.override_dir {
        Some(dir) => CatalogRenderer::with_overrides(
            startfast_adapters::overrides::load_from(dir).map_err(CliError::Core)?,
        ),
        None => CatalogRenderer::with_discovered_overrides().map_err(CliError::Core)?,
    };
    Ok(GeneratorService::new(
        Box::new(renderer),
        Box::new(LocalWorkspace::new()),
    ))
}

// ── UI helpers ───────────────────────────────────────────────────────────────

fn show_configuration(build: &BuildConfig, out: &OutputManager) -> CliResult<()> {
    out.header("Configuration")?;
    out.print(&format!("  Project:   {}", build.project_name()))?;
    out.print(&format!("  Type:      {}", build.project_type()))?;
    out.print(&format!("  Database:  {}", build.database()))?;
    out.print(&format!("  Auth:      {}", build.auth()))?;
    out.print(&format!("  Mode:      {}", build.execution_mode()))?;
    out.print(&format!("  Python:    {}", build.python_version()))?;
    out.print(&format!(
        "  Toggles:   docker={} tests={} docs={} monitoring={} celery={} advanced={}",
        build.docker(),
        build.tests(),
        build.docs(),
        build.monitoring(),
        build.celery(),
        build.advanced(),
    ))?;
    out.print(&format!(
        "  Location:  {}",
        build.destination().display()
    ))?;
    out.print("")?;
    Ok(())
}

fn confirm() -> CliResult<bool> {
    use std::io::{self, Write};

    print!("Continue? [Y/n] ");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    let input = input.trim().to_ascii_lowercase();
    Ok(input.is_empty() || input == "y" || input == "yes")
}
