//! Implementation of the `startfast plan` command.
//!
//! Composes the generation plan and prints it without writing anything —
//! the inspectable/diffable surface of the planner.

use serde::Serialize;
use tracing::instrument;

use startfast_adapters::{CatalogRenderer, LocalWorkspace};
use startfast_core::{application::GeneratorService, domain::EntryKind};

use crate::{
    cli::{PlanArgs, PlanFormat, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Serializable row for `--format json`.
#[derive(Debug, Serialize)]
struct PlanRow<'a> {
    feature: &'a str,
    path: String,
    kind: &'static str,
    template: Option<&'a str>,
}

/// Execute the `startfast plan` command.
#[instrument(skip_all, fields(project = %args.project.name))]
pub fn execute(
    args: PlanArgs,
    _global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let build = super::build_config(&args.project, &config, false)?;

    let service = GeneratorService::new(
        Box::new(CatalogRenderer::new()),
        Box::new(LocalWorkspace::new()),
    );
    let plan = service.plan(&build).map_err(CliError::Core)?;

    match args.format {
        PlanFormat::Table => {
            output.header(&format!(
                "Plan for '{}' → {} ({} entries)",
                build.project_name(),
                plan.destination().display(),
                plan.len(),
            ))?;
            for entry in plan.entries() {
                let marker = match entry.kind {
                    EntryKind::Directory => "dir ",
                    EntryKind::File => "file",
                    EntryKind::Script => "exec",
                };
                output.print(&format!("  {marker}  {}", entry.path))?;
            }
        }

        PlanFormat::List => {
            for entry in plan.entries() {
                // Bypasses the OutputManager: list output must stay parseable
                // even when piped.
                println!("{}", entry.path);
            }
        }

        PlanFormat::Json => {
            let rows: Vec<PlanRow<'_>> = plan
                .entries()
                .iter()
                .map(|entry| PlanRow {
                    feature: entry.feature.as_str(),
                    path: entry.path.to_string(),
                    kind: match entry.kind {
                        EntryKind::Directory => "directory",
                        EntryKind::File => "file",
                        EntryKind::Script => "script",
                    },
                    template: entry.template.map(|t| t.as_str()),
                })
                .collect();
            let json =
                serde_json::to_string_pretty(&rows).map_err(|e| CliError::SerializeFailed {
                    message: e.to_string(),
                })?;
            println!("{json}");
        }
    }

    Ok(())
}
