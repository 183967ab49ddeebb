//! Template body override discovery.
//!
//! Users can replace individual builtin bodies by dropping
//! `<template-id>.tmpl` files into a templates directory, mirroring the
//! catalog's id layout (`app/main_async.tmpl`, `docker/compose.tmpl`, ...).
//!
//! # Resolution order
//!
//! Directories are probed in priority order, stopping at the first that
//! exists:
//!
//! 1. **`$STARTFAST_TEMPLATES_DIR`** — environment variable override.
//! 2. **`./templates`** — relative to the current working directory.
//!
//! If no directory is found, discovery succeeds with an empty map and the
//! builtin catalog is used unmodified. An individual file that cannot be
//! read is **skipped with a warning** rather than aborting discovery; a
//! directory that exists but cannot be walked is an error.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use startfast_core::{application::error::ApplicationError, error::StartfastResult};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

const OVERRIDE_EXTENSION: &str = "tmpl";

/// Load body overrides from the standard locations.
pub fn load_overrides() -> StartfastResult<HashMap<String, String>> {
    for candidate in candidate_paths() {
        debug!(path = %candidate.display(), "checking candidate templates path");
        if !candidate.is_dir() {
            continue;
        }
        let overrides = load_from(&candidate)?;
        info!(
            path = %candidate.display(),
            count = overrides.len(),
            "template overrides loaded"
        );
        return Ok(overrides);
    }

    debug!("no template override directory found; using builtin bodies");
    Ok(HashMap::new())
}

/// Load every `*.tmpl` under `root`, keyed by its id (relative path without
/// the extension, `/`-separated).
pub fn load_from(root: &Path) -> StartfastResult<HashMap<String, String>> {
    let mut overrides = HashMap::new();

    for entry in WalkDir::new(root).follow_links(false) {
        let entry = entry.map_err(|e| ApplicationError::RenderFailed {
            template: root.display().to_string(),
            reason: format!("failed to walk templates directory: {e}"),
        })?;

        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) != Some(OVERRIDE_EXTENSION) {
            continue;
        }

        let Some(id) = template_id_for(root, path) else {
            warn!(path = %path.display(), "override has no usable template id, skipping");
            continue;
        };

        match std::fs::read_to_string(path) {
            Ok(content) => {
                debug!(id, "override loaded");
                overrides.insert(id, content);
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "unreadable override, skipping");
            }
        }
    }

    Ok(overrides)
}

/// Build the ordered list of candidate directories to probe.
fn candidate_paths() -> Vec<PathBuf> {
    let mut paths = Vec::with_capacity(2);
    if let Ok(env_dir) = std::env::var("STARTFAST_TEMPLATES_DIR") {
        paths.push(PathBuf::from(env_dir));
    }
    paths.push(PathBuf::from("templates"));
    paths
}

/// Map an override file to its template id: the root-relative path, without
/// the `.tmpl` extension, with `/` separators on every platform.
fn template_id_for(root: &Path, path: &Path) -> Option<String> {
    let relative = path.strip_prefix(root).ok()?.with_extension("");
    let id = relative
        .components()
        .map(|c| c.as_os_str().to_str())
        .collect::<Option<Vec<_>>>()?
        .join("/");
    (!id.is_empty()).then_some(id)
}

// ── Tests ────────────────────────────────────────────────────────────────────
