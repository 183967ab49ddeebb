//! The feature resolver: configuration → active feature set.
//!
//! A pure function over the template registry. For each entry the
//! applicability predicate is evaluated against the immutable
//! [`BuildConfig`]; the active keys come back in registry order. All
//! combinatorial logic lives in the registry predicates — this module only
//! runs them, which keeps the whole matrix independently testable.

use crate::domain::{
    config::BuildConfig,
    registry::{FeatureKey, TEMPLATE_REGISTRY, TemplateEntry},
};

/// Compute the active feature keys for a configuration.
pub fn resolve(config: &BuildConfig) -> Vec<FeatureKey> {
    active_entries(config, TEMPLATE_REGISTRY)
        .map(|entry| entry.key)
        .collect()
}

/// Iterator over the registry entries that apply to a configuration.
///
/// Shared by [`resolve`] and the composition planner so the two can never
/// disagree about which entries are active.
pub(crate) fn active_entries<'a>(
    config: &'a BuildConfig,
    table: &'a [TemplateEntry],
) -> impl Iterator<Item = &'a TemplateEntry> {
    table.iter().filter(move |entry| (entry.applies)(config))
}

// ── Tests ────────────────────────────────────────────────────────────────────
