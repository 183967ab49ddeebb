//! Template renderer: builtin bodies plus optional per-id overrides.

use std::collections::HashMap;

use startfast_core::{
    application::{error::ApplicationError, ports::TemplateRenderer},
    domain::{DomainError, RenderParams, TemplateId},
    error::StartfastResult,
};
use tracing::instrument;

use crate::bodies;

/// Renderer over the builtin body catalog.
///
/// Overrides (loaded from a templates directory, see [`crate::overrides`])
/// shadow builtin bodies by template id; everything else falls through to
/// the compiled-in catalog.
#[derive(Debug, Default)]
pub struct CatalogRenderer {
    overrides: HashMap<String, String>,
}

impl CatalogRenderer {
    /// Renderer with builtin bodies only.
    pub fn new() -> Self {
        Self::default()
    }

    /// Renderer with a set of body overrides keyed by template id.
    pub fn with_overrides(overrides: HashMap<String, String>) -> Self {
        Self { overrides }
    }

    /// Renderer with overrides discovered from the standard locations.
    ///
    /// Discovery failures are surfaced; an absent directory is not a
    /// failure and yields a builtin-only renderer.
    pub fn with_discovered_overrides() -> StartfastResult<Self> {
        Ok(Self::with_overrides(crate::overrides::load_overrides()?))
    }

    fn lookup(&self, id: TemplateId) -> Option<&str> {
        self.overrides
            .get(id.as_str())
            .map(String::as_str)
            .or_else(|| bodies::body(id))
    }
}

impl TemplateRenderer for CatalogRenderer {
    #[instrument(skip_all, fields(template = %template))]
    fn render(&self, template: TemplateId, params: &RenderParams) -> StartfastResult<String> {
        let body = self.lookup(template).ok_or_else(|| {
            // A registry entry pointing at a body nobody ships is a
            // programming defect, not a user error.
            DomainError::MissingTemplate {
                template: template.to_string(),
            }
        })?;

        if body.is_empty() {
            return Err(ApplicationError::RenderFailed {
                template: template.to_string(),
                reason: "template body is empty".into(),
            }
            .into());
        }

        Ok(params.render(body))
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use startfast_core::domain::BuildConfig;

    fn params() -> RenderParams {
        let config = BuildConfig::builder()
            .project_name("demo-api")
            .build()
            .unwrap();
        RenderParams::from_config(&config)
    }

    #[test]
    fn builtin_body_renders_with_substitution() {
        let renderer = CatalogRenderer::new();
        let out = renderer
            .render(TemplateId("docs/readme"), &params())
            .unwrap();
        assert!(out.contains("# demo-api"));
        assert!(!out.contains("{{PROJECT_NAME}}"));
    }

    #[test]
    fn override_shadows_builtin() {
        let mut overrides = HashMap::new();
        overrides.insert(
            "docs/readme".to_string(),
            "# custom {{PROJECT_NAME}}\n".to_string(),
        );
        let renderer = CatalogRenderer::with_overrides(overrides);
        let out = renderer
            .render(TemplateId("docs/readme"), &params())
            .unwrap();
        assert_eq!(out, "# custom demo-api\n");
    }

    #[test]
    fn unknown_template_is_a_missing_template_error() {
        let renderer = CatalogRenderer::new();
        let err = renderer
            .render(TemplateId("nope/nothing"), &params())
            .unwrap_err();
        assert!(matches!(
            err,
            startfast_core::error::StartfastError::Domain(DomainError::MissingTemplate { .. })
        ));
    }

    #[test]
    fn empty_override_is_a_render_failure() {
        let mut overrides = HashMap::new();
        overrides.insert("docs/readme".to_string(), String::new());
        let renderer = CatalogRenderer::with_overrides(overrides);
        assert!(renderer.render(TemplateId("docs/readme"), &params()).is_err());
    }
}
