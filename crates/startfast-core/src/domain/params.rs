//! Render parameters: the variable set handed to the template collaborator.
//!
//! A [`RenderParams`] is a value object derived once per configuration. It
//! carries every `{{VARIABLE}}` a template body (or a parameterized output
//! path) may reference: project-name casings, driver strings, connection
//! URLs, sync/async code fragments, and assembled requirement/compose
//! blocks.
//!
//! # Variable Naming Convention
//!
//! All variables are `SCREAMING_SNAKE_CASE`. Unknown placeholders survive
//! rendering untouched — a template referencing a variable that does not
//! exist is visible in the output rather than silently dropped.
//!
//! # Determinism
//!
//! Backed by a `BTreeMap` so iteration and serialization order are stable;
//! two configs that compare equal produce byte-identical parameter sets.

use std::collections::BTreeMap;

use crate::domain::{
    capabilities::{self, EngineFamily},
    config::BuildConfig,
    value_objects::Database,
};

/// Ordered variable map for template rendering.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RenderParams {
    values: BTreeMap<String, String>,
}

impl RenderParams {
    /// Derive the full variable set for a configuration.
    pub fn from_config(config: &BuildConfig) -> Self {
        let mut params = Self::default();
        let slug = to_snake_case(config.project_name());

        params.set("PROJECT_NAME", config.project_name());
        params.set("PROJECT_SLUG", &slug);
        params.set("PROJECT_CLASS", to_pascal_case(config.project_name()));
        params.set("PROJECT_TYPE", config.project_type().as_str());
        params.set(
            "PROJECT_SUMMARY",
            capabilities::project_type_def(config.project_type()).summary,
        );
        params.set("PYTHON_VERSION", config.python_version().to_string());
        params.set("PYTHON_TAG", config.python_version().tag());
        params.set("EXECUTION_MODE", config.execution_mode().as_str());
        params.set("AUTH", config.auth().as_str());
        params.set("TOKEN_EXPIRE_MINUTES", "30");
        params.set("API_TOKEN_URL", "api/v1/auth/token");
        params.set("CELERY_BROKER_URL", "redis://localhost:6379/0");

        // Mode-dependent code fragments, shared by endpoint and service
        // templates so one body serves both execution modes where the only
        // difference is the async surface.
        let (async_def, await_kw) = if config.is_async() {
            ("async ", "await ")
        } else {
            ("", "")
        };
        params.set("ASYNC_DEF", async_def);
        params.set("AWAIT", await_kw);

        params.set("DATABASE", config.database().as_str());
        match capabilities::database_def(config.database()) {
            Some(def) => {
                let url = if config.is_async() {
                    def.async_url
                } else {
                    def.sync_url
                };
                // The URL scheme may embed the slug; resolve it here so the
                // bodies see a finished URL.
                params.set("DATABASE_URL", url.replace("{{PROJECT_SLUG}}", &slug));
                params.set(
                    "DATABASE_DRIVER",
                    if config.is_async() {
                        def.async_driver
                    } else {
                        def.sync_driver
                    },
                );
            }
            None => {
                params.set("DATABASE_URL", "");
                params.set("DATABASE_DRIVER", "");
            }
        }

        let (session_import, session_type) = if config.database().is_sql() {
            if config.is_async() {
                (
                    "from sqlalchemy.ext.asyncio import AsyncSession",
                    "AsyncSession",
                )
            } else {
                ("from sqlalchemy.orm import Session", "Session")
            }
        } else {
            ("", "")
        };
        params.set("SESSION_IMPORT", session_import);
        params.set("SESSION_TYPE", session_type);

        let (monitoring_import, monitoring_setup) = if config.monitoring() {
            (
                "from app.core.monitoring import setup_monitoring\n",
                "setup_monitoring(app)\n",
            )
        } else {
            ("", "")
        };
        params.set("MONITORING_IMPORT", monitoring_import);
        params.set("MONITORING_SETUP", monitoring_setup);

        let (middleware_import, middleware_setup) = if config.advanced() {
            (
                "from app.core.middleware import add_middleware\n",
                "add_middleware(app)\n",
            )
        } else {
            ("", "")
        };
        params.set("MIDDLEWARE_IMPORT", middleware_import);
        params.set("MIDDLEWARE_SETUP", middleware_setup);

        params.set("REQUIREMENTS_EXTRA", requirements_extra(config));
        params.set("COMPOSE_DATABASE", compose_database(config));
        params.set("COMPOSE_WORKER", compose_worker(config));

        params
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Render a template string by replacing `{{VARIABLE}}` placeholders.
    ///
    /// Linear scan-and-replace; template bodies are small and the variable
    /// count is bounded. Unknown placeholders remain literal.
    pub fn render(&self, template: &str) -> String {
        let mut result = template.to_string();
        for (key, value) in &self.values {
            let placeholder = format!("{{{{{key}}}}}");
            if result.contains(&placeholder) {
                result = result.replace(&placeholder, value);
            }
        }
        result
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

// ── Assembled blocks ─────────────────────────────────────────────────────────

/// Extra pip requirement lines beyond the FastAPI baseline.
fn requirements_extra(config: &BuildConfig) -> String {
    let mut lines: Vec<String> = Vec::new();

    if let Some(def) = capabilities::database_def(config.database()) {
        if def.family == EngineFamily::Sql {
            lines.push("sqlalchemy>=2.0".into());
        }
        let driver = if config.is_async() {
            def.async_driver
        } else {
            def.sync_driver
        };
        if !driver.is_empty() {
            lines.push(driver.into());
        }
    }

    if let Some(def) = capabilities::auth_def(config.auth()) {
        lines.extend(def.requirements.iter().map(|r| (*r).to_string()));
    }

    if config.monitoring() {
        lines.push("prometheus-fastapi-instrumentator".into());
    }
    if config.celery() {
        lines.push("celery[redis]".into());
    }
    if config.advanced() {
        lines.push("structlog".into());
    }
    if config.tests() {
        lines.push("pytest".into());
        lines.push("httpx".into());
    }

    lines.join("\n")
}

/// docker-compose service block for the configured database, or empty.
fn compose_database(config: &BuildConfig) -> String {
    let Some(def) = capabilities::database_def(config.database()) else {
        return String::new();
    };
    let (Some(image), Some(port)) = (def.compose_image, def.compose_port) else {
        return String::new();
    };
    format!(
        "\n  {name}:\n    image: {image}\n    ports:\n      - \"{port}:{port}\"\n",
        name = def.database.as_str(),
    )
}

/// docker-compose service block for the celery worker, or empty.
fn compose_worker(config: &BuildConfig) -> String {
    if !config.celery() {
        return String::new();
    }
    let mut block = String::from(
        "\n  worker:\n    build: .\n    command: celery -A app.worker.celery_app worker --loglevel=info\n    depends_on:\n      - api\n",
    );
    // The broker container is only added when the app database is not
    // already a redis instance the worker can share.
    if config.database() != Database::Redis {
        block.push_str(
            "\n  broker:\n    image: redis:7-alpine\n    ports:\n      - \"6379:6379\"\n",
        );
    }
    block
}

// ── String case conversion helpers ───────────────────────────────────────────

/// snake_case: word-split, lowercase, join with `_`. Used for the Python
/// package slug and database names.
pub fn to_snake_case(s: &str) -> String {
    split_words(s).join("_")
}

/// PascalCase: word-split, capitalize each word, join. Used for settings and
/// model class names.
pub fn to_pascal_case(s: &str) -> String {
    split_words(s)
        .into_iter()
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => {
                    let mut out = String::new();
                    out.extend(first.to_uppercase());
                    out.push_str(chars.as_str());
                    out
                }
                None => String::new(),
            }
        })
        .collect()
}

/// Split an identifier on separators (`_`, `-`, whitespace), camelCase
/// transitions, and acronym boundaries (`HTTPServer` → `http`, `server`).
fn split_words(input: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();

    let mut chars = input.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '_' || c == '-' || c.is_whitespace() {
            if !current.is_empty() {
                words.push(current.to_lowercase());
                current.clear();
            }
            continue;
        }

        if let Some(next) = chars.peek() {
            // camelCase transition: lowercase followed by uppercase.
            if c.is_lowercase() && next.is_uppercase() {
                current.push(c);
                words.push(current.to_lowercase());
                current.clear();
                continue;
            }
            // Acronym boundary: Upper, Upper, lower.
            if c.is_uppercase()
                && next.is_uppercase()
                && chars.clone().nth(1).is_some_and(|n| n.is_lowercase())
            {
                current.push(c);
                words.push(current.to_lowercase());
                current.clear();
                continue;
            }
        }

        current.push(c);
    }

    if !current.is_empty() {
        words.push(current.to_lowercase());
    }

    words
}

// ── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::{Auth, Database, ExecutionMode, ProjectType};

    fn config() -> BuildConfig {
        BuildConfig::builder()
            .project_name("my-service")
            .build()
            .unwrap()
    }

    // ── Case helpers ─────────────────────────────────────────────────────────

    #[test]
    fn snake_case_handles_the_identifier_zoo() {
        assert_eq!(to_snake_case("my-service"), "my_service");
        assert_eq!(to_snake_case("MyService"), "my_service");
        assert_eq!(to_snake_case("HTTPServer"), "http_server");
        assert_eq!(to_snake_case("already_snake"), "already_snake");
    }

    #[test]
    fn pascal_case_handles_the_identifier_zoo() {
        assert_eq!(to_pascal_case("my-service"), "MyService");
        assert_eq!(to_pascal_case("my_app"), "MyApp");
        assert_eq!(to_pascal_case("XMLHttpRequest"), "XmlHttpRequest");
    }

    // ── Derived variables ────────────────────────────────────────────────────

    #[test]
    fn standard_variables_are_derived() {
        let p = RenderParams::from_config(&config());
        assert_eq!(p.get("PROJECT_NAME"), Some("my-service"));
        assert_eq!(p.get("PROJECT_SLUG"), Some("my_service"));
        assert_eq!(p.get("PROJECT_CLASS"), Some("MyService"));
        assert_eq!(p.get("PYTHON_TAG"), Some("3.11"));
    }

    #[test]
    fn async_mode_sets_code_fragments() {
        let p = RenderParams::from_config(&config());
        assert_eq!(p.get("ASYNC_DEF"), Some("async "));
        assert_eq!(p.get("AWAIT"), Some("await "));
        assert_eq!(p.get("SESSION_TYPE"), Some("AsyncSession"));
    }

    #[test]
    fn sync_mode_clears_code_fragments() {
        let c = BuildConfig::builder()
            .project_name("my-service")
            .execution_mode(ExecutionMode::Sync)
            .build()
            .unwrap();
        let p = RenderParams::from_config(&c);
        assert_eq!(p.get("ASYNC_DEF"), Some(""));
        assert_eq!(p.get("AWAIT"), Some(""));
        assert_eq!(p.get("SESSION_TYPE"), Some("Session"));
        assert_eq!(
            p.get("SESSION_IMPORT"),
            Some("from sqlalchemy.orm import Session")
        );
    }

    #[test]
    fn database_url_resolves_slug_and_mode() {
        let p = RenderParams::from_config(&config());
        assert_eq!(
            p.get("DATABASE_URL"),
            Some("sqlite+aiosqlite:///./my_service.db")
        );
        assert_eq!(p.get("DATABASE_DRIVER"), Some("aiosqlite"));
    }

    #[test]
    fn no_database_means_empty_url() {
        let c = BuildConfig::builder()
            .project_name("bare")
            .database(Database::None)
            .build()
            .unwrap();
        let p = RenderParams::from_config(&c);
        assert_eq!(p.get("DATABASE"), Some("none"));
        assert_eq!(p.get("DATABASE_URL"), Some(""));
    }

    #[test]
    fn requirements_extra_accumulates_per_feature() {
        let c = BuildConfig::builder()
            .project_name("kitchen-sink")
            .project_type(ProjectType::Crud)
            .database(Database::Postgresql)
            .auth(Auth::Jwt)
            .monitoring(true)
            .celery(true)
            .build()
            .unwrap();
        let extra = RenderParams::from_config(&c);
        let extra = extra.get("REQUIREMENTS_EXTRA").unwrap();

        assert!(extra.contains("sqlalchemy>=2.0"));
        assert!(extra.contains("asyncpg"));
        assert!(extra.contains("python-jose[cryptography]"));
        assert!(extra.contains("prometheus-fastapi-instrumentator"));
        assert!(extra.contains("celery[redis]"));
        assert!(!extra.contains("structlog"));
    }

    #[test]
    fn compose_database_is_empty_for_sqlite() {
        let p = RenderParams::from_config(&config());
        assert_eq!(p.get("COMPOSE_DATABASE"), Some(""));
    }

    #[test]
    fn compose_database_describes_containerized_backends() {
        let c = BuildConfig::builder()
            .project_name("svc")
            .database(Database::Postgresql)
            .build()
            .unwrap();
        let p = RenderParams::from_config(&c);
        let block = p.get("COMPOSE_DATABASE").unwrap();
        assert!(block.contains("postgres:16-alpine"));
        assert!(block.contains("5432:5432"));
    }

    #[test]
    fn celery_worker_reuses_a_redis_database() {
        let with_redis = BuildConfig::builder()
            .project_name("svc")
            .database(Database::Redis)
            .celery(true)
            .build()
            .unwrap();
        let p = RenderParams::from_config(&with_redis);
        let block = p.get("COMPOSE_WORKER").unwrap();
        assert!(block.contains("worker:"));
        assert!(!block.contains("broker:"), "redis db doubles as the broker");

        let with_mongo = BuildConfig::builder()
            .project_name("svc")
            .database(Database::Mongodb)
            .celery(true)
            .build()
            .unwrap();
        let p = RenderParams::from_config(&with_mongo);
        assert!(p.get("COMPOSE_WORKER").unwrap().contains("broker:"));
    }

    // ── Rendering ────────────────────────────────────────────────────────────

    #[test]
    fn render_replaces_known_placeholders() {
        let p = RenderParams::from_config(&config());
        assert_eq!(
            p.render("title=\"{{PROJECT_NAME}}\" pkg={{PROJECT_SLUG}}"),
            "title=\"my-service\" pkg=my_service"
        );
    }

    #[test]
    fn render_leaves_unknown_placeholders_literal() {
        let p = RenderParams::from_config(&config());
        assert_eq!(p.render("{{NOT_A_VARIABLE}}"), "{{NOT_A_VARIABLE}}");
    }

    #[test]
    fn identical_configs_produce_identical_params() {
        let a = RenderParams::from_config(&config());
        let b = RenderParams::from_config(&config());
        assert_eq!(a, b);
    }
}
