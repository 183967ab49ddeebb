//! Infrastructure adapters for startfast.
//!
//! This crate implements the ports defined in
//! `startfast_core::application::ports`. It contains all external
//! dependencies and I/O operations: the builtin template body catalog, the
//! substitution renderer, override discovery, and the destination
//! filesystem.

pub mod bodies;
pub mod overrides;
pub mod renderer;
pub mod workspace;

// Re-export commonly used adapters
pub use renderer::CatalogRenderer;
pub use workspace::{LocalWorkspace, MemoryWorkspace};

// ── End-to-end tests over the memory workspace ───────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use startfast_core::application::GeneratorService;
    use startfast_core::domain::{Auth, BuildConfig, Database};
    use std::path::Path;

    fn service(ws: MemoryWorkspace) -> GeneratorService {
        GeneratorService::new(Box::new(CatalogRenderer::new()), Box::new(ws))
    }

    #[test]
    fn full_generation_writes_the_planned_tree() {
        let ws = MemoryWorkspace::new();
        let svc = service(ws.clone());

        let config = BuildConfig::builder()
            .project_name("demo-api")
            .target_path("out")
            .database(Database::Postgresql)
            .auth(Auth::Jwt)
            .build()
            .unwrap();

        let plan = svc.generate(&config).unwrap();
        assert_eq!(plan.files().count(), ws.file_count());

        let main = ws.read_file(Path::new("out/demo-api/app/main.py")).unwrap();
        assert!(main.contains("FastAPI"));
        assert!(!main.contains("{{"), "unrendered placeholder in main.py");

        let security = ws
            .read_file(Path::new("out/demo-api/app/core/security.py"))
            .unwrap();
        assert!(security.contains("create_access_token"));

        assert!(ws.is_executable(Path::new("out/demo-api/scripts/start.sh")));
    }

    #[test]
    fn destination_conflict_without_force() {
        let ws = MemoryWorkspace::new();
        ws.create_dir_all(Path::new("out/taken/junk")).unwrap();

        let svc = service(ws.clone());
        let config = BuildConfig::builder()
            .project_name("taken")
            .target_path("out")
            .build()
            .unwrap();

        let err = svc.generate(&config).unwrap_err();
        assert!(err.to_string().contains("already exists"));
        assert_eq!(ws.file_count(), 0, "conflict must precede any write");
    }

    #[test]
    fn force_overwrites_a_non_empty_destination() {
        let ws = MemoryWorkspace::new();
        ws.create_dir_all(Path::new("out/taken/junk")).unwrap();

        let svc = service(ws.clone());
        let config = BuildConfig::builder()
            .project_name("taken")
            .target_path("out")
            .force(true)
            .build()
            .unwrap();

        svc.generate(&config).unwrap();
        assert!(ws.read_file(Path::new("out/taken/app/main.py")).is_some());
    }

    #[test]
    fn write_failure_halts_and_reports_the_path() {
        let ws = MemoryWorkspace::new();
        ws.poison("out/demo/requirements.txt");

        let svc = service(ws.clone());
        let config = BuildConfig::builder()
            .project_name("demo")
            .target_path("out")
            .build()
            .unwrap();

        let err = svc.generate(&config).unwrap_err();
        assert!(err.to_string().contains("requirements.txt"));
        // Partial output stays on disk: root-level files sort after the
        // directory tree, so by the time requirements.txt fails some files
        // were already written and must remain.
        assert!(ws.file_count() > 0);
    }

    #[test]
    fn rendered_tree_has_no_unresolved_placeholders() {
        let ws = MemoryWorkspace::new();
        let svc = service(ws.clone());
        let config = BuildConfig::builder()
            .project_name("full-stack")
            .target_path("out")
            .database(Database::Redis)
            .auth(Auth::ApiKey)
            .celery(true)
            .monitoring(true)
            .advanced(true)
            .build()
            .unwrap();

        svc.generate(&config).unwrap();
        for path in ws.file_paths() {
            let content = ws.read_file(&path).unwrap();
            assert!(
                !content.contains("{{"),
                "unrendered placeholder in {}",
                path.display()
            );
        }
    }
}
