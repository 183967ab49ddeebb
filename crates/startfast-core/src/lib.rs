//! startfast-core — configuration resolution and template composition.
//!
//! This crate is the pure core of the startfast generator: it turns a flat
//! set of user options into a validated [`BuildConfig`], resolves the active
//! feature set against a static template registry, and composes an ordered,
//! conflict-checked [`GenerationPlan`]. All I/O happens behind ports.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          startfast-cli (CLI)            │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │           (GeneratorService)            │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     Application Ports (Traits)          │
//! │     (Workspace, TemplateRenderer)       │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    startfast-adapters (Infrastructure)  │
//! │  (LocalWorkspace, CatalogRenderer, ..)  │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │ (BuildConfig, Registry, GenerationPlan) │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use startfast_core::domain::{BuildConfig, Database};
//! # use startfast_core::application::GeneratorService;
//!
//! let config = BuildConfig::builder()
//!     .project_name("simple-api")
//!     .database(Database::Postgresql)
//!     .build()
//!     .unwrap();
//!
//! // With injected adapters:
//! // let service = GeneratorService::new(renderer, workspace);
//! // let plan = service.generate(&config).unwrap();
//! ```

pub mod application;
pub mod domain;
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{GeneratorService, TemplateRenderer, Workspace};
    pub use crate::domain::{
        Auth, BuildConfig, BuildConfigBuilder, Database, EntryKind, ExecutionMode, FeatureKey,
        GenerationPlan, PlanEntry, ProjectType, PythonVersion, RenderParams, TemplateId,
    };
    pub use crate::error::{StartfastError, StartfastResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
