//! Core domain layer for startfast.
//!
//! Pure business logic with no I/O: option validation, the feature matrix,
//! and generation planning. Filesystem and template-rendering concerns are
//! reached only through ports (traits) defined in the application layer.
//!
//! - **No async**: the whole planning path is synchronous
//! - **No I/O**: no filesystem, network, or environment access
//! - **Immutable values**: configs and plans never mutate after construction
//! - **Static registries**: the template catalog and capability tables are
//!   process-wide read-only data, safe for concurrent reads

pub mod capabilities;
pub mod common;
pub mod config;
pub mod error;
pub mod features;
pub mod params;
pub mod plan;
pub mod registry;
pub mod value_objects;

// Re-exports for convenience
pub use common::RelativePath;
pub use config::{BuildConfig, BuildConfigBuilder};
pub use error::{DomainError, ErrorCategory};
pub use params::RenderParams;
pub use plan::{GenerationPlan, PlanEntry};
pub use registry::{EntryKind, FeatureKey, TEMPLATE_REGISTRY, TemplateEntry, TemplateId};
pub use value_objects::{Auth, Database, ExecutionMode, ProjectType, PythonVersion};
