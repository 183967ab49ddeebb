//! Domain-layer errors.
//!
//! All errors are:
//! - Cloneable (for retry logic)
//! - Categorizable (for CLI display)
//! - Actionable (provides suggestions)

use thiserror::Error;

/// Root domain error type.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors (400-level equivalent)
    // ========================================================================
    /// A single option failed validation. `field` names the offending option.
    #[error("invalid configuration: {field}: {reason}")]
    InvalidConfiguration { field: &'static str, reason: String },

    /// Two individually valid options cannot be combined.
    #[error("incompatible options: {left} with {right}: {reason}")]
    IncompatibleOptions {
        left: String,
        right: String,
        reason: String,
    },

    #[error("absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },

    // ========================================================================
    // Registry Defects (internal invariant violations)
    // ========================================================================
    /// Two applicable registry entries resolved to the same output path.
    /// This is a defect in the template registry, not a user error.
    #[error("template conflict: '{first}' and '{second}' both emit {path}")]
    TemplateConflict {
        path: String,
        first: String,
        second: String,
    },

    /// A registry entry references a template id no renderer knows.
    #[error("no template body registered for '{template}'")]
    MissingTemplate { template: String },

    /// A plan violated one of its structural invariants.
    #[error("invalid plan: {0}")]
    InvalidPlan(String),
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidConfiguration { field, reason } => vec![
                format!("The '{field}' option is invalid: {reason}"),
                "Run with --help to see accepted values".into(),
            ],
            Self::IncompatibleOptions { left, right, .. } => vec![
                format!("'{left}' cannot be combined with '{right}'"),
                "Pick a database backend, or a project type without persistence".into(),
            ],
            Self::TemplateConflict { path, first, second } => vec![
                format!("Features '{first}' and '{second}' both want to write {path}"),
                "This is a defect in the template registry - please report it".into(),
            ],
            Self::MissingTemplate { template } => vec![
                format!("Template '{template}' has no registered body"),
                "This is a bug in startfast - please report it".into(),
            ],
            _ => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidConfiguration { .. } | Self::AbsolutePathNotAllowed { .. } => {
                ErrorCategory::Validation
            }
            Self::IncompatibleOptions { .. } => ErrorCategory::Compatibility,
            Self::TemplateConflict { .. } | Self::MissingTemplate { .. } | Self::InvalidPlan(_) => {
                ErrorCategory::Internal
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Compatibility,
    Conflict,
    Internal,
}
