//! Application layer errors.
//!
//! These errors represent failures in orchestration and execution, not
//! business logic. Business logic errors are `DomainError` from
//! `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ErrorCategory;

/// Errors that occur while executing a generation plan.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// The destination directory exists, is non-empty, and `force` is off.
    #[error("destination {path} already exists and is not empty")]
    DestinationConflict { path: PathBuf },

    /// A filesystem write failed mid-plan. Everything written before `path`
    /// is still on disk; nothing after it was attempted.
    #[error("write failed at {path}: {reason}")]
    WriteFailure { path: PathBuf, reason: String },

    /// The rendering collaborator failed for a template body.
    #[error("rendering '{template}' failed: {reason}")]
    RenderFailed { template: String, reason: String },

    /// A shared adapter lock was poisoned.
    #[error("workspace lock poisoned")]
    LockPoisoned,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::DestinationConflict { path } => vec![
                format!("Directory already exists: {}", path.display()),
                "Use --force to overwrite paths the plan touches (destructive)".into(),
                "Or choose a different project name / --path".into(),
            ],
            Self::WriteFailure { path, .. } => vec![
                format!("Failed while writing: {}", path.display()),
                "Files written before this point were left in place".into(),
                "Check permissions and free disk space, then re-run with --force".into(),
            ],
            Self::RenderFailed { template, .. } => vec![
                format!("Template '{template}' could not be rendered"),
                "If you use a template override directory, check its contents".into(),
            ],
            Self::LockPoisoned => vec!["Try again in a moment".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::DestinationConflict { .. } => ErrorCategory::Conflict,
            Self::WriteFailure { .. } | Self::RenderFailed { .. } | Self::LockPoisoned => {
                ErrorCategory::Internal
            }
        }
    }
}
