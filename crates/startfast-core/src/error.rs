//! Unified error handling for startfast-core.
//!
//! Wraps domain and application errors behind one type so callers get a
//! single surface for categorization and user-facing suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::{DomainError, ErrorCategory};

/// Root error type for startfast-core operations.
#[derive(Debug, Error, Clone)]
pub enum StartfastError {
    /// Errors from the domain layer (validation, registry defects).
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Errors from the application layer (destination conflicts, writes).
    #[error(transparent)]
    Application(#[from] ApplicationError),

    /// Unexpected internal errors (bugs).
    #[error("internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl StartfastError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Internal { .. } => vec![
                "This appears to be a bug in startfast".into(),
                "Please open an issue with the command you ran".into(),
            ],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => e.category(),
            Self::Application(e) => e.category(),
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }
}

/// Convenient result type alias.
pub type StartfastResult<T> = Result<T, StartfastError>;
