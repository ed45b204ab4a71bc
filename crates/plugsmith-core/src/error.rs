//! Unified error handling for Plugsmith Core.
//!
//! [`ScaffoldError`] wraps domain (validation) and application
//! (orchestration) errors behind one type, with a category for display
//! styling and user-actionable suggestions. The CLI maps every category to
//! the same exit status; the category exists for messaging, not exit codes.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for Plugsmith Core operations.
#[derive(Debug, Error, Clone)]
pub enum ScaffoldError {
    /// Plugin name validation failed; nothing was touched on disk.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// The scaffold run itself failed (conflict or write error).
    #[error(transparent)]
    Application(#[from] ApplicationError),
}

impl ScaffoldError {
    /// User-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Error category for display purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(_) => ErrorCategory::Validation,
            Self::Application(ApplicationError::PluginExists { .. }) => ErrorCategory::Conflict,
            Self::Application(_) => ErrorCategory::Write,
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Rejected before any filesystem action.
    Validation,
    /// The target directory already exists; nothing was written.
    Conflict,
    /// A filesystem write failed; earlier writes remain on disk.
    Write,
}

/// Convenient result type alias.
pub type ScaffoldResult<T> = Result<T, ScaffoldError>;
