//! Domain-layer errors: plugin name validation failures.

use thiserror::Error;

use crate::domain::name::MAX_NAME_LEN;

/// Validation errors detected before any filesystem action.
///
/// All errors are:
/// - Cloneable (cheap to pass around)
/// - Actionable (provide suggestions for the CLI layer)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The identifier does not match `^[a-z][a-z0-9]*(-[a-z0-9]+)*$`.
    #[error("'{name}' is not valid kebab-case")]
    NotKebabCase { name: String },

    /// The identifier matches the pattern but exceeds the length bound.
    #[error("plugin name exceeds {} characters (got {length})", MAX_NAME_LEN)]
    NameTooLong { name: String, length: usize },
}

impl DomainError {
    /// User-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::NotKebabCase { .. } => vec![
                "Use lowercase letters, digits, and hyphens (e.g. 'my-plugin')".into(),
                "The name must start with a letter".into(),
                "Hyphens separate words: no leading, trailing, or doubled hyphens".into(),
            ],
            Self::NameTooLong { length, .. } => vec![
                format!("The name is {length} characters; the limit is {MAX_NAME_LEN}"),
                "Pick a shorter identifier".into(),
            ],
        }
    }
}
