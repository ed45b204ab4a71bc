//! Application layer errors.
//!
//! These represent failures in orchestration: the destination conflict
//! detected before any write, and the write failures during manifest or
//! component creation. Name validation errors are `DomainError`.

use std::path::PathBuf;

use thiserror::Error;

use crate::domain::ComponentKind;

/// Errors that occur while executing a scaffold run.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// The target plugin directory already exists. Detected before any
    /// write; nothing has been created or modified.
    #[error("Directory already exists: {}", .path.display())]
    PluginExists { path: PathBuf },

    /// Creating the plugin base directory failed.
    #[error("Failed to create plugin directory {}: {reason}", .path.display())]
    CreateDirFailed { path: PathBuf, reason: String },

    /// Writing the mandatory manifest failed. Fatal; the base directory has
    /// already been created.
    #[error("Failed to write manifest {}: {reason}", .path.display())]
    ManifestWrite { path: PathBuf, reason: String },

    /// A component's files could not be created. Components created before
    /// this one remain on disk; later ones were never attempted.
    #[error("Failed to create '{kind}' component: {reason}")]
    ComponentWrite { kind: ComponentKind, reason: String },

    /// A raw filesystem operation failed. Produced by adapters; the service
    /// wraps it into one of the more specific variants above.
    #[error("Filesystem error at {}: {reason}", .path.display())]
    Filesystem { path: PathBuf, reason: String },
}

impl ApplicationError {
    /// User-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::PluginExists { path } => vec![
                format!("The directory '{}' already exists", path.display()),
                "Choose a different plugin name".into(),
                "Or remove the existing directory first".into(),
            ],
            Self::CreateDirFailed { path, .. } | Self::ManifestWrite { path, .. } => vec![
                format!("Failed to write under: {}", path.display()),
                "Check that you have write permissions".into(),
                "Check available disk space".into(),
            ],
            Self::ComponentWrite { kind, .. } => vec![
                format!("The '{kind}' component could not be written"),
                "Components created before the failure were left in place".into(),
                "Check permissions, then remove the partial directory and retry".into(),
            ],
            Self::Filesystem { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
            ],
        }
    }
}
