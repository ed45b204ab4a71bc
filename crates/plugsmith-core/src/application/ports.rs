//! Driven ports - implemented by infrastructure.
//!
//! These traits define what the scaffold service needs from the outside
//! world. `plugsmith-adapters` provides the filesystem implementations;
//! the CLI provides the console-backed reporter.

use std::path::Path;

use crate::error::ScaffoldResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `plugsmith_adapters::LocalFilesystem` (production)
/// - `plugsmith_adapters::MemoryFilesystem` (testing)
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories. Succeeds if the
    /// directory already exists.
    fn create_dir_all(&self, path: &Path) -> ScaffoldResult<()>;

    /// Write content to a file, replacing any previous content.
    fn write_file(&self, path: &Path, content: &str) -> ScaffoldResult<()>;

    /// Mark a file executable (0o755 on Unix; no-op on Windows).
    fn set_executable(&self, path: &Path) -> ScaffoldResult<()>;

    /// Check if a filesystem entry exists at `path`.
    fn exists(&self, path: &Path) -> bool;
}

/// Port for user-facing progress reporting.
///
/// The service emits one line per filesystem action and one warning per
/// unrecognized component kind; how those lines are styled (glyphs, color,
/// quiet mode) is the adapter's concern.
pub trait Reporter: Send + Sync {
    /// A filesystem artifact was created.
    fn created(&self, message: &str);

    /// Something was skipped; the run continues.
    fn warning(&self, message: &str);
}
