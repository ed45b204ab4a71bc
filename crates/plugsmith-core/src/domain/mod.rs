//! Core domain layer for Plugsmith.
//!
//! Pure business logic with no I/O: everything here is deterministic string
//! and path manipulation. Filesystem and console concerns go through the
//! ports defined in the application layer.

pub mod component;
pub mod error;
pub mod name;
pub mod plan;
pub mod templates;

// Re-exports for convenience
pub use component::{ComponentKind, ComponentSelection};
pub use error::DomainError;
pub use name::{PluginName, title_case};
pub use plan::{FsEntry, MANIFEST_PATH, component_plan, manifest_entry, success_line};
pub use templates::RenderContext;
