//! Infrastructure adapters for Plugsmith.
//!
//! This crate implements the ports defined in
//! `plugsmith_core::application::ports`: the production filesystem, plus
//! in-memory test doubles for the filesystem and the progress reporter.

pub mod filesystem;
pub mod reporter;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use reporter::{RecordingReporter, SilentReporter};
