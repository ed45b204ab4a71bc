//! Application layer: the scaffold orchestrator and its driven ports.

pub mod error;
pub mod ports;
pub mod scaffold;

pub use error::ApplicationError;
pub use ports::{Filesystem, Reporter};
pub use scaffold::ScaffoldService;
