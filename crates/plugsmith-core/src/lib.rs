//! Plugsmith Core
//!
//! Domain and application layers for the Plugsmith plugin scaffolder.
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          plugsmith-cli (CLI)            │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │            ScaffoldService              │
//! │       Orchestrates the scaffold         │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Driven Ports (Traits)              │
//! │      (Filesystem, Reporter)             │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │   plugsmith-adapters / plugsmith-cli    │
//! │   (LocalFilesystem, ConsoleReporter)    │
//! └─────────────────────────────────────────┘
//! ```
//!
//! The domain layer (`domain`) holds pure logic: plugin-name validation,
//! title casing, the component-kind enumeration, the static templates, and
//! the table that maps each kind to the filesystem entries it produces.
//! The application layer (`application`) orchestrates one scaffold run
//! through the driven ports and owns the partial-failure policy.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use plugsmith_core::{
//!     application::ScaffoldService,
//!     domain::{ComponentSelection, PluginName},
//! };
//! # fn adapters() -> (Box<dyn plugsmith_core::application::ports::Filesystem>,
//! #                   Box<dyn plugsmith_core::application::ports::Reporter>) { todo!() }
//!
//! let name = PluginName::parse("my-plugin").unwrap();
//! let (filesystem, reporter) = adapters();
//! let service = ScaffoldService::new(filesystem, reporter);
//! service
//!     .scaffold(&name, "/plugins".as_ref(), &ComponentSelection::all())
//!     .unwrap();
//! ```

pub mod application;
pub mod domain;
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ScaffoldService,
        ports::{Filesystem, Reporter},
    };
    pub use crate::domain::{ComponentKind, ComponentSelection, PluginName, RenderContext};
    pub use crate::error::{ScaffoldError, ScaffoldResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
