//! Generator core for the qtbind Go bindings.
//!
//! Takes the class [`Catalog`](qtbind_ir::Catalog) produced by the metadata
//! front end and answers the questions every emitter asks:
//!
//! - [`modules`] - which modules exist, what they require and which of them
//!   are generated for a platform
//! - [`ordering`] - in which order a module's classes are emitted
//! - [`types`] - canonical type strings and container unpacking
//! - [`naming`] - collision-free host identifiers
//! - [`enums`] - enum constant blocks
//! - [`pipeline`] - one generation run over all active modules, collecting
//!   diagnostics
//! - [`dump`] - plain-text per-class dump

pub mod dump;
pub mod enums;
pub mod error;
pub mod modules;
pub mod naming;
pub mod ordering;
pub mod pipeline;
pub mod types;

pub use error::{ConfigurationError, CycleError, UnsupportedShapeError};
pub use modules::{ModuleGraph, active_modules, required_modules};
pub use naming::sanitize;
pub use ordering::order;
pub use types::{TypeShape, classify, normalize};
