//! Generation pipeline.
//!
//! The [`Pipeline`] drives one generation run over a class catalog:
//!
//! - resolve the active modules for the target platform
//! - check the type expressions of every generated function
//! - order each module's classes
//! - render each module's enums
//!
//! Problems local to one module (an inheritance cycle, an unsupported type)
//! are recorded as [`Diagnostic`]s and the remaining modules still run.
//! Only a corrupt module registry aborts the run.
//!
//! # Example
//!
//! ```ignore
//! use qtbind_codegen::pipeline::{GenerationSettings, Pipeline};
//!
//! let settings = GenerationSettings::new(platform).inheritance_order(true);
//! let ctx = Pipeline::new(settings).run(catalog)?;
//!
//! for diag in ctx.errors() {
//!     eprintln!("{}", diag);
//! }
//! ```

mod context;
mod diagnostic;
mod phase;
pub mod phases;
mod runner;

pub use context::{GenerationContext, GenerationSettings, ModulePlan, RenderedEnum};
pub use diagnostic::{Diagnostic, Severity};
pub use phase::Phase;
pub use runner::Pipeline;
