//! Built-in pipeline phases.
//!
//! - [`ResolvePhase`] - checks the registry and picks the active modules
//! - [`TypesPhase`] - classifies function signature types
//! - [`OrderPhase`] - orders each module's classes
//! - [`RenderPhase`] - renders each module's enums

mod order;
mod render;
mod resolve;
mod types;

pub use order::OrderPhase;
pub use render::RenderPhase;
pub use resolve::ResolvePhase;
pub use types::TypesPhase;
