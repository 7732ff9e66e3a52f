//! Pipeline phase trait.

use eyre::Result;

use super::GenerationContext;

/// A phase in the generation pipeline.
///
/// Phases run in order and share one [`GenerationContext`]. Built-in phases:
/// - `ResolvePhase` - picks the active modules and checks the registry
/// - `TypesPhase` - classifies every function signature type
/// - `OrderPhase` - orders each module's classes
/// - `RenderPhase` - renders each module's enums
///
/// Custom phases can be appended with [`Pipeline::phase`](super::Pipeline::phase).
pub trait Phase: Send + Sync {
    /// The name of this phase, recorded on its diagnostics.
    fn name(&self) -> &'static str;

    /// A human-readable description of what this phase does.
    fn description(&self) -> &'static str;

    /// Run this phase on the context.
    ///
    /// # Errors
    ///
    /// Returns an error only if the whole run has to stop. Problems local to
    /// a module are recorded as diagnostics instead.
    fn run(&self, ctx: &mut GenerationContext) -> Result<()>;
}
