//! Pipeline orchestrator.

use eyre::Result;
use qtbind_ir::Catalog;

use super::{
    GenerationContext, GenerationSettings, Phase,
    phases::{OrderPhase, RenderPhase, ResolvePhase, TypesPhase},
};
use crate::modules::ModuleGraph;

/// The generation pipeline orchestrator.
///
/// Runs the built-in phases (resolve, types, order, render) followed by any
/// custom phases.
///
/// # Example
///
/// ```ignore
/// let ctx = Pipeline::new(settings)
///     .phase(MyCustomPhase)
///     .run(catalog)?;
/// ```
pub struct Pipeline {
    settings: GenerationSettings,
    graph: ModuleGraph,
    phases: Vec<Box<dyn Phase>>,
}

impl Pipeline {
    /// Create a pipeline over the standard module registry.
    pub fn new(settings: GenerationSettings) -> Self {
        Self {
            settings,
            graph: ModuleGraph::global().clone(),
            phases: Vec::new(),
        }
    }

    /// Use a different module registry.
    pub fn graph(mut self, graph: ModuleGraph) -> Self {
        self.graph = graph;
        self
    }

    /// Add a phase to run after the built-in phases.
    pub fn phase(mut self, phase: impl Phase + 'static) -> Self {
        self.phases.push(Box::new(phase));
        self
    }

    /// Run every phase over `catalog`.
    ///
    /// # Errors
    ///
    /// Returns an error if a phase fails fatally, e.g. when the module
    /// registry has a hard dependency cycle.
    pub fn run(&self, catalog: Catalog) -> Result<GenerationContext> {
        let mut ctx = GenerationContext::new(catalog, self.settings.clone(), self.graph.clone());

        let builtin_phases: Vec<Box<dyn Phase>> = vec![
            Box::new(ResolvePhase),
            Box::new(TypesPhase),
            Box::new(OrderPhase),
            Box::new(RenderPhase),
        ];

        for phase in builtin_phases.iter().chain(self.phases.iter()) {
            tracing::debug!(phase = phase.name(), "{}", phase.description());
            phase.run(&mut ctx)?;
        }

        tracing::debug!(
            modules = ctx.modules.len(),
            errors = ctx.error_count(),
            warnings = ctx.warning_count(),
            "pipeline finished"
        );
        Ok(ctx)
    }
}
