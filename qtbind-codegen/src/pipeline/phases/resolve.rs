//! Module resolution phase.

use eyre::Result;
use qtbind_ir::NO_CODEGEN_MODULE;

use crate::{
    ordering::unresolved_bases,
    pipeline::{Diagnostic, GenerationContext, Phase},
};

/// Checks the module registry and records the modules active for the
/// target platform.
///
/// Also reports catalog content that will silently not be generated:
/// classes of unregistered or inactive modules and bases the catalog does
/// not know.
pub struct ResolvePhase;

impl Phase for ResolvePhase {
    fn name(&self) -> &'static str {
        "resolve"
    }

    fn description(&self) -> &'static str {
        "Resolve the active modules for the target platform"
    }

    fn run(&self, ctx: &mut GenerationContext) -> Result<()> {
        ctx.graph.check_acyclic()?;

        let platform = ctx.settings.platform;
        let active: Vec<String> = ctx
            .graph
            .active_modules(&platform)
            .into_iter()
            .map(str::to_string)
            .collect();

        for module in ctx.catalog.modules() {
            if module == NO_CODEGEN_MODULE {
                continue;
            }
            if !ctx.graph.contains(module) {
                ctx.diagnostics.push(
                    Diagnostic::warning(
                        self.name(),
                        format!("module '{}' is not registered, its classes are skipped", module),
                    )
                    .in_module(module),
                );
            } else if !active.iter().any(|m| m == module) {
                ctx.diagnostics.push(
                    Diagnostic::info(
                        self.name(),
                        format!("module '{}' is not generated for {}", module, platform),
                    )
                    .in_module(module),
                );
            }
        }

        for module in &active {
            for (class, base) in unresolved_bases(&ctx.catalog, module) {
                ctx.diagnostics.push(
                    Diagnostic::warning(
                        self.name(),
                        format!("base class '{}' is not in the catalog, treated as external", base),
                    )
                    .in_module(module)
                    .at(class),
                );
            }
        }

        tracing::debug!(count = active.len(), %platform, "resolved active modules");
        ctx.modules = active;
        Ok(())
    }
}
