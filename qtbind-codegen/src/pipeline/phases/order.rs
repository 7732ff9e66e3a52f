//! Class ordering phase.

use eyre::Result;

use crate::{
    ordering::order,
    pipeline::{Diagnostic, GenerationContext, Phase},
};

/// Orders the classes of every active module.
///
/// An inheritance cycle fails only its own module: the module gets an
/// error diagnostic and no emission order, the others are ordered as usual.
pub struct OrderPhase;

impl Phase for OrderPhase {
    fn name(&self) -> &'static str {
        "order"
    }

    fn description(&self) -> &'static str {
        "Order classes by inheritance within each module"
    }

    fn run(&self, ctx: &mut GenerationContext) -> Result<()> {
        let inheritance = ctx.settings.inheritance_order;

        for module in ctx.modules.clone() {
            match order(&ctx.catalog, &module, inheritance) {
                Ok(classes) => {
                    tracing::debug!(%module, classes = classes.len(), "ordered module");
                    ctx.plan_mut(&module).classes = Some(classes);
                }
                Err(err) => {
                    tracing::debug!(%module, stuck = err.stuck().count(), "ordering failed");
                    let mut diagnostic = Diagnostic::error(self.name(), err.to_string())
                        .in_module(module.as_str());
                    if !err.blocked.is_empty() {
                        diagnostic = diagnostic.at(err.blocked.join(", "));
                    }
                    ctx.plan_mut(&module);
                    ctx.add_diagnostic(diagnostic);
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use qtbind_core::{Os, Platform, Version};
    use qtbind_ir::{Catalog, ClassRecord};

    use super::*;
    use crate::{modules::ModuleGraph, pipeline::GenerationSettings};

    #[test]
    fn test_cycle_fails_only_its_module() {
        let catalog: Catalog = [
            ClassRecord::new("X", "Widgets").with_base("Y"),
            ClassRecord::new("Y", "Widgets").with_base("X"),
            ClassRecord::new("Z", "Widgets").with_base("X"),
            ClassRecord::new("B", "Core").with_base("A"),
            ClassRecord::new("A", "Core"),
        ]
        .into_iter()
        .collect();
        let settings = GenerationSettings::new(Platform::new(Os::Linux, Version::DEFAULT_QT))
            .inheritance_order(true);
        let mut ctx = GenerationContext::new(catalog, settings, ModuleGraph::standard());
        ctx.modules = vec!["Core".into(), "Widgets".into()];

        OrderPhase.run(&mut ctx).unwrap();

        assert_eq!(
            ctx.plan("Core").and_then(|p| p.classes.clone()),
            Some(vec!["A".to_string(), "B".to_string()])
        );
        assert!(!ctx.plan("Widgets").is_some_and(|p| p.is_ordered()));

        let error = ctx.errors().next().expect("one error");
        assert_eq!(error.module.as_deref(), Some("Widgets"));
        assert_eq!(error.location.as_deref(), Some("Z"));
        assert!(error.message.contains("X, Y"));
    }
}
