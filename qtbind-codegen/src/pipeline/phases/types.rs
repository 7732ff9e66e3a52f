//! Signature type classification phase.

use eyre::Result;

use crate::{
    pipeline::{Diagnostic, GenerationContext, Phase},
    types::classify,
};

/// Classifies the output and parameter types of every function in the
/// active modules.
///
/// Container shapes the binding layer cannot express are reported as
/// warnings at `Class::function`. The function is still listed in the
/// catalog; emitters decide whether to skip it.
pub struct TypesPhase;

impl Phase for TypesPhase {
    fn name(&self) -> &'static str {
        "types"
    }

    fn description(&self) -> &'static str {
        "Classify function signature types"
    }

    fn run(&self, ctx: &mut GenerationContext) -> Result<()> {
        for module in &ctx.modules {
            for class in ctx.catalog.classes_in(module) {
                for function in &class.functions {
                    let types = std::iter::once(function.output.as_str())
                        .chain(function.parameters.iter().map(|p| p.value.as_str()));

                    for ty in types {
                        if let Err(err) = classify(ty) {
                            tracing::trace!(class = %class.name, function = %function.name, %err);
                            ctx.diagnostics.push(
                                Diagnostic::warning(self.name(), err.to_string())
                                    .in_module(module)
                                    .at(format!("{}::{}", class.name, function.name)),
                            );
                        }
                    }
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use qtbind_core::{Os, Platform, Version};
    use qtbind_ir::{Catalog, ClassRecord, FunctionRecord, Parameter};

    use super::*;
    use crate::{modules::ModuleGraph, pipeline::GenerationSettings};

    #[test]
    fn test_nested_generic_is_warned() {
        let mut function = FunctionRecord::new("nested");
        function.output = "QList<QList<int>>".into();
        let mut setter = FunctionRecord::new("setItems");
        setter.parameters = vec![Parameter::new("items", "const QList<QString> &")];

        let catalog: Catalog = [ClassRecord::new("QFoo", "Core")
            .with_function(function)
            .with_function(setter)]
        .into_iter()
        .collect();
        let settings = GenerationSettings::new(Platform::new(Os::Linux, Version::DEFAULT_QT));
        let mut ctx = GenerationContext::new(catalog, settings, ModuleGraph::standard());
        ctx.modules = vec!["Core".into()];

        TypesPhase.run(&mut ctx).unwrap();

        assert_eq!(ctx.warning_count(), 1);
        let warning = &ctx.diagnostics[0];
        assert_eq!(warning.location.as_deref(), Some("QFoo::nested"));
        assert!(warning.message.contains("QList<QList<int>>"));
    }
}
