//! Enum rendering phase.

use eyre::Result;

use crate::{
    enums::{EnumRenderer, GoSymbolConverter},
    pipeline::{GenerationContext, Phase, RenderedEnum},
};

/// Renders the enums of every ordered module, class by class in emission
/// order. Modules whose ordering failed are skipped.
pub struct RenderPhase;

impl Phase for RenderPhase {
    fn name(&self) -> &'static str {
        "render"
    }

    fn description(&self) -> &'static str {
        "Render enum constant blocks"
    }

    fn run(&self, ctx: &mut GenerationContext) -> Result<()> {
        let renderer = EnumRenderer::new(&GoSymbolConverter).stub(ctx.settings.stub);

        for plan in ctx.plans.values_mut() {
            let Some(classes) = &plan.classes else {
                continue;
            };

            let mut rendered = Vec::new();
            for name in classes {
                let Some(class) = ctx.catalog.get(name) else {
                    continue;
                };
                for record in &class.enums {
                    rendered.push(RenderedEnum {
                        class: class.name.clone(),
                        fullname: record.fullname.clone(),
                        text: renderer.render(record),
                    });
                }
            }

            tracing::debug!(module = %plan.module, enums = rendered.len(), "rendered enums");
            plan.enums = rendered;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use qtbind_core::{Os, Platform, Version};
    use qtbind_ir::{Catalog, ClassRecord, EnumRecord};

    use super::*;
    use crate::{
        modules::ModuleGraph,
        pipeline::{GenerationSettings, ModulePlan},
    };

    fn context(stub: bool) -> GenerationContext {
        let catalog: Catalog = [
            ClassRecord::new("QWidget", "Widgets").with_enum(
                EnumRecord::new("QWidget::RenderFlag").with_value("DrawChildren", "QWidget_DrawChildren"),
            ),
            ClassRecord::new("QAction", "Widgets")
                .with_enum(EnumRecord::new("QAction::Priority").with_value("LowPriority", "0")),
        ]
        .into_iter()
        .collect();
        let settings =
            GenerationSettings::new(Platform::new(Os::Linux, Version::DEFAULT_QT)).stub(stub);
        let mut ctx = GenerationContext::new(catalog, settings, ModuleGraph::standard());
        ctx.plans.insert(
            "Widgets".into(),
            ModulePlan {
                module: "Widgets".into(),
                classes: Some(vec!["QAction".into(), "QWidget".into()]),
                enums: Vec::new(),
            },
        );
        ctx.plans.insert("Gui".into(), ModulePlan::new("Gui"));
        ctx
    }

    #[test]
    fn test_enums_follow_emission_order() {
        let mut ctx = context(false);
        RenderPhase.run(&mut ctx).unwrap();

        let plan = ctx.plan("Widgets").unwrap();
        let names: Vec<_> = plan.enums.iter().map(|e| e.fullname.as_str()).collect();
        assert_eq!(names, vec!["QAction::Priority", "QWidget::RenderFlag"]);
        assert!(plan.enums[1].text.contains("C.QWidget__RenderFlag_DrawChildren_Type()"));
        assert!(ctx.plan("Gui").unwrap().enums.is_empty());
    }

    #[test]
    fn test_stub_setting_reaches_renderer() {
        let mut ctx = context(true);
        RenderPhase.run(&mut ctx).unwrap();

        let text = &ctx.plan("Widgets").unwrap().enums[1].text;
        assert!(text.contains("QWidget__DrawChildren QWidget__RenderFlag = QWidget__RenderFlag(0)"));
    }
}
