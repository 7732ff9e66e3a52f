//! State shared by the pipeline phases.

use indexmap::IndexMap;
use qtbind_core::Platform;
use qtbind_ir::Catalog;
use serde::Serialize;

use super::diagnostic::{Diagnostic, Severity};
use crate::modules::ModuleGraph;

/// Knobs of one generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationSettings {
    pub platform: Platform,
    /// Build without a native backend; native-backed enum values become `0`.
    pub stub: bool,
    /// Emit classes after their in-module bases instead of lexically.
    pub inheritance_order: bool,
}

impl GenerationSettings {
    pub fn new(platform: Platform) -> Self {
        Self {
            platform,
            stub: false,
            inheritance_order: false,
        }
    }

    pub fn stub(mut self, stub: bool) -> Self {
        self.stub = stub;
        self
    }

    pub fn inheritance_order(mut self, enabled: bool) -> Self {
        self.inheritance_order = enabled;
        self
    }
}

/// One rendered enum block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedEnum {
    /// The class the enum was declared on.
    pub class: String,
    pub fullname: String,
    pub text: String,
}

/// Everything generated for one module.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ModulePlan {
    pub module: String,
    /// Emission order; `None` when ordering failed for this module.
    pub classes: Option<Vec<String>>,
    pub enums: Vec<RenderedEnum>,
}

impl ModulePlan {
    pub fn new(module: impl Into<String>) -> Self {
        Self {
            module: module.into(),
            ..Self::default()
        }
    }

    pub fn is_ordered(&self) -> bool {
        self.classes.is_some()
    }
}

/// Context passed through all pipeline phases.
#[derive(Debug)]
pub struct GenerationContext {
    pub catalog: Catalog,
    pub settings: GenerationSettings,
    pub graph: ModuleGraph,
    /// Active modules in registry order (populated by `ResolvePhase`).
    pub modules: Vec<String>,
    /// Per-module results keyed by module name, in `modules` order.
    pub plans: IndexMap<String, ModulePlan>,
    pub diagnostics: Vec<Diagnostic>,
}

impl GenerationContext {
    pub fn new(catalog: Catalog, settings: GenerationSettings, graph: ModuleGraph) -> Self {
        Self {
            catalog,
            settings,
            graph,
            modules: Vec::new(),
            plans: IndexMap::new(),
            diagnostics: Vec::new(),
        }
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_error())
    }

    pub fn has_warnings(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_warning())
    }

    pub fn error_count(&self) -> usize {
        self.errors().count()
    }

    pub fn warning_count(&self) -> usize {
        self.warnings().count()
    }

    pub fn add_diagnostic(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d.severity, Severity::Error))
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d.severity, Severity::Warning))
    }

    /// Diagnostics concerning `module`.
    pub fn diagnostics_for<'a>(&'a self, module: &str) -> impl Iterator<Item = &'a Diagnostic> {
        self.diagnostics
            .iter()
            .filter(move |d| d.module.as_deref() == Some(module))
    }

    /// The plan for `module`, created on first access.
    pub fn plan_mut(&mut self, module: &str) -> &mut ModulePlan {
        self.plans
            .entry(module.to_string())
            .or_insert_with(|| ModulePlan::new(module))
    }

    pub fn plan(&self, module: &str) -> Option<&ModulePlan> {
        self.plans.get(module)
    }
}

#[cfg(test)]
mod tests {
    use qtbind_core::{Os, Version};

    use super::*;

    fn make_context() -> GenerationContext {
        let settings = GenerationSettings::new(Platform::new(Os::Linux, Version::DEFAULT_QT));
        GenerationContext::new(Catalog::new(), settings, ModuleGraph::standard())
    }

    #[test]
    fn test_context_creation() {
        let ctx = make_context();

        assert!(ctx.modules.is_empty());
        assert!(ctx.plans.is_empty());
        assert!(ctx.diagnostics.is_empty());
        assert!(!ctx.settings.stub);
        assert!(!ctx.settings.inheritance_order);
    }

    #[test]
    fn test_context_diagnostics() {
        let mut ctx = make_context();

        ctx.add_diagnostic(Diagnostic::error("order", "cycle").in_module("Widgets"));
        ctx.add_diagnostic(Diagnostic::warning("resolve", "unknown base"));
        ctx.add_diagnostic(Diagnostic::info("resolve", "info"));

        assert!(ctx.has_errors());
        assert!(ctx.has_warnings());
        assert_eq!(ctx.error_count(), 1);
        assert_eq!(ctx.warning_count(), 1);
        assert_eq!(ctx.diagnostics_for("Widgets").count(), 1);
        assert_eq!(ctx.diagnostics_for("Core").count(), 0);
    }

    #[test]
    fn test_plan_mut_creates_once() {
        let mut ctx = make_context();

        ctx.plan_mut("Core").classes = Some(vec!["QObject".into()]);
        ctx.plan_mut("Core").enums.clear();

        assert_eq!(ctx.plans.len(), 1);
        assert!(ctx.plan("Core").is_some_and(ModulePlan::is_ordered));
        assert!(ctx.plan("Gui").is_none());
    }
}
