//! Module dependency graph.
//!
//! The registry of wrapped library modules is immutable. Platform filtering
//! is a pure function over it that returns a derived view, so different
//! targets can be filtered from any thread.

use std::sync::LazyLock;

use indexmap::IndexMap;
use qtbind_core::{Os, Platform, Version};
use qtbind_ir::NO_CODEGEN_MODULE;

use crate::error::ConfigurationError;

/// How strongly a module depends on another.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strength {
    /// The dependent cannot be built without the dependency.
    Hard,
    /// Only needed for linking convenience (static iOS builds, bundled
    /// widgets). Soft edges may point back at the dependent.
    Soft,
}

/// When a module is generated at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applicability {
    Always,
    /// Only on the listed operating systems.
    OnlyOn(&'static [Os]),
    /// Only for exactly this toolkit release.
    OnlyVersion(Version),
}

impl Applicability {
    pub fn applies(&self, platform: &Platform) -> bool {
        match self {
            Applicability::Always => true,
            Applicability::OnlyOn(systems) => systems.contains(&platform.os),
            Applicability::OnlyVersion(version) => platform.qt_version == *version,
        }
    }
}

/// A module of the wrapped library.
#[derive(Debug, Clone)]
pub struct Module {
    name: String,
    requires: IndexMap<String, Strength>,
    applicability: Applicability,
    generated: bool,
}

impl Module {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            requires: IndexMap::new(),
            applicability: Applicability::Always,
            generated: true,
        }
    }

    pub fn hard<const N: usize>(self, names: [&str; N]) -> Self {
        self.requiring(names, Strength::Hard)
    }

    pub fn soft<const N: usize>(self, names: [&str; N]) -> Self {
        self.requiring(names, Strength::Soft)
    }

    fn requiring<const N: usize>(mut self, names: [&str; N], strength: Strength) -> Self {
        for name in names {
            self.requires.insert(name.to_string(), strength);
        }
        self
    }

    pub fn only(mut self, applicability: Applicability) -> Self {
        self.applicability = applicability;
        self
    }

    /// Registry entry that is looked up but never generated itself.
    pub fn pseudo(mut self) -> Self {
        self.generated = false;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn applicability(&self) -> Applicability {
        self.applicability
    }

    pub fn is_generated(&self) -> bool {
        self.generated
    }

    /// Direct requirements in declaration order.
    pub fn requirements(&self) -> impl Iterator<Item = (&str, Strength)> {
        self.requires.iter().map(|(name, s)| (name.as_str(), *s))
    }

    /// Direct hard requirements in declaration order.
    pub fn hard_requirements(&self) -> impl Iterator<Item = &str> {
        self.requirements()
            .filter(|(_, s)| *s == Strength::Hard)
            .map(|(name, _)| name)
    }
}

/// The module registry.
#[derive(Debug, Clone)]
pub struct ModuleGraph {
    modules: IndexMap<String, Module>,
}

static STANDARD: LazyLock<ModuleGraph> = LazyLock::new(ModuleGraph::standard);

impl ModuleGraph {
    pub fn new(modules: impl IntoIterator<Item = Module>) -> Self {
        Self {
            modules: modules
                .into_iter()
                .map(|m| (m.name.clone(), m))
                .collect(),
        }
    }

    /// Shared instance of [`ModuleGraph::standard`].
    pub fn global() -> &'static ModuleGraph {
        &STANDARD
    }

    /// The modules of the wrapped toolkit in generation order.
    pub fn standard() -> Self {
        use Applicability::{OnlyOn, OnlyVersion};

        const DESKTOP_UNIX: &[Os] = &[Os::Darwin, Os::Linux];

        Self::new([
            Module::new("Core").soft(["Widgets", "Gui", "Svg"]),
            Module::new("AndroidExtras").hard(["Core"]),
            Module::new("Gui").soft(["Widgets"]).hard(["Core"]),
            Module::new("Network").hard(["Core"]),
            Module::new("Xml").soft(["XmlPatterns"]).hard(["Core"]),
            Module::new("DBus").hard(["Core"]),
            Module::new("Nfc").hard(["Core"]),
            Module::new("Script").hard(["Core"]),
            Module::new("Sensors").hard(["Core"]),
            Module::new("Positioning").hard(["Core"]),
            Module::new("Widgets").hard(["Gui", "Core"]),
            Module::new("Sql").soft(["Widgets", "Gui"]).hard(["Core"]),
            Module::new("MacExtras")
                .hard(["Gui", "Core"])
                .only(OnlyOn(&[Os::Darwin])),
            Module::new("Qml").hard(["QuickControls2", "Network", "Core"]),
            Module::new("WebSockets").hard(["Network", "Core"]),
            Module::new("XmlPatterns").hard(["Network", "Core"]),
            Module::new("Bluetooth").hard(["Core"]),
            Module::new("WebChannel")
                .soft(["Network"])
                .hard(["Qml", "Core"]),
            Module::new("Svg").hard(["Widgets", "Gui", "Core"]),
            Module::new("Multimedia")
                .soft(["MultimediaWidgets", "Widgets"])
                .hard(["Network", "Gui", "Core"]),
            Module::new("Quick")
                .hard(["QuickControls2"])
                .soft(["QuickWidgets", "Widgets", "Network"])
                .hard(["Qml", "Gui", "Core"]),
            Module::new("Help")
                .soft(["Sql", "CLucene", "Network"])
                .hard(["Widgets", "Gui", "Core"]),
            Module::new("Location").hard(["Positioning", "Quick", "Gui", "Core"]),
            Module::new("ScriptTools")
                .soft(["Script", "Widgets"])
                .hard(["Core"]),
            Module::new("UiTools").hard(["Widgets", "Gui", "Core"]),
            Module::new("X11Extras")
                .hard(["Gui", "Core"])
                .only(OnlyOn(&[Os::Linux])),
            Module::new("WinExtras")
                .hard(["Widgets", "Gui", "Core"])
                .only(OnlyOn(&[Os::Windows])),
            Module::new("WebEngine")
                .soft(["Widgets", "WebEngineWidgets", "WebChannel", "Network"])
                .hard(["WebEngineCore", "Quick", "Gui", "Qml", "Core"])
                .only(OnlyOn(DESKTOP_UNIX)),
            Module::new("TestLib").soft(["Widgets", "Gui"]).hard(["Core"]),
            Module::new("SerialPort").hard(["Core"]),
            Module::new("SerialBus").hard(["Core"]),
            Module::new("PrintSupport").hard(["Widgets", "Gui", "Core"]),
            Module::new("Designer").hard(["UiPlugin", "Widgets", "Gui", "Xml", "Core"]),
            Module::new("Scxml").soft(["Network"]).hard(["Qml", "Core"]),
            Module::new("Gamepad").hard(["Gui", "Core"]),
            Module::new("Purchasing").hard(["Core"]),
            Module::new("DataVisualization").hard(["Gui", "Core"]),
            Module::new("Charts").hard(["Widgets", "Gui", "Core"]),
            Module::new("Speech")
                .hard(["Core"])
                .only(OnlyVersion(Version::new(5, 8, 0))),
            Module::new("QuickControls2")
                .soft(["Quick", "QuickWidgets", "Widgets", "Network", "Qml", "Gui"])
                .hard(["Core"]),
            Module::new("Sailfish").hard(["Core"]),
            Module::new("WebView")
                .hard(["Core"])
                .only(OnlyOn(DESKTOP_UNIX)),
            Module::new(NO_CODEGEN_MODULE).pseudo(),
            Module::new("build_ios")
                .soft([
                    "Core",
                    "Gui",
                    "Network",
                    "Sql",
                    "Xml",
                    "Nfc",
                    "Script",
                    "Sensors",
                    "Positioning",
                    "Widgets",
                    "Qml",
                    "WebSockets",
                    "XmlPatterns",
                    "Bluetooth",
                    "WebChannel",
                    "Svg",
                    "Multimedia",
                    "Quick",
                    "Help",
                    "Location",
                    "ScriptTools",
                    "MultimediaWidgets",
                    "UiTools",
                    "PrintSupport",
                    "WebView",
                ])
                .pseudo(),
        ])
    }

    pub fn get(&self, name: &str) -> Option<&Module> {
        self.modules.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.modules.contains_key(name)
    }

    /// All registry entries, pseudo modules included, in registry order.
    pub fn iter(&self) -> impl Iterator<Item = &Module> {
        self.modules.values()
    }

    /// Look up a module or fail with [`ConfigurationError::UnknownModule`].
    pub fn module(&self, name: &str) -> Result<&Module, ConfigurationError> {
        self.get(name)
            .ok_or_else(|| ConfigurationError::UnknownModule {
                name: name.to_string(),
            })
    }

    /// Direct requirements of `name`, hard and soft, in declaration order.
    pub fn required_modules(&self, name: &str) -> Result<Vec<&str>, ConfigurationError> {
        Ok(self.module(name)?.requirements().map(|(n, _)| n).collect())
    }

    /// Generated modules applicable to `platform`, in registry order.
    pub fn active_modules(&self, platform: &Platform) -> Vec<&str> {
        self.modules
            .values()
            .filter(|m| m.generated)
            .filter(|m| {
                let applies = m.applicability.applies(platform);
                if !applies {
                    tracing::debug!(module = %m.name, %platform, "module not applicable");
                }
                applies
            })
            .map(|m| m.name.as_str())
            .collect()
    }

    /// Verify that hard edges between registered modules form no cycle.
    ///
    /// Requirements naming unregistered libraries (e.g. `WebEngineCore`) are
    /// leaves and ignored here.
    pub fn check_acyclic(&self) -> Result<(), ConfigurationError> {
        #[derive(Clone, Copy, PartialEq)]
        enum Mark {
            Unvisited,
            InProgress,
            Done,
        }

        fn visit<'a>(
            graph: &'a ModuleGraph,
            name: &'a str,
            marks: &mut IndexMap<&'a str, Mark>,
            path: &mut Vec<&'a str>,
        ) -> Result<(), ConfigurationError> {
            match marks.get(name).copied() {
                Some(Mark::Done) | None => return Ok(()),
                Some(Mark::InProgress) => {
                    let start = path.iter().position(|n| *n == name).unwrap_or(0);
                    let mut cycle: Vec<String> =
                        path[start..].iter().map(|n| n.to_string()).collect();
                    cycle.push(name.to_string());
                    return Err(ConfigurationError::DependencyCycle { path: cycle });
                }
                Some(Mark::Unvisited) => {}
            }

            marks.insert(name, Mark::InProgress);
            path.push(name);
            if let Some(module) = graph.get(name) {
                for dep in module.hard_requirements() {
                    visit(graph, dep, marks, path)?;
                }
            }
            path.pop();
            marks.insert(name, Mark::Done);
            Ok(())
        }

        let mut marks: IndexMap<&str, Mark> = self
            .modules
            .keys()
            .map(|name| (name.as_str(), Mark::Unvisited))
            .collect();
        let mut path = Vec::new();
        for name in self.modules.keys() {
            visit(self, name, &mut marks, &mut path)?;
        }
        Ok(())
    }
}

/// Direct requirements of `name` in the standard registry.
pub fn required_modules(name: &str) -> Result<Vec<&'static str>, ConfigurationError> {
    ModuleGraph::global().required_modules(name)
}

/// Generated modules of the standard registry applicable to `platform`.
pub fn active_modules(platform: &Platform) -> Vec<&'static str> {
    ModuleGraph::global().active_modules(platform)
}
