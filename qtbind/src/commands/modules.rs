use clap::Args;
use eyre::Result;
use qtbind_codegen::modules::{ModuleGraph, Strength};
use qtbind_manifest::BuildConfig;

use super::BuildArgs;

#[derive(Args)]
pub struct ModulesCommand {
    #[command(flatten)]
    pub build: BuildArgs,

    /// Also list modules that are not generated for the platform
    #[arg(long)]
    pub all: bool,
}

impl ModulesCommand {
    pub fn run(&self) -> Result<()> {
        // The registry does not depend on the catalog, so a missing manifest
        // only means default build settings.
        let build = if self.build.manifest.exists() {
            self.build.open().manifest().build.clone()
        } else {
            BuildConfig::default()
        };
        let platform = self.build.build_config(&build).platform();

        let graph = ModuleGraph::global();
        graph.check_acyclic()?;
        let active = graph.active_modules(&platform);

        println!("Modules for {}:", platform);
        for module in graph.iter().filter(|m| m.is_generated()) {
            let is_active = active.contains(&module.name());
            if !is_active && !self.all {
                continue;
            }

            let requires: Vec<String> = module
                .requirements()
                .map(|(name, strength)| match strength {
                    Strength::Hard => name.to_string(),
                    Strength::Soft => format!("({})", name),
                })
                .collect();

            let marker = if is_active { " " } else { "-" };
            if requires.is_empty() {
                println!("  {} {}", marker, module.name());
            } else {
                println!("  {} {} -> {}", marker, module.name(), requires.join(", "));
            }
        }

        Ok(())
    }
}

