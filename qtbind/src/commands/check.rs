use clap::Args;
use eyre::{Context, Result};
use qtbind_codegen::pipeline::{Diagnostic, ModulePlan, Pipeline, Severity};
use qtbind_core::Platform;
use serde::Serialize;

use super::BuildArgs;

#[derive(Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub build: BuildArgs,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    manifest: String,
    platform: Platform,
    valid: bool,
    modules: Vec<&'a ModulePlan>,
    diagnostics: &'a [Diagnostic],
}

impl CheckCommand {
    pub fn run(&self) -> Result<()> {
        let qtbind_toml = self.build.open();
        let manifest = qtbind_toml.manifest();
        let settings = self.build.settings(&manifest.build);
        let platform = settings.platform;

        let ctx = Pipeline::new(settings)
            .run(manifest.catalog())
            .wrap_err("Generation pipeline failed")?;

        if self.json {
            let report = JsonReport {
                manifest: qtbind_toml.path().display().to_string(),
                platform,
                valid: !ctx.has_errors(),
                modules: ctx.plans.values().collect(),
                diagnostics: &ctx.diagnostics,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
            if ctx.has_errors() {
                std::process::exit(1);
            }
            return Ok(());
        }

        for diag in &ctx.diagnostics {
            let module = diag
                .module
                .as_deref()
                .map(|m| format!("[{}]", m))
                .unwrap_or_default();
            match diag.severity {
                Severity::Error | Severity::Warning => {
                    eprintln!("{}{}: {}", diag.severity, module, diag.message);
                    if let Some(loc) = &diag.location {
                        eprintln!("  --> {}", loc);
                    }
                }
                Severity::Info => {
                    println!("info{}: {}", module, diag.message);
                    if let Some(loc) = &diag.location {
                        println!("  --> {}", loc);
                    }
                }
            }
        }

        if ctx.has_errors() {
            std::process::exit(1);
        }

        if ctx.has_warnings() {
            println!();
        }

        println!("✓ {} is valid for {}\n", qtbind_toml.path().display(), platform);

        let populated: Vec<&ModulePlan> = ctx
            .plans
            .values()
            .filter(|plan| plan.classes.as_ref().is_some_and(|c| !c.is_empty()))
            .collect();
        println!(
            "  {} module{} with classes:",
            populated.len(),
            if populated.len() == 1 { "" } else { "s" }
        );
        for plan in populated {
            let classes = plan.classes.as_ref().map_or(0, Vec::len);
            println!(
                "    {} ({} class{}, {} enum{})",
                plan.module,
                classes,
                if classes == 1 { "" } else { "es" },
                plan.enums.len(),
                if plan.enums.len() == 1 { "" } else { "s" }
            );
        }

        Ok(())
    }
}
