mod check;
mod dump;
mod enums;
mod modules;
mod order;
mod shape;

use std::path::PathBuf;

use check::CheckCommand;
use clap::{Args, Parser, Subcommand};
use dump::DumpCommand;
use enums::EnumsCommand;
use eyre::Result;
use modules::ModulesCommand;
use order::OrderCommand;
use qtbind_codegen::pipeline::GenerationSettings;
use qtbind_core::{Os, Version};
use qtbind_manifest::{BuildConfig, QtbindToml};
use shape::TypeCommand;

/// Extension trait for exiting on manifest errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for qtbind_manifest::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => exit_with(*e),
        }
    }
}

/// Print a diagnostic through miette and exit with status 1.
pub(crate) fn exit_with(diagnostic: impl miette::Diagnostic + Send + Sync + 'static) -> ! {
    eprintln!("{:?}", miette::Report::new(diagnostic));
    std::process::exit(1);
}

#[derive(Parser)]
#[command(name = "qtbind")]
#[command(version)]
#[command(about = "Generate Go bindings for Qt from a metadata manifest")]
pub(crate) struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Check(cmd) => cmd.run(),
            Commands::Modules(cmd) => cmd.run(),
            Commands::Order(cmd) => cmd.run(),
            Commands::Enums(cmd) => cmd.run(),
            Commands::Type(cmd) => cmd.run(),
            Commands::Dump(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Validate qtbind.toml and run the generation pipeline
    Check(CheckCommand),

    /// List the modules generated for the target platform
    Modules(ModulesCommand),

    /// Print the emission order of a module's classes
    Order(OrderCommand),

    /// Print the rendered enum blocks of a class
    Enums(EnumsCommand),

    /// Show how a type expression is normalized and classified
    Type(TypeCommand),

    /// Write the per-class metadata dump
    Dump(DumpCommand),
}

/// Manifest location and `[build]` overrides shared by most commands.
#[derive(Args)]
pub(crate) struct BuildArgs {
    /// Path to qtbind.toml (defaults to ./qtbind.toml)
    #[arg(short, long, default_value = "qtbind.toml")]
    pub manifest: PathBuf,

    /// Target OS, overrides `build.os`
    #[arg(long)]
    pub os: Option<Os>,

    /// Toolkit version as X.Y.Z, overrides `build.qt_version`
    #[arg(long)]
    pub qt_version: Option<Version>,

    /// Generate without a native backend
    #[arg(long)]
    pub stub: bool,

    /// Order classes by inheritance
    #[arg(long)]
    pub moc: bool,
}

impl BuildArgs {
    /// Open the manifest, exiting with a report if it is invalid.
    pub fn open(&self) -> QtbindToml {
        QtbindToml::open(&self.manifest).unwrap_or_exit()
    }

    /// `build` with the command line overrides applied.
    pub fn build_config(&self, build: &BuildConfig) -> BuildConfig {
        BuildConfig {
            os: self.os.unwrap_or(build.os),
            qt_version: self.qt_version.unwrap_or(build.qt_version),
            stub: self.stub || build.stub,
            moc: self.moc || build.moc,
        }
    }

    pub fn settings(&self, build: &BuildConfig) -> GenerationSettings {
        let build = self.build_config(build);
        GenerationSettings::new(build.platform())
            .stub(build.stub)
            .inheritance_order(build.moc)
    }
}
