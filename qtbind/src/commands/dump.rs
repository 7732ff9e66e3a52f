use std::path::PathBuf;

use clap::Args;
use eyre::{Context, Result};
use qtbind_codegen::dump::write_dump;

use super::BuildArgs;

#[derive(Args)]
pub struct DumpCommand {
    #[command(flatten)]
    pub build: BuildArgs,

    /// Output directory for the dump
    #[arg(short, long, default_value = "dump")]
    pub out: PathBuf,
}

impl DumpCommand {
    pub fn run(&self) -> Result<()> {
        let qtbind_toml = self.build.open();
        let catalog = qtbind_toml.manifest().catalog();

        let summary = write_dump(&catalog, &self.out)
            .wrap_err_with(|| format!("failed to dump into '{}'", self.out.display()))?;

        println!(
            "✓ dumped {} class{} to {} ({} unchanged)",
            summary.written + summary.unchanged,
            if summary.written + summary.unchanged == 1 { "" } else { "es" },
            self.out.display(),
            summary.unchanged
        );
        Ok(())
    }
}
