use clap::Args;
use eyre::Result;
use qtbind_codegen::{ModuleGraph, order};

use super::{BuildArgs, exit_with};

#[derive(Args)]
pub struct OrderCommand {
    /// Module whose classes to order, e.g. `Widgets`
    pub module: String,

    #[command(flatten)]
    pub build: BuildArgs,
}

impl OrderCommand {
    pub fn run(&self) -> Result<()> {
        ModuleGraph::global().module(&self.module)?;

        let qtbind_toml = self.build.open();
        let manifest = qtbind_toml.manifest();
        let settings = self.build.settings(&manifest.build);
        let catalog = manifest.catalog();

        let classes = match order(&catalog, &self.module, settings.inheritance_order) {
            Ok(classes) => classes,
            Err(err) => exit_with(err),
        };

        for (i, class) in classes.iter().enumerate() {
            match catalog.get(class).and_then(|c| c.base.as_deref()) {
                Some(base) => println!("{:>4}. {} : {}", i + 1, class, base),
                None => println!("{:>4}. {}", i + 1, class),
            }
        }
        Ok(())
    }
}
