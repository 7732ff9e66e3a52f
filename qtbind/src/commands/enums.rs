use clap::Args;
use eyre::{Result, bail};
use qtbind_codegen::enums::{EnumRenderer, GoSymbolConverter};

use super::BuildArgs;

#[derive(Args)]
pub struct EnumsCommand {
    /// Class whose enums to render, e.g. `QWidget`
    pub class: String,

    #[command(flatten)]
    pub build: BuildArgs,
}

impl EnumsCommand {
    pub fn run(&self) -> Result<()> {
        let qtbind_toml = self.build.open();
        let manifest = qtbind_toml.manifest();
        let settings = self.build.settings(&manifest.build);
        let catalog = manifest.catalog();

        let Some(class) = catalog.get(&self.class) else {
            bail!(
                "class '{}' is not defined in {}",
                self.class,
                qtbind_toml.path().display()
            );
        };

        let renderer = EnumRenderer::new(&GoSymbolConverter).stub(settings.stub);
        let blocks: Vec<String> = class.enums.iter().map(|e| renderer.render(e)).collect();
        if blocks.is_empty() {
            eprintln!("{} declares no enums", class.name);
        } else {
            println!("{}", blocks.join("\n\n"));
        }
        Ok(())
    }
}
