use clap::Args;
use eyre::Result;
use qtbind_codegen::{TypeShape, classify, normalize, sanitize};

use super::exit_with;

#[derive(Args)]
pub struct TypeCommand {
    /// Raw type expression, e.g. "const QList<QObject *> &"
    pub expr: String,

    /// Parameter name to sanitize against the type
    #[arg(long, default_value = "")]
    pub name: String,
}

impl TypeCommand {
    pub fn run(&self) -> Result<()> {
        let shape = match classify(&self.expr) {
            Ok(shape) => shape,
            Err(err) => exit_with(err),
        };

        println!("normalized: {}", normalize(&self.expr));
        match &shape {
            TypeShape::Scalar(name) => println!("shape:      scalar {}", name),
            TypeShape::Sequence { container, element } => {
                println!("shape:      sequence {}", container);
                println!("element:    {}", element);
            }
            TypeShape::Map {
                container,
                key,
                value,
            } => {
                println!("shape:      map {}", container);
                println!("key:        {}", key);
                println!("value:      {}", value);
            }
        }
        println!("identifier: {}", sanitize(&self.name, &self.expr));
        Ok(())
    }
}
