//! Manifest types and parsing for qtbind.toml files.

mod file;
mod parse;
mod validate;

use indexmap::IndexMap;
pub use file::QtbindToml;
pub use parse::parse_manifest;
use qtbind_ir::{Catalog, ClassRecord, EnumRecord, FunctionRecord};
use serde::Deserialize;

use crate::BuildConfig;

/// Root manifest for qtbind.toml
#[derive(Debug, Clone, Deserialize)]
pub struct Manifest {
    /// Generation settings
    #[serde(default)]
    pub build: BuildConfig,

    /// Classes keyed by their unique name
    #[serde(default)]
    pub classes: IndexMap<String, ClassEntry>,
}

/// One `[classes.<Name>]` table.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClassEntry {
    /// Optional restatement of the table key; must match it when present.
    pub name: Option<String>,

    pub module: String,

    pub base: Option<String>,

    #[serde(default)]
    pub functions: Vec<FunctionRecord>,

    #[serde(default)]
    pub enums: Vec<EnumRecord>,
}

impl Manifest {
    /// Build the class catalog from the manifest tables.
    pub fn catalog(&self) -> Catalog {
        self.classes
            .iter()
            .map(|(name, entry)| ClassRecord {
                name: name.clone(),
                module: entry.module.clone(),
                base: entry.base.clone(),
                functions: entry.functions.clone(),
                enums: entry.enums.clone(),
            })
            .collect()
    }

    pub fn has_class(&self, name: &str) -> bool {
        self.classes.contains_key(name)
    }
}
