// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

//! Metadata manifest for the qtbind generator.
//!
//! A manifest (`qtbind.toml`) carries the pre-extracted surface of the
//! wrapped library, one table per class, plus the `[build]` settings of the
//! generation run. Parsing validates the records and produces a
//! [`qtbind_ir::Catalog`].

mod build;
mod error;
mod manifest;

pub use build::BuildConfig;
pub use error::{Error, Result, SourceContext};
pub use manifest::{ClassEntry, Manifest, QtbindToml, parse_manifest};
