//! Metadata records for the wrapped library surface.
//!
//! These types are what the metadata front end hands to the generator core:
//! every class with its owning module, base class, functions and enums.
//!
//! # Architecture
//!
//! ```text
//! qtbind.toml → qtbind-manifest (parsing) → qtbind-ir (Catalog) → qtbind-codegen
//! ```
//!
//! The records are plain data. Ordering, normalization and rendering live in
//! `qtbind-codegen`.

mod catalog;
mod class;
mod enums;

pub use catalog::Catalog;
pub use class::{ClassRecord, FunctionKind, FunctionRecord, Parameter};
pub use enums::{EnumRecord, EnumValueRecord};

/// Marker module for classes that only exist so others can name them as a
/// base. Classes in this module are never generated or ordered against.
pub const NO_CODEGEN_MODULE: &str = "moc";
