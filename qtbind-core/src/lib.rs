//! Core types shared across the qtbind workspace.
//!
//! This crate holds the small vocabulary every other crate agrees on:
//! toolkit versions, target platforms and generated files.

mod file;
mod platform;
mod version;

pub use file::{File, WriteResult};
pub use platform::{Os, Platform};
pub use version::Version;
