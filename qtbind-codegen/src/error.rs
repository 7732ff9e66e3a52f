//! Errors raised by the generator core.
//!
//! Graph-level problems (`ConfigurationError`, `CycleError`) mean the input
//! metadata is corrupt. `UnsupportedShapeError` is raised per type string
//! and the caller decides how severe it is.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

use miette::Diagnostic;
use thiserror::Error;

/// The module registry is inconsistent or was asked about a module it does
/// not define.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum ConfigurationError {
    #[error("unknown module '{name}'")]
    #[diagnostic(
        code(qtbind::unknown_module),
        help("module names are case sensitive, e.g. 'Core', 'Widgets', 'WebEngine'")
    )]
    UnknownModule { name: String },

    #[error("hard module dependency cycle: {}", path.join(" -> "))]
    #[diagnostic(
        code(qtbind::module_cycle),
        help("one of these edges has to be declared as a soft requirement")
    )]
    DependencyCycle { path: Vec<String> },
}

/// Class ordering could not make progress because of a base-class cycle.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
#[error("inheritance cycle in module '{module}' between {}", members.join(", "))]
#[diagnostic(
    code(qtbind::inheritance_cycle),
    help("break the cycle by fixing the `base` of one of the listed classes")
)]
pub struct CycleError {
    pub module: String,
    /// Classes that lie on a cycle, sorted by name.
    pub members: Vec<String>,
    /// Classes that are not on a cycle but inherit from one, sorted by name.
    pub blocked: Vec<String>,
}

impl CycleError {
    /// Every class that could not be placed.
    pub fn stuck(&self) -> impl Iterator<Item = &str> {
        self.members
            .iter()
            .chain(self.blocked.iter())
            .map(String::as_str)
    }
}

/// A type string has a container shape the normalizer does not handle.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
#[error("unsupported type shape '{ty}': {reason}")]
#[diagnostic(code(qtbind::unsupported_shape))]
pub struct UnsupportedShapeError {
    /// The type string as it was handed in.
    pub ty: String,
    pub reason: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_error_message() {
        let err = CycleError {
            module: "Widgets".into(),
            members: vec!["X".into(), "Y".into()],
            blocked: vec!["Z".into()],
        };
        assert_eq!(
            err.to_string(),
            "inheritance cycle in module 'Widgets' between X, Y"
        );
        assert_eq!(err.stuck().collect::<Vec<_>>(), vec!["X", "Y", "Z"]);
    }

    #[test]
    fn test_unknown_module_message() {
        let err = ConfigurationError::UnknownModule {
            name: "Kore".into(),
        };
        assert_eq!(err.to_string(), "unknown module 'Kore'");
    }
}
