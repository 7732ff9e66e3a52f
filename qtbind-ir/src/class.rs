//! Class and function records.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::EnumRecord;

/// A class of the wrapped library.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassRecord {
    /// Globally unique class name (e.g. `QWidget`).
    pub name: String,
    /// Owning module (e.g. `Widgets`).
    pub module: String,
    /// Direct base class, if any. May name a class in another module, a
    /// class in the no-codegen module, or a class the catalog never saw.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base: Option<String>,
    #[serde(default)]
    pub functions: Vec<FunctionRecord>,
    #[serde(default)]
    pub enums: Vec<EnumRecord>,
}

impl ClassRecord {
    pub fn new(name: impl Into<String>, module: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            module: module.into(),
            base: None,
            functions: Vec::new(),
            enums: Vec::new(),
        }
    }

    /// Builder-style base assignment, mostly for tests and tooling.
    pub fn with_base(mut self, base: impl Into<String>) -> Self {
        self.base = Some(base.into());
        self
    }

    pub fn with_function(mut self, function: FunctionRecord) -> Self {
        self.functions.push(function);
        self
    }

    pub fn with_enum(mut self, record: EnumRecord) -> Self {
        self.enums.push(record);
        self
    }
}

/// What role a function plays on its class.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FunctionKind {
    #[default]
    Plain,
    Constructor,
    CopyConstructor,
    MoveConstructor,
    Destructor,
    Signal,
    Slot,
    Getter,
    Setter,
}

impl FunctionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FunctionKind::Plain => "plain",
            FunctionKind::Constructor => "constructor",
            FunctionKind::CopyConstructor => "copy-constructor",
            FunctionKind::MoveConstructor => "move-constructor",
            FunctionKind::Destructor => "destructor",
            FunctionKind::Signal => "signal",
            FunctionKind::Slot => "slot",
            FunctionKind::Getter => "getter",
            FunctionKind::Setter => "setter",
        }
    }
}

/// A function parameter with its raw native type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    #[serde(default)]
    pub name: String,
    pub value: String,
}

impl Parameter {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// A member function of a class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionRecord {
    pub name: String,
    #[serde(default)]
    pub kind: FunctionKind,
    /// Raw native return type.
    #[serde(default = "void")]
    pub output: String,
    #[serde(default)]
    pub parameters: Vec<Parameter>,
    #[serde(default, rename = "static")]
    pub is_static: bool,
}

fn void() -> String {
    "void".to_string()
}

impl FunctionRecord {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: FunctionKind::Plain,
            output: void(),
            parameters: Vec::new(),
            is_static: false,
        }
    }
}

impl fmt::Display for FunctionRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_static {
            write!(f, "static ")?;
        }
        write!(f, "{} {}(", self.output, self.name)?;
        for (i, param) in self.parameters.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            if param.name.is_empty() {
                write!(f, "{}", param.value)?;
            } else {
                write!(f, "{} {}", param.value, param.name)?;
            }
        }
        write!(f, ") [{}]", self.kind.as_str())
    }
}
