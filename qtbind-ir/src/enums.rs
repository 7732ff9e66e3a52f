//! Enumeration records.

use std::fmt;

use serde::{Deserialize, Serialize};

/// An enumeration declared inside a class or namespace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumRecord {
    /// Owner-scoped name, e.g. `Qt::AlignmentFlag`.
    pub fullname: String,
    #[serde(default)]
    pub values: Vec<EnumValueRecord>,
    /// Set when the values legitimately differ between platforms or builds,
    /// so they cannot be emitted as compile-time constants.
    #[serde(default)]
    pub no_const: bool,
}

impl EnumRecord {
    pub fn new(fullname: impl Into<String>) -> Self {
        Self {
            fullname: fullname.into(),
            values: Vec::new(),
            no_const: false,
        }
    }

    pub fn with_value(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.push(EnumValueRecord::new(name, value));
        self
    }

    pub fn with_no_const(mut self) -> Self {
        self.no_const = true;
        self
    }

    /// Outermost scope of the enum (`Qt` for `Qt::AlignmentFlag`).
    pub fn owner(&self) -> &str {
        self.fullname.split("::").next().unwrap_or(&self.fullname)
    }

    /// Unscoped enum name (`AlignmentFlag` for `Qt::AlignmentFlag`).
    pub fn simple_name(&self) -> &str {
        self.fullname.rsplit("::").next().unwrap_or(&self.fullname)
    }

    /// Flattened name usable as a host type (`Qt__AlignmentFlag`).
    pub fn host_name(&self) -> String {
        self.fullname.replace(':', "_")
    }

    /// Whether a value with this name is declared on the enum.
    pub fn has_value(&self, name: &str) -> bool {
        self.values.iter().any(|v| v.name == name)
    }
}

impl fmt::Display for EnumRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.fullname)?;
        if self.no_const {
            write!(f, " (no-const)")?;
        }
        write!(f, " {{")?;
        for (i, value) in self.values.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, " {} = {}", value.name, value.value)?;
        }
        write!(f, " }}")
    }
}

/// A single enumerator and its raw native value expression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumValueRecord {
    pub name: String,
    /// Either one native symbol/literal or several joined by `|`.
    pub value: String,
}

impl EnumValueRecord {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// The OR'd terms of the value expression, trimmed.
    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.value
            .split('|')
            .map(str::trim)
            .filter(|term| !term.is_empty())
    }

    /// True when the value is a bit-flag composition of several symbols.
    pub fn is_composite(&self) -> bool {
        self.terms().nth(1).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enum_names() {
        let record = EnumRecord::new("QStyle::StateFlag");
        assert_eq!(record.owner(), "QStyle");
        assert_eq!(record.simple_name(), "StateFlag");
        assert_eq!(record.host_name(), "QStyle__StateFlag");
    }

    #[test]
    fn test_unscoped_enum_names() {
        let record = EnumRecord::new("Loose");
        assert_eq!(record.owner(), "Loose");
        assert_eq!(record.simple_name(), "Loose");
        assert_eq!(record.host_name(), "Loose");
    }

    #[test]
    fn test_value_terms() {
        let single = EnumValueRecord::new("AlignLeft", "0x0001");
        assert_eq!(single.terms().collect::<Vec<_>>(), vec!["0x0001"]);
        assert!(!single.is_composite());

        let composite = EnumValueRecord::new("AlignCenter", "AlignVCenter | AlignHCenter");
        assert_eq!(
            composite.terms().collect::<Vec<_>>(),
            vec!["AlignVCenter", "AlignHCenter"]
        );
        assert!(composite.is_composite());
    }

    #[test]
    fn test_enum_display() {
        let record = EnumRecord::new("Qt::Orientation")
            .with_value("Horizontal", "0x1")
            .with_value("Vertical", "0x2");
        assert_eq!(
            record.to_string(),
            "Qt::Orientation { Horizontal = 0x1, Vertical = 0x2 }"
        );
    }

    #[test]
    fn test_no_const_defaults_false() {
        let record: EnumRecord = toml::from_str(r#"fullname = "Qt::Key""#).unwrap();
        assert!(!record.no_const);
        assert!(record.values.is_empty());
    }
}
