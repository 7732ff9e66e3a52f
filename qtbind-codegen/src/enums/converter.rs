//! Native enum symbol to host token conversion.

use qtbind_ir::EnumRecord;

/// A converted enum value term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostToken {
    pub text: String,
    /// The token reads its value from the native backend at runtime, so it
    /// has no meaning in a stub build.
    pub native: bool,
}

impl HostToken {
    pub fn constant(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            native: false,
        }
    }

    pub fn native(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            native: true,
        }
    }
}

/// Converts one native symbol of an enum value expression into a host token.
pub trait SymbolConverter {
    /// Convert `symbol`, one OR'd term of the value named `value_name` of
    /// `record`.
    fn convert(&self, record: &EnumRecord, value_name: &str, symbol: &str) -> HostToken;
}

/// Converter for the Go binding layer.
///
/// - integer literals pass through without C suffixes,
/// - scoped symbols (`Qt::AlignLeft`) become `Qt__AlignLeft`,
/// - siblings in the same enum become `<Owner>__<Name>`,
/// - anything else is fetched from the native side through a cgo getter.
#[derive(Debug, Clone, Copy, Default)]
pub struct GoSymbolConverter;

impl SymbolConverter for GoSymbolConverter {
    fn convert(&self, record: &EnumRecord, value_name: &str, symbol: &str) -> HostToken {
        let symbol = symbol.trim();

        if let Some(literal) = integer_literal(symbol) {
            return HostToken::constant(literal);
        }

        if let Some((scope, name)) = symbol.rsplit_once("::") {
            let owner = scope.split("::").next().unwrap_or(scope);
            return HostToken::constant(format!("{}__{}", owner, name));
        }

        if record.has_value(symbol) {
            return HostToken::constant(format!("{}__{}", record.owner(), symbol));
        }

        HostToken::native(format!("C.{}_{}_Type()", record.host_name(), value_name))
    }
}

/// The literal without integer suffixes, if `symbol` is an integer literal.
fn integer_literal(symbol: &str) -> Option<&str> {
    let literal = symbol.trim_end_matches(['u', 'U', 'l', 'L']);
    let digits = literal.strip_prefix('-').unwrap_or(literal);

    let valid = match digits
        .strip_prefix("0x")
        .or_else(|| digits.strip_prefix("0X"))
    {
        Some(hex) => !hex.is_empty() && hex.chars().all(|c| c.is_ascii_hexdigit()),
        None => !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit()),
    };

    valid.then_some(literal)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alignment() -> EnumRecord {
        EnumRecord::new("Qt::AlignmentFlag")
            .with_value("AlignLeft", "0x0001")
            .with_value("AlignHCenter", "0x0004")
            .with_value("AlignCenter", "AlignVCenter | AlignHCenter")
    }

    #[test]
    fn test_integer_literals_pass_through() {
        let record = alignment();
        let conv = GoSymbolConverter;
        assert_eq!(
            conv.convert(&record, "AlignLeft", "0x0001"),
            HostToken::constant("0x0001")
        );
        assert_eq!(conv.convert(&record, "X", "-1"), HostToken::constant("-1"));
        assert_eq!(conv.convert(&record, "X", "42u"), HostToken::constant("42"));
        assert_eq!(
            conv.convert(&record, "X", "0xffffffffUL"),
            HostToken::constant("0xffffffff")
        );
    }

    #[test]
    fn test_scoped_symbols() {
        let record = alignment();
        let conv = GoSymbolConverter;
        assert_eq!(
            conv.convert(&record, "X", "Qt::AlignTop"),
            HostToken::constant("Qt__AlignTop")
        );
        assert_eq!(
            conv.convert(&record, "X", "QStyle::Sub::State_On"),
            HostToken::constant("QStyle__State_On")
        );
    }

    #[test]
    fn test_sibling_symbols() {
        let record = alignment();
        assert_eq!(
            GoSymbolConverter.convert(&record, "AlignCenter", " AlignHCenter "),
            HostToken::constant("Qt__AlignHCenter")
        );
    }

    #[test]
    fn test_unresolvable_symbols_are_native() {
        let record = alignment();
        let token = GoSymbolConverter.convert(&record, "AlignCenter", "AlignVCenter");
        assert!(token.native);
        assert_eq!(token.text, "C.Qt__AlignmentFlag_AlignCenter_Type()");
    }

    #[test]
    fn test_not_integer_literals() {
        assert_eq!(integer_literal(""), None);
        assert_eq!(integer_literal("0x"), None);
        assert_eq!(integer_literal("1 << 3"), None);
        assert_eq!(integer_literal("~0"), None);
        assert_eq!(integer_literal("Key_A"), None);
    }
}
