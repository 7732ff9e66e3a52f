//! Enum constant block synthesis.
//!
//! Every enum of the wrapped library becomes a named integer type plus one
//! constant per value:
//!
//! ```text
//! //go:generate stringer -type=Qt__AlignmentFlag
//! //Qt::AlignmentFlag
//! type Qt__AlignmentFlag int64
//! const (
//! Qt__AlignLeft Qt__AlignmentFlag = Qt__AlignmentFlag(0x0001)
//! )
//! ```

mod converter;

use std::fmt::Write;

pub use converter::{GoSymbolConverter, HostToken, SymbolConverter};
use qtbind_ir::{EnumRecord, EnumValueRecord};

/// Values that differ between platforms and are left out of generated
/// blocks.
pub const EXCLUDED_VALUES: &[&str] = &["ByteOrder"];

/// Enums whose simple name contains this are rendered as variables.
const MUTABLE_NAME_PATTERN: &str = "Style";

/// Whether `record` has to be bound as variables instead of constants.
pub fn needs_mutable_binding(record: &EnumRecord) -> bool {
    record.no_const || record.simple_name().contains(MUTABLE_NAME_PATTERN)
}

/// Renders enum records into host constant blocks.
pub struct EnumRenderer<'a> {
    converter: &'a dyn SymbolConverter,
    stub: bool,
}

impl<'a> EnumRenderer<'a> {
    pub fn new(converter: &'a dyn SymbolConverter) -> Self {
        Self {
            converter,
            stub: false,
        }
    }

    /// Render for a build without a native backend.
    pub fn stub(mut self, stub: bool) -> Self {
        self.stub = stub;
        self
    }

    /// Host expression for one value, OR-composing its terms.
    ///
    /// In stub mode a single native-backed term turns the whole expression
    /// into `0`.
    pub fn value_expression(&self, record: &EnumValueRecord, owner: &EnumRecord) -> String {
        let tokens: Vec<HostToken> = record
            .terms()
            .map(|term| self.converter.convert(owner, &record.name, term))
            .collect();

        if self.stub && tokens.iter().any(|t| t.native) {
            tracing::trace!(
                value = %record.name,
                enum_name = %owner.fullname,
                "native-backed value collapsed to zero in stub mode"
            );
            return "0".to_string();
        }

        tokens
            .iter()
            .map(|t| t.text.as_str())
            .collect::<Vec<_>>()
            .join(" | ")
    }

    /// Render the full type and constant block for `record`.
    pub fn render(&self, record: &EnumRecord) -> String {
        let host = record.host_name();
        let keyword = if needs_mutable_binding(record) {
            "var"
        } else {
            "const"
        };

        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = writeln!(out, "//go:generate stringer -type={}", host);
        let _ = writeln!(out, "//{}", record.fullname);
        let _ = writeln!(out, "type {} int64", host);
        let _ = writeln!(out, "{} (", keyword);

        for value in &record.values {
            if EXCLUDED_VALUES.contains(&value.name.as_str()) {
                continue;
            }
            let _ = writeln!(
                out,
                "{}__{} {} = {}({})",
                record.owner(),
                value.name,
                host,
                host,
                self.value_expression(value, record)
            );
        }

        out.push(')');
        out
    }
}

/// Render `record` with the Go converter.
pub fn render(record: &EnumRecord, stub: bool) -> String {
    EnumRenderer::new(&GoSymbolConverter).stub(stub).render(record)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Converter that wraps symbols so tests can see each conversion.
    struct Tagging;

    impl SymbolConverter for Tagging {
        fn convert(&self, _record: &EnumRecord, _value: &str, symbol: &str) -> HostToken {
            if let Some(native) = symbol.strip_prefix('!') {
                HostToken::native(format!("C.{}", native))
            } else {
                HostToken::constant(format!("<{}>", symbol))
            }
        }
    }

    #[test]
    fn test_or_composition() {
        let record = EnumRecord::new("Qt::Flag").with_value("Both", "A | B");
        let renderer = EnumRenderer::new(&Tagging);
        assert_eq!(
            renderer.value_expression(&record.values[0], &record),
            "<A> | <B>"
        );
    }

    #[test]
    fn test_stub_collapses_whole_expression() {
        let record = EnumRecord::new("Qt::Flag").with_value("Mixed", "A | !B | C");
        let value = &record.values[0];

        let stub = EnumRenderer::new(&Tagging).stub(true);
        assert_eq!(stub.value_expression(value, &record), "0");

        let linked = EnumRenderer::new(&Tagging);
        assert_eq!(linked.value_expression(value, &record), "<A> | C.B | <C>");
    }

    #[test]
    fn test_stub_keeps_constant_expressions() {
        let record = EnumRecord::new("Qt::Flag").with_value("Plain", "A | B");
        let stub = EnumRenderer::new(&Tagging).stub(true);
        assert_eq!(stub.value_expression(&record.values[0], &record), "<A> | <B>");
    }

    #[test]
    fn test_mutable_binding_rules() {
        assert!(!needs_mutable_binding(&EnumRecord::new("Qt::AlignmentFlag")));
        assert!(needs_mutable_binding(&EnumRecord::new("QStyle::StyleHint")));
        assert!(needs_mutable_binding(&EnumRecord::new(
            "QSysInfo::WinVersion"
        ).with_no_const()));
        // Only the simple name counts.
        assert!(!needs_mutable_binding(&EnumRecord::new("QStyle::StateFlag")));
    }

    #[test]
    fn test_render_block() {
        let record = EnumRecord::new("Qt::AlignmentFlag")
            .with_value("AlignLeft", "0x0001")
            .with_value("AlignHCenter", "0x0004")
            .with_value("AlignVCenter", "0x0080")
            .with_value("AlignCenter", "AlignVCenter | AlignHCenter");

        insta::assert_snapshot!(render(&record, false), @r"
        //go:generate stringer -type=Qt__AlignmentFlag
        //Qt::AlignmentFlag
        type Qt__AlignmentFlag int64
        const (
        Qt__AlignLeft Qt__AlignmentFlag = Qt__AlignmentFlag(0x0001)
        Qt__AlignHCenter Qt__AlignmentFlag = Qt__AlignmentFlag(0x0004)
        Qt__AlignVCenter Qt__AlignmentFlag = Qt__AlignmentFlag(0x0080)
        Qt__AlignCenter Qt__AlignmentFlag = Qt__AlignmentFlag(Qt__AlignVCenter | Qt__AlignHCenter)
        )
        ");
    }

    #[test]
    fn test_render_skips_excluded_and_uses_var() {
        let record = EnumRecord::new("QSysInfo::Endian")
            .with_value("BigEndian", "0")
            .with_value("ByteOrder", "Q_BYTE_ORDER")
            .with_no_const();

        insta::assert_snapshot!(render(&record, false), @r"
        //go:generate stringer -type=QSysInfo__Endian
        //QSysInfo::Endian
        type QSysInfo__Endian int64
        var (
        QSysInfo__BigEndian QSysInfo__Endian = QSysInfo__Endian(0)
        )
        ");
    }

    #[test]
    fn test_render_stub_mode() {
        let record = EnumRecord::new("QStyle::PixelMetric")
            .with_value("PM_ButtonMargin", "0")
            .with_value("PM_CustomBase", "0xf0000000 | QStyle_PM_CustomBase");

        let out = render(&record, true);
        assert!(out.contains("var ("));
        assert!(out.contains("QStyle__PM_ButtonMargin QStyle__PixelMetric = QStyle__PixelMetric(0)"));
        assert!(out.contains("QStyle__PM_CustomBase QStyle__PixelMetric = QStyle__PixelMetric(0)\n"));

        let linked = render(&record, false);
        assert!(linked.contains(
            "QStyle__PixelMetric(0xf0000000 | C.QStyle__PixelMetric_PM_CustomBase_Type())"
        ));
    }
}
