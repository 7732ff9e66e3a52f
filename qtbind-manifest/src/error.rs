use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for qtbind-manifest operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source content and filename shared by the error factories.
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    pub fn src(&self) -> &str {
        &self.src
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Create a parse error from a toml error.
    pub fn parse_error(&self, source: toml::de::Error) -> Box<Error> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Parse {
            src: self.named_source(),
            span,
            source,
        })
    }

    /// Create a validation error, optionally pointing at a span.
    pub fn validation_error(
        &self,
        message: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::Validation {
            src: self.named_source(),
            span,
            message: message.into(),
        })
    }

    pub fn invalid_identifier_error(
        &self,
        name: impl Into<String>,
        context: impl Into<String>,
        reason: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::InvalidIdentifier {
            src: self.named_source(),
            span,
            name: name.into(),
            context: context.into(),
            reason: reason.into(),
        })
    }

    pub fn class_name_mismatch_error(
        &self,
        key: impl Into<String>,
        name: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::ClassNameMismatch {
            src: self.named_source(),
            span,
            key: key.into(),
            name: name.into(),
        })
    }

    pub fn unscoped_enum_error(
        &self,
        fullname: impl Into<String>,
        class: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::UnscopedEnum {
            src: self.named_source(),
            span,
            fullname: fullname.into(),
            class: class.into(),
        })
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(
        code(qtbind::io),
        help("pass the metadata manifest with --manifest <path>")
    )]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse manifest")]
    #[diagnostic(code(qtbind::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("{message}")]
    #[diagnostic(code(qtbind::validation_error))]
    Validation {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },

    #[error("invalid {context} name '{name}'")]
    #[diagnostic(
        code(qtbind::invalid_identifier),
        help("{reason}. Native identifiers use letters, numbers and underscores, starting with a letter or underscore.")
    )]
    InvalidIdentifier {
        #[source_code]
        src: NamedSource<String>,
        #[label("invalid identifier")]
        span: Option<SourceSpan>,
        name: String,
        context: String,
        reason: String,
    },

    #[error("class table '{key}' declares name '{name}'")]
    #[diagnostic(
        code(qtbind::class_name_mismatch),
        help("class names are catalog keys; drop the `name` field or make it match the table key")
    )]
    ClassNameMismatch {
        #[source_code]
        src: NamedSource<String>,
        #[label("declared here")]
        span: Option<SourceSpan>,
        key: String,
        name: String,
    },

    #[error("enum '{fullname}' in class '{class}' is not owner-scoped")]
    #[diagnostic(
        code(qtbind::unscoped_enum),
        help("write the enum as 'Owner::Name', e.g. '{class}::{fullname}'")
    )]
    UnscopedEnum {
        #[source_code]
        src: NamedSource<String>,
        #[label("expected 'Owner::Name'")]
        span: Option<SourceSpan>,
        fullname: String,
        class: String,
    },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Box<Self> {
        Box::new(Error::Io {
            path: path.into(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_message() {
        let ctx = SourceContext::new("[build]\n", "qtbind.toml");
        let err = ctx.validation_error("module cannot be empty", None);
        assert_eq!(err.to_string(), "module cannot be empty");
    }

    #[test]
    fn test_unscoped_enum_message() {
        let ctx = SourceContext::new("", "qtbind.toml");
        let err = ctx.unscoped_enum_error("Flag", "QWidget", None);
        assert_eq!(
            err.to_string(),
            "enum 'Flag' in class 'QWidget' is not owner-scoped"
        );
    }

    #[test]
    fn test_io_error_keeps_path() {
        let err = Error::io(
            "missing.toml",
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        );
        assert_eq!(err.to_string(), "failed to read 'missing.toml'");
    }
}
