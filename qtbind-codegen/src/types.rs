//! Native type string normalization.
//!
//! [`normalize`] canonicalizes qualifiers on a raw type string and
//! [`classify`] sorts the result into a [`TypeShape`], unpacking the
//! element, key and value types of the supported generic containers.
//!
//! ```text
//! "const QList<QObject *> &"  → normalize → "QList<QObject *>"
//!                             → classify  → Sequence { element: "QObject" }
//! ```

use crate::error::UnsupportedShapeError;

/// Containers with a single element parameter.
pub const SEQUENCE_CONTAINERS: &[&str] = &["QList", "QVector", "QStack", "QQueue"];

/// Associative containers with a key and a value parameter.
pub const MAP_CONTAINERS: &[&str] = &["QMap", "QMultiMap", "QHash", "QMultiHash"];

/// A classified type string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeShape {
    /// Anything that is not a supported container, including other generics
    /// such as `QPair<int, int>`.
    Scalar(String),
    Sequence {
        container: String,
        element: String,
    },
    Map {
        container: String,
        key: String,
        value: String,
    },
}

impl TypeShape {
    pub fn is_scalar(&self) -> bool {
        matches!(self, TypeShape::Scalar(_))
    }

    /// Container name for sequences and maps.
    pub fn container(&self) -> Option<&str> {
        match self {
            TypeShape::Scalar(_) => None,
            TypeShape::Sequence { container, .. } | TypeShape::Map { container, .. } => {
                Some(container)
            }
        }
    }

    /// Element type of a sequence.
    pub fn element(&self) -> Option<&str> {
        match self {
            TypeShape::Sequence { element, .. } => Some(element),
            _ => None,
        }
    }

    /// Key and value types of a map.
    pub fn key_value(&self) -> Option<(&str, &str)> {
        match self {
            TypeShape::Map { key, value, .. } => Some((key, value)),
            _ => None,
        }
    }
}

/// Canonicalize the qualifiers of a raw type string.
///
/// Pointer and reference markers (including the HTML-escaped `&amp;`), the
/// `const` keyword and `;` are removed and whitespace is collapsed. The
/// parameter list of a packed container is kept as written, so
/// `QList<QObject *> *` becomes `QList<QObject *>`. Any other generic is
/// stripped as a whole: `QPair<QObject *, int>` becomes `QPair<QObject, int>`.
///
/// `normalize(normalize(s)) == normalize(s)` for every input.
pub fn normalize(raw: &str) -> String {
    if let (Some(open), Some(close)) = (raw.find('<'), raw.rfind('>')) {
        let head = strip_qualifiers(&raw[..open]);
        if close > open && is_container(&head) {
            let tail = strip_qualifiers(&raw[close + 1..]);
            return format!("{}{}{}", head, &raw[open..=close], tail);
        }
    }
    tidy_generic(&strip_qualifiers(raw))
}

fn is_container(name: &str) -> bool {
    SEQUENCE_CONTAINERS.contains(&name) || MAP_CONTAINERS.contains(&name)
}

/// Drop the spaces left next to generic punctuation by qualifier removal.
fn tidy_generic(stripped: &str) -> String {
    stripped
        .replace(" ,", ",")
        .replace(" <", "<")
        .replace("< ", "<")
        .replace(" >", ">")
}

/// Normalize `raw` and classify it.
///
/// # Errors
///
/// Returns [`UnsupportedShapeError`] for supported containers whose
/// parameters are nested generics, have the wrong arity or are unbalanced.
pub fn classify(raw: &str) -> Result<TypeShape, UnsupportedShapeError> {
    let canonical = normalize(raw);
    let Some(open) = canonical.find('<') else {
        return Ok(TypeShape::Scalar(canonical));
    };

    let container = &canonical[..open];
    let is_sequence = SEQUENCE_CONTAINERS.contains(&container);
    let is_map = MAP_CONTAINERS.contains(&container);
    if !is_sequence && !is_map {
        return Ok(TypeShape::Scalar(canonical));
    }

    let unsupported = |reason| UnsupportedShapeError {
        ty: raw.to_string(),
        reason,
    };

    let Some(close) = canonical.rfind('>') else {
        return Err(unsupported("unbalanced generic parameter group"));
    };
    if close + 1 != canonical.len() {
        // A nested name such as `QList<int>::iterator` is not a container value.
        return Ok(TypeShape::Scalar(canonical));
    }

    let inner = &canonical[open + 1..close];
    if inner.contains(['<', '>']) {
        return Err(unsupported("nested generic containers are not supported"));
    }

    if is_sequence {
        let element = strip_qualifiers(inner);
        if element.is_empty() || element.contains(',') {
            return Err(unsupported("sequence containers take exactly one parameter"));
        }
        return Ok(TypeShape::Sequence {
            container: container.to_string(),
            element,
        });
    }

    match inner.split(',').map(strip_qualifiers).collect::<Vec<_>>().as_slice() {
        [key, value] if !key.is_empty() && !value.is_empty() => Ok(TypeShape::Map {
            container: container.to_string(),
            key: key.clone(),
            value: value.clone(),
        }),
        _ => Err(unsupported("map containers take exactly two parameters")),
    }
}

/// Remove qualifiers from a type fragment that contains no generic group.
fn strip_qualifiers(fragment: &str) -> String {
    let bare = fragment
        .replace("&amp", " ")
        .replace(['*', '&', ';'], " ");
    let without_const = remove_word(&bare, "const");
    without_const.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Remove every occurrence of `word` that is not part of a longer identifier.
fn remove_word(s: &str, word: &str) -> String {
    let is_ident = |c: char| c.is_ascii_alphanumeric() || c == '_';
    let mut out = String::with_capacity(s.len());
    let mut rest = s;

    while let Some(pos) = rest.find(word) {
        let before = if pos > 0 {
            rest[..pos].chars().next_back()
        } else {
            out.chars().next_back()
        };
        let after = rest[pos + word.len()..].chars().next();
        out.push_str(&rest[..pos]);
        if before.is_some_and(is_ident) || after.is_some_and(is_ident) {
            out.push_str(word);
        } else {
            out.push(' ');
        }
        rest = &rest[pos + word.len()..];
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_qualifiers() {
        assert_eq!(normalize("const QString &"), "QString");
        assert_eq!(normalize("QWidget *"), "QWidget");
        assert_eq!(normalize("const char **"), "char");
        assert_eq!(normalize("QString &amp;"), "QString");
        assert_eq!(normalize("  unsigned   int ; "), "unsigned int");
        assert_eq!(normalize("void"), "void");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_normalize_const_is_a_whole_word() {
        assert_eq!(normalize("QConstIterator"), "QConstIterator");
        assert_eq!(normalize("constant_t"), "constant_t");
        assert_eq!(normalize("QObject *const"), "QObject");
        assert_eq!(normalize("const_iterator"), "const_iterator");
        assert_eq!(normalize("constconst"), "constconst");
    }

    #[test]
    fn test_normalize_const_glued_to_markers() {
        assert_eq!(normalize("char*const"), "char");
        assert_eq!(normalize("const char*const"), "char");
        assert_eq!(normalize("QObject*const*"), "QObject");
        assert_eq!(normalize("int&const"), "int");
        assert_eq!(normalize("QString&amp;const"), "QString");
    }

    #[test]
    fn test_normalize_strips_non_container_generics() {
        assert_eq!(normalize("QPair<QObject *, int>"), "QPair<QObject, int>");
        assert_eq!(
            normalize("const QPair<QObject *, const QString &> &"),
            "QPair<QObject, QString>"
        );
        assert_eq!(
            classify("QPair<QObject *, int>").unwrap(),
            TypeShape::Scalar("QPair<QObject, int>".into())
        );
    }

    #[test]
    fn test_normalize_keeps_group_verbatim() {
        assert_eq!(normalize("const QList<QObject *> &"), "QList<QObject *>");
        assert_eq!(
            normalize("QMap<QString, QVariant> *"),
            "QMap<QString, QVariant>"
        );
        assert_eq!(normalize("QList <int>"), "QList<int>");
    }

    #[test]
    fn test_normalize_idempotent() {
        for raw in [
            "const QString &",
            "QList<QObject *> *",
            "const QMap<QString, QVariant> &amp;",
            "QList<QPair<int, int>>",
            "QObject *const *",
            "operator<",
            "&&ampamp",
            "unsigned const int",
            "char*const",
            "QPair<QObject *, const QString &>",
            "QPair < int , int >",
        ] {
            let once = normalize(raw);
            assert_eq!(normalize(&once), once, "not idempotent for {raw:?}");
        }
    }

    #[test]
    fn test_classify_scalar() {
        assert_eq!(
            classify("const QString &").unwrap(),
            TypeShape::Scalar("QString".into())
        );
        assert_eq!(
            classify("QPair<int, int>").unwrap(),
            TypeShape::Scalar("QPair<int, int>".into())
        );
        assert_eq!(
            classify("QList<int>::iterator").unwrap(),
            TypeShape::Scalar("QList<int>::iterator".into())
        );
    }

    #[test]
    fn test_classify_sequences() {
        for container in SEQUENCE_CONTAINERS {
            let shape = classify(&format!("const {container}<QObject *> &")).unwrap();
            assert_eq!(shape.container(), Some(*container));
            assert_eq!(shape.element(), Some("QObject"));
        }
    }

    #[test]
    fn test_classify_maps() {
        for container in MAP_CONTAINERS {
            let shape = classify(&format!("{container}<QString, const QVariant &>")).unwrap();
            assert_eq!(shape.container(), Some(*container));
            assert_eq!(shape.key_value(), Some(("QString", "QVariant")));
        }
    }

    #[test]
    fn test_classify_rejects_nested_containers() {
        let err = classify("QMap<QString, QList<int>>").unwrap_err();
        assert_eq!(err.ty, "QMap<QString, QList<int>>");
        assert!(err.reason.contains("nested"));

        assert!(classify("QList<QPair<int, int>>").is_err());
    }

    #[test]
    fn test_classify_unpacks_glued_qualifiers() {
        let shape = classify("QList<int*const>").unwrap();
        assert_eq!(shape.element(), Some("int"));

        let map = classify("QMap<QString&const, QObject*const*>").unwrap();
        assert_eq!(map.key_value(), Some(("QString", "QObject")));
    }

    #[test]
    fn test_classify_rejects_wrong_arity() {
        assert!(classify("QMap<QString>").is_err());
        assert!(classify("QHash<int, int, int>").is_err());
        assert!(classify("QList<>").is_err());
        assert!(classify("QVector<int, int>").is_err());
    }

    #[test]
    fn test_classify_rejects_unbalanced() {
        let err = classify("QList<int").unwrap_err();
        assert_eq!(err.reason, "unbalanced generic parameter group");
    }

    #[test]
    fn test_accessors_on_other_shapes() {
        let scalar = TypeShape::Scalar("int".into());
        assert!(scalar.is_scalar());
        assert_eq!(scalar.container(), None);
        assert_eq!(scalar.element(), None);
        assert_eq!(scalar.key_value(), None);
    }
}
