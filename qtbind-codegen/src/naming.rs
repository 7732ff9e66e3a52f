//! Identifier sanitizing for the generated Go layer.

use crate::types::normalize;

/// Host-language naming rules.
///
/// Defines which names collide with the host language (or with helpers the
/// generated layer imports) and how to derive a replacement.
#[derive(Debug, Clone, Copy)]
pub struct NamingConvention {
    /// Names that may not be used as parameter or value identifiers.
    pub reserved_words: &'static [&'static str],
    /// Rewrite a reserved word into a usable identifier.
    pub escape_reserved: fn(&str) -> String,
    /// Prefix of placeholders derived from a type for unnamed parameters.
    pub placeholder_prefix: &'static str,
}

impl NamingConvention {
    /// Check if a name is a reserved word.
    pub fn is_reserved(&self, name: &str) -> bool {
        self.reserved_words.contains(&name)
    }

    /// Produce a legal identifier for `name`.
    ///
    /// Reserved words are escaped. An empty name is replaced by a placeholder
    /// built from the first two characters of the normalized `ty`.
    pub fn sanitize(&self, name: &str, ty: &str) -> String {
        if self.is_reserved(name) {
            return (self.escape_reserved)(name);
        }
        if name.is_empty() {
            let bare = normalize(ty).replace('.', "");
            let stem: String = bare.chars().take(2).collect();
            return format!("{}{}", self.placeholder_prefix, stem.to_lowercase());
        }
        name.to_string()
    }
}

/// Drop the last two characters. Every Go reserved word below is longer than
/// two characters, so the result is never empty.
fn truncate_reserved(name: &str) -> String {
    let keep = name.chars().count().saturating_sub(2);
    name.chars().take(keep).collect()
}

/// Go naming conventions.
///
/// Besides keywords this blocks the names of imported packages and of
/// helpers every generated file declares.
pub const GO_NAMING: NamingConvention = NamingConvention {
    reserved_words: &[
        "type",
        "func",
        "range",
        "string",
        "int",
        "map",
        "const",
        "interface",
        "select",
        "strings",
        "new",
        "signal",
        "ptr",
        "register",
    ],
    escape_reserved: truncate_reserved,
    placeholder_prefix: "v",
};

/// Sanitize with [`GO_NAMING`].
pub fn sanitize(name: &str, ty: &str) -> String {
    GO_NAMING.sanitize(name, ty)
}
