//! Validation of parsed manifests.

use std::collections::HashSet;

use miette::SourceSpan;

use super::{ClassEntry, Manifest};
use crate::{Result, error::SourceContext};

/// Validate the manifest after parsing.
pub(crate) fn validate_manifest(manifest: &Manifest, ctx: &SourceContext) -> Result<()> {
    for (key, entry) in &manifest.classes {
        validate_class(key, entry, ctx)?;
    }
    Ok(())
}

fn validate_class(key: &str, entry: &ClassEntry, ctx: &SourceContext) -> Result<()> {
    if let Some(reason) = validate_identifier(key) {
        return Err(ctx.invalid_identifier_error(
            key,
            "class",
            reason,
            find_name_span(ctx.src(), key),
        ));
    }

    if let Some(name) = entry.name.as_deref().filter(|name| *name != key) {
        return Err(ctx.class_name_mismatch_error(key, name, find_value_span(ctx.src(), name)));
    }

    if let Some(reason) = validate_identifier(&entry.module) {
        return Err(ctx.invalid_identifier_error(
            &entry.module,
            format!("module of class '{}'", key),
            reason,
            find_value_span(ctx.src(), &entry.module),
        ));
    }

    if let Some(base) = &entry.base {
        if let Some(reason) = validate_identifier(base) {
            return Err(ctx.invalid_identifier_error(
                base,
                format!("base of class '{}'", key),
                reason,
                find_value_span(ctx.src(), base),
            ));
        }
    }

    let mut fullnames = HashSet::new();
    for record in &entry.enums {
        let scoped = record
            .fullname
            .split_once("::")
            .is_some_and(|(owner, rest)| !owner.is_empty() && !rest.is_empty());
        if !scoped {
            return Err(ctx.unscoped_enum_error(
                &record.fullname,
                key,
                find_value_span(ctx.src(), &record.fullname),
            ));
        }

        if !fullnames.insert(record.fullname.as_str()) {
            return Err(ctx.validation_error(
                format!("enum '{}' declared twice in class '{}'", record.fullname, key),
                find_value_span(ctx.src(), &record.fullname),
            ));
        }

        let mut names = HashSet::new();
        for value in &record.values {
            if !names.insert(value.name.as_str()) {
                return Err(ctx.validation_error(
                    format!(
                        "enum value '{}' declared twice in '{}'",
                        value.name, record.fullname
                    ),
                    find_value_span(ctx.src(), &value.name),
                ));
            }
        }
    }

    Ok(())
}

/// Find the span of a class table name in the TOML source.
/// Searches for `.name]` and `.name.` as used in `[classes.name]` headers.
pub(crate) fn find_name_span(src: &str, name: &str) -> Option<SourceSpan> {
    let patterns = [format!(".{}]", name), format!(".{}.", name)];

    for pattern in &patterns {
        if let Some(pos) = src.find(pattern.as_str()) {
            // +1 to skip the leading dot
            return Some(SourceSpan::from((pos + 1, name.len())));
        }
    }

    None
}

/// Find the span of a quoted string value in the TOML source.
pub(crate) fn find_value_span(src: &str, value: &str) -> Option<SourceSpan> {
    for quote in ['"', '\''] {
        let pattern = format!("{quote}{value}{quote}");
        if let Some(pos) = src.find(&pattern) {
            return Some(SourceSpan::from((pos + 1, value.len())));
        }
    }
    None
}

/// Validate that a name is a native identifier.
/// Returns None if valid, Some(reason) if invalid
pub(crate) fn validate_identifier(name: &str) -> Option<&'static str> {
    let mut chars = name.chars();

    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        Some(_) => return Some("name must start with a letter or underscore"),
        None => return Some("name cannot be empty"),
    }

    if chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
        None
    } else {
        Some("name must contain only letters, numbers and underscores")
    }
}
