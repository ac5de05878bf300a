//! Edit document codec.
//!
//! Renders a [`FieldSet`] as a commented YAML document and parses the edited
//! text back. Lines whose trimmed content starts with `#` are dropped before
//! parsing, wherever they appear.
//!
//! Known limitation: a line inside a multi-line block value that starts with
//! `#` is treated as a comment too.

use serde_yaml::Value;
use std::collections::BTreeMap;

use crate::core::fields::{EditScope, FieldSet};
use crate::error::{DocumentError, Result};

/// Identifies the secret being edited, for the header.
#[derive(Debug, Clone, Copy)]
pub struct DocumentContext<'a> {
    pub name: &'a str,
    pub namespace: &'a str,
    pub scope: &'a EditScope,
}

/// Render the header and fields.
///
/// Keys are emitted in sorted order so the output is reproducible.
pub fn render(fields: &FieldSet, ctx: DocumentContext<'_>) -> Result<String> {
    let mut doc = header(ctx);
    let body = serde_yaml::to_string(fields).map_err(DocumentError::Render)?;
    doc.push_str(&body);
    Ok(doc)
}

fn header(ctx: DocumentContext<'_>) -> String {
    let mut lines = vec![
        format!("# Editing secret: {}", ctx.name),
        format!("# Namespace: {}", ctx.namespace),
    ];
    if let Some(key) = ctx.scope.key() {
        lines.push(format!("# Key: {key}"));
    }
    lines.extend(
        [
            "#",
            "# Modify the values below. Lines starting with '#' are ignored.",
            "# The values shown are DECODED (plain text).",
            "# They will be automatically base64-encoded when saved.",
            "#",
            "# Save and exit to apply changes. Exit without saving to cancel.",
            "#",
        ]
        .map(String::from),
    );

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// Parse an edited document.
///
/// Empty content (after comments are removed) yields an empty set. A key given
/// twice keeps its last value. Numbers, booleans and empty values are read as
/// their text; sequences and mappings are rejected.
///
/// # Errors
///
/// Returns `DocumentError::Parse` for malformed YAML or a non-mapping
/// document, and `DocumentError::NotScalar` for nested values.
pub fn parse(text: &str) -> Result<FieldSet> {
    let content = strip_comments(text);
    if content.trim().is_empty() {
        return Ok(FieldSet::new());
    }

    let raw: Option<BTreeMap<String, Value>> =
        serde_yaml::from_str(&content).map_err(DocumentError::Parse)?;

    let mut fields = FieldSet::new();
    for (key, value) in raw.unwrap_or_default() {
        let text = match value {
            Value::String(s) => s,
            Value::Number(n) => n.to_string(),
            Value::Bool(b) => b.to_string(),
            Value::Null => String::new(),
            Value::Sequence(_) | Value::Mapping(_) | Value::Tagged(_) => {
                return Err(DocumentError::NotScalar { key }.into());
            }
        };
        fields.insert(key, text);
    }

    Ok(fields)
}

fn strip_comments(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for line in text.lines() {
        if !line.trim_start().starts_with('#') {
            out.push_str(line);
            out.push('\n');
        }
    }
    out
}
