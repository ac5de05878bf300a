//! Decoded field sets.
//!
//! The plain-text view of a secret that the user edits. Values here are never
//! base64; encoding happens only when a diff is written back.

use std::collections::BTreeMap;
use std::fmt;

use crate::core::secret::{Secret, SecretExt};
use crate::error::{Result, SecretError};

/// Field name to plain-text value, ordered by name.
pub type FieldSet = BTreeMap<String, String>;

/// Which part of the secret an edit session covers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditScope {
    /// Every field of the secret.
    Whole,
    /// One named field; nothing else is read or written.
    Key(String),
}

impl EditScope {
    /// Scope from an optional key argument.
    pub fn from_key(key: Option<String>) -> Self {
        match key {
            Some(key) if !key.is_empty() => Self::Key(key),
            _ => Self::Whole,
        }
    }

    /// The targeted key in single-key mode.
    pub fn key(&self) -> Option<&str> {
        match self {
            Self::Whole => None,
            Self::Key(key) => Some(key),
        }
    }
}

impl fmt::Display for EditScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Whole => write!(f, "all keys"),
            Self::Key(key) => write!(f, "key {key}"),
        }
    }
}

/// Decode the fields covered by `scope` into plain text.
///
/// Legacy `stringData` entries overlay `data` entries of the same name.
///
/// # Errors
///
/// - `SecretError::KeyNotFound` if the scoped key is absent (lists the
///   available keys, sorted)
/// - `SecretError::Empty` if a whole-secret edit finds no fields
/// - `SecretError::NotUtf8` if a covered value is not valid UTF-8
pub fn extract(secret: &Secret, name: &str, scope: &EditScope) -> Result<FieldSet> {
    match scope {
        EditScope::Key(key) => {
            let value = lookup(secret, key)?.ok_or_else(|| SecretError::KeyNotFound {
                key: key.clone(),
                available: secret.keys(),
            })?;
            Ok(FieldSet::from([(key.clone(), value)]))
        }
        EditScope::Whole => {
            let mut fields = FieldSet::new();
            for key in secret.keys() {
                if let Some(value) = lookup(secret, &key)? {
                    fields.insert(key, value);
                }
            }
            if fields.is_empty() {
                return Err(SecretError::Empty(name.to_string()).into());
            }
            Ok(fields)
        }
    }
}

fn lookup(secret: &Secret, key: &str) -> Result<Option<String>> {
    if let Some(value) = secret.string_value(key) {
        return Ok(Some(value.to_string()));
    }
    match secret.value(key) {
        Some(bytes) => String::from_utf8(bytes.to_vec())
            .map(Some)
            .map_err(|_| SecretError::NotUtf8 { key: key.to_string() }.into()),
        None => Ok(None),
    }
}
