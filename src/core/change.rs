//! Change detection.
//!
//! Two separate checks. Byte equality of the edit document decides whether
//! the session was cancelled. Field equality after parsing decides whether
//! anything worth writing changed. A comment-only edit passes the first and
//! fails the second.

use crate::core::fields::FieldSet;

/// The document is byte-for-byte unchanged.
pub fn was_cancelled(before: &[u8], after: &[u8]) -> bool {
    before == after
}

/// The key sets differ or a shared key's value differs.
pub fn has_semantic_change(before: &FieldSet, after: &FieldSet) -> bool {
    before.len() != after.len()
        || after
            .iter()
            .any(|(key, value)| before.get(key) != Some(value))
}
