//! Field diff.
//!
//! The additions, updates and removals that bring a stored secret in line
//! with the edited document.

use std::collections::{BTreeMap, BTreeSet};

use crate::core::fields::{EditScope, FieldSet};
use crate::core::secret::{Secret, SecretExt};

/// Disjoint sets of changes between two field sets.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FieldDiff {
    added: BTreeMap<String, String>,
    updated: BTreeMap<String, String>,
    removed: BTreeSet<String>,
}

impl FieldDiff {
    /// Compute the diff for an edit session.
    ///
    /// In single-key mode only the targeted key is considered. If the user
    /// deleted its line, nothing is recorded: removing the targeted key is not
    /// supported and the stored value is left alone. In whole-secret mode keys
    /// missing from `after` are removed.
    pub fn compute(before: &FieldSet, after: &FieldSet, scope: &EditScope) -> Self {
        let mut diff = Self::default();

        match scope {
            EditScope::Key(key) => {
                if let Some(value) = after.get(key) {
                    diff.record(before, key, value);
                }
            }
            EditScope::Whole => {
                for (key, value) in after {
                    diff.record(before, key, value);
                }
                diff.removed = before
                    .keys()
                    .filter(|key| !after.contains_key(*key))
                    .cloned()
                    .collect();
            }
        }

        diff
    }

    fn record(&mut self, before: &FieldSet, key: &str, value: &str) {
        match before.get(key) {
            Some(old) if old == value => {}
            Some(_) => {
                self.updated.insert(key.to_string(), value.to_string());
            }
            None => {
                self.added.insert(key.to_string(), value.to_string());
            }
        }
    }

    /// Keys that did not exist before.
    pub fn added(&self) -> &BTreeMap<String, String> {
        &self.added
    }

    /// Keys whose value changed.
    pub fn updated(&self) -> &BTreeMap<String, String> {
        &self.updated
    }

    /// Keys deleted from the document.
    pub fn removed(&self) -> &BTreeSet<String> {
        &self.removed
    }

    /// Whether no field changes.
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.updated.is_empty() && self.removed.is_empty()
    }

    /// Total number of changed fields.
    pub fn len(&self) -> usize {
        self.added.len() + self.updated.len() + self.removed.len()
    }

    /// Apply the diff to `secret`.
    ///
    /// The secret is normalized first: legacy `stringData` moves into `data`
    /// and is cleared, whether or not the diff touches those keys. Only keys in
    /// the diff are written; their values are stored as raw bytes and encoded
    /// on the wire.
    pub fn apply(&self, secret: &mut Secret) {
        secret.normalize();

        for key in &self.removed {
            secret.remove_value(key);
        }
        for (key, value) in self.added.iter().chain(&self.updated) {
            secret.set_value(key, value.as_bytes().to_vec());
        }
    }
}
