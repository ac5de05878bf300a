//! Secret type.
//!
//! Secrets use the `v1/Secret` type from `k8s-openapi`, so the wire format
//! (base64 `data`, legacy `stringData`, object metadata) is handled by its
//! serde impls. [`SecretExt`] adds the field access this tool needs.

use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use k8s_openapi::ByteString;

pub use k8s_openapi::api::core::v1::Secret;

/// Field access on top of the generated `Secret` type.
///
/// In memory `data` values are raw bytes; `stringData` is read-only for this
/// tool and cleared by [`SecretExt::normalize`].
pub trait SecretExt: Sized {
    /// A bare `Opaque` secret with the given identity, mainly for tests and fixtures.
    fn named(namespace: &str, name: &str) -> Self;

    /// Builder-style helper to add a byte field.
    fn with_data<V: Into<Vec<u8>>>(self, key: &str, value: V) -> Self;

    /// Builder-style helper to add a legacy string field.
    fn with_string_data(self, key: &str, value: &str) -> Self;

    /// `metadata.name`.
    fn name(&self) -> Option<&str>;

    /// `metadata.namespace`.
    fn namespace(&self) -> Option<&str>;

    /// `metadata.resourceVersion`, used for optimistic concurrency on update.
    fn resource_version(&self) -> Option<&str>;

    /// Overwrite `metadata.resourceVersion`.
    fn set_resource_version(&mut self, version: &str);

    /// Raw bytes of a `data` field.
    fn value(&self, key: &str) -> Option<&[u8]>;

    /// Value of a legacy `stringData` field.
    fn string_value(&self, key: &str) -> Option<&str>;

    /// Write a `data` field.
    fn set_value(&mut self, key: &str, value: Vec<u8>);

    /// Delete a `data` field.
    fn remove_value(&mut self, key: &str);

    /// All field names across both stores, sorted.
    fn keys(&self) -> Vec<String>;

    /// Move legacy string fields into the byte store and clear `stringData`.
    fn normalize(&mut self);
}

impl SecretExt for Secret {
    fn named(namespace: &str, name: &str) -> Self {
        Secret {
            metadata: ObjectMeta {
                name: Some(name.to_string()),
                namespace: Some(namespace.to_string()),
                ..ObjectMeta::default()
            },
            type_: Some("Opaque".to_string()),
            ..Secret::default()
        }
    }

    fn with_data<V: Into<Vec<u8>>>(mut self, key: &str, value: V) -> Self {
        self.set_value(key, value.into());
        self
    }

    fn with_string_data(mut self, key: &str, value: &str) -> Self {
        self.string_data
            .get_or_insert_with(Default::default)
            .insert(key.to_string(), value.to_string());
        self
    }

    fn name(&self) -> Option<&str> {
        self.metadata.name.as_deref()
    }

    fn namespace(&self) -> Option<&str> {
        self.metadata.namespace.as_deref()
    }

    fn resource_version(&self) -> Option<&str> {
        self.metadata.resource_version.as_deref()
    }

    fn set_resource_version(&mut self, version: &str) {
        self.metadata.resource_version = Some(version.to_string());
    }

    fn value(&self, key: &str) -> Option<&[u8]> {
        self.data
            .as_ref()
            .and_then(|data| data.get(key))
            .map(|bytes| bytes.0.as_slice())
    }

    fn string_value(&self, key: &str) -> Option<&str> {
        self.string_data
            .as_ref()
            .and_then(|data| data.get(key))
            .map(String::as_str)
    }

    fn set_value(&mut self, key: &str, value: Vec<u8>) {
        self.data
            .get_or_insert_with(Default::default)
            .insert(key.to_string(), ByteString(value));
    }

    fn remove_value(&mut self, key: &str) {
        if let Some(data) = self.data.as_mut() {
            data.remove(key);
        }
    }

    fn keys(&self) -> Vec<String> {
        let data = self.data.iter().flat_map(|d| d.keys());
        let strings = self.string_data.iter().flat_map(|d| d.keys());
        let mut keys: Vec<String> = data.chain(strings).cloned().collect();
        keys.sort();
        keys.dedup();
        keys
    }

    /// String fields take precedence over byte fields of the same name, which
    /// matches how the API server merges them on write.
    fn normalize(&mut self) {
        for (key, value) in self.string_data.take().unwrap_or_default() {
            self.set_value(&key, value.into_bytes());
        }
    }
}
