//! Secret fixtures and readers for the fake kubectl state.

use super::Test;
use kubectl_edit_secret::core::secret::{Secret, SecretExt};

/// Serialized secret as `kubectl get -o json` would print it.
pub fn secret_json(namespace: &str, name: &str, pairs: &[(&str, &str)]) -> String {
    let mut secret = Secret::named(namespace, name);
    secret.set_resource_version("100");
    for (k, v) in pairs {
        secret = secret.with_data(k, *v);
    }
    serde_json::to_string_pretty(&secret).expect("failed to serialize fixture")
}

impl Test {
    /// The object last sent to `kubectl replace`, if any.
    pub fn replaced(&self) -> Option<Secret> {
        let path = self.state().join("replaced.json");
        let contents = std::fs::read_to_string(path).ok()?;
        Some(serde_json::from_str(&contents).expect("replaced object is not a secret"))
    }

    /// Every kubectl invocation, one line each.
    pub fn kubectl_calls(&self) -> String {
        std::fs::read_to_string(self.state().join("calls.log")).unwrap_or_default()
    }

    /// Decoded value of `key` in the replaced object.
    pub fn replaced_value(&self, key: &str) -> Option<String> {
        self.replaced()?
            .value(key)
            .map(|v| String::from_utf8_lossy(v).to_string())
    }
}
