//! In-memory secret repository.

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;

use super::SecretRepository;
use crate::core::secret::{Secret, SecretExt};
use crate::error::{KubeError, Result, SecretError};

/// Secrets held in a map, keyed by namespace and name.
///
/// Every stored secret carries a numeric resource version that is bumped on
/// update; writes with a different version are rejected as conflicts.
#[derive(Debug, Default)]
pub struct Memory {
    secrets: RefCell<BTreeMap<(String, String), Secret>>,
    updates: Cell<usize>,
}

impl Memory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `secret` under its own namespace and name, assigning version 1.
    pub fn insert(&self, mut secret: Secret) {
        let id = (
            secret.namespace().unwrap_or_default().to_string(),
            secret.name().unwrap_or_default().to_string(),
        );
        secret.set_resource_version("1");
        self.secrets.borrow_mut().insert(id, secret);
    }

    /// Current stored copy, if any.
    pub fn stored(&self, namespace: &str, name: &str) -> Option<Secret> {
        self.secrets
            .borrow()
            .get(&(namespace.to_string(), name.to_string()))
            .cloned()
    }

    /// Bump the stored version as if someone else had written the secret.
    pub fn touch(&self, namespace: &str, name: &str) {
        if let Some(secret) = self
            .secrets
            .borrow_mut()
            .get_mut(&(namespace.to_string(), name.to_string()))
        {
            let next = next_version(secret.resource_version());
            secret.set_resource_version(&next);
        }
    }

    /// Number of successful updates.
    pub fn updates(&self) -> usize {
        self.updates.get()
    }
}

fn next_version(current: Option<&str>) -> String {
    let n: u64 = current.and_then(|v| v.parse().ok()).unwrap_or(0);
    (n + 1).to_string()
}

impl SecretRepository for Memory {
    fn get(&self, namespace: &str, name: &str) -> Result<Secret> {
        self.stored(namespace, name).ok_or_else(|| {
            SecretError::NotFound {
                name: name.to_string(),
                namespace: namespace.to_string(),
            }
            .into()
        })
    }

    fn update(&self, namespace: &str, name: &str, secret: &Secret) -> Result<Secret> {
        let mut secrets = self.secrets.borrow_mut();
        let id = (namespace.to_string(), name.to_string());

        let current = secrets.get(&id).ok_or_else(|| KubeError::Update {
            name: name.to_string(),
            message: "not found".to_string(),
        })?;

        if current.resource_version() != secret.resource_version() {
            return Err(KubeError::Conflict {
                name: name.to_string(),
                message: "the object has been modified; please apply your changes to the latest version and try again".to_string(),
            }
            .into());
        }

        let mut stored = secret.clone();
        stored.set_resource_version(&next_version(current.resource_version()));
        secrets.insert(id, stored.clone());
        self.updates.set(self.updates.get() + 1);

        Ok(stored)
    }
}
