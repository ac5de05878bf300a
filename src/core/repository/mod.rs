//! Secret storage.
//!
//! The workflow only needs to read a secret and write it back. This module
//! defines that seam and its implementations.
//!
//! ## Backends
//!
//! - [`Kubectl`]: the cluster, through the `kubectl` binary
//! - [`Memory`]: an in-process map with resource-version checks, for tests
//!
//! ## Adding a Backend
//!
//! ```ignore
//! struct Api { /* ... */ }
//!
//! impl SecretRepository for Api {
//!     fn get(&self, namespace: &str, name: &str) -> Result<Secret> {
//!         // Fetch the object
//!     }
//!     fn update(&self, namespace: &str, name: &str, secret: &Secret) -> Result<Secret> {
//!         // Replace it, honoring metadata.resourceVersion
//!     }
//! }
//! ```

use crate::core::secret::Secret;
use crate::error::Result;

mod kubectl;
mod memory;

pub use kubectl::{ClusterFlags, Kubectl};
pub use memory::Memory;

/// Read and write access to stored secrets.
pub trait SecretRepository {
    /// Fetch a secret.
    ///
    /// # Errors
    ///
    /// Returns `SecretError::NotFound` if it does not exist, or `KubeError`
    /// if the backend fails.
    fn get(&self, namespace: &str, name: &str) -> Result<Secret>;

    /// Replace a secret with `secret`, all fields in one write.
    ///
    /// The write is rejected if `secret`'s resource version is stale.
    ///
    /// # Returns
    ///
    /// The secret as stored.
    ///
    /// # Errors
    ///
    /// Returns `KubeError::Conflict` on a stale resource version, or
    /// `KubeError::Update` for any other rejection.
    fn update(&self, namespace: &str, name: &str, secret: &Secret) -> Result<Secret>;
}
