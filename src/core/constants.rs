//! Constants used throughout kubectl-edit-secret.
//!
//! Centralizes magic strings and configuration values.

/// Editor environment variable consulted first (kubectl convention).
pub const KUBE_EDITOR_VAR: &str = "KUBE_EDITOR";

/// Generic editor environment variable, consulted after `KUBE_EDITOR`.
pub const EDITOR_VAR: &str = "EDITOR";

/// Editors probed on `PATH` when nothing else is configured, in order.
#[cfg(not(windows))]
pub const DEFAULT_EDITORS: &[&str] = &["vim", "vi", "nano"];

/// Editors probed on `PATH` when nothing else is configured, in order.
#[cfg(windows)]
pub const DEFAULT_EDITORS: &[&str] = &["vim", "vi", "nano", "notepad"];

/// Environment variable pointing at an alternate config file.
pub const CONFIG_PATH_VAR: &str = "KUBECTL_EDIT_SECRET_CONFIG";

/// Directory under the platform config dir holding `config.toml`.
pub const CONFIG_DIR: &str = "kubectl-edit-secret";

/// Config file name.
pub const CONFIG_FILE: &str = "config.toml";

/// Environment variable overriding the log filter.
pub const LOG_VAR: &str = "EDIT_SECRET_LOG";

/// Prefix of the temporary edit document.
pub const TEMP_PREFIX: &str = "kubectl-edit-secret";

/// Suffix of the temporary edit document, so editors pick YAML highlighting.
pub const TEMP_SUFFIX: &str = ".yaml";

/// Namespace used when neither the flag nor the kubeconfig names one.
pub const DEFAULT_NAMESPACE: &str = "default";
