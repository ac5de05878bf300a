//! User configuration.
//!
//! Reads the optional `config.toml`. Every setting has a default, so a missing
//! file is not an error.
//!
//! ```toml
//! [editor]
//! candidates = ["hx", "vim"]
//!
//! [kubectl]
//! path = "/usr/local/bin/kubectl"
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::core::constants;
use crate::error::{ConfigError, Result};

/// Settings loaded from `config.toml`.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub editor: EditorConfig,
    #[serde(default)]
    pub kubectl: KubectlConfig,
}

/// `[editor]` section.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EditorConfig {
    /// Replaces the built-in list of editors probed on `PATH`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub candidates: Option<Vec<String>>,
}

/// `[kubectl]` section.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct KubectlConfig {
    /// Explicit kubectl binary; looked up on `PATH` when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

impl Config {
    /// Location of the config file.
    ///
    /// `$KUBECTL_EDIT_SECRET_CONFIG` wins, then the platform config directory.
    pub fn path() -> Option<PathBuf> {
        if let Some(explicit) = std::env::var_os(constants::CONFIG_PATH_VAR) {
            if !explicit.is_empty() {
                return Some(PathBuf::from(explicit));
            }
        }
        dirs::config_dir().map(|dir| dir.join(constants::CONFIG_DIR).join(constants::CONFIG_FILE))
    }

    /// Load the config from its default location.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        match Self::path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load the config from an explicit path, defaulting when it is absent.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        debug!(path = %path.display(), "loading config");
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(config)
    }

    /// Editors to probe on `PATH`, in order.
    pub fn editor_candidates(&self) -> Vec<String> {
        match &self.editor.candidates {
            Some(list) => list.clone(),
            None => constants::DEFAULT_EDITORS
                .iter()
                .map(|e| e.to_string())
                .collect(),
        }
    }
}
