//! Error types.
//!
//! Each concern gets its own enum; [`Error`] wraps them so callers can use `?`
//! across module boundaries and still match on the specific failure.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Kube(#[from] KubeError),

    #[error(transparent)]
    Secret(#[from] SecretError),

    #[error(transparent)]
    Document(#[from] DocumentError),

    #[error(transparent)]
    Editor(#[from] EditorError),

    #[error(transparent)]
    TempFile(#[from] TempFileError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// User configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Failures talking to the cluster through kubectl.
#[derive(Error, Debug)]
pub enum KubeError {
    #[error("failed to create Kubernetes client: {0}")]
    Unavailable(String),

    #[error("failed to get namespace: {0}")]
    Namespace(String),

    #[error("failed to get secret {name}: {message}")]
    Get { name: String, message: String },

    #[error("failed to update secret {name}: conflict: {message}")]
    Conflict { name: String, message: String },

    #[error("failed to update secret {name}: {message}")]
    Update { name: String, message: String },

    #[error("unexpected response from kubectl: {0}")]
    InvalidResponse(#[from] serde_json::Error),
}

/// Problems with the secret's contents.
#[derive(Error, Debug)]
pub enum SecretError {
    #[error("secret {name} not found in namespace {namespace}")]
    NotFound { name: String, namespace: String },

    #[error("secret {0} has no data")]
    Empty(String),

    #[error("key {key:?} not found in secret. Available keys: {}", format_keys(.available))]
    KeyNotFound { key: String, available: Vec<String> },

    #[error("key {key:?} holds binary data and cannot be edited as text")]
    NotUtf8 { key: String },
}

fn format_keys(keys: &[String]) -> String {
    if keys.is_empty() {
        "(none)".to_string()
    } else {
        keys.join(", ")
    }
}

/// The edited document could not be read back.
#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("invalid YAML: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("invalid YAML: edited document is not valid UTF-8")]
    NotUtf8,

    #[error("invalid YAML: value of {key:?} must be a plain string")]
    NotScalar { key: String },

    #[error("failed to render document: {0}")]
    Render(serde_yaml::Error),
}

/// Editor resolution and execution failures.
#[derive(Error, Debug)]
pub enum EditorError {
    #[error("no editor found. Set $EDITOR or $KUBE_EDITOR environment variable, or use --editor flag")]
    NotFound,

    #[error("editor failed: could not start {program}: {source}")]
    Launch {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("editor failed: {program} exited with {status}")]
    Failed {
        program: String,
        status: std::process::ExitStatus,
    },
}

/// Temporary edit file failures.
#[derive(Error, Debug)]
pub enum TempFileError {
    #[error("failed to create temp file: {0}")]
    Create(#[source] std::io::Error),

    #[error("failed to write temp file: {0}")]
    Write(#[source] std::io::Error),

    #[error("failed to read temp file: {0}")]
    Read(#[source] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
