//! kubectl-backed secret repository.
//!
//! Delegates authentication, kubeconfig handling and transport to the
//! `kubectl` binary. Secrets travel as JSON on stdout/stdin.

use std::ffi::OsString;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};
use tracing::{debug, trace};

use super::SecretRepository;
use crate::core::constants;
use crate::core::secret::{Secret, SecretExt};
use crate::error::{KubeError, Result, SecretError};

/// Cluster selectors passed through to every kubectl call.
#[derive(Debug, Clone, Default)]
pub struct ClusterFlags {
    pub kubeconfig: Option<PathBuf>,
    pub context: Option<String>,
    pub cluster: Option<String>,
    pub user: Option<String>,
    pub impersonate: Option<String>,
}

impl ClusterFlags {
    fn args(&self) -> Vec<OsString> {
        let mut args = Vec::new();
        if let Some(path) = &self.kubeconfig {
            args.push(OsString::from("--kubeconfig"));
            args.push(path.clone().into_os_string());
        }
        let named = [
            ("--context", &self.context),
            ("--cluster", &self.cluster),
            ("--user", &self.user),
            ("--as", &self.impersonate),
        ];
        for (flag, value) in named {
            if let Some(value) = value {
                args.push(OsString::from(flag));
                args.push(OsString::from(value));
            }
        }
        args
    }
}

/// Talks to the cluster through a kubectl binary.
#[derive(Debug, Clone)]
pub struct Kubectl {
    binary: PathBuf,
    flags: ClusterFlags,
}

impl Kubectl {
    /// Use the given binary as-is.
    pub fn new(binary: PathBuf, flags: ClusterFlags) -> Self {
        Self { binary, flags }
    }

    /// Find kubectl: the configured path if any, otherwise `PATH`.
    ///
    /// # Errors
    ///
    /// Returns `KubeError::Unavailable` if no executable is found.
    pub fn locate(configured: Option<&Path>, flags: ClusterFlags) -> Result<Self> {
        let wanted = configured.map_or_else(|| PathBuf::from("kubectl"), Path::to_path_buf);
        let binary = which::which(&wanted).map_err(|e| {
            KubeError::Unavailable(format!("kubectl not found ({}): {e}", wanted.display()))
        })?;
        debug!(kubectl = %binary.display(), "located kubectl");
        Ok(Self::new(binary, flags))
    }

    /// Namespace to operate in.
    ///
    /// An explicit namespace wins; otherwise the current kubeconfig context's
    /// namespace, falling back to `default`. A kubeconfig without a current
    /// context also falls back to `default`.
    ///
    /// # Errors
    ///
    /// Returns `KubeError::Namespace` if the kubeconfig cannot be read.
    pub fn resolve_namespace(&self, explicit: Option<&str>) -> Result<String> {
        if let Some(ns) = explicit.filter(|ns| !ns.is_empty()) {
            return Ok(ns.to_string());
        }

        let output = self
            .run(
                &["config", "view", "--minify", "--output", "jsonpath={..namespace}"],
                None,
            )
            .map_err(|e| KubeError::Namespace(e.to_string()))?;
        if !output.status.success() {
            let message = stderr_message(&output);
            if message.contains("current-context") {
                debug!(%message, "no current context, using default namespace");
                return Ok(constants::DEFAULT_NAMESPACE.to_string());
            }
            return Err(KubeError::Namespace(message).into());
        }

        let ns = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if ns.is_empty() {
            Ok(constants::DEFAULT_NAMESPACE.to_string())
        } else {
            Ok(ns)
        }
    }

    fn run(&self, args: &[&str], input: Option<&[u8]>) -> std::io::Result<Output> {
        let mut cmd = Command::new(&self.binary);
        cmd.args(self.flags.args())
            .args(args)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .stdin(if input.is_some() {
                Stdio::piped()
            } else {
                Stdio::null()
            });
        trace!(?args, "running kubectl");

        let mut child = cmd.spawn()?;
        let written = match (input, child.stdin.take()) {
            // stdin is dropped at the end of the arm so kubectl sees EOF.
            (Some(bytes), Some(mut stdin)) => stdin.write_all(bytes),
            _ => Ok(()),
        };
        let output = child.wait_with_output()?;

        match written {
            // kubectl exited without reading its input; its stderr explains why.
            Err(e) if e.kind() == std::io::ErrorKind::BrokenPipe => Ok(output),
            Err(e) => Err(e),
            Ok(()) => Ok(output),
        }
    }

    fn spawn_error(&self, e: std::io::Error) -> KubeError {
        KubeError::Unavailable(format!("failed to run {}: {e}", self.binary.display()))
    }
}

impl SecretRepository for Kubectl {
    fn get(&self, namespace: &str, name: &str) -> Result<Secret> {
        debug!(secret = %name, %namespace, "fetching secret");
        let output = self
            .run(
                &["get", "secret", name, "--namespace", namespace, "--output", "json"],
                None,
            )
            .map_err(|e| self.spawn_error(e))?;

        if !output.status.success() {
            let message = stderr_message(&output);
            if message.contains("NotFound") || message.contains("not found") {
                return Err(SecretError::NotFound {
                    name: name.to_string(),
                    namespace: namespace.to_string(),
                }
                .into());
            }
            return Err(KubeError::Get {
                name: name.to_string(),
                message,
            }
            .into());
        }

        let secret: Secret = serde_json::from_slice(&output.stdout).map_err(KubeError::from)?;
        Ok(secret)
    }

    fn update(&self, namespace: &str, name: &str, secret: &Secret) -> Result<Secret> {
        debug!(
            secret = %name,
            %namespace,
            resource_version = secret.resource_version().unwrap_or(""),
            "replacing secret"
        );
        let body = serde_json::to_vec(secret).map_err(KubeError::from)?;
        let output = self
            .run(
                &["replace", "--namespace", namespace, "--filename", "-", "--output", "json"],
                Some(&body),
            )
            .map_err(|e| self.spawn_error(e))?;

        if !output.status.success() {
            let message = stderr_message(&output);
            if message.contains("Conflict") || message.contains("the object has been modified") {
                return Err(KubeError::Conflict {
                    name: name.to_string(),
                    message,
                }
                .into());
            }
            return Err(KubeError::Update {
                name: name.to_string(),
                message,
            }
            .into());
        }

        let stored: Secret = serde_json::from_slice(&output.stdout).map_err(KubeError::from)?;
        Ok(stored)
    }
}

fn stderr_message(output: &Output) -> String {
    let message = String::from_utf8_lossy(&output.stderr).trim().to_string();
    if message.is_empty() {
        format!("kubectl exited with {}", output.status)
    } else {
        message
    }
}
