//! Command-line interface.

pub mod edit;
pub mod output;

use clap::builder::NonEmptyStringValueParser;
use clap::Parser;
use std::path::PathBuf;

use crate::core::repository::ClusterFlags;

/// Edit a Kubernetes secret with decoded values.
#[derive(Parser, Debug)]
#[command(
    name = "kubectl-edit_secret",
    bin_name = "kubectl edit-secret",
    about = "Edit a Kubernetes secret with decoded values",
    long_about = "Edit a Kubernetes secret by decoding base64 values, opening them in your editor,\n\
                  and re-encoding and applying the changes.\n\n\
                  If KEY is given, only that key is edited. Otherwise every key in the secret\n\
                  is available for editing.",
    version,
    after_help = "Examples:\n  \
                  # Edit all keys in a secret\n  \
                  kubectl edit-secret my-secret\n\n  \
                  # Edit a single key\n  \
                  kubectl edit-secret my-secret password\n\n  \
                  # Edit a secret in another namespace with a specific editor\n  \
                  kubectl edit-secret my-secret -n my-namespace --editor=nano"
)]
pub struct Cli {
    /// Name of the secret to edit
    #[arg(value_name = "SECRET_NAME", value_parser = NonEmptyStringValueParser::new())]
    pub name: String,

    /// Edit only this key
    #[arg(value_name = "KEY")]
    pub key: Option<String>,

    /// Editor to use (defaults to $KUBE_EDITOR, then $EDITOR, then vim, vi, nano)
    #[arg(short, long)]
    pub editor: Option<String>,

    /// Namespace of the secret (defaults to the current context's namespace)
    #[arg(short, long)]
    pub namespace: Option<String>,

    /// Path to the kubeconfig file
    #[arg(long)]
    pub kubeconfig: Option<PathBuf>,

    /// Kubeconfig context to use
    #[arg(long)]
    pub context: Option<String>,

    /// Kubeconfig cluster to use
    #[arg(long)]
    pub cluster: Option<String>,

    /// Kubeconfig user to use
    #[arg(long)]
    pub user: Option<String>,

    /// Username to impersonate
    #[arg(long = "as", value_name = "USER")]
    pub impersonate: Option<String>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Cluster selectors forwarded to kubectl.
    pub fn cluster_flags(&self) -> ClusterFlags {
        ClusterFlags {
            kubeconfig: self.kubeconfig.clone(),
            context: self.context.clone(),
            cluster: self.cluster.clone(),
            user: self.user.clone(),
            impersonate: self.impersonate.clone(),
        }
    }
}

/// Execute the command.
pub fn execute(cli: Cli) -> crate::error::Result<()> {
    edit::execute(cli)
}
