//! kubectl-edit-secret - edit Kubernetes secrets as plain text.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use kubectl_edit_secret::cli::output;
use kubectl_edit_secret::cli::{execute, Cli};
use kubectl_edit_secret::core::constants::LOG_VAR;
use kubectl_edit_secret::error::{EditorError, Error, KubeError, SecretError};

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env(LOG_VAR).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("kubectl_edit_secret=debug")
        } else {
            EnvFilter::new("kubectl_edit_secret=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    if let Err(e) = execute(cli) {
        // Format error with suggestion if available
        let suggestion = match &e {
            Error::Editor(EditorError::NotFound) => Some("set $EDITOR, or pass --editor nano"),
            Error::Kube(KubeError::Unavailable(_)) => {
                Some("install kubectl or set [kubectl] path in config.toml")
            }
            Error::Kube(KubeError::Conflict { .. }) => {
                Some("the secret changed while you were editing; run the command again")
            }
            Error::Secret(SecretError::NotFound { .. }) => Some("check the name and --namespace"),
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}
