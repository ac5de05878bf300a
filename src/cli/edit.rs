//! The edit-secret command.
//!
//! Wires configuration, kubectl and the editor into the core workflow and
//! reports the outcome.

use tracing::debug;

use crate::cli::{output, Cli};
use crate::core::config::Config;
use crate::core::editor::{self, TerminalEditor};
use crate::core::fields::EditScope;
use crate::core::repository::Kubectl;
use crate::core::workflow::{self, EditRequest, Outcome};
use crate::error::Result;

/// Edit a secret interactively.
pub fn execute(cli: Cli) -> Result<()> {
    let config = Config::load()?;

    let kubectl = Kubectl::locate(config.kubectl.path.as_deref(), cli.cluster_flags())?;
    let namespace = kubectl.resolve_namespace(cli.namespace.as_deref())?;

    let command = editor::resolve_from_env(cli.editor.as_deref(), &config.editor_candidates())?;
    let editor = TerminalEditor::new(command);

    let request = EditRequest {
        name: cli.name,
        namespace,
        scope: EditScope::from_key(cli.key),
    };
    debug!(?request, "starting edit");

    match workflow::run(&request, &kubectl, &editor)? {
        Outcome::Cancelled => output::dimmed("Edit cancelled, no changes made."),
        Outcome::Unchanged => output::dimmed("No changes detected."),
        Outcome::Edited { .. } => output::status(&format!("secret/{} edited", request.name)),
    }

    Ok(())
}
