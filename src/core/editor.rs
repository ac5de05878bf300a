//! External editor resolution and invocation.
//!
//! Precedence: `--editor`, then `$KUBE_EDITOR`, then `$EDITOR`, then the first
//! default editor found on `PATH`.
//!
//! An editor command may carry arguments (`"code --wait"`). It is split on
//! whitespace, so quoted arguments containing spaces are not supported.

use std::fmt;
use std::path::Path;
use std::process::{Command, Stdio};
use tracing::debug;

use crate::core::constants;
use crate::error::{EditorError, Result};

/// Something that lets the user edit a file in place.
pub trait Editor {
    /// Edit the file at `path`, blocking until done.
    ///
    /// # Errors
    ///
    /// Returns `EditorError` if the editor cannot start or does not exit cleanly.
    fn edit(&self, path: &Path) -> Result<()>;
}

impl<F> Editor for F
where
    F: Fn(&Path) -> Result<()>,
{
    fn edit(&self, path: &Path) -> Result<()> {
        self(path)
    }
}

/// A resolved editor program and its leading arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorCommand {
    program: String,
    args: Vec<String>,
}

impl EditorCommand {
    /// Split a command line on whitespace. Returns `None` for blank input.
    pub fn parse(line: &str) -> Option<Self> {
        let mut parts = line.split_whitespace().map(String::from);
        let program = parts.next()?;
        Some(Self {
            program,
            args: parts.collect(),
        })
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }
}

impl fmt::Display for EditorCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// Pick the editor command.
///
/// Blank values count as unset. `probe` reports whether a default editor is
/// available; the first candidate it accepts wins.
///
/// # Errors
///
/// Returns `EditorError::NotFound` if nothing resolves.
pub fn resolve<P>(
    explicit: Option<&str>,
    kube_editor: Option<&str>,
    editor: Option<&str>,
    candidates: &[String],
    probe: P,
) -> Result<EditorCommand>
where
    P: Fn(&str) -> bool,
{
    let configured = [explicit, kube_editor, editor]
        .into_iter()
        .flatten()
        .find_map(EditorCommand::parse);
    if let Some(command) = configured {
        return Ok(command);
    }

    candidates
        .iter()
        .find(|name| probe(name))
        .and_then(|name| EditorCommand::parse(name))
        .ok_or_else(|| EditorError::NotFound.into())
}

/// Resolve against the process environment and `PATH`.
pub fn resolve_from_env(explicit: Option<&str>, candidates: &[String]) -> Result<EditorCommand> {
    let kube_editor = std::env::var(constants::KUBE_EDITOR_VAR).ok();
    let editor = std::env::var(constants::EDITOR_VAR).ok();
    let command = resolve(
        explicit,
        kube_editor.as_deref(),
        editor.as_deref(),
        candidates,
        |name| which::which(name).is_ok(),
    )?;
    debug!(editor = %command, "resolved editor");
    Ok(command)
}

/// Runs the editor as a child process attached to this terminal.
#[derive(Debug, Clone)]
pub struct TerminalEditor {
    command: EditorCommand,
}

impl TerminalEditor {
    pub fn new(command: EditorCommand) -> Self {
        Self { command }
    }
}

impl Editor for TerminalEditor {
    fn edit(&self, path: &Path) -> Result<()> {
        debug!(program = %self.command.program, path = %path.display(), "launching editor");

        let status = Command::new(&self.command.program)
            .args(&self.command.args)
            .arg(path)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|source| EditorError::Launch {
                program: self.command.program.clone(),
                source,
            })?;

        if !status.success() {
            return Err(EditorError::Failed {
                program: self.command.program.clone(),
                status,
            }
            .into());
        }

        Ok(())
    }
}
