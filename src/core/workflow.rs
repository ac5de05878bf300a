//! Edit workflow.
//!
//! Read the secret once, let the user edit its decoded fields, and write it
//! back at most once:
//!
//! ```text
//! get → extract → render → edit session → parse → compare → diff → update
//! ```
//!
//! Any failure before `update` aborts without touching the stored secret.

use tracing::{debug, info};

use crate::core::change;
use crate::core::diff::FieldDiff;
use crate::core::document::{self, DocumentContext};
use crate::core::editor::Editor;
use crate::core::fields::{self, EditScope};
use crate::core::repository::SecretRepository;
use crate::core::secret::Secret;
use crate::core::session::{self, EditResult};
use crate::error::Result;

/// What to edit. Fixed for the whole run.
#[derive(Debug, Clone)]
pub struct EditRequest {
    pub name: String,
    pub namespace: String,
    pub scope: EditScope,
}

/// How an edit run ended.
#[derive(Debug)]
pub enum Outcome {
    /// The document was saved byte-for-byte unchanged.
    Cancelled,
    /// The document changed but the fields did not.
    Unchanged,
    /// The secret was updated.
    Edited { secret: Secret, diff: FieldDiff },
}

/// Run one edit of `request` against `repo`, using `editor` for the edit.
///
/// # Errors
///
/// Propagates lookup, extraction, editor, temp file, parse and update
/// failures. Nothing is written unless every earlier step succeeded.
pub fn run<R, E>(request: &EditRequest, repo: &R, editor: &E) -> Result<Outcome>
where
    R: SecretRepository,
    E: Editor,
{
    let EditRequest {
        name,
        namespace,
        scope,
    } = request;
    info!(secret = %name, %namespace, %scope, "editing secret");

    let mut secret = repo.get(namespace, name)?;
    let before = fields::extract(&secret, name, scope)?;
    debug!(keys = before.len(), "decoded fields");

    let ctx = DocumentContext {
        name: name.as_str(),
        namespace: namespace.as_str(),
        scope,
    };
    let content = zeroize::Zeroizing::new(document::render(&before, ctx)?);

    let edited = match session::edit(editor, name, &content)? {
        EditResult::Cancelled => {
            debug!("document unchanged");
            return Ok(Outcome::Cancelled);
        }
        EditResult::Edited(text) => text,
    };

    let after = document::parse(&edited)?;
    if !change::has_semantic_change(&before, &after) {
        debug!("fields unchanged");
        return Ok(Outcome::Unchanged);
    }

    let diff = FieldDiff::compute(&before, &after, scope);
    debug!(
        added = diff.added().len(),
        updated = diff.updated().len(),
        removed = diff.removed().len(),
        "applying changes"
    );
    diff.apply(&mut secret);

    let secret = repo.update(namespace, name, &secret)?;
    info!(secret = %name, "secret updated");

    Ok(Outcome::Edited { secret, diff })
}
