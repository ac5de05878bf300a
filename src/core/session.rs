//! Edit session.
//!
//! Owns the temporary edit document for the length of one editor run. The
//! file is removed when the session ends, on success, error or unwind.

use std::io::Write;
use tempfile::{Builder, TempPath};
use tracing::{debug, warn};
use zeroize::Zeroizing;

use crate::core::change;
use crate::core::constants;
use crate::core::editor::Editor;
use crate::error::{DocumentError, Result, TempFileError};

/// Result of one editor run.
#[derive(Debug)]
pub enum EditResult {
    /// The file was saved unchanged.
    Cancelled,
    /// The edited file contents.
    Edited(Zeroizing<String>),
}

/// Write `content` to a fresh temp file, let `editor` change it, read it back.
///
/// `label` distinguishes concurrent sessions in the file name
/// (`kubectl-edit-secret-<label>-XXXX.yaml`).
///
/// # Errors
///
/// Returns `TempFileError` on create/write/read failure,
/// `DocumentError::NotUtf8` if the saved file is not UTF-8, and propagates
/// editor failures. The temp file is removed in every case.
pub fn edit<E: Editor>(editor: &E, label: &str, content: &str) -> Result<EditResult> {
    let path = write_temp(label, content)?;
    debug!(path = %path.display(), "wrote edit document");

    let before = Zeroizing::new(std::fs::read(&path).map_err(TempFileError::Read)?);

    editor.edit(&path)?;

    let after = Zeroizing::new(std::fs::read(&path).map_err(TempFileError::Read)?);
    close(path);

    if change::was_cancelled(&before, &after) {
        return Ok(EditResult::Cancelled);
    }

    let text = String::from_utf8(after.to_vec()).map_err(|_| DocumentError::NotUtf8)?;
    Ok(EditResult::Edited(Zeroizing::new(text)))
}

fn write_temp(label: &str, content: &str) -> Result<TempPath> {
    let prefix = format!("{}-{}-", constants::TEMP_PREFIX, sanitize(label));
    let mut file = Builder::new()
        .prefix(&prefix)
        .suffix(constants::TEMP_SUFFIX)
        .tempfile()
        .map_err(TempFileError::Create)?;

    file.write_all(content.as_bytes())
        .and_then(|()| file.flush())
        .map_err(TempFileError::Write)?;

    // Release our handle so the editor is free to replace the file.
    Ok(file.into_temp_path())
}

/// Remove the temp file, logging instead of failing.
fn close(path: TempPath) {
    let shown = path.display().to_string();
    if let Err(e) = path.close() {
        warn!(path = %shown, error = %e, "failed to remove temp file");
    }
}

fn sanitize(label: &str) -> String {
    label
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '.' { c } else { '_' })
        .collect()
}
