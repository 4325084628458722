//! Idempotent output.
//!
//! The generated file is only rewritten when its content changes.

use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use tracing::{debug, info};

use crate::error::{RenderError, Result};

/// What [`write_if_changed`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// The file was missing or different and has been overwritten.
    Written,
    /// The file already held exactly this content.
    Unchanged,
}

impl WriteOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            WriteOutcome::Written => "written",
            WriteOutcome::Unchanged => "unchanged",
        }
    }
}

impl fmt::Display for WriteOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Returns true when `path` already contains exactly `document`.
///
/// A missing file counts as different. Any other read failure is an
/// [`RenderError::OutputWrite`] for `path`.
pub fn is_up_to_date(path: &Path, document: &str) -> Result<bool> {
    match fs::read(path) {
        Ok(existing) => Ok(existing == document.as_bytes()),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!(path = %path.display(), "no existing output");
            Ok(false)
        }
        Err(e) => Err(RenderError::output_write(path, e)),
    }
}

/// Write `document` to `path` unless the file already holds it.
///
/// Parent directories are created as needed.
pub fn write_if_changed(path: &Path, document: &str) -> Result<WriteOutcome> {
    if is_up_to_date(path, document)? {
        info!(path = %path.display(), "skip writing, not changed");
        return Ok(WriteOutcome::Unchanged);
    }

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|e| RenderError::output_write(parent, e))?;
    }
    fs::write(path, document).map_err(|e| RenderError::output_write(path, e))?;
    info!(path = %path.display(), bytes = document.len(), "wrote generated source");
    Ok(WriteOutcome::Written)
}
