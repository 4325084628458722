//! Loading of the SDK header files.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::error::{ExtractError, Result};

/// File names of the three input headers inside the header directory.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HeaderFiles {
    pub errors: String,
    pub events: String,
    pub enums: String,
}

impl Default for HeaderFiles {
    fn default() -> Self {
        Self {
            errors: "PrlErrorsValues.h".to_string(),
            events: "PrlEventsValues.h".to_string(),
            enums: "PrlEnums.h".to_string(),
        }
    }
}

impl HeaderFiles {
    /// Full paths of the headers in `dir`, in errors/events/enums order.
    pub fn paths(&self, dir: &Path) -> [PathBuf; 3] {
        [
            dir.join(&self.errors),
            dir.join(&self.events),
            dir.join(&self.enums),
        ]
    }
}

/// Text of the three input headers, read completely before classification.
#[derive(Debug, Clone, Default)]
pub struct HeaderSources {
    pub errors: String,
    pub events: String,
    /// Shared by the handle type, VM state and job operation categories.
    pub enums: String,
}

impl HeaderSources {
    /// Read all headers from `dir`.
    ///
    /// Fails on the first header that cannot be read; nothing is returned
    /// for a partially available set.
    pub fn load(dir: &Path, files: &HeaderFiles) -> Result<Self> {
        let [errors, events, enums] = files.paths(dir);
        Ok(Self {
            errors: read_header(&errors)?,
            events: read_header(&events)?,
            enums: read_header(&enums)?,
        })
    }
}

fn read_header(path: &Path) -> Result<String> {
    let text = fs::read_to_string(path).map_err(|e| ExtractError::missing_input(path, e))?;
    debug!(path = %path.display(), bytes = text.len(), "read header");
    Ok(text)
}
