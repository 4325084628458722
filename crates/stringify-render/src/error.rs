//! Error types for rendering and output.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while rendering or writing the generated source.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Template file could not be read.
    #[error("failed to read template {path}: {source}")]
    TemplateRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The template references a slot no value was supplied for.
    #[error("template references unknown slot '{slot}'")]
    UnknownSlot { slot: String },

    /// A slot the generator fills is absent from the template.
    #[error("template is missing required slot '{slot}'")]
    MissingSlot { slot: String },

    /// Writing the output file failed.
    #[error("failed to write {path}: {source}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for rendering operations.
pub type Result<T> = std::result::Result<T, RenderError>;

impl RenderError {
    /// Returns true for the template/engine mismatch variants.
    pub fn is_slot_error(&self) -> bool {
        matches!(
            self,
            RenderError::UnknownSlot { .. } | RenderError::MissingSlot { .. }
        )
    }

    pub(crate) fn output_write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::OutputWrite {
            path: path.into(),
            source,
        }
    }
}
