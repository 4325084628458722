//! Error types for symbol extraction.

use std::path::PathBuf;
use thiserror::Error;

use stringify_model::Category;

/// Errors that can occur while reading headers or extracting symbols.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// Required header file is missing or unreadable.
    #[error("cannot read input header {path}: {source}")]
    MissingInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A `#define` line lacks the name and value tokens.
    #[error("malformed directive at line {line_number}: {line:?}")]
    MalformedDirective { line_number: usize, line: String },

    /// Enumerator extraction requested for a category without an enum prefix.
    #[error("category {category} is not resolved from the enumerations header")]
    NotEnumeration { category: Category },
}

/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, ExtractError>;

impl ExtractError {
    pub(crate) fn missing_input(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::MissingInput {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn malformed(line_number: usize, line: impl Into<String>) -> Self {
        Self::MalformedDirective {
            line_number,
            line: line.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_directive_display_quotes_line() {
        let err = ExtractError::malformed(12, "#define FOO");
        assert_eq!(
            format!("{err}"),
            "malformed directive at line 12: \"#define FOO\""
        );
    }

    #[test]
    fn missing_input_keeps_io_source() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = ExtractError::missing_input("/tmp/PrlEventsValues.h", io_err);
        assert!(format!("{err}").contains("PrlEventsValues.h"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
