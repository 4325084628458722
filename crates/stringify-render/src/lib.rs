//! Rendering of the value-to-name lookup source.
//!
//! - [`Template`]: `{{ slot }}` substitution with declared failure modes
//! - [`render_document`]: five case blocks plus the file name
//! - [`write_if_changed`]: content-compared, idempotent output

mod document;
mod error;
mod output;
mod template;

pub use document::{FILENAME_SLOT, case_block, case_line, render_document, required_slots};
pub use error::{RenderError, Result};
pub use output::{WriteOutcome, is_up_to_date, write_if_changed};
pub use template::{SlotValues, Template};
