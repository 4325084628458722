//! Symbol extraction from the SDK headers.
//!
//! Header text flows one way: [`HeaderSources`] are read in full, the
//! [`classify`] iterators pick candidate lines, [`resolve`] filters enum
//! aliases, and [`extract_all`] collects the survivors into a
//! [`SymbolRegistry`](stringify_model::SymbolRegistry).

pub mod classify;
pub mod error;
pub mod extract;
pub mod resolve;
pub mod sources;

pub use classify::{EnumEntry, EnumMatcher, enum_entries, error_symbols, event_symbols};
pub use error::{ExtractError, Result};
pub use extract::{extract_all, extract_enumeration, extract_errors, extract_events};
pub use resolve::{EnumCursor, Resolution, parse_int_literal};
pub use sources::{HeaderFiles, HeaderSources};
