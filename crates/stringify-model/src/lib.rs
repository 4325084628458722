//! Data model shared by the stringify generator crates.

pub mod category;
pub mod naming;
pub mod symbol;

pub use category::Category;
pub use naming::NamingRules;
pub use symbol::{Symbol, SymbolRegistry};
