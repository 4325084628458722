//! Registry population from header text.

use stringify_model::{Category, NamingRules, SymbolRegistry};
use tracing::{debug, trace};

use crate::classify::{enum_entries, error_symbols, event_symbols};
use crate::error::{ExtractError, Result};
use crate::resolve::{EnumCursor, Resolution};
use crate::sources::HeaderSources;

/// Register result codes from an errors header. Returns the number added.
///
/// Stops at the first malformed directive; symbols registered before it
/// stay in the registry, so callers should discard it on error.
pub fn extract_errors(
    text: &str,
    rules: &NamingRules,
    registry: &mut SymbolRegistry,
) -> Result<usize> {
    let mut added = 0;
    for name in error_symbols(text, rules) {
        registry.register(Category::Errors, name?);
        added += 1;
    }
    Ok(added)
}

/// Register event names from an events header. Returns the number added.
pub fn extract_events(text: &str, rules: &NamingRules, registry: &mut SymbolRegistry) -> usize {
    let mut added = 0;
    for name in event_symbols(text, rules) {
        registry.register(Category::Events, name);
        added += 1;
    }
    added
}

/// Register the enumerators of one type-code category, skipping aliases.
///
/// Each call starts a fresh cursor, so the same enumerations text can be
/// scanned once per category.
pub fn extract_enumeration(
    text: &str,
    category: Category,
    rules: &NamingRules,
    registry: &mut SymbolRegistry,
) -> Result<usize> {
    let prefix = rules
        .enum_prefix(category)
        .ok_or(ExtractError::NotEnumeration { category })?;

    let mut cursor = EnumCursor::new();
    let mut added = 0;
    for entry in enum_entries(text, prefix) {
        match cursor.resolve(&entry) {
            Resolution::Accept(value) => {
                trace!(%category, name = entry.name, value, "accepted enumerator");
                registry.register(category, entry.name);
                added += 1;
            }
            Resolution::SkipAlias => {
                debug!(%category, name = entry.name, alias = entry.value, "skipped enum alias");
            }
        }
    }
    Ok(added)
}

/// Build the registry for all five categories.
pub fn extract_all(sources: &HeaderSources, rules: &NamingRules) -> Result<SymbolRegistry> {
    let mut registry = SymbolRegistry::new();
    extract_errors(&sources.errors, rules, &mut registry)?;
    extract_events(&sources.events, rules, &mut registry);
    for category in Category::ALL.into_iter().filter(Category::is_enumeration) {
        extract_enumeration(&sources.enums, category, rules, &mut registry)?;
    }
    for (category, count) in registry.counts() {
        debug!(%category, count, "extracted symbols");
    }
    Ok(registry)
}
