//! Accepted symbols and the per-category registry.

use std::collections::BTreeMap;

use crate::category::Category;

/// An identifier accepted for output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
    /// Identifier exactly as declared in the header.
    pub name: String,
    /// Category the symbol was extracted for.
    pub category: Category,
    /// Insertion index within the category (0-based).
    pub position: usize,
}

/// Ordered symbols per category.
///
/// Registration never deduplicates: a name declared twice produces two
/// entries and therefore two case labels.
#[derive(Debug, Clone, Default)]
pub struct SymbolRegistry {
    symbols: BTreeMap<Category, Vec<Symbol>>,
}

impl SymbolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `name` to the category's sequence and return the stored symbol.
    pub fn register(&mut self, category: Category, name: impl Into<String>) -> &Symbol {
        let entries = self.symbols.entry(category).or_default();
        let position = entries.len();
        entries.push(Symbol {
            name: name.into(),
            category,
            position,
        });
        &entries[position]
    }

    /// Symbols of a category in first-seen order.
    pub fn symbols(&self, category: Category) -> &[Symbol] {
        self.symbols
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Symbol names of a category in first-seen order.
    pub fn names(&self, category: Category) -> impl Iterator<Item = &str> + '_ {
        self.symbols(category).iter().map(|s| s.name.as_str())
    }

    /// Number of symbols registered for a category.
    pub fn len(&self, category: Category) -> usize {
        self.symbols(category).len()
    }

    /// Returns true when no symbol has been registered in any category.
    pub fn is_empty(&self) -> bool {
        self.symbols.values().all(Vec::is_empty)
    }

    /// Per-category totals in output order, including empty categories.
    pub fn counts(&self) -> Vec<(Category, usize)> {
        Category::ALL
            .iter()
            .map(|category| (*category, self.len(*category)))
            .collect()
    }
}
