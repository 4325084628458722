//! Assembly of the generated lookup source.

use stringify_model::{Category, Symbol, SymbolRegistry};

use crate::error::Result;
use crate::template::{SlotValues, Template};

/// Slot receiving the output file name.
pub const FILENAME_SLOT: &str = "filename";

/// Every slot the generator fills, in template order.
pub fn required_slots() -> impl Iterator<Item = &'static str> {
    std::iter::once(FILENAME_SLOT).chain(Category::ALL.iter().map(Category::slot_name))
}

/// One switch case returning the stringified symbol.
pub fn case_line(name: &str) -> String {
    format!("        case (unsigned int){name}: return \"{name}\";")
}

/// Case lines of one category joined by newlines, in registry order.
pub fn case_block(symbols: &[Symbol]) -> String {
    symbols
        .iter()
        .map(|symbol| case_line(&symbol.name))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render the lookup source for `registry`.
///
/// Output depends only on the inputs, so rendering the same registry twice
/// yields identical bytes.
pub fn render_document(
    template: &Template,
    registry: &SymbolRegistry,
    file_name: &str,
) -> Result<String> {
    let mut values = SlotValues::new();
    values.insert(FILENAME_SLOT.to_string(), file_name.to_string());
    for category in Category::ALL {
        values.insert(
            category.slot_name().to_string(),
            case_block(registry.symbols(category)),
        );
    }
    template.render(&values)
}
