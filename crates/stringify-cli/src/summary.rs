use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use stringify_cli::pipeline::{GenerateResult, Outcome};

pub fn print_summary(result: &GenerateResult) {
    println!("Output: {}", result.output_path.display());
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Category"),
        header_cell("Function"),
        header_cell("Symbols"),
    ]);
    apply_table_style(&mut table);
    if let Some(column) = table.column_mut(2) {
        column.set_cell_alignment(CellAlignment::Right);
    }
    let mut total = 0usize;
    for (category, count) in &result.counts {
        total += count;
        table.add_row(vec![
            Cell::new(category.as_str()).fg(Color::Blue),
            Cell::new(category.lookup_function()),
            count_cell(*count),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        dim_cell("-"),
        Cell::new(total).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");
    println!("Status: {}", outcome_label(result.outcome));
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn count_cell(count: usize) -> Cell {
    if count == 0 {
        Cell::new(count).fg(Color::Yellow)
    } else {
        Cell::new(count)
    }
}

fn outcome_label(outcome: Outcome) -> String {
    match outcome {
        Outcome::Unchanged => format!("{outcome} (skipped writing)"),
        Outcome::Written | Outcome::OutOfDate => outcome.to_string(),
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
