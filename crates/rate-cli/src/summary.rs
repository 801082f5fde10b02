use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use rate_model::ColumnRef;

use crate::types::{FieldSummary, GenerateSummary};

pub fn print_summary(summary: &GenerateSummary) {
    println!("Source: {}", summary.source.display());
    println!("Output: {}", summary.output.display());
    if summary.config.is_identity() {
        println!("Rows: {}  (no discount or gain)", summary.rows);
    } else {
        println!(
            "Rows: {}  Discount: {}%  Gain: {}%",
            summary.rows, summary.config.discount_pct, summary.config.gain_pct
        );
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Field"),
        header_cell("Source column"),
        header_cell("Default"),
        header_cell("Kept verbatim"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 3, CellAlignment::Right);
    for field in &summary.fields {
        table.add_row(vec![
            Cell::new(field.field).add_attribute(Attribute::Bold),
            column_cell(field),
            match &field.default {
                Some(value) => Cell::new(value),
                None => dim_cell("-"),
            },
            count_cell(field.field.is_numeric().then_some(field.pass_through)),
        ]);
    }
    println!("{table}");
    if summary.pass_through > 0 {
        eprintln!(
            "warning: {} rate/setup value(s) were not numeric and were kept unchanged",
            summary.pass_through
        );
    }
}

fn column_cell(field: &FieldSummary) -> Cell {
    match &field.column {
        ColumnRef::Column(name) if field.found => Cell::new(name).fg(Color::Green),
        ColumnRef::Column(name) => Cell::new(format!("{name} (not found)")).fg(Color::Yellow),
        ColumnRef::Unmapped => dim_cell("(default)"),
    }
}

fn count_cell(count: Option<usize>) -> Cell {
    match count {
        Some(value) if value > 0 => Cell::new(value)
            .fg(Color::Yellow)
            .add_attribute(Attribute::Bold),
        Some(value) => dim_cell(value),
        None => dim_cell("-"),
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

pub fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

pub fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
