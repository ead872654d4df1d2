//! Terminal table rendering.

use comfy_table::{Attribute, Cell, CellAlignment, Table, modifiers, presets};

use crate::models::Estimate;

use super::{COLUMNS, CellValue, ReportRow, round_money};

fn to_cell(value: CellValue) -> Cell {
    match value {
        CellValue::Text(_) => Cell::new(value),
        CellValue::Count(_) | CellValue::Hours(_) | CellValue::Money(_) => {
            Cell::new(value).set_alignment(CellAlignment::Right)
        }
    }
}

/// Renders the day-by-day breakdown of an estimate with a closing total row.
pub fn render_table(estimate: &Estimate) -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.set_header(COLUMNS.to_vec());

    for day in &estimate.summary.days {
        let row = ReportRow::from(day);
        table.add_row(row.cells().into_iter().map(to_cell).collect::<Vec<_>>());
    }

    let mut footer: Vec<Cell> = Vec::with_capacity(COLUMNS.len());
    footer.push(Cell::new("Total").add_attribute(Attribute::Bold));
    footer.extend((1..COLUMNS.len() - 1).map(|_| Cell::new("")));
    footer.push(
        to_cell(CellValue::Money(round_money(estimate.summary.total())))
            .add_attribute(Attribute::Bold),
    );
    table.add_row(footer);

    table
}
