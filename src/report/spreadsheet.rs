//! Spreadsheet export.
//!
//! Writes the same rows as the terminal table into a single worksheet: one
//! bold header row followed by one row per day. Only values are written, no
//! formulas and no total row.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use rust_xlsxwriter::{Format, FormatAlign, FormatBorder, Workbook, XlsxError};

use crate::error::{EngineError, EngineResult};
use crate::models::Estimate;

use super::{COLUMNS, CellValue, ReportRow};

/// Suggested file name for downloads.
pub const EXPORT_FILE_NAME: &str = "Montagekosten.xlsx";

/// MIME type of the exported workbook.
pub const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

const SHEET_NAME: &str = "Assembly costs";

fn export_error(error: XlsxError) -> EngineError {
    EngineError::ExportError {
        message: error.to_string(),
    }
}

fn to_number(value: Decimal) -> f64 {
    value.to_f64().unwrap_or_default()
}

/// Exports the day-by-day breakdown of an estimate as xlsx bytes.
pub fn export_xlsx(estimate: &Estimate) -> EngineResult<Vec<u8>> {
    let header = Format::new()
        .set_bold()
        .set_align(FormatAlign::Center)
        .set_border(FormatBorder::Thin);
    let text = Format::new().set_border(FormatBorder::Thin);
    let integer = Format::new()
        .set_num_format("0")
        .set_border(FormatBorder::Thin);
    let hours = Format::new()
        .set_num_format("0.00")
        .set_border(FormatBorder::Thin);
    let money = Format::new()
        .set_num_format("#,##0.00")
        .set_border(FormatBorder::Thin);

    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name(SHEET_NAME).map_err(export_error)?;

    for (col, name) in COLUMNS.iter().enumerate() {
        sheet
            .write_with_format(0, col as u16, *name, &header)
            .map_err(export_error)?;
    }

    for (index, day) in estimate.summary.days.iter().enumerate() {
        let row = (index + 1) as u32;
        for (col, cell) in ReportRow::from(day).cells().into_iter().enumerate() {
            let col = col as u16;
            match cell {
                CellValue::Text(value) => sheet.write_with_format(row, col, value.as_str(), &text),
                CellValue::Count(value) => sheet.write_with_format(row, col, value, &integer),
                CellValue::Hours(value) => {
                    sheet.write_with_format(row, col, to_number(value), &hours)
                }
                CellValue::Money(value) => {
                    sheet.write_with_format(row, col, to_number(value), &money)
                }
            }
            .map_err(export_error)?;
        }
    }

    sheet.autofit();

    let buffer = workbook.save_to_buffer().map_err(export_error)?;

    tracing::debug!(
        days = estimate.summary.days.len(),
        bytes = buffer.len(),
        "Spreadsheet exported"
    );

    Ok(buffer)
}
