//! Presentation of estimates.
//!
//! An [`Estimate`](crate::models::Estimate) is flattened into [`ReportRow`]s,
//! which are rendered as a terminal table or exported as an xlsx workbook.

mod row;
mod spreadsheet;
mod table;

pub use row::{COLUMNS, CellValue, ReportRow, round_money};
pub use spreadsheet::{EXPORT_FILE_NAME, XLSX_CONTENT_TYPE, export_xlsx};
pub use table::render_table;
