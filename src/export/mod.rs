//! Output writers
//!
//! Builds the import sheet from question records and writes it as an
//! .xlsx workbook, or dumps the records as JSON.

pub mod json;
pub mod sheet;
pub mod xlsx;

pub use json::write_questions_json;
pub use sheet::{
    CellValue, DEFAULT_SHEET_NAME, HEADER, OutputRow, Sheet, Workbook, build_quiz_sheet,
    build_quiz_workbook,
};
pub use xlsx::{SpreadsheetWriter, XlsxWriter};
