//! Spreadsheet serialization
//!
//! [`SpreadsheetWriter`] is the seam between the workbook model and the
//! file format. [`XlsxWriter`] writes Office Open XML through
//! `rust_xlsxwriter`.

use rust_xlsxwriter::{ColNum, RowNum, Worksheet};
use std::path::Path;
use tracing::debug;

use super::sheet::{CellValue, Sheet, Workbook};
use crate::error::ExportError;

pub trait SpreadsheetWriter {
    fn write(&self, workbook: &Workbook, path: &Path) -> Result<(), ExportError>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct XlsxWriter;

impl SpreadsheetWriter for XlsxWriter {
    fn write(&self, workbook: &Workbook, path: &Path) -> Result<(), ExportError> {
        let mut book = rust_xlsxwriter::Workbook::new();

        for named in workbook.sheets() {
            let mut worksheet = Worksheet::new();
            worksheet.set_name(&named.name)?;
            fill_worksheet(&mut worksheet, &named.sheet)?;
            book.push_worksheet(worksheet);
        }

        book.save(path)?;
        debug!(path = %path.display(), sheets = workbook.sheets().len(), "workbook saved");
        Ok(())
    }
}

fn fill_worksheet(worksheet: &mut Worksheet, sheet: &Sheet) -> Result<(), ExportError> {
    for (row_index, row) in sheet.rows().iter().enumerate() {
        let row_num = RowNum::try_from(row_index).map_err(|_| ExportError::TooManyRows {
            rows: sheet.rows().len(),
        })?;
        for (col_index, cell) in row.iter().enumerate() {
            let col_num = column(col_index, row.len())?;
            match cell {
                CellValue::Text(text) => {
                    worksheet.write_string(row_num, col_num, text)?;
                }
                CellValue::Number(number) => {
                    worksheet.write_number(row_num, col_num, *number)?;
                }
                CellValue::Empty => {}
            }
        }
    }

    let widths = sheet.column_widths();
    for (col_index, width) in widths.iter().enumerate() {
        worksheet.set_column_width(column(col_index, widths.len())?, *width)?;
    }

    Ok(())
}

fn column(index: usize, columns: usize) -> Result<ColNum, ExportError> {
    ColNum::try_from(index).map_err(|_| ExportError::TooManyColumns { columns })
}
