//! In-memory workbook model
//!
//! Sheets are plain 2-D arrays of cells with the header as the first row.
//! Backends in [`super::xlsx`] serialize them; everything here is pure data
//! so the row layout can be tested without touching the file system.

use crate::document::models::QuestionRecord;

pub const DEFAULT_SHEET_NAME: &str = "Quiz Questions";
pub const QUESTION_TYPE: &str = "Multiple Choice";
pub const TIME_LIMIT_SECONDS: &str = "30";
pub const NOT_DETECTED: &str = "Not detected";

pub const HEADER: [&str; 9] = [
    "Question Text",
    "Question Type",
    "Option 1",
    "Option 2",
    "Option 3",
    "Option 4",
    "Option 5",
    "Correct Answer",
    "Time in seconds",
];

/// Display widths in characters, one per header column
pub const COLUMN_WIDTHS: [f64; 9] = [50.0, 15.0, 30.0, 30.0, 30.0, 30.0, 30.0, 15.0, 15.0];

#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Number(f64),
    Empty,
}

impl CellValue {
    pub fn text(value: impl Into<String>) -> Self {
        let value = value.into();
        if value.is_empty() {
            CellValue::Empty
        } else {
            CellValue::Text(value)
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(text) => Some(text),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sheet {
    rows: Vec<Vec<CellValue>>,
    column_widths: Vec<f64>,
}

impl Sheet {
    /// Build a sheet from rows; the first row is the header
    pub fn from_rows(rows: Vec<Vec<CellValue>>) -> Self {
        Self {
            rows,
            column_widths: Vec::new(),
        }
    }

    pub fn set_column_widths(&mut self, widths: &[f64]) {
        self.column_widths = widths.to_vec();
    }

    pub fn rows(&self) -> &[Vec<CellValue>] {
        &self.rows
    }

    pub fn header(&self) -> Option<&[CellValue]> {
        self.rows.first().map(Vec::as_slice)
    }

    /// Rows after the header
    pub fn data_rows(&self) -> &[Vec<CellValue>] {
        self.rows.get(1..).unwrap_or(&[])
    }

    pub fn column_widths(&self) -> &[f64] {
        &self.column_widths
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NamedSheet {
    pub name: String,
    pub sheet: Sheet,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Workbook {
    sheets: Vec<NamedSheet>,
}

impl Workbook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a sheet under the given tab name
    pub fn append_sheet(&mut self, sheet: Sheet, name: impl Into<String>) {
        self.sheets.push(NamedSheet {
            name: name.into(),
            sheet,
        });
    }

    pub fn sheets(&self) -> &[NamedSheet] {
        &self.sheets
    }

    pub fn sheet(&self, name: &str) -> Option<&Sheet> {
        self.sheets
            .iter()
            .find(|named| named.name == name)
            .map(|named| &named.sheet)
    }
}

/// One question flattened into the import layout
#[derive(Debug, Clone, PartialEq)]
pub struct OutputRow {
    pub question: String,
    pub options: [String; 4],
    pub correct_answer: Option<usize>,
}

impl From<&QuestionRecord> for OutputRow {
    fn from(record: &QuestionRecord) -> Self {
        Self {
            question: record.question.clone(),
            options: [1, 2, 3, 4].map(|position| record.option_text(position).to_string()),
            correct_answer: record.correct_answer,
        }
    }
}

impl OutputRow {
    pub fn into_cells(self) -> Vec<CellValue> {
        let [o1, o2, o3, o4] = self.options;
        let correct = match self.correct_answer {
            Some(position) => CellValue::Number(position as f64),
            None => CellValue::text(NOT_DETECTED),
        };

        vec![
            CellValue::text(self.question),
            CellValue::text(QUESTION_TYPE),
            CellValue::text(o1),
            CellValue::text(o2),
            CellValue::text(o3),
            CellValue::text(o4),
            CellValue::Empty,
            correct,
            CellValue::text(TIME_LIMIT_SECONDS),
        ]
    }
}

/// Build the quiz sheet: header, one row per record, fixed column widths
pub fn build_quiz_sheet(records: &[QuestionRecord]) -> Sheet {
    let mut rows = Vec::with_capacity(records.len() + 1);
    rows.push(HEADER.iter().map(|title| CellValue::text(*title)).collect());
    rows.extend(records.iter().map(|record| OutputRow::from(record).into_cells()));

    let mut sheet = Sheet::from_rows(rows);
    sheet.set_column_widths(&COLUMN_WIDTHS);
    sheet
}

pub fn build_quiz_workbook(records: &[QuestionRecord], sheet_name: &str) -> Workbook {
    let mut workbook = Workbook::new();
    workbook.append_sheet(build_quiz_sheet(records), sheet_name);
    workbook
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::models::AnswerOption;

    fn record(number: usize, correct_answer: Option<usize>) -> QuestionRecord {
        QuestionRecord {
            number,
            question: format!("Question {number}"),
            options: ["3", "4", "5", "6"]
                .iter()
                .enumerate()
                .map(|(i, text)| AnswerOption {
                    text: text.to_string(),
                    is_correct: correct_answer == Some(i + 1),
                })
                .collect(),
            correct_answer,
        }
    }

    #[test]
    fn header_row_comes_first() {
        let sheet = build_quiz_sheet(&[record(1, Some(2))]);
        let header: Vec<_> = sheet
            .header()
            .unwrap()
            .iter()
            .map(|c| c.as_text().unwrap())
            .collect();
        assert_eq!(header, HEADER);
        assert_eq!(sheet.column_widths(), COLUMN_WIDTHS);
    }

    #[test]
    fn detected_answer_is_numeric() {
        let sheet = build_quiz_sheet(&[record(1, Some(2))]);
        assert_eq!(
            sheet.data_rows()[0],
            vec![
                CellValue::text("Question 1"),
                CellValue::text("Multiple Choice"),
                CellValue::text("3"),
                CellValue::text("4"),
                CellValue::text("5"),
                CellValue::text("6"),
                CellValue::Empty,
                CellValue::Number(2.0),
                CellValue::text("30"),
            ]
        );
    }

    #[test]
    fn undetected_answer_is_labelled() {
        let sheet = build_quiz_sheet(&[record(1, None)]);
        assert_eq!(sheet.data_rows()[0][7], CellValue::text("Not detected"));
    }

    #[test]
    fn missing_options_become_empty_cells() {
        let mut short = record(1, None);
        short.options.truncate(2);
        let cells = OutputRow::from(&short).into_cells();
        assert_eq!(cells[4], CellValue::Empty);
        assert_eq!(cells[5], CellValue::Empty);
    }

    #[test]
    fn empty_records_give_header_only() {
        let workbook = build_quiz_workbook(&[], DEFAULT_SHEET_NAME);
        let sheet = workbook.sheet(DEFAULT_SHEET_NAME).unwrap();
        assert_eq!(sheet.rows().len(), 1);
        assert!(sheet.data_rows().is_empty());
    }
}
