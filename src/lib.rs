//! quizsheet: convert .docx quizzes into importable spreadsheets
//!
//! This library reads a Word document laid out as a question followed by
//! four answer options, with the correct option in bold, and produces one
//! spreadsheet row per question.

pub mod config;
pub mod document;
pub mod error;
pub mod export;
pub mod pipeline;
pub mod quiz;

use serde::{Deserialize, Serialize};

/// Export format options
#[derive(
    clap::ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Excel workbook for quiz platform import
    #[default]
    Xlsx,
    /// Parsed questions as JSON
    Json,
}

// Re-export commonly used types
pub use config::QuizConfig;
pub use document::{DocumentDecoder, DocxDecoder, NormalizedLine, QuestionRecord};
pub use error::{ConfigError, DecodeError, ExportError, PipelineError};
pub use export::{SpreadsheetWriter, XlsxWriter};
pub use pipeline::run;
