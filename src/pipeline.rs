//! Conversion run orchestration
//!
//! decode → normalize → group → export. Each phase returns its own error;
//! a decode failure stops the run before anything is written.

use std::path::Path;
use tracing::{debug, info};

use crate::ExportFormat;
use crate::config::QuizConfig;
use crate::document::{DocumentDecoder, QuestionRecord, normalize_markup};
use crate::error::{DecodeError, ExportError, PipelineError};
use crate::export::{SpreadsheetWriter, build_quiz_workbook, write_questions_json};
use crate::quiz::group_questions;

/// Parse questions out of decoder markup
pub fn parse_markup(markup: &str) -> Vec<QuestionRecord> {
    let lines = normalize_markup(markup);
    debug!(lines = lines.len(), "normalized document lines");
    group_questions(&lines)
}

/// Decode the document at `path` and parse its questions
pub fn parse_quiz_document<D>(
    decoder: &D,
    path: &Path,
) -> Result<Vec<QuestionRecord>, DecodeError>
where
    D: DocumentDecoder + ?Sized,
{
    let markup = decoder.decode(path)?;
    let questions = parse_markup(&markup);
    info!("Parsed {} questions successfully!", questions.len());
    Ok(questions)
}

/// Write the records in the configured format
pub fn export_questions<W>(
    questions: &[QuestionRecord],
    config: &QuizConfig,
    writer: &W,
) -> Result<(), ExportError>
where
    W: SpreadsheetWriter + ?Sized,
{
    match config.format {
        ExportFormat::Xlsx => {
            let workbook = build_quiz_workbook(questions, &config.sheet_name);
            writer.write(&workbook, &config.output)?;
            info!(
                "Excel file exported successfully: {}",
                config.output.display()
            );
        }
        ExportFormat::Json => {
            write_questions_json(questions, &config.output)?;
            info!(
                "JSON file exported successfully: {}",
                config.output.display()
            );
        }
    }
    Ok(())
}

/// Run a full conversion and return the parsed questions
pub fn run<D, W>(
    config: &QuizConfig,
    decoder: &D,
    writer: &W,
) -> Result<Vec<QuestionRecord>, PipelineError>
where
    D: DocumentDecoder + ?Sized,
    W: SpreadsheetWriter + ?Sized,
{
    let questions = parse_quiz_document(decoder, &config.input)?;
    export_questions(&questions, config, writer)?;
    Ok(questions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::{CellValue, Workbook};
    use std::cell::RefCell;
    use std::path::PathBuf;

    struct MarkupDecoder(&'static str);

    impl DocumentDecoder for MarkupDecoder {
        fn decode(&self, _path: &Path) -> Result<String, DecodeError> {
            Ok(self.0.to_string())
        }
    }

    struct FailingDecoder;

    impl DocumentDecoder for FailingDecoder {
        fn decode(&self, _path: &Path) -> Result<String, DecodeError> {
            Err(DecodeError::MissingDocumentXml)
        }
    }

    #[derive(Default)]
    struct RecordingWriter {
        written: RefCell<Vec<(PathBuf, Workbook)>>,
    }

    impl SpreadsheetWriter for RecordingWriter {
        fn write(&self, workbook: &Workbook, path: &Path) -> Result<(), ExportError> {
            self.written
                .borrow_mut()
                .push((path.to_path_buf(), workbook.clone()));
            Ok(())
        }
    }

    struct FailingWriter;

    impl SpreadsheetWriter for FailingWriter {
        fn write(&self, _workbook: &Workbook, _path: &Path) -> Result<(), ExportError> {
            Err(ExportError::Io(std::io::Error::other("disk full")))
        }
    }

    const TWO_PLUS_TWO: &str =
        "<p>What is 2+2?</p><p>a) 3</p><p>b) <strong>4</strong></p><p>c) 5</p><p>d) 6</p>";

    #[test]
    fn parses_single_question_scenario() {
        let questions = parse_markup(TWO_PLUS_TWO);
        assert_eq!(questions.len(), 1);
        let q = &questions[0];
        assert_eq!(q.number, 1);
        assert_eq!(q.question, "What is 2+2?");
        let options: Vec<&str> = q.options.iter().map(|o| o.text.as_str()).collect();
        assert_eq!(options, vec!["3", "4", "5", "6"]);
        assert_eq!(q.correct_answer, Some(2));
    }

    #[test]
    fn run_writes_workbook_to_configured_path() {
        let config = QuizConfig {
            output: PathBuf::from("out.xlsx"),
            ..QuizConfig::default()
        };
        let writer = RecordingWriter::default();

        let questions = run(&config, &MarkupDecoder(TWO_PLUS_TWO), &writer).unwrap();
        assert_eq!(questions.len(), 1);

        let written = writer.written.borrow();
        assert_eq!(written.len(), 1);
        let (path, workbook) = &written[0];
        assert_eq!(path, &PathBuf::from("out.xlsx"));
        let sheet = workbook.sheet("Quiz Questions").unwrap();
        assert_eq!(sheet.data_rows()[0][7], CellValue::Number(2.0));
    }

    #[test]
    fn too_few_lines_export_header_only() {
        let markup = "<p>Q?</p><p>a) 1</p><p>b) 2</p><p>c) 3</p>";
        let writer = RecordingWriter::default();

        let questions = run(&QuizConfig::default(), &MarkupDecoder(markup), &writer).unwrap();
        assert!(questions.is_empty());

        let written = writer.written.borrow();
        let sheet = written[0].1.sheet("Quiz Questions").unwrap();
        assert_eq!(sheet.rows().len(), 1);
    }

    #[test]
    fn decode_failure_writes_nothing() {
        let writer = RecordingWriter::default();
        let err = run(&QuizConfig::default(), &FailingDecoder, &writer).unwrap_err();
        assert!(matches!(err, PipelineError::Decode(_)));
        assert!(writer.written.borrow().is_empty());
    }

    #[test]
    fn export_failure_is_reported() {
        let err = run(
            &QuizConfig::default(),
            &MarkupDecoder(TWO_PLUS_TWO),
            &FailingWriter,
        )
        .unwrap_err();
        assert!(matches!(err, PipelineError::Export(_)));
        assert!(err.to_string().starts_with("Error exporting to Excel"));
    }

    #[test]
    fn json_format_bypasses_spreadsheet_writer() {
        let dir = tempfile::tempdir().unwrap();
        let config = QuizConfig {
            output: dir.path().join("quiz.json"),
            format: ExportFormat::Json,
            ..QuizConfig::default()
        };
        let writer = RecordingWriter::default();

        run(&config, &MarkupDecoder(TWO_PLUS_TWO), &writer).unwrap();
        assert!(writer.written.borrow().is_empty());
        assert!(config.output.exists());
    }
}
