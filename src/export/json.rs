//! JSON export of parsed questions

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::document::models::QuestionRecord;
use crate::error::ExportError;

/// Write the records as a pretty-printed JSON array
pub fn write_questions_json(records: &[QuestionRecord], path: &Path) -> Result<(), ExportError> {
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, records)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}
