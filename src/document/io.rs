//! File validation
//!
//! Checks that an input path points at a real .docx container before
//! handing it to the decoder.

use std::fs::File;
use std::path::Path;
use zip::ZipArchive;

use crate::error::DecodeError;

/// Validates that the file is a legitimate .docx file
pub(crate) fn validate_docx_file(file_path: &Path) -> Result<(), DecodeError> {
    let extension = file_path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("");

    if !extension.eq_ignore_ascii_case("docx") {
        return Err(DecodeError::InvalidExtension {
            extension: extension.to_string(),
        });
    }

    // Check ZIP structure contains word/document.xml
    let file = File::open(file_path).map_err(|source| DecodeError::Io {
        path: file_path.to_path_buf(),
        source,
    })?;
    let mut archive = ZipArchive::new(file).map_err(|source| DecodeError::NotAnArchive {
        path: file_path.to_path_buf(),
        source,
    })?;

    if archive.by_name("word/document.xml").is_err() {
        if archive.by_name("xl/workbook.xml").is_ok() {
            return Err(DecodeError::ExcelFile);
        }
        return Err(DecodeError::MissingDocumentXml);
    }

    Ok(())
}
