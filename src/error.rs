//! Error types for each phase of a conversion run
//!
//! Decoding, exporting and configuration each get their own error enum so
//! callers can tell which phase failed. `PipelineError` wraps them for
//! [`crate::pipeline::run`].

use std::path::PathBuf;
use thiserror::Error;

/// Failure to read the source document or turn it into markup.
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(
        "Invalid file format. Expected .docx file, got .{extension}\n\
         Note: only Word .docx files are supported (not .doc, .xlsx, .zip, etc.)"
    )]
    InvalidExtension { extension: String },

    #[error("{path} is not a valid .docx archive: {source}")]
    NotAnArchive {
        path: PathBuf,
        #[source]
        source: zip::result::ZipError,
    },

    #[error(
        "This appears to be an Excel file (.xlsx).\n\
         Only Word documents (.docx) can be converted."
    )]
    ExcelFile,

    #[error(
        "Invalid .docx file: missing word/document.xml\n\
         This file may be corrupted or is not a valid Word document."
    )]
    MissingDocumentXml,

    #[error("failed to parse document: {0}")]
    Docx(#[from] docx_rs::ReaderError),
}

/// Failure while writing the output file.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("spreadsheet error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("sheet has {columns} columns, more than a worksheet can hold")]
    TooManyColumns { columns: usize },

    #[error("sheet has {rows} rows, more than a worksheet can hold")]
    TooManyRows { rows: usize },
}

/// Failure to load or save the configuration file.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("no configuration directory available on this platform")]
    NoConfigDir,
}

/// A failed conversion run, tagged with the phase that failed.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Error reading the docx file: {0}")]
    Decode(#[from] DecodeError),

    #[error("Error exporting to Excel: {0}")]
    Export(#[from] ExportError),
}
