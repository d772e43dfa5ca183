//! Document loading
//!
//! Turns a .docx file into HTML-like markup: one `<p>` per paragraph, with
//! bold runs wrapped in `<strong>`. The normalizer only depends on the
//! [`DocumentDecoder`] trait, so tests can feed it markup directly.

use std::path::Path;
use tracing::debug;

use super::io::validate_docx_file;
use super::parsing::formatting::{MarkedRun, extract_paragraph_runs};
use crate::error::DecodeError;

/// Produces markup for the document at `path`.
pub trait DocumentDecoder {
    fn decode(&self, path: &Path) -> Result<String, DecodeError>;
}

/// Decoder for Word .docx files backed by docx-rs
#[derive(Debug, Clone, Copy, Default)]
pub struct DocxDecoder;

impl DocumentDecoder for DocxDecoder {
    fn decode(&self, path: &Path) -> Result<String, DecodeError> {
        validate_docx_file(path)?;

        let file_data = std::fs::read(path).map_err(|source| DecodeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let docx = docx_rs::read_docx(&file_data)?;

        let markup = render_document(&docx.document);
        debug!(
            path = %path.display(),
            bytes = markup.len(),
            "decoded document to markup"
        );
        Ok(markup)
    }
}

/// Render every paragraph of the body, including those inside tables
pub(crate) fn render_document(document: &docx_rs::Document) -> String {
    let mut markup = String::new();

    for child in &document.children {
        match child {
            docx_rs::DocumentChild::Paragraph(para) => render_paragraph(para, &mut markup),
            docx_rs::DocumentChild::Table(table) => render_table(table, &mut markup),
            docx_rs::DocumentChild::StructuredDataTag(tag) => render_block_tag(tag, &mut markup),
            _ => {}
        }
    }

    markup
}

/// Paragraphs and tables wrapped in a block-level content control
fn render_block_tag(tag: &docx_rs::StructuredDataTag, markup: &mut String) {
    for child in &tag.children {
        match child {
            docx_rs::StructuredDataTagChild::Paragraph(para) => render_paragraph(para, markup),
            docx_rs::StructuredDataTagChild::Table(table) => render_table(table, markup),
            docx_rs::StructuredDataTagChild::StructuredDataTag(inner) => {
                render_block_tag(inner, markup)
            }
            _ => {}
        }
    }
}

fn render_table(table: &docx_rs::Table, markup: &mut String) {
    for table_child in &table.rows {
        let docx_rs::TableChild::TableRow(row) = table_child;
        for row_child in &row.cells {
            let docx_rs::TableRowChild::TableCell(cell) = row_child;
            for content in &cell.children {
                match content {
                    docx_rs::TableCellContent::Paragraph(para) => {
                        render_paragraph(para, markup)
                    }
                    docx_rs::TableCellContent::Table(inner) => render_table(inner, markup),
                    _ => {}
                }
            }
        }
    }
}

fn render_paragraph(para: &docx_rs::Paragraph, markup: &mut String) {
    let runs = extract_paragraph_runs(para);
    markup.push_str(&render_runs(&runs));
}

/// Render runs as one paragraph, merging adjacent runs with the same weight
pub(crate) fn render_runs(runs: &[MarkedRun]) -> String {
    let mut out = String::from("<p>");
    let mut in_bold = false;

    for run in runs {
        if run.bold != in_bold {
            out.push_str(if run.bold { "<strong>" } else { "</strong>" });
            in_bold = run.bold;
        }
        out.push_str(&escape_text(&run.text));
    }

    if in_bold {
        out.push_str("</strong>");
    }
    out.push_str("</p>");
    out
}

fn escape_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\n' => escaped.push_str("<br />"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
