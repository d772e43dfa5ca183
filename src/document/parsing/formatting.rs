//! Text extraction and formatting utilities
//!
//! This module handles extraction of text and the bold flag from docx-rs
//! paragraph and run elements.

/// A run of text with the only formatting bit the quiz format cares about
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct MarkedRun {
    pub text: String,
    pub bold: bool,
}

/// Collect the runs of a paragraph in reading order
pub(crate) fn extract_paragraph_runs(para: &docx_rs::Paragraph) -> Vec<MarkedRun> {
    let mut runs = Vec::new();
    collect_runs(&para.children, &mut runs);
    runs
}

fn collect_runs(children: &[docx_rs::ParagraphChild], runs: &mut Vec<MarkedRun>) {
    for child in children {
        match child {
            docx_rs::ParagraphChild::Run(run) => push_run(run, runs),
            docx_rs::ParagraphChild::Insert(insert) => {
                // Tracked insertions are part of the visible text
                for child in &insert.children {
                    if let docx_rs::InsertChild::Run(run) = child {
                        push_run(run, runs);
                    }
                }
            }
            docx_rs::ParagraphChild::Hyperlink(link) => collect_runs(&link.children, runs),
            docx_rs::ParagraphChild::StructuredDataTag(tag) => collect_tag_runs(tag, runs),
            docx_rs::ParagraphChild::Delete(_) => {
                // Skip deletions (track changes)
            }
            _ => {}
        }
    }
}

/// Runs inside an inline content control
fn collect_tag_runs(tag: &docx_rs::StructuredDataTag, runs: &mut Vec<MarkedRun>) {
    for child in &tag.children {
        match child {
            docx_rs::StructuredDataTagChild::Run(run) => push_run(run, runs),
            docx_rs::StructuredDataTagChild::StructuredDataTag(inner) => {
                collect_tag_runs(inner, runs)
            }
            _ => {}
        }
    }
}

fn push_run(run: &docx_rs::Run, runs: &mut Vec<MarkedRun>) {
    let text = extract_run_text(run);
    if !text.is_empty() {
        runs.push(MarkedRun {
            text,
            bold: is_bold(run),
        });
    }
}

/// Extract text from a run; breaks are kept as newlines
pub(crate) fn extract_run_text(run: &docx_rs::Run) -> String {
    let mut text = String::new();

    for child in &run.children {
        match child {
            docx_rs::RunChild::Text(text_elem) => {
                text.push_str(&text_elem.text);
            }
            docx_rs::RunChild::Tab(_) => {
                text.push(' ');
            }
            docx_rs::RunChild::Break(_) => {
                text.push('\n');
            }
            _ => {}
        }
    }

    text
}

/// Character style Word applies for "Strong" emphasis
const STRONG_STYLE: &str = "Strong";

/// Whether the run renders bold: direct `<w:b/>` or the Strong style.
///
/// `<w:b w:val="0"/>` reads back as a present but disabled `Bold`, so
/// presence alone is not enough.
pub(crate) fn is_bold(run: &docx_rs::Run) -> bool {
    let props = &run.run_property;
    match &props.bold {
        // Bold keeps its flag private; it serializes as a bare bool
        Some(bold) => matches!(
            serde_json::to_value(bold),
            Ok(serde_json::Value::Bool(true))
        ),
        None => props
            .style
            .as_ref()
            .is_some_and(|style| style.val == STRONG_STYLE),
    }
}
