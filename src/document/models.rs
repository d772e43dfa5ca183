//! Core data structures for quiz representation
//!
//! This module defines the types passed between the normalizer, the
//! question grouper and the exporters.

use serde::{Deserialize, Serialize};

/// One paragraph of the source document reduced to plain text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedLine {
    pub text: String,
    /// True when the paragraph contained a bold span anywhere in it
    pub emphasized: bool,
}

impl NormalizedLine {
    pub fn new(text: impl Into<String>, emphasized: bool) -> Self {
        Self {
            text: text.into(),
            emphasized,
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, false)
    }

    pub fn bold(text: impl Into<String>) -> Self {
        Self::new(text, true)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerOption {
    pub text: String,
    pub is_correct: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionRecord {
    /// 1-based position of the question in the document
    pub number: usize,
    pub question: String,
    pub options: Vec<AnswerOption>,
    /// 1-based index into `options`, `None` when no option was bold
    pub correct_answer: Option<usize>,
}

impl QuestionRecord {
    /// Text of the option at a 1-based position, empty when missing
    pub fn option_text(&self, position: usize) -> &str {
        position
            .checked_sub(1)
            .and_then(|index| self.options.get(index))
            .map(|option| option.text.as_str())
            .unwrap_or("")
    }

    pub fn has_detected_answer(&self) -> bool {
        self.correct_answer.is_some()
    }
}
