//! Positional grouping of lines into questions
//!
//! The quiz format has no markers beyond position: every run of five lines
//! is one question followed by its four options, and the bold option is the
//! correct one.

use tracing::{debug, warn};

use crate::document::models::{AnswerOption, NormalizedLine, QuestionRecord};

/// Lines consumed per question: the question itself plus its options
pub const GROUP_SIZE: usize = 5;
pub const OPTIONS_PER_QUESTION: usize = GROUP_SIZE - 1;

/// Length of the choice label (`a)`, `b)`, ...) in front of each option
const LABEL_LEN: usize = 2;

/// Group lines into question records.
///
/// Only complete groups of [`GROUP_SIZE`] lines produce a record; leftover
/// lines at the end are dropped. When several options in a group are bold,
/// the last one is taken as the correct answer.
pub fn group_questions(lines: &[NormalizedLine]) -> Vec<QuestionRecord> {
    let chunks = lines.chunks_exact(GROUP_SIZE);

    let leftover = chunks.remainder().len();
    if leftover > 0 {
        warn!(
            leftover,
            "ignoring trailing lines that do not form a complete question"
        );
    }

    chunks
        .enumerate()
        .map(|(index, group)| build_record(index + 1, group))
        .collect()
}

fn build_record(number: usize, group: &[NormalizedLine]) -> QuestionRecord {
    let (question_line, option_lines) = group.split_at(1);

    let mut record = QuestionRecord {
        number,
        question: question_line[0].text.clone(),
        options: Vec::with_capacity(OPTIONS_PER_QUESTION),
        correct_answer: None,
    };

    for (position, line) in (1..).zip(option_lines) {
        record.options.push(AnswerOption {
            text: strip_choice_label(&line.text),
            is_correct: line.emphasized,
        });
        if line.emphasized {
            record.correct_answer = Some(position);
        }
    }

    let bold_options = record.options.iter().filter(|o| o.is_correct).count();
    match bold_options {
        0 => warn!(number, "no bold option found, correct answer not detected"),
        1 => debug!(number, answer = ?record.correct_answer, "parsed question"),
        _ => warn!(
            number,
            bold_options,
            answer = ?record.correct_answer,
            "several bold options, keeping the last one"
        ),
    }

    record
}

/// Drop the two-character choice label, e.g. `c) Paris` becomes `Paris`
fn strip_choice_label(text: &str) -> String {
    let rest = match text.char_indices().nth(LABEL_LEN) {
        Some((offset, _)) => &text[offset..],
        None => "",
    };
    rest.trim().to_string()
}
