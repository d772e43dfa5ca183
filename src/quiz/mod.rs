//! Question grouping
//!
//! Turns the flat list of normalized lines into question records.

pub mod grouping;

pub use grouping::{GROUP_SIZE, OPTIONS_PER_QUESTION, group_questions};
