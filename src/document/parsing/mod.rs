//! Document parsing utilities
//!
//! Helpers that pull text and formatting out of docx-rs elements.

pub(crate) mod formatting;
