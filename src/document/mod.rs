//! Document decoding and normalization
//!
//! This module turns a Microsoft Word (.docx) quiz into an ordered list of
//! plain-text lines, each carrying whether it was rendered in bold.

pub(crate) mod io;
pub mod loader;
pub mod models;
pub mod normalize;
pub(crate) mod parsing;

pub use loader::{DocumentDecoder, DocxDecoder};
pub use models::*;
pub use normalize::normalize_markup;
