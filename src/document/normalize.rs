//! Markup to plain lines
//!
//! Splits decoder markup into paragraphs and reduces each one to a
//! [`NormalizedLine`]: plain text plus a single emphasis flag.

use once_cell::sync::Lazy;
use regex::Regex;

use super::models::NormalizedLine;

// Closing tag, or opening tag with or without attributes
static PARAGRAPH_BOUNDARY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"</p>|<p(?:\s[^>]*)?>").unwrap());
static BOLD_START: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<(?:strong|b)(?:\s[^>]*)?>").unwrap());
static BOLD_END: Lazy<Regex> = Lazy::new(|| Regex::new(r"</(?:strong|b)\s*>").unwrap());
static ANY_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").unwrap());

/// Reduce decoder markup to the ordered list of non-empty lines
pub fn normalize_markup(markup: &str) -> Vec<NormalizedLine> {
    PARAGRAPH_BOUNDARY
        .split(markup)
        .map(str::trim)
        .filter(|fragment| !fragment.is_empty())
        .filter_map(normalize_fragment)
        .collect()
}

/// Normalize one paragraph fragment, `None` when no visible text remains
pub fn normalize_fragment(fragment: &str) -> Option<NormalizedLine> {
    // A start and an end tag anywhere is enough; partial bold counts as bold
    let emphasized = BOLD_START.is_match(fragment) && BOLD_END.is_match(fragment);

    let stripped = ANY_TAG.replace_all(fragment, "");
    let text = decode_entities(&stripped);
    let text = text.trim();

    if text.is_empty() {
        return None;
    }

    Some(NormalizedLine::new(text, emphasized))
}

fn decode_entities(text: &str) -> String {
    text.replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}
