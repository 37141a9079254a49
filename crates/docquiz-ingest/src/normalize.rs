//! Whitespace cleanup for extracted and displayed text.

use once_cell::sync::Lazy;
use regex::Regex;

static ANY_WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());
static HORIZONTAL_WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[ \t]+").unwrap());
static BLANK_LINES: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{2,}").unwrap());

/// Collapse every whitespace run (newlines included) to one space and trim.
pub fn squish(text: &str) -> String {
    ANY_WHITESPACE.replace_all(text, " ").trim().to_string()
}

/// Clean raw PDF text: horizontal runs become one space, two or more
/// newlines become exactly one blank line.
pub fn clean_extracted(text: &str) -> String {
    let text = HORIZONTAL_WHITESPACE.replace_all(text, " ");
    let text = BLANK_LINES.replace_all(&text, "\n\n");
    text.trim().to_string()
}
