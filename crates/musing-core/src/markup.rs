//! Markup stripping for search and summaries.

use std::sync::LazyLock;

use regex::Regex;

static TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]+>").expect("valid regex"));
static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Render rich-text content as plain text.
///
/// Every `<...>` tag becomes a single space, whitespace runs collapse to one
/// space and the result is trimmed. Applying it twice changes nothing.
pub fn strip_markup(content: &str) -> String {
    let without_tags = TAG.replace_all(content, " ");
    WHITESPACE.replace_all(&without_tags, " ").trim().to_string()
}
