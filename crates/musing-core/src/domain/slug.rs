use std::sync::LazyLock;

use regex::Regex;

static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));
static NON_SLUG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9-]").expect("valid regex"));
static HYPHEN_RUNS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"-{2,}").expect("valid regex"));

/// Derive a URL-safe slug from a post title.
///
/// Lowercases, turns whitespace runs into `-`, strips everything outside
/// `[a-z0-9-]`, then collapses and trims hyphens. May return an empty string
/// for titles without ASCII letters or digits.
pub fn slugify(title: &str) -> String {
    let lowered = title.trim().to_lowercase();
    let hyphenated = WHITESPACE.replace_all(&lowered, "-");
    let stripped = NON_SLUG.replace_all(&hyphenated, "");
    let collapsed = HYPHEN_RUNS.replace_all(&stripped, "-");
    collapsed.trim_matches('-').to_string()
}
