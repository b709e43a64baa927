//! Removes markup that never carries article prose.

use regex::Regex;
use std::sync::LazyLock;

/// Elements dropped together with everything inside them.
pub const STRIPPED_ELEMENTS: [&str; 9] = [
    "script", "style", "nav", "header", "footer", "aside", "form", "noscript", "iframe",
];

static ELEMENT_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    STRIPPED_ELEMENTS
        .iter()
        .map(|tag| {
            // Only the bare tag name, so `<header-ad>` or `<nav-menu>` never opens a span
            Regex::new(&format!(r"(?is)<{tag}(?:[\s/][^>]*)?>.*?</{tag}\s*>")).unwrap()
        })
        .collect()
});

static COMMENT_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)<!--.*?-->").unwrap());

/// Strip scripts, styles, navigation chrome, forms, embeds and comments.
///
/// Unclosed elements are left untouched; the output is never longer than
/// the input.
pub fn sanitize(html: &str) -> String {
    let mut cleaned = COMMENT_PATTERN.replace_all(html, "").into_owned();
    for pattern in ELEMENT_PATTERNS.iter() {
        if pattern.is_match(&cleaned) {
            cleaned = pattern.replace_all(&cleaned, " ").into_owned();
        }
    }
    cleaned
}
