//! Sentence segmentation and candidate filtering.

use regex::Regex;
use std::sync::LazyLock;

const MIN_SENTENCE_CHARS: usize = 25;
const MAX_SENTENCE_CHARS: usize = 400;

static TERMINATORS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[.!?]+").unwrap());

// Fragments of scripts and stylesheets that survived extraction.
static CODE_LEAKAGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)function\s*\(|\b(?:var|const|let)\s+[a-z_$][\w$]*\s*=|=>|@media|keyframes|\d+%\s*\{|\{[^}]*:[^}]*\}",
    )
    .unwrap()
});

/// Split on runs of `.`, `!` or `?` and keep the sentences worth scoring,
/// in reading order, with the terminators removed.
pub fn split_sentences(text: &str) -> Vec<String> {
    TERMINATORS
        .split(text)
        .map(str::trim)
        .filter(|s| is_candidate(s))
        .map(str::to_string)
        .collect()
}

fn is_candidate(sentence: &str) -> bool {
    let len = sentence.chars().count();
    len > MIN_SENTENCE_CHARS
        && len < MAX_SENTENCE_CHARS
        && sentence.chars().any(|c| c.is_ascii_alphabetic())
        && !CODE_LEAKAGE.is_match(sentence)
}
