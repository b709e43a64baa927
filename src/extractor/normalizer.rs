//! Text cleanup applied to every string that leaves the extractor.

use html_escape::decode_html_entities;

pub const MAX_TITLE_CHARS: usize = 200;
pub const MAX_AUTHOR_CHARS: usize = 100;

/// Decode entities, flatten typographic quotes, collapse whitespace and trim.
pub fn normalize_text(text: &str) -> String {
    let decoded = decode_html_entities(text);
    let plain: String = decoded.chars().map(plain_quote).collect();
    collapse_whitespace(&plain)
}

/// Normalize and cap at `max_chars` characters. No ellipsis is appended.
pub fn normalize_with_limit(text: &str, max_chars: usize) -> String {
    let normalized = normalize_text(text);
    truncate_chars(&normalized, max_chars).trim_end().to_string()
}

pub fn normalize_title(title: &str) -> String {
    normalize_with_limit(title, MAX_TITLE_CHARS)
}

/// Authors that normalize to nothing are treated as absent.
pub fn normalize_author(author: &str) -> Option<String> {
    Some(normalize_with_limit(author, MAX_AUTHOR_CHARS)).filter(|a| !a.is_empty())
}

pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Returns the longest prefix of `text` holding at most `max_chars` chars.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}

fn plain_quote(c: char) -> char {
    match c {
        '\u{2018}' | '\u{2019}' | '\u{201A}' | '\u{201B}' | '\u{2032}' => '\'',
        '\u{201C}' | '\u{201D}' | '\u{201E}' | '\u{201F}' | '\u{2033}' | '\u{00AB}'
        | '\u{00BB}' => '"',
        other => other,
    }
}
