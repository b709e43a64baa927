//! Finds the block of a page most likely to hold the article body.
//!
//! Strategies are tried in a fixed order and the first one that yields
//! enough text wins:
//!
//! 1. structural selectors (`article`, `main`, content-labelled regions)
//! 2. paragraph aggregation
//! 3. raw document text with code-looking tokens filtered out

use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};
use std::fmt;

use crate::extractor::normalizer::collapse_whitespace;

/// Minimum plain-text length for any strategy to be accepted.
pub const MIN_CONTENT_CHARS: usize = 100;
/// Paragraphs shorter than this are treated as captions, bylines or UI text.
pub const MIN_PARAGRAPH_CHARS: usize = 50;

/// Candidate containers in priority order. First qualifying match wins.
pub const CONTENT_SELECTORS: [&str; 9] = [
    "article",
    "[role=\"main\"]",
    "main",
    ".content",
    ".post-content",
    ".entry-content",
    ".article-content",
    ".story-body",
    ".post-body",
];

const NOISE_MARKERS: [&str; 14] = [
    "cookie",
    "subscribe",
    "newsletter",
    "advertisement",
    "all rights reserved",
    "sign up",
    "log in to",
    "enable javascript",
    "@media",
    "keyframes",
    "function(",
    "window.",
    "document.",
    "{",
];

const CODE_TOKEN_MARKERS: [&str; 8] = [
    "function", "window.", "document.", "{", "}", ");", "};", "=",
];

const CSS_PROPERTIES: [&str; 16] = [
    "margin", "padding", "font", "color", "display", "width", "height", "background",
    "border", "position", "opacity", "transform", "transition", "z-index", "overflow",
    "line-height",
];

static COMPILED_SELECTORS: Lazy<Vec<(&'static str, Selector)>> = Lazy::new(|| {
    CONTENT_SELECTORS
        .iter()
        .filter_map(|raw| Selector::parse(raw).ok().map(|selector| (*raw, selector)))
        .collect()
});

static PARAGRAPH_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("p").unwrap());
static BODY_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("body").unwrap());

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocatorStrategy {
    Structural(&'static str),
    Paragraphs,
    RawText,
}

impl fmt::Display for LocatorStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Structural(selector) => write!(f, "structural({})", selector),
            Self::Paragraphs => f.write_str("paragraphs"),
            Self::RawText => f.write_str("raw-text"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocatedContent {
    pub text: String,
    pub strategy: LocatorStrategy,
}

type Strategy = fn(&Html) -> Option<LocatedContent>;

const STRATEGIES: [Strategy; 3] = [by_structure, by_paragraphs, by_raw_text];

/// Run every strategy in order over an already sanitized document.
///
/// Returns `Err` with the length of the longest candidate when no strategy
/// reaches [`MIN_CONTENT_CHARS`].
pub fn locate(document: &Html) -> Result<LocatedContent, usize> {
    let mut best_len = 0;
    for strategy in STRATEGIES {
        match strategy(document) {
            Some(found) if found.text.chars().count() >= MIN_CONTENT_CHARS => return Ok(found),
            Some(found) => best_len = best_len.max(found.text.chars().count()),
            None => {}
        }
    }
    Err(best_len)
}

fn element_text(element: ElementRef<'_>) -> String {
    collapse_whitespace(&element.text().collect::<String>())
}

fn by_structure(document: &Html) -> Option<LocatedContent> {
    for (raw, selector) in COMPILED_SELECTORS.iter() {
        for element in document.select(selector) {
            let text = element_text(element);
            if text.chars().count() > MIN_CONTENT_CHARS {
                return Some(LocatedContent {
                    text,
                    strategy: LocatorStrategy::Structural(*raw),
                });
            }
        }
    }
    None
}

fn is_noise(paragraph: &str) -> bool {
    let lower = paragraph.to_lowercase();
    NOISE_MARKERS.iter().any(|marker| lower.contains(marker))
}

fn by_paragraphs(document: &Html) -> Option<LocatedContent> {
    let paragraphs: Vec<String> = document
        .select(&PARAGRAPH_SELECTOR)
        .map(element_text)
        .filter(|p| p.chars().count() >= MIN_PARAGRAPH_CHARS && !is_noise(p))
        .collect();

    if paragraphs.is_empty() {
        return None;
    }

    Some(LocatedContent {
        text: paragraphs.join(" "),
        strategy: LocatorStrategy::Paragraphs,
    })
}

fn looks_like_code(token: &str) -> bool {
    let lower = token.to_lowercase();
    if CODE_TOKEN_MARKERS.iter().any(|marker| lower.contains(marker)) {
        return true;
    }
    CSS_PROPERTIES.iter().any(|property| {
        lower.strip_prefix(property).is_some_and(|rest| {
            rest.starts_with(':') || (rest.starts_with('-') && rest.contains(':'))
        })
    })
}

fn by_raw_text(document: &Html) -> Option<LocatedContent> {
    let root = document
        .select(&BODY_SELECTOR)
        .next()
        .unwrap_or_else(|| document.root_element());

    let raw = root.text().collect::<String>();
    let text = raw
        .split_whitespace()
        .filter(|token| !looks_like_code(token))
        .collect::<Vec<_>>()
        .join(" ");

    (!text.is_empty()).then_some(LocatedContent {
        text,
        strategy: LocatorStrategy::RawText,
    })
}
