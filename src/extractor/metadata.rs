//! Title, author and lead image lookup.

use once_cell::sync::Lazy;
use scraper::{Html, Selector};
use url::Url;

pub const UNTITLED: &str = "Untitled Article";

enum Source {
    Text(&'static str),
    Attr(&'static str, &'static str),
}

static TITLE_SOURCES: [Source; 4] = [
    Source::Text("h1"),
    Source::Text("title"),
    Source::Attr("meta[property=\"og:title\"]", "content"),
    Source::Attr("meta[name=\"twitter:title\"]", "content"),
];

static AUTHOR_SOURCES: [Source; 4] = [
    Source::Attr("meta[name=\"author\"]", "content"),
    Source::Text("[rel=\"author\"]"),
    Source::Text(".author"),
    Source::Attr("meta[property=\"article:author\"]", "content"),
];

static IMAGE_SOURCES: [Source; 3] = [
    Source::Attr("meta[property=\"og:image\"]", "content"),
    Source::Attr("meta[name=\"twitter:image\"]", "content"),
    Source::Attr("img[src]", "src"),
];

static TITLE_SELECTORS: Lazy<Vec<(Selector, &'static Source)>> =
    Lazy::new(|| compile(&TITLE_SOURCES));
static AUTHOR_SELECTORS: Lazy<Vec<(Selector, &'static Source)>> =
    Lazy::new(|| compile(&AUTHOR_SOURCES));
static IMAGE_SELECTORS: Lazy<Vec<(Selector, &'static Source)>> =
    Lazy::new(|| compile(&IMAGE_SOURCES));

fn compile(sources: &'static [Source]) -> Vec<(Selector, &'static Source)> {
    sources
        .iter()
        .filter_map(|source| {
            let raw = match source {
                Source::Text(raw) | Source::Attr(raw, _) => raw,
            };
            Selector::parse(raw).ok().map(|selector| (selector, source))
        })
        .collect()
}

/// First non-blank value produced by the sources, in priority order.
/// Only the first element matching each selector is consulted.
fn first_value(document: &Html, selectors: &[(Selector, &'static Source)]) -> Option<String> {
    selectors.iter().find_map(|(selector, source)| {
        let element = document.select(selector).next()?;
        let value = match source {
            Source::Text(_) => element.text().collect::<Vec<_>>().join(" "),
            Source::Attr(_, attr) => element.value().attr(attr)?.to_string(),
        };
        let value = value.trim();
        (!value.is_empty()).then(|| value.to_string())
    })
}

/// Raw (not yet normalized) title, never empty.
pub fn extract_title(document: &Html) -> String {
    first_value(document, &TITLE_SELECTORS).unwrap_or_else(|| UNTITLED.to_string())
}

pub fn extract_author(document: &Html) -> Option<String> {
    first_value(document, &AUTHOR_SELECTORS)
}

/// Lead image resolved against the page URL.
pub fn extract_image_url(document: &Html, base_url: &Url) -> Option<String> {
    let raw = first_value(document, &IMAGE_SELECTORS)?;
    base_url.join(&raw).ok().map(|url| url.to_string())
}
