pub mod errors;
pub mod language;
pub mod locator;
pub mod metadata;
pub mod model;
pub mod normalizer;
pub mod sanitizer;

#[cfg(test)]
mod tests;

pub use errors::ExtractionError;
pub use model::ScrapedDocument;

use scraper::Html;
use tracing::{debug, instrument};

use crate::fetcher::types::PageResponse;

/// Turn a fetched page into a normalized document.
///
/// Metadata is read from the untouched page so that headlines inside
/// `<header>` still count; body text comes from the sanitized page.
#[instrument(skip_all, fields(url = %resp.url_final))]
pub fn extract(
    resp: &PageResponse,
    max_content_chars: usize,
) -> Result<ScrapedDocument, ExtractionError> {
    let (title, author, image_url) = {
        let page = Html::parse_document(&resp.body_utf8);
        (
            metadata::extract_title(&page),
            metadata::extract_author(&page),
            metadata::extract_image_url(&page, &resp.url_final),
        )
    };

    let located = {
        let cleaned = Html::parse_document(&sanitizer::sanitize(&resp.body_utf8));
        locator::locate(&cleaned)
            .map_err(|length| ExtractionError::InsufficientContent { length })?
    };
    debug!(strategy = %located.strategy, chars = located.text.len(), "located article body");

    let content = normalizer::normalize_with_limit(&located.text, max_content_chars);
    let length = content.chars().count();
    if length < locator::MIN_CONTENT_CHARS {
        return Err(ExtractionError::InsufficientContent { length });
    }

    let language = language::detect_language(&content).map(str::to_string);

    let title = normalizer::normalize_title(&title);
    let title = if title.is_empty() {
        metadata::UNTITLED.to_string()
    } else {
        title
    };

    Ok(ScrapedDocument {
        title,
        author: author.as_deref().and_then(normalizer::normalize_author),
        content,
        image_url,
        language,
    })
}
