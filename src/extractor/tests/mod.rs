use std::fs;
use url::Url;

use crate::extractor::{ExtractionError, extract, locator::MIN_CONTENT_CHARS};
use crate::fetcher::types::PageResponse;

const CONTENT_BUDGET: usize = 8000;

fn fixture(name: &str) -> String {
    fs::read_to_string(format!("src/extractor/tests/fixtures/{}", name))
        .expect("Failed to read test fixture")
}

fn create_test_response(html: String, url: &str) -> PageResponse {
    PageResponse::from_html(Url::parse(url).unwrap(), html)
}

#[test]
fn test_extract_article() {
    let response =
        create_test_response(fixture("article.html"), "https://example.com/news/flood-plan");
    let document = extract(&response, CONTENT_BUDGET).unwrap();

    assert_eq!(document.title, "City Unveils \"Flood Defence\" Plan");
    assert_eq!(document.author.as_deref(), Some("Maria Okafor"));
    assert_eq!(
        document.image_url.as_deref(),
        Some("https://example.com/images/flood-wall.jpg")
    );
    assert_eq!(document.language.as_deref(), Some("en"));

    assert!(document.content.contains("$450 million plan"));
    assert!(document.content.contains("\"the most significant infrastructure decision"));
    assert!(document.content.contains("The council's final vote"));

    for leaked in [
        "dataLayer",
        "do-not-leak",
        "font-family",
        "Subscribe",
        "Related stories",
        "All rights reserved",
    ] {
        assert!(!document.content.contains(leaked), "{} leaked into content", leaked);
    }
    assert!(!document.content.contains('\n'));
    assert!(!document.content.contains("  "));
}

#[test]
fn test_extract_paragraph_fallback() {
    let response =
        create_test_response(fixture("paragraphs.html"), "https://science.example.org/coral");
    let document = extract(&response, CONTENT_BUDGET).unwrap();

    assert_eq!(document.title, "Researchers Map Coral Recovery");
    assert_eq!(document.author, None);
    assert!(document.content.starts_with("Researchers at the Pacific Marine Institute"));
    assert!(document.content.contains("Dr Tom Hale"));
    assert!(!document.content.contains("cookie"));
    assert!(!document.content.contains("Photo: Handout"));
    assert!(!document.content.contains("newsletter"));
}

#[test]
fn test_reject_empty_page() {
    let response = create_test_response(fixture("empty.html"), "https://example.com/app");

    match extract(&response, CONTENT_BUDGET) {
        Err(ExtractionError::InsufficientContent { length }) => assert!(length < MIN_CONTENT_CHARS),
        Ok(document) => panic!("Expected insufficient content, got {:?}", document),
    }
}

#[test]
fn test_content_budget_applied() {
    let html = format!(
        r#"<!DOCTYPE html><html><head><title>Long Read</title></head><body><article>{}</article></body></html>"#,
        "<p>This is a valid article sentence with enough words to be counted as prose.</p>".repeat(200)
    );

    let response = create_test_response(html, "https://example.com/long");
    let document = extract(&response, 500).unwrap();

    assert!(document.content.chars().count() <= 500);
    assert_eq!(document.title, "Long Read");
}

#[test]
fn test_title_and_author_limits() {
    let html = format!(
        r#"<html><head><title>{}</title><meta name="author" content="{}"></head><body><article><p>{}</p></article></body></html>"#,
        "T".repeat(300),
        "A".repeat(150),
        "Enough body text to pass the minimum length requirement for extraction. ".repeat(3)
    );

    let response = create_test_response(html, "https://example.com/limits");
    let document = extract(&response, CONTENT_BUDGET).unwrap();

    assert_eq!(document.title.chars().count(), 200);
    assert_eq!(document.author.unwrap().chars().count(), 100);
}

#[test]
fn test_malformed_html() {
    let html = format!(
        "<html><head><title>Broken</title><body><p>Unclosed tags<div>{}",
        "More content that keeps going without any closing tags at all. ".repeat(3)
    );

    let response = create_test_response(html, "https://example.com/broken");
    let document = extract(&response, CONTENT_BUDGET).unwrap();

    assert_eq!(document.title, "Broken");
    assert!(document.content.contains("Unclosed tags"));
}

#[cfg(feature = "fuzz")]
mod fuzz {
    use super::*;
    use crate::extractor::sanitizer::sanitize;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn test_extract_never_panics(html in ".*") {
            let response = create_test_response(html, "https://example.com");
            let _ = extract(&response, CONTENT_BUDGET);
        }

        #[test]
        fn test_sanitize_never_grows(html in ".*") {
            prop_assert!(sanitize(&html).len() <= html.len());
        }

        #[test]
        fn test_sanitize_drops_script_bodies(payload in "[a-z0-9 ]{1,40}") {
            let html = format!("<p>keep</p><script>SCRIPT{}</script><nav>NAV{}</nav>", payload, payload);
            let cleaned = sanitize(&html);
            prop_assert!(!cleaned.contains("SCRIPT"));
            prop_assert!(!cleaned.contains("NAV"));
            prop_assert!(cleaned.contains("keep"));
        }
    }
}
