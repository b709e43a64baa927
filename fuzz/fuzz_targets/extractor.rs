#![no_main]

use libfuzzer_sys::fuzz_target;
use url::Url;

use briefly::extractor::{extract, sanitizer::sanitize};
use briefly::fetcher::types::PageResponse;

fuzz_target!(|data: &[u8]| {
    // Convert raw bytes to string, handling invalid UTF-8 gracefully
    let html = String::from_utf8_lossy(data).to_string();

    assert!(sanitize(&html).len() <= html.len());

    let response = PageResponse::from_html(Url::parse("https://example.com").unwrap(), html);

    // The extractor should never panic regardless of input
    let _ = extract(&response, 8000);
});
