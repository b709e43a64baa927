#![no_main]

use libfuzzer_sys::fuzz_target;

use briefly::summarizer::{ScoringProfile, extractive};

fuzz_target!(|data: &[u8]| {
    let text = String::from_utf8_lossy(data);
    let profile = ScoringProfile::default();

    let first = extractive::summarize(&text, &profile);
    assert_eq!(first, extractive::summarize(&text, &profile));
    assert!(first.key_points.len() <= 5);
});
