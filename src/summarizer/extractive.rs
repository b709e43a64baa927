//! Deterministic extractive summarization.

use std::cmp::Ordering;
use std::collections::HashSet;

use crate::extractor::normalizer::truncate_chars;
use crate::summarizer::model::{ScoredSentence, SummaryResult};
use crate::summarizer::scoring::{ScoringProfile, score_sentences};
use crate::summarizer::sentences::split_sentences;

pub const PLACEHOLDER_SUMMARY: &str = "Unable to extract meaningful content from the article.";

const SUMMARY_RATIO: f64 = 0.3;
const MIN_SUMMARY_SENTENCES: usize = 2;
const MAX_SUMMARY_SENTENCES: usize = 5;
const MIN_SUMMARY_CHARS: usize = 50;
const MAX_KEY_POINTS: usize = 5;
const MIN_KEY_POINT_CHARS: usize = 30;
const MAX_KEY_POINT_CHARS: usize = 120;

/// Number of sentences the summary takes out of `total` candidates.
pub fn summary_size(total: usize) -> usize {
    let proportional = (total as f64 * SUMMARY_RATIO).ceil() as usize;
    proportional
        .clamp(MIN_SUMMARY_SENTENCES, MAX_SUMMARY_SENTENCES)
        .min(total)
}

/// Highest score first; equal scores keep reading order.
fn by_rank(a: &ScoredSentence, b: &ScoredSentence) -> Ordering {
    b.score
        .total_cmp(&a.score)
        .then(a.original_index.cmp(&b.original_index))
}

fn join_sentences<'a>(sentences: impl IntoIterator<Item = &'a str>) -> String {
    let joined = sentences.into_iter().collect::<Vec<_>>().join(". ");
    format!("{}.", joined)
}

fn shorten_key_point(text: &str) -> String {
    if text.chars().count() > MAX_KEY_POINT_CHARS {
        format!("{}...", truncate_chars(text, MAX_KEY_POINT_CHARS).trim_end())
    } else {
        text.to_string()
    }
}

/// Summarize `content` by selecting its most salient sentences.
pub fn summarize(content: &str, profile: &ScoringProfile) -> SummaryResult {
    let sentences = split_sentences(content);
    if sentences.is_empty() {
        return SummaryResult {
            summary: PLACEHOLDER_SUMMARY.to_string(),
            key_points: Vec::new(),
        };
    }

    let mut ranked = score_sentences(&sentences, profile);
    ranked.sort_by(by_rank);

    let mut selected: Vec<&ScoredSentence> = ranked.iter().take(summary_size(sentences.len())).collect();
    selected.sort_by_key(|s| s.original_index);
    let selected_indices: HashSet<usize> = selected.iter().map(|s| s.original_index).collect();

    let mut summary = join_sentences(selected.iter().map(|s| s.text.as_str()));
    if summary.chars().count() < MIN_SUMMARY_CHARS {
        summary = join_sentences(sentences.iter().take(2).map(String::as_str));
    }

    let key_points = ranked
        .iter()
        .filter(|s| !selected_indices.contains(&s.original_index))
        .take(MAX_KEY_POINTS)
        .filter(|s| s.text.chars().count() > MIN_KEY_POINT_CHARS)
        .map(|s| shorten_key_point(&s.text))
        .collect();

    SummaryResult {
        summary,
        key_points,
    }
}
