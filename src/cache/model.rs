use serde::{Deserialize, Serialize};

use crate::extractor::ScrapedDocument;
use crate::extractor::model::count_words;
use crate::summarizer::SummaryOutcome;

/// A completed summarization, stored once per source URL and never updated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleRecord {
    pub url: String,
    pub title: String,
    pub author: Option<String>,
    pub content: String,
    pub summary: String,
    pub key_points: Vec<String>,
    pub image_url: Option<String>,
    pub original_words: usize,
    pub summary_words: usize,
    pub ai_powered: bool,
}

impl ArticleRecord {
    pub fn new(url: impl Into<String>, document: ScrapedDocument, outcome: SummaryOutcome) -> Self {
        let ai_powered = outcome.ai_powered();
        let summary = outcome.into_result();
        Self {
            url: url.into(),
            original_words: document.word_count(),
            summary_words: count_words(&summary.summary),
            title: document.title,
            author: document.author,
            content: document.content,
            summary: summary.summary,
            key_points: summary.key_points,
            image_url: document.image_url,
            ai_powered,
        }
    }
}
