use serde::{Deserialize, Serialize};
use url::Url;
use utoipa::ToSchema;

use crate::cache::ArticleRecord;

const MAX_URL_LENGTH: usize = 2048;

#[derive(Debug, Deserialize, ToSchema)]
pub struct SummarizeRequest {
    #[serde(default)]
    pub url: String,
}

impl SummarizeRequest {
    /// Trimmed URL, checked to be an absolute http(s) URL.
    pub fn validate(&self) -> Result<Url, String> {
        let url = self.url.trim();
        if url.is_empty() {
            return Err("URL is required".to_string());
        }
        if url.len() > MAX_URL_LENGTH {
            return Err("URL too long".to_string());
        }
        let parsed = Url::parse(url).map_err(|_| "Invalid URL format".to_string())?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err("Invalid URL format".to_string());
        }
        Ok(parsed)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ArticleResponse {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    pub content: String,
    pub summary: String,
    pub key_points: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub original_words: usize,
    pub summary_words: usize,
    pub compression_ratio: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SummarizeResponse {
    pub article: ArticleResponse,
}

/// Percentage reduction in words, rounded; 0 when there was nothing to compress.
pub fn compression_ratio(original_words: usize, summary_words: usize) -> i64 {
    if original_words == 0 {
        return 0;
    }
    let reduction = (original_words as f64 - summary_words as f64) / original_words as f64;
    (reduction * 100.0).round() as i64
}

impl From<ArticleRecord> for ArticleResponse {
    fn from(record: ArticleRecord) -> Self {
        Self {
            compression_ratio: compression_ratio(record.original_words, record.summary_words),
            title: record.title,
            author: record.author,
            content: record.content,
            summary: record.summary,
            key_points: record.key_points,
            image_url: record.image_url,
            original_words: record.original_words,
            summary_words: record.summary_words,
        }
    }
}
