use serde::{Deserialize, Serialize};

/// Readable text and metadata pulled out of one article page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrapedDocument {
    pub title: String,
    pub author: Option<String>,
    pub content: String,
    pub image_url: Option<String>,
    /// ISO 639-1 code of the content, when detection was confident.
    pub language: Option<String>,
}

impl ScrapedDocument {
    pub fn word_count(&self) -> usize {
        count_words(&self.content)
    }
}

pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}
