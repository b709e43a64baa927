use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryResult {
    pub summary: String,
    pub key_points: Vec<String>,
}

/// A candidate sentence with its salience score. `original_index` is the
/// sentence's position among the qualifying sentences of the content.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredSentence {
    pub text: String,
    pub score: f64,
    pub original_index: usize,
}
