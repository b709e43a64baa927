//! Sentence salience scoring.
//!
//! Each sentence's score is the sum of independent signals: position in
//! the article, salience keywords, numbers and statistics, length,
//! content-word density and proper-noun runs.

use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

use crate::summarizer::model::ScoredSentence;

const FIRST_SENTENCE_BONUS: f64 = 3.0;
const LEAD_BONUS: f64 = 2.0;
const LEAD_SENTENCES: usize = 3;
const CONCLUSION_BONUS: f64 = 1.0;
const CONCLUSION_SENTENCES: usize = 2;
const KEYWORD_WEIGHT: f64 = 1.5;
const STATISTIC_WEIGHT: f64 = 2.0;
const DENSITY_WEIGHT: f64 = 2.0;
const PROPER_NOUN_WEIGHT: f64 = 0.5;

pub const DEFAULT_KEYWORDS: &[&str] = &[
    "announced", "revealed", "confirmed", "reported", "found", "discovered", "launched",
    "released", "according", "study", "research", "shows", "indicates", "important",
    "significant", "major", "key", "critical", "essential", "main", "primary", "breakthrough",
    "new", "first", "latest", "recent", "expert", "government", "company", "organization",
    "official", "president", "ceo", "plans", "expects", "aims", "goal", "target", "increase",
    "decrease", "growth", "decline", "change", "impact", "effect", "result", "outcome",
];

const STOPWORDS: &[&str] = &[
    "a", "an", "the", "and", "or", "but", "if", "then", "so", "in", "on", "at", "to", "for",
    "of", "with", "by", "from", "as", "into", "about", "this", "that", "these", "those", "it",
    "its", "is", "are", "was", "were", "be", "been", "being", "have", "has", "had", "will",
    "would", "could", "should", "can", "may", "might", "must", "do", "does", "did", "not", "no",
    "he", "she", "they", "them", "his", "her", "their", "we", "our", "you", "your", "i", "me",
    "my", "there", "here", "which", "who", "whom", "what", "when", "where", "why", "how", "also",
    "just", "than", "very", "said", "says", "say", "get", "got", "make", "made",
];

static STOPWORD_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| STOPWORDS.iter().copied().collect());

static STATISTIC_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)\d+(?:[.,]\d+)?\s?(?:%|percent\b|per cent\b)",
        r"[$€£¥]\s?\d",
        r"(?i)\b(?:thousand|million|billion|trillion)s?\b",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).unwrap())
    .collect()
});

static PROPER_NOUN_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[A-Z][a-z]+(?:\s+[A-Z][a-z]+)*").unwrap());

/// Keyword list used for salience. Deployments covering a specific beat
/// (sport, finance, science) swap in their own vocabulary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoringProfile {
    keywords: HashSet<String>,
}

impl Default for ScoringProfile {
    fn default() -> Self {
        Self::with_keywords(DEFAULT_KEYWORDS.iter().copied())
    }
}

impl ScoringProfile {
    pub fn with_keywords<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            keywords: keywords
                .into_iter()
                .map(|k| k.as_ref().trim().to_lowercase())
                .filter(|k| !k.is_empty())
                .collect(),
        }
    }

    pub fn is_keyword(&self, word: &str) -> bool {
        self.keywords.contains(word)
    }
}

fn normalized_words(sentence: &str) -> Vec<String> {
    sentence
        .split_whitespace()
        .map(|token| {
            token
                .trim_matches(|c: char| !c.is_alphanumeric())
                .to_lowercase()
        })
        .filter(|word| !word.is_empty())
        .collect()
}

fn position_score(index: usize, total: usize) -> f64 {
    let mut score = 0.0;
    if index == 0 {
        score += FIRST_SENTENCE_BONUS;
    }
    if index < LEAD_SENTENCES {
        score += LEAD_BONUS;
    }
    if index >= total.saturating_sub(CONCLUSION_SENTENCES) {
        score += CONCLUSION_BONUS;
    }
    score
}

fn length_score(word_count: usize) -> f64 {
    let mut score = 0.0;
    if (8..=25).contains(&word_count) {
        score += 2.0;
    }
    if (6..=30).contains(&word_count) {
        score += 1.0;
    }
    if word_count < 6 {
        score -= 1.0;
    }
    if word_count > 35 {
        score -= 1.0;
    }
    score
}

/// Score one sentence at `index` out of `total` qualifying sentences.
pub fn score_sentence(sentence: &str, index: usize, total: usize, profile: &ScoringProfile) -> f64 {
    let words = normalized_words(sentence);

    let keyword_hits = words.iter().filter(|w| profile.is_keyword(w)).count();
    let statistics: usize = STATISTIC_PATTERNS
        .iter()
        .map(|pattern| pattern.find_iter(sentence).count())
        .sum();
    let density = if words.is_empty() {
        0.0
    } else {
        let content_words = words
            .iter()
            .filter(|w| !STOPWORD_SET.contains(w.as_str()))
            .count();
        content_words as f64 / words.len() as f64
    };
    let proper_noun_runs = PROPER_NOUN_RUN.find_iter(sentence).count();

    position_score(index, total)
        + keyword_hits as f64 * KEYWORD_WEIGHT
        + statistics as f64 * STATISTIC_WEIGHT
        + length_score(words.len())
        + density * DENSITY_WEIGHT
        + proper_noun_runs as f64 * PROPER_NOUN_WEIGHT
}

pub fn score_sentences(sentences: &[String], profile: &ScoringProfile) -> Vec<ScoredSentence> {
    let total = sentences.len();
    sentences
        .iter()
        .enumerate()
        .map(|(index, text)| ScoredSentence {
            text: text.clone(),
            score: score_sentence(text, index, total, profile),
            original_index: index,
        })
        .collect()
}
