use std::sync::Arc;

use tracing::{debug, info, instrument};
use url::Url;

use crate::articles::errors::ScrapeError;
use crate::cache::{ArticleCache, ArticleRecord};
use crate::extractor::{self, ScrapedDocument};
use crate::fetcher::PageSource;
use crate::summarizer::{Summarizer, SummaryOutcome};

/// Fetch, extract and summarize articles, memoizing completed results.
#[derive(Clone)]
pub struct ArticleService {
    source: Arc<dyn PageSource>,
    summarizer: Summarizer,
    cache: Arc<dyn ArticleCache>,
    max_content_chars: usize,
}

impl ArticleService {
    pub fn new(
        source: Arc<dyn PageSource>,
        summarizer: Summarizer,
        cache: Arc<dyn ArticleCache>,
        max_content_chars: usize,
    ) -> Self {
        Self {
            source,
            summarizer,
            cache,
            max_content_chars,
        }
    }

    pub fn cache(&self) -> &Arc<dyn ArticleCache> {
        &self.cache
    }

    pub fn summarizer(&self) -> &Summarizer {
        &self.summarizer
    }

    /// Fetch the page and pull out its readable document.
    #[instrument(skip(self), fields(url = %url))]
    pub async fn scrape(&self, url: &Url) -> Result<ScrapedDocument, ScrapeError> {
        let page = self.source.fetch(url).await?;

        // Parsing is CPU bound and the DOM is not Send.
        let max_content_chars = self.max_content_chars;
        let document =
            tokio::task::spawn_blocking(move || extractor::extract(&page, max_content_chars))
                .await
                .map_err(|e| ScrapeError::Task(e.to_string()))??;

        info!(
            title = %document.title,
            words = document.word_count(),
            language = document.language.as_deref().unwrap_or("unknown"),
            "article scraped"
        );
        Ok(document)
    }

    /// Summarize the article at `url`. A URL that was summarized before is
    /// answered from the cache without fetching; entries are keyed by the
    /// serialized URL.
    #[instrument(skip(self), fields(url = %url))]
    pub async fn summarize_url(&self, url: &Url) -> Result<ArticleRecord, ScrapeError> {
        let key = url.as_str();
        if let Some(cached) = self.cache.get(key).await {
            debug!("cache hit");
            return Ok(cached);
        }

        let document = self.scrape(url).await?;
        let outcome = self.summarizer.summarize(&document.content).await;
        if let SummaryOutcome::Fallback { reason, .. } = &outcome {
            debug!(%reason, "summary produced locally after remote failure");
        }

        let record = ArticleRecord::new(key, document, outcome);
        Ok(self.cache.put_if_absent(record).await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::{MemoryCache, MockArticleCache};
    use crate::extractor::ExtractionError;
    use crate::fetcher::FetchError;
    use crate::fetcher::types::{MockPageSource, PageResponse};
    use crate::summarizer::ScoringProfile;

    const ARTICLE_HTML: &str = include_str!("../extractor/tests/fixtures/article.html");
    const ARTICLE_URL: &str = "https://example.com/news/flood-plan";

    fn article_url() -> Url {
        Url::parse(ARTICLE_URL).unwrap()
    }

    fn service(source: MockPageSource, cache: Arc<dyn ArticleCache>) -> ArticleService {
        ArticleService::new(
            Arc::new(source),
            Summarizer::local(ScoringProfile::default()),
            cache,
            8000,
        )
    }

    fn serving(html: &'static str) -> MockPageSource {
        let mut source = MockPageSource::new();
        source
            .expect_fetch()
            .times(1)
            .returning(move |url| Ok(PageResponse::from_html(url.clone(), html)));
        source
    }

    #[tokio::test]
    async fn test_summarize_url_builds_record() {
        let service = service(serving(ARTICLE_HTML), Arc::new(MemoryCache::new()));
        let record = service.summarize_url(&article_url()).await.unwrap();

        assert_eq!(record.url, ARTICLE_URL);
        assert_eq!(record.title, "City Unveils \"Flood Defence\" Plan");
        assert_eq!(record.author.as_deref(), Some("Maria Okafor"));
        assert!(!record.summary.is_empty());
        assert!(record.summary_words < record.original_words);
        assert!(!record.ai_powered);
    }

    #[tokio::test]
    async fn test_second_request_is_served_from_cache() {
        let cache = Arc::new(MemoryCache::new());
        let service = service(serving(ARTICLE_HTML), cache.clone());

        let first = service.summarize_url(&article_url()).await.unwrap();
        let equivalent = Url::parse("HTTPS://Example.com:443/news/flood-plan").unwrap();
        let second = service.summarize_url(&equivalent).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(cache.len(), 1);
    }

    #[tokio::test]
    async fn test_cache_hit_skips_fetch() {
        let mut source = MockPageSource::new();
        source.expect_fetch().never();

        let cached = ArticleRecord {
            url: ARTICLE_URL.to_string(),
            title: "Cached".to_string(),
            author: None,
            content: "cached content".to_string(),
            summary: "cached summary".to_string(),
            key_points: vec![],
            image_url: None,
            original_words: 2,
            summary_words: 2,
            ai_powered: false,
        };
        let mut cache = MockArticleCache::new();
        let hit = cached.clone();
        cache
            .expect_get()
            .withf(|url| url.to_string() == ARTICLE_URL)
            .returning(move |_| Some(hit.clone()));
        cache.expect_put_if_absent().never();

        let record = service(source, Arc::new(cache))
            .summarize_url(&article_url())
            .await
            .unwrap();
        assert_eq!(record, cached);
    }

    #[tokio::test]
    async fn test_concurrent_winner_is_returned() {
        let mut cache = MockArticleCache::new();
        cache.expect_get().returning(|_| None);
        cache.expect_put_if_absent().times(1).returning(|mut record| {
            record.summary = "stored by another request".to_string();
            record
        });

        let record = service(serving(ARTICLE_HTML), Arc::new(cache))
            .summarize_url(&article_url())
            .await
            .unwrap();
        assert_eq!(record.summary, "stored by another request");
    }

    #[tokio::test]
    async fn test_extraction_failure() {
        let cache = Arc::new(MemoryCache::new());
        let service = service(
            serving("<html><body><p>Too short.</p></body></html>"),
            cache.clone(),
        );

        let result = service.summarize_url(&article_url()).await;
        assert!(matches!(
            result,
            Err(ScrapeError::Extraction(ExtractionError::InsufficientContent { .. }))
        ));
        assert!(cache.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_failure() {
        let mut source = MockPageSource::new();
        source
            .expect_fetch()
            .times(1)
            .returning(|_| Err(FetchError::RequestTimeout));

        let result = service(source, Arc::new(MemoryCache::new()))
            .summarize_url(&article_url())
            .await;
        match result {
            Err(ScrapeError::Fetch(e)) => assert!(e.is_timeout()),
            other => panic!("Expected fetch error, got {:?}", other.map(|r| r.url)),
        }
    }
}
