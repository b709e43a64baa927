use anyhow::Context;
use std::sync::Arc;

use crate::{
    articles::ArticleService,
    cache::{ArticleCache, MemoryCache},
    config::Config,
    fetcher::{HttpFetcher, PageSource},
    inference::{InferenceClient, RemoteSummarizer, RemoteTranslator},
    summarizer::{ScoringProfile, Summarizer},
    translation::Translator,
};

#[derive(Clone)]
pub struct AppState {
    pub articles: ArticleService,
    pub translator: Translator,
    pub config: Arc<Config>,
}

impl AppState {
    /// Wire the production collaborators described by `config`.
    pub fn from_config(config: Config) -> anyhow::Result<Self> {
        let source = Arc::new(
            HttpFetcher::new(config.fetch_timeout()).context("Failed to build page fetcher")?,
        );

        let (remote_summarizer, remote_translator) = match config.inference() {
            Some(inference) => {
                let client = Arc::new(
                    InferenceClient::new(inference.clone())
                        .context("Failed to build inference client")?,
                );
                (
                    Some(client.clone() as Arc<dyn RemoteSummarizer>),
                    Some(client as Arc<dyn RemoteTranslator>),
                )
            }
            None => (None, None),
        };

        Ok(Self::new(
            config,
            source,
            Arc::new(MemoryCache::new()),
            remote_summarizer,
            remote_translator,
        ))
    }

    pub fn new(
        config: Config,
        source: Arc<dyn PageSource>,
        cache: Arc<dyn ArticleCache>,
        remote_summarizer: Option<Arc<dyn RemoteSummarizer>>,
        remote_translator: Option<Arc<dyn RemoteTranslator>>,
    ) -> Self {
        let profile = config
            .summary_keywords()
            .map(ScoringProfile::with_keywords)
            .unwrap_or_default();

        Self {
            articles: ArticleService::new(
                source,
                Summarizer::new(remote_summarizer, profile),
                cache,
                config.max_content_chars(),
            ),
            translator: Translator::new(remote_translator),
            config: Arc::new(config),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::InferenceConfig;
    use std::time::Duration;

    #[test]
    fn test_local_only_without_inference_token() {
        let state = AppState::from_config(Config::default()).unwrap();
        assert!(!state.articles.summarizer().has_remote());
        assert!(!state.translator.has_remote());
        assert!(state.articles.cache().is_empty());
    }

    #[test]
    fn test_remote_collaborators_with_inference_config() {
        let config = Config::default().with_inference(InferenceConfig {
            base_url: "http://127.0.0.1:9/models".to_string(),
            api_token: "token".to_string(),
            summarization_model: "facebook/bart-large-cnn".to_string(),
            translation_model_prefix: "Helsinki-NLP/opus-mt-en-".to_string(),
            timeout: Duration::from_secs(1),
        });
        let state = AppState::from_config(config).unwrap();
        assert!(state.articles.summarizer().has_remote());
        assert!(state.translator.has_remote());
    }
}
