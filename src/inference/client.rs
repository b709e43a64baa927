use async_trait::async_trait;
use reqwest::Client;
use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, instrument};

use super::errors::InferenceError;
use super::types::{
    InferenceOptions, SummarizationOutput, SummarizationParameters, SummarizationRequest,
    TranslationOutput, TranslationRequest,
};
use super::{RemoteSummarizer, RemoteTranslator};
use crate::config::InferenceConfig;
use crate::extractor::normalizer::truncate_chars;

/// Remote summarization only sees the head of the article.
const MAX_SUMMARY_INPUT_CHARS: usize = 1000;
const SUMMARY_MAX_LENGTH: u32 = 200;
const SUMMARY_MIN_LENGTH: u32 = 50;
/// Error bodies are only kept for logging.
const MAX_ERROR_BODY_CHARS: usize = 300;

/// Target languages with a hosted English-to-X translation model.
pub const SUPPORTED_TRANSLATION_TARGETS: [&str; 14] = [
    "es", "fr", "de", "zh", "ja", "it", "pt", "ru", "ar", "hi", "ko", "nl", "sv", "tr",
];

/// Client for a Hugging Face style hosted inference API:
/// `POST {base_url}/{model}` with a bearer token.
pub struct InferenceClient {
    http_client: Client,
    config: InferenceConfig,
}

impl InferenceClient {
    pub fn new(config: InferenceConfig) -> Result<Self, InferenceError> {
        let http_client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| InferenceError::Request(e.to_string()))?;
        Ok(Self {
            http_client,
            config,
        })
    }

    fn model_url(&self, model: &str) -> String {
        format!("{}/{}", self.config.base_url.trim_end_matches('/'), model)
    }

    async fn post_model<B, R>(&self, model: &str, body: &B) -> Result<Vec<R>, InferenceError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let response = self
            .http_client
            .post(self.model_url(model))
            .bearer_auth(&self.config.api_token)
            .json(body)
            .send()
            .await
            .map_err(InferenceError::from_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(InferenceError::Status {
                status,
                body: truncate_chars(&body, MAX_ERROR_BODY_CHARS).to_string(),
            });
        }

        response
            .json::<Vec<R>>()
            .await
            .map_err(|e| InferenceError::Decode(e.to_string()))
    }
}

#[async_trait]
impl RemoteSummarizer for InferenceClient {
    #[instrument(skip_all)]
    async fn summarize(&self, text: &str) -> Result<String, InferenceError> {
        let inputs = if text.chars().count() > MAX_SUMMARY_INPUT_CHARS {
            format!("{}...", truncate_chars(text, MAX_SUMMARY_INPUT_CHARS))
        } else {
            text.to_string()
        };

        let request = SummarizationRequest {
            inputs: &inputs,
            parameters: SummarizationParameters {
                max_length: SUMMARY_MAX_LENGTH,
                min_length: SUMMARY_MIN_LENGTH,
            },
            options: InferenceOptions {
                wait_for_model: true,
            },
        };

        let outputs: Vec<SummarizationOutput> = self
            .post_model(&self.config.summarization_model, &request)
            .await?;
        debug!(
            model = %self.config.summarization_model,
            outputs = outputs.len(),
            "remote summarization responded"
        );

        outputs
            .into_iter()
            .find_map(|output| output.summary_text)
            .filter(|summary| !summary.trim().is_empty())
            .ok_or(InferenceError::EmptyResponse)
    }
}

#[async_trait]
impl RemoteTranslator for InferenceClient {
    fn supports(&self, target_language: &str) -> bool {
        SUPPORTED_TRANSLATION_TARGETS.contains(&target_language)
    }

    #[instrument(skip(self, text))]
    async fn translate(&self, text: &str, target_language: &str) -> Result<String, InferenceError> {
        if !self.supports(target_language) {
            return Err(InferenceError::UnsupportedLanguage(
                target_language.to_string(),
            ));
        }

        let model = format!("{}{}", self.config.translation_model_prefix, target_language);
        let request = TranslationRequest {
            inputs: text,
            options: InferenceOptions {
                wait_for_model: true,
            },
        };

        let outputs: Vec<TranslationOutput> = self.post_model(&model, &request).await?;

        outputs
            .into_iter()
            .find_map(|output| output.translation_text)
            .filter(|translated| !translated.trim().is_empty())
            .ok_or(InferenceError::EmptyResponse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{body_partial_json, header, method, path},
    };

    fn client_for(server: &MockServer) -> InferenceClient {
        InferenceClient::new(InferenceConfig {
            base_url: format!("{}/models/", server.uri()),
            api_token: "test-token".to_string(),
            summarization_model: "facebook/bart-large-cnn".to_string(),
            translation_model_prefix: "Helsinki-NLP/opus-mt-en-".to_string(),
            timeout: Duration::from_secs(2),
        })
        .unwrap()
    }

    #[tokio::test]
    async fn test_summarize_success() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/models/facebook/bart-large-cnn"))
            .and(header("authorization", "Bearer test-token"))
            .and(body_partial_json(serde_json::json!({
                "parameters": { "max_length": 200, "min_length": 50 },
                "options": { "wait_for_model": true }
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                { "summary_text": "A short abstract." }
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let summary = client_for(&server).summarize("Some article text.").await.unwrap();
        assert_eq!(summary, "A short abstract.");
    }

    #[tokio::test]
    async fn test_summarize_truncates_long_input() {
        let server = MockServer::start().await;
        let expected_input = format!("{}...", "x".repeat(1000));
        Mock::given(method("POST"))
            .and(body_partial_json(serde_json::json!({ "inputs": expected_input })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                { "summary_text": "Truncated input accepted." }
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let result = client_for(&server).summarize(&"x".repeat(5000)).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_status_error_is_reported() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(503).set_body_string("Model is loading"))
            .mount(&server)
            .await;

        match client_for(&server).summarize("text").await {
            Err(InferenceError::Status { status, body }) => {
                assert_eq!(status.as_u16(), 503);
                assert_eq!(body, "Model is loading");
            }
            other => panic!("Expected status error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_empty_output_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([{}])))
            .mount(&server)
            .await;

        let result = client_for(&server).summarize("text").await;
        assert!(matches!(result, Err(InferenceError::EmptyResponse)));
    }

    #[tokio::test]
    async fn test_translate_uses_language_model() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/models/Helsinki-NLP/opus-mt-en-es"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                { "translation_text": "Hola mundo" }
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let translated = client_for(&server).translate("Hello world", "es").await.unwrap();
        assert_eq!(translated, "Hola mundo");
    }

    #[tokio::test]
    async fn test_translate_rejects_unsupported_language() {
        let server = MockServer::start().await;
        let result = client_for(&server).translate("Hello", "xx").await;
        assert!(matches!(result, Err(InferenceError::UnsupportedLanguage(lang)) if lang == "xx"));
    }
}
