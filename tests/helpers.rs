#![allow(dead_code)]

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode},
    response::Response,
};
use std::time::Duration;
use tower::ServiceExt;

use briefly::{
    app,
    app_state::AppState,
    config::{Config, Environment, InferenceConfig},
};

pub const ARTICLE_HTML: &str = include_str!("../src/extractor/tests/fixtures/article.html");

pub fn test_app(config: Config) -> Router {
    app::router(AppState::from_config(config).expect("Failed to build app state"))
}

pub fn local_config() -> Config {
    Config::default()
        .with_environment(Environment::Development)
        .with_fetch_timeout(Duration::from_secs(5))
}

pub fn remote_config(inference_base_url: &str) -> Config {
    local_config().with_inference(InferenceConfig {
        base_url: inference_base_url.to_string(),
        api_token: "test-token".to_string(),
        summarization_model: "facebook/bart-large-cnn".to_string(),
        translation_model_prefix: "Helsinki-NLP/opus-mt-en-".to_string(),
        timeout: Duration::from_secs(2),
    })
}

pub fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response: Response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, bytes.to_vec())
}

pub async fn send_json(app: &Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let (status, bytes) = send(app, request).await;
    (status, serde_json::from_slice(&bytes).unwrap())
}
