use axum::{
    Json, Router,
    http::header::{AUTHORIZATION, CONTENT_TYPE},
    routing::{get, post},
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;

use crate::{
    app_state::AppState,
    articles::{self, dtos as article_dtos},
    errors::ErrorResponse,
    health,
    translation::{self, dtos as translation_dtos},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        articles::handlers::summarize,
        translation::handlers::translate,
        health::health_check,
    ),
    components(schemas(
        article_dtos::SummarizeRequest,
        article_dtos::SummarizeResponse,
        article_dtos::ArticleResponse,
        translation_dtos::TranslateRequest,
        translation_dtos::TranslateResponse,
        health::HealthResponse,
        health::Diagnostics,
        ErrorResponse,
    )),
    tags(
        (name = "articles", description = "Article summarization"),
        (name = "translation", description = "Text translation"),
        (name = "health", description = "Service diagnostics")
    )
)]
pub struct ApiDoc;

async fn openapi_document() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Permissive CORS: any origin and method, JSON and bearer headers.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/summarize", post(articles::handlers::summarize))
        .route("/api/translate", post(translation::handlers::translate))
        .route("/api/health", get(health::health_check))
        .route("/api/openapi.json", get(openapi_document))
        .with_state(state)
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use axum::{
        body::{Body, to_bytes},
        http::{Method, Request, StatusCode},
    };
    use tower::ServiceExt;

    fn app() -> Router {
        router(AppState::from_config(Config::default()).unwrap())
    }

    async fn json_body(response: axum::response::Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health_reports_diagnostics() {
        let response = app()
            .oneshot(Request::get("/api/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        assert_eq!(body["status"], "API is running");
        assert_eq!(body["diagnostics"]["environment"], "development");
        assert_eq!(body["diagnostics"]["remoteInferenceConfigured"], false);
        assert_eq!(body["diagnostics"]["cachedArticles"], 0);
        assert!(body["diagnostics"]["timestamp"].is_string());
    }

    #[tokio::test]
    async fn test_openapi_lists_routes() {
        let response = app()
            .oneshot(Request::get("/api/openapi.json").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        for path in ["/api/summarize", "/api/translate", "/api/health"] {
            assert!(body["paths"].get(path).is_some(), "{} missing", path);
        }
    }

    #[tokio::test]
    async fn test_wrong_method_is_rejected() {
        let response = app()
            .oneshot(Request::get("/api/summarize").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn test_preflight_allows_any_origin() {
        let request = Request::builder()
            .method(Method::OPTIONS)
            .uri("/api/translate")
            .header("origin", "https://reader.example")
            .header("access-control-request-method", "POST")
            .header("access-control-request-headers", "content-type")
            .body(Body::empty())
            .unwrap();

        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()["access-control-allow-origin"],
            "*"
        );
        let allowed = response.headers()["access-control-allow-headers"]
            .to_str()
            .unwrap()
            .to_lowercase();
        assert!(allowed.contains("content-type"));
        assert!(allowed.contains("authorization"));
    }
}
