use axum::{Json, extract::State};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
use utoipa::ToSchema;

use crate::app_state::AppState;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Diagnostics {
    pub timestamp: DateTime<Utc>,
    pub environment: String,
    pub version: String,
    pub remote_inference_configured: bool,
    pub cached_articles: usize,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub diagnostics: Diagnostics,
}

#[utoipa::path(
    get,
    path = "/api/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is running", body = HealthResponse)
    )
)]
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let diagnostics = Diagnostics {
        timestamp: Utc::now(),
        environment: state.config.environment().as_str().to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        remote_inference_configured: state.config.inference().is_some(),
        cached_articles: state.articles.cache().len(),
    };
    debug!(cached_articles = diagnostics.cached_articles, "health check");

    Json(HealthResponse {
        status: "API is running".to_string(),
        diagnostics,
    })
}
