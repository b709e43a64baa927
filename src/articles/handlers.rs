use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use tracing::{error, info, warn};

use crate::{
    app_state::AppState,
    articles::{
        dtos::{ArticleResponse, SummarizeRequest, SummarizeResponse},
        errors::ScrapeError,
    },
    errors::{ApiError, ErrorResponse},
};

#[utoipa::path(
    post,
    path = "/api/summarize",
    tag = "articles",
    request_body = SummarizeRequest,
    responses(
        (status = 200, description = "Article summarized", body = SummarizeResponse),
        (status = 400, description = "Invalid URL, unreachable article or no extractable content", body = ErrorResponse),
        (status = 500, description = "Unexpected failure", body = ErrorResponse)
    )
)]
pub async fn summarize(
    State(state): State<AppState>,
    payload: Result<Json<SummarizeRequest>, JsonRejection>,
) -> Result<Json<SummarizeResponse>, ApiError> {
    let Json(payload) = payload?;
    let url = payload.validate().map_err(ApiError::InvalidInput)?;

    let record = match state.articles.summarize_url(&url).await {
        Ok(record) => record,
        Err(e) => {
            match &e {
                ScrapeError::Task(_) => error!(error = %e, "article processing failed"),
                _ => warn!(error = %e, "article could not be summarized"),
            }
            let expose_details = !state.config.environment().is_production();
            return Err(e.into_api_error(expose_details));
        }
    };

    info!(
        url = %record.url,
        ai_powered = record.ai_powered,
        original_words = record.original_words,
        summary_words = record.summary_words,
        "article summarized"
    );

    Ok(Json(SummarizeResponse {
        article: ArticleResponse::from(record),
    }))
}
