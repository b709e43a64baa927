use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use tracing::info;

use crate::{
    app_state::AppState,
    errors::{ApiError, ErrorResponse},
    translation::dtos::{TranslateRequest, TranslateResponse},
};

#[utoipa::path(
    post,
    path = "/api/translate",
    tag = "translation",
    request_body = TranslateRequest,
    responses(
        (status = 200, description = "Translated text, or the original text when no translation is available", body = TranslateResponse),
        (status = 400, description = "Missing text or target language", body = ErrorResponse)
    )
)]
pub async fn translate(
    State(state): State<AppState>,
    payload: Result<Json<TranslateRequest>, JsonRejection>,
) -> Result<Json<TranslateResponse>, ApiError> {
    let Json(payload) = payload?;
    payload.validate().map_err(ApiError::InvalidInput)?;

    let outcome = state
        .translator
        .translate(&payload.text, &payload.target_language)
        .await;
    info!(
        target_language = %payload.target_language.trim(),
        outcome = outcome.kind(),
        "translation served"
    );

    Ok(Json(TranslateResponse {
        translated_text: outcome.into_text(),
    }))
}
