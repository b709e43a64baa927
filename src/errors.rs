//! Errors returned by the HTTP handlers and their JSON rendering.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

pub const FETCH_FAILURE_MESSAGE: &str =
    "Unable to access the article. Please check the URL and try again.";
pub const FETCH_TIMEOUT_MESSAGE: &str =
    "The article took too long to respond. Please try again later.";
pub const EXTRACTION_FAILURE_MESSAGE: &str = "Could not extract content from this page. The article might be behind a paywall or require JavaScript.";
pub const INTERNAL_MESSAGE: &str = "Failed to process the article. Please try again.";

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    InvalidInput(String),

    #[error("could not fetch the article")]
    FetchFailure { timed_out: bool },

    #[error("could not extract article content")]
    ExtractionFailure,

    /// `details` is only rendered outside production.
    #[error("internal error")]
    Internal { details: Option<String> },
}

impl ApiError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::BAD_REQUEST,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            ApiError::InvalidInput(message) => message,
            ApiError::FetchFailure { timed_out: true } => FETCH_TIMEOUT_MESSAGE,
            ApiError::FetchFailure { timed_out: false } => FETCH_FAILURE_MESSAGE,
            ApiError::ExtractionFailure => EXTRACTION_FAILURE_MESSAGE,
            ApiError::Internal { .. } => INTERNAL_MESSAGE,
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidInput(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorResponse {
            message: self.message().to_string(),
            details: match self {
                ApiError::Internal { details } => details,
                _ => None,
            },
        };
        (status, Json(body)).into_response()
    }
}
