use thiserror::Error;

use crate::errors::ApiError;
use crate::extractor::ExtractionError;
use crate::fetcher::FetchError;

#[derive(Error, Debug)]
pub enum ScrapeError {
    #[error("fetch failed: {0}")]
    Fetch(#[from] FetchError),

    #[error("extraction failed: {0}")]
    Extraction(#[from] ExtractionError),

    #[error("extraction task failed: {0}")]
    Task(String),
}

impl ScrapeError {
    /// Map to the caller-facing error. `expose_details` controls whether
    /// internal failure text is echoed back.
    pub fn into_api_error(self, expose_details: bool) -> ApiError {
        match self {
            ScrapeError::Fetch(e) => ApiError::FetchFailure {
                timed_out: e.is_timeout(),
            },
            ScrapeError::Extraction(_) => ApiError::ExtractionFailure,
            ScrapeError::Task(details) => ApiError::Internal {
                details: expose_details.then_some(details),
            },
        }
    }
}
