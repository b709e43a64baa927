use thiserror::Error;

/// Failures talking to the remote inference service. These never reach
/// API callers; the façades log them and fall back to local behaviour.
#[derive(Error, Debug)]
pub enum InferenceError {
    #[error("inference request timed out")]
    Timeout,

    #[error("inference request failed: {0}")]
    Request(String),

    #[error("inference service returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("malformed inference response: {0}")]
    Decode(String),

    #[error("inference service returned no output")]
    EmptyResponse,

    #[error("no remote model for language '{0}'")]
    UnsupportedLanguage(String),
}

impl InferenceError {
    pub fn from_reqwest_error(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else if err.is_decode() {
            Self::Decode(err.to_string())
        } else {
            Self::Request(err.to_string())
        }
    }
}
