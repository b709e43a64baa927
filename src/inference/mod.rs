//! Remote inference collaborators.
//!
//! Both traits are best-effort: callers treat every error as a signal to
//! use their local fallback.

pub mod client;
pub mod errors;
pub mod types;

pub use client::{InferenceClient, SUPPORTED_TRANSLATION_TARGETS};
pub use errors::InferenceError;

use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RemoteSummarizer: Send + Sync {
    async fn summarize(&self, text: &str) -> Result<String, InferenceError>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RemoteTranslator: Send + Sync {
    fn supports(&self, target_language: &str) -> bool;

    async fn translate(&self, text: &str, target_language: &str) -> Result<String, InferenceError>;
}
