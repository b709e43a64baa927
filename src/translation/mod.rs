//! Translation façade: remote translation when configured and supported,
//! otherwise the original text with a notice.

pub mod dtos;
pub mod handlers;
pub mod languages;

use std::sync::Arc;

use tracing::{debug, instrument, warn};

use crate::extractor::language::is_written_in;
use crate::inference::RemoteTranslator;

pub const SOURCE_LANGUAGE: &str = "en";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslationOutcome {
    /// Text returned untouched: English target, or already in the target language.
    Passthrough(String),
    Translated(String),
    /// Annotated original text.
    Fallback { text: String, reason: String },
}

impl TranslationOutcome {
    pub fn kind(&self) -> &'static str {
        match self {
            TranslationOutcome::Passthrough(_) => "passthrough",
            TranslationOutcome::Translated(_) => "translated",
            TranslationOutcome::Fallback { .. } => "fallback",
        }
    }

    pub fn text(&self) -> &str {
        match self {
            TranslationOutcome::Passthrough(text)
            | TranslationOutcome::Translated(text)
            | TranslationOutcome::Fallback { text, .. } => text,
        }
    }

    pub fn into_text(self) -> String {
        match self {
            TranslationOutcome::Passthrough(text)
            | TranslationOutcome::Translated(text)
            | TranslationOutcome::Fallback { text, .. } => text,
        }
    }
}

#[derive(Clone, Default)]
pub struct Translator {
    remote: Option<Arc<dyn RemoteTranslator>>,
}

impl Translator {
    pub fn new(remote: Option<Arc<dyn RemoteTranslator>>) -> Self {
        Self { remote }
    }

    pub fn has_remote(&self) -> bool {
        self.remote.is_some()
    }

    #[instrument(skip(self, text), fields(text_chars = text.len()))]
    pub async fn translate(&self, text: &str, target_language: &str) -> TranslationOutcome {
        let target = target_language.trim().to_lowercase();

        if target == SOURCE_LANGUAGE || is_written_in(text, &target) {
            debug!(target_language = %target, "text already in target language");
            return TranslationOutcome::Passthrough(text.to_string());
        }

        let remote = match &self.remote {
            Some(remote) if remote.supports(&target) => remote,
            Some(_) => return fallback(text, &target, "unsupported target language"),
            None => return fallback(text, &target, "remote translation not configured"),
        };

        match remote.translate(text, &target).await {
            Ok(translated) => TranslationOutcome::Translated(translated),
            Err(e) => {
                warn!(error = %e, target_language = %target, "remote translation failed, returning original text");
                fallback(text, &target, &e.to_string())
            }
        }
    }
}

fn fallback(text: &str, target: &str, reason: &str) -> TranslationOutcome {
    TranslationOutcome::Fallback {
        text: languages::fallback_text(text, target),
        reason: reason.to_string(),
    }
}
