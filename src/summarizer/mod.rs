//! Summary production: remote inference first when configured, then the
//! local extractive summarizer.

pub mod extractive;
pub mod model;
pub mod scoring;
pub mod sentences;

pub use extractive::PLACEHOLDER_SUMMARY;
pub use model::{ScoredSentence, SummaryResult};
pub use scoring::ScoringProfile;

use std::sync::Arc;

use tracing::{debug, instrument, warn};

use crate::extractor::normalizer::normalize_text;
use crate::inference::RemoteSummarizer;

/// How a summary was produced.
#[derive(Debug, Clone, PartialEq)]
pub enum SummaryOutcome {
    Remote(SummaryResult),
    Local(SummaryResult),
    /// The remote summarizer was configured but failed; `result` is local.
    Fallback { result: SummaryResult, reason: String },
}

impl SummaryOutcome {
    pub fn ai_powered(&self) -> bool {
        matches!(self, SummaryOutcome::Remote(_))
    }

    pub fn result(&self) -> &SummaryResult {
        match self {
            SummaryOutcome::Remote(result)
            | SummaryOutcome::Local(result)
            | SummaryOutcome::Fallback { result, .. } => result,
        }
    }

    pub fn into_result(self) -> SummaryResult {
        match self {
            SummaryOutcome::Remote(result)
            | SummaryOutcome::Local(result)
            | SummaryOutcome::Fallback { result, .. } => result,
        }
    }
}

#[derive(Clone)]
pub struct Summarizer {
    remote: Option<Arc<dyn RemoteSummarizer>>,
    profile: ScoringProfile,
}

impl Summarizer {
    pub fn new(remote: Option<Arc<dyn RemoteSummarizer>>, profile: ScoringProfile) -> Self {
        Self { remote, profile }
    }

    pub fn local(profile: ScoringProfile) -> Self {
        Self::new(None, profile)
    }

    pub fn has_remote(&self) -> bool {
        self.remote.is_some()
    }

    pub fn profile(&self) -> &ScoringProfile {
        &self.profile
    }

    /// Never fails: every remote problem degrades to the local summary.
    #[instrument(skip_all, fields(content_chars = content.len()))]
    pub async fn summarize(&self, content: &str) -> SummaryOutcome {
        let local = extractive::summarize(content, &self.profile);

        let Some(remote) = &self.remote else {
            return SummaryOutcome::Local(local);
        };

        match remote.summarize(content).await {
            Ok(summary) => {
                let summary = normalize_text(&summary);
                if summary.is_empty() {
                    warn!("remote summarizer returned an empty summary, using local summary");
                    return SummaryOutcome::Fallback {
                        result: local,
                        reason: "empty remote summary".to_string(),
                    };
                }
                debug!(summary_chars = summary.len(), "remote summary accepted");
                SummaryOutcome::Remote(SummaryResult {
                    summary,
                    key_points: local.key_points,
                })
            }
            Err(e) => {
                warn!(error = %e, "remote summarizer failed, using local summary");
                SummaryOutcome::Fallback {
                    result: local,
                    reason: e.to_string(),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inference::{InferenceError, MockRemoteSummarizer};

    const CONTENT: &str = "The city council approved a new transit budget on Tuesday evening. \
        The plan adds twelve bus routes and extends service hours across the region. \
        Officials expect ridership to increase by 15% within the first year. \
        Several residents spoke in favour of the proposal during the meeting.";

    fn with_remote(mock: MockRemoteSummarizer) -> Summarizer {
        Summarizer::new(Some(Arc::new(mock)), ScoringProfile::default())
    }

    #[tokio::test]
    async fn test_local_only() {
        let summarizer = Summarizer::local(ScoringProfile::default());
        let outcome = summarizer.summarize(CONTENT).await;
        assert!(matches!(outcome, SummaryOutcome::Local(_)));
        assert!(!outcome.ai_powered());
        assert_eq!(
            outcome.into_result(),
            extractive::summarize(CONTENT, &ScoringProfile::default())
        );
    }

    #[tokio::test]
    async fn test_remote_summary_keeps_local_key_points() {
        let mut mock = MockRemoteSummarizer::new();
        mock.expect_summarize()
            .times(1)
            .returning(|_| Ok("  The council  approved a transit budget.  ".to_string()));

        let outcome = with_remote(mock).summarize(CONTENT).await;
        assert!(outcome.ai_powered());

        let local = extractive::summarize(CONTENT, &ScoringProfile::default());
        let result = outcome.result();
        assert_eq!(result.summary, "The council approved a transit budget.");
        assert_eq!(result.key_points, local.key_points);
    }

    #[tokio::test]
    async fn test_remote_failure_falls_back() {
        let mut mock = MockRemoteSummarizer::new();
        mock.expect_summarize()
            .times(1)
            .returning(|_| Err(InferenceError::Timeout));

        let outcome = with_remote(mock).summarize(CONTENT).await;
        assert!(!outcome.ai_powered());
        match outcome {
            SummaryOutcome::Fallback { result, reason } => {
                assert_eq!(result, extractive::summarize(CONTENT, &ScoringProfile::default()));
                assert!(!reason.is_empty());
            }
            other => panic!("expected fallback, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_empty_remote_summary_falls_back() {
        let mut mock = MockRemoteSummarizer::new();
        mock.expect_summarize()
            .times(1)
            .returning(|_| Ok("   ".to_string()));

        let outcome = with_remote(mock).summarize(CONTENT).await;
        assert!(matches!(outcome, SummaryOutcome::Fallback { .. }));
    }
}
