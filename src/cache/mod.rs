//! Result cache keyed by the submitted article URL.

pub mod memory;
pub mod model;

pub use memory::MemoryCache;
pub use model::ArticleRecord;

use async_trait::async_trait;

/// Insert-if-absent store of completed summaries. Entries never expire
/// and are never replaced.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ArticleCache: Send + Sync {
    async fn get(&self, url: &str) -> Option<ArticleRecord>;

    /// Stores `record` unless its URL is already present; returns whichever
    /// record the cache holds afterwards.
    async fn put_if_absent(&self, record: ArticleRecord) -> ArticleRecord;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
