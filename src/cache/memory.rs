use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;

use super::{ArticleCache, ArticleRecord};

/// Process-wide cache held in a sharded concurrent map.
#[derive(Debug, Default)]
pub struct MemoryCache {
    entries: DashMap<String, ArticleRecord>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ArticleCache for MemoryCache {
    async fn get(&self, url: &str) -> Option<ArticleRecord> {
        self.entries.get(url).map(|entry| entry.value().clone())
    }

    async fn put_if_absent(&self, record: ArticleRecord) -> ArticleRecord {
        match self.entries.entry(record.url.clone()) {
            Entry::Occupied(existing) => existing.get().clone(),
            Entry::Vacant(slot) => slot.insert(record).value().clone(),
        }
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}
