//! In-memory documentation cache.
//!
//! One entry per source identifier, holding the extracted text of the last
//! fetch. Fetch failures are cached too (as their message text) so a broken
//! source is not hammered on every query; an explicit clear is the only way
//! to force a refetch. Nothing is persisted across restarts.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Trait for a cache implementation.
#[async_trait]
pub trait Cache: Send + Sync {
    async fn get(&self, source: &str) -> Option<String>;
    async fn insert(&self, source: String, content: String);
    async fn contains_key(&self, source: &str) -> bool;
    async fn clear(&self);
}

#[derive(Debug, Clone, Default)]
pub struct InMemoryCache {
    entries: Arc<RwLock<HashMap<String, String>>>,
}

impl InMemoryCache {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Cache for InMemoryCache {
    async fn get(&self, source: &str) -> Option<String> {
        self.entries.read().await.get(source).cloned()
    }

    async fn insert(&self, source: String, content: String) {
        self.entries.write().await.insert(source, content);
    }

    async fn contains_key(&self, source: &str) -> bool {
        self.entries.read().await.contains_key(source)
    }

    async fn clear(&self) {
        self.entries.write().await.clear();
    }
}
