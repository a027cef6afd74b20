//! In-process content store.
//!
//! Rows live in a `BTreeMap` keyed by id, so listings come back in id order.
//! Ids come from a monotonically increasing counter and are never reused.

use crate::db::ContentStore;
use crate::error::Result;
use crate::models::Content;
use async_trait::async_trait;
use chrono::Utc;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};
use tokio::sync::RwLock;

#[derive(Debug, Default)]
pub struct MemoryContentStore {
    last_id: AtomicI64,
    rows: RwLock<BTreeMap<i64, Content>>,
}

impl MemoryContentStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ContentStore for MemoryContentStore {
    async fn insert(&self, title: &str, body: &str) -> Result<Content> {
        let id = self.last_id.fetch_add(1, Ordering::SeqCst) + 1;
        let now = Utc::now();
        let content = Content {
            id,
            title: title.to_string(),
            body: body.to_string(),
            created_at: now,
            updated_at: now,
        };

        self.rows.write().await.insert(id, content.clone());
        Ok(content)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Content>> {
        Ok(self.rows.read().await.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Content>> {
        Ok(self.rows.read().await.values().cloned().collect())
    }

    async fn find_by_title_contains(&self, fragment: &str) -> Result<Vec<Content>> {
        let needle = fragment.to_lowercase();
        Ok(self
            .rows
            .read()
            .await
            .values()
            .filter(|c| c.title.to_lowercase().contains(&needle))
            .cloned()
            .collect())
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool> {
        Ok(self.rows.read().await.contains_key(&id))
    }

    async fn update(&self, id: i64, title: &str, body: &str) -> Result<Option<Content>> {
        let mut rows = self.rows.write().await;
        let Some(content) = rows.get_mut(&id) else {
            return Ok(None);
        };

        content.title = title.to_string();
        content.body = body.to_string();
        content.updated_at = Utc::now().max(content.updated_at);

        Ok(Some(content.clone()))
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool> {
        Ok(self.rows.write().await.remove(&id).is_some())
    }

    async fn health_check(&self) -> Result<()> {
        Ok(())
    }
}
