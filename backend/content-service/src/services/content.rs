/// Content service - lookups, existence checks and response mapping
use crate::db::ContentStore;
use crate::error::{AppError, Result};
use crate::metrics::record_operation;
use crate::models::{ContentResponse, NewContent};
use std::sync::Arc;

/// Stateless orchestration over a [`ContentStore`].
///
/// Built once at startup and shared across workers; it holds no locks and
/// caches nothing between requests.
#[derive(Clone)]
pub struct ContentService {
    store: Arc<dyn ContentStore>,
}

impl ContentService {
    pub fn new(store: Arc<dyn ContentStore>) -> Self {
        Self { store }
    }

    /// Readiness probe passthrough to the store
    pub async fn health_check(&self) -> Result<()> {
        self.store.health_check().await
    }

    /// List every document
    pub async fn list_all(&self) -> Result<Vec<ContentResponse>> {
        let result = self.store.find_all().await.map(into_responses);
        observe("list", result)
    }

    /// Search titles by substring; an absent or empty query lists everything
    pub async fn search(&self, query: Option<&str>) -> Result<Vec<ContentResponse>> {
        match query {
            Some(fragment) if !fragment.is_empty() => {
                tracing::debug!(fragment, "searching content by title");
                let result = self
                    .store
                    .find_by_title_contains(fragment)
                    .await
                    .map(into_responses);
                observe("search", result)
            }
            _ => self.list_all().await,
        }
    }

    /// Get a document by id
    pub async fn get_by_id(&self, id: i64) -> Result<ContentResponse> {
        let result = match self.store.find_by_id(id).await {
            Ok(Some(content)) => Ok(content.into()),
            Ok(None) => Err(AppError::NotFound(id)),
            Err(e) => Err(e),
        };
        observe("get", result)
    }

    /// Create a new document
    pub async fn create(&self, payload: NewContent) -> Result<ContentResponse> {
        let result = self.store.insert(&payload.title, &payload.body).await;

        if let Ok(content) = &result {
            tracing::info!(content_id = content.id, "content created");
        }

        observe("create", result.map(ContentResponse::from))
    }

    /// Replace title and body of an existing document
    pub async fn update(&self, id: i64, payload: NewContent) -> Result<ContentResponse> {
        let result = self.update_existing(id, payload).await;
        observe("update", result)
    }

    async fn update_existing(&self, id: i64, payload: NewContent) -> Result<ContentResponse> {
        if self.store.find_by_id(id).await?.is_none() {
            return Err(AppError::NotFound(id));
        }

        // The row can vanish between the lookup and the write
        let updated = self
            .store
            .update(id, &payload.title, &payload.body)
            .await?
            .ok_or(AppError::NotFound(id))?;

        tracing::info!(content_id = id, "content updated");
        Ok(updated.into())
    }

    /// Permanently delete a document
    pub async fn delete(&self, id: i64) -> Result<()> {
        let result = self.delete_existing(id).await;
        observe("delete", result)
    }

    async fn delete_existing(&self, id: i64) -> Result<()> {
        if !self.store.exists_by_id(id).await? {
            return Err(AppError::NotFound(id));
        }

        if !self.store.delete_by_id(id).await? {
            return Err(AppError::NotFound(id));
        }

        tracing::info!(content_id = id, "content deleted");
        Ok(())
    }
}

fn into_responses(contents: Vec<crate::models::Content>) -> Vec<ContentResponse> {
    contents.into_iter().map(ContentResponse::from).collect()
}

fn observe<T>(operation: &str, result: Result<T>) -> Result<T> {
    match &result {
        Ok(_) => record_operation(operation, "ok"),
        Err(e) => {
            if let AppError::Storage(cause) = e {
                tracing::error!(operation, error = %cause, "content store failure");
            }
            record_operation(operation, e.kind());
        }
    }
    result
}
