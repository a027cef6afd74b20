/// Database access layer
///
/// `ContentStore` is the persistence seam used by the service layer:
/// - `content_repo`: PostgreSQL implementation over sqlx
/// - `memory`: in-process implementation for local runs and tests
pub mod content_repo;
pub mod memory;

pub use content_repo::{PgContentStore, MIGRATOR};
pub use memory::MemoryContentStore;

use crate::error::Result;
use crate::models::Content;
use async_trait::async_trait;

/// Durable keyed storage for content documents.
///
/// Lookups that find nothing return `None` or an empty vec; the only error
/// an implementation reports is `AppError::Storage`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContentStore: Send + Sync {
    /// Persist a new document; the store assigns the id and both timestamps.
    async fn insert(&self, title: &str, body: &str) -> Result<Content>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Content>>;

    /// Every document, ordered by id.
    async fn find_all(&self) -> Result<Vec<Content>>;

    /// Documents whose title contains `fragment`, ignoring case, ordered by id.
    async fn find_by_title_contains(&self, fragment: &str) -> Result<Vec<Content>>;

    async fn exists_by_id(&self, id: i64) -> Result<bool>;

    /// Replace title and body and refresh `updated_at`.
    /// Returns `None` when the row no longer exists.
    async fn update(&self, id: i64, title: &str, body: &str) -> Result<Option<Content>>;

    /// Hard delete. Returns `false` when nothing was removed.
    async fn delete_by_id(&self, id: i64) -> Result<bool>;

    /// Connectivity probe for readiness checks.
    async fn health_check(&self) -> Result<()>;
}
