use crate::db::ContentStore;
use crate::error::Result;
use crate::models::Content;
use async_trait::async_trait;
use sqlx::migrate::Migrator;
use sqlx::PgPool;

/// Embedded schema migrations for the `contents` table
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// PostgreSQL-backed content store
#[derive(Clone)]
pub struct PgContentStore {
    pool: PgPool,
}

impl PgContentStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ContentStore for PgContentStore {
    async fn insert(&self, title: &str, body: &str) -> Result<Content> {
        // NOW() is fixed per transaction, so both timestamps match
        let content = sqlx::query_as::<_, Content>(
            r#"
            INSERT INTO contents (title, body, created_at, updated_at)
            VALUES ($1, $2, NOW(), NOW())
            RETURNING id, title, body, created_at, updated_at
            "#,
        )
        .bind(title)
        .bind(body)
        .fetch_one(&self.pool)
        .await?;

        Ok(content)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Content>> {
        let content = sqlx::query_as::<_, Content>(
            r#"
            SELECT id, title, body, created_at, updated_at
            FROM contents
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(content)
    }

    async fn find_all(&self) -> Result<Vec<Content>> {
        let contents = sqlx::query_as::<_, Content>(
            r#"
            SELECT id, title, body, created_at, updated_at
            FROM contents
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(contents)
    }

    async fn find_by_title_contains(&self, fragment: &str) -> Result<Vec<Content>> {
        // strpos keeps `%` and `_` in the fragment literal, unlike LIKE
        let contents = sqlx::query_as::<_, Content>(
            r#"
            SELECT id, title, body, created_at, updated_at
            FROM contents
            WHERE strpos(lower(title), lower($1)) > 0
            ORDER BY id
            "#,
        )
        .bind(fragment)
        .fetch_all(&self.pool)
        .await?;

        Ok(contents)
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool> {
        let (exists,) =
            sqlx::query_as::<_, (bool,)>("SELECT EXISTS(SELECT 1 FROM contents WHERE id = $1)")
                .bind(id)
                .fetch_one(&self.pool)
                .await?;

        Ok(exists)
    }

    async fn update(&self, id: i64, title: &str, body: &str) -> Result<Option<Content>> {
        let content = sqlx::query_as::<_, Content>(
            r#"
            UPDATE contents
            SET title = $2, body = $3, updated_at = GREATEST(NOW(), updated_at)
            WHERE id = $1
            RETURNING id, title, body, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(title)
        .bind(body)
        .fetch_optional(&self.pool)
        .await?;

        Ok(content)
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM contents WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn health_check(&self) -> Result<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
