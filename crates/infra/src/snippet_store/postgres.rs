//! Postgres-backed snippet store.
//!
//! Timestamps are computed by the database (`NOW()`), so `created` and
//! `expires` share one clock even when several app instances write.

use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use tracing::instrument;

use snipbox_core::SnippetId;
use snipbox_snippets::Snippet;

use super::r#trait::{LATEST_LIMIT, SnippetStore};
use crate::error::{StoreError, map_sqlx_error};

#[derive(Debug, FromRow)]
struct SnippetRow {
    id: i64,
    title: String,
    content: String,
    created: DateTime<Utc>,
    expires: DateTime<Utc>,
}

impl From<SnippetRow> for Snippet {
    fn from(row: SnippetRow) -> Self {
        Snippet {
            id: SnippetId::new(row.id),
            title: row.title,
            content: row.content,
            created: row.created,
            expires: row.expires,
        }
    }
}

/// Snippet store over the `snippets` table.
#[derive(Debug, Clone)]
pub struct PostgresSnippetStore {
    pool: PgPool,
}

impl PostgresSnippetStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl SnippetStore for PostgresSnippetStore {
    #[instrument(skip(self, title, content))]
    async fn insert(
        &self,
        title: &str,
        content: &str,
        expires_days: i32,
    ) -> Result<SnippetId, StoreError> {
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO snippets (title, content, created, expires)
            VALUES ($1, $2, NOW(), NOW() + make_interval(days => $3))
            RETURNING id
            "#,
        )
        .bind(title)
        .bind(content)
        .bind(expires_days)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| StoreError::Database {
            operation: "insert_snippet",
            source: e,
        })?;

        Ok(SnippetId::new(id))
    }

    #[instrument(skip(self), fields(snippet_id = %id))]
    async fn get(&self, id: SnippetId) -> Result<Snippet, StoreError> {
        let row: Option<SnippetRow> = sqlx::query_as(
            r#"
            SELECT id, title, content, created, expires
            FROM snippets
            WHERE expires > NOW() AND id = $1
            "#,
        )
        .bind(id.get())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("get_snippet", e))?;

        row.map(Snippet::from).ok_or(StoreError::NoRecord)
    }

    #[instrument(skip(self))]
    async fn latest(&self) -> Result<Vec<Snippet>, StoreError> {
        // fetch_all fails as a whole if any row fails to decode.
        let rows: Vec<SnippetRow> = sqlx::query_as(
            r#"
            SELECT id, title, content, created, expires
            FROM snippets
            WHERE expires > NOW()
            ORDER BY id DESC
            LIMIT $1
            "#,
        )
        .bind(LATEST_LIMIT as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("latest_snippets", e))?;

        Ok(rows.into_iter().map(Snippet::from).collect())
    }
}
