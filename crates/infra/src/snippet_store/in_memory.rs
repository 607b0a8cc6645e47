use std::collections::BTreeMap;
use std::sync::RwLock;

use chrono::{DateTime, Duration, Utc};

use snipbox_core::SnippetId;
use snipbox_snippets::Snippet;

use super::r#trait::{LATEST_LIMIT, SnippetStore};
use crate::error::StoreError;

#[derive(Debug, Default)]
struct SnippetTable {
    last_id: i64,
    rows: BTreeMap<SnippetId, Snippet>,
}

/// In-memory snippet store.
///
/// Intended for tests/dev. Ids are assigned sequentially from 1, like a
/// `BIGSERIAL` column.
#[derive(Debug, Default)]
pub struct InMemorySnippetStore {
    table: RwLock<SnippetTable>,
}

impl InMemorySnippetStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a snippet with explicit timestamps.
    ///
    /// Lets tests and seed data create snippets that are already expired.
    pub fn insert_at(
        &self,
        title: &str,
        content: &str,
        created: DateTime<Utc>,
        expires: DateTime<Utc>,
    ) -> Result<SnippetId, StoreError> {
        let mut table = self
            .table
            .write()
            .map_err(|_| StoreError::Unavailable("snippet table lock poisoned".to_string()))?;

        table.last_id += 1;
        let id = SnippetId::new(table.last_id);
        table.rows.insert(
            id,
            Snippet {
                id,
                title: title.to_string(),
                content: content.to_string(),
                created,
                expires,
            },
        );
        Ok(id)
    }

    /// Number of stored rows, visible or not.
    pub fn len(&self) -> usize {
        self.table.read().map(|t| t.rows.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait::async_trait]
impl SnippetStore for InMemorySnippetStore {
    async fn insert(
        &self,
        title: &str,
        content: &str,
        expires_days: i32,
    ) -> Result<SnippetId, StoreError> {
        let created = Utc::now();
        let expires = Duration::try_days(i64::from(expires_days))
            .and_then(|window| created.checked_add_signed(window))
            .ok_or(StoreError::WindowOutOfRange { days: expires_days })?;
        self.insert_at(title, content, created, expires)
    }

    async fn get(&self, id: SnippetId) -> Result<Snippet, StoreError> {
        let now = Utc::now();
        let table = self
            .table
            .read()
            .map_err(|_| StoreError::Unavailable("snippet table lock poisoned".to_string()))?;

        table
            .rows
            .get(&id)
            .filter(|s| s.is_visible_at(now))
            .cloned()
            .ok_or(StoreError::NoRecord)
    }

    async fn latest(&self) -> Result<Vec<Snippet>, StoreError> {
        let now = Utc::now();
        let table = self
            .table
            .read()
            .map_err(|_| StoreError::Unavailable("snippet table lock poisoned".to_string()))?;

        Ok(table
            .rows
            .values()
            .rev()
            .filter(|s| s.is_visible_at(now))
            .take(LATEST_LIMIT)
            .cloned()
            .collect())
    }
}
