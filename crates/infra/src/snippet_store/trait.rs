use snipbox_core::SnippetId;
use snipbox_snippets::Snippet;

use crate::error::StoreError;

/// Maximum number of snippets returned by [`SnippetStore::latest`].
pub const LATEST_LIMIT: usize = 10;

/// Storage for snippets.
///
/// ## Visibility
///
/// Reads only ever see snippets whose `expires` lies in the future. An expired
/// snippet and one that never existed are indistinguishable to callers: both
/// yield [`StoreError::NoRecord`] from `get` and are absent from `latest`.
#[async_trait::async_trait]
pub trait SnippetStore: Send + Sync {
    /// Persist a snippet with `created = now` and `expires = now + expires_days`.
    ///
    /// `expires_days` is expected to be validated by the caller.
    async fn insert(
        &self,
        title: &str,
        content: &str,
        expires_days: i32,
    ) -> Result<SnippetId, StoreError>;

    /// Fetch a visible snippet.
    async fn get(&self, id: SnippetId) -> Result<Snippet, StoreError>;

    /// Up to [`LATEST_LIMIT`] visible snippets, newest (highest id) first.
    ///
    /// An empty store yields an empty vec, never an error.
    async fn latest(&self) -> Result<Vec<Snippet>, StoreError>;
}
