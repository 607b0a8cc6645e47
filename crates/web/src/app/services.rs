use std::sync::Arc;

use sqlx::PgPool;

use snipbox_infra::{
    InMemorySnippetStore, InMemoryUserStore, PostgresSnippetStore, PostgresUserStore, SnippetStore,
    UserStore,
};

/// Store handles shared by all handlers.
#[derive(Clone)]
pub struct AppStores {
    pub snippets: Arc<dyn SnippetStore>,
    pub users: Arc<dyn UserStore>,
}

impl AppStores {
    /// Process-local stores; data lives as long as the process.
    pub fn in_memory() -> Self {
        Self {
            snippets: Arc::new(InMemorySnippetStore::new()),
            users: Arc::new(InMemoryUserStore::new()),
        }
    }

    pub fn postgres(pool: PgPool) -> Self {
        Self {
            snippets: Arc::new(PostgresSnippetStore::new(pool.clone())),
            users: Arc::new(PostgresUserStore::new(pool)),
        }
    }
}
