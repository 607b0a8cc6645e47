//! Snippet persistence boundary.

pub mod in_memory;
pub mod postgres;
pub mod r#trait;

pub use in_memory::InMemorySnippetStore;
pub use postgres::PostgresSnippetStore;
pub use r#trait::{LATEST_LIMIT, SnippetStore};
