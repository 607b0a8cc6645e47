//! Infrastructure layer: Postgres access and the snippet/user stores.
//!
//! Every store has a Postgres implementation (production) and an in-memory one
//! (dev and tests). Both translate storage failures into [`StoreError`] so
//! handlers can branch on the same small set of outcomes either way. Nothing
//! in this crate logs; errors are returned to the caller.

pub mod db;
pub mod error;
pub mod snippet_store;
pub mod user_store;

pub use error::StoreError;
pub use snippet_store::{InMemorySnippetStore, PostgresSnippetStore, SnippetStore};
pub use user_store::{InMemoryUserStore, PostgresUserStore, UserStore};
