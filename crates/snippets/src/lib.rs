//! Snippets domain module.
//!
//! Pure domain types for time-bounded text snippets and the form used to
//! create them (no IO, no HTTP, no storage).

pub mod form;
pub mod snippet;

pub use form::{CreateSnippetForm, DEFAULT_EXPIRES_DAYS, PERMITTED_EXPIRES_DAYS, TITLE_MAX_RUNES};
pub use snippet::Snippet;
