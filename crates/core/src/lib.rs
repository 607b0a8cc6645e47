//! `snipbox-core`: shared building blocks with no IO.
//!
//! Holds the integer identifiers used by both records and the form
//! validation framework that every HTML form reuses.

pub mod error;
pub mod id;
pub mod validator;

pub use error::IdError;
pub use id::{SnippetId, UserId};
pub use validator::{FullPattern, Problems, Validate};
