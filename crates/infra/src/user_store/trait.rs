use snipbox_core::UserId;

use crate::error::StoreError;

/// Storage for registered users.
///
/// ## Credentials
///
/// Passwords cross this boundary in clear text only as arguments; they are
/// hashed before anything is written and never returned.
#[async_trait::async_trait]
pub trait UserStore: Send + Sync {
    /// Register a user.
    ///
    /// Fails with [`StoreError::DuplicateEmail`] when the email is taken.
    async fn insert(&self, name: &str, email: &str, password: &str) -> Result<UserId, StoreError>;

    /// Check an email/password pair and return the matching user id.
    ///
    /// Unknown emails and wrong passwords both yield
    /// [`StoreError::InvalidCredentials`]. A found record always goes through
    /// the full hash verification; an unknown email returns without hashing.
    async fn authenticate(&self, email: &str, password: &str) -> Result<UserId, StoreError>;

    /// Whether a user with this id exists.
    async fn exists(&self, id: UserId) -> Result<bool, StoreError>;
}
