//! Registered user.

use chrono::{DateTime, Utc};

use snipbox_core::UserId;

use crate::password::PasswordHash;

/// A registered user as stored.
///
/// # Invariants
/// - `email` is unique across users (enforced by storage, not here).
/// - The clear-text password is never held; only its [`PasswordHash`].
#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub hashed_password: PasswordHash,
    pub created: DateTime<Utc>,
}
