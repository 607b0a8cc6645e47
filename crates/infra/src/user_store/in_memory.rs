use std::sync::Mutex;

use chrono::Utc;

use snipbox_auth::User;
use snipbox_core::UserId;

use super::r#trait::UserStore;
use super::{hash_password, verify_password};
use crate::error::StoreError;

#[derive(Debug, Default)]
struct UserTable {
    last_id: i64,
    users: Vec<User>,
}

/// In-memory user store.
///
/// Intended for tests/dev. Emails are unique, compared exactly like the
/// Postgres unique constraint does (case-sensitive).
#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    table: Mutex<UserTable>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, UserTable>, StoreError> {
        self.table
            .lock()
            .map_err(|_| StoreError::Unavailable("user table lock poisoned".to_string()))
    }
}

#[async_trait::async_trait]
impl UserStore for InMemoryUserStore {
    async fn insert(&self, name: &str, email: &str, password: &str) -> Result<UserId, StoreError> {
        let hashed_password = hash_password(password).await?;

        let mut table = self.lock()?;
        if table.users.iter().any(|u| u.email == email) {
            return Err(StoreError::DuplicateEmail);
        }

        table.last_id += 1;
        let id = UserId::new(table.last_id);
        table.users.push(User {
            id,
            name: name.to_string(),
            email: email.to_string(),
            hashed_password,
            created: Utc::now(),
        });
        Ok(id)
    }

    async fn authenticate(&self, email: &str, password: &str) -> Result<UserId, StoreError> {
        let (id, hash) = {
            let table = self.lock()?;
            let user = table
                .users
                .iter()
                .find(|u| u.email == email)
                .ok_or(StoreError::InvalidCredentials)?;
            (user.id, user.hashed_password.clone())
        };

        if verify_password(hash, password).await? {
            Ok(id)
        } else {
            Err(StoreError::InvalidCredentials)
        }
    }

    async fn exists(&self, id: UserId) -> Result<bool, StoreError> {
        Ok(self.lock()?.users.iter().any(|u| u.id == id))
    }
}
