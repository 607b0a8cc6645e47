//! Postgres-backed user store.

use sqlx::PgPool;
use tracing::instrument;

use snipbox_auth::PasswordHash;
use snipbox_core::UserId;

use super::r#trait::UserStore;
use super::{hash_password, verify_password};
use crate::error::{StoreError, USERS_EMAIL_CONSTRAINT, is_unique_violation_on, map_sqlx_error};

/// User store over the `users` table.
///
/// Email uniqueness is enforced by the `users_uc_email` constraint; the store
/// only recognises and translates the violation.
#[derive(Debug, Clone)]
pub struct PostgresUserStore {
    pool: PgPool,
}

impl PostgresUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl UserStore for PostgresUserStore {
    #[instrument(skip_all)]
    async fn insert(&self, name: &str, email: &str, password: &str) -> Result<UserId, StoreError> {
        let hashed_password = hash_password(password).await?;

        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO users (name, email, hashed_password, created)
            VALUES ($1, $2, $3, NOW())
            RETURNING id
            "#,
        )
        .bind(name)
        .bind(email)
        .bind(hashed_password.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation_on(&e, USERS_EMAIL_CONSTRAINT) {
                StoreError::DuplicateEmail
            } else {
                StoreError::Database {
                    operation: "insert_user",
                    source: e,
                }
            }
        })?;

        Ok(UserId::new(id))
    }

    #[instrument(skip_all)]
    async fn authenticate(&self, email: &str, password: &str) -> Result<UserId, StoreError> {
        let row: Option<(i64, String)> =
            sqlx::query_as("SELECT id, hashed_password FROM users WHERE email = $1")
                .bind(email)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| map_sqlx_error("authenticate_user", e))?;

        let Some((id, phc)) = row else {
            return Err(StoreError::InvalidCredentials);
        };

        if verify_password(PasswordHash::from_phc(phc), password).await? {
            Ok(UserId::new(id))
        } else {
            Err(StoreError::InvalidCredentials)
        }
    }

    #[instrument(skip(self))]
    async fn exists(&self, id: UserId) -> Result<bool, StoreError> {
        sqlx::query_scalar("SELECT EXISTS(SELECT true FROM users WHERE id = $1)")
            .bind(id.get())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("user_exists", e))
    }
}
