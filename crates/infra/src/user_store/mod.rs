//! User persistence boundary.

pub mod in_memory;
pub mod postgres;
pub mod r#trait;

pub use in_memory::InMemoryUserStore;
pub use postgres::PostgresUserStore;
pub use r#trait::UserStore;

use snipbox_auth::{PasswordError, PasswordHash};

use crate::error::StoreError;

/// Hash on the blocking pool; Argon2 would otherwise stall a runtime worker.
pub(crate) async fn hash_password(password: &str) -> Result<PasswordHash, StoreError> {
    let password = password.to_owned();
    tokio::task::spawn_blocking(move || PasswordHash::generate(&password))
        .await
        .map_err(|e| PasswordError::Hash(format!("hashing task failed: {e}")))?
        .map_err(StoreError::from)
}

/// Run the full verification routine on the blocking pool.
pub(crate) async fn verify_password(hash: PasswordHash, password: &str) -> Result<bool, StoreError> {
    let password = password.to_owned();
    tokio::task::spawn_blocking(move || hash.verify(&password))
        .await
        .map_err(|e| PasswordError::Verify(format!("verification task failed: {e}")))?
        .map_err(StoreError::from)
}
