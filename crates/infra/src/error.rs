//! Store error taxonomy and sqlx error mapping.
//!
//! ## Error Mapping
//!
//! | Source | Condition | StoreError |
//! |--------|-----------|------------|
//! | query returned no row | expired or absent snippet | `NoRecord` |
//! | `sqlx::Error::Database` | SQLSTATE `23505` on `users_uc_email` | `DuplicateEmail` |
//! | email lookup / password check | unknown email or wrong password | `InvalidCredentials` |
//! | any other `sqlx::Error` | connection, decode, pool closed, ... | `Database` |
//! | hashing / verification | allocation failure, malformed hash | `Password` |
//! | in-memory insert | `now + days` overflows | `WindowOutOfRange` |

use snipbox_auth::PasswordError;
use thiserror::Error;

/// SQLSTATE for `unique_violation`.
pub const UNIQUE_VIOLATION: &str = "23505";

/// Name of the unique constraint on `users.email`.
pub const USERS_EMAIL_CONSTRAINT: &str = "users_uc_email";

/// Outcome of a failed store operation.
///
/// The first three variants are domain outcomes handlers branch on; the rest
/// are faults.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The record does not exist or is no longer visible.
    #[error("no matching record found")]
    NoRecord,

    /// Another user already registered this email address.
    #[error("duplicate email")]
    DuplicateEmail,

    /// Unknown email or wrong password. Callers cannot tell the two apart.
    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("database error in {operation}: {source}")]
    Database {
        operation: &'static str,
        #[source]
        source: sqlx::Error,
    },

    #[error(transparent)]
    Password(#[from] PasswordError),

    /// `now + days` is not a representable timestamp.
    #[error("expiry window of {days} days is out of range")]
    WindowOutOfRange { days: i32 },

    /// The in-memory store's lock was poisoned by a panicking writer.
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

impl StoreError {
    /// True for outcomes a handler is expected to turn into a client-facing
    /// response rather than a server fault.
    pub fn is_domain(&self) -> bool {
        matches!(
            self,
            Self::NoRecord | Self::DuplicateEmail | Self::InvalidCredentials
        )
    }
}

pub(crate) fn map_sqlx_error(operation: &'static str, err: sqlx::Error) -> StoreError {
    match err {
        sqlx::Error::RowNotFound => StoreError::NoRecord,
        source => StoreError::Database { operation, source },
    }
}

/// Check whether `err` is a unique violation on `constraint`.
///
/// Both the SQLSTATE and the constraint name have to match: other unique
/// constraints must keep surfacing as plain database errors.
pub(crate) fn is_unique_violation_on(err: &sqlx::Error, constraint: &str) -> bool {
    let sqlx::Error::Database(db_err) = err else {
        return false;
    };
    db_err.code().as_deref() == Some(UNIQUE_VIOLATION) && db_err.constraint() == Some(constraint)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_not_found_maps_to_no_record() {
        assert!(matches!(
            map_sqlx_error("get_snippet", sqlx::Error::RowNotFound),
            StoreError::NoRecord
        ));
    }

    #[test]
    fn other_sqlx_errors_stay_faults() {
        let err = map_sqlx_error("latest_snippets", sqlx::Error::PoolClosed);
        assert!(matches!(
            err,
            StoreError::Database { operation: "latest_snippets", .. }
        ));
        assert!(!err.is_domain());
    }

    #[test]
    fn non_database_errors_are_not_unique_violations() {
        assert!(!is_unique_violation_on(&sqlx::Error::PoolClosed, USERS_EMAIL_CONSTRAINT));
    }

    #[test]
    fn domain_outcomes() {
        assert!(StoreError::NoRecord.is_domain());
        assert!(StoreError::DuplicateEmail.is_domain());
        assert!(StoreError::InvalidCredentials.is_domain());
        assert!(!StoreError::Unavailable("x".into()).is_domain());
    }
}
